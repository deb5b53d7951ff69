//! Wire form of a [`Fragment`] for external transports.
//!
//! A fragment is written as a short magic marker, the length of the encoded
//! [`FragmentHeader`], the header itself, and finally the raw payload bytes.
//! The payload length is implied by the end of the buffer.

use bincode::{
    config,
    decode_from_slice,
    encode_to_vec,
    error::{DecodeError, EncodeError},
};

use super::{Fragment, FragmentHeader};

/// Magic prefix that marks an encoded fragment.
pub const FRAGMENT_MAGIC: &[u8; 4] = b"SFRG";

const LEN_PREFIX: usize = std::mem::size_of::<u16>();

/// Encode a fragment for transport.
///
/// The returned buffer layout is:
/// `[FRAGMENT_MAGIC][u16 header_len][header bytes][fragment payload]`.
///
/// # Errors
///
/// Returns an [`EncodeError`] if the header cannot be encoded.
pub fn encode_fragment(fragment: &Fragment) -> Result<Vec<u8>, EncodeError> {
    let header_bytes = encode_to_vec(*fragment.header(), config::standard())?;
    let header_len = u16::try_from(header_bytes.len())
        .map_err(|_| EncodeError::Other("fragment header length must fit within u16::MAX"))?;

    let payload = fragment.data();
    let mut buf =
        Vec::with_capacity(FRAGMENT_MAGIC.len() + LEN_PREFIX + header_bytes.len() + payload.len());
    buf.extend_from_slice(FRAGMENT_MAGIC);
    buf.extend_from_slice(&header_len.to_be_bytes());
    buf.extend_from_slice(&header_bytes);
    buf.extend_from_slice(payload);
    Ok(buf)
}

/// Attempt to decode a fragment.
///
/// Returns `Ok(Some(fragment))` when `bytes` starts with the marker and a
/// valid header, `Ok(None)` when the marker is absent, or an error if the
/// marker is present but decoding fails.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the header is truncated, its advertised
/// length disagrees with the bytes consumed, or the payload is longer than
/// `u16::MAX` bytes.
pub fn decode_fragment(bytes: &[u8]) -> Result<Option<Fragment>, DecodeError> {
    let Some(rest) = bytes.strip_prefix(FRAGMENT_MAGIC.as_slice()) else {
        return Ok(None);
    };

    let Some((len_bytes, rest)) = rest.split_first_chunk::<LEN_PREFIX>() else {
        return Err(DecodeError::UnexpectedEnd {
            additional: LEN_PREFIX - rest.len(),
        });
    };
    let header_len = usize::from(u16::from_be_bytes(*len_bytes));

    if rest.len() < header_len {
        return Err(DecodeError::UnexpectedEnd {
            additional: header_len - rest.len(),
        });
    }
    let (header_bytes, payload) = rest.split_at(header_len);

    let (header, consumed) =
        decode_from_slice::<FragmentHeader, _>(header_bytes, config::standard())?;
    if consumed != header_len {
        return Err(DecodeError::OtherString(
            "fragment header length mismatch".to_string(),
        ));
    }

    Fragment::from_parts(header, payload)
        .map(Some)
        .map_err(|err| DecodeError::OtherString(err.to_string()))
}
