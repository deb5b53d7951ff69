//! The owned fragment value handed between splitter, transport and
//! reassembler.

use super::{FragmentError, FragmentHeader, FragmentIndex, MessageId};

/// One contiguous byte range of an original string.
///
/// A `Fragment` is immutable once built. Cloning copies the payload into an
/// independent buffer; moving transfers the buffer.
///
/// # Examples
///
/// ```
/// use fragmentator::fragment::{Fragment, FragmentIndex, MessageId};
/// let fragment = Fragment::new(MessageId::new(0), FragmentIndex::new(1), 2, "TEST")
///     .expect("payload fits in a fragment");
/// assert_eq!(fragment.id(), MessageId::new(0));
/// assert_eq!(fragment.fid(), FragmentIndex::new(1));
/// assert_eq!(fragment.total(), 2);
/// assert_eq!(fragment.size(), 4);
/// assert_eq!(fragment.data(), b"TEST");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fragment {
    header: FragmentHeader,
    data: Box<[u8]>,
}

impl Fragment {
    /// Build a fragment from its metadata and payload.
    ///
    /// The payload size is derived from `data`. `fid < total` is not checked
    /// here; the reassembler rejects fragments that violate it.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError::PayloadTooLarge`] if `data` is longer than
    /// `u16::MAX` bytes.
    pub fn new(
        id: MessageId,
        fid: FragmentIndex,
        total: u16,
        data: impl Into<Vec<u8>>,
    ) -> Result<Self, FragmentError> {
        Self::from_parts(FragmentHeader::new(id, fid, total), data)
    }

    /// Build a fragment from an existing header.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError::PayloadTooLarge`] if `data` is longer than
    /// `u16::MAX` bytes.
    pub fn from_parts(
        header: FragmentHeader,
        data: impl Into<Vec<u8>>,
    ) -> Result<Self, FragmentError> {
        let data = data.into().into_boxed_slice();
        if u16::try_from(data.len()).is_err() {
            return Err(FragmentError::PayloadTooLarge { len: data.len() });
        }
        Ok(Self { header, data })
    }

    /// Build a fragment whose payload length the caller has already bounded.
    pub(super) fn from_bounded_parts(header: FragmentHeader, data: Box<[u8]>) -> Self {
        debug_assert!(u16::try_from(data.len()).is_ok(), "fragment payload exceeds u16::MAX");
        Self { header, data }
    }

    /// Return the fragment header.
    #[must_use]
    pub const fn header(&self) -> &FragmentHeader { &self.header }

    /// Identifier of the parent message.
    #[must_use]
    pub const fn id(&self) -> MessageId { self.header.message_id() }

    /// Position of this fragment within its parent message.
    #[must_use]
    pub const fn fid(&self) -> FragmentIndex { self.header.fragment_index() }

    /// Number of fragments the parent message was split into.
    #[must_use]
    pub const fn total(&self) -> u16 { self.header.total() }

    /// Payload length in bytes.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "constructors reject payloads longer than u16::MAX"
    )]
    #[must_use]
    pub fn size(&self) -> u16 { self.data.len() as u16 }

    /// Borrow the payload bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] { &self.data }

    /// Consume the fragment, returning the owned payload.
    #[must_use]
    pub fn into_data(self) -> Box<[u8]> { self.data }

    /// Consume the fragment, returning its components.
    #[must_use]
    pub fn into_parts(self) -> (FragmentHeader, Box<[u8]>) { (self.header, self.data) }
}

impl From<&Fragment> for Fragment {
    fn from(fragment: &Fragment) -> Self { fragment.clone() }
}
