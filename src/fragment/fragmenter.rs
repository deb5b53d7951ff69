//! Outbound helper that splits strings into a fixed number of fragments.
//!
//! [`Fragmenter`] owns the message identifier counter. Each string handed to
//! [`Fragmenter::split`] receives the next identifier and is cut into
//! `num_fragments` contiguous byte ranges; the last range absorbs any
//! remainder so concatenating fragments in index order reproduces the input.
//!
//! The counter is plain mutable state. It is never reset, wraps after
//! `u16::MAX`, and is not synchronised: share a `Fragmenter` across threads
//! only behind a caller-owned lock.

use log::{debug, warn};

use super::{Fragment, FragmentHeader, FragmentIndex, MessageId, SplitError};

/// Splits strings into fragment-count-sized pieces.
#[derive(Debug, Default)]
pub struct Fragmenter {
    next_message_id: MessageId,
}

impl Fragmenter {
    /// Create a fragmenter whose first message receives identifier `0`.
    #[must_use]
    pub const fn new() -> Self { Self::with_starting_id(MessageId::new(0)) }

    /// Create a fragmenter starting from a specific [`MessageId`].
    #[must_use]
    pub const fn with_starting_id(start_at: MessageId) -> Self {
        Self {
            next_message_id: start_at,
        }
    }

    /// Return the identifier the next split string will receive.
    #[must_use]
    pub const fn next_message_id(&self) -> MessageId { self.next_message_id }

    fn allocate_message_id(&mut self) -> MessageId {
        let current = self.next_message_id;
        self.next_message_id = current.wrapping_next();
        if self.next_message_id.get() == 0 {
            warn!("message id counter wrapped after {current}");
        }
        current
    }

    /// Split every string in `strings` into `num_fragments` fragments.
    ///
    /// Fragments are returned grouped by string, in input order, and by
    /// increasing fragment index within each string. Each string is given a
    /// fresh identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use fragmentator::fragment::Fragmenter;
    /// let mut fragmenter = Fragmenter::new();
    /// let fragments = fragmenter.split(&["TESTTE"], 4).expect("valid split");
    /// let sizes: Vec<u16> = fragments.iter().map(|f| f.size()).collect();
    /// assert_eq!(sizes, [1, 1, 1, 3]);
    /// assert_eq!(fragments[3].data(), b"TTE");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::EmptyInput`] when `strings` is empty,
    /// [`SplitError::ZeroFragments`] when `num_fragments` is zero,
    /// [`SplitError::TooManyFragments`] when a string has fewer bytes than
    /// `num_fragments`, and [`SplitError::FragmentTooLarge`] when a fragment
    /// would exceed `u16::MAX` bytes. Arguments are validated before any
    /// fragment is built or identifier consumed.
    pub fn split<S: AsRef<str>>(
        &mut self,
        strings: &[S],
        num_fragments: u16,
    ) -> Result<Vec<Fragment>, SplitError> {
        validate(strings, num_fragments)?;

        let mut fragments =
            Vec::with_capacity(strings.len().saturating_mul(usize::from(num_fragments)));
        for string in strings {
            let message_id = self.allocate_message_id();
            push_fragments(&mut fragments, message_id, string.as_ref().as_bytes(), num_fragments);
        }

        debug!(
            "split strings into fragments: strings={}, fragments_each={num_fragments}, \
             next_id={}",
            strings.len(),
            self.next_message_id
        );
        Ok(fragments)
    }

    /// Split a single string; see [`Fragmenter::split`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Fragmenter::split`].
    pub fn split_one(
        &mut self,
        string: &str,
        num_fragments: u16,
    ) -> Result<Vec<Fragment>, SplitError> {
        self.split(&[string], num_fragments)
    }
}

fn validate<S: AsRef<str>>(strings: &[S], num_fragments: u16) -> Result<(), SplitError> {
    if strings.is_empty() {
        return Err(SplitError::EmptyInput);
    }
    if num_fragments == 0 {
        return Err(SplitError::ZeroFragments);
    }

    let count = usize::from(num_fragments);
    for (index, string) in strings.iter().enumerate() {
        let len = string.as_ref().len();
        if count > len {
            return Err(SplitError::TooManyFragments {
                index,
                len,
                requested: num_fragments,
            });
        }
        let last = len / count + len % count;
        if last > usize::from(u16::MAX) {
            return Err(SplitError::FragmentTooLarge { index, size: last });
        }
    }
    Ok(())
}

fn push_fragments(
    out: &mut Vec<Fragment>,
    message_id: MessageId,
    bytes: &[u8],
    num_fragments: u16,
) {
    let base = bytes.len() / usize::from(num_fragments);
    let mut rest = bytes;

    for fid in 0..num_fragments {
        let take = if fid + 1 == num_fragments { rest.len() } else { base };
        let (chunk, tail) = rest.split_at(take);
        rest = tail;

        let header = FragmentHeader::new(message_id, FragmentIndex::new(fid), num_fragments);
        // `validate` bounds every chunk by u16::MAX.
        out.push(Fragment::from_bounded_parts(header, chunk.into()));
    }
}
