//! Slot tracker used to reassemble one logical message.
//!
//! `FragmentSlots` holds one optional payload per fragment index and counts
//! how many slots are filled. Fragments may arrive in any order; the message
//! is complete once every slot holds data.

use super::{Fragment, FragmentStatus, MessageId, ReassemblyError};

/// Collection state for a single logical message.
#[derive(Clone, Debug)]
pub struct FragmentSlots {
    message_id: MessageId,
    slots: Vec<Option<Box<[u8]>>>,
    filled: usize,
}

impl FragmentSlots {
    /// Create an empty record for `message_id` expecting `total` fragments.
    #[must_use]
    pub fn new(message_id: MessageId, total: u16) -> Self {
        Self {
            message_id,
            slots: vec![None; usize::from(total)],
            filled: 0,
        }
    }

    /// Return the message identifier tracked by this record.
    #[must_use]
    pub const fn message_id(&self) -> MessageId { self.message_id }

    /// Number of fragments the message was split into.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "slot count is built from a u16 total"
    )]
    #[must_use]
    pub fn total(&self) -> u16 { self.slots.len() as u16 }

    /// Number of distinct fragment indices received so far.
    #[must_use]
    pub const fn filled(&self) -> usize { self.filled }

    /// Return whether every slot holds a payload.
    #[must_use]
    pub fn is_complete(&self) -> bool { self.filled == self.slots.len() }

    /// Store a fragment's payload in its slot.
    ///
    /// A fragment whose slot is already filled replaces the stored payload
    /// and reports [`FragmentStatus::Duplicate`] without advancing
    /// completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use fragmentator::fragment::{
    ///     Fragment,
    ///     FragmentIndex,
    ///     FragmentSlots,
    ///     FragmentStatus,
    ///     MessageId,
    /// };
    /// let id = MessageId::new(9);
    /// let mut slots = FragmentSlots::new(id, 2);
    /// let second = Fragment::new(id, FragmentIndex::new(1), 2, "LD").expect("fragment");
    /// let first = Fragment::new(id, FragmentIndex::zero(), 2, "WOR").expect("fragment");
    /// assert_eq!(slots.accept(second), Ok(FragmentStatus::Incomplete));
    /// assert_eq!(slots.accept(first), Ok(FragmentStatus::Complete));
    /// assert_eq!(slots.into_bytes().as_deref(), Some(&b"WORLD"[..]));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::MessageMismatch`] when the fragment belongs
    /// to another message, [`ReassemblyError::TotalMismatch`] when it declares
    /// a different total than this record, and
    /// [`ReassemblyError::IndexOutOfRange`] when its index has no slot. The
    /// record is unchanged on error.
    pub fn accept(&mut self, fragment: Fragment) -> Result<FragmentStatus, ReassemblyError> {
        if fragment.id() != self.message_id {
            return Err(ReassemblyError::MessageMismatch {
                expected: self.message_id,
                found: fragment.id(),
            });
        }

        if fragment.total() != self.total() {
            return Err(ReassemblyError::TotalMismatch {
                message_id: self.message_id,
                expected: self.total(),
                found: fragment.total(),
            });
        }

        let index = fragment.fid();
        let Some(slot) = self.slots.get_mut(index.as_usize()) else {
            return Err(ReassemblyError::IndexOutOfRange {
                message_id: self.message_id,
                index,
                total: fragment.total(),
            });
        };

        let was_empty = slot.replace(fragment.into_data()).is_none();
        if !was_empty {
            return Ok(FragmentStatus::Duplicate);
        }

        self.filled += 1;
        if self.is_complete() {
            Ok(FragmentStatus::Complete)
        } else {
            Ok(FragmentStatus::Incomplete)
        }
    }

    /// Concatenate the slots in index order.
    ///
    /// Returns `None` while any slot is still empty.
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        if !self.is_complete() {
            return None;
        }
        let len = self.slots.iter().flatten().map(|data| data.len()).sum();
        let mut buffer = Vec::with_capacity(len);
        for data in self.slots.iter().flatten() {
            buffer.extend_from_slice(data);
        }
        Some(buffer)
    }
}
