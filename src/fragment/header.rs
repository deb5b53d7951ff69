use bincode::{Decode, Encode};

use super::{FragmentIndex, MessageId};

/// Header describing a single fragment.
///
/// `FragmentHeader` carries everything the reassembler needs to place a
/// fragment: the parent message, the slot it fills, and how many slots the
/// message was split into. It is small enough to copy by value.
///
/// # Examples
///
/// ```
/// use fragmentator::fragment::{FragmentHeader, FragmentIndex, MessageId};
/// let header = FragmentHeader::new(MessageId::new(7), FragmentIndex::new(1), 3);
/// assert_eq!(header.message_id().get(), 7);
/// assert_eq!(header.fragment_index().get(), 1);
/// assert_eq!(header.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Encode, Decode)]
pub struct FragmentHeader {
    message_id: MessageId,
    fragment_index: FragmentIndex,
    total: u16,
}

impl FragmentHeader {
    /// Create a new fragment header.
    #[must_use]
    pub const fn new(message_id: MessageId, fragment_index: FragmentIndex, total: u16) -> Self {
        Self {
            message_id,
            fragment_index,
            total,
        }
    }

    /// Return the logical message identifier.
    #[must_use]
    pub const fn message_id(&self) -> MessageId { self.message_id }

    /// Return the fragment position relative to the message.
    #[must_use]
    pub const fn fragment_index(&self) -> FragmentIndex { self.fragment_index }

    /// Return the number of fragments the message was split into.
    #[must_use]
    pub const fn total(&self) -> u16 { self.total }

    /// Report whether the index addresses a slot that exists.
    #[must_use]
    pub const fn is_in_range(&self) -> bool { self.fragment_index.get() < self.total }
}
