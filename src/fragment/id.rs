use bincode::{Decode, Encode};
use derive_more::{Display, From, Into};

/// Identifier of the logical message a fragment belongs to.
///
/// Identifiers are handed out by a [`Fragmenter`](crate::fragment::Fragmenter)
/// in increasing order and wrap after `u16::MAX`.
///
/// # Examples
///
/// ```
/// use fragmentator::fragment::MessageId;
/// let id = MessageId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(MessageId::new(u16::MAX).wrapping_next(), MessageId::new(0));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Encode, Decode, Display, From, Into,
)]
#[display("{_0}")]
pub struct MessageId(u16);

impl MessageId {
    /// Create a new identifier.
    #[must_use]
    pub const fn new(value: u16) -> Self { Self(value) }

    /// Return the inner numeric identifier.
    #[must_use]
    pub const fn get(self) -> u16 { self.0 }

    /// Return the identifier that follows this one, wrapping to zero after
    /// `u16::MAX`.
    #[must_use]
    pub const fn wrapping_next(self) -> Self { Self(self.0.wrapping_add(1)) }
}
