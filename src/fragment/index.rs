//! Slot numbering for fragments of one message.

use bincode::{Decode, Encode};
use derive_more::{Display, From, Into};

/// Position of a fragment within its message, counted from zero.
///
/// A message split into `total` fragments uses indices `0..total`; the index
/// doubles as the reassembly slot the fragment's payload lands in.
///
/// # Examples
///
/// ```
/// use fragmentator::fragment::FragmentIndex;
/// let index = FragmentIndex::new(3);
/// assert_eq!(index.get(), 3);
/// assert_eq!(index.as_usize(), 3);
/// assert_eq!(u16::from(index), 3);
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Encode, Decode, Display, From, Into,
)]
#[display("{_0}")]
pub struct FragmentIndex(u16);

impl FragmentIndex {
    /// Wrap a raw slot number.
    #[must_use]
    pub const fn new(value: u16) -> Self { Self(value) }

    /// The slot of a message's first fragment.
    #[must_use]
    pub const fn zero() -> Self { Self(0) }

    /// Raw slot number.
    #[must_use]
    pub const fn get(self) -> u16 { self.0 }

    /// Slot number widened for indexing the reassembly buffer.
    #[must_use]
    pub const fn as_usize(self) -> usize { self.0 as usize }
}
