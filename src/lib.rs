//! Public API for the `fragmentator` library.
//!
//! This crate splits strings into a fixed number of ordered fragments and
//! reassembles them from fragments delivered in any order and grouping.

pub mod fragment;
pub mod fragmentator;

pub use fragment::{
    FRAGMENT_MAGIC,
    Fragment,
    FragmentError,
    FragmentHeader,
    FragmentIndex,
    FragmentSlots,
    FragmentStatus,
    Fragmenter,
    MessageId,
    Reassembler,
    ReassemblyError,
    SplitError,
    decode_fragment,
    encode_fragment,
};
pub use fragmentator::Fragmentator;
