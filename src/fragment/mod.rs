//! Fragment primitives for splitting strings and reassembling them.
//!
//! This module collects the domain types used by the fragmentation and
//! reassembly layer. Each sub-module focuses on a single concept; the
//! [`Fragmentator`](crate::Fragmentator) facade combines them.

pub mod error;
pub mod fragmenter;
pub mod header;
pub mod id;
pub mod index;
pub mod packet;
pub mod payload;
pub mod reassembler;
pub mod series;

pub use error::{FragmentError, FragmentStatus, ReassemblyError, SplitError};
pub use fragmenter::Fragmenter;
pub use header::FragmentHeader;
pub use id::MessageId;
pub use index::FragmentIndex;
pub use packet::Fragment;
pub use payload::{FRAGMENT_MAGIC, decode_fragment, encode_fragment};
pub use reassembler::Reassembler;
pub use series::FragmentSlots;
