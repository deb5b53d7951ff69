//! Utilities for delivering fragments to a
//! [`Fragmentator`](fragmentator::Fragmentator) during tests: dropping a
//! chosen fragment, passing fragments through the wire codec, and capturing
//! log output.
//!
//! ```rust
//! use fragmentator::{Fragmentator, MessageId};
//! use fragmentator_testing::{through_wire, without};
//!
//! let mut fragmentator = Fragmentator::new();
//! let fragments = fragmentator.split(&["FOO", "BAZ"], 3).unwrap();
//! let (delivered, missing) = without(fragments, 1, 2);
//! fragmentator.add_fragments(through_wire(delivered)).unwrap();
//! assert_eq!(fragmentator.completed(MessageId::new(1)), None);
//!
//! fragmentator.add_fragment(missing.unwrap()).unwrap();
//! assert_eq!(fragmentator.completed(MessageId::new(1)), Some("BAZ"));
//! ```

pub mod delivery;
pub mod logging;

pub use delivery::{through_wire, without};
pub use logging::{LoggerHandle, logger};
