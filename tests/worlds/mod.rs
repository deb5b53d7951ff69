//! Cucumber worlds shared by the behavioural step definitions.

mod fragmentator;

pub use fragmentator::FragmentatorWorld;
