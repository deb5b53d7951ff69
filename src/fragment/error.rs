//! Error and status types emitted by the fragmentation layer.
//!
//! Splitting and reassembly fail for different reasons and are reported
//! through separate enums so callers can match on exactly the failures a
//! given operation can produce.

use thiserror::Error;

use super::{FragmentIndex, MessageId};

/// Result of feeding a fragment into the reassembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentStatus {
    /// The logical message still expects more fragments.
    Incomplete,
    /// The fragment's slot was already filled; its data replaced the old
    /// payload without advancing completion.
    Duplicate,
    /// The fragment completed the logical message.
    Complete,
}

/// Errors produced while building a [`Fragment`](crate::fragment::Fragment).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FragmentError {
    /// The payload does not fit the 16-bit size field.
    #[error("fragment payload of {len} bytes exceeds u16::MAX")]
    PayloadTooLarge { len: usize },
}

/// Invalid arguments passed to a split operation.
///
/// Every variant is detected before any fragment is produced.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// No strings were supplied.
    #[error("no strings to split")]
    EmptyInput,
    /// A split into zero fragments was requested.
    #[error("number of fragments must be greater than zero")]
    ZeroFragments,
    /// A string is shorter than the requested fragment count, so some
    /// fragments would carry no bytes.
    #[error("string {index} has {len} bytes, fewer than the {requested} fragments requested")]
    TooManyFragments {
        index: usize,
        len: usize,
        requested: u16,
    },
    /// The final fragment of a string would not fit the 16-bit size field.
    #[error("string {index} would produce a fragment of {size} bytes, exceeding u16::MAX")]
    FragmentTooLarge { index: usize, size: usize },
}

/// Fragments rejected by the reassembler.
///
/// A rejected fragment leaves every in-progress message untouched, except
/// for [`ReassemblyError::InvalidUtf8`] which discards the offending message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ReassemblyError {
    /// The fragment claims its message has no fragments at all.
    #[error("fragment for message {message_id} declares a total of zero")]
    ZeroTotal { message_id: MessageId },
    /// The fragment index addresses a slot beyond the message's total.
    #[error("fragment {index} of message {message_id} is out of range for total {total}")]
    IndexOutOfRange {
        message_id: MessageId,
        index: FragmentIndex,
        total: u16,
    },
    /// The fragment was offered to the record of a different message.
    #[error("fragment message mismatch: expected {expected}, found {found}")]
    MessageMismatch {
        expected: MessageId,
        found: MessageId,
    },
    /// The fragment disagrees with earlier fragments about the total.
    #[error("fragment total mismatch for message {message_id}: expected {expected}, found {found}")]
    TotalMismatch {
        message_id: MessageId,
        expected: u16,
        found: u16,
    },
    /// The assembled bytes are not valid UTF-8.
    #[error("message {message_id} did not reassemble into valid UTF-8")]
    InvalidUtf8 { message_id: MessageId },
}
