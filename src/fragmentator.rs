//! Facade pairing a [`Fragmenter`] with a [`Reassembler`].
//!
//! [`Fragmentator`] is the entry point most callers need: split strings into
//! fragments on one side, feed fragments back in on the other, and read the
//! completed strings. It is a single-threaded value; every mutating method
//! takes `&mut self`, so sharing one instance across threads requires a
//! caller-owned lock such as `Mutex<Fragmentator>`.

use std::collections::HashMap;

use crate::fragment::{
    Fragment,
    FragmentStatus,
    Fragmenter,
    MessageId,
    Reassembler,
    ReassemblyError,
    SplitError,
};

/// Splits strings into fragments and reassembles them.
///
/// # Examples
///
/// ```
/// use fragmentator::{Fragmentator, MessageId};
///
/// let mut fragmentator = Fragmentator::new();
/// let mut fragments = fragmentator.split(&["HELLO", "WORLD"], 2).expect("valid split");
/// fragments.reverse();
/// fragmentator.add_fragments(fragments).expect("well-formed fragments");
///
/// assert_eq!(fragmentator.completed(MessageId::new(0)), Some("HELLO"));
/// assert_eq!(fragmentator.completed(MessageId::new(1)), Some("WORLD"));
/// ```
#[derive(Debug, Default)]
pub struct Fragmentator {
    fragmenter: Fragmenter,
    reassembler: Reassembler,
}

impl Fragmentator {
    /// Create a fragmentator whose first split string receives id `0`.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a fragmentator whose id counter starts at `start_at`.
    #[must_use]
    pub fn with_starting_id(start_at: MessageId) -> Self {
        Self {
            fragmenter: Fragmenter::with_starting_id(start_at),
            reassembler: Reassembler::new(),
        }
    }

    /// Return the identifier the next split string will receive.
    #[must_use]
    pub const fn next_message_id(&self) -> MessageId { self.fragmenter.next_message_id() }

    /// Split each string into `num_fragments` fragments.
    ///
    /// Splitting never touches reassembly state.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError`] for an empty input, a zero fragment count, or a
    /// count larger than any string's byte length. No fragments are produced
    /// and no identifiers consumed on error.
    pub fn split<S: AsRef<str>>(
        &mut self,
        strings: &[S],
        num_fragments: u16,
    ) -> Result<Vec<Fragment>, SplitError> {
        self.fragmenter.split(strings, num_fragments)
    }

    /// Feed one fragment, owned or borrowed, into reassembly.
    ///
    /// A borrowed fragment is cloned; both forms have the same effect.
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError`] for malformed fragments; see
    /// [`Reassembler::push`].
    pub fn add_fragment(
        &mut self,
        fragment: impl Into<Fragment>,
    ) -> Result<FragmentStatus, ReassemblyError> {
        self.reassembler.push(fragment.into())
    }

    /// Feed fragments in sequence order, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReassemblyError`] encountered. Fragments before it
    /// remain applied.
    pub fn add_fragments<I>(&mut self, fragments: I) -> Result<(), ReassemblyError>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.reassembler.push_all(fragments)
    }

    /// Read-only view of every completed string keyed by message identifier.
    #[must_use]
    pub fn completed_strings(&self) -> &HashMap<MessageId, String> {
        self.reassembler.completed_strings()
    }

    /// Return the completed string for `message_id`, if any.
    #[must_use]
    pub fn completed(&self, message_id: MessageId) -> Option<&str> {
        self.reassembler.completed(message_id)
    }

    /// Remove and return the completed string for `message_id`.
    pub fn take_completed(&mut self, message_id: MessageId) -> Option<String> {
        self.reassembler.take_completed(message_id)
    }

    /// Number of messages still collecting fragments.
    #[must_use]
    pub fn pending_len(&self) -> usize { self.reassembler.pending_len() }

    /// Return `(filled, total)` for a message still collecting fragments.
    #[must_use]
    pub fn progress(&self, message_id: MessageId) -> Option<(usize, u16)> {
        self.reassembler.progress(message_id)
    }

    /// Drop the partial record for `message_id`; returns whether one existed.
    pub fn discard(&mut self, message_id: MessageId) -> bool {
        self.reassembler.discard(message_id)
    }
}
