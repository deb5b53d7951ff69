//! Inbound helper that stitches fragments back into complete strings.
//!
//! [`Reassembler`] mirrors the outbound [`Fragmenter`](crate::fragment::Fragmenter)
//! by collecting fragment payloads keyed by [`MessageId`]. Fragments may
//! arrive in any order and any grouping. Once every fragment of a message has
//! been seen the payloads are concatenated in index order and published in
//! the completed-string store.
//!
//! A fragment that arrives for a message which already completed restarts
//! collection: the stored string is dropped and a fresh record begins.

use std::collections::{HashMap, hash_map::Entry};

use log::{debug, warn};

use super::{Fragment, FragmentSlots, FragmentStatus, MessageId, ReassemblyError};

/// Stateful reassembler holding in-progress and completed messages.
#[derive(Debug, Default)]
pub struct Reassembler {
    buffers: HashMap<MessageId, FragmentSlots>,
    completed: HashMap<MessageId, String>,
}

impl Reassembler {
    /// Create an empty reassembler.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Process one fragment.
    ///
    /// Returns [`FragmentStatus::Complete`] when the fragment finished its
    /// message, after which the string is available from
    /// [`Reassembler::completed`].
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError`] when the fragment declares a zero total,
    /// an out-of-range index, or a total that disagrees with the message's
    /// in-progress record. Those fragments are dropped and existing state is
    /// kept. [`ReassemblyError::InvalidUtf8`] is returned, and the message
    /// discarded, when the completed bytes are not UTF-8.
    pub fn push(&mut self, fragment: Fragment) -> Result<FragmentStatus, ReassemblyError> {
        let message_id = fragment.id();
        let result = self.accept(fragment);
        match &result {
            Ok(FragmentStatus::Duplicate) => {
                warn!("duplicate fragment replaced stored payload: message_id={message_id}");
            }
            Err(err) => warn!("fragment rejected: {err}"),
            Ok(_) => {}
        }
        result
    }

    fn accept(&mut self, fragment: Fragment) -> Result<FragmentStatus, ReassemblyError> {
        let header = *fragment.header();
        let message_id = header.message_id();

        if header.total() == 0 {
            return Err(ReassemblyError::ZeroTotal { message_id });
        }
        if !header.is_in_range() {
            return Err(ReassemblyError::IndexOutOfRange {
                message_id,
                index: header.fragment_index(),
                total: header.total(),
            });
        }

        if self.completed.remove(&message_id).is_some() {
            warn!("restarting collection for completed message: message_id={message_id}");
        }

        let mut occupied = match self.buffers.entry(message_id) {
            Entry::Occupied(occupied) => occupied,
            Entry::Vacant(vacant) => {
                vacant.insert_entry(FragmentSlots::new(message_id, header.total()))
            }
        };

        let status = occupied.get_mut().accept(fragment)?;
        if status != FragmentStatus::Complete {
            return Ok(status);
        }

        let bytes = occupied.remove().into_bytes().unwrap_or_default();
        let string =
            String::from_utf8(bytes).map_err(|_| ReassemblyError::InvalidUtf8 { message_id })?;
        debug!(
            "message reassembled: message_id={message_id}, fragments={}, bytes={}",
            header.total(),
            string.len()
        );
        self.completed.insert(message_id, string);
        Ok(FragmentStatus::Complete)
    }

    /// Process fragments in sequence order, stopping at the first rejection.
    ///
    /// Fragments processed before a rejection stay applied.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReassemblyError`] raised by [`Reassembler::push`].
    pub fn push_all<I>(&mut self, fragments: I) -> Result<(), ReassemblyError>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        for fragment in fragments {
            self.push(fragment.into())?;
        }
        Ok(())
    }

    /// Read-only view of every completed string keyed by message identifier.
    #[must_use]
    pub fn completed_strings(&self) -> &HashMap<MessageId, String> { &self.completed }

    /// Return the completed string for `message_id`, if any.
    #[must_use]
    pub fn completed(&self, message_id: MessageId) -> Option<&str> {
        self.completed.get(&message_id).map(String::as_str)
    }

    /// Remove and return the completed string for `message_id`.
    pub fn take_completed(&mut self, message_id: MessageId) -> Option<String> {
        self.completed.remove(&message_id)
    }

    /// Number of messages still collecting fragments.
    #[must_use]
    pub fn pending_len(&self) -> usize { self.buffers.len() }

    /// Return `(filled, total)` for a message still collecting fragments.
    #[must_use]
    pub fn progress(&self, message_id: MessageId) -> Option<(usize, u16)> {
        self.buffers
            .get(&message_id)
            .map(|slots| (slots.filled(), slots.total()))
    }

    /// Drop the in-progress record for `message_id`.
    ///
    /// Returns `true` if a record was removed.
    pub fn discard(&mut self, message_id: MessageId) -> bool {
        let removed = self.buffers.remove(&message_id).is_some();
        if removed {
            debug!("discarded partial message: message_id={message_id}");
        }
        removed
    }
}
