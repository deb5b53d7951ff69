//! Test world driving split, delivery and reassembly of strings.

use cucumber::World;
use fragmentator::{
    Fragment,
    FragmentIndex,
    FragmentStatus,
    Fragmentator,
    MessageId,
    ReassemblyError,
    SplitError,
};

#[derive(Debug, Default, World)]
pub struct FragmentatorWorld {
    fragmentator: Fragmentator,
    fragments: Vec<Fragment>,
    held_back: Vec<Fragment>,
    split_error: Option<SplitError>,
    last_status: Option<Result<FragmentStatus, ReassemblyError>>,
}

impl FragmentatorWorld {
    /// Split `strings` and keep the fragments for later delivery.
    pub fn split(&mut self, strings: &[String], count: u16) {
        match self.fragmentator.split(strings, count) {
            Ok(fragments) => {
                self.fragments = fragments;
                self.split_error = None;
            }
            Err(err) => {
                self.fragments.clear();
                self.split_error = Some(err);
            }
        }
    }

    /// Move fragment `fid` of message `id` aside so it is not delivered.
    ///
    /// # Panics
    /// Panics if no such fragment was produced.
    pub fn hold_back(&mut self, id: u16, fid: u16) {
        let position = self
            .fragments
            .iter()
            .position(|f| f.id().get() == id && f.fid().get() == fid)
            .expect("fragment to hold back not found");
        self.held_back.push(self.fragments.remove(position));
    }

    /// Reverse the pending delivery order.
    pub fn reverse(&mut self) { self.fragments.reverse(); }

    /// Deliver every pending fragment.
    ///
    /// # Panics
    /// Panics if a fragment is rejected.
    pub fn deliver_all(&mut self) {
        let fragments = std::mem::take(&mut self.fragments);
        self.fragmentator
            .add_fragments(fragments)
            .expect("fragments rejected");
    }

    /// Deliver the fragments held back earlier.
    ///
    /// # Panics
    /// Panics if a fragment is rejected.
    pub fn deliver_held_back(&mut self) {
        let held = std::mem::take(&mut self.held_back);
        self.fragmentator
            .add_fragments(held)
            .expect("held fragments rejected");
    }

    /// Deliver one handcrafted fragment and record the outcome.
    ///
    /// # Panics
    /// Panics if `data` is too long for a fragment.
    pub fn deliver_raw(&mut self, id: u16, fid: u16, total: u16, data: &str) {
        let fragment = Fragment::new(MessageId::new(id), FragmentIndex::new(fid), total, data)
            .expect("fragment payload fits");
        self.last_status = Some(self.fragmentator.add_fragment(fragment));
    }

    /// Assert the completed string stored under `id`.
    ///
    /// # Panics
    /// Panics if the message is missing or differs.
    pub fn assert_completed(&self, id: u16, expected: &str) {
        assert_eq!(
            self.fragmentator.completed(MessageId::new(id)),
            Some(expected),
            "completed strings: {:?}",
            self.fragmentator.completed_strings()
        );
    }

    /// Assert that no string is stored under `id`.
    ///
    /// # Panics
    /// Panics if the message is present.
    pub fn assert_absent(&self, id: u16) {
        assert_eq!(self.fragmentator.completed(MessageId::new(id)), None);
    }

    /// Assert the number of completed messages.
    ///
    /// # Panics
    /// Panics if the count differs.
    pub fn assert_completed_count(&self, expected: usize) {
        assert_eq!(self.fragmentator.completed_strings().len(), expected);
    }

    /// Assert that the last split failed with `expected`.
    ///
    /// # Panics
    /// Panics if the split succeeded or failed differently.
    pub fn assert_split_error(&self, expected: &str) {
        let err = self.split_error.expect("split unexpectedly succeeded");
        let matched = match expected {
            "empty input" => err == SplitError::EmptyInput,
            "zero fragments" => err == SplitError::ZeroFragments,
            "too many fragments" => matches!(err, SplitError::TooManyFragments { .. }),
            other => panic!("unknown split error name: {other}"),
        };
        assert!(matched, "expected {expected}, got {err}");
    }

    /// Assert the outcome of the last raw delivery.
    ///
    /// # Panics
    /// Panics if nothing was delivered or the outcome differs.
    pub fn assert_last_outcome(&self, expected: &str) {
        let outcome = self.last_status.as_ref().expect("no fragment delivered");
        let matched = match (expected, outcome) {
            ("incomplete", Ok(FragmentStatus::Incomplete))
            | ("duplicate", Ok(FragmentStatus::Duplicate))
            | ("complete", Ok(FragmentStatus::Complete))
            | ("total mismatch", Err(ReassemblyError::TotalMismatch { .. })) => true,
            _ => false,
        };
        assert!(matched, "expected {expected}, got {outcome:?}");
    }
}
