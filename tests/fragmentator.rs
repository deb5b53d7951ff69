//! End-to-end tests for splitting and reassembling through the facade.

use fragmentator::{Fragment, Fragmentator, FragmentStatus, MessageId, ReassemblyError, SplitError};
use fragmentator_testing::{through_wire, without};
use rstest::rstest;

const WORDS: [&str; 5] = ["TEST", "BAZ", "FOO", "QUUX", "CORGE"];

fn completed_sorted(fragmentator: &Fragmentator) -> Vec<(u16, String)> {
    let mut entries: Vec<_> = fragmentator
        .completed_strings()
        .iter()
        .map(|(id, string)| (id.get(), string.clone()))
        .collect();
    entries.sort();
    entries
}

fn expected_words() -> Vec<(u16, String)> {
    (0_u16..).zip(WORDS.map(String::from)).collect()
}

#[test]
fn batch_of_five_strings_reassembles_under_sequential_ids() {
    let mut fragmentator = Fragmentator::new();
    let fragments = fragmentator.split(&WORDS, 3).expect("valid split");
    assert_eq!(fragments.len(), 15);

    fragmentator
        .add_fragments(fragments)
        .expect("well-formed fragments");
    assert_eq!(completed_sorted(&fragmentator), expected_words());
}

#[rstest]
#[case::reversed(|mut fragments: Vec<Fragment>| {
    fragments.reverse();
    fragments
})]
#[case::over_the_wire(through_wire)]
fn delivery_order_does_not_matter(#[case] deliver: fn(Vec<Fragment>) -> Vec<Fragment>) {
    let mut fragmentator = Fragmentator::new();
    let fragments = fragmentator.split(&WORDS, 3).expect("valid split");

    fragmentator
        .add_fragments(deliver(fragments))
        .expect("well-formed fragments");
    assert_eq!(completed_sorted(&fragmentator), expected_words());
}

#[test]
fn single_string_reversed_delivery() {
    let mut fragmentator = Fragmentator::new();
    let fragments = fragmentator.split(&["CORGE"], 3).expect("valid split");

    for fragment in fragments.into_iter().rev() {
        fragmentator.add_fragment(fragment).expect("accepted");
    }
    assert_eq!(fragmentator.completed(MessageId::new(0)), Some("CORGE"));
}

#[rstest]
#[case::first(0)]
#[case::middle(1)]
#[case::last(2)]
fn dropped_fragment_completes_when_supplied_later(#[case] fid: u16) {
    let mut fragmentator = Fragmentator::new();
    let fragments = fragmentator.split(&WORDS, 3).expect("valid split");
    let (delivered, missing) = without(fragments, 2, fid);

    fragmentator
        .add_fragments(delivered)
        .expect("well-formed fragments");
    assert_eq!(fragmentator.completed_strings().len(), 4);
    assert_eq!(fragmentator.completed(MessageId::new(2)), None);
    assert_eq!(fragmentator.pending_len(), 1);

    let status = fragmentator
        .add_fragment(missing.expect("fragment was present"))
        .expect("accepted");
    assert_eq!(status, FragmentStatus::Complete);
    assert_eq!(completed_sorted(&fragmentator), expected_words());
}

#[test]
fn borrowed_fragments_leave_the_caller_copy_usable() {
    let mut fragmentator = Fragmentator::new();
    let fragments = fragmentator.split(&["QUUX"], 2).expect("valid split");

    fragmentator
        .add_fragments(&fragments)
        .expect("well-formed fragments");
    assert_eq!(fragmentator.completed(MessageId::new(0)), Some("QUUX"));
    assert_eq!(fragments[0].data(), b"QU");
}

#[test]
fn new_fragment_for_completed_id_resets_it() {
    let mut fragmentator = Fragmentator::new();
    let first = fragmentator.split(&["TEST"], 2).expect("valid split");
    fragmentator.add_fragments(first).expect("accepted");
    assert_eq!(fragmentator.completed(MessageId::new(0)), Some("TEST"));

    let mut again = Fragmentator::new();
    let second = again.split(&["FOO"], 3).expect("valid split");
    let mut second = second.into_iter();

    fragmentator
        .add_fragment(second.next().expect("fragment"))
        .expect("restart accepted");
    assert_eq!(fragmentator.completed(MessageId::new(0)), None);
    assert_eq!(fragmentator.progress(MessageId::new(0)), Some((1, 3)));

    fragmentator.add_fragments(second).expect("accepted");
    assert_eq!(fragmentator.completed(MessageId::new(0)), Some("FOO"));
}

#[test]
fn split_errors_surface_through_the_facade() {
    let mut fragmentator = Fragmentator::new();
    let empty: [&str; 0] = [];

    assert_eq!(fragmentator.split(&empty, 4), Err(SplitError::EmptyInput));
    assert_eq!(
        fragmentator.split(&["TEST"], 0),
        Err(SplitError::ZeroFragments)
    );
    assert!(matches!(
        fragmentator.split(&["TEST"], 10),
        Err(SplitError::TooManyFragments { .. })
    ));
    assert_eq!(fragmentator.next_message_id(), MessageId::new(0));
    assert_eq!(fragmentator.pending_len(), 0);
}

#[test]
fn split_does_not_touch_reassembly_state() {
    let mut fragmentator = Fragmentator::with_starting_id(MessageId::new(10));
    let fragments = fragmentator.split(&["BAZ"], 3).expect("valid split");

    assert!(fragmentator.completed_strings().is_empty());
    assert_eq!(fragmentator.pending_len(), 0);
    assert!(fragments.iter().all(|f| f.id() == MessageId::new(10)));
    assert_eq!(fragmentator.next_message_id(), MessageId::new(11));
}

#[test]
fn mismatched_total_is_rejected() {
    let mut fragmentator = Fragmentator::new();
    let three = fragmentator.split(&["CORGE"], 3).expect("valid split");
    let mut other = Fragmentator::new();
    let two = other.split(&["CORGE"], 2).expect("valid split");

    fragmentator.add_fragment(&three[0]).expect("accepted");
    let err = fragmentator
        .add_fragment(&two[1])
        .expect_err("total mismatch rejected");
    assert_eq!(
        err,
        ReassemblyError::TotalMismatch {
            message_id: MessageId::new(0),
            expected: 3,
            found: 2,
        }
    );
    assert_eq!(fragmentator.progress(MessageId::new(0)), Some((1, 3)));
}

#[test]
fn take_completed_hands_out_the_string() {
    let mut fragmentator = Fragmentator::new();
    let fragments = fragmentator.split(&["FOO"], 1).expect("valid split");
    fragmentator.add_fragments(fragments).expect("accepted");

    assert_eq!(
        fragmentator.take_completed(MessageId::new(0)).as_deref(),
        Some("FOO")
    );
    assert!(fragmentator.completed_strings().is_empty());
}

#[test]
fn discard_drops_a_partial_message() {
    let mut fragmentator = Fragmentator::new();
    let fragments = fragmentator.split(&["QUUX"], 4).expect("valid split");
    fragmentator.add_fragment(&fragments[0]).expect("accepted");

    assert!(fragmentator.discard(MessageId::new(0)));
    assert_eq!(fragmentator.progress(MessageId::new(0)), None);

    fragmentator.add_fragments(&fragments[1..]).expect("accepted");
    assert_eq!(fragmentator.completed(MessageId::new(0)), None);
    assert_eq!(fragmentator.progress(MessageId::new(0)), Some((3, 4)));
}
