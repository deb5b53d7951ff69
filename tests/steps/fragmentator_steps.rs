//! Steps for splitting and reassembly behavioural tests.

use cucumber::{given, then, when};

use crate::worlds::FragmentatorWorld;

fn words(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

#[given(expr = "the strings {string} split into {int} fragments")]
fn given_split(world: &mut FragmentatorWorld, list: String, count: u16) {
    world.split(&words(&list), count);
}

#[when(expr = "the strings {string} are split into {int} fragments")]
fn when_split(world: &mut FragmentatorWorld, list: String, count: u16) {
    world.split(&words(&list), count);
}

#[given(expr = "fragment {int} of message {int} is held back")]
fn hold_back(world: &mut FragmentatorWorld, fid: u16, id: u16) { world.hold_back(id, fid); }

#[given("the delivery order is reversed")]
fn reverse(world: &mut FragmentatorWorld) { world.reverse(); }

#[when("all fragments are delivered")]
fn deliver_all(world: &mut FragmentatorWorld) { world.deliver_all(); }

#[when("the held back fragments are delivered")]
fn deliver_held_back(world: &mut FragmentatorWorld) { world.deliver_held_back(); }

#[when(expr = "fragment {int} of {int} for message {int} carrying {string} arrives")]
fn deliver_raw(world: &mut FragmentatorWorld, fid: u16, total: u16, id: u16, data: String) {
    world.deliver_raw(id, fid, total, &data);
}

#[then(expr = "message {int} reads {string}")]
fn message_reads(world: &mut FragmentatorWorld, id: u16, expected: String) {
    world.assert_completed(id, &expected);
}

#[then(expr = "message {int} is not complete")]
fn message_absent(world: &mut FragmentatorWorld, id: u16) { world.assert_absent(id); }

#[then(expr = "{int} messages are complete")]
fn completed_count(world: &mut FragmentatorWorld, count: usize) {
    world.assert_completed_count(count);
}

#[then(expr = "the split fails with {string}")]
fn split_fails(world: &mut FragmentatorWorld, expected: String) {
    world.assert_split_error(&expected);
}

#[then(expr = "the fragment is reported as {string}")]
fn fragment_outcome(world: &mut FragmentatorWorld, expected: String) {
    world.assert_last_outcome(&expected);
}
