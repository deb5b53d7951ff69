//! Delivery helpers that stand in for a lossy transport.

use fragmentator::{
    Fragment,
    FragmentIndex,
    MessageId,
    decode_fragment,
    encode_fragment,
};

/// Split out the fragment addressed by `id` and `fid`.
///
/// Returns the remaining fragments and the removed one, if it was present.
#[must_use]
pub fn without(
    fragments: Vec<Fragment>,
    id: u16,
    fid: u16,
) -> (Vec<Fragment>, Option<Fragment>) {
    let (mut removed, kept): (Vec<_>, Vec<_>) = fragments.into_iter().partition(|f| {
        f.id() == MessageId::new(id) && f.fid() == FragmentIndex::new(fid)
    });
    (kept, removed.pop())
}

/// Pass every fragment through the wire codec and back.
///
/// # Panics
///
/// Panics if a fragment fails to encode or decode.
#[must_use]
pub fn through_wire(fragments: Vec<Fragment>) -> Vec<Fragment> {
    fragments
        .iter()
        .map(|fragment| {
            let bytes = encode_fragment(fragment).expect("fragment encodes");
            decode_fragment(&bytes)
                .expect("fragment decodes")
                .expect("fragment marker present")
        })
        .collect()
}
