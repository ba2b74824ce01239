//! Doubt views: member threads and the representative queue.

use crate::doubt::domain::Doubt;
use std::cmp::Reverse;

/// Returns the doubts raised by `username`, most recently created first.
#[must_use]
pub fn doubts_for_member<'a>(doubts: &'a [Doubt], username: &str) -> Vec<&'a Doubt> {
    let mut own: Vec<&Doubt> = doubts
        .iter()
        .filter(|doubt| doubt.member() == username)
        .collect();
    own.sort_by_key(|doubt| Reverse(doubt.created_at()));
    own
}

/// Returns all doubts in representative triage order: open doubts first,
/// then resolved, each group most recently created first.
///
/// Sorting is stable, so doubts sharing a creation timestamp keep their
/// stored relative order.
#[must_use]
pub fn doubts_sorted_for_rep(doubts: &[Doubt]) -> Vec<&Doubt> {
    let mut sorted: Vec<&Doubt> = doubts.iter().collect();
    sorted.sort_by_key(|doubt| (doubt.is_resolved(), Reverse(doubt.created_at())));
    sorted
}
