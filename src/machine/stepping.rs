//! Pawl-and-notch stepping rule.
//!
//! Each of the rightmost `pawls` slots has a pawl. On every keypress:
//!
//! - the pawl of the rightmost slot always pushes its rotor;
//! - the pawl of any other slot drops into the notch of the rotor to its
//!   right when that rotor is at a notch, and then pushes *both* rotors.
//!
//! The second clause is what produces the double step: a middle rotor that
//! has just reached its notch moves again on the next keypress, together
//! with its left neighbour.
//!
//! The decision is computed from the pre-keypress state of every rotor at
//! once and returned as a value; advancing is a separate step.

use crate::core::Rotor;
use std::collections::BTreeSet;

/// Slots that advance on the next keypress, in ascending slot order.
///
/// Only moving rotors inside the stepping range ever appear in the result.
pub fn advancing_slots(slots: &[Rotor], pawls: usize) -> BTreeSet<usize> {
    let mut advancing = BTreeSet::new();
    let n = slots.len();
    if pawls == 0 || n == 0 {
        return advancing;
    }
    let first = n.saturating_sub(pawls);
    let moves = |slot: usize| slot >= first && slots[slot].rotates();

    if moves(n - 1) {
        advancing.insert(n - 1);
    }
    for slot in first..n - 1 {
        if moves(slot) && slots[slot + 1].at_notch() {
            advancing.insert(slot);
            if moves(slot + 1) {
                advancing.insert(slot + 1);
            }
        }
    }

    advancing
}

/// Advance every rotor in `advancing`.
pub fn apply(slots: &mut [Rotor], advancing: &BTreeSet<usize>) {
    for &slot in advancing {
        if let Some(rotor) = slots.get_mut(slot) {
            rotor.advance();
        }
    }
}
