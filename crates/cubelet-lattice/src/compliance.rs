//! Turn compliance test helpers.
//!
//! These functions verify that a lattice and a face satisfy the invariants
//! required of every quarter turn. Reused by the lattice test modules.

use crate::lattice::Lattice;
use cubelet_core::{CubieId, Face, CELL_COUNT};
use indexmap::IndexSet;

/// Assert that every cubie id appears exactly once and that the reverse
/// table agrees with the forward one.
pub fn assert_bijection(lattice: &Lattice) {
    let unique: IndexSet<CubieId> = lattice.cells().iter().copied().collect();
    assert_eq!(
        unique.len(),
        CELL_COUNT,
        "lattice holds duplicate cubies: {lattice:?}"
    );
    for (coord, id) in lattice.iter() {
        assert_eq!(
            lattice.position_of(id),
            Some(coord),
            "position table disagrees for cubie {id}"
        );
    }
}

/// Assert that a forward turn followed by an inverse turn (and the
/// reverse order) restores the lattice.
pub fn assert_inverse_restores(lattice: &Lattice, face: Face) {
    for first in [false, true] {
        let mut l = lattice.clone();
        l.turn(face, first);
        l.turn(face, !first);
        assert_eq!(&l, lattice, "turn {face} then its inverse must restore");
    }
}

/// Assert that four forward turns restore the lattice, and that no fewer do.
pub fn assert_four_turns_identity(lattice: &Lattice, face: Face) {
    let mut l = lattice.clone();
    for n in 1..=4 {
        l.turn(face, false);
        if n < 4 {
            assert_ne!(&l, lattice, "{n} turns of {face} must not restore");
        }
    }
    assert_eq!(&l, lattice, "four turns of {face} must restore");
}

/// Assert that a turn only moves cubies within the face's layer.
pub fn assert_turn_stays_in_slice(lattice: &Lattice, face: Face) {
    let mut l = lattice.clone();
    l.turn(face, false);
    let before: IndexSet<CubieId> = lattice.slice(face).iter().map(|(_, id)| id).collect();
    let after: IndexSet<CubieId> = l.slice(face).iter().map(|(_, id)| id).collect();
    assert_eq!(before, after, "turn {face} changed slice membership");
}

/// Run all compliance checks for one face.
pub fn run_full_compliance(lattice: &Lattice, face: Face) {
    assert_bijection(lattice);
    assert_inverse_restores(lattice, face);
    assert_four_turns_identity(lattice, face);
    assert_turn_stays_in_slice(lattice, face);
}
