//! Assertion helpers for tests. They panic with a dump of the offending
//! automata instead of returning a result.

use crate::automaton::{Automaton, Label, are_equivalent};

/// Asserts the structural invariants every automaton must satisfy: at least
/// one state, and every destination and accepting state within `0..n`.
pub fn assert_well_formed(automaton: &Automaton) {
    let state_count = automaton.state_count();
    assert!(state_count >= 1, "Automaton has no states:\n{}", automaton);

    for state in automaton.final_states() {
        assert!(
            state.index() < state_count,
            "Final state {} is out of range:\n{}",
            state.index(),
            automaton
        );
    }

    for ((from, label), destinations) in automaton.transitions() {
        assert!(
            from.index() < state_count,
            "Transition source {} is out of range:\n{}",
            from.index(),
            automaton
        );
        if let Label::Letter(letter) = label {
            assert!(
                automaton.alphabet().contains(letter),
                "Transition label {:?} is not part of the alphabet:\n{}",
                letter,
                automaton
            );
        }
        for destination in destinations {
            assert!(
                destination.index() < state_count,
                "Destination {} is out of range:\n{}",
                destination.index(),
                automaton
            );
        }
    }
}

/// Asserts that there are no epsilon transitions and at most one destination
/// per `(state, letter)` pair.
pub fn assert_deterministic(automaton: &Automaton) {
    for ((from, label), destinations) in automaton.transitions() {
        assert!(
            !label.is_epsilon(),
            "State {} has an epsilon transition:\n{}",
            from.index(),
            automaton
        );
        assert!(
            destinations.len() <= 1,
            "State {} has {} destinations for {}:\n{}",
            from.index(),
            destinations.len(),
            label,
            automaton
        );
    }
}

/// Asserts that every state has exactly one destination for every letter.
pub fn assert_complete(automaton: &Automaton) {
    assert_deterministic(automaton);

    for state in automaton.iter_states() {
        for label in automaton.alphabet().labels() {
            assert_eq!(
                automaton.destinations(state, label).len(),
                1,
                "State {} has no transition for {}:\n{}",
                state.index(),
                label,
                automaton
            );
        }
    }
}

/// Asserts that both automata accept the same language by normalizing them
/// and comparing the minimal automata.
pub fn assert_equivalent(a: &Automaton, b: &Automaton) {
    let (a_min, b_min) = normalize_pair(a, b);

    assert!(
        compare(&a_min, &b_min),
        "Automata are not equivalent.\nMinimal `a`:\n{}\nMinimal `b`:\n{}",
        a_min,
        b_min
    );
}

/// Asserts that the automata accept different languages.
pub fn assert_not_equivalent(a: &Automaton, b: &Automaton) {
    let (a_min, b_min) = normalize_pair(a, b);

    assert!(
        !compare(&a_min, &b_min),
        "Automata are equivalent, expected different languages.\nMinimal `a`:\n{}\nMinimal `b`:\n{}",
        a_min,
        b_min
    );
}

fn normalize_pair(a: &Automaton, b: &Automaton) -> (Automaton, Automaton) {
    let a_min = a
        .normalize()
        .unwrap_or_else(|e| panic!("Failed to normalize `a`: {}", e));
    let b_min = b
        .normalize()
        .unwrap_or_else(|e| panic!("Failed to normalize `b`: {}", e));

    (a_min, b_min)
}

fn compare(a_min: &Automaton, b_min: &Automaton) -> bool {
    are_equivalent(a_min, b_min).unwrap_or_else(|e| panic!("Failed to compare: {}", e))
}
