use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::{
    automaton::{Automaton, StateId},
    error::{AutomatonError, Stage},
};

/// Checks whether two minimal, complete, deterministic automata are
/// isomorphic, which for minimal automata is the same as accepting the same
/// language.
///
/// Both automata are walked breadth first in lockstep from their initial
/// states while a bijection between their states is built up. The check is
/// only a language test when both inputs are minimal: two non-minimal
/// automata for the same language can be reported as different.
///
/// Fails if either input is not complete and deterministic. Alphabets are
/// compared as sets of letters, their order does not matter.
pub fn are_equivalent(a: &Automaton, b: &Automaton) -> Result<bool, AutomatonError> {
    for (side, automaton) in [("left", a), ("right", b)] {
        if !automaton.is_complete() {
            return Err(AutomatonError::precondition(
                Stage::Equivalence,
                format!("the {} automaton is not complete and deterministic", side),
            ));
        }
    }

    let letters = a.alphabet.letters().iter().collect::<HashSet<_>>();
    if letters != b.alphabet.letters().iter().collect::<HashSet<_>>()
        || a.state_count() != b.state_count()
        || a.final_states().len() != b.final_states().len()
    {
        return Ok(false);
    }

    let mut forward: HashMap<StateId, StateId> = HashMap::new();
    let mut backward: HashMap<StateId, StateId> = HashMap::new();
    let mut queue = VecDeque::new();

    forward.insert(a.initial(), b.initial());
    backward.insert(b.initial(), a.initial());
    queue.push_back((a.initial(), b.initial()));

    while let Some((left, right)) = queue.pop_front() {
        if a.is_accepting(left) != b.is_accepting(right) {
            tracing::debug!(
                "States {} and {} differ in acceptance",
                left.index(),
                right.index()
            );
            return Ok(false);
        }

        for &letter in a.alphabet.letters() {
            match (a.successor(left, letter), b.successor(right, letter)) {
                (None, None) => {}
                (Some(next_left), Some(next_right)) => {
                    match (forward.get(&next_left), backward.get(&next_right)) {
                        (None, None) => {
                            forward.insert(next_left, next_right);
                            backward.insert(next_right, next_left);
                            queue.push_back((next_left, next_right));
                        }
                        (Some(&mapped), Some(&mapped_back))
                            if mapped == next_right && mapped_back == next_left => {}
                        _ => return Ok(false),
                    }
                }
                _ => return Ok(false),
            }
        }
    }

    Ok(true)
}
