use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::automaton::Automaton;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableTransition {
    pub from: usize,
    /// The letter, or the alphabet's epsilon marker.
    pub label: String,
    pub to: Vec<usize>,
}

/// A read-only export of an automaton for external consumers such as
/// renderers. It is not meant to be read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableAutomaton {
    pub name: String,
    pub alphabet: Vec<char>,
    pub state_count: usize,
    pub initial: usize,
    pub final_states: Vec<usize>,
    pub transitions: Vec<SerializableTransition>,
}

impl From<&Automaton> for SerializableAutomaton {
    fn from(automaton: &Automaton) -> Self {
        SerializableAutomaton {
            name: automaton.name().to_string(),
            alphabet: automaton.alphabet().letters().to_vec(),
            state_count: automaton.state_count(),
            initial: automaton.initial().index(),
            final_states: automaton
                .final_states()
                .iter()
                .map(|state| state.index())
                .collect_vec(),
            transitions: automaton
                .transitions()
                .into_iter()
                .map(|((from, label), to)| SerializableTransition {
                    from: from.index(),
                    label: automaton.alphabet().render(label).to_string(),
                    to: to.iter().map(|state| state.index()).collect_vec(),
                })
                .collect_vec(),
        }
    }
}
