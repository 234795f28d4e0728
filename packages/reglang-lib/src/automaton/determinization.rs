use std::collections::{BTreeSet, VecDeque};

use hashbrown::HashMap;

use crate::{
    automaton::{Automaton, StateId},
    error::{AutomatonError, Stage},
};

impl Automaton {
    /// Determinizes an epsilon-free automaton with the subset construction.
    ///
    /// Each state of the result is a subset of the input's states reachable
    /// from `{0}`. Subsets are discovered breadth first, processing letters in
    /// alphabet order, and get ids in order of first discovery, so the output
    /// is reproducible. Empty subsets are not materialized, the result may be
    /// incomplete.
    pub fn determinize(&self) -> Result<Automaton, AutomatonError> {
        if self.has_epsilon_transitions() {
            return Err(AutomatonError::precondition(
                Stage::Determinization,
                "the automaton still has epsilon transitions",
            ));
        }

        let mut result =
            Automaton::with_states(self.alphabet.clone(), 0, format!("Det({})", self.name));
        let mut state_map: HashMap<BTreeSet<StateId>, StateId> = HashMap::new();

        let start_set = BTreeSet::from([self.initial()]);
        let start = result.add_state(self.is_accepting_set(&start_set));
        state_map.insert(start_set.clone(), start);

        let mut queue = VecDeque::from([start_set]);

        while let Some(subset) = queue.pop_front() {
            let from = state_map[&subset];

            for label in self.alphabet.labels() {
                let target_set = subset
                    .iter()
                    .flat_map(|&state| self.destinations_iter(state, label))
                    .collect::<BTreeSet<_>>();

                if target_set.is_empty() {
                    continue;
                }

                let to = match state_map.get(&target_set) {
                    Some(&existing) => existing,
                    None => {
                        let new_state = result.add_state(self.is_accepting_set(&target_set));
                        state_map.insert(target_set.clone(), new_state);
                        queue.push_back(target_set);
                        new_state
                    }
                };

                result.push_transition(from, label, to);
            }
        }

        tracing::debug!(
            "Determinized {} states into {} subset states",
            self.state_count(),
            result.state_count()
        );

        Ok(result)
    }
}
