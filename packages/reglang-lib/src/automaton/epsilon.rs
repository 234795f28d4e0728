use std::collections::BTreeSet;

use itertools::Itertools;
use petgraph::{Direction, visit::EdgeRef};

use crate::automaton::{Automaton, Label, StateId};

impl Automaton {
    /// Computes, for every state, the set of states reachable from it using
    /// zero or more epsilon transitions. The result is indexed by state id
    /// and every closure contains its own state.
    pub fn epsilon_closure(&self) -> Vec<BTreeSet<StateId>> {
        self.graph
            .node_indices()
            .map(|state| self.epsilon_closure_of(state))
            .collect_vec()
    }

    /// Breadth-first expansion from `state` along epsilon edges. Each round
    /// only keeps states not captured yet, so epsilon cycles terminate after
    /// at most `n` rounds.
    fn epsilon_closure_of(&self, state: StateId) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::from([state]);
        let mut frontier = vec![state];

        while !frontier.is_empty() {
            let mut next = vec![];

            for current in frontier {
                for edge in self.graph.edges_directed(current, Direction::Outgoing) {
                    if edge.weight().is_epsilon() && closure.insert(edge.target()) {
                        next.push(edge.target());
                    }
                }
            }

            frontier = next;
        }

        closure
    }

    /// Returns an equivalent automaton without epsilon transitions. State
    /// count and state ids are unchanged: a state becomes accepting if its
    /// closure contains an accepting state, and it inherits every letter
    /// transition of every state in its closure.
    pub fn remove_epsilon_transitions(&self) -> Automaton {
        let closures = self.epsilon_closure();
        let mut result =
            Automaton::with_states(self.alphabet.clone(), self.state_count(), self.name.clone());

        for (state, closure) in self.graph.node_indices().zip(closures) {
            result.graph[state].accepting = self.is_accepting_set(&closure);

            for &reachable in &closure {
                for edge in self.graph.edges_directed(reachable, Direction::Outgoing) {
                    if let Label::Letter(_) = edge.weight() {
                        result.push_transition(state, *edge.weight(), edge.target());
                    }
                }
            }
        }

        tracing::debug!(
            "Removed epsilon transitions: {} transitions became {}",
            self.transition_count(),
            result.transition_count()
        );

        result
    }
}
