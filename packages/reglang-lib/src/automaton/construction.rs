//! Thompson-style combinators. Each one builds a fresh automaton as the
//! disjoint union of its operands, renumbered by offset, and wires the pieces
//! together with epsilon transitions.

use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::automaton::{Automaton, Label, StateId};

impl Automaton {
    /// Copies every state and transition of `source` into `self`, shifting
    /// all ids by the number of states `self` already has. Returns that
    /// offset, which is also where the copy's initial state ends up.
    fn embed(&mut self, source: &Automaton) -> usize {
        let offset = self.state_count();

        for state in source.graph.node_indices() {
            self.graph.add_node(source.graph[state]);
        }

        for edge in source.graph.edge_references() {
            self.graph.add_edge(
                shift(edge.source(), offset),
                shift(edge.target(), offset),
                *edge.weight(),
            );
        }

        offset
    }

    /// Builds an automaton for the union of both languages. A new initial
    /// state `0` branches by epsilon into `self` (at offset 1) and `other`
    /// (at offset `1 + n1`). Both copies keep their accepting states.
    pub fn union(&self, other: &Automaton) -> Automaton {
        assert_eq!(
            self.alphabet, other.alphabet,
            "Alphabets must be the same to build a union"
        );

        let mut union = Automaton::with_states(
            self.alphabet.clone(),
            1,
            format!("({}|{})", self.name, other.name),
        );
        let initial = union.initial();

        let offset_self = union.embed(self);
        let offset_other = union.embed(other);

        union.push_transition(initial, Label::Epsilon, NodeIndex::new(offset_self));
        union.push_transition(initial, Label::Epsilon, NodeIndex::new(offset_other));

        tracing::trace!(
            "Union of {} and {} states has {} states",
            self.state_count(),
            other.state_count(),
            union.state_count()
        );

        union
    }

    /// Builds an automaton for the concatenation of both languages. `self`
    /// keeps its ids, `other` is shifted by `n1`, and every accepting state of
    /// `self` gets an epsilon transition to the initial state of the copy of
    /// `other`. Only the accepting states of `other` stay accepting.
    pub fn concatenation(&self, other: &Automaton) -> Automaton {
        assert_eq!(
            self.alphabet, other.alphabet,
            "Alphabets must be the same to build a concatenation"
        );

        let mut concatenation = Automaton::with_states(
            self.alphabet.clone(),
            0,
            format!("({}.{})", self.name, other.name),
        );

        concatenation.embed(self);
        let offset = concatenation.embed(other);
        let other_initial = NodeIndex::new(offset);

        for state in self.final_states() {
            concatenation.graph[state].accepting = false;
            concatenation.push_transition(state, Label::Epsilon, other_initial);
        }

        concatenation
    }

    /// Builds an automaton for the Kleene star of the language. A new
    /// accepting initial state `0` leads by epsilon into the copy of `self`
    /// at offset 1, and every accepting state of the copy loops back to the
    /// copy's initial state.
    pub fn kleene_star(&self) -> Automaton {
        let mut star = Automaton::with_states(self.alphabet.clone(), 1, format!("({})*", self.name));
        let initial = star.initial();
        star.graph[initial].accepting = true;

        let offset = star.embed(self);
        let inner_initial = NodeIndex::new(offset);

        star.push_transition(initial, Label::Epsilon, inner_initial);
        for state in self.final_states() {
            star.push_transition(shift(state, offset), Label::Epsilon, inner_initial);
        }

        star
    }
}

fn shift(state: StateId, offset: usize) -> StateId {
    NodeIndex::new(state.index() + offset)
}
