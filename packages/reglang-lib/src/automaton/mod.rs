use std::{
    collections::BTreeMap,
    fmt::{Debug, Display},
};

use itertools::Itertools;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use serde::{Deserialize, Serialize};

use crate::{automaton::node::StateNode, error::AutomatonError};

pub mod alphabet;
pub mod completion;
pub mod construction;
pub mod determinization;
pub mod epsilon;
pub mod equivalence;
pub mod minimization;
pub mod node;
pub mod pipeline;
pub mod serializable;

pub use alphabet::Alphabet;
pub use equivalence::are_equivalent;

/// Identifies a state. States of an automaton with `n` states are always the
/// dense range `0..n`, and state `0` is the initial state.
pub type StateId = NodeIndex<u32>;

/// The label of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Letter(char),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Letter(letter) => write!(f, "{}", letter),
            Label::Epsilon => write!(f, "ε"),
        }
    }
}

/// A finite automaton over a fixed alphabet, possibly non-deterministic and
/// possibly with epsilon transitions.
///
/// The states live in a petgraph arena. States are never removed, so node
/// indices stay dense and double as state ids. Every transformation builds a
/// fresh automaton and only reads from its input.
#[derive(Clone)]
pub struct Automaton {
    alphabet: Alphabet,
    graph: DiGraph<StateNode, Label>,
    name: String,
}

impl Automaton {
    /// Builds the elementary automaton for a single character: a letter of
    /// the alphabet, the epsilon marker or the empty-language marker.
    pub fn new(alphabet: &Alphabet, symbol: char) -> Result<Self, AutomatonError> {
        if symbol == alphabet.empty_marker() {
            return Ok(Automaton::empty(alphabet));
        }
        if symbol == alphabet.epsilon_marker() {
            return Ok(Automaton::epsilon(alphabet));
        }
        if !alphabet.contains(symbol) {
            return Err(AutomatonError::InvalidSymbol {
                symbol,
                letters: alphabet.letters().to_vec(),
            });
        }

        let mut automaton = Automaton::with_states(alphabet.clone(), 2, format!("({})", symbol));
        automaton.graph[NodeIndex::new(1)].accepting = true;
        automaton.push_transition(NodeIndex::new(0), Label::Letter(symbol), NodeIndex::new(1));

        Ok(automaton)
    }

    /// The automaton accepting only the empty word.
    pub fn epsilon(alphabet: &Alphabet) -> Self {
        let mut automaton = Automaton::with_states(
            alphabet.clone(),
            1,
            format!("({})", alphabet.epsilon_marker()),
        );
        automaton.graph[NodeIndex::new(0)].accepting = true;
        automaton
    }

    /// The automaton accepting no word at all.
    pub fn empty(alphabet: &Alphabet) -> Self {
        Automaton::with_states(alphabet.clone(), 1, String::new())
    }

    /// Creates an automaton with `state_count` non-accepting states and no
    /// transitions.
    pub(crate) fn with_states(alphabet: Alphabet, state_count: usize, name: String) -> Self {
        let mut graph = DiGraph::with_capacity(state_count, state_count);
        for _ in 0..state_count {
            graph.add_node(StateNode::non_accepting());
        }

        Automaton {
            alphabet,
            graph,
            name,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The display name built up by the constructors, e.g. `((a)|(b))*`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn initial(&self) -> StateId {
        NodeIndex::new(0)
    }

    pub fn iter_states(&self) -> impl Iterator<Item = StateId> {
        self.graph.node_indices()
    }

    pub fn node(&self, state: StateId) -> Option<&StateNode> {
        self.graph.node_weight(state)
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.graph
            .node_weight(state)
            .is_some_and(|node| node.accepting)
    }

    /// Checks if a set of states contains an accepting state.
    pub fn is_accepting_set<'a>(&self, states: impl IntoIterator<Item = &'a StateId>) -> bool {
        states.into_iter().any(|&state| self.is_accepting(state))
    }

    /// The accepting states in ascending order.
    pub fn final_states(&self) -> Vec<StateId> {
        self.graph
            .node_indices()
            .filter(|&state| self.graph[state].accepting)
            .collect_vec()
    }

    /// All destinations of `state` under `label`, sorted and duplicate free.
    pub fn destinations(&self, state: StateId, label: Label) -> Vec<StateId> {
        self.destinations_iter(state, label).sorted().dedup().collect_vec()
    }

    pub(crate) fn destinations_iter(
        &self,
        state: StateId,
        label: Label,
    ) -> impl Iterator<Item = StateId> + '_ {
        self.graph
            .edges_directed(state, Direction::Outgoing)
            .filter(move |edge| *edge.weight() == label)
            .map(|edge| edge.target())
    }

    /// The destination of `state` under `letter`. For a deterministic
    /// automaton this is the unique destination, if any.
    pub fn successor(&self, state: StateId, letter: char) -> Option<StateId> {
        self.destinations(state, Label::Letter(letter))
            .into_iter()
            .next()
    }

    /// The transition table, keyed by `(state, label)` in ascending order.
    /// Pairs without a transition are absent.
    pub fn transitions(&self) -> BTreeMap<(StateId, Label), Vec<StateId>> {
        let mut table: BTreeMap<(StateId, Label), Vec<StateId>> = BTreeMap::new();

        for edge in self.graph.edge_references() {
            table
                .entry((edge.source(), *edge.weight()))
                .or_default()
                .push(edge.target());
        }

        for destinations in table.values_mut() {
            destinations.sort();
            destinations.dedup();
        }

        table
    }

    pub fn transition_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.graph
            .edge_references()
            .any(|edge| edge.weight().is_epsilon())
    }

    /// Whether the automaton has no epsilon transitions and at most one
    /// destination per `(state, letter)` pair.
    pub fn is_deterministic(&self) -> bool {
        !self.has_epsilon_transitions()
            && self
                .transitions()
                .values()
                .all(|destinations| destinations.len() <= 1)
    }

    /// Whether the automaton is deterministic and has exactly one destination
    /// for every state and every letter of the alphabet.
    pub fn is_complete(&self) -> bool {
        self.is_deterministic() && self.missing_transitions().is_empty()
    }

    /// All `(state, letter)` pairs without any destination.
    pub(crate) fn missing_transitions(&self) -> Vec<(StateId, Label)> {
        self.graph
            .node_indices()
            .cartesian_product(self.alphabet.labels().collect_vec())
            .filter(|&(state, label)| self.destinations_iter(state, label).next().is_none())
            .collect_vec()
    }

    /// Adds a new state and returns its id, which is always the first unused
    /// id.
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        self.graph.add_node(StateNode::new(accepting, false))
    }

    pub fn set_accepting(&mut self, state: StateId, accepting: bool) -> Result<(), AutomatonError> {
        self.check_state(state)?;

        let node = &mut self.graph[state];
        node.accepting = accepting;
        if accepting {
            node.trap = false;
        }

        Ok(())
    }

    /// Adds transitions from `state` to every state in `destinations` under
    /// `label`. Destinations already recorded for the pair are kept and
    /// duplicates are ignored. Nothing is recorded if any argument is invalid.
    pub fn add_transition(
        &mut self,
        state: StateId,
        label: Label,
        destinations: impl IntoIterator<Item = StateId>,
    ) -> Result<(), AutomatonError> {
        self.check_state(state)?;
        self.alphabet.check_label(label)?;

        let destinations = destinations.into_iter().collect_vec();
        for &destination in &destinations {
            self.check_state(destination)?;
        }

        for destination in destinations {
            self.push_transition(state, label, destination);
        }

        Ok(())
    }

    /// Records a single transition without validation. Callers guarantee
    /// that both states exist and the label belongs to the alphabet.
    pub(crate) fn push_transition(&mut self, from: StateId, label: Label, to: StateId) {
        let exists = self
            .graph
            .edges_connecting(from, to)
            .any(|edge| *edge.weight() == label);

        if !exists {
            self.graph.add_edge(from, to, label);
        }
    }

    pub(crate) fn set_trap(&mut self, state: StateId) {
        self.graph[state] = StateNode::trap();
    }

    fn check_state(&self, state: StateId) -> Result<(), AutomatonError> {
        if state.index() < self.state_count() {
            Ok(())
        } else {
            Err(AutomatonError::StateOutOfRange {
                state: state.index(),
                state_count: self.state_count(),
            })
        }
    }
}

/// Structural equality: alphabet, state count, accepting states and the
/// transition table. The name and trap flags are informational and ignored.
impl PartialEq for Automaton {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet
            && self.state_count() == other.state_count()
            && self.final_states() == other.final_states()
            && self.transitions() == other.transitions()
    }
}

impl Eq for Automaton {}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Automaton {}", self.name)?;
        writeln!(f, "States: {}", self.state_count())?;
        writeln!(
            f,
            "Final states: [{}]",
            self.final_states().iter().map(|state| state.index()).join(", ")
        )?;
        writeln!(f, "Transitions:")?;
        for ((state, label), destinations) in self.transitions() {
            writeln!(
                f,
                "({}, {}): [{}]",
                state.index(),
                self.alphabet.render(label),
                destinations.iter().map(|state| state.index()).join(", ")
            )?;
        }

        Ok(())
    }
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("name", &self.name)
            .field("alphabet", &self.alphabet.letters())
            .field("state_count", &self.graph.node_count())
            .field(
                "final_states",
                &self
                    .final_states()
                    .iter()
                    .map(|state| state.index())
                    .collect_vec(),
            )
            .field(
                "trap_states",
                &self
                    .graph
                    .node_indices()
                    .filter(|state| self.graph[*state].trap)
                    .map(|state| state.index())
                    .collect_vec(),
            )
            .field("edge_count", &self.graph.edge_count())
            .field(
                "edges",
                &self
                    .graph
                    .edge_references()
                    .map(|edge| {
                        format!(
                            "{} --- {} --> {}",
                            edge.source().index(),
                            edge.weight(),
                            edge.target().index()
                        )
                    })
                    .collect_vec(),
            )
            .finish()
    }
}
