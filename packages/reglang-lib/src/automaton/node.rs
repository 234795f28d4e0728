/// Per-state data stored in the automaton's state arena.
///
/// Invariant: A state cannot be both accepting and a trap state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StateNode {
    pub accepting: bool,
    /// Whether the state is a known trap state, meaning every transition
    /// loops back to it and it is not accepting. When this is unknown it is
    /// set to false. Informational only, no algorithm depends on it.
    pub trap: bool,
}

impl StateNode {
    pub fn new(accepting: bool, trap: bool) -> Self {
        assert!(
            !(accepting && trap),
            "A state cannot be both accepting and a trap state"
        );
        StateNode { accepting, trap }
    }

    pub fn non_accepting() -> Self {
        StateNode::new(false, false)
    }

    pub fn trap() -> Self {
        StateNode::new(false, true)
    }
}
