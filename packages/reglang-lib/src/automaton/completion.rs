use crate::{
    automaton::Automaton,
    error::{AutomatonError, Stage},
};

impl Automaton {
    /// Turns a deterministic automaton into a complete one.
    ///
    /// If some `(state, letter)` pair has no transition, a single
    /// non-accepting trap state is added with id `n`, every missing pair is
    /// routed to it and it loops to itself on every letter. An automaton that
    /// is already complete is returned unchanged.
    pub fn complete(&self) -> Result<Automaton, AutomatonError> {
        if !self.is_deterministic() {
            return Err(AutomatonError::precondition(
                Stage::Completion,
                "the automaton is not deterministic",
            ));
        }

        let missing = self.missing_transitions();
        let mut result = self.clone();

        if missing.is_empty() {
            return Ok(result);
        }

        let trap = result.add_state(false);
        result.set_trap(trap);

        for (state, label) in missing.iter().copied() {
            result.push_transition(state, label, trap);
        }

        for label in self.alphabet.labels() {
            result.push_transition(trap, label, trap);
        }

        tracing::debug!(
            "Added trap state {} for {} missing transitions",
            trap.index(),
            missing.len()
        );

        Ok(result)
    }
}
