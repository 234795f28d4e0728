use crate::{automaton::Automaton, error::AutomatonError};

impl Automaton {
    /// Runs the full pipeline: epsilon removal, determinization, completion
    /// and minimization. The result is the minimal complete deterministic
    /// automaton of the language, with states numbered reproducibly.
    pub fn normalize(&self) -> Result<Automaton, AutomatonError> {
        let _span = tracing::debug_span!("normalize", name = %self.name).entered();

        let epsilon_free = self.remove_epsilon_transitions();
        let deterministic = epsilon_free.determinize()?;
        let complete = deterministic.complete()?;
        complete.minimize()
    }
}
