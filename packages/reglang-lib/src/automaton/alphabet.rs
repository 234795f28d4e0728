use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{automaton::Label, error::AutomatonError};

/// The fixed, ordered input alphabet shared by all automata of one
/// computation, together with the two marker characters used to request the
/// epsilon language and the empty language when building elementary automata.
///
/// The order of the letters is the order in which the pipeline stages iterate
/// symbols, which makes state numbering reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alphabet {
    letters: Vec<char>,
    epsilon: char,
    empty: char,
}

impl Alphabet {
    pub fn new(
        letters: impl IntoIterator<Item = char>,
        epsilon: char,
        empty: char,
    ) -> Result<Self, AutomatonError> {
        let letters = letters.into_iter().collect_vec();

        if let Some(duplicate) = letters.iter().duplicates().next() {
            return Err(AutomatonError::InvalidAlphabet(format!(
                "letter {:?} appears more than once",
                duplicate
            )));
        }
        if epsilon == empty {
            return Err(AutomatonError::InvalidAlphabet(format!(
                "epsilon and empty markers are both {:?}",
                epsilon
            )));
        }
        for marker in [epsilon, empty] {
            if letters.contains(&marker) {
                return Err(AutomatonError::InvalidAlphabet(format!(
                    "marker {:?} is also a letter",
                    marker
                )));
            }
        }

        Ok(Alphabet {
            letters,
            epsilon,
            empty,
        })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn epsilon_marker(&self) -> char {
        self.epsilon
    }

    pub fn empty_marker(&self) -> char {
        self.empty
    }

    /// The letters as transition labels, in alphabet order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.letters.iter().map(|&letter| Label::Letter(letter))
    }

    /// Renders a label as a single character, using the epsilon marker for
    /// epsilon transitions.
    pub fn render(&self, label: Label) -> char {
        match label {
            Label::Letter(letter) => letter,
            Label::Epsilon => self.epsilon,
        }
    }

    pub(crate) fn check_label(&self, label: Label) -> Result<(), AutomatonError> {
        match label {
            Label::Letter(letter) if !self.contains(letter) => Err(AutomatonError::InvalidSymbol {
                symbol: letter,
                letters: self.letters.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            letters: vec!['a', 'b', 'c'],
            epsilon: 'E',
            empty: 'O',
        }
    }
}

#[test]
fn test_alphabet_validation() {
    assert!(Alphabet::new(['a', 'b'], 'E', 'O').is_ok());
    assert!(matches!(
        Alphabet::new(['a', 'a'], 'E', 'O'),
        Err(AutomatonError::InvalidAlphabet(_))
    ));
    assert!(matches!(
        Alphabet::new(['a', 'E'], 'E', 'O'),
        Err(AutomatonError::InvalidAlphabet(_))
    ));
    assert!(matches!(
        Alphabet::new(['a'], 'E', 'E'),
        Err(AutomatonError::InvalidAlphabet(_))
    ));
}
