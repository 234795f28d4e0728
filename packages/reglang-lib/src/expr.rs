use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    automaton::{Alphabet, Automaton},
    error::AutomatonError,
};

/// An already parsed regular expression.
///
/// In JSON the tree is externally tagged, e.g. `(a|b)*` is
/// `{"star": {"union": [{"symbol": "a"}, {"symbol": "b"}]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegularExpression {
    /// The empty language.
    Empty,
    /// The language containing only the empty word.
    Epsilon,
    Symbol(char),
    Union(Box<RegularExpression>, Box<RegularExpression>),
    Concatenation(Box<RegularExpression>, Box<RegularExpression>),
    Star(Box<RegularExpression>),
}

impl RegularExpression {
    pub fn symbol(letter: char) -> Self {
        RegularExpression::Symbol(letter)
    }

    pub fn union(left: RegularExpression, right: RegularExpression) -> Self {
        RegularExpression::Union(Box::new(left), Box::new(right))
    }

    pub fn concatenation(left: RegularExpression, right: RegularExpression) -> Self {
        RegularExpression::Concatenation(Box::new(left), Box::new(right))
    }

    pub fn star(inner: RegularExpression) -> Self {
        RegularExpression::Star(Box::new(inner))
    }

    /// Builds the Thompson automaton of the expression bottom up.
    pub fn to_automaton(&self, alphabet: &Alphabet) -> Result<Automaton, AutomatonError> {
        Ok(match self {
            RegularExpression::Empty => Automaton::empty(alphabet),
            RegularExpression::Epsilon => Automaton::epsilon(alphabet),
            RegularExpression::Symbol(letter) => {
                // markers are not letters, so they must not sneak in here
                if !alphabet.contains(*letter) {
                    return Err(AutomatonError::InvalidSymbol {
                        symbol: *letter,
                        letters: alphabet.letters().to_vec(),
                    });
                }
                Automaton::new(alphabet, *letter)?
            }
            RegularExpression::Union(left, right) => left
                .to_automaton(alphabet)?
                .union(&right.to_automaton(alphabet)?),
            RegularExpression::Concatenation(left, right) => left
                .to_automaton(alphabet)?
                .concatenation(&right.to_automaton(alphabet)?),
            RegularExpression::Star(inner) => inner.to_automaton(alphabet)?.kleene_star(),
        })
    }
}

impl Display for RegularExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegularExpression::Empty => write!(f, "∅"),
            RegularExpression::Epsilon => write!(f, "ε"),
            RegularExpression::Symbol(letter) => write!(f, "{}", letter),
            RegularExpression::Union(left, right) => write!(f, "({}|{})", left, right),
            RegularExpression::Concatenation(left, right) => write!(f, "({}.{})", left, right),
            RegularExpression::Star(inner) => write!(f, "({})*", inner),
        }
    }
}
