use petgraph::graph::NodeIndex;
use reglang_lib::{
    automaton::{Alphabet, Automaton, Label},
    error::{AutomatonError, Stage},
    validation::{assert_deterministic, assert_equivalent, assert_well_formed},
};

fn s(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

fn letter(alphabet: &Alphabet, symbol: char) -> Automaton {
    Automaton::new(alphabet, symbol).unwrap()
}

/// Accepts `a*ab`, with a non-deterministic choice on `a` in state 0.
fn a_star_a_b(alphabet: &Alphabet) -> Automaton {
    let mut nfa = Automaton::empty(alphabet);
    let q1 = nfa.add_state(false);
    let q2 = nfa.add_state(true);
    let q0 = nfa.initial();

    nfa.add_transition(q0, Label::Letter('a'), [q0, q1]).unwrap();
    nfa.add_transition(q1, Label::Letter('b'), [q2]).unwrap();

    nfa
}

#[test]
fn test_determinize_rejects_epsilon_transitions() {
    let alphabet = Alphabet::default();
    let union = letter(&alphabet, 'a').union(&letter(&alphabet, 'b'));

    assert!(matches!(
        union.determinize(),
        Err(AutomatonError::PreconditionViolation {
            stage: Stage::Determinization,
            ..
        })
    ));
}

#[test]
fn test_determinize_union() {
    let alphabet = Alphabet::default();
    let union = letter(&alphabet, 'a').union(&letter(&alphabet, 'b'));

    let dfa = union.remove_epsilon_transitions().determinize().unwrap();

    assert_eq!(dfa.state_count(), 3);
    assert_eq!(dfa.final_states(), vec![s(1), s(2)]);
    assert_eq!(dfa.destinations(s(0), Label::Letter('a')), vec![s(1)]);
    assert_eq!(dfa.destinations(s(0), Label::Letter('b')), vec![s(2)]);
    // no empty subset is materialized
    assert!(dfa.destinations(s(0), Label::Letter('c')).is_empty());
    assert_eq!(dfa.transitions().len(), 2);
    assert_eq!(dfa.name(), "Det(((a)|(b)))");
    assert_deterministic(&dfa);
    assert_well_formed(&dfa);
}

#[test]
fn test_determinize_subsets() {
    let alphabet = Alphabet::default();
    let nfa = a_star_a_b(&alphabet);

    let dfa = nfa.determinize().unwrap();

    // {0} -> 0, {0, 1} -> 1, {2} -> 2
    assert_eq!(dfa.state_count(), 3);
    assert_eq!(dfa.final_states(), vec![s(2)]);
    assert_eq!(dfa.successor(s(0), 'a'), Some(s(1)));
    assert_eq!(dfa.successor(s(0), 'b'), None);
    assert_eq!(dfa.successor(s(1), 'a'), Some(s(1)));
    assert_eq!(dfa.successor(s(1), 'b'), Some(s(2)));
    assert_eq!(dfa.successor(s(2), 'a'), None);
    assert_deterministic(&dfa);
    assert_equivalent(&nfa, &dfa);
}

#[test]
fn test_determinize_is_reproducible() {
    let alphabet = Alphabet::default();
    let automaton = letter(&alphabet, 'a')
        .union(&letter(&alphabet, 'b').kleene_star())
        .concatenation(&letter(&alphabet, 'c'))
        .remove_epsilon_transitions();

    let first = automaton.determinize().unwrap();
    let second = automaton.determinize().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.transitions(), second.transitions());
}

#[test]
fn test_determinize_only_reachable_states() {
    let alphabet = Alphabet::default();
    let mut nfa = letter(&alphabet, 'a');
    // unreachable accepting state with a self loop
    let unreachable = nfa.add_state(true);
    nfa.add_transition(unreachable, Label::Letter('b'), [unreachable])
        .unwrap();

    let dfa = nfa.determinize().unwrap();

    assert_eq!(dfa.state_count(), 2);
    assert_eq!(dfa.final_states(), vec![s(1)]);
}

#[test]
fn test_determinize_empty_language() {
    let alphabet = Alphabet::default();

    let dfa = Automaton::empty(&alphabet).determinize().unwrap();

    assert_eq!(dfa.state_count(), 1);
    assert!(dfa.final_states().is_empty());
    assert!(dfa.transitions().is_empty());
}
