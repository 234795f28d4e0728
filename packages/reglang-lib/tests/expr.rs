use reglang_lib::{
    automaton::{Alphabet, Automaton},
    error::AutomatonError,
    expr::RegularExpression,
    validation::assert_equivalent,
};

fn a_or_b_star() -> RegularExpression {
    RegularExpression::star(RegularExpression::union(
        RegularExpression::symbol('a'),
        RegularExpression::symbol('b'),
    ))
}

#[test]
fn test_to_automaton_matches_combinators() {
    let alphabet = Alphabet::default();
    let a = Automaton::new(&alphabet, 'a').unwrap();
    let b = Automaton::new(&alphabet, 'b').unwrap();

    let automaton = a_or_b_star().to_automaton(&alphabet).unwrap();

    assert_eq!(automaton, a.union(&b).kleene_star());
    assert_eq!(automaton.name(), "(((a)|(b)))*");
}

#[test]
fn test_to_automaton_constants() {
    let alphabet = Alphabet::default();

    let empty = RegularExpression::Empty.to_automaton(&alphabet).unwrap();
    let epsilon = RegularExpression::Epsilon.to_automaton(&alphabet).unwrap();

    assert_eq!(empty, Automaton::empty(&alphabet));
    assert_eq!(epsilon, Automaton::epsilon(&alphabet));
}

#[test]
fn test_to_automaton_rejects_foreign_symbols() {
    let alphabet = Alphabet::default();

    // markers are only valid through the dedicated variants
    let marker = RegularExpression::union(
        RegularExpression::symbol('a'),
        RegularExpression::symbol('E'),
    );
    assert!(matches!(
        marker.to_automaton(&alphabet),
        Err(AutomatonError::InvalidSymbol { symbol: 'E', .. })
    ));

    let foreign = RegularExpression::star(RegularExpression::symbol('z'));
    assert!(matches!(
        foreign.to_automaton(&alphabet),
        Err(AutomatonError::InvalidSymbol { symbol: 'z', .. })
    ));
}

#[test]
fn test_display() {
    assert_eq!(a_or_b_star().to_string(), "((a|b))*");
    assert_eq!(
        RegularExpression::concatenation(RegularExpression::Epsilon, RegularExpression::Empty)
            .to_string(),
        "(ε.∅)"
    );
}

#[test]
fn test_parse_json() {
    let expression: RegularExpression =
        serde_json::from_str(r#"{"star":{"union":[{"symbol":"a"},{"symbol":"b"}]}}"#).unwrap();
    assert_eq!(expression, a_or_b_star());

    let epsilon: RegularExpression = serde_json::from_str(r#""epsilon""#).unwrap();
    assert_eq!(epsilon, RegularExpression::Epsilon);

    let written = serde_json::to_string(&a_or_b_star()).unwrap();
    assert_eq!(written, r#"{"star":{"union":[{"symbol":"a"},{"symbol":"b"}]}}"#);

    assert!(serde_json::from_str::<RegularExpression>(r#"{"plus":"a"}"#).is_err());
}

#[test]
fn test_custom_alphabet() {
    let alphabet = Alphabet::new(['0', '1'], 'e', 'o').unwrap();
    let expression = RegularExpression::concatenation(
        RegularExpression::symbol('1'),
        RegularExpression::star(RegularExpression::symbol('0')),
    );

    let automaton = expression.to_automaton(&alphabet).unwrap();
    let one = Automaton::new(&alphabet, '1').unwrap();
    let zeros = Automaton::new(&alphabet, '0').unwrap().kleene_star();

    assert_equivalent(&automaton, &one.concatenation(&zeros));
    assert!(RegularExpression::symbol('a').to_automaton(&alphabet).is_err());
}
