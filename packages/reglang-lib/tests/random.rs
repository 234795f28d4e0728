use rand::{RngExt, SeedableRng, rngs::StdRng};
use reglang_lib::{
    automaton::{Alphabet, Automaton, are_equivalent},
    expr::RegularExpression,
    validation::{assert_complete, assert_equivalent, assert_well_formed},
};

pub struct RandomOptions {
    pub seed: u64,
    pub count: usize,
    pub max_depth: usize,
}

impl Default for RandomOptions {
    fn default() -> Self {
        RandomOptions {
            seed: 1,
            count: 25,
            max_depth: 3,
        }
    }
}

impl RandomOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

fn random_expression(r: &mut StdRng, alphabet: &Alphabet, depth: usize) -> RegularExpression {
    if depth == 0 || r.random_bool(0.25) {
        return match r.random_range(0..10) {
            0 => RegularExpression::Empty,
            1 => RegularExpression::Epsilon,
            _ => {
                let letters = alphabet.letters();
                RegularExpression::symbol(letters[r.random_range(0..letters.len())])
            }
        };
    }

    match r.random_range(0..3) {
        0 => RegularExpression::union(
            random_expression(r, alphabet, depth - 1),
            random_expression(r, alphabet, depth - 1),
        ),
        1 => RegularExpression::concatenation(
            random_expression(r, alphabet, depth - 1),
            random_expression(r, alphabet, depth - 1),
        ),
        _ => RegularExpression::star(random_expression(r, alphabet, depth - 1)),
    }
}

/// Runs `check` on `options.count` random automata over the alphabet `ab`.
fn random_automaton_test(
    options: RandomOptions,
    check: impl Fn(&mut StdRng, &Alphabet, Automaton),
) {
    let alphabet = Alphabet::new(['a', 'b'], 'E', 'O').unwrap();
    let mut r = StdRng::seed_from_u64(options.seed);

    for _ in 0..options.count {
        let expression = random_expression(&mut r, &alphabet, options.max_depth);
        let automaton = expression.to_automaton(&alphabet).unwrap();
        check(&mut r, &alphabet, automaton);
    }
}

fn random_automaton(r: &mut StdRng, alphabet: &Alphabet, max_depth: usize) -> Automaton {
    random_expression(r, alphabet, max_depth)
        .to_automaton(alphabet)
        .unwrap()
}

#[test]
fn test_random_normalize_is_minimal_and_complete() {
    random_automaton_test(RandomOptions::default(), |_, _, automaton| {
        assert_well_formed(&automaton);

        let minimal = automaton.normalize().unwrap();
        assert_well_formed(&minimal);
        assert_complete(&minimal);

        let again = minimal.normalize().unwrap();
        assert_eq!(again.state_count(), minimal.state_count());
        assert!(are_equivalent(&minimal, &again).unwrap());
    });
}

#[test]
fn test_random_stages_preserve_language() {
    random_automaton_test(RandomOptions::default().with_seed(7), |_, _, automaton| {
        let epsilon_free = automaton.remove_epsilon_transitions();
        assert_eq!(epsilon_free.state_count(), automaton.state_count());
        assert!(!epsilon_free.has_epsilon_transitions());

        let deterministic = epsilon_free.determinize().unwrap();
        assert!(deterministic.is_deterministic());

        let complete = deterministic.complete().unwrap();
        assert!(complete.is_complete());
        assert!(complete.state_count() <= deterministic.state_count() + 1);

        let minimal = complete.minimize().unwrap();
        assert!(minimal.state_count() <= complete.state_count());

        assert_equivalent(&automaton, &epsilon_free);
        assert_equivalent(&automaton, &deterministic);
        assert_equivalent(&automaton, &minimal);
    });
}

#[test]
fn test_random_algebraic_laws() {
    let options = RandomOptions::default()
        .with_seed(42)
        .with_count(15)
        .with_max_depth(2);

    random_automaton_test(options, |r, alphabet, x| {
        let y = random_automaton(r, alphabet, 2);
        let z = random_automaton(r, alphabet, 2);

        assert_equivalent(&x.union(&y), &y.union(&x));
        assert_equivalent(&x.union(&x), &x);
        assert_equivalent(
            &x.concatenation(&y).concatenation(&z),
            &x.concatenation(&y.concatenation(&z)),
        );
        assert_equivalent(
            &x.concatenation(&y.union(&z)),
            &x.concatenation(&y).union(&x.concatenation(&z)),
        );
        assert_equivalent(&x.kleene_star().kleene_star(), &x.kleene_star());
    });
}

#[test]
fn test_random_star_accepts_empty_word() {
    random_automaton_test(RandomOptions::default().with_seed(3), |_, _, automaton| {
        let minimal = automaton.kleene_star().normalize().unwrap();
        assert!(minimal.is_accepting(minimal.initial()));
    });
}
