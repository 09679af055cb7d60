//! Whole-engine properties, checked over a corpus of parsed and generated trees.

use prop_logic::assignment::Assignment;
use prop_logic::display::Notation;
use prop_logic::{compare_expressions, generate, parse, Node, Op, ParseError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TEXTS: &[&str] = &[
    "A",
    "NOT A",
    "A AND B",
    "NOT A AND B",
    "NOT (B => A)",
    "A OR B AND C",
    "(A XOR B) <=> (C => NOT A)",
    "NOT (A AND (B OR NOT C)) XOR D",
    "p -> q -> r",
    "¬(x ∧ y) ∨ (y ⇔ ¬z)",
    "(a | b) & (!a | c) & (!b | !c)",
];

fn corpus() -> Vec<Node> {
    let mut trees: Vec<Node> = TEXTS.iter().map(|t| parse(t).unwrap()).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for leaves in 1..=9 {
        for _ in 0..4 {
            trees.push(generate(&mut rng, leaves, &["A", "B", "C", "D", "E"]));
        }
    }
    trees
}

fn any_node(tree: &Node, pred: impl Fn(&Node) -> bool) -> bool {
    let mut found = false;
    tree.walk(&mut |n| found |= pred(n));
    found
}

// ─── Evaluation ────────────────────────────────────────────────────────────────

#[test]
fn negation_complements_every_row() {
    for tree in corpus() {
        let variables = tree.variable_names();
        let mut negated = tree.clone();
        negated.negate();
        for a in Assignment::rows(&variables) {
            assert_eq!(negated.eval(&a), !tree.eval(&a), "{} at {}", tree, a);
        }
    }
}

#[test]
fn scenario_and_evaluation() {
    use std::collections::HashMap;

    let f = parse("A AND B").unwrap();
    assert!(!f.eval(&HashMap::from([("A", true), ("B", false)])));
    assert!(f.eval(&HashMap::from([("A", true), ("B", true)])));
}

#[test]
fn scenario_and_truth_table() {
    let tt = parse("A AND B").unwrap().truth_table().unwrap();
    assert_eq!(tt.variables, vec!["A", "B"]);
    assert_eq!(tt.table, vec![false, false, false, true]);
}

// ─── Normal forms ──────────────────────────────────────────────────────────────

#[test]
fn normal_forms_have_shape_and_table() {
    for tree in corpus() {
        let tt = tree.truth_table().unwrap();

        let cnf = tree.to_cnf().unwrap();
        assert!(cnf.is_cnf(), "{} -> {}", tree, cnf);
        assert_eq!(cnf.truth_table().unwrap(), tt, "{} -> {}", tree, cnf);

        let dnf = tree.to_dnf().unwrap();
        assert!(dnf.is_dnf(), "{} -> {}", tree, dnf);
        assert_eq!(dnf.truth_table().unwrap(), tt, "{} -> {}", tree, dnf);
    }
}

// ─── Rewrites ──────────────────────────────────────────────────────────────────

#[test]
fn simplify_eliminates_operators() {
    for tree in corpus() {
        let mut simplified = tree.clone();
        simplified.simplify();
        assert!(
            !any_node(&simplified, |n| matches!(n.op(), Some(Op::Xor | Op::Implies | Op::Iff))),
            "{}",
            simplified
        );
        assert_eq!(simplified.truth_table(), tree.truth_table());
    }
}

#[test]
fn negation_pushdown_reaches_literals() {
    for tree in corpus() {
        let mut pushed = tree.clone();
        pushed.simplify_negation();
        assert!(
            !any_node(&pushed, |n| !n.is_literal() && n.is_negated()),
            "{}",
            pushed
        );
        assert_eq!(pushed.truth_table(), tree.truth_table());
    }
}

#[test]
fn shuffle_preserves_truth_table() {
    for tree in corpus() {
        let tt = tree.truth_table().unwrap();
        for seed in 0..20 {
            let mut shuffled = tree.clone();
            shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
            assert_eq!(shuffled.truth_table().unwrap(), tt, "seed {}: {} -> {}", seed, tree, shuffled);
        }
    }
}

#[test]
fn shuffling_a_copy_leaves_the_original() {
    let original = parse("(A AND B) OR NOT (C XOR A)").unwrap();
    let snapshot = original.clone();
    let mut copy = original.clone();
    copy.shuffle(&mut ChaCha8Rng::seed_from_u64(5)).simplify().simplify_negation();
    assert_eq!(original, snapshot);
}

// ─── Parsing ───────────────────────────────────────────────────────────────────

#[test]
fn malformed_text_is_an_error_value() {
    for text in ["((", "(A", "NOT", "A AND", "", "A B", "AND A", "()"] {
        assert!(parse(text).is_err(), "{:?} parsed", text);
    }
    assert!(matches!(parse("(("), Err(ParseError::UnmatchedParenthesis { .. })));
    assert!(matches!(parse("A AND"), Err(ParseError::EmptyExpression { .. })));
}

#[test]
fn oversized_text_is_an_error_value() {
    let deep = format!("{}A{}", "(".repeat(200_000), ")".repeat(200_000));
    assert!(matches!(parse(&deep), Err(ParseError::TooDeep { .. })));

    let long = vec!["A"; 100_000].join(" AND ");
    assert!(matches!(parse(&long), Err(ParseError::TooDeep { .. })));
}

#[test]
fn rendering_round_trips() {
    for tree in corpus() {
        for notation in [Notation::Unicode, Notation::Ascii] {
            let text = tree.render(notation);
            let reparsed = parse(&text).unwrap();
            assert_eq!(reparsed.truth_table(), tree.truth_table(), "{}", text);
        }
    }
}

// ─── Equivalence ───────────────────────────────────────────────────────────────

#[test]
fn scenario_compare_expressions() {
    let same = [parse("NOT A AND B").unwrap(), parse("NOT(B => A)").unwrap()];
    assert_eq!(compare_expressions(&same), Ok(true));

    let different = [parse("A AND B").unwrap(), parse("A OR B").unwrap()];
    assert_eq!(compare_expressions(&different), Ok(false));
}

#[test]
fn every_rewrite_is_equivalent_to_its_source() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for tree in corpus() {
        let exprs = [
            tree.clone(),
            tree.to_nnf(),
            tree.to_cnf().unwrap(),
            tree.to_dnf().unwrap(),
            tree.shuffled(&mut rng),
        ];
        assert_eq!(compare_expressions(&exprs), Ok(true), "{}", tree);
    }
}
