mod support;

use cfpq_grammar::*;

use support::assert_eq_text;

#[test]
fn test_partition_brackets() {
    support::init_logger();
    let wcnf = Wcnf::from_text("S -> a S b | a b", "S").unwrap();

    assert!(wcnf.epsilon_productions().is_empty());
    assert_eq_text(
        wcnf.unary_productions().iter(),
        &["T_a -> a", "T_b -> b"],
    );
    assert_eq_text(
        wcnf.binary_productions().iter(),
        &["S -> T_a T_b", "S -> VAR:g0 T_b", "VAR:g0 -> T_a S"],
    );
    assert_eq!(
        wcnf.variables(),
        Cfg::nonterminals_named(["S", "T_a", "T_b", "g0"])
    );
    assert_eq!(wcnf.terminals(), Cfg::terminals_named(["a", "b"]));
    assert_eq!(wcnf.start(), &Nonterminal::new("S"));
}

#[test]
fn test_epsilon_from_original() {
    let wcnf = Wcnf::from_text("S -> a S b | $", "S").unwrap();

    assert_eq_text(wcnf.epsilon_productions().iter(), &["S -> $"]);
    assert_eq_text(
        wcnf.unary_productions().iter(),
        &["T_a -> a", "T_b -> b", "VAR:g0 -> a"],
    );
    assert_eq_text(
        wcnf.binary_productions().iter(),
        &["S -> VAR:g0 T_b", "VAR:g0 -> T_a S"],
    );
}

#[test]
fn test_indirect_epsilon_not_seeded() {
    let wcnf = Wcnf::from_text("S -> A | s\nA -> $ | a", "S").unwrap();

    assert_eq_text(wcnf.epsilon_productions().iter(), &["A -> $"]);
    assert!(wcnf.contains(&[]));
}

#[test]
fn test_weak_normal_form_kept() {
    let cfg = Cfg::load("S -> A B | $\nA -> a\nB -> b").unwrap();
    let wcnf = Wcnf::new(cfg.clone()).unwrap();

    assert_eq_text(wcnf.epsilon_productions().iter(), &["S -> $"]);
    assert_eq_text(wcnf.unary_productions().iter(), &["A -> a", "B -> b"]);
    assert_eq_text(wcnf.binary_productions().iter(), &["S -> A B"]);
    assert_eq!(wcnf.variables(), Cfg::nonterminals_named(["A", "B", "S"]));
    assert_eq!(wcnf.original(), &cfg);
    assert_eq!(wcnf.to_string(), "S -> $\nA -> a\nB -> b\nS -> A B\n");
}

#[test]
fn test_duplicates_removed() {
    let wcnf = Wcnf::from_text("S -> A A | A A | $ | ε\nA -> a\nA -> a", "S").unwrap();

    assert_eq!(wcnf.epsilon_productions().len(), 1);
    assert_eq!(wcnf.unary_productions().len(), 1);
    assert_eq!(wcnf.binary_productions().len(), 1);
    assert_eq!(wcnf.productions().count(), 3);
}

#[test]
fn test_empty_grammar() {
    let wcnf = Wcnf::new(Cfg::default()).unwrap();
    assert_eq!(wcnf.productions().count(), 0);
    assert!(wcnf.variables().is_empty());
    assert!(wcnf.terminals().is_empty());
}

#[test]
fn test_contains_delegates_to_original() {
    let wcnf = Wcnf::from_text("S -> a S b | $", "S").unwrap();
    assert!(wcnf.contains(&[]));
    assert!(wcnf.contains(&support::word("a a b b")));
    assert!(!wcnf.contains(&support::word("a b b")));
}

#[test]
fn test_invalid_shape() {
    let [s, a] = Cfg::nonterminals_named(["S", "A"]);
    let [x, y] = Cfg::terminals_named(["x", "y"]);

    for rhs in [
        vec![x.sym(), y.sym()],
        vec![a.sym()],
        vec![a.sym(), a.sym(), a.sym()],
        vec![a.sym(), x.sym()],
    ] {
        let rule = CfgRule::new(s.clone(), &rhs);
        let error = Production::try_from(&rule).unwrap_err();
        assert_eq!(
            error,
            GrammarError::InvalidGrammarShape {
                rule: rule.to_string()
            }
        );
    }

    let production = Production::try_from(&CfgRule::new(s.clone(), [a.sym(), a.sym()])).unwrap();
    assert_eq!(production, Production::binary(s, a.clone(), a));
}

#[test]
fn test_load_error() {
    let error = Wcnf::from_text("S a", "S").unwrap_err();
    assert!(matches!(error, GrammarError::Load(LoadError { line: 1, .. })));
}
