mod support;

use cfpq_grammar::*;
use test_case::test_case;

const BRACKETS: &str = "S -> a S b | a b";
const DYCK: &str = "S -> a S b S | $";
const CONCAT: &str = "S -> S S | a";
const OPTIONAL: &str = "S -> A B\nA -> a | $\nB -> b | $";

#[test_case(BRACKETS, "a b", true ; "brackets shortest")]
#[test_case(BRACKETS, "a a a b b b", true ; "brackets nested")]
#[test_case(BRACKETS, "a b a b", false ; "brackets sequence")]
#[test_case(BRACKETS, "a a b", false ; "brackets unbalanced")]
#[test_case(BRACKETS, "", false ; "brackets empty")]
#[test_case(DYCK, "", true ; "dyck empty")]
#[test_case(DYCK, "a b a a b b", true ; "dyck sequence")]
#[test_case(DYCK, "a b b a", false ; "dyck unbalanced")]
#[test_case(CONCAT, "a a a", true ; "concat three")]
#[test_case(CONCAT, "", false ; "concat empty")]
#[test_case(CONCAT, "a b", false ; "concat foreign label")]
#[test_case(OPTIONAL, "", true ; "optional empty")]
#[test_case(OPTIONAL, "a", true ; "optional left")]
#[test_case(OPTIONAL, "b", true ; "optional right")]
#[test_case(OPTIONAL, "b a", false ; "optional reversed")]
#[test_case("S -> S a", "a", false ; "unproductive")]
fn test_contains(grammar: &str, text: &str, expected: bool) {
    let cfg = Cfg::load(grammar).unwrap();
    assert_eq!(cfg.contains(&support::word(text)), expected);
}
