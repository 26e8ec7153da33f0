#![allow(dead_code)]

use cfpq_grammar::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn word(text: &str) -> Vec<Terminal> {
    text.split_whitespace().map(Terminal::new).collect()
}

pub fn assert_eq_rules<'a, 'b, I, J>(i: I, j: J)
where
    I: Iterator<Item = &'a CfgRule>,
    J: Iterator<Item = &'b CfgRule>,
{
    let mut rules_i = i.map(|rule| rule.to_string()).collect::<Vec<_>>();
    let mut rules_j = j.map(|rule| rule.to_string()).collect::<Vec<_>>();
    rules_i.sort();
    rules_j.sort();

    assert_eq!(rules_i, rules_j);
}

pub fn assert_eq_text<'a, I>(i: I, expected: &[&str])
where
    I: Iterator<Item = &'a Production>,
{
    let text = i.map(|production| production.to_string()).collect::<Vec<_>>();
    assert_eq!(text, expected);
}
