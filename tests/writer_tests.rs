#![cfg(feature = "effect")]
//! Unit tests for the Writer monad.

use monadic::effect::Writer;
use monadic::mdo;
use monadic::typeclass::{Applicative, Monad, Product, Sum};
use rstest::rstest;

fn log(message: &str) -> Writer<Vec<String>, ()> {
    Writer::tell(vec![message.to_string()])
}

#[rstest]
fn chained_logs_appear_in_order() {
    let computation = log("open").then(log("read")).then(log("close")).then(Writer::pure(3));
    let (result, logs) = computation.run();
    assert_eq!(result, 3);
    assert_eq!(logs, vec!["open", "read", "close"]);
}

#[rstest]
fn string_output_concatenates() {
    let computation: Writer<String, usize> = mdo! {
        a <= Writer::new(1, "a".to_string());
        b <= Writer::new(2, "b".to_string());
        Writer::new(a + b, "c".to_string())
    };
    assert_eq!(computation.run(), (3, "abc".to_string()));
}

#[rstest]
#[case(vec![2, 3, 4], 24)]
#[case(vec![], 1)]
#[case(vec![7], 7)]
fn product_output_multiplies(#[case] factors: Vec<i64>, #[case] expected: i64) {
    let computation = Writer::traverse(factors, |factor| Writer::new((), Product(factor)));
    assert_eq!(computation.exec(), Product(expected));
}

#[rstest]
fn pair_output_combines_componentwise() {
    let step = |label: &str, cost: u32| Writer::new(label.len(), (vec![label.to_string()], Sum(cost)));
    let computation = step("parse", 2).map2(step("check", 5), |a, b| a + b);
    assert_eq!(computation.run(), (10, (vec!["parse".to_string(), "check".to_string()], Sum(7))));
}

#[rstest]
fn listen_sees_only_its_own_output() {
    let computation = log("before").then(log("inner").listen()).flat_map(|((), heard)| {
        Writer::new(heard.len(), vec!["after".to_string()])
    });
    let (heard_count, logs) = computation.run();
    assert_eq!(heard_count, 1);
    assert_eq!(logs, vec!["before", "inner", "after"]);
}

#[rstest]
fn censor_rewrites_output() {
    let noisy = log("debug: x").then(log("info: y")).then(log("debug: z"));
    let quiet = noisy.censor(|lines| lines.into_iter().filter(|line| !line.starts_with("debug")).collect());
    assert_eq!(quiet.exec(), vec!["info: y"]);
}

#[rstest]
fn eval_discards_output() {
    assert_eq!(Writer::new("value", vec![1, 2, 3]).eval(), "value");
}
