//! Pipeline composition: spreading and non-spreading forms, chains,
//! associativity, and the slurp adapter.

use integration_tests::{adder, splitter, timeser_adder};
use plait_core::{FunctionObject, PlaitError, Spread, Value};

#[test]
fn composes_two_stages() {
    let super_adder = adder() >> adder();
    assert_eq!(super_adder.invoke([3]).unwrap(), Value::Int(7));
}

#[test]
fn composes_in_chains() {
    let super_duper_adder = adder() >> adder() >> adder() >> adder();
    assert_eq!(super_duper_adder.invoke([3]).unwrap(), Value::Int(11));
}

#[test]
fn spreads_a_list_result_across_inputs() {
    let splitter_timeser_adder = splitter() >> timeser_adder();
    // 512 splits into [5, 12]; 12 * (5 + 2) = 84.
    assert_eq!(splitter_timeser_adder.invoke([512]).unwrap(), Value::Int(84));
}

#[test]
fn then_does_not_spread() {
    let composed = splitter().then(timeser_adder());
    assert!(matches!(
        composed.invoke([512]),
        Err(PlaitError::WrongArity {
            given: 1,
            expected: 2
        })
    ));
}

#[test]
fn explicit_compose_matches_the_operators() {
    let spread = splitter().compose(timeser_adder(), Spread::Elements);
    assert_eq!(spread.invoke([512]).unwrap(), Value::Int(84));

    let single = adder().compose(adder(), Spread::Single);
    assert_eq!(single.invoke([3]).unwrap(), Value::Int(7));
}

#[test]
fn composition_is_associative() {
    let left = (splitter() >> timeser_adder()) >> adder();
    let right = splitter() >> (timeser_adder() >> adder());
    assert_eq!(
        left.invoke([512]).unwrap(),
        right.invoke([512]).unwrap()
    );
    assert_eq!(left.invoke([512]).unwrap(), Value::Int(86));
}

#[test]
fn composed_stages_can_be_composed_again() {
    let inner = splitter() >> timeser_adder();
    let chain = inner >> (adder() >> adder());
    assert_eq!(chain.invoke([512]).unwrap(), Value::Int(88));
}

#[test]
fn slurp_round_trips() {
    let direct = timeser_adder().invoke([13, 4]).unwrap();
    let slurped = timeser_adder()
        .slurp()
        .invoke([Value::list([13, 4])])
        .unwrap();
    assert_eq!(direct, slurped);
    assert_eq!(slurped, Value::Int(60));
}

#[test]
fn slurped_objects_keep_composing() {
    let composed = timeser_adder().slurp() >> adder();
    assert_eq!(composed.invoke([Value::list([13, 4])]).unwrap(), Value::Int(62));
}
