//! End-to-end field validation scenarios.
//!
//! Each case validates one field the way a form would, then checks the
//! rendered message a user would see.

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn message(field: &str, failure: Option<Rule>) -> Option<String> {
    failure.map(|rule| rule.error_message_for(field, None))
}

// ============================================================================
// SINGLE RULE
// ============================================================================

#[rstest]
#[case::switched_off(false, Some("Activate should be true"))]
#[case::switched_on(true, None)]
fn is_true_on_activate(#[case] value: bool, #[case] expected: Option<&str>) {
    let failure = validate("Activate", &value, &is_true());
    assert_eq!(message("Activate", failure).as_deref(), expected);
}

#[test]
fn is_true_skipped_by_gate() {
    let failure = validate("Activate", &false, &is_true().on(|| false));
    assert!(failure.is_none());
}

#[rstest]
#[case::empty("", Some("Greeting should not be empty"))]
#[case::filled("hey there!", None)]
fn non_empty_on_greeting(#[case] value: &str, #[case] expected: Option<&str>) {
    let failure = validate("Greeting", value, &non_empty());
    assert_eq!(message("Greeting", failure).as_deref(), expected);
}

#[rstest]
#[case::empty("", Some("Min. Price should be a number"))]
#[case::not_a_number("two hundred", Some("Min. Price should be a number"))]
#[case::equal("5499.98", Some("Min. Price should be greater than 5499.98"))]
#[case::greater("5499.99", None)]
fn greater_on_min_price(#[case] value: &str, #[case] expected: Option<&str>) {
    let failure = validate("Min. Price", value, &greater("5499.98"));
    assert_eq!(message("Min. Price", failure).as_deref(), expected);
}

#[test]
fn greater_skipped_while_empty() {
    let value = String::new();
    let typed = !value.is_empty();
    let failure = validate("Min. Price", &value, &greater("5499.98").on(move || typed));
    assert!(failure.is_none());
}

#[rstest]
#[case::empty("", Some("Max. Price should be a number"))]
#[case::not_a_number("ten thousand", Some("Max. Price should be a number"))]
#[case::equal("10000.00", Some("Max. Price should be lower than 10000.00"))]
#[case::lower("9999.99", None)]
fn lower_on_max_price(#[case] value: &str, #[case] expected: Option<&str>) {
    let failure = validate("Max. Price", value, &lower("10000.00"));
    assert_eq!(message("Max. Price", failure).as_deref(), expected);
}

#[test]
fn lower_skipped_while_empty() {
    let value = "";
    let failure = validate("Max. Price", value, &lower("10000.00").on(move || !value.is_empty()));
    assert!(failure.is_none());
}

#[rstest]
#[case::below("0", Some("Gear Number should be between 4 and 6"))]
#[case::lower_bound("4", Some("Gear Number should be between 4 and 6"))]
#[case::inside("5", None)]
#[case::upper_bound("6", Some("Gear Number should be between 4 and 6"))]
#[case::above("7", Some("Gear Number should be between 4 and 6"))]
#[case::not_a_number("five", Some("Gear Number should be between 4 and 6"))]
fn between_on_gear_number(#[case] value: &str, #[case] expected: Option<&str>) {
    let failure = validate("Gear Number", value, &between("4", "6"));
    assert_eq!(message("Gear Number", failure).as_deref(), expected);
}

#[test]
fn is_numeric_on_gear_number() {
    let failure = validate("Gear Number", "five", &is_numeric()).unwrap();
    assert_eq!(
        failure.error_message_for("Gear Number", None),
        "Gear Number should be a number"
    );

    let failure = validate("Gear Number", "", &is_numeric()).unwrap();
    assert_eq!(
        failure.error_message_for("Gear Number", Some("be a positive number")),
        "Gear Number should be a positive number"
    );

    assert!(validate("Gear Number", "5", &is_numeric()).is_none());
}

// ============================================================================
// MULTIPLE RULES
// ============================================================================

#[test]
fn contains_and_non_empty_both_fail() {
    let validator = Validator::new();
    let failures = validator.validate_all(
        "Greeting",
        "",
        &[
            non_empty().with_message("Couple greeting words here?"),
            contains("hey there!"),
        ],
    );

    assert_eq!(
        validator.format_messages_for("Greeting", &failures),
        "Couple greeting words here?\nGreeting should contain `hey there!`"
    );
}

#[test]
fn only_contains_fails_on_other_greeting() {
    let validator = Validator::new();
    let failures =
        validator.validate_all("Greeting", "hey!", &[non_empty(), contains("hey there!")]);

    assert_eq!(
        validator.format_messages_for("Greeting", &failures),
        "Greeting should contain `hey there!`"
    );
}

#[rstest]
#[case::gate_closed(false, 0)]
#[case::gate_open(true, 1)]
fn gated_contains(#[case] open: bool, #[case] expected: usize) {
    let failures = validate_all(
        "Greeting",
        "hey!",
        &[non_empty(), contains("hey there!").on(move || open)],
    );
    assert_eq!(failures.len(), expected);
}

#[test]
fn batch_hook_receives_failures_and_field() {
    let mut seen = Vec::new();
    let failures = Validator::new().validate_all_with(
        "Greeting",
        "",
        &[non_empty(), contains("hey there!")],
        |failures, field| {
            seen.extend(failures.iter().map(|f| f.error_message_for(field, None)));
        },
    );

    assert_eq!(failures.len(), 2);
    assert_eq!(
        seen,
        [
            "Greeting should not be empty",
            "Greeting should contain `hey there!`"
        ]
    );
}

#[test]
fn formatter_snapshot() {
    let failures = validate_all(
        "Greeting",
        "",
        &[
            non_empty().with_message("Couple greeting words here?"),
            contains("hey there!"),
            is_numeric(),
        ],
    );
    let text = MessageFormatter::new()
        .with_predicate("is_numeric", "be a number, oddly enough")
        .format("Greeting", &failures);

    insta::assert_snapshot!(text, @r"
    Couple greeting words here?
    Greeting should contain `hey there!`
    Greeting should be a number, oddly enough
    ");
}

#[test]
fn ensure_reports_every_failure() {
    let err = Validator::new()
        .ensure("Gear Number", "", &[non_empty(), between("4", "6")])
        .unwrap_err();

    assert_eq!(err.codes, ["non_empty", "between"]);
    assert_eq!(
        err.to_string(),
        "Gear Number should not be empty\nGear Number should be between 4 and 6"
    );
}
