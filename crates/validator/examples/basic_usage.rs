//! Basic usage example for fieldcheck-validator

use fieldcheck_validator::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let validator = Validator::new();

    // A price field that is only checked once the user typed something
    let price = "two hundred";
    let typed = !price.is_empty();
    let price_rules = [greater("5499.98").on(move || typed), lower("10000.00")];

    let failures =
        validator.validate_all_with("Min. Price", price, &price_rules, hooks::log_failures);
    println!("{}", validator.format_messages_for("Min. Price", &failures));

    // A greeting with a custom message
    let greeting_rules = [
        non_empty().with_message("Couple greeting words here?"),
        contains("hey there!"),
    ];
    match validator.ensure("Greeting", "", &greeting_rules) {
        Ok(()) => println!("✓ greeting accepted"),
        Err(e) => println!("✗ {e}"),
    }

    // Checkbox
    if let Some(failure) = validator.validate("Activate", &false, &is_true()) {
        println!("✗ {}", failure.error_message_for("Activate", None));
    }
}
