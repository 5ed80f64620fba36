//! Mock checkout validation.
//!
//! No payment provider is contacted. An order is classified by comparing its
//! card number and second address line against fixed test values, in order,
//! first match wins:
//!
//! 1. `address2 == "invalid"` → `InvalidAddress`
//! 2. card is [`WITHOUT_FUNDS_CARD`] → `CardWithoutFunds`
//! 3. card is [`WITHOUT_AUTHORIZATION_CARD`] → `CardWithoutAuthorization`
//! 4. card is [`VALID_CARD`] → `Success`, order echoed back
//! 5. anything else → `CardDataIncorrect`
//!
//! No other field affects the outcome.

use crate::models::checkout::{CheckoutFailure, CheckoutOrder, CheckoutOutcome};

/// Second address line that marks an undeliverable address.
pub const INVALID_ADDRESS: &str = "invalid";

pub const VALID_CARD: &str = "4242424242424242";
pub const WITHOUT_FUNDS_CARD: &str = "4111411141114111";
pub const WITHOUT_AUTHORIZATION_CARD: &str = "4000400040004000";

/// Classify an order. Pure: the same order always yields the same outcome.
pub fn validate(order: &CheckoutOrder) -> CheckoutOutcome {
    if order.customer.address.address2.as_deref() == Some(INVALID_ADDRESS) {
        return CheckoutOutcome::Failure(CheckoutFailure::InvalidAddress);
    }

    let number = normalize_card_number(&order.card.number);
    match number.as_str() {
        WITHOUT_FUNDS_CARD => CheckoutOutcome::Failure(CheckoutFailure::CardWithoutFunds),
        WITHOUT_AUTHORIZATION_CARD => {
            CheckoutOutcome::Failure(CheckoutFailure::CardWithoutAuthorization)
        }
        VALID_CARD => CheckoutOutcome::Success(order.clone()),
        _ => CheckoutOutcome::Failure(CheckoutFailure::CardDataIncorrect),
    }
}

/// Drop literal space characters (U+0020) only. Tabs, newlines and other
/// whitespace are kept, so a number containing them never matches.
pub fn normalize_card_number(number: &str) -> String {
    number.chars().filter(|&c| c != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::checkout_body;
    use serde_json::json;

    fn order(card_number: &str, address2: &str) -> CheckoutOrder {
        serde_json::from_value(checkout_body(card_number, address2)).unwrap()
    }

    fn failure(outcome: CheckoutOutcome) -> CheckoutFailure {
        match outcome {
            CheckoutOutcome::Failure(reason) => reason,
            CheckoutOutcome::Success(_) => panic!("expected a failure"),
        }
    }

    #[test]
    fn valid_card_echoes_order() {
        let submitted = order("4242424242424242", "Apt 4");
        assert_eq!(
            validate(&submitted),
            CheckoutOutcome::Success(submitted.clone())
        );
    }

    #[test]
    fn valid_card_with_spaces_succeeds() {
        let submitted = order("4242 4242 4242 4242", "");
        // echoed verbatim, spaces included
        assert_eq!(
            validate(&submitted),
            CheckoutOutcome::Success(submitted.clone())
        );
    }

    #[test]
    fn form_sanitized_number_succeeds() {
        // the checkout form strips only the first space before posting
        let submitted = order("42424242 4242 4242", "");
        assert!(matches!(validate(&submitted), CheckoutOutcome::Success(_)));
    }

    #[test]
    fn without_funds_card() {
        assert_eq!(
            failure(validate(&order("4111 4111 4111 4111", ""))),
            CheckoutFailure::CardWithoutFunds
        );
    }

    #[test]
    fn without_authorization_card() {
        assert_eq!(
            failure(validate(&order("4000 4000 4000 4000", ""))),
            CheckoutFailure::CardWithoutAuthorization
        );
    }

    #[test]
    fn invalid_address_takes_priority_over_card() {
        for number in [
            VALID_CARD,
            WITHOUT_FUNDS_CARD,
            WITHOUT_AUTHORIZATION_CARD,
            "1234",
        ] {
            assert_eq!(
                failure(validate(&order(number, "invalid"))),
                CheckoutFailure::InvalidAddress
            );
        }
    }

    #[test]
    fn missing_address2_is_deliverable() {
        let mut submitted = order(VALID_CARD, "");
        submitted.customer.address.address2 = None;
        assert!(matches!(validate(&submitted), CheckoutOutcome::Success(_)));
    }

    #[test]
    fn address_marker_is_case_sensitive() {
        assert!(matches!(
            validate(&order(VALID_CARD, "Invalid")),
            CheckoutOutcome::Success(_)
        ));
    }

    #[test]
    fn unknown_numbers_are_incorrect_card_data() {
        for number in [
            "",
            "1234567812345678",
            "4242",
            "4242-4242-4242-4242",
            "42424242424242420",
        ] {
            assert_eq!(
                failure(validate(&order(number, "Apt 4"))),
                CheckoutFailure::CardDataIncorrect
            );
        }
    }

    #[test]
    fn only_literal_spaces_are_stripped() {
        for number in ["4242\t4242424242424", "4242424242424242\n", "4242\u{a0}424242424242"] {
            assert_eq!(
                failure(validate(&order(number, ""))),
                CheckoutFailure::CardDataIncorrect
            );
        }
    }

    #[test]
    fn other_fields_do_not_affect_outcome() {
        let mut submitted = order(WITHOUT_FUNDS_CARD, "");
        submitted.customer.extra.remove("email");
        submitted.card.extra.insert("cvc".to_string(), json!(123));
        submitted.card.extra.insert("expDate".to_string(), json!(null));
        submitted.customer.address.extra.insert("zipCode".to_string(), json!(11375));
        submitted.extra.insert("giftNote".to_string(), json!("Happy birthday"));

        assert_eq!(
            failure(validate(&submitted)),
            CheckoutFailure::CardWithoutFunds
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let submitted = order("4242 4242 4242 4242", "Apt 4");
        assert_eq!(validate(&submitted), validate(&submitted));

        let declined = order("0000", "Apt 4");
        assert_eq!(validate(&declined), validate(&declined));
    }
}
