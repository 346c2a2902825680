// Copyright (c) 2025 Costwise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costwise::models::Collection;
use costwise::utils::{parse_amount, parse_date, validate_category, validate_description};

#[test]
fn amount_accepts_non_negative_floats() {
    assert_eq!(parse_amount("12.5").unwrap(), 12.5);
    assert_eq!(parse_amount("0").unwrap(), 0.0);
}

#[test]
fn amount_rejects_negative_and_garbage() {
    assert!(parse_amount("-1").is_err());
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("inf").is_err());
}

#[test]
fn description_boundary_is_fifteen_characters() {
    assert!(validate_description("123456789012345").is_ok());
    assert!(validate_description("1234567890123456").is_err());
    // Characters, not bytes.
    assert!(validate_description("äëïöüäëïöüäëïöü").is_ok());
}

#[test]
fn date_must_be_a_valid_calendar_date() {
    assert!(parse_date("2024-02-29").is_ok());
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("yesterday").is_err());
}

#[test]
fn categories_are_per_collection() {
    assert!(validate_category(Collection::Costs, "Food").is_ok());
    assert!(validate_category(Collection::Costs, "Monthly Salary").is_err());
    assert!(validate_category(Collection::Incomes, "Monthly Salary").is_ok());
    assert!(validate_category(Collection::Incomes, "Food").is_err());
}
