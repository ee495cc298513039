#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use super::*;
use crate::error::ValidationError;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_all_has_eight_in_order() {
    let all = Category::all();
    assert_eq!(all.len(), 8);
    assert_eq!(all[0], Category::Food);
    assert_eq!(all[7], Category::Other);
    for (i, c) in all.iter().enumerate() {
        assert_eq!(c.index(), i);
    }
}

#[test]
fn test_category_parse_key() {
    assert_eq!(Category::from_str("food").unwrap(), Category::Food);
    assert_eq!(Category::from_str("TRAVEL").unwrap(), Category::Travel);
    assert_eq!(Category::from_str(" healthcare ").unwrap(), Category::Healthcare);
}

#[test]
fn test_category_parse_label() {
    assert_eq!(Category::from_str("Food & Dining").unwrap(), Category::Food);
    assert_eq!(Category::from_str("utilities & bills").unwrap(), Category::Utilities);
}

#[test]
fn test_category_parse_unknown() {
    assert_eq!(
        Category::from_str("groceries"),
        Err(ValidationError::UnknownCategory("groceries".into()))
    );
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        assert_eq!(Category::from_str(c.as_str()).unwrap(), *c, "key {c:?}");
        assert_eq!(Category::from_str(c.label()).unwrap(), *c, "label {c:?}");
    }
}

#[test]
fn test_category_cycle_wraps() {
    assert_eq!(Category::Food.next(), Category::Travel);
    assert_eq!(Category::Other.next(), Category::Food);
    assert_eq!(Category::Food.prev(), Category::Other);
    assert_eq!(Category::Travel.prev(), Category::Food);
}

#[test]
fn test_category_display_uses_label() {
    assert_eq!(format!("{}", Category::Travel), "Travel & Transport");
    assert_eq!(Category::default(), Category::Food);
}

// ── ExpenseId ─────────────────────────────────────────────────

#[test]
fn test_expense_id_display_and_parse() {
    let id = ExpenseId::new(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!(ExpenseId::from_str("42").unwrap(), id);
    assert!(ExpenseId::from_str("abc").is_err());
}

// ── ExpenseInput ──────────────────────────────────────────────

#[test]
fn test_input_parse_valid() {
    let input = ExpenseInput::parse("2024-01-15", "food", "Lunch", "45.99").unwrap();
    assert_eq!(input.date, day(2024, 1, 15));
    assert_eq!(input.category, Category::Food);
    assert_eq!(input.description, "Lunch");
    assert_eq!(input.amount, dec!(45.99));
}

#[test]
fn test_input_parse_bad_date() {
    assert_eq!(
        ExpenseInput::parse("15/01/2024", "food", "Lunch", "1"),
        Err(ValidationError::InvalidDate("15/01/2024".into()))
    );
    assert!(matches!(
        ExpenseInput::parse("2024-02-30", "food", "Lunch", "1"),
        Err(ValidationError::InvalidDate(_))
    ));
}

#[test]
fn test_input_parse_bad_amount() {
    assert_eq!(
        ExpenseInput::parse("2024-01-15", "food", "Lunch", "12,50"),
        Err(ValidationError::InvalidAmount("12,50".into()))
    );
    assert_eq!(
        ExpenseInput::parse("2024-01-15", "food", "Lunch", ""),
        Err(ValidationError::InvalidAmount(String::new()))
    );
}

#[test]
fn test_input_parse_unknown_category() {
    assert!(matches!(
        ExpenseInput::parse("2024-01-15", "pets", "Food bowl", "10"),
        Err(ValidationError::UnknownCategory(_))
    ));
}

#[test]
fn test_validate_rejects_blank_description() {
    let input = ExpenseInput::new(day(2024, 1, 15), Category::Food, "   ", dec!(1));
    assert_eq!(input.validate(), Err(ValidationError::EmptyDescription));
}

#[test]
fn test_validate_rejects_zero_and_negative() {
    let zero = ExpenseInput::new(day(2024, 1, 15), Category::Food, "x", Decimal::ZERO);
    assert_eq!(
        zero.validate(),
        Err(ValidationError::NonPositiveAmount(Decimal::ZERO))
    );
    let neg = ExpenseInput::new(day(2024, 1, 15), Category::Food, "x", dec!(-4.50));
    assert_eq!(
        neg.validate(),
        Err(ValidationError::NonPositiveAmount(dec!(-4.50)))
    );
}

#[test]
fn test_validate_accepts_smallest_amount() {
    let input = ExpenseInput::new(day(2024, 1, 15), Category::Other, "Gum", dec!(0.01));
    assert!(input.validate().is_ok());
}

#[test]
fn test_validate_accepts_max_amount() {
    let input = ExpenseInput::new(day(2024, 1, 15), Category::Other, "Island", MAX_AMOUNT);
    assert!(input.validate().is_ok());
    assert_eq!(MAX_AMOUNT, dec!(1000000000000));
}

#[test]
fn test_validate_rejects_above_max_amount() {
    let just_over = MAX_AMOUNT + dec!(0.01);
    let input = ExpenseInput::new(day(2024, 1, 15), Category::Other, "Island", just_over);
    assert_eq!(
        input.validate(),
        Err(ValidationError::AmountTooLarge(just_over))
    );
}

#[test]
fn test_input_parse_rejects_huge_amount() {
    let err = ExpenseInput::parse(
        "2024-01-15",
        "food",
        "Feast",
        "50000000000000000000000000000",
    )
    .unwrap_err();
    assert!(matches!(err, ValidationError::AmountTooLarge(_)));
    assert!(err.to_string().contains("1000000000000"));
}

// ── CategorySummary ───────────────────────────────────────────

#[test]
fn test_rounded_percentage() {
    let s = CategorySummary {
        category: Category::Shopping,
        total: dec!(129.99),
        count: 1,
        percentage: dec!(54.507715531700771552750754),
    };
    assert_eq!(s.rounded_percentage(1), dec!(54.5));
    assert_eq!(s.rounded_percentage(0), dec!(55));
}
