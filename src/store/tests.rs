#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::ValidationError;
use crate::models::Category;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, hour, 0, 0).unwrap()
}

fn input(day: u32, category: Category, description: &str, amount: Decimal) -> ExpenseInput {
    ExpenseInput::new(
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        category,
        description,
        amount,
    )
}

fn three_record_store() -> ExpenseStore {
    let mut store = ExpenseStore::new();
    store
        .add(input(13, Category::Shopping, "Jacket", dec!(129.99)), at(8))
        .unwrap();
    store
        .add(input(14, Category::Travel, "Gas", dec!(62.50)), at(9))
        .unwrap();
    store
        .add(input(15, Category::Food, "Lunch", dec!(45.99)), at(10))
        .unwrap();
    store
}

// ── add ───────────────────────────────────────────────────────

#[test]
fn test_add_inserts_at_front() {
    let mut store = three_record_store();
    let before = store.len();

    let id = store
        .add(input(16, Category::Education, "Book", dec!(20)), at(11))
        .unwrap()
        .id;

    assert_eq!(store.len(), before + 1);
    assert_eq!(store.list()[0].id, id);
    assert_eq!(store.list()[0].description, "Book");
}

#[test]
fn test_add_sets_timestamps_and_fresh_ids() {
    let mut store = ExpenseStore::new();
    let first = store
        .add(input(1, Category::Food, "A", dec!(1)), at(8))
        .unwrap()
        .clone();
    let second = store
        .add(input(2, Category::Food, "B", dec!(2)), at(9))
        .unwrap()
        .clone();

    assert_ne!(first.id, second.id);
    assert_eq!(first.created_at, at(8));
    assert_eq!(first.updated_at, at(8));
    assert_eq!(second.created_at, second.updated_at);
}

#[test]
fn test_add_trims_description() {
    let mut store = ExpenseStore::new();
    let e = store
        .add(input(1, Category::Food, "  Coffee  ", dec!(3.20)), at(8))
        .unwrap();
    assert_eq!(e.description, "Coffee");
}

#[test]
fn test_add_rejects_amount_above_max() {
    let mut store = three_record_store();
    let snapshot = store.list().to_vec();
    let huge = dec!(50000000000000000000000000000);

    assert_eq!(
        store
            .add(input(1, Category::Food, "Feast", huge), at(11))
            .unwrap_err(),
        Error::Validation(ValidationError::AmountTooLarge(huge))
    );
    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn test_add_rejects_invalid_input() {
    let mut store = three_record_store();
    let snapshot = store.list().to_vec();

    assert_eq!(
        store
            .add(input(1, Category::Food, " ", dec!(5)), at(11))
            .unwrap_err(),
        Error::Validation(ValidationError::EmptyDescription)
    );
    assert_eq!(
        store
            .add(input(1, Category::Food, "Free", Decimal::ZERO), at(11))
            .unwrap_err(),
        Error::Validation(ValidationError::NonPositiveAmount(Decimal::ZERO))
    );
    assert!(store
        .add(input(1, Category::Food, "Refund", dec!(-3)), at(11))
        .is_err());

    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn test_ids_not_reused_after_delete() {
    let mut store = ExpenseStore::new();
    let first = store
        .add(input(1, Category::Food, "A", dec!(1)), at(8))
        .unwrap()
        .id;
    store.delete(first).unwrap();
    let second = store
        .add(input(1, Category::Food, "B", dec!(1)), at(9))
        .unwrap()
        .id;
    assert_ne!(first, second);
}

// ── update ────────────────────────────────────────────────────

#[test]
fn test_update_changes_fields_and_keeps_identity() {
    let mut store = three_record_store();
    let target = store.list()[1].clone();

    let updated = store
        .update(
            target.id,
            input(2, Category::Utilities, "Electric bill", dec!(80.10)),
            at(12),
        )
        .unwrap()
        .clone();

    assert_eq!(updated.id, target.id);
    assert_eq!(updated.created_at, target.created_at);
    assert_eq!(updated.category, Category::Utilities);
    assert_eq!(updated.description, "Electric bill");
    assert_eq!(updated.amount, dec!(80.10));
    assert_eq!(updated.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert!(updated.updated_at >= target.updated_at);
    assert_eq!(updated.updated_at, at(12));
}

#[test]
fn test_update_keeps_position() {
    let mut store = three_record_store();
    let order: Vec<_> = store.list().iter().map(|e| e.id).collect();

    store
        .update(order[1], input(3, Category::Other, "Changed", dec!(1)), at(12))
        .unwrap();

    let after: Vec<_> = store.list().iter().map(|e| e.id).collect();
    assert_eq!(order, after);
    assert_eq!(store.list()[1].description, "Changed");
}

#[test]
fn test_update_with_earlier_clock_does_not_rewind() {
    let mut store = three_record_store();
    let target = store.list()[0].clone();

    let updated = store
        .update(
            target.id,
            input(15, Category::Food, "Dinner", dec!(50)),
            target.updated_at - Duration::hours(3),
        )
        .unwrap();

    assert_eq!(updated.updated_at, target.updated_at);
    assert!(updated.created_at <= updated.updated_at);
}

#[test]
fn test_update_missing_id_leaves_store_unchanged() {
    let mut store = three_record_store();
    let snapshot = store.list().to_vec();

    let err = store
        .update(
            ExpenseId::new(999),
            input(1, Category::Food, "Ghost", dec!(1)),
            at(12),
        )
        .unwrap_err();

    assert_eq!(err, Error::NotFound(ExpenseId::new(999)));
    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn test_update_invalid_input_leaves_record_unchanged() {
    let mut store = three_record_store();
    let target = store.list()[0].clone();

    let err = store
        .update(target.id, input(15, Category::Food, "", dec!(5)), at(12))
        .unwrap_err();

    assert_eq!(err, Error::Validation(ValidationError::EmptyDescription));
    assert_eq!(store.get(target.id), Some(&target));
}

// ── delete ────────────────────────────────────────────────────

#[test]
fn test_delete_present_removes_one() {
    let mut store = three_record_store();
    let target = store.list()[1].clone();

    let removed = store.delete(target.id).unwrap();

    assert_eq!(removed, target);
    assert_eq!(store.len(), 2);
    assert!(store.get(target.id).is_none());
    assert_eq!(store.list()[0].description, "Lunch");
    assert_eq!(store.list()[1].description, "Jacket");
}

#[test]
fn test_delete_missing_id_keeps_all_three() {
    let mut store = three_record_store();
    let snapshot = store.list().to_vec();

    assert_eq!(
        store.delete(ExpenseId::new(999)),
        Err(Error::NotFound(ExpenseId::new(999)))
    );
    assert_eq!(store.len(), 3);
    assert_eq!(store.list(), snapshot.as_slice());
}

// ── list / sample data ────────────────────────────────────────

#[test]
fn test_new_store_is_empty() {
    let store = ExpenseStore::new();
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn test_sample_data_newest_first() {
    let store = ExpenseStore::with_sample_data(at(8)).unwrap();
    let list = store.list();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0].category, Category::Food);
    assert_eq!(list[0].amount, dec!(45.99));
    assert_eq!(list[1].category, Category::Travel);
    assert_eq!(list[1].amount, dec!(62.50));
    assert_eq!(list[2].category, Category::Shopping);
    assert_eq!(list[2].amount, dec!(129.99));
}
