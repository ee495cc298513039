#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use ratatui::layout::Rect;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56), "₹"), "₹1,234.56");
}

#[test]
fn test_format_amount_other_symbol() {
    assert_eq!(format_amount(dec!(999.99), "$"), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0), "$"), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50), "$"), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89), "₹"), "₹1,234,567.89");
}

#[test]
fn test_format_amount_pads_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5), "$"), "$1.50");
    assert_eq!(format_amount(dec!(5), "$"), "$5.00");
}

#[test]
fn test_format_amount_rounds_extra_places() {
    assert_eq!(format_amount(dec!(238.484), "$"), "$238.48");
}

// ── format_date ───────────────────────────────────────────

#[test]
fn test_format_date() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(format_date(d), "Jan 15, 2024");
    let d = NaiveDate::from_ymd_opt(2023, 12, 3).unwrap();
    assert_eq!(format_date(d), "Dec 3, 2023");
}

// ── percentage_bar ────────────────────────────────────────

#[test]
fn test_percentage_bar() {
    assert_eq!(percentage_bar(dec!(0), 4), "░░░░");
    assert_eq!(percentage_bar(dec!(50), 4), "██░░");
    assert_eq!(percentage_bar(dec!(100), 4), "████");
    assert_eq!(percentage_bar(dec!(54.5), 10), "█████░░░░░");
}

#[test]
fn test_percentage_bar_clamps() {
    assert_eq!(percentage_bar(dec!(150), 3), "███");
    assert_eq!(percentage_bar(dec!(-5), 3), "░░░");
    assert_eq!(percentage_bar(dec!(50), 0), "");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Lunch at Italian restaurant", 10), "Lunch at …");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 10);
    assert_eq!(index, 2);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_ends() {
    let (mut index, mut scroll) = (4, 2);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_centered_rect_fits() {
    let r = centered_rect(Rect::new(0, 0, 100, 40), 60, 20);
    assert_eq!(r, Rect::new(20, 10, 60, 20));
}

#[test]
fn test_centered_rect_clamps_to_small_area() {
    let r = centered_rect(Rect::new(2, 1, 30, 10), 72, 30);
    assert_eq!(r, Rect::new(4, 2, 26, 8));
}
