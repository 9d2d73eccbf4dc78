//! Locale-aware formatting for amounts, dates and durations.
//!
//! Amounts are shown in Indian rupees with lakh/crore digit grouping and no
//! paise by default, matching how the rest of the app displays money.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision, Scales};
use time::{Date, Month};

/// Format an amount as whole rupees, e.g. `₹1,23,456`.
///
/// Amounts are rounded to whole rupees; negative amounts put the sign before
/// the currency symbol.
pub fn currency(amount: f64) -> String {
    let rupees = amount.abs().round() as i64;
    let grouped = group_indian(rupees);

    if amount < 0.0 && rupees > 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

// Indian grouping: the last three digits, then groups of two.
fn group_indian(value: i64) -> String {
    let digits = value.to_string();

    if digits.len() <= 3 {
        return digits;
    }

    let (mut rest, tail) = digits.split_at(digits.len() - 3);
    let mut parts = vec![tail.to_string()];

    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        parts.push(pair.to_string());
        rest = front;
    }

    parts.push(rest.to_string());
    parts.reverse();
    parts.join(",")
}

/// Format a percentage with one decimal place, e.g. `12.5%`.
pub fn percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a number in its short form, e.g. `1.2K`.
pub fn compact(number: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::new()
            .scales(Scales::short())
            .precision(Precision::Decimals(1))
    });

    // numfmt keeps one decimal everywhere; round numbers read better bare.
    fmt.fmt_string(number).replace(".0", "")
}

/// The date layouts used across the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `5 Jan 2026`
    Short,
    /// `5 January 2026`
    Long,
    /// `Jan 2026`
    MonthYear,
    /// `5 Jan`
    DayMonth,
}

/// Format `date` in the given style.
pub fn format_date(date: Date, style: DateStyle) -> String {
    match style {
        DateStyle::Short => format!(
            "{} {} {}",
            date.day(),
            month_abbreviation(date.month()),
            date.year()
        ),
        DateStyle::Long => format!(
            "{} {} {}",
            date.day(),
            month_name(date.month()),
            date.year()
        ),
        DateStyle::MonthYear => format!("{} {}", month_abbreviation(date.month()), date.year()),
        DateStyle::DayMonth => format!("{} {}", date.day(), month_abbreviation(date.month())),
    }
}

fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

/// Turn a signed day count into a phrase like `3 days` or `2 months`.
///
/// Negative counts read as overdue, e.g. `4 days overdue`.
pub fn duration_phrase(days: i64) -> String {
    if days < 0 {
        return format!("{} days overdue", days.abs());
    }
    if days == 0 {
        return "Today".to_owned();
    }
    if days == 1 {
        return "Tomorrow".to_owned();
    }
    if days < 30 {
        return format!("{days} days");
    }
    if days < 365 {
        return format!("{} months", days / 30);
    }

    format!("{} years", days / 365)
}
