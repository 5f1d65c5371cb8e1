//! Developer grade parsing
//!
//! Grades are stored as text. They are read leniently: the leading integer is
//! taken and anything non-numeric counts as zero. Integers beyond the `i64`
//! range saturate.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("static regex is valid"));

/// Interpret a stored grade as an integer, falling back to `0`
pub fn parse_grade(text: &str) -> i64 {
    let Some(digits) = LEADING_INTEGER.captures(text).and_then(|caps| caps.get(1)) else {
        return 0;
    };
    let digits = digits.as_str();

    match digits.parse::<i64>() {
        Ok(grade) => grade,
        // Only ASCII digits are captured, so a parse error means overflow
        Err(_) if digits.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}
