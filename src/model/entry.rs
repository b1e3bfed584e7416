//! Entry and category types shared by every layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single expense or income record
///
/// Field names on the wire are the ones the store has always used
/// (`nome`, `valor`, `data`), so existing data files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "data")]
    pub date: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            date: date.into(),
        }
    }

    /// Amount with exactly two decimals, no currency label
    pub fn formatted_amount(&self) -> String {
        two_decimals(self.amount)
    }
}

/// Format an amount with two decimals, rounding an exact half cent away
/// from zero
///
/// `{:.2}` alone rounds exact ties to even (`0.125` would give `0.12`).
/// Ties are detected on the exact binary value; values that only look like
/// ties in decimal (`1.005` is stored as `1.00499...`) go to the regular
/// formatter.
pub fn two_decimals(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{:.2}", amount);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();

    // A tie is exactly (2n + 1) / 200, so magnitude * 8 * 25 is an odd integer
    let eighths = magnitude * 8.0;
    let scaled = eighths * 25.0;
    let exact = eighths.mul_add(25.0, -scaled) == 0.0;
    if exact && scaled < 9.0e15 && scaled.fract() == 0.0 && scaled % 2.0 == 1.0 {
        let cents = (scaled as u64 + 1) / 2;
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{}{:.2}", sign, magnitude)
}

/// Stable identifier of an entry within its category
///
/// Ids are assigned when an entry is loaded or appended and are never reused
/// during a session. They are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two parallel entry collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Expenses,
    Income,
}

impl Category {
    pub fn all() -> [Category; 2] {
        [Category::Expenses, Category::Income]
    }

    /// Key the category's list is persisted under
    pub fn storage_key(&self) -> &'static str {
        match self {
            Category::Expenses => "gastos",
            Category::Income => "entradas",
        }
    }

    /// Value of the `Tipo` column in the CSV export
    pub fn export_tag(&self) -> &'static str {
        match self {
            Category::Expenses => "Gasto",
            Category::Income => "Entrada",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Expenses => "Expenses",
            Category::Income => "Income",
        }
    }

    pub fn other(&self) -> Category {
        match self {
            Category::Expenses => Category::Income,
            Category::Income => Category::Expenses,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Parse an amount leniently
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12.5kg"` yields `12.5`. Returns `None` when no number can be read or the
/// result is not finite.
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
