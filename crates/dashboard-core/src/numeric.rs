//! Numeric Normalization and Locale Formatting
//!
//! Input cells arrive as locale-formatted text (comma as the decimal
//! separator); report output groups thousands with a dot. Both directions
//! live here so the rest of the engine stays numerically pure.

use rust_decimal::Decimal;

/// Decimal separator accepted on input and emitted on output, plus the
/// grouping symbol used for thousands.
#[derive(Clone, Copy, Debug)]
pub struct LocaleFormat {
    pub decimal_sep: char,
    pub group_sep: char,
}

/// Indonesian formatting: `1.234.567,89`, currency `Rp 1.234.567`.
pub const ID: LocaleFormat = LocaleFormat {
    decimal_sep: ',',
    group_sep: '.',
};

impl LocaleFormat {
    /// Parse one numeric cell. Accepts `.` or the locale decimal separator;
    /// scientific notation (`1.39e12`) is accepted for large macro figures.
    /// Returns `None` for empty or unparsable input.
    pub fn try_parse(&self, raw: &str) -> Option<Decimal> {
        let cleaned = raw.trim().replace(self.decimal_sep, ".");
        if cleaned.is_empty() {
            return None;
        }
        cleaned
            .parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_scientific(&cleaned).ok())
    }

    /// Total variant of [`Self::try_parse`]: a missing or unparsable cell
    /// normalizes to zero instead of failing.
    pub fn parse_or_zero(&self, raw: Option<&str>) -> Decimal {
        raw.and_then(|s| self.try_parse(s)).unwrap_or(Decimal::ZERO)
    }

    /// Grouped decimal rendering with a fixed number of fraction digits,
    /// e.g. `7.448,12`.
    pub fn decimal(&self, amount: Decimal, dp: usize) -> String {
        let formatted = format!("{amount:.dp$}");
        let (sign, unsigned) = match formatted.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", formatted.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };

        let mut out = String::from(sign);
        out.push_str(&group_digits(int_part, self.group_sep));
        if let Some(frac) = frac_part {
            out.push(self.decimal_sep);
            out.push_str(frac);
        }
        out
    }

    /// Whole-unit grouped rendering, e.g. `10.400.000`.
    pub fn integer(&self, amount: Decimal) -> String {
        self.decimal(amount, 0)
    }

    /// Currency rendering: `Rp 1.234.567`, negative as `-Rp 50.000`.
    pub fn currency(&self, amount: Decimal) -> String {
        if amount < Decimal::ZERO {
            format!("-Rp {}", self.integer(-amount))
        } else {
            format!("Rp {}", self.integer(amount))
        }
    }

    /// Grouped whole-unit rendering with an explicit `+` for gains,
    /// e.g. `+400.000` / `-50.000`.
    pub fn signed_integer(&self, amount: Decimal) -> String {
        if amount < Decimal::ZERO {
            self.integer(amount)
        } else {
            format!("+{}", self.integer(amount))
        }
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
