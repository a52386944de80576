//! Locale-aware formatting of integer amounts.
//!
//! Prices are plain integers with no fixed minor unit, so formatting is only
//! about digit grouping. Grouping follows the CLDR rules of each supported
//! locale, including the minimum number of grouping digits (Spain leaves
//! four-digit amounts ungrouped, Argentina does not).

use std::fmt;
use std::str::FromStr;

use crate::CartError;

/// Currency symbol printed in front of every amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Number formatting rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    tag: &'static str,
    grouping_separator: char,
    min_grouping_digits: usize,
}

impl NumberFormat {
    /// Spanish (Argentina): `2.500`, `12.500`.
    pub const ES_AR: NumberFormat = NumberFormat {
        tag: "es-AR",
        grouping_separator: '.',
        min_grouping_digits: 1,
    };

    /// Spanish (Spain): `2500`, `12.500`.
    pub const ES_ES: NumberFormat = NumberFormat {
        tag: "es-ES",
        grouping_separator: '.',
        min_grouping_digits: 2,
    };

    /// English (United States): `2,500`.
    pub const EN_US: NumberFormat = NumberFormat {
        tag: "en-US",
        grouping_separator: ',',
        min_grouping_digits: 1,
    };

    /// Portuguese (Brazil): `2.500`.
    pub const PT_BR: NumberFormat = NumberFormat {
        tag: "pt-BR",
        grouping_separator: '.',
        min_grouping_digits: 1,
    };

    const SUPPORTED: [NumberFormat; 4] = [Self::ES_AR, Self::ES_ES, Self::EN_US, Self::PT_BR];

    /// Look up a locale by BCP 47 tag (case-insensitive, `_` accepted).
    pub fn from_tag(tag: &str) -> Result<Self, CartError> {
        let normalized = tag.trim().replace('_', "-");
        Self::SUPPORTED
            .into_iter()
            .find(|f| f.tag.eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CartError::UnsupportedLocale(tag.to_string()))
    }

    /// Tags of all supported locales.
    pub fn supported_tags() -> impl Iterator<Item = &'static str> {
        Self::SUPPORTED.into_iter().map(|f| f.tag)
    }

    /// The locale tag.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Format an integer with this locale's digit grouping.
    pub fn format(&self, value: u64) -> String {
        let digits = value.to_string();
        if digits.len() < 3 + self.min_grouping_digits {
            return digits;
        }

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        let lead = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - lead) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(c);
        }
        out
    }

    /// Format an amount with the currency symbol, e.g. `$2.500`.
    pub fn price(&self, value: u64) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.format(value))
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::ES_AR
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

impl FromStr for NumberFormat {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}
