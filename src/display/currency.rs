//! Localized currency strings
//!
//! Formats amounts the way the configured locale writes money, with
//! thousands grouping and the locale's decimal separator.

use crate::config::settings::Locale;
use crate::models::Money;

/// Currency formatter for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: &'static str,
    /// Whether a space separates the symbol from the digits
    spaced: bool,
    thousands: char,
    decimal: char,
}

impl CurrencyFormat {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::PtBr => Self {
                symbol: "R$",
                spaced: true,
                thousands: '.',
                decimal: ',',
            },
            Locale::EnUs => Self {
                symbol: "$",
                spaced: false,
                thousands: ',',
                decimal: '.',
            },
        }
    }

    /// Format an amount, e.g. `R$ 1.234,56` or `-$10.00`
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let space = if self.spaced { " " } else { "" };
        format!(
            "{}{}{}{}",
            sign,
            self.symbol,
            space,
            self.format_number(amount.abs())
        )
    }

    /// Format the digits only, without symbol or sign
    pub fn format_number(&self, amount: Money) -> String {
        let amount = amount.abs();
        let units = group_thousands(amount.units(), self.thousands);
        format!("{}{}{:02}", units, self.decimal, amount.cents_part())
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
