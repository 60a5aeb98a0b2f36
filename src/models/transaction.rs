//! Transaction model
//!
//! A transaction is an income (`positive`) or expense (`negative`) record.
//! The amount is always stored unsigned; the type carries the direction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Income
    Positive,
    /// Expense
    Negative,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Income",
            Self::Negative => "Outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "income" | "up" | "in" => Ok(Self::Positive),
            "negative" | "outcome" | "expense" | "down" | "out" => Ok(Self::Negative),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (records written by hand may omit it)
    #[serde(default)]
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// What the transaction was for
    pub name: String,

    /// Unsigned amount, stored as a decimal string
    pub amount: Money,

    /// Category key (see [`Category`])
    pub category: String,

    /// When the transaction was registered
    #[serde(with = "iso_date")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction dated now
    pub fn new(
        kind: TransactionType,
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            name: name.into(),
            amount,
            category: category.into(),
            date: Utc::now(),
        }
    }

    /// Builder-style override of the date
    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Positive
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Negative
    }

    /// Amount with sign applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Positive => self.amount,
            TransactionType::Negative => -self.amount,
        }
    }

    /// The canonical category, if the key is known
    pub fn category_info(&self) -> Option<&'static Category> {
        Category::find(&self.category)
    }

    /// Calendar date of the transaction (UTC)
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.name.trim().is_empty() {
            return Err(TransactionValidationError::EmptyName);
        }

        if self.name.chars().count() > 100 {
            return Err(TransactionValidationError::NameTooLong(
                self.name.chars().count(),
            ));
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }

        if self.category_info().is_none() {
            return Err(TransactionValidationError::UnknownCategory(
                self.category.clone(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.day(),
            self.name,
            self.signed_amount(),
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveAmount,
    UnknownType(String),
    UnknownCategory(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} characters, max 100)", len)
            }
            Self::NonPositiveAmount => write!(f, "Amount must be a positive number"),
            Self::UnknownType(t) => {
                write!(f, "Select the transaction type (income or outcome), got '{}'", t)
            }
            Self::UnknownCategory(c) => write!(f, "Select a valid category, got '{}'", c),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// Serde helpers for ISO dates
///
/// Writes RFC 3339 timestamps; reads RFC 3339 or a bare `YYYY-MM-DD`
/// (midnight UTC).
pub mod iso_date {
    use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }

    /// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionType::Negative,
            "Lunch",
            Money::from_cents(2500),
            "food",
        )
    }

    #[test]
    fn test_signed_amount() {
        let expense = sample();
        assert_eq!(expense.signed_amount().cents(), -2500);
        assert!(expense.is_expense());

        let income = Transaction::new(
            TransactionType::Positive,
            "Salary",
            Money::from_cents(500000),
            "salary",
        );
        assert_eq!(income.signed_amount().cents(), 500000);
        assert!(income.is_income());
    }

    #[test]
    fn test_validation() {
        assert!(sample().validate().is_ok());

        let mut txn = sample();
        txn.name = "   ".into();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyName));

        let mut txn = sample();
        txn.amount = Money::zero();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount)
        );

        let mut txn = sample();
        txn.category = "groceries".into();
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!(
            "income".parse::<TransactionType>().unwrap(),
            TransactionType::Positive
        );
        assert_eq!(
            "Negative".parse::<TransactionType>().unwrap(),
            TransactionType::Negative
        );
        assert!("sideways".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_stored_format() {
        let date = Utc.with_ymd_and_hms(2021, 5, 10, 14, 30, 0).unwrap();
        let txn = sample().dated(date);
        let json = serde_json::to_value(&txn).unwrap();

        assert_eq!(json["type"], "negative");
        assert_eq!(json["amount"], "25.00");
        assert_eq!(json["category"], "food");
        assert_eq!(json["date"], "2021-05-10T14:30:00.000Z");
    }

    #[test]
    fn test_reads_minimal_record() {
        let json = r#"{"type":"negative","name":"Market","amount":"100","category":"food","date":"2021-05-01"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(txn.kind, TransactionType::Negative);
        assert_eq!(txn.amount.cents(), 10000);
        assert_eq!(txn.day(), NaiveDate::from_ymd_opt(2021, 5, 1).unwrap());
    }

    #[test]
    fn test_reads_full_timestamp_with_offset() {
        let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","type":"positive","name":"Job","amount":1200,"category":"salary","date":"2021-05-31T23:30:00-03:00"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(txn.amount.cents(), 120000);
        // Normalised to UTC
        assert_eq!(txn.day(), NaiveDate::from_ymd_opt(2021, 6, 1).unwrap());
    }
}
