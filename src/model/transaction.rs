use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// A single ledger record.
///
/// There is deliberately little here: a random integer ID (not guaranteed
/// unique), a free-text label, a signed amount and a free-text category. No
/// category set is enforced and records are never deduplicated.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    id: u32,
    label: String,
    amount: Amount,
    category: String,
}

impl Transaction {
    pub fn new(
        id: u32,
        label: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            amount,
            category: category.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// How the record counts toward the summary figures. The sign of the
    /// amount is the whole classification; zero falls on the income side of
    /// the rendering (`+`) but contributes to neither total.
    pub fn kind(&self) -> Kind {
        if self.amount.is_negative() {
            Kind::Expense
        } else {
            Kind::Income
        }
    }
}

/// Classification of a transaction by the sign of its amount.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    #[default]
    Income,
    Expense,
}

serde_plain::derive_display_from_serialize!(Kind);
serde_plain::derive_fromstr_from_deserialize!(Kind);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn txn(amount: &str) -> Transaction {
        Transaction::new(7, "Coffee", Amount::from_str(amount).unwrap(), "Food")
    }

    #[test]
    fn test_kind_by_sign() {
        assert_eq!(txn("4.50").kind(), Kind::Income);
        assert_eq!(txn("-4.50").kind(), Kind::Expense);
        assert_eq!(txn("0").kind(), Kind::Income);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Expense.to_string(), "expense");
        assert_eq!(Kind::from_str("income").unwrap(), Kind::Income);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&txn("-4.50")).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"label":"Coffee","amount":"-4.50","category":"Food"}"#
        );
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn("-4.50"));
    }
}
