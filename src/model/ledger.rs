//! The in-memory ordered list of transactions and its aggregations.
//!
//! Everything in here is a pure, linear pass over the list: the running
//! balance, the income and expense figures, and the per-category totals that
//! feed the chart. The list itself is what gets mirrored to the storage slot.

use crate::model::{Amount, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The ordered sequence of transaction records.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Appends a record to the end of the ledger.
    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Removes every record whose ID matches and returns how many were
    /// removed. IDs are not unique, so this can remove more than one record;
    /// an unknown ID removes nothing and is not an error.
    pub fn remove(&mut self, id: u32) -> usize {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id() != id);
        before - self.transactions.len()
    }

    /// Drops every record and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.transactions.len();
        self.transactions.clear();
        count
    }

    /// The running balance: the sum of every amount, signs included.
    pub fn balance(&self) -> Amount {
        Amount::new(self.transactions.iter().map(|t| t.amount().value()).sum())
    }

    /// The sum of the positive amounts. Zero-amount records count toward
    /// neither income nor expense.
    pub fn income(&self) -> Amount {
        Amount::new(
            self.transactions
                .iter()
                .map(|t| t.amount())
                .filter(|a| a.is_positive())
                .map(|a| a.value())
                .sum(),
        )
    }

    /// The absolute sum of the negative amounts, as a positive figure.
    pub fn expense(&self) -> Amount {
        Amount::new(
            self.transactions
                .iter()
                .map(|t| t.amount())
                .filter(|a| a.is_negative())
                .map(|a| -a.value())
                .sum(),
        )
    }

    /// Groups the ledger by category, summing `|amount|` per category.
    ///
    /// Categories appear in first-seen order, so the chart's segments and
    /// legend are stable across renders of the same ledger.
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for transaction in &self.transactions {
            let value = transaction.amount().value().abs();
            match totals
                .iter_mut()
                .find(|t| t.category == transaction.category())
            {
                Some(total) => total.total = Amount::new(total.total.value() + value),
                None => totals.push(CategoryTotal {
                    category: transaction.category().to_string(),
                    total: Amount::new(value),
                }),
            }
        }
        totals
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}

/// One category's share of the ledger: the sum of the absolute amounts of
/// every record carrying that category label.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    category: String,
    total: Amount,
}

impl CategoryTotal {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn value(&self) -> Decimal {
        self.total.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Ledger {
        Ledger::new(vec![
            Transaction::new(1, "Salary", Amount::from_str("2000").unwrap(), "Work"),
            Transaction::new(2, "Groceries", Amount::from_str("-120.50").unwrap(), "Food"),
            Transaction::new(3, "Coffee", Amount::from_str("-4.50").unwrap(), "Food"),
            Transaction::new(4, "Gift card", Amount::from_str("0").unwrap(), "Misc"),
        ])
    }

    #[test]
    fn test_balance_sums_all_signs() {
        assert_eq!(sample().balance(), Amount::from_str("1875.00").unwrap());
    }

    #[test]
    fn test_income_is_positive_amounts_only() {
        assert_eq!(sample().income(), Amount::from_str("2000").unwrap());
    }

    #[test]
    fn test_expense_is_absolute_sum_of_negatives() {
        assert_eq!(sample().expense(), Amount::from_str("125.00").unwrap());
    }

    #[test]
    fn test_zero_amount_counts_toward_neither() {
        let ledger = Ledger::new(vec![Transaction::new(
            9,
            "Nothing",
            Amount::default(),
            "Misc",
        )]);
        assert!(ledger.income().is_zero());
        assert!(ledger.expense().is_zero());
        assert!(ledger.balance().is_zero());
    }

    #[test]
    fn test_category_totals_first_seen_order() {
        let totals = sample().category_totals();
        let labels: Vec<&str> = totals.iter().map(|t| t.category()).collect();
        assert_eq!(labels, vec!["Work", "Food", "Misc"]);
        assert_eq!(totals[1].total(), Amount::from_str("125.00").unwrap());
    }

    #[test]
    fn test_category_totals_use_absolute_values() {
        let ledger = Ledger::new(vec![
            Transaction::new(1, "Refund", Amount::from_str("30").unwrap(), "Food"),
            Transaction::new(2, "Dinner", Amount::from_str("-70").unwrap(), "Food"),
        ]);
        let totals = ledger.category_totals();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total(), Amount::from_str("100").unwrap());
    }

    #[test]
    fn test_remove_removes_every_matching_id() {
        let mut ledger = Ledger::new(vec![
            Transaction::new(5, "One", Amount::from_str("1").unwrap(), "A"),
            Transaction::new(5, "Two", Amount::from_str("2").unwrap(), "B"),
            Transaction::new(6, "Three", Amount::from_str("3").unwrap(), "C"),
        ]);
        assert_eq!(ledger.remove(5), 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].label(), "Three");
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut ledger = sample();
        assert_eq!(ledger.remove(999), 0);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_clear() {
        let mut ledger = sample();
        assert_eq!(ledger.clear(), 4);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_slot_format_is_a_bare_array() {
        let json = serde_json::to_string(&Ledger::default()).unwrap();
        assert_eq!(json, "[]");
    }
}
