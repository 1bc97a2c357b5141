//! Summary command handler.

use crate::commands::Out;
use crate::model::Amount;
use crate::{Home, Result, Store};
use serde::{Deserialize, Serialize};

/// The three summary figures.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// The sum of every amount, signs included.
    balance: Amount,
    /// The sum of the positive amounts.
    income: Amount,
    /// The absolute sum of the negative amounts, as a positive figure.
    expense: Amount,
}

impl Totals {
    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn income(&self) -> Amount {
        self.income
    }

    pub fn expense(&self) -> Amount {
        self.expense
    }
}

/// Computes the running balance, total income and total expense.
///
/// Income is rendered with a leading `+`; the expense figure is rendered as a
/// positive dollar figure under its own heading.
pub async fn summary(home: &Home) -> Result<Out<Totals>> {
    let store = Store::new(home);
    let ledger = store.load().await?;

    let totals = Totals {
        balance: ledger.balance(),
        income: ledger.income(),
        expense: ledger.expense(),
    };
    let message = format!(
        "Balance: {}\nIncome: +{}\nExpense: {}",
        totals.balance, totals.income, totals.expense
    );
    Ok(Out::new(message, totals))
}
