//! Types that represent the core data model, such as `Transaction` and the `Ledger`.

mod amount;
mod ledger;
mod transaction;

pub use amount::{Amount, AmountError};
pub use ledger::{CategoryTotal, Ledger};
pub use transaction::{Kind, Transaction};
