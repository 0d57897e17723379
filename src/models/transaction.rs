use std::fmt;

use rust_decimal::Decimal;

use crate::models::amount::Amount;

/// Outcome of a single balance operation on an account.
///
/// Rejections are values too: a non-positive deposit is reported, not raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposited(Decimal),
    DepositRejected(Decimal),
    Withdrawn(Decimal),
    InterestAdded(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match *self {
            Transaction::Deposited(value)
            | Transaction::DepositRejected(value)
            | Transaction::Withdrawn(value)
            | Transaction::InterestAdded(value) => value,
        }
    }

    /// Whether the balance was changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transaction::DepositRejected(_))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transaction::Deposited(value) => write!(f, "Deposited: {}", Amount(value)),
            Transaction::DepositRejected(_) => f.write_str("Invalid deposit amount."),
            Transaction::Withdrawn(value) => write!(f, "Withdrawn: {}", Amount(value)),
            Transaction::InterestAdded(value) => write!(f, "Interest added: {}", Amount(value)),
        }
    }
}
