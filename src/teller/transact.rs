use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Account, AccountError, AccountSnapshot, BankAccount, Transaction};

/// A fully read request against one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit(Decimal),
    Withdraw(Decimal),
    AddInterest,
    ViewAccount,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Recorded(Transaction),
    Snapshot(AccountSnapshot),
    InterestUnsupported,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Recorded(transaction) => write!(f, "{transaction}"),
            Outcome::Snapshot(snapshot) => write!(f, "{snapshot}"),
            Outcome::InterestUnsupported => {
                f.write_str("Interest can only be added to savings account.")
            }
        }
    }
}

/// Applies `operation` to `account`. A refused withdrawal or a balance that
/// would overflow is an error; the caller decides how to report it.
pub fn transact(account: &mut Account, operation: Operation) -> Result<Outcome, AccountError> {
    debug!(account = account.account_number(), ?operation, "dispatching");

    let outcome = match operation {
        Operation::Deposit(amount) => Outcome::Recorded(account.deposit(amount)?),
        Operation::Withdraw(amount) => Outcome::Recorded(account.withdraw(amount)?),
        Operation::AddInterest => match account.as_savings_mut() {
            Some(savings) => Outcome::Recorded(savings.add_interest()?),
            None => Outcome::InterestUnsupported,
        },
        Operation::ViewAccount => Outcome::Snapshot(account.display_info()),
    };

    if let Outcome::Recorded(transaction) = &outcome {
        debug!(applied = transaction.is_applied(), amount = %transaction.amount(), "recorded");
    }

    Ok(outcome)
}
