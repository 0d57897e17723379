use std::fmt;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::models::amount::Amount;
use crate::models::transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Current,
}

impl AccountKind {
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current => "Current",
        }
    }
}

fn insufficient_funds_reason(kind: &AccountKind) -> &'static str {
    match kind {
        AccountKind::Savings => "Insufficient balance in savings account.",
        AccountKind::Current => "Overdraft limit exceeded in current account.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// `available` is how much could have been withdrawn without breaching the floor.
    #[error("{}", insufficient_funds_reason(.kind))]
    InsufficientBalance {
        kind: AccountKind,
        requested: Decimal,
        available: Decimal,
    },

    /// The new balance would not fit in a `Decimal`; the balance is left as it was.
    #[error("Amount exceeds the supported balance range.")]
    BalanceOverflow { kind: AccountKind, amount: Decimal },
}

/// Identity and balance shared by every account variant.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDetails {
    number: String,
    holder: String,
    balance: Decimal,
}

impl AccountDetails {
    fn new(holder: impl Into<String>, number: impl Into<String>, balance: Decimal) -> Self {
        AccountDetails {
            number: number.into(),
            holder: holder.into(),
            balance,
        }
    }
}

/// Read-only view of an account, printed by "View Accounts".
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub kind: AccountKind,
    pub number: String,
    pub holder: String,
    pub balance: Decimal,
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Account - {}", self.kind.label(), self.number)?;
        writeln!(f, "Holder: {}", self.holder)?;
        write!(f, "Balance: {}", Amount(self.balance))
    }
}

/// Operations every account supports.
///
/// Variants differ only in how low a withdrawal may take the balance; deposit,
/// withdraw and snapshot are shared on top of that.
pub trait BankAccount {
    fn kind(&self) -> AccountKind;

    fn details(&self) -> &AccountDetails;

    fn details_mut(&mut self) -> &mut AccountDetails;

    /// Lowest balance a withdrawal may leave behind.
    fn balance_floor(&self) -> Decimal;

    fn account_number(&self) -> &str {
        &self.details().number
    }

    fn holder_name(&self) -> &str {
        &self.details().holder
    }

    fn balance(&self) -> Decimal {
        self.details().balance
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Transaction, AccountError> {
        if amount <= Decimal::ZERO {
            info!(account = self.account_number(), %amount, "deposit rejected");
            return Ok(Transaction::DepositRejected(amount));
        }

        let balance = self.balance().checked_add(amount).ok_or(AccountError::BalanceOverflow {
            kind: self.kind(),
            amount,
        })?;
        self.details_mut().balance = balance;
        info!(account = self.account_number(), %amount, %balance, "deposit applied");
        Ok(Transaction::Deposited(amount))
    }

    /// Only the floor gates a withdrawal. A non-positive amount always passes
    /// and moves the balance by `-amount`.
    fn withdraw(&mut self, amount: Decimal) -> Result<Transaction, AccountError> {
        // Headroom past Decimal::MAX is unbounded for any amount the parser accepts.
        let available = self.balance().checked_sub(self.balance_floor()).unwrap_or(Decimal::MAX);
        if amount > available {
            return Err(AccountError::InsufficientBalance {
                kind: self.kind(),
                requested: amount,
                available,
            });
        }

        if amount <= Decimal::ZERO {
            warn!(account = self.account_number(), %amount, "non-positive withdrawal applied");
        }

        let balance = self.balance().checked_sub(amount).ok_or(AccountError::BalanceOverflow {
            kind: self.kind(),
            amount,
        })?;
        self.details_mut().balance = balance;
        info!(account = self.account_number(), %amount, %balance, "withdrawal applied");
        Ok(Transaction::Withdrawn(amount))
    }

    fn display_info(&self) -> AccountSnapshot {
        AccountSnapshot {
            kind: self.kind(),
            number: self.account_number().to_string(),
            holder: self.holder_name().to_string(),
            balance: self.balance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    details: AccountDetails,
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(
        holder: impl Into<String>,
        number: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        SavingsAccount {
            details: AccountDetails::new(holder, number, balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Adds `balance * interest_rate`. Compounds when called repeatedly.
    pub fn add_interest(&mut self) -> Result<Transaction, AccountError> {
        let overflow = AccountError::BalanceOverflow {
            kind: AccountKind::Savings,
            amount: self.details.balance,
        };
        let interest = self.details.balance.checked_mul(self.interest_rate()).ok_or(overflow.clone())?;
        let balance = self.details.balance.checked_add(interest).ok_or(overflow)?;

        self.details.balance = balance;
        info!(account = %self.details.number, %interest, %balance, "interest added");
        Ok(Transaction::InterestAdded(interest))
    }
}

impl BankAccount for SavingsAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn details(&self) -> &AccountDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut AccountDetails {
        &mut self.details
    }

    fn balance_floor(&self) -> Decimal {
        Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAccount {
    details: AccountDetails,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    pub fn new(
        holder: impl Into<String>,
        number: impl Into<String>,
        balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        CurrentAccount {
            details: AccountDetails::new(holder, number, balance),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }
}

impl BankAccount for CurrentAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Current
    }

    fn details(&self) -> &AccountDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut AccountDetails {
        &mut self.details
    }

    fn balance_floor(&self) -> Decimal {
        -self.overdraft_limit()
    }
}

/// An account owned by a customer.
#[derive(Debug, Clone, PartialEq)]
pub enum Account {
    Savings(SavingsAccount),
    Current(CurrentAccount),
}

impl Account {
    /// The interest capability, present only on savings accounts.
    pub fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        match self {
            Account::Savings(savings) => Some(savings),
            Account::Current(_) => None,
        }
    }
}

impl From<SavingsAccount> for Account {
    fn from(account: SavingsAccount) -> Self {
        Account::Savings(account)
    }
}

impl From<CurrentAccount> for Account {
    fn from(account: CurrentAccount) -> Self {
        Account::Current(account)
    }
}

impl BankAccount for Account {
    fn kind(&self) -> AccountKind {
        match self {
            Account::Savings(account) => account.kind(),
            Account::Current(account) => account.kind(),
        }
    }

    fn details(&self) -> &AccountDetails {
        match self {
            Account::Savings(account) => account.details(),
            Account::Current(account) => account.details(),
        }
    }

    fn details_mut(&mut self) -> &mut AccountDetails {
        match self {
            Account::Savings(account) => account.details_mut(),
            Account::Current(account) => account.details_mut(),
        }
    }

    fn balance_floor(&self) -> Decimal {
        match self {
            Account::Savings(account) => account.balance_floor(),
            Account::Current(account) => account.balance_floor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn savings(balance: Decimal, rate: Decimal) -> SavingsAccount {
        SavingsAccount::new("Ashmin", "SAV001", balance, rate)
    }

    fn current(balance: Decimal, limit: Decimal) -> CurrentAccount {
        CurrentAccount::new("Raju", "CUR001", balance, limit)
    }

    #[test]
    fn test_deposit_positive_amount() {
        let mut account = savings(dec!(5000), dec!(0.04));

        let res = account.deposit(dec!(250.50)).unwrap();

        assert_eq!(res, Transaction::Deposited(dec!(250.50)));
        assert_eq!(account.balance(), dec!(5250.50));
    }

    #[test]
    fn test_deposit_non_positive_amount_is_rejected() {
        let mut account = current(dec!(2000), dec!(1000));

        for amount in [dec!(0), dec!(-10)] {
            let res = account.deposit(amount);
            assert_eq!(res, Ok(Transaction::DepositRejected(amount)));
            assert_eq!(account.balance(), dec!(2000));
        }
    }

    #[test]
    fn test_savings_withdraw_down_to_zero() {
        // 1. SETUP
        let mut account = savings(dec!(5000), dec!(0.04));

        // 2. ACTION
        let first = account.withdraw(dec!(5000));
        let second = account.withdraw(dec!(1));

        // 3. ASSERT
        assert_eq!(first, Ok(Transaction::Withdrawn(dec!(5000))));
        assert_eq!(
            second,
            Err(AccountError::InsufficientBalance {
                kind: AccountKind::Savings,
                requested: dec!(1),
                available: dec!(0),
            })
        );
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_current_withdraw_into_overdraft() {
        // 1. SETUP
        let mut account = current(dec!(2000), dec!(1000));

        // 2. ACTION
        let first = account.withdraw(dec!(2500));
        let second = account.withdraw(dec!(600));

        // 3. ASSERT
        assert!(first.is_ok());
        let err = second.unwrap_err();
        assert_eq!(err.to_string(), "Overdraft limit exceeded in current account.");
        assert_eq!(account.balance(), dec!(-500));
    }

    #[test]
    fn test_current_withdraw_to_exact_limit() {
        let mut account = current(dec!(2000), dec!(1000));

        assert!(account.withdraw(dec!(3000)).is_ok());
        assert_eq!(account.balance(), -account.overdraft_limit());
        assert!(account.withdraw(dec!(0.01)).is_err());
    }

    #[test]
    fn test_savings_error_message() {
        let mut account = savings(dec!(10), dec!(0.04));

        let err = account.withdraw(dec!(10.01)).unwrap_err();

        assert_eq!(err.to_string(), "Insufficient balance in savings account.");
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_non_positive_withdrawal_passes_the_floor_check() {
        let mut account = savings(dec!(100), dec!(0.04));

        assert_eq!(account.withdraw(dec!(0)), Ok(Transaction::Withdrawn(dec!(0))));
        assert_eq!(account.withdraw(dec!(-25)), Ok(Transaction::Withdrawn(dec!(-25))));
        assert_eq!(account.balance(), dec!(125));
    }

    #[test]
    fn test_add_interest_compounds() {
        let mut account = SavingsAccount::new("Prakhyat", "SAV002", dec!(7000), dec!(0.12));

        let once = account.add_interest();
        assert_eq!(once, Ok(Transaction::InterestAdded(dec!(840))));
        assert_eq!(account.balance(), dec!(7840));

        let twice = account.add_interest();
        assert_eq!(twice, Ok(Transaction::InterestAdded(dec!(940.8))));
        assert_eq!(account.balance(), dec!(8780.8));
    }

    #[test]
    fn test_display_info() {
        let account: Account = current(dec!(-500), dec!(1000)).into();

        let snapshot = account.display_info();

        assert_eq!(snapshot.kind, AccountKind::Current);
        assert_eq!(
            snapshot.to_string(),
            "Current Account - CUR001\nHolder: Raju\nBalance: -500.0"
        );
    }

    #[test]
    fn test_interest_capability_only_on_savings() {
        let mut saver: Account = savings(dec!(5000), dec!(0.04)).into();
        let mut spender: Account = current(dec!(2000), dec!(1000)).into();

        assert!(saver.as_savings_mut().is_some());
        assert!(spender.as_savings_mut().is_none());
    }

    #[test]
    fn test_enum_delegates_withdraw_bounds() {
        let mut account: Account = current(dec!(0), dec!(1000)).into();

        assert!(account.withdraw(dec!(1000)).is_ok());
        assert_eq!(account.balance(), dec!(-1000));
        assert_eq!(account.kind(), AccountKind::Current);
    }

    #[test]
    fn test_deposit_overflow_leaves_balance() {
        // 1. SETUP
        let mut account = savings(Decimal::MAX, dec!(0.04));

        // 2. ACTION
        let res = account.deposit(Decimal::MAX);

        // 3. ASSERT
        assert_eq!(
            res,
            Err(AccountError::BalanceOverflow {
                kind: AccountKind::Savings,
                amount: Decimal::MAX,
            })
        );
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_second_large_deposit_overflows() {
        let mut account = savings(dec!(0), dec!(0.04));

        assert_eq!(account.deposit(Decimal::MAX), Ok(Transaction::Deposited(Decimal::MAX)));
        assert!(matches!(account.deposit(Decimal::MAX), Err(AccountError::BalanceOverflow { .. })));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_negative_withdrawal_overflow_leaves_balance() {
        let mut account = current(dec!(2000), dec!(1000));

        let err = account.withdraw(Decimal::MIN).unwrap_err();

        assert_eq!(err.to_string(), "Amount exceeds the supported balance range.");
        assert_eq!(account.balance(), dec!(2000));
    }

    #[test]
    fn test_withdraw_near_max_balance_with_overdraft() {
        let mut account = current(Decimal::MAX, dec!(1000));

        assert_eq!(account.withdraw(Decimal::MAX), Ok(Transaction::Withdrawn(Decimal::MAX)));
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_interest_overflow_leaves_balance() {
        let mut account = savings(Decimal::MAX, dec!(0.5));

        let res = account.add_interest();

        assert!(matches!(res, Err(AccountError::BalanceOverflow { .. })));
        assert_eq!(account.balance(), Decimal::MAX);
    }
}
