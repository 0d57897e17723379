use rust_decimal_macros::dec;

use crate::models::account::{Account, CurrentAccount, SavingsAccount};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    /// A customer holding the fixed demo accounts: two savings, one current.
    pub fn with_demo_accounts(name: impl Into<String>) -> Self {
        let mut customer = Customer::new(name);
        customer.add_account(SavingsAccount::new("Ashmin", "SAV001", dec!(5000), dec!(0.04)));
        customer.add_account(SavingsAccount::new("Prakhyat", "SAV002", dec!(7000), dec!(0.12)));
        customer.add_account(CurrentAccount::new("Raju", "CUR001", dec!(2000), dec!(1000)));
        customer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends to the end of the display order. Account numbers are not checked for uniqueness.
    pub fn add_account(&mut self, account: impl Into<Account>) {
        self.accounts.push(account.into());
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }

    /// Maps a 1-based menu position to an index into `accounts`.
    pub fn account_index(&self, position: i64) -> Option<usize> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        (index < self.accounts.len()).then_some(index)
    }
}
