pub mod account;
pub mod amount;
pub mod customer;
pub mod transaction;

pub use account::{Account, AccountError, AccountSnapshot, BankAccount};
pub use customer::Customer;
pub use transaction::Transaction;
