use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::models::{AccountError, Customer};
use crate::teller::errors::SessionError;
use crate::teller::input::Scanner;
use crate::teller::menu::{self, Action, MenuChoice};
use crate::teller::transact::{Operation, transact};

/// The interactive loop: one customer, one input, one output.
pub struct Session<R, W> {
    customer: Customer,
    input: Scanner<R>,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Prints the welcome banner, settles the customer name and seeds the demo accounts.
    pub fn start(config: &SessionConfig, input: R, mut output: W) -> Result<Self, SessionError> {
        writeln!(output, "Welcome to {}", config.bank_name)?;

        let mut input = Scanner::new(input);
        let name = match &config.customer_name {
            Some(name) => name.clone(),
            None => {
                write!(output, "Enter customer name: ")?;
                output.flush()?;
                input.next_line("customer name")?
            }
        };

        let customer = Customer::with_demo_accounts(name);
        info!(customer = customer.name(), accounts = customer.accounts().len(), "session started");

        Ok(Session {
            customer,
            input,
            output,
        })
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Runs until the user picks Exit or an input fault occurs.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while let ControlFlow::Continue(()) = self.step()? {}
        info!(customer = self.customer.name(), "session closed");
        Ok(())
    }

    fn step(&mut self) -> Result<ControlFlow<()>, SessionError> {
        menu::write_menu(&mut self.output)?;
        let code = self.prompt_int("Enter choice: ", "menu choice")?;

        let action = match MenuChoice::from_code(code) {
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you for using the bank!")?;
                self.output.flush()?;
                return Ok(ControlFlow::Break(()));
            }
            MenuChoice::Operate(action) => Some(action),
            MenuChoice::Unknown(code) => {
                debug!(code, "unknown menu choice");
                None
            }
        };

        // The account is picked before an unknown choice is reported.
        menu::write_account_list(&mut self.output, self.customer.accounts())?;
        let position = self.prompt_int("Select account number: ", "account number")?;
        let Some(index) = self.customer.account_index(position) else {
            debug!(position, "account selection out of range");
            writeln!(self.output, "Invalid account choice.")?;
            return Ok(ControlFlow::Continue(()));
        };

        let Some(action) = action else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(ControlFlow::Continue(()));
        };

        let operation = match action {
            Action::Deposit => Operation::Deposit(self.prompt_amount("Enter amount to deposit: ")?),
            Action::Withdraw => Operation::Withdraw(self.prompt_amount("Enter amount to withdraw: ")?),
            Action::AddInterest => Operation::AddInterest,
            Action::ViewAccounts => Operation::ViewAccount,
        };

        let account = &mut self.customer.accounts_mut()[index];
        match transact(account, operation) {
            Ok(outcome) => writeln!(self.output, "{outcome}")?,
            Err(error) => {
                match &error {
                    AccountError::InsufficientBalance { requested, available, .. } => {
                        info!(%requested, %available, "withdrawal refused");
                    }
                    AccountError::BalanceOverflow { kind, amount } => {
                        info!(kind = kind.label(), %amount, "balance overflow refused");
                    }
                }
                writeln!(self.output, "Error: {error}")?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn prompt_int(&mut self, prompt: &str, expected: &'static str) -> Result<i64, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.input.next_int(expected)
    }

    fn prompt_amount(&mut self, prompt: &str) -> Result<Decimal, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.input.next_amount("amount")
    }
}
