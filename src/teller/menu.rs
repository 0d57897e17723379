use std::io::{self, Write};

use crate::models::{Account, BankAccount};

/// Operations that act on a selected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
    AddInterest,
    ViewAccounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operate(Action),
    Exit,
    Unknown(i64),
}

const MENU: [(i64, &str); 5] = [
    (1, "Deposit"),
    (2, "Withdraw"),
    (3, "Add Interest"),
    (4, "View Accounts"),
    (5, "Exit"),
];

impl MenuChoice {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => MenuChoice::Operate(Action::Deposit),
            2 => MenuChoice::Operate(Action::Withdraw),
            3 => MenuChoice::Operate(Action::AddInterest),
            4 => MenuChoice::Operate(Action::ViewAccounts),
            5 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        }
    }
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose operation:")?;
    for (code, label) in MENU {
        writeln!(out, "{code}. {label}")?;
    }
    Ok(())
}

pub fn write_account_list(out: &mut impl Write, accounts: &[Account]) -> io::Result<()> {
    for (index, account) in accounts.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, account.account_number())?;
    }
    Ok(())
}
