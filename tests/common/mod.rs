// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::str::FromStr;

use purse::domain::{Account, Amount};
use rust_decimal::Decimal;

/// Names of varying composition; accounts must accept any of them as-is.
pub const NAMES: [&str; 7] = [
    "alllower",
    "ALLUPPER",
    "1234567890",
    "!@#$%^&*()_+{}",
    "Combination_str1ng!",
    "StringAddition",
    "1",
];

/// Starting balances paired with `NAMES`, negatives included.
pub const BALANCES: [&str; 7] = ["0", "-15.0", "35.2", "91", "-3", "4", "5.0"];

/// Helper to build an exact amount from its decimal text
pub fn amount(s: &str) -> Amount {
    Decimal::from_str(s).unwrap()
}

/// Test fixture: one account per entry in `NAMES`
pub struct SampleAccounts;

impl SampleAccounts {
    /// Accounts with names only, balances unset
    pub fn unfunded() -> Vec<Account> {
        NAMES.iter().map(|name| Account::new(*name)).collect()
    }

    /// Accounts with names and the matching entry of `BALANCES`
    pub fn funded() -> Vec<Account> {
        let mut accounts = Self::unfunded();
        for (account, balance) in accounts.iter_mut().zip(BALANCES) {
            account.set_balance(amount(balance));
        }
        accounts
    }
}
