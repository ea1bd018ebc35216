use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{AccountError, Amount};

pub type AccountId = Uuid;

/// A customer account: a name and a single balance held in memory.
///
/// The balance starts unset. Reading it through [`Account::balance`] or
/// moving money before [`Account::set_balance`] has been called fails with
/// [`AccountError::UninitializedState`]. Failed operations never touch the
/// stored balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// `None` until the balance is first set
    pub balance: Option<Amount>,
    pub opened_at: DateTime<Utc>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: None,
            opened_at: Utc::now(),
        }
    }

    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_initialized(&self) -> bool {
        self.balance.is_some()
    }

    /// Current balance, or an error if it was never set.
    pub fn balance(&self) -> Result<Amount, AccountError> {
        self.balance.ok_or(AccountError::UninitializedState)
    }

    /// Overwrite the balance. `None` resets it to zero.
    pub fn set_balance(&mut self, amount: impl Into<Option<Amount>>) {
        let amount = amount.into().unwrap_or(Decimal::ZERO);
        debug!(account = %self.id, previous = ?self.balance, balance = %amount, "balance set");
        self.balance = Some(amount);
    }

    /// Take `amount` out of the account and return the new balance.
    ///
    /// A negative amount is accepted and increases the balance.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        let balance = self.balance()?;
        let new_balance = balance
            .checked_sub(amount)
            .ok_or(AccountError::Overflow)?;

        if new_balance < Decimal::ZERO {
            return Err(AccountError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        self.commit(balance, new_balance, "withdrawal");
        Ok(new_balance)
    }

    /// Put `amount` into the account and return the new balance.
    /// There is no lower bound: a negative deposit may leave the balance below zero.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        let balance = self.balance()?;
        let new_balance = balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;

        self.commit(balance, new_balance, "deposit");
        Ok(new_balance)
    }

    fn commit(&mut self, previous: Amount, balance: Amount, operation: &'static str) {
        debug!(account = %self.id, %previous, %balance, operation, "balance updated");
        self.balance = Some(balance);
    }
}

/// Builds an [`Account`] from parts that may be missing.
#[derive(Debug, Default, Clone)]
pub struct AccountBuilder {
    name: Option<String>,
    balance: Option<Amount>,
}

impl AccountBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn balance(mut self, balance: Amount) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn build(self) -> Result<Account, AccountError> {
        let name = self.name.ok_or(AccountError::InvalidArguments("name"))?;
        let mut account = Account::new(name);
        if let Some(balance) = self.balance {
            account.set_balance(balance);
        }
        Ok(account)
    }
}
