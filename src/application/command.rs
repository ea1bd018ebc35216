use serde_json::Value;

use crate::domain::{Account, AccountError, Amount, amount_from_value};

use super::AppError;

/// An account operation with its argument still in raw, untyped form.
///
/// Checks run in a fixed order so the reported failure is predictable:
/// missing argument, then non-numeric argument, then account state.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountCommand {
    /// Overwrite the balance; a missing argument means zero
    SetBalance(Option<Value>),
    Withdraw(Option<Value>),
    Deposit(Option<Value>),
}

impl AccountCommand {
    /// Build a command from an operation keyword.
    pub fn parse(operation: &str, argument: Option<Value>) -> Result<Self, AppError> {
        match operation.to_lowercase().as_str() {
            "set-balance" | "set_balance" => Ok(AccountCommand::SetBalance(argument)),
            "withdraw" => Ok(AccountCommand::Withdraw(argument)),
            "deposit" => Ok(AccountCommand::Deposit(argument)),
            _ => Err(AppError::UnknownOperation(operation.to_string())),
        }
    }

    /// True if `token` names an operation.
    pub fn is_operation(token: &str) -> bool {
        matches!(
            token.to_lowercase().as_str(),
            "set-balance" | "set_balance" | "withdraw" | "deposit"
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountCommand::SetBalance(_) => "set-balance",
            AccountCommand::Withdraw(_) => "withdraw",
            AccountCommand::Deposit(_) => "deposit",
        }
    }

    pub fn argument(&self) -> Option<&Value> {
        match self {
            AccountCommand::SetBalance(arg)
            | AccountCommand::Withdraw(arg)
            | AccountCommand::Deposit(arg) => arg.as_ref(),
        }
    }

    /// Apply the command and return the resulting balance.
    /// On failure the account is left exactly as it was.
    pub fn execute(&self, account: &mut Account) -> Result<Amount, AppError> {
        match self {
            AccountCommand::SetBalance(arg) => {
                let amount = arg.as_ref().map(amount_from_value).transpose()?;
                account.set_balance(amount);
                Ok(account.balance()?)
            }
            AccountCommand::Withdraw(arg) => {
                let amount = required_amount(arg.as_ref())?;
                Ok(account.withdraw(amount)?)
            }
            AccountCommand::Deposit(arg) => {
                let amount = required_amount(arg.as_ref())?;
                Ok(account.deposit(amount)?)
            }
        }
    }
}

impl std::fmt::Display for AccountCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.argument() {
            Some(arg) => write!(f, "{} {}", self.as_str(), arg),
            None => write!(f, "{}", self.as_str()),
        }
    }
}

fn required_amount(arg: Option<&Value>) -> Result<Amount, AccountError> {
    let value = arg.ok_or(AccountError::InvalidArguments("amount"))?;
    amount_from_value(value)
}

/// Read a raw argument token: JSON when it parses, plain text otherwise.
/// Example: "8.5" -> 8.5, "[\"list\"]" -> ["list"], "a" -> "a"
///
/// Numeric tokens JSON cannot hold, such as "1e400", are out of range rather than text.
pub fn parse_argument(token: &str) -> Result<Value, AccountError> {
    if let Ok(value) = serde_json::from_str(token) {
        return Ok(value);
    }

    let is_numeric = token.chars().any(|c| c.is_ascii_digit());
    match token.trim().parse::<f64>() {
        Ok(number) if is_numeric && number.is_finite() => Ok(Value::from(number)),
        Ok(_) if is_numeric => Err(AccountError::Overflow),
        _ => Ok(Value::String(token.to_string())),
    }
}

/// Split a flat token list into commands.
/// A token that is not an operation keyword is the argument of the operation before it.
pub fn parse_commands<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<AccountCommand>, AppError> {
    let mut commands = Vec::new();
    let mut iter = tokens.iter().map(AsRef::as_ref).peekable();

    while let Some(operation) = iter.next() {
        let takes_argument = iter
            .peek()
            .is_some_and(|next| !AccountCommand::is_operation(next));
        let argument = if takes_argument {
            iter.next().map(parse_argument).transpose()?
        } else {
            None
        };
        commands.push(AccountCommand::parse(operation, argument)?);
    }

    Ok(commands)
}

/// Run commands in order, stopping at the first failure.
/// Returns the balance after each successful command.
pub fn replay(account: &mut Account, commands: &[AccountCommand]) -> Result<Vec<Amount>, AppError> {
    commands.iter().map(|command| command.execute(account)).collect()
}
