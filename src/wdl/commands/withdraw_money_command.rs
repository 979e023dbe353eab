use crate::ids::AccountId;
use crate::Money;

use thiserror::Error;

/// Contract violations for a withdraw command. These are programmer-error
/// class failures raised before any event store interaction; they never
/// produce a persisted event. The message strings are part of the contract.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command is required")]
    MissingCommand,

    #[error("accountId is required and must be a string")]
    InvalidAccountId,

    #[error("amount is required and must be a number")]
    InvalidAmount,
}

/// Transient request to withdraw money from an account; never persisted
#[derive(Debug, Clone)]
pub struct WithdrawMoneyCommand {
    pub account_id: AccountId,
    pub amount: Money,
}
