use crate::commands::{CommandError, WithdrawMoneyCommand};
use crate::ids::AccountId;
use crate::Money;
use crate::Result;

use serde::Deserialize;

/// Represents a raw withdrawal request as it crosses the untyped boundary.
/// Both fields are optional at the wire level; `parse_command` enforces the
/// contract and produces a fully typed command.
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    pub account: Option<String>,
    pub amount: Option<String>,
}

impl InputRecord {
    pub fn parse_command(self) -> Result<WithdrawMoneyCommand> {
        let account = self.account.filter(|account| !account.is_empty());
        let amount = self.amount.filter(|amount| !amount.is_empty());

        if account.is_none() && amount.is_none() {
            Err(CommandError::MissingCommand)?
        }

        let account_id = account
            .map(AccountId::new)
            .ok_or(CommandError::InvalidAccountId)?;

        let amount = amount.ok_or(CommandError::InvalidAmount)?;
        let amount = Money::parse(amount).map_err(|_| CommandError::InvalidAmount)?;

        return Ok(WithdrawMoneyCommand { account_id, amount });
    }
}
