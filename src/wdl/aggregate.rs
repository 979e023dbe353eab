use crate::events::AccountEvent;
use crate::Money;
use crate::Result;

/// Rebuilds an account's balance by folding its ordered event history.
///
/// The balance is never stored anywhere; it only exists as the result of this
/// replay. Only `MoneyWithdrawn` moves the balance; the rejection variants
/// are recorded history that contributes nothing to the fold.
#[derive(Debug, Clone, Copy)]
pub struct AccountAggregate {
    initial_balance: Money,
}

impl AccountAggregate {
    pub fn new(initial_balance: Money) -> Self {
        return Self { initial_balance };
    }

    /// Deterministic left fold: starts at the configured initial balance and
    /// subtracts each withdrawn amount in order. An empty history yields the
    /// initial balance unchanged.
    pub fn rebuild<'a, I>(&self, events: I) -> Result<Money>
    where
        I: IntoIterator<Item = &'a AccountEvent>,
    {
        let mut balance = self.initial_balance;

        for event in events {
            match event {
                AccountEvent::MoneyWithdrawn(event) => balance.sub(&event.amount)?,
                AccountEvent::InsufficientFunds(_) => {}
                AccountEvent::InvalidWithdrawal(_) => {}
            }
        }

        return Ok(balance);
    }
}
