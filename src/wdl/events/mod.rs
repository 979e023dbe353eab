mod insufficient_funds_event;
mod invalid_withdrawal_event;
mod money_withdrawn_event;

pub use insufficient_funds_event::InsufficientFundsEvent;
pub use invalid_withdrawal_event::InvalidWithdrawalEvent;
pub use money_withdrawn_event::MoneyWithdrawnEvent;

use crate::ids::AccountId;

use serde::Serialize;

/// Typed account event, forcing exhaustive handling through the type-system.
/// Rejected withdrawal attempts are recorded as events just like successful
/// ones; the log keeps every decision ever made for an account.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum AccountEvent {
    MoneyWithdrawn(MoneyWithdrawnEvent),
    InsufficientFunds(InsufficientFundsEvent),
    InvalidWithdrawal(InvalidWithdrawalEvent),
}

impl AccountEvent {
    pub fn account_id(&self) -> &AccountId {
        match self {
            AccountEvent::MoneyWithdrawn(event) => &event.account_id,
            AccountEvent::InsufficientFunds(event) => &event.account_id,
            AccountEvent::InvalidWithdrawal(event) => &event.account_id,
        }
    }
}
