use crate::aggregate::AccountAggregate;
use crate::commands::{CommandError, WithdrawMoneyCommand};
use crate::events::{
    AccountEvent, InsufficientFundsEvent, InvalidWithdrawalEvent, MoneyWithdrawnEvent,
};
use crate::ids::AccountId;
use crate::store::InMemoryEventStore;
use crate::Money;
use crate::Result;

use chrono::Utc;

/// Synthetic opening balance for accounts with no prior history. Stands in
/// for an explicit account-creation event, which this ledger does not have.
pub const DEFAULT_INITIAL_BALANCE: Money = Money::from_major(1000);

/// Handles withdraw commands against the event log.
///
/// Business outcomes (insufficient funds, non-positive amount) are not
/// errors: every decision is persisted and returned as an event, rejections
/// included. Only a malformed command fails hard, and it does so before the
/// store is touched.
pub struct AccountService {
    store: InMemoryEventStore,
    initial_balance: Money,
}

impl AccountService {
    pub fn new(store: InMemoryEventStore, initial_balance: Money) -> Self {
        return Self {
            store,
            initial_balance,
        };
    }

    /// Validates the command, replays the account's history, decides the
    /// outcome, and appends exactly one event describing it.
    pub fn withdraw(&mut self, command: &WithdrawMoneyCommand) -> Result<AccountEvent> {
        log::debug!("Processing withdraw command: {command:?}");

        self.validate_command(command)?;

        let current_balance = self.current_balance(&command.account_id)?;

        log::debug!(
            "Rebuilt balance for {}: {current_balance}",
            command.account_id
        );

        let event = if command.amount <= Money::ZERO {
            self.build_invalid_withdrawal_event(command)
        } else if command.amount > current_balance {
            self.build_insufficient_funds_event(command, current_balance)
        } else {
            self.build_money_withdrawn_event(command, current_balance)?
        };

        log::debug!("Appending decision event: {event:?}");
        self.store.append(event.clone());

        return Ok(event);
    }

    pub fn store(&self) -> &InMemoryEventStore {
        return &self.store;
    }

    pub fn initial_balance(&self) -> Money {
        return self.initial_balance;
    }

    fn validate_command(&self, command: &WithdrawMoneyCommand) -> Result {
        if command.account_id.as_str().is_empty() {
            Err(CommandError::InvalidAccountId)?
        }

        return Ok(());
    }

    fn current_balance(&self, account_id: &AccountId) -> Result<Money> {
        let aggregate = AccountAggregate::new(self.initial_balance);
        let events = self.store.get_events_for_account(account_id);

        return aggregate.rebuild(events);
    }

    fn build_invalid_withdrawal_event(&self, command: &WithdrawMoneyCommand) -> AccountEvent {
        return AccountEvent::InvalidWithdrawal(InvalidWithdrawalEvent {
            account_id: command.account_id.clone(),
            timestamp: Utc::now(),
            attempted_amount: command.amount,
            reason: "Amount must be positive".to_string(),
        });
    }

    fn build_insufficient_funds_event(
        &self,
        command: &WithdrawMoneyCommand,
        balance: Money,
    ) -> AccountEvent {
        return AccountEvent::InsufficientFunds(InsufficientFundsEvent {
            account_id: command.account_id.clone(),
            timestamp: Utc::now(),
            attempted_amount: command.amount,
            balance,
        });
    }

    fn build_money_withdrawn_event(
        &self,
        command: &WithdrawMoneyCommand,
        balance: Money,
    ) -> Result<AccountEvent> {
        let mut balance_after = balance;
        balance_after.sub(&command.amount)?;

        return Ok(AccountEvent::MoneyWithdrawn(MoneyWithdrawnEvent {
            account_id: command.account_id.clone(),
            timestamp: Utc::now(),
            amount: command.amount,
            balance_after,
        }));
    }
}
