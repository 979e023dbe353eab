use crate::aggregate::AccountAggregate;
use crate::ids::AccountId;
use crate::report::BalanceReport;
use crate::store::InMemoryEventStore;
use crate::Money;
use crate::Result;

/// Read-side balance lookups: Store + Aggregate composed behind a query
/// surface. Must use the same initial balance convention as the command
/// handler or the two sides disagree.
pub struct AccountQueryService<'a> {
    store: &'a InMemoryEventStore,
    initial_balance: Money,
}

impl<'a> AccountQueryService<'a> {
    pub fn new(store: &'a InMemoryEventStore, initial_balance: Money) -> Self {
        return Self {
            store,
            initial_balance,
        };
    }

    pub fn get_balance(&self, account_id: &AccountId) -> Result<Money> {
        let aggregate = AccountAggregate::new(self.initial_balance);
        let events = self.store.get_events_for_account(account_id);

        return aggregate.rebuild(events);
    }

    /// One report row per account in first-appearance order
    pub fn build_report(&self) -> Result<Vec<BalanceReport>> {
        let mut account_ids: Vec<AccountId> = vec![];

        for event in self.store.get_all_events() {
            if !account_ids.contains(event.account_id()) {
                account_ids.push(event.account_id().clone());
            }
        }

        let mut report = vec![];

        for account_id in account_ids {
            let balance = self.get_balance(&account_id)?;

            report.push(BalanceReport {
                account: account_id.to_string(),
                balance: balance.to_string(),
            });
        }

        return Ok(report);
    }
}
