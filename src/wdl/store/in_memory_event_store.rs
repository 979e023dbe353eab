use crate::events::AccountEvent;
use crate::ids::AccountId;

/// Append-only, in-memory event log. Insertion order is the authoritative
/// event ordering; nothing ever mutates or removes an appended event.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: Vec<AccountEvent>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: AccountEvent) {
        self.events.push(event);
    }

    /// Returns the account's events in original append order. Unknown
    /// accounts yield an empty sequence, not an error.
    pub fn get_events_for_account(&self, account_id: &AccountId) -> Vec<&AccountEvent> {
        return self
            .events
            .iter()
            .filter(|event| event.account_id() == account_id)
            .collect();
    }

    /// Full log snapshot as a defensive copy
    pub fn get_all_events(&self) -> Vec<AccountEvent> {
        return self.events.clone();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
