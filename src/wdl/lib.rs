pub mod aggregate;
pub mod commands;
pub mod events;
pub mod ids;
pub mod input;
mod money;
pub mod report;
mod result;
pub mod services;
pub mod store;

pub use money::Money;
pub use result::Result;

pub fn build_account_service() -> services::AccountService {
    let store = store::InMemoryEventStore::new();
    let account_service = services::AccountService::new(store, services::DEFAULT_INITIAL_BALANCE);

    return account_service;
}
