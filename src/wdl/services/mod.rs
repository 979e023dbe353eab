mod account_query_service;
mod account_service;

pub use account_query_service::AccountQueryService;
pub use account_service::{AccountService, DEFAULT_INITIAL_BALANCE};
