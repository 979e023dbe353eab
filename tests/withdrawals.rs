use wdl::commands::WithdrawMoneyCommand;
use wdl::events::{AccountEvent, MoneyWithdrawnEvent};
use wdl::ids::AccountId;
use wdl::services::{AccountQueryService, AccountService, DEFAULT_INITIAL_BALANCE};
use wdl::store::InMemoryEventStore;
use wdl::Money;

use chrono::Utc;

fn build_service() -> AccountService {
    wdl::build_account_service()
}

fn build_command(account_id: &str, amount: i64) -> WithdrawMoneyCommand {
    WithdrawMoneyCommand {
        account_id: AccountId::new(account_id),
        amount: Money::from_major(amount),
    }
}

// Helper to seed historical MoneyWithdrawn events directly into a store
fn build_withdrawn_event(account_id: &str, amount: i64, balance_after: i64) -> AccountEvent {
    AccountEvent::MoneyWithdrawn(MoneyWithdrawnEvent {
        account_id: AccountId::new(account_id),
        timestamp: Utc::now(),
        amount: Money::from_major(amount),
        balance_after: Money::from_major(balance_after),
    })
}

#[test]
fn withdraws_money_successfully() {
    let mut service = build_service();

    let event = service.withdraw(&build_command("acc-1", 200)).unwrap();

    match event {
        AccountEvent::MoneyWithdrawn(event) => {
            assert_eq!(event.account_id, AccountId::new("acc-1"));
            assert_eq!(event.amount, Money::from_major(200));
            assert_eq!(event.balance_after, Money::from_major(800));
        }
        other => panic!("Expected MoneyWithdrawn, got: {other:?}"),
    }
}

#[test]
fn rejects_withdrawal_when_funds_are_insufficient() {
    let mut service = build_service();

    let event = service.withdraw(&build_command("acc-2", 1200)).unwrap();

    match event {
        AccountEvent::InsufficientFunds(event) => {
            assert_eq!(event.attempted_amount, Money::from_major(1200));
            assert_eq!(event.balance, Money::from_major(1000));
        }
        other => panic!("Expected InsufficientFunds, got: {other:?}"),
    }
}

#[test]
fn rejects_negative_amount_as_invalid_withdrawal() {
    let mut service = build_service();

    let event = service.withdraw(&build_command("acc-3", -50)).unwrap();

    match event {
        AccountEvent::InvalidWithdrawal(event) => {
            assert_eq!(event.attempted_amount, Money::from_major(-50));
            assert_eq!(event.reason, "Amount must be positive");
        }
        other => panic!("Expected InvalidWithdrawal, got: {other:?}"),
    }
}

#[test]
fn rejects_zero_amount_as_invalid_withdrawal() {
    let mut service = build_service();

    let event = service.withdraw(&build_command("acc-3", 0)).unwrap();

    match event {
        AccountEvent::InvalidWithdrawal(event) => {
            assert_eq!(event.reason, "Amount must be positive");
        }
        other => panic!("Expected InvalidWithdrawal, got: {other:?}"),
    }
}

#[test]
fn allows_withdrawing_the_entire_balance() {
    let mut service = build_service();

    let event = service.withdraw(&build_command("acc-4", 1000)).unwrap();

    match event {
        AccountEvent::MoneyWithdrawn(event) => {
            assert_eq!(event.balance_after, Money::ZERO);
        }
        other => panic!("Expected MoneyWithdrawn, got: {other:?}"),
    }
}

#[test]
fn one_over_the_balance_is_insufficient() {
    let mut service = build_service();

    let event = service.withdraw(&build_command("acc-4", 1001)).unwrap();

    match event {
        AccountEvent::InsufficientFunds(event) => {
            assert_eq!(event.attempted_amount, Money::from_major(1001));
            assert_eq!(event.balance, Money::from_major(1000));
        }
        other => panic!("Expected InsufficientFunds, got: {other:?}"),
    }
}

#[test]
fn computes_balance_from_prior_history() {
    let mut store = InMemoryEventStore::new();
    store.append(build_withdrawn_event("acc-5", 100, 900));
    store.append(build_withdrawn_event("acc-5", 200, 700));

    let mut service = AccountService::new(store, DEFAULT_INITIAL_BALANCE);

    let event = service.withdraw(&build_command("acc-5", 300)).unwrap();

    match event {
        AccountEvent::MoneyWithdrawn(event) => {
            assert_eq!(event.balance_after, Money::from_major(400));
        }
        other => panic!("Expected MoneyWithdrawn, got: {other:?}"),
    }
}

#[test]
fn prior_history_can_exhaust_the_balance() {
    let mut store = InMemoryEventStore::new();
    store.append(build_withdrawn_event("acc-6", 400, 600));
    store.append(build_withdrawn_event("acc-6", 300, 300));

    let mut service = AccountService::new(store, DEFAULT_INITIAL_BALANCE);

    let event = service.withdraw(&build_command("acc-6", 500)).unwrap();

    match event {
        AccountEvent::InsufficientFunds(event) => {
            assert_eq!(event.balance, Money::from_major(300));
        }
        other => panic!("Expected InsufficientFunds, got: {other:?}"),
    }
}

#[test]
fn stores_every_outcome_including_rejections() {
    let mut service = build_service();
    let account_id = AccountId::new("acc-7");

    let outcomes = vec![
        service.withdraw(&build_command("acc-7", 200)).unwrap(),
        service.withdraw(&build_command("acc-7", 1200)).unwrap(),
        service.withdraw(&build_command("acc-7", -50)).unwrap(),
    ];

    assert!(matches!(outcomes[0], AccountEvent::MoneyWithdrawn(_)));
    assert!(matches!(outcomes[1], AccountEvent::InsufficientFunds(_)));
    assert!(matches!(outcomes[2], AccountEvent::InvalidWithdrawal(_)));

    let stored = service.store().get_events_for_account(&account_id);
    assert_eq!(stored.len(), 3);
}

#[test]
fn rejections_leave_the_balance_unchanged() {
    let mut service = build_service();

    service.withdraw(&build_command("acc-8", 200)).unwrap();
    service.withdraw(&build_command("acc-8", 5000)).unwrap();
    service.withdraw(&build_command("acc-8", 0)).unwrap();

    let queries = AccountQueryService::new(service.store(), service.initial_balance());
    let balance = queries.get_balance(&AccountId::new("acc-8")).unwrap();

    assert_eq!(balance, Money::from_major(800));
}

#[test]
fn query_balance_agrees_with_latest_decision() {
    let mut service = build_service();
    let account_id = AccountId::new("acc-9");

    let event = service.withdraw(&build_command("acc-9", 350)).unwrap();

    let balance_after = match event {
        AccountEvent::MoneyWithdrawn(event) => event.balance_after,
        other => panic!("Expected MoneyWithdrawn, got: {other:?}"),
    };

    let queries = AccountQueryService::new(service.store(), service.initial_balance());
    let balance = queries.get_balance(&account_id).unwrap();

    assert_eq!(balance, balance_after);
}

#[test]
fn unknown_account_reports_the_initial_balance() {
    let service = build_service();

    let queries = AccountQueryService::new(service.store(), service.initial_balance());
    let balance = queries.get_balance(&AccountId::new("acc-404")).unwrap();

    assert_eq!(balance, DEFAULT_INITIAL_BALANCE);
}

#[test]
fn blank_account_id_fails_before_touching_the_store() {
    let mut service = build_service();

    let err = service.withdraw(&build_command("", 100)).unwrap_err();

    assert_eq!(err.to_string(), "accountId is required and must be a string");
    assert!(service.store().is_empty());
}
