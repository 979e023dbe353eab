use crate::ids::AccountId;
use crate::Money;

use chrono::{DateTime, Utc};

use serde::Serialize;

/// A withdrawal that passed every business rule; the only event variant that
/// moves the account balance
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyWithdrawnEvent {
    pub account_id: AccountId,
    pub timestamp: DateTime<Utc>,
    pub amount: Money,
    pub balance_after: Money,
}
