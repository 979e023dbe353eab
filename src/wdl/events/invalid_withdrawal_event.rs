use crate::ids::AccountId;
use crate::Money;

use chrono::{DateTime, Utc};

use serde::Serialize;

/// A withdrawal attempt rejected before the balance was consulted, e.g. a
/// non-positive amount; balance is unchanged
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvalidWithdrawalEvent {
    pub account_id: AccountId,
    pub timestamp: DateTime<Utc>,
    pub attempted_amount: Money,
    pub reason: String,
}
