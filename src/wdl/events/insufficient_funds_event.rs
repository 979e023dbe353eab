use crate::ids::AccountId;
use crate::Money;

use chrono::{DateTime, Utc};

use serde::Serialize;

/// A withdrawal attempt for more than the account held; balance is unchanged
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsufficientFundsEvent {
    pub account_id: AccountId,
    pub timestamp: DateTime<Utc>,
    pub attempted_amount: Money,
    pub balance: Money,
}
