use serde::Serialize;

/// Serializable read-model row: one account and its replayed balance
#[derive(Serialize, Debug, PartialEq)]
pub struct BalanceReport {
    pub account: String,
    pub balance: String,
}
