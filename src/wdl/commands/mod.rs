mod withdraw_money_command;

pub use withdraw_money_command::{CommandError, WithdrawMoneyCommand};
