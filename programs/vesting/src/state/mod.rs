pub mod ledger_state;
pub mod vesting_book;

pub use ledger_state::*;
pub use vesting_book::*;
