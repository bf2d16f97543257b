pub mod initialize_ledger;
pub mod deposit_tokens;
pub mod add_vesting;
pub mod withdraw_all_available;
pub mod withdraw_unallocated_funds;
pub mod quote_available;
pub mod vesting_history;
pub mod transfer_admin;

pub use initialize_ledger::*;
pub use deposit_tokens::*;
pub use add_vesting::*;
pub use withdraw_all_available::*;
pub use withdraw_unallocated_funds::*;
pub use quote_available::*;
pub use vesting_history::*;
pub use transfer_admin::*;
