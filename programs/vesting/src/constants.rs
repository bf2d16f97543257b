//! Program-wide constants.

/// Max vesting records in the vesting book. The account grows one record
/// per `add_vesting`; this bound keeps the deserialized book (records,
/// beneficiary index and the growth copy on push) inside the 32 KiB heap.
pub const MAX_VESTING_RECORDS: usize = 96;

/// Max records returned by one `get_vesting_history` call.
/// Keeps the serialized page under the 1024-byte return-data limit.
pub const HISTORY_PAGE_SIZE: u32 = 8;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in one vesting epoch ("month").
pub const DAYS_PER_EPOCH: i64 = 30;

/// Seconds in one vesting epoch.
pub const SECONDS_PER_EPOCH: i64 = SECONDS_PER_DAY * DAYS_PER_EPOCH;

pub const LEDGER_STATE_SEED: &[u8] = b"ledger_state";
pub const VESTING_BOOK_SEED: &[u8] = b"vesting_book";
pub const VAULT_SEED: &[u8] = b"vault";
