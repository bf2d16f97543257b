//! Fixed 30-day epoch utilities (UTC unix seconds).
//! - boundary_k = start_ts + k * SECONDS_PER_EPOCH
//! - elapsed_epochs = largest k s.t. now >= boundary_k (inclusive), 0 before start

use crate::constants::SECONDS_PER_EPOCH;
use crate::error::VestingError;

/// Return largest k such that now >= boundary_k(start, k), inclusive at boundaries.
/// Zero when `now_ts` is before `start_ts`.
pub fn elapsed_epochs(now_ts: i64, start_ts: i64) -> Result<u64, VestingError> {
    if now_ts < start_ts {
        return Ok(0);
    }
    let elapsed = now_ts
        .checked_sub(start_ts)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(elapsed / SECONDS_PER_EPOCH).map_err(|_| VestingError::MathOverflow)
}

/// Timestamp at which epoch `k` completes.
pub fn epoch_boundary(start_ts: i64, k: u32) -> Result<i64, VestingError> {
    SECONDS_PER_EPOCH
        .checked_mul(k as i64)
        .ok_or(VestingError::MathOverflow)?
        .checked_add(start_ts)
        .ok_or(VestingError::MathOverflow)
}
