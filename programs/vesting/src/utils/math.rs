//! Vesting unlock formula.
//!
//! The up-front tranche (`start_amount`) unlocks at `start_ts`; the remainder
//! unlocks in `duration_months` equal steps, one per whole 30-day epoch, and
//! is capped at the full remainder once `duration_months` epochs have passed.
//! A zero duration releases the entire total at `start_ts`.

use crate::error::VestingError;
use crate::utils::time;

pub fn vested_amount(
    total_amount: u64,
    start_amount: u64,
    start_ts: i64,
    duration_months: u32,
    now_ts: i64,
) -> Result<u64, VestingError> {
    if now_ts < start_ts {
        return Ok(0);
    }
    if duration_months == 0 {
        return Ok(total_amount);
    }

    let months = time::elapsed_epochs(now_ts, start_ts)?.min(duration_months as u64);
    let remainder = total_amount
        .checked_sub(start_amount)
        .ok_or(VestingError::MathOverflow)?;

    // remainder * months / duration, floor; u128 cannot overflow here.
    let linear = (remainder as u128)
        .checked_mul(months as u128)
        .ok_or(VestingError::MathOverflow)?
        / (duration_months as u128);
    let v = (start_amount as u128)
        .checked_add(linear)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}
