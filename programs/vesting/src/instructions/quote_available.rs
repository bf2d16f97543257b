use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, VESTING_BOOK_SEED};
use crate::state::{LedgerState, VestingBook};

// Read-only quotes. Values are returned through return data and emitted as
// events; an unknown beneficiary or vesting id reads as zero.

pub fn get_available_amount(
    ctx: Context<QuoteVesting>,
    beneficiary: Pubkey,
    vesting_id: u32,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let available = ctx
        .accounts
        .vesting_book
        .available_amount(&beneficiary, vesting_id, now)?;

    emit!(AvailableAmountQuote {
        beneficiary,
        vesting_id: Some(vesting_id),
        available,
        timestamp: now,
    });
    Ok(available)
}

pub fn get_available_amount_aggregated(
    ctx: Context<QuoteVesting>,
    beneficiary: Pubkey,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let available = ctx
        .accounts
        .vesting_book
        .available_amount_aggregated(&beneficiary, now)?;

    emit!(AvailableAmountQuote {
        beneficiary,
        vesting_id: None,
        available,
        timestamp: now,
    });
    Ok(available)
}

pub fn get_next_vesting_id(ctx: Context<QuoteVesting>, beneficiary: Pubkey) -> Result<u32> {
    let next_vesting_id = ctx.accounts.vesting_book.next_vesting_id(&beneficiary);
    emit!(NextVestingIdQuote {
        beneficiary,
        next_vesting_id,
    });
    Ok(next_vesting_id)
}

#[derive(Accounts)]
pub struct QuoteVesting<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [VESTING_BOOK_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vesting_book: Box<Account<'info, VestingBook>>,
}

#[event]
pub struct AvailableAmountQuote {
    pub beneficiary: Pubkey,
    /// `None` for the aggregate over all of the beneficiary's records.
    pub vesting_id: Option<u32>,
    pub available: u64,
    pub timestamp: i64,
}

#[event]
pub struct NextVestingIdQuote {
    pub beneficiary: Pubkey,
    pub next_vesting_id: u32,
}
