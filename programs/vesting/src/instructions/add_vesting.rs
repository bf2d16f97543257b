use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED, VESTING_BOOK_SEED};
use crate::error::VestingError;
use crate::ledger::{Allocation, VestingLedger};
use crate::state::{LedgerState, VestingBook};

pub fn add_vesting(
    ctx: Context<AddVesting>,
    beneficiary: Pubkey,
    total_amount: u64,
    start_timestamp: i64,
    start_amount: u64,
    duration_months: u32,
) -> Result<()> {
    let allocation = Allocation {
        beneficiary,
        total_amount,
        start_amount,
        duration_months,
    };
    record_vesting(ctx.accounts, allocation, Some(start_timestamp))
}

/// `add_vesting` with the start set to the current block time.
pub fn add_vesting_from_now(
    ctx: Context<AddVesting>,
    beneficiary: Pubkey,
    total_amount: u64,
    start_amount: u64,
    duration_months: u32,
) -> Result<()> {
    let allocation = Allocation {
        beneficiary,
        total_amount,
        start_amount,
        duration_months,
    };
    record_vesting(ctx.accounts, allocation, None)
}

fn record_vesting(
    accounts: &mut AddVesting<'_>,
    allocation: Allocation,
    start_timestamp: Option<i64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = accounts.admin.key();
    let pool_balance = accounts.vault.amount;

    let mut ledger = VestingLedger::new(&mut accounts.ledger_state, &mut accounts.vesting_book);
    let (vesting_id, record) = match start_timestamp {
        Some(start) => ledger.add_vesting(&admin, allocation, start, pool_balance, now)?,
        None => ledger.add_vesting_from_now(&admin, allocation, pool_balance, now)?,
    };

    emit!(VestingAdded {
        beneficiary: record.beneficiary,
        vesting_id,
        total_amount: record.total_amount,
        start_amount: record.start_amount,
        start_timestamp: record.start_timestamp,
        duration_months: record.duration_months,
        end_timestamp: record.end_timestamp()?,
        allocated_total: accounts.ledger_state.allocated_total,
    });
    msg!(
        "[vesting] add beneficiary={} id={} total={} allocated_total={}",
        record.beneficiary,
        vesting_id,
        record.total_amount,
        accounts.ledger_state.allocated_total
    );

    Ok(())
}

#[derive(Accounts)]
pub struct AddVesting<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [VESTING_BOOK_SEED, ledger_state.key().as_ref()],
        bump,
        realloc = VestingBook::space_for(vesting_book.records.len() + 1),
        realloc::payer = admin,
        realloc::zero = false,
    )]
    pub vesting_book: Box<Account<'info, VestingBook>>,

    #[account(
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump = ledger_state.vault_bump,
        address = ledger_state.vault @ VestingError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingAdded {
    pub beneficiary: Pubkey,
    pub vesting_id: u32,
    pub total_amount: u64,
    pub start_amount: u64,
    pub start_timestamp: i64,
    pub duration_months: u32,
    pub end_timestamp: i64,
    pub allocated_total: u64,
}
