#![allow(unexpected_cfgs)]

//! # Multi-Vesting — Solana Anchor Program
//!
//! Pooled SPL-token vesting ledger:
//!  - admin-created schedules, any number per beneficiary
//!  - up-front tranche plus linear unlock over 30-day epochs
//!  - one aggregated withdrawal per beneficiary call
//!  - every promise backed by tokens already held in the vault

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::VestingRecord;

declare_id!("8qgEaQRrE757r4FVXDfWdToSiEkVUxrpWMMQjS9NFRaq");

#[program]
pub mod multi_vesting {
    use super::*;

    /// Create the ledger state, vesting book and vault for `mint`.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger(ctx)
    }

    /// Move tokens from the funder into the vault.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    /// Admin: promise `total_amount` to `beneficiary` from `start_timestamp`.
    pub fn add_vesting(
        ctx: Context<AddVesting>,
        beneficiary: Pubkey,
        total_amount: u64,
        start_timestamp: i64,
        start_amount: u64,
        duration_months: u32,
    ) -> Result<()> {
        instructions::add_vesting(
            ctx,
            beneficiary,
            total_amount,
            start_timestamp,
            start_amount,
            duration_months,
        )
    }

    /// Admin: `add_vesting` starting now.
    pub fn add_vesting_from_now(
        ctx: Context<AddVesting>,
        beneficiary: Pubkey,
        total_amount: u64,
        start_amount: u64,
        duration_months: u32,
    ) -> Result<()> {
        instructions::add_vesting_from_now(
            ctx,
            beneficiary,
            total_amount,
            start_amount,
            duration_months,
        )
    }

    /// Signer withdraws everything vested across their schedules.
    pub fn withdraw_all_available(ctx: Context<WithdrawAllAvailable>) -> Result<()> {
        instructions::withdraw_all_available(ctx)
    }

    /// Admin: send tokens not backing any schedule to `recipient`.
    pub fn withdraw_unallocated_funds(
        ctx: Context<WithdrawUnallocatedFunds>,
        recipient: Pubkey,
    ) -> Result<()> {
        instructions::withdraw_unallocated_funds(ctx, recipient)
    }

    pub fn get_available_amount(
        ctx: Context<QuoteVesting>,
        beneficiary: Pubkey,
        vesting_id: u32,
    ) -> Result<u64> {
        instructions::get_available_amount(ctx, beneficiary, vesting_id)
    }

    pub fn get_available_amount_aggregated(
        ctx: Context<QuoteVesting>,
        beneficiary: Pubkey,
    ) -> Result<u64> {
        instructions::get_available_amount_aggregated(ctx, beneficiary)
    }

    pub fn get_next_vesting_id(ctx: Context<QuoteVesting>, beneficiary: Pubkey) -> Result<u32> {
        instructions::get_next_vesting_id(ctx, beneficiary)
    }

    /// Admin: one page of the full record history.
    pub fn get_vesting_history(
        ctx: Context<VestingHistory>,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<VestingRecord>> {
        instructions::get_vesting_history(ctx, offset, limit)
    }

    /// Admin: hand the admin role to `new_admin`.
    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin(ctx, new_admin)
    }
}
