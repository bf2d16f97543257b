use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED, VESTING_BOOK_SEED};
use crate::error::VestingError;
use crate::ledger::VestingLedger;
use crate::state::{LedgerState, VestingBook};
use crate::utils::VaultPool;

/// Beneficiary pulls everything vested across all of their records.
pub fn withdraw_all_available(ctx: Context<WithdrawAllAvailable>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let ledger_state_ai = ctx.accounts.ledger_state.to_account_info();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let ledger_state_bump = ctx.accounts.ledger_state.bump;
    let beneficiary = ctx.accounts.beneficiary.key();
    let now = Clock::get()?.unix_timestamp;

    let mut pool = VaultPool {
        vault: &ctx.accounts.vault,
        destination: &ctx.accounts.beneficiary_token_account,
        ledger_state: ledger_state_ai,
        token_program: token_program_ai,
        ledger_state_bump,
    };
    let amount = VestingLedger::new(
        &mut ctx.accounts.ledger_state,
        &mut ctx.accounts.vesting_book,
    )
    .withdraw_all_available(&beneficiary, &mut pool, now)?;

    if amount == 0 {
        msg!("[vesting] withdraw beneficiary={} nothing available", beneficiary);
        return Ok(());
    }

    emit!(TokensWithdrawn {
        beneficiary,
        amount,
        withdrawn_total: ctx.accounts.ledger_state.withdrawn_total,
        timestamp: now,
    });
    msg!(
        "[vesting] withdraw beneficiary={} amount={} withdrawn_total={}",
        beneficiary,
        amount,
        ctx.accounts.ledger_state.withdrawn_total
    );

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawAllAvailable<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [VESTING_BOOK_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vesting_book: Box<Account<'info, VestingBook>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump = ledger_state.vault_bump,
        constraint = vault.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ VestingError::InvalidTokenAccount,
        constraint = beneficiary_token_account.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub withdrawn_total: u64,
    pub timestamp: i64,
}
