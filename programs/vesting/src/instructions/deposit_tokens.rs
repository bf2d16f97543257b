use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::LedgerState;

/// Fund the pool. Anyone may deposit; new tokens are unallocated until an
/// admin promises them.
pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    ctx.accounts.ledger_state.check_deposit(
        &ctx.accounts.funder.key(),
        &ctx.accounts.funder_token_account.owner,
        &ctx.accounts.funder_token_account.mint,
        amount,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    let vault_balance = ctx.accounts.vault.amount;
    let unallocated = ctx.accounts.ledger_state.unallocated(vault_balance)?;

    emit!(TokensDeposited {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance,
        unallocated,
    });
    msg!(
        "[vesting] deposit amount={} vault_balance={} unallocated={}",
        amount,
        vault_balance,
        unallocated
    );

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump = ledger_state.vault_bump,
        constraint = vault.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub unallocated: u64,
}
