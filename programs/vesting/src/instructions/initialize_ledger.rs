use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED, VESTING_BOOK_SEED};
use crate::state::{LedgerState, VestingBook};

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    st.admin = ctx.accounts.admin.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.allocated_total = 0;
    st.withdrawn_total = 0;
    st.bump = ctx.bumps.ledger_state;
    st.vault_bump = ctx.bumps.vault;

    // Empty, append-only record store.
    let book = &mut ctx.accounts.vesting_book;
    book.records = Vec::new();
    book.beneficiaries = Vec::new();

    emit!(LedgerInitialized {
        admin: st.admin,
        mint: st.mint,
        vault: st.vault,
    });
    msg!("[vesting] ledger initialized admin={} mint={}", st.admin, st.mint);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerState::SIZE,
        seeds = [LEDGER_STATE_SEED],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init,
        payer = admin,
        space = VestingBook::space_for(0),
        seeds = [VESTING_BOOK_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vesting_book: Box<Account<'info, VestingBook>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger_state,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
