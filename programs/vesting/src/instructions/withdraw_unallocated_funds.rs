use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::ledger;
use crate::state::LedgerState;
use crate::utils::VaultPool;

pub fn withdraw_unallocated_funds(
    ctx: Context<WithdrawUnallocatedFunds>,
    recipient: Pubkey,
) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    let mut pool = VaultPool {
        vault: &ctx.accounts.vault,
        destination: &ctx.accounts.recipient_token_account,
        ledger_state: st.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        ledger_state_bump: st.bump,
    };
    let amount =
        ledger::withdraw_unallocated_funds(st, &ctx.accounts.admin.key(), &recipient, &mut pool)?;

    emit!(UnallocatedFundsWithdrawn {
        admin: st.admin,
        recipient,
        amount,
    });
    msg!("[vesting] unallocated withdrawn recipient={} amount={}", recipient, amount);

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawUnallocatedFunds<'info> {
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
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnallocatedFundsWithdrawn {
    pub admin: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
