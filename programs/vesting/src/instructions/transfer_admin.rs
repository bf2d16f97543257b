use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let caller = ctx.accounts.admin.key();
    let old = ctx.accounts.ledger_state.transfer_admin(&caller, new_admin)?;

    emit!(AdminTransferred {
        old_admin: old,
        new_admin,
    });
    msg!("[vesting] admin transferred old={} new={}", old, new_admin);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
