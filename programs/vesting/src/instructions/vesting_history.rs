use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, VESTING_BOOK_SEED};
use crate::ledger;
use crate::state::{LedgerState, VestingBook, VestingRecord};

/// Admin audit read. Pages of at most `HISTORY_PAGE_SIZE` records in
/// creation order; callers walk `offset` until `total_records`.
pub fn get_vesting_history(
    ctx: Context<VestingHistory>,
    offset: u32,
    limit: u32,
) -> Result<Vec<VestingRecord>> {
    let book = &ctx.accounts.vesting_book;
    let page = ledger::vesting_history(
        &*ctx.accounts.ledger_state,
        &ctx.accounts.admin.key(),
        book,
        offset,
        limit,
    )?;

    emit!(VestingHistoryPage {
        offset,
        count: page.len() as u32,
        total_records: book.records.len() as u32,
    });
    Ok(page)
}

#[derive(Accounts)]
pub struct VestingHistory<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [VESTING_BOOK_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vesting_book: Box<Account<'info, VestingBook>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingHistoryPage {
    pub offset: u32,
    pub count: u32,
    pub total_records: u32,
}
