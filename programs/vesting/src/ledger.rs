//! Vesting accounting engine.
//!
//! `VestingLedger` applies the record-changing operations to a `LedgerState`
//! and `VestingBook` pair. Every fallible step runs before any mutation and
//! tokens move only through a `TokenPool`, so a failed transfer leaves both
//! accounts untouched. Instruction handlers add account validation, the
//! clock and events around it.

use anchor_lang::prelude::*;

use crate::constants::HISTORY_PAGE_SIZE;
use crate::error::VestingError;
use crate::state::{LedgerState, VestingBook, VestingRecord};

/// Authorizes privileged calls.
pub trait AdminGate {
    fn require_admin(&self, caller: &Pubkey) -> Result<()>;
}

/// Pooled token balance the ledger pays out from.
pub trait TokenPool {
    fn balance(&self) -> u64;

    /// Fails with `InsufficientFunds` when the pool cannot cover `amount`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Vesting terms supplied by the admin; the start time is passed separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub start_amount: u64,
    pub duration_months: u32,
}

pub struct VestingLedger<'a> {
    state: &'a mut LedgerState,
    book: &'a mut VestingBook,
}

impl<'a> VestingLedger<'a> {
    pub fn new(state: &'a mut LedgerState, book: &'a mut VestingBook) -> Self {
        Self { state, book }
    }

    /// Record a new vesting. Returns the beneficiary-local vesting id and
    /// the stored record.
    pub fn add_vesting(
        &mut self,
        caller: &Pubkey,
        allocation: Allocation,
        start_timestamp: i64,
        pool_balance: u64,
        now_ts: i64,
    ) -> Result<(u32, VestingRecord)> {
        self.state.require_admin(caller)?;
        require!(
            allocation.beneficiary != Pubkey::default(),
            VestingError::InvalidPubkey
        );
        require!(allocation.total_amount > 0, VestingError::InvalidAllocation);
        require!(start_timestamp >= now_ts, VestingError::TimestampInPast);
        require!(
            allocation.start_amount <= allocation.total_amount,
            VestingError::StartAmountExceedsTotal
        );

        // Every promise must be covered by tokens already in the pool.
        let required = self
            .state
            .outstanding()?
            .checked_add(allocation.total_amount)
            .ok_or(VestingError::MathOverflow)?;
        require!(pool_balance >= required, VestingError::InsufficientPoolBalance);

        let allocated_total = self
            .state
            .allocated_total
            .checked_add(allocation.total_amount)
            .ok_or(VestingError::MathOverflow)?;

        let record = VestingRecord {
            beneficiary: allocation.beneficiary,
            total_amount: allocation.total_amount,
            start_amount: allocation.start_amount,
            start_timestamp,
            duration_months: allocation.duration_months,
            withdrawn_amount: 0,
        };
        let vesting_id = self.book.push(record)?;
        self.state.allocated_total = allocated_total;
        Ok((vesting_id, record))
    }

    /// `add_vesting` starting at `now_ts` (no cliff).
    pub fn add_vesting_from_now(
        &mut self,
        caller: &Pubkey,
        allocation: Allocation,
        pool_balance: u64,
        now_ts: i64,
    ) -> Result<(u32, VestingRecord)> {
        self.add_vesting(caller, allocation, now_ts, pool_balance, now_ts)
    }

    /// Pay `caller` everything vested across their records in one transfer.
    /// Returns the amount paid; zero is a successful no-op.
    pub fn withdraw_all_available(
        &mut self,
        caller: &Pubkey,
        pool: &mut impl TokenPool,
        now_ts: i64,
    ) -> Result<u64> {
        let mut updates: Vec<(u32, u64)> = Vec::new();
        let mut payout: u64 = 0;
        for (id, r) in self.book.records_of(caller) {
            let available = r.available_amount(now_ts)?;
            if available == 0 {
                continue;
            }
            let withdrawn = r
                .withdrawn_amount
                .checked_add(available)
                .ok_or(VestingError::MathOverflow)?;
            updates.push((id, withdrawn));
            payout = payout
                .checked_add(available)
                .ok_or(VestingError::MathOverflow)?;
        }
        if payout == 0 {
            return Ok(0);
        }

        let withdrawn_total = self
            .state
            .withdrawn_total
            .checked_add(payout)
            .ok_or(VestingError::MathOverflow)?;

        pool.transfer(caller, payout)?;

        for (id, withdrawn) in updates {
            if let Some(r) = self.book.records.get_mut(id as usize) {
                r.withdrawn_amount = withdrawn;
            }
        }
        self.state.withdrawn_total = withdrawn_total;
        Ok(payout)
    }
}

/// Move every token not backing a promise to `recipient`.
/// Computed from the live pool balance, so later deposits count too.
pub fn withdraw_unallocated_funds(
    state: &LedgerState,
    caller: &Pubkey,
    recipient: &Pubkey,
    pool: &mut impl TokenPool,
) -> Result<u64> {
    state.require_admin(caller)?;
    let unallocated = state.unallocated(pool.balance())?;
    require!(unallocated > 0, VestingError::NoUnallocatedFunds);
    pool.transfer(recipient, unallocated)?;
    Ok(unallocated)
}

/// Admin-only audit read of every record in creation order, one page at a time.
pub fn vesting_history(
    gate: &impl AdminGate,
    caller: &Pubkey,
    book: &VestingBook,
    offset: u32,
    limit: u32,
) -> Result<Vec<VestingRecord>> {
    gate.require_admin(caller)?;
    require!(
        limit > 0 && limit <= HISTORY_PAGE_SIZE,
        VestingError::InvalidHistoryPage
    );
    Ok(book.page(offset, limit))
}
