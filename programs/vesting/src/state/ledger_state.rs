use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::ledger::AdminGate;

/// Ledger state PDA: admin key, pool binding and allocation accounting.
#[account]
#[derive(Default)]
pub struct LedgerState {
    /// Admin authority allowed to create vestings and recover free funds.
    pub admin: Pubkey,
    /// Token mint held by the pool.
    pub mint: Pubkey,
    /// Vault token account PDA (the pool).
    pub vault: Pubkey,
    /// Sum of `total_amount` over every vesting record ever created.
    pub allocated_total: u64,
    /// Sum of `withdrawn_amount` over every vesting record.
    pub withdrawn_total: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl LedgerState {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        8 +  // allocated_total
        8 +  // withdrawn_total
        1 +  // bump
        1;   // vault_bump

    /// Promised tokens still held by the pool on behalf of beneficiaries.
    pub fn outstanding(&self) -> std::result::Result<u64, VestingError> {
        self.allocated_total
            .checked_sub(self.withdrawn_total)
            .ok_or(VestingError::MathOverflow)
    }

    /// Pool balance not backing any promise.
    pub fn unallocated(&self, pool_balance: u64) -> std::result::Result<u64, VestingError> {
        Ok(pool_balance.saturating_sub(self.outstanding()?))
    }

    /// Deposits come from a token account of the pool's mint owned by the
    /// signing funder.
    pub fn check_deposit(
        &self,
        funder: &Pubkey,
        source_owner: &Pubkey,
        source_mint: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, VestingError::InvalidAmount);
        require_keys_eq!(*source_mint, self.mint, VestingError::InvalidTokenMint);
        require_keys_eq!(*source_owner, *funder, VestingError::InvalidTokenAccount);
        Ok(())
    }

    /// Hand the admin role to `new_admin`. Returns the previous admin.
    pub fn transfer_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<Pubkey> {
        self.require_admin(caller)?;
        require!(new_admin != Pubkey::default(), VestingError::InvalidPubkey);
        let old = self.admin;
        self.admin = new_admin;
        Ok(old)
    }
}

impl AdminGate for LedgerState {
    fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, VestingError::NotAuthorized);
        Ok(())
    }
}
