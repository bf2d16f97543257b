use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::constants::LEDGER_STATE_SEED;
use crate::error::VestingError;
use crate::ledger::TokenPool;

/// The vault token account, spent by CPI signed with the ledger-state PDA.
/// Transfers go to `destination`, which must be owned by the `to` wallet.
pub struct VaultPool<'a, 'info> {
    pub vault: &'a Account<'info, TokenAccount>,
    pub destination: &'a Account<'info, TokenAccount>,
    pub ledger_state: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub ledger_state_bump: u8,
}

impl TokenPool for VaultPool<'_, '_> {
    fn balance(&self) -> u64 {
        self.vault.amount
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        check_payout(
            &self.vault.mint,
            self.vault.amount,
            &self.destination.owner,
            &self.destination.mint,
            to,
            amount,
        )?;

        let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_STATE_SEED, &[self.ledger_state_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.ledger_state.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}

/// A payout may only land in a token account of the vault's mint owned by
/// `to`, and only when the vault covers it.
pub fn check_payout(
    vault_mint: &Pubkey,
    vault_amount: u64,
    destination_owner: &Pubkey,
    destination_mint: &Pubkey,
    to: &Pubkey,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(*destination_owner, *to, VestingError::InvalidTokenAccount);
    require_keys_eq!(*destination_mint, *vault_mint, VestingError::InvalidTokenMint);
    require!(vault_amount >= amount, VestingError::InsufficientFunds);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(e: VestingError) -> anchor_lang::error::Error {
        e.into()
    }

    #[test]
    fn payout_to_owned_account_of_vault_mint() {
        let (mint, to) = (Pubkey::new_unique(), Pubkey::new_unique());
        assert!(check_payout(&mint, 100, &to, &mint, &to, 100).is_ok());
    }

    #[test]
    fn payout_rejects_account_owned_by_someone_else() {
        let (mint, recipient, other) =
            (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(
            check_payout(&mint, 100, &other, &mint, &recipient, 10).unwrap_err(),
            err(VestingError::InvalidTokenAccount)
        );
    }

    #[test]
    fn payout_rejects_foreign_mint() {
        let (mint, to) = (Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(
            check_payout(&mint, 100, &to, &Pubkey::new_unique(), &to, 10).unwrap_err(),
            err(VestingError::InvalidTokenMint)
        );
    }

    #[test]
    fn payout_rejects_amount_above_vault_balance() {
        let (mint, to) = (Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(
            check_payout(&mint, 99, &to, &mint, &to, 100).unwrap_err(),
            err(VestingError::InsufficientFunds)
        );
    }
}
