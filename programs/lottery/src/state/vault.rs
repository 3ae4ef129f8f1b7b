use anchor_lang::prelude::*;

use crate::error::LotteryError;

// 8 discriminator + 32 lottery + 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned account holding the pot of a lottery.
/// Everything above its rent-exempt minimum belongs to the next winner.
#[account]
pub struct Vault {
    pub lottery: Pubkey,
    pub bump: u8,
}

impl Vault {
    /// Lamports available to pay out, leaving the vault rent exempt.
    pub fn pot(vault_lamports: u64, rent_minimum: u64) -> Result<u64> {
        vault_lamports
            .checked_sub(rent_minimum)
            .ok_or(LotteryError::ArithmeticOverflow.into())
    }
}

/// Moves lamports out of the vault by editing balances directly.
/// Only valid because the vault is owned by this program.
pub fn pay_from_vault<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    vault.sub_lamports(amount)?;
    recipient.add_lamports(amount)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_pot_excludes_rent_minimum() {
        assert_eq!(Vault::pot(5_000_000_890, 890).unwrap(), 5_000_000_000);
        assert_eq!(Vault::pot(890, 890).unwrap(), 0);
        assert_eq!(
            Vault::pot(100, 890).unwrap_err(),
            Error::from(LotteryError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_pay_from_vault_moves_exact_amount() {
        let vault_key = Pubkey::new_unique();
        let buyer_key = Pubkey::new_unique();
        let system_owner = Pubkey::default();
        let mut vault_lamports = 890 + 5;
        let mut buyer_lamports = 10;
        let mut vault_data = vec![0u8; VAULT_ACCOUNT_SIZE];
        let mut buyer_data = Vec::new();

        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &crate::ID,
            false,
            0,
        );
        let buyer = AccountInfo::new(
            &buyer_key,
            true,
            true,
            &mut buyer_lamports,
            &mut buyer_data,
            &system_owner,
            false,
            0,
        );

        // Refund of an overpaid purchase
        pay_from_vault(&vault, &buyer, 3).unwrap();
        assert_eq!(vault.lamports(), 890 + 2);
        assert_eq!(buyer.lamports(), 13);

        // Payout of the whole pot
        let pot = Vault::pot(vault.lamports(), 890).unwrap();
        pay_from_vault(&vault, &buyer, pot).unwrap();
        assert_eq!(vault.lamports(), 890);
        assert_eq!(buyer.lamports(), 15);

        pay_from_vault(&vault, &buyer, 0).unwrap();
        assert_eq!(vault.lamports(), 890);
        assert!(pay_from_vault(&vault, &buyer, 891).is_err());
        assert_eq!(vault.lamports(), 890);
        assert_eq!(buyer.lamports(), 15);
    }
}
