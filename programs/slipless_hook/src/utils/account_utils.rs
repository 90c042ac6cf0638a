use anchor_lang::{
    prelude::*,
    system_program::{allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer},
};

use crate::error::HookError;

/// Lamports still needed for `target` to be rent exempt at `space` bytes
pub fn rent_shortfall(rent: &Rent, target_lamports: u64, space: usize) -> u64 {
    rent.minimum_balance(space).saturating_sub(target_lamports)
}

/// The payer must cover `shortfall` and either stay rent exempt for its own
/// data or be drained to exactly zero
pub fn require_payer_funds(rent: &Rent, payer: &AccountInfo, shortfall: u64) -> Result<()> {
    let remaining = payer
        .lamports()
        .checked_sub(shortfall)
        .ok_or(HookError::InsufficientFunds)?;

    require!(
        remaining == 0 || rent.is_exempt(remaining, payer.data_len()),
        HookError::InsufficientFunds
    );

    Ok(())
}

/// Allocate a program-owned PDA of `space` bytes, funded by `payer`.
///
/// Handles a PDA that was pre-funded by a third party: the missing rent is
/// topped up and the account is allocated and assigned in place.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent = Rent::get()?;
    let shortfall = rent_shortfall(&rent, target.lamports(), space);
    require_payer_funds(&rent, payer, shortfall)?;

    if target.lamports() == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            shortfall,
            space as u64,
            &crate::ID,
        );
    }

    if shortfall > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            shortfall,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payer_check(lamports: u64, shortfall: u64) -> Result<()> {
        let key = Pubkey::new_unique();
        let owner = anchor_lang::system_program::ID;
        let mut lamports = lamports;
        let mut data: Vec<u8> = vec![];
        let payer = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &owner, false, 0);
        require_payer_funds(&Rent::default(), &payer, shortfall)
    }

    #[test]
    fn test_rent_shortfall_accounts_for_prefunding() {
        let rent = Rent::default();
        let full = rent.minimum_balance(73);

        assert_eq!(rent_shortfall(&rent, 0, 73), full);
        assert_eq!(rent_shortfall(&rent, 1_000, 73), full - 1_000);
        assert_eq!(rent_shortfall(&rent, full + 5, 73), 0);
    }

    #[test]
    fn test_payer_below_shortfall_is_insufficient() {
        let err = payer_check(999, 1_000).unwrap_err();
        assert_eq!(err, HookError::InsufficientFunds.into());
    }

    #[test]
    fn test_payer_left_below_rent_is_insufficient() {
        let shortfall = 1_000_000;
        let err = payer_check(shortfall + 1, shortfall).unwrap_err();
        assert_eq!(err, HookError::InsufficientFunds.into());
    }

    #[test]
    fn test_payer_drained_to_zero_or_left_exempt() {
        let shortfall = 1_000_000;
        let own_rent = Rent::default().minimum_balance(0);

        assert!(payer_check(shortfall, shortfall).is_ok());
        assert!(payer_check(shortfall + own_rent, shortfall).is_ok());
    }
}
