use anchor_lang::prelude::*;

use crate::{
    constants::TOKEN_BADGE_SEED,
    error::HookError,
    events::BadgeIssued,
    pda::find_token_badge_address,
    state::TokenBadge,
    utils::{account_utils::create_pda_account, token_utils::MintHookConfig},
};

#[derive(Accounts)]
pub struct IssueBadge<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: The user receiving the badge
    pub user: UncheckedAccount<'info>,

    /// CHECK: derived from `user`, must not exist yet; checked in `issue`
    #[account(mut)]
    pub token_badge: UncheckedAccount<'info>,

    /// CHECK: governed mint, its hook authority is the designated issuer
    pub mint: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> IssueBadge<'info> {
    pub fn issue(&mut self, program_id: &Pubkey) -> Result<()> {
        let config = MintHookConfig::from_account_info(&self.mint.to_account_info())?;

        let user = self.user.key();
        let bump = validate_issue(
            &config,
            &self.authority.key(),
            &user,
            &self.token_badge.to_account_info(),
            program_id,
        )?;

        let signer_seeds: &[&[&[u8]]] = &[&[TOKEN_BADGE_SEED, user.as_ref(), &[bump]]];
        create_pda_account(
            &self.authority.to_account_info(),
            &self.token_badge.to_account_info(),
            &self.system_program.to_account_info(),
            TokenBadge::LEN,
            signer_seeds,
        )?;

        let badge = TokenBadge {
            authority: self.authority.key(),
            user,
            issued_at: Clock::get()?.unix_timestamp,
            bump,
        };
        badge.try_serialize(&mut &mut self.token_badge.try_borrow_mut_data()?[..])?;

        msg!("TokenBadge issued to user: {}", user);
        emit!(BadgeIssued {
            authority: badge.authority,
            user,
            token_badge: self.token_badge.key(),
            issued_at: badge.issued_at,
        });

        Ok(())
    }
}

/// Preconditions of badge issue, in order: hook mint, designated issuer,
/// derived badge address, no existing badge. Returns the badge bump.
pub fn validate_issue(
    config: &MintHookConfig,
    authority: &Pubkey,
    user: &Pubkey,
    token_badge: &AccountInfo,
    program_id: &Pubkey,
) -> Result<u8> {
    config.require_hook_program(program_id)?;
    config.require_issuer(authority)?;

    let (expected, bump) = find_token_badge_address(user, program_id);
    require_keys_eq!(token_badge.key(), expected, HookError::AccountMismatch);
    require!(token_badge.data_is_empty(), HookError::AlreadyApproved);

    Ok(bump)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slot {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl Slot {
        fn empty(user: &Pubkey) -> Self {
            Self {
                key: find_token_badge_address(user, &crate::ID).0,
                owner: System::id(),
                lamports: 0,
                data: vec![],
            }
        }

        fn check(&mut self, config: &MintHookConfig, authority: &Pubkey, user: &Pubkey) -> Result<u8> {
            let info = AccountInfo::new(
                &self.key,
                false,
                true,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            );
            validate_issue(config, authority, user, &info, &crate::ID)
        }
    }

    fn config_with_issuer(issuer: Pubkey) -> MintHookConfig {
        MintHookConfig {
            program_id: crate::ID,
            hook_authority: Some(issuer),
            mint_authority: None,
            decimals: 9,
        }
    }

    #[test]
    fn test_issuer_may_badge_fresh_user() {
        let issuer = Pubkey::new_unique();
        let user = Pubkey::new_unique();

        let bump = Slot::empty(&user).check(&config_with_issuer(issuer), &issuer, &user).unwrap();
        assert_eq!(bump, find_token_badge_address(&user, &crate::ID).1);
    }

    #[test]
    fn test_mint_of_another_hook_is_invalid_mint() {
        let issuer = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let config = MintHookConfig {
            program_id: Pubkey::new_unique(),
            ..config_with_issuer(issuer)
        };

        let err = Slot::empty(&user).check(&config, &issuer, &user).unwrap_err();
        assert_eq!(err, HookError::InvalidMint.into());
    }

    #[test]
    fn test_non_issuer_is_unauthorized() {
        let user = Pubkey::new_unique();
        let config = config_with_issuer(Pubkey::new_unique());

        let err = Slot::empty(&user).check(&config, &Pubkey::new_unique(), &user).unwrap_err();
        assert_eq!(err, HookError::Unauthorized.into());

        let orphan = MintHookConfig {
            hook_authority: None,
            ..config
        };
        let err = Slot::empty(&user).check(&orphan, &user, &user).unwrap_err();
        assert_eq!(err, HookError::Unauthorized.into());
    }

    #[test]
    fn test_badge_slot_of_another_user_is_account_mismatch() {
        let issuer = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let mut slot = Slot::empty(&Pubkey::new_unique());

        let err = slot.check(&config_with_issuer(issuer), &issuer, &user).unwrap_err();
        assert_eq!(err, HookError::AccountMismatch.into());
    }

    #[test]
    fn test_second_issue_is_already_approved_untouched() {
        let issuer = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let (key, bump) = find_token_badge_address(&user, &crate::ID);

        let mut data = vec![0u8; TokenBadge::LEN];
        TokenBadge {
            authority: issuer,
            user,
            issued_at: 1_700_000_000,
            bump,
        }
        .try_serialize(&mut &mut data[..])
        .unwrap();
        let snapshot = data.clone();

        let mut slot = Slot {
            key,
            owner: crate::ID,
            lamports: 1_000_000,
            data,
        };
        let err = slot.check(&config_with_issuer(issuer), &issuer, &user).unwrap_err();

        assert_eq!(err, HookError::AlreadyApproved.into());
        assert_eq!(slot.data, snapshot);
    }
}
