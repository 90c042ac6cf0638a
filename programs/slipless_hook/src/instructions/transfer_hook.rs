use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

use crate::{
    constants::EXTRA_ACCOUNT_METAS_SEED,
    error::HookError,
    pda::find_token_badge_address,
    services::account_resolver::destination_owner,
    state::TokenBadge,
    utils::token_utils::{check_transfer_state, MintHookConfig},
};

/// Accounts in the order fixed by the transfer hook interface:
/// the four transfer accounts, the directory, then the resolved extras.
#[derive(Accounts)]
pub struct TransferHook<'info> {
    #[account(token::mint = mint)]
    pub source_token: Box<InterfaceAccount<'info, TokenAccount>>,
    pub mint: Box<InterfaceAccount<'info, Mint>>,
    #[account(token::mint = mint)]
    pub destination_token: Box<InterfaceAccount<'info, TokenAccount>>,
    /// CHECK: The owner or delegate of the source token account
    pub owner: UncheckedAccount<'info>,
    /// CHECK: The extra account meta list, validated by seeds.
    #[account(
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,
    /// CHECK: may not exist; verified against the destination owner in `execute`
    pub token_badge: UncheckedAccount<'info>,
}

/// Everything one enforcement pass looks at. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferContext {
    pub source_owner: Pubkey,
    pub destination_owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub decimals: u8,
}

impl<'info> TransferHook<'info> {
    pub fn execute(&self, amount: u64, program_id: &Pubkey) -> Result<()> {
        check_transfer_state(&self.source_token.to_account_info())?;

        let config = MintHookConfig::from_account_info(&self.mint.to_account_info())?;
        config.require_hook_program(program_id)?;

        let transfer = TransferContext {
            source_owner: self.owner.key(),
            destination_owner: destination_owner(
                &self.destination_token.to_account_info().try_borrow_data()?,
            )?,
            mint: self.mint.key(),
            amount,
            decimals: config.decimals,
        };

        msg!(
            "Transfer hook invoked: {} (decimals {}) of mint {} from {} to {}",
            transfer.amount,
            transfer.decimals,
            transfer.mint,
            transfer.source_owner,
            transfer.destination_owner
        );

        transfer.evaluate(&self.token_badge.to_account_info(), program_id)?;

        msg!("Token badge is valid, transfer allowed");
        Ok(())
    }
}

impl TransferContext {
    /// Accept the transfer only if `token_badge` is the live badge of the
    /// destination owner. Issuer authority is settled when the badge is issued.
    pub fn evaluate(&self, token_badge: &AccountInfo, program_id: &Pubkey) -> Result<TokenBadge> {
        let (expected, _) = find_token_badge_address(&self.destination_owner, program_id);
        require_keys_eq!(token_badge.key(), expected, HookError::AccountMismatch);

        if token_badge.data_is_empty() || token_badge.owner != program_id {
            return err!(HookError::NotApproved);
        }

        let badge = {
            let data = token_badge.try_borrow_data()?;
            TokenBadge::try_deserialize(&mut &data[..])
                .map_err(|_| error!(HookError::RecordCorrupt))?
        };
        require_keys_eq!(badge.user, self.destination_owner, HookError::RecordCorrupt);

        Ok(badge)
    }
}
