use anchor_lang::prelude::*;

use crate::{
    constants::EXTRA_ACCOUNT_METAS_SEED,
    error::HookError,
    events::ExtraAccountMetaListInitialized,
    pda::find_extra_account_metas_address,
    services::account_resolver::{
        extra_account_meta_list_size, is_directory_initialized, write_extra_account_metas,
    },
    utils::{account_utils::create_pda_account, token_utils::MintHookConfig},
};

#[derive(Accounts)]
pub struct InitializeExtraAccountMetaList<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: parsed as a Token-2022 mint in `initialize`
    pub mint: UncheckedAccount<'info>,

    /// CHECK: ExtraAccountMetaList Account, address and emptiness checked in `initialize`
    #[account(mut)]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeExtraAccountMetaList<'info> {
    pub fn initialize(&mut self, program_id: &Pubkey) -> Result<()> {
        let mint_key = self.mint.key();

        let config = MintHookConfig::from_account_info(&self.mint.to_account_info())?;
        let bump = validate_directory(
            &config,
            &self.extra_account_meta_list.to_account_info(),
            &mint_key,
            program_id,
        )?;

        let signer_seeds: &[&[&[u8]]] = &[&[EXTRA_ACCOUNT_METAS_SEED, mint_key.as_ref(), &[bump]]];
        create_pda_account(
            &self.payer.to_account_info(),
            &self.extra_account_meta_list.to_account_info(),
            &self.system_program.to_account_info(),
            extra_account_meta_list_size()?,
            signer_seeds,
        )?;

        write_extra_account_metas(&mut self.extra_account_meta_list.try_borrow_mut_data()?)?;

        msg!("Extra account meta list initialized for mint {}", mint_key);
        emit!(ExtraAccountMetaListInitialized {
            mint: mint_key,
            extra_account_meta_list: self.extra_account_meta_list.key(),
            payer: self.payer.key(),
        });

        Ok(())
    }
}

/// Preconditions of directory creation, in order: the mint routes transfers
/// through this program, the directory sits at its derived address, and it
/// has not been written yet. Returns the directory bump.
pub fn validate_directory(
    config: &MintHookConfig,
    directory: &AccountInfo,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<u8> {
    config.require_hook_program(program_id)?;

    let (expected, bump) = find_extra_account_metas_address(mint, program_id);
    require_keys_eq!(directory.key(), expected, HookError::AccountMismatch);

    require!(
        directory.owner != program_id && !is_directory_initialized(&directory.try_borrow_data()?),
        HookError::AlreadyInitialized
    );

    Ok(bump)
}
