use anchor_lang::prelude::*;
use anchor_spl::token_interface::spl_token_2022::{
    extension::{
        transfer_hook::{TransferHook, TransferHookAccount},
        BaseStateWithExtensions,
        PodStateWithExtensions,
        StateWithExtensions,
    },
    pod::PodAccount,
    state::Mint,
};
use crate::error::HookError;

/// Transfer hook settings a Token-2022 mint carries in its extension data
#[derive(Debug, Clone, PartialEq)]
pub struct MintHookConfig {
    pub program_id: Pubkey,
    pub hook_authority: Option<Pubkey>,
    pub mint_authority: Option<Pubkey>,
    pub decimals: u8,
}

impl MintHookConfig {
    /// Parse the hook configuration of a mint, rejecting anything that is not
    /// a Token-2022 mint with a transfer hook extension
    pub fn unpack(owner: &Pubkey, data: &[u8]) -> Result<Self> {
        require_keys_eq!(
            *owner,
            anchor_spl::token_interface::spl_token_2022::ID,
            HookError::InvalidMint
        );

        let mint_state = StateWithExtensions::<Mint>::unpack(data)
            .map_err(|_| error!(HookError::InvalidMint))?;

        let transfer_hook = mint_state.get_extension::<TransferHook>()
            .map_err(|_| error!(HookError::InvalidMint))?;

        Ok(Self {
            program_id: Pubkey::try_from(transfer_hook.program_id.0.as_ref()).unwrap_or_default(),
            hook_authority: Option::<Pubkey>::from(transfer_hook.authority),
            mint_authority: Option::<Pubkey>::from(mint_state.base.mint_authority),
            decimals: mint_state.base.decimals,
        })
    }

    pub fn from_account_info(mint_account: &AccountInfo) -> Result<Self> {
        let mint_data = mint_account.try_borrow_data()?;
        Self::unpack(mint_account.owner, &mint_data)
    }

    /// Fails with `InvalidMint` unless the mint routes transfers through `program_id`
    pub fn require_hook_program(&self, program_id: &Pubkey) -> Result<()> {
        require_keys_eq!(self.program_id, *program_id, HookError::InvalidMint);
        Ok(())
    }

    /// The hook authority when set, otherwise the mint authority
    pub fn designated_issuer(&self) -> Option<Pubkey> {
        self.hook_authority.or(self.mint_authority)
    }

    pub fn require_issuer(&self, signer: &Pubkey) -> Result<()> {
        match self.designated_issuer() {
            Some(issuer) if issuer == *signer => Ok(()),
            _ => err!(HookError::Unauthorized),
        }
    }
}

/// Validates that the hook runs inside a Token-2022 transfer: the source
/// account's `transferring` flag is only raised by the token program
pub fn check_transfer_state(source_token: &AccountInfo) -> Result<()> {
    let account_data = source_token.try_borrow_data()?;
    let account = PodStateWithExtensions::<PodAccount>::unpack(&account_data)
        .map_err(|_| error!(HookError::NotTransferring))?;
    let account_extension = account.get_extension::<TransferHookAccount>()
        .map_err(|_| error!(HookError::NotTransferring))?;

    if !bool::from(account_extension.transferring) {
        return err!(HookError::NotTransferring);
    }

    Ok(())
}
