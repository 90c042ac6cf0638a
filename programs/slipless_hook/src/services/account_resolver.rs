use anchor_lang::prelude::*;
use spl_tlv_account_resolution::{
    account::ExtraAccountMeta,
    seeds::Seed,
    state::ExtraAccountMetaList,
};
use spl_transfer_hook_interface::instruction::ExecuteInstruction;

use crate::{
    constants::*,
    error::HookError,
};

/// Accounts Token-2022 must append to every `Execute` for a governed mint.
///
/// The order is positional and must never change once a directory exists:
/// clients resolve these descriptors to build their transfer instructions.
pub fn extra_account_metas() -> Result<Vec<ExtraAccountMeta>> {
    Ok(vec![
        // token badge of the destination owner
        ExtraAccountMeta::new_with_seeds(
            &[
                Seed::Literal {
                    bytes: TOKEN_BADGE_SEED.to_vec(),
                },
                Seed::AccountData {
                    account_index: DESTINATION_ACCOUNT_INDEX,
                    data_index: TOKEN_ACCOUNT_OWNER_OFFSET,
                    length: PUBKEY_LEN,
                },
            ],
            false, // is_signer
            false, // is_writable
        )?,
    ])
}

/// Exact size of the directory account
pub fn extra_account_meta_list_size() -> Result<usize> {
    Ok(ExtraAccountMetaList::size_of(EXTRA_ACCOUNT_META_COUNT)?)
}

/// Write the descriptor list into freshly allocated directory data
pub fn write_extra_account_metas(data: &mut [u8]) -> Result<()> {
    require!(
        !is_directory_initialized(data),
        HookError::AlreadyInitialized
    );

    let metas = extra_account_metas()?;
    ExtraAccountMetaList::init::<ExecuteInstruction>(data, &metas)?;

    Ok(())
}

/// A fresh allocation is zeroed; any written byte means the list exists
pub fn is_directory_initialized(data: &[u8]) -> bool {
    data.iter().any(|byte| *byte != 0)
}

/// Read the destination owner the same way the runtime resolves the
/// `AccountData` seed: bytes [32, 64) of the destination token account.
pub fn destination_owner(destination_data: &[u8]) -> Result<Pubkey> {
    let start = TOKEN_ACCOUNT_OWNER_OFFSET as usize;
    let end = start + PUBKEY_LEN as usize;

    let bytes: [u8; 32] = destination_data
        .get(start..end)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(HookError::AccountMismatch)?;

    Ok(Pubkey::new_from_array(bytes))
}
