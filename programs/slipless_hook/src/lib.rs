#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod services;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;
use solana_program::program_error::ProgramError;
use spl_transfer_hook_interface::instruction::TransferHookInstruction;

pub use constants::*;
pub use instructions::*;
pub use state::*;

//  BADGE-GATED TRANSFER HOOK
// Token 2022 transfers of a governed mint only settle when the destination
// owner holds a TokenBadge issued by a designated issuer.
declare_id!("8YpmSCdxjdznYuQtSUpeerjb53iDq4uWW34T9gLF2t2p");

#[program]
pub mod slipless_hook {
    use super::*;

    /// Create the per-mint directory of extra accounts `Execute` needs.
    /// Fails with `AlreadyInitialized` on a second call for the same mint.
    #[interface(spl_transfer_hook_interface::initialize_extra_account_meta_list)]
    pub fn initialize_extra_account_meta_list(
        ctx: Context<InitializeExtraAccountMetaList>,
    ) -> Result<()> {
        ctx.accounts.initialize(ctx.program_id)
    }

    /// Approve `user` to receive the governed token.
    /// Only callable by the mint's designated issuer.
    pub fn issue_badge(ctx: Context<IssueBadge>) -> Result<()> {
        ctx.accounts.issue(ctx.program_id)
    }

    /// Invoked by Token 2022 during every transfer of the governed mint
    #[interface(spl_transfer_hook_interface::execute)]
    pub fn transfer_hook(ctx: Context<TransferHook>, amount: u64) -> Result<()> {
        ctx.accounts.execute(amount, ctx.program_id)
    }

    /// Fallback function to handle transfer hook interface
    pub fn fallback<'info>(
        program_id: &Pubkey,
        accounts: &'info [AccountInfo<'info>],
        data: &[u8],
    ) -> Result<()> {
        let instruction = TransferHookInstruction::unpack(data)?;

        match instruction {
            TransferHookInstruction::Execute { amount } => {
                let amount_bytes = amount.to_le_bytes();
                __private::__global::transfer_hook(program_id, accounts, &amount_bytes)
            }
            _ => Err(ProgramError::InvalidInstructionData.into()),
        }
    }
}
