//! Deterministic addresses owned by this program.
//!
//! Everything here is a pure function of its inputs so clients can reproduce
//! the addresses without touching the ledger.

use anchor_lang::prelude::*;

use crate::constants::{EXTRA_ACCOUNT_METAS_SEED, TOKEN_BADGE_SEED};

/// Directory of extra accounts required by `Execute` for `mint`
pub fn find_extra_account_metas_address(mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EXTRA_ACCOUNT_METAS_SEED, mint.as_ref()], program_id)
}

/// Badge that unlocks incoming transfers for `user`
pub fn find_token_badge_address(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_BADGE_SEED, user.as_ref()], program_id)
}
