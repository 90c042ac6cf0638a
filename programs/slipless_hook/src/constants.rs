use anchor_lang::prelude::*;

/// Seed prefix of the per-mint extra account metas directory
#[constant]
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";

/// Seed prefix of the per-recipient token badge
#[constant]
pub const TOKEN_BADGE_SEED: &[u8] = b"token-badge";

// Position of the destination token account in the Execute account list
pub const DESTINATION_ACCOUNT_INDEX: u8 = 2;

// Token account layout: mint (32) | owner (32) | ...
pub const TOKEN_ACCOUNT_OWNER_OFFSET: u8 = 32;
pub const PUBKEY_LEN: u8 = 32;

/// Number of descriptors written to the directory
pub const EXTRA_ACCOUNT_META_COUNT: usize = 1;
