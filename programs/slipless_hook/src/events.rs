use anchor_lang::prelude::*;

#[event]
pub struct ExtraAccountMetaListInitialized {
    pub mint: Pubkey,
    pub extra_account_meta_list: Pubkey,
    pub payer: Pubkey,
}

#[event]
pub struct BadgeIssued {
    pub authority: Pubkey,
    pub user: Pubkey,
    pub token_badge: Pubkey,
    pub issued_at: i64,
}
