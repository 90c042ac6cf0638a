use anchor_lang::prelude::*;

#[error_code]
pub enum HookError {
    #[msg("Signer is not the designated badge issuer.")]
    Unauthorized,
    #[msg("Extra account meta list already initialized for this mint.")]
    AlreadyInitialized,
    #[msg("Recipient already holds a token badge.")]
    AlreadyApproved,
    #[msg("Destination owner holds no valid token badge.")]
    NotApproved,
    #[msg("Token badge data does not match the destination owner.")]
    RecordCorrupt,
    #[msg("Supplied account does not match the derived address.")]
    AccountMismatch,
    #[msg("Payer cannot cover the rent-exempt balance.")]
    InsufficientFunds,
    #[msg("Mint does not declare this program as its transfer hook.")]
    InvalidMint,
    #[msg("The token is not currently transferring.")]
    NotTransferring,
}
