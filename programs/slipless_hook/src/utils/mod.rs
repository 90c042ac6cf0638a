pub mod account_utils;
pub mod token_utils;
