pub mod initialize_extra_account_meta_list;
pub mod issue_badge;
pub mod transfer_hook;

pub use initialize_extra_account_meta_list::*;
pub use issue_badge::*;
pub use transfer_hook::*;
