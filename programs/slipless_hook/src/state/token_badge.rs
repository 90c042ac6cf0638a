use anchor_lang::prelude::*;

/// Proof that `user` may receive the governed token.
/// Lives at the PDA `["token-badge", user]`.
#[account]
#[derive(InitSpace, Debug)]
pub struct TokenBadge {
    pub authority: Pubkey,
    pub user: Pubkey,
    pub issued_at: i64,
    pub bump: u8,
}

impl TokenBadge {
    /// Full account size including the discriminator
    pub const LEN: usize = 8 + Self::INIT_SPACE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_badge_len() {
        // discriminator + authority + user + issued_at + bump
        assert_eq!(TokenBadge::LEN, 8 + 32 + 32 + 8 + 1);
    }

    #[test]
    fn test_token_badge_serialization_is_fixed_size() {
        let badge = TokenBadge {
            authority: Pubkey::new_unique(),
            user: Pubkey::new_unique(),
            issued_at: 1_700_000_000,
            bump: 254,
        };

        let mut data = vec![0u8; TokenBadge::LEN];
        badge.try_serialize(&mut &mut data[..]).unwrap();

        let decoded = TokenBadge::try_deserialize(&mut &data[..]).unwrap();
        assert_eq!(decoded.authority, badge.authority);
        assert_eq!(decoded.user, badge.user);
        assert_eq!(decoded.issued_at, badge.issued_at);
        assert_eq!(decoded.bump, badge.bump);
    }
}
