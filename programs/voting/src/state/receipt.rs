use anchor_lang::prelude::*;

/// One receipt exists per (poll, voter) pair. Its address is derived from
/// that pair, so the runtime's create-if-absent semantics make the account's
/// mere existence the double-vote guard. Receipts are never mutated or
/// closed.
#[account]
pub struct VoterReceipt {
    /// The poll this receipt belongs to
    pub poll: Pubkey,

    /// The voter whose ballot was accepted
    pub voter: Pubkey,

    /// Set true atomically with creation
    pub has_voted: bool,

    /// Clock timestamp of the accepted ballot
    pub voted_at: i64,

    /// Bump seed for PDA
    pub bump: u8,
}

impl VoterReceipt {
    pub const LEN: usize = 8 + // discriminator
        32 + // poll
        32 + // voter
        1 + // has_voted
        8 + // voted_at
        1; // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_covers_receipt() {
        let r = VoterReceipt {
            poll: Pubkey::new_from_array([255u8; 32]),
            voter: Pubkey::new_from_array([254u8; 32]),
            has_voted: true,
            voted_at: i64::MAX,
            bump: 255,
        };
        let mut buf = Vec::new();
        r.serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), VoterReceipt::LEN - 8);
    }
}
