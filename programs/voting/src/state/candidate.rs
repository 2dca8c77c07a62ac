use anchor_lang::prelude::*;

#[account]
pub struct Candidate {
    /// The poll this candidate belongs to (lookup key, not an owning pointer)
    pub poll: Pubkey,

    /// Candidate name; part of the PDA seed tuple, so it is capped at the
    /// 32-byte seed limit and unique within its poll
    pub name: String,

    /// Party affiliation (max 30 bytes)
    pub party: String,

    /// Number of ballots cast for this candidate
    pub votes: u64,

    /// Registration ordinal within the poll, captured from the poll's
    /// candidate counter at creation; used as the deterministic tie-break
    pub position: u64,

    /// Bump seed for PDA
    pub bump: u8,
}

impl Candidate {
    // PDA seeds are limited to 32 bytes, and the name is a seed
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_PARTY_LEN: usize = 30;

    pub const LEN: usize = 8 + // discriminator
        32 + // poll
        (4 + Self::MAX_NAME_LEN) + // name
        (4 + Self::MAX_PARTY_LEN) + // party
        8 + // votes
        8 + // position
        1; // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_covers_max_size_candidate() {
        let c = Candidate {
            poll: Pubkey::new_from_array([255u8; 32]),
            name: "n".repeat(Candidate::MAX_NAME_LEN),
            party: "p".repeat(Candidate::MAX_PARTY_LEN),
            votes: u64::MAX,
            position: u64::MAX,
            bump: 255,
        };
        let mut buf = Vec::new();
        c.serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), Candidate::LEN - 8);
    }
}
