use anchor_lang::prelude::*;

#[account]
pub struct Poll {
    /// Caller-chosen identifier; it seeds the poll PDA, so two polls can
    /// never share an id
    pub poll_id: u64,

    /// Account that created the poll; immutable after creation
    pub creator: Pubkey,

    /// The question voters are answering (max 200 bytes)
    pub question: String,

    /// Free-form description (max 280 bytes)
    pub description: String,

    /// Unix timestamp at which voting opens (inclusive)
    pub start_time: i64,

    /// Unix timestamp at which voting closes (inclusive)
    pub end_time: i64,

    /// Number of candidates registered so far; also the source of each
    /// candidate's registration ordinal
    pub candidate_count: u64,

    /// Bump seed for PDA
    pub bump: u8,
}

impl Poll {
    pub const MAX_QUESTION_LEN: usize = 200;
    pub const MAX_DESCRIPTION_LEN: usize = 280;

    pub const LEN: usize = 8 + // discriminator
        8 + // poll_id
        32 + // creator
        (4 + Self::MAX_QUESTION_LEN) + // question
        (4 + Self::MAX_DESCRIPTION_LEN) + // description
        8 + // start_time
        8 + // end_time
        8 + // candidate_count
        1; // bump

    /// Votes are accepted on both window bounds
    pub fn is_active(&self, current_time: i64) -> bool {
        current_time >= self.start_time && current_time <= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(start_time: i64, end_time: i64) -> Poll {
        Poll {
            poll_id: 1,
            creator: Pubkey::new_from_array([1u8; 32]),
            question: "q".to_string(),
            description: "d".to_string(),
            start_time,
            end_time,
            candidate_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let p = poll(100, 200);
        assert!(!p.is_active(99));
        assert!(p.is_active(100));
        assert!(p.is_active(150));
        assert!(p.is_active(200));
        assert!(!p.is_active(201));
    }

    #[test]
    fn test_len_covers_max_size_poll() {
        let p = Poll {
            poll_id: u64::MAX,
            creator: Pubkey::new_from_array([255u8; 32]),
            question: "q".repeat(Poll::MAX_QUESTION_LEN),
            description: "d".repeat(Poll::MAX_DESCRIPTION_LEN),
            start_time: i64::MAX,
            end_time: i64::MAX,
            candidate_count: u64::MAX,
            bump: 255,
        };
        let mut buf = Vec::new();
        p.serialize(&mut buf).unwrap();
        // LEN includes the 8-byte account discriminator
        assert_eq!(buf.len(), Poll::LEN - 8);
    }
}
