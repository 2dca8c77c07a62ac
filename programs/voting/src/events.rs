use anchor_lang::prelude::*;

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub creator: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct CandidateRegistered {
    pub poll_id: u64,
    pub name: String,
    pub party: String,
    pub position: u64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub candidate: Pubkey,
    pub voter: Pubkey,
    pub voted_at: i64,
}
