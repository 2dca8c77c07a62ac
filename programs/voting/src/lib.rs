use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod results;
pub mod state;

use instructions::*;

declare_id!("ErWpLzQeDSoB1nuTs2x1d2yHA2AsBvZHg4nNkAusyNK8");

#[program]
pub mod voting {
    use super::*;

    /// Create a new poll with a fixed voting window
    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        question: String,
        description: String,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        instructions::initialize_poll::handler(
            ctx,
            poll_id,
            question,
            description,
            start_time,
            end_time,
        )
    }

    /// Register a candidate under an existing poll (poll creator only)
    pub fn add_candidate(
        ctx: Context<AddCandidate>,
        poll_id: u64,
        name: String,
        party: String,
    ) -> Result<()> {
        instructions::add_candidate::handler(ctx, poll_id, name, party)
    }

    /// Cast a single-use ballot for a candidate in an active poll
    pub fn cast_vote(
        ctx: Context<CastVote>,
        poll_id: u64,
        candidate_name: String,
    ) -> Result<()> {
        instructions::cast_vote::handler(ctx, poll_id, candidate_name)
    }
}
