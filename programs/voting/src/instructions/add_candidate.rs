use anchor_lang::prelude::*;

use crate::constants::{CANDIDATE_SEED, POLL_SEED};
use crate::errors::VotingError;
use crate::events::CandidateRegistered;
use crate::state::{Candidate, Poll};

#[derive(Accounts)]
#[instruction(poll_id: u64, name: String)]
pub struct AddCandidate<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump
    )]
    pub poll: Account<'info, Poll>,

    /// The candidate account to be created. The name is part of the seed
    /// tuple, so a second candidate with the same name in the same poll lands
    /// on an occupied address and the transaction fails.
    #[account(
        init,
        payer = creator,
        space = Candidate::LEN,
        seeds = [CANDIDATE_SEED, poll_id.to_le_bytes().as_ref(), name.as_bytes()],
        bump
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddCandidate>, poll_id: u64, name: String, party: String) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.poll.creator,
        ctx.accounts.creator.key(),
        VotingError::Unauthorized
    );
    require!(
        name.len() <= Candidate::MAX_NAME_LEN,
        VotingError::CandidateNameTooLong
    );
    require!(
        party.len() <= Candidate::MAX_PARTY_LEN,
        VotingError::PartyTooLong
    );

    let poll = &mut ctx.accounts.poll;
    let candidate = &mut ctx.accounts.candidate;

    candidate.poll = poll.key();
    candidate.name = name;
    candidate.party = party;
    candidate.votes = 0;
    candidate.position = poll.candidate_count;
    candidate.bump = ctx.bumps.candidate;

    poll.candidate_count = poll
        .candidate_count
        .checked_add(1)
        .ok_or(VotingError::MathOverflow)?;

    emit!(CandidateRegistered {
        poll_id,
        name: candidate.name.clone(),
        party: candidate.party.clone(),
        position: candidate.position,
    });

    msg!(
        "Candidate {} registered in poll {} at position {}",
        candidate.name,
        poll_id,
        candidate.position
    );

    Ok(())
}
