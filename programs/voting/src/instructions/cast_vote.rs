use anchor_lang::prelude::*;

use crate::constants::{CANDIDATE_SEED, POLL_SEED, RECEIPT_SEED};
use crate::errors::VotingError;
use crate::events::VoteCast;
use crate::state::{Candidate, Poll, VoterReceipt};

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_name: String)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        mut,
        seeds = [CANDIDATE_SEED, poll_id.to_le_bytes().as_ref(), candidate_name.as_bytes()],
        bump = candidate.bump
    )]
    pub candidate: Account<'info, Candidate>,

    /// The receipt is the sole double-vote defense: its address is derived
    /// from (poll, voter), and `init` on an occupied address fails the whole
    /// transaction, so the vote increment below can never commit twice for
    /// one voter. Racing votes are total-ordered by the runtime and only the
    /// first one finds the address empty.
    #[account(
        init,
        payer = voter,
        space = VoterReceipt::LEN,
        seeds = [RECEIPT_SEED, poll_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub receipt: Account<'info, VoterReceipt>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CastVote>, poll_id: u64, candidate_name: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let poll = &ctx.accounts.poll;

    require!(poll.is_active(now), VotingError::PollNotActive);

    let candidate = &mut ctx.accounts.candidate;
    candidate.votes = candidate
        .votes
        .checked_add(1)
        .ok_or(VotingError::MathOverflow)?;

    let receipt = &mut ctx.accounts.receipt;
    receipt.poll = poll.key();
    receipt.voter = ctx.accounts.voter.key();
    receipt.has_voted = true;
    receipt.voted_at = now;
    receipt.bump = ctx.bumps.receipt;

    emit!(VoteCast {
        poll_id,
        candidate: candidate.key(),
        voter: receipt.voter,
        voted_at: now,
    });

    msg!("Vote recorded for {} in poll {}", candidate_name, poll_id);

    Ok(())
}
