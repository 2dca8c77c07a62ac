use anchor_lang::prelude::*;

use crate::constants::POLL_SEED;
use crate::errors::VotingError;
use crate::events::PollCreated;
use crate::state::Poll;

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The poll account to be created. `init` fails the whole transaction if
    /// the derived address is already occupied, which is what makes poll ids
    /// unique without any registry.
    #[account(
        init,
        payer = creator,
        space = Poll::LEN,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializePoll>,
    poll_id: u64,
    question: String,
    description: String,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    require!(start_time < end_time, VotingError::InvalidTimeWindow);
    require!(
        question.len() <= Poll::MAX_QUESTION_LEN,
        VotingError::QuestionTooLong
    );
    require!(
        description.len() <= Poll::MAX_DESCRIPTION_LEN,
        VotingError::DescriptionTooLong
    );

    let poll = &mut ctx.accounts.poll;
    poll.poll_id = poll_id;
    poll.creator = ctx.accounts.creator.key();
    poll.question = question;
    poll.description = description;
    poll.start_time = start_time;
    poll.end_time = end_time;
    poll.candidate_count = 0;
    poll.bump = ctx.bumps.poll;

    emit!(PollCreated {
        poll_id,
        creator: poll.creator,
        start_time,
        end_time,
    });

    msg!("Poll {} created by {}", poll_id, poll.creator);

    Ok(())
}
