use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    #[msg("Poll start time must be before its end time")]
    InvalidTimeWindow,

    #[msg("Only the poll creator can perform this action")]
    Unauthorized,

    #[msg("The poll is not currently accepting votes")]
    PollNotActive,

    #[msg("Poll question too long")]
    QuestionTooLong,

    #[msg("Poll description too long")]
    DescriptionTooLong,

    #[msg("Candidate name too long")]
    CandidateNameTooLong,

    #[msg("Candidate party too long")]
    PartyTooLong,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
