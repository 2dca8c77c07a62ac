use solana_client::client_error::ClientError as RpcClientError;
use anchor_client::ClientError;
use thiserror::Error;

/// Typed failures for every caller-facing operation. Precondition failures
/// get their own variants so callers can say "you already voted" instead of
/// showing a raw transaction error; anything the environment could not commit
/// or fetch is surfaced as-is and never retried here.
#[derive(Debug, Error)]
pub enum VotingClientError {
    #[error("a poll with this id already exists")]
    PollAlreadyExists,

    #[error("a candidate with this name is already registered in this poll")]
    CandidateAlreadyExists,

    #[error("this voter has already cast a ballot in this poll")]
    AlreadyVoted,

    #[error("poll not found")]
    PollNotFound,

    #[error("candidate not found")]
    CandidateNotFound,

    #[error("poll start time must be before its end time")]
    InvalidTimeWindow,

    #[error("the poll is not currently accepting votes")]
    PollNotActive,

    #[error("only the poll creator can perform this action")]
    Unauthorized,

    #[error("text argument exceeds the on-chain bound")]
    TextTooLong,

    #[error("execution environment failure: {0}")]
    Environment(#[from] ClientError),

    #[error("execution environment failure: {0}")]
    Rpc(#[from] RpcClientError),
}

/// Map a failed submission to a typed failure.
///
/// Program errors are recognized by error name or custom error code in the
/// rendered transaction error. Create-collisions come from the system program
/// rejecting allocation at an occupied address; each mutation creates exactly
/// one PDA, so that failure maps unambiguously to `conflict` for the
/// operation that was attempted.
pub(crate) fn map_send_error(err: ClientError, conflict: VotingClientError) -> VotingClientError {
    let rendered = err.to_string();

    // Full anchor log phrases, plus the raw custom-code rendering used when
    // logs are unavailable. Bare error names are avoided on purpose: an RPC
    // provider's "401 Unauthorized" must stay an environment failure.
    for (needle, mapped) in [
        ("caused by account: poll", VotingClientError::PollNotFound),
        (
            "caused by account: candidate",
            VotingClientError::CandidateNotFound,
        ),
        (
            "Error Code: InvalidTimeWindow",
            VotingClientError::InvalidTimeWindow,
        ),
        (
            "custom program error: 0x1770",
            VotingClientError::InvalidTimeWindow,
        ),
        ("Error Code: Unauthorized", VotingClientError::Unauthorized),
        (
            "custom program error: 0x1771",
            VotingClientError::Unauthorized,
        ),
        ("Error Code: PollNotActive", VotingClientError::PollNotActive),
        (
            "custom program error: 0x1772",
            VotingClientError::PollNotActive,
        ),
        ("Error Code: QuestionTooLong", VotingClientError::TextTooLong),
        ("custom program error: 0x1773", VotingClientError::TextTooLong),
        (
            "Error Code: DescriptionTooLong",
            VotingClientError::TextTooLong,
        ),
        ("custom program error: 0x1774", VotingClientError::TextTooLong),
        (
            "Error Code: CandidateNameTooLong",
            VotingClientError::TextTooLong,
        ),
        ("custom program error: 0x1775", VotingClientError::TextTooLong),
        ("Error Code: PartyTooLong", VotingClientError::TextTooLong),
        ("custom program error: 0x1776", VotingClientError::TextTooLong),
    ] {
        if rendered.contains(needle) {
            return mapped;
        }
    }

    if rendered.contains("already in use") || rendered.contains("custom program error: 0x0") {
        return conflict;
    }

    VotingClientError::Environment(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_errors_surface_as_environment_failures() {
        let err = ClientError::AccountNotFound;
        let mapped = map_send_error(err, VotingClientError::AlreadyVoted);
        assert!(matches!(mapped, VotingClientError::Environment(_)));
    }
}
