//! Read-only tally aggregation. Nothing here touches accounts or the clock;
//! callers fetch the poll and its candidates, supply the current time, and
//! get back totals, per-candidate shares, the poll status, and the leader.

use crate::state::{Candidate, Poll};

pub const BPS_DENOMINATOR: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// The voting window has not opened yet
    Upcoming,
    /// Votes are currently being accepted
    Active,
    /// The voting window has closed
    Completed,
}

impl PollStatus {
    pub fn of(poll: &Poll, current_time: i64) -> Self {
        if current_time < poll.start_time {
            PollStatus::Upcoming
        } else if current_time > poll.end_time {
            PollStatus::Completed
        } else {
            PollStatus::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PollStatus::Upcoming => "upcoming",
            PollStatus::Active => "active",
            PollStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTally {
    pub name: String,
    pub party: String,
    pub votes: u64,
    /// Share of all votes in basis points; 0 for everyone while the poll has
    /// no votes
    pub share_bps: u64,
    pub position: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResults {
    pub total_votes: u64,
    pub status: PollStatus,
    /// Tallies in registration order
    pub tallies: Vec<CandidateTally>,
    /// Name of the candidate with the most votes; ties resolve to the
    /// first-registered candidate
    pub winner: Option<String>,
}

pub fn aggregate(poll: &Poll, candidates: &[Candidate], current_time: i64) -> PollResults {
    let mut ordered: Vec<&Candidate> = candidates.iter().collect();
    ordered.sort_by_key(|c| c.position);

    let total: u128 = ordered.iter().map(|c| c.votes as u128).sum();

    let tallies: Vec<CandidateTally> = ordered
        .iter()
        .map(|c| CandidateTally {
            name: c.name.clone(),
            party: c.party.clone(),
            votes: c.votes,
            share_bps: if total == 0 {
                0
            } else {
                ((c.votes as u128 * BPS_DENOMINATOR as u128) / total) as u64
            },
            position: c.position,
        })
        .collect();

    let winner = ordered
        .iter()
        .max_by(|a, b| a.votes.cmp(&b.votes).then(b.position.cmp(&a.position)))
        .map(|c| c.name.clone());

    PollResults {
        total_votes: total as u64,
        status: PollStatus::of(poll, current_time),
        tallies,
        winner,
    }
}
