use std::rc::Rc;

use anchor_client::{
    solana_sdk::{pubkey::Pubkey, signature::Signature, signer::Signer, system_program},
    Client, ClientError, Program,
};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};

use voting::pda::{find_candidate_address, find_poll_address, find_receipt_address};
use voting::results::{aggregate, PollResults};
use voting::state::{Candidate, Poll, VoterReceipt};

use crate::error::{map_send_error, VotingClientError};

/// Off-chain handle for the voting program. Every target address is derived
/// locally before submission; no operation consults a directory of any kind.
pub struct VotingClient<C: Signer> {
    program: Program<Rc<C>>,
}

impl<C: Signer> VotingClient<C> {
    pub fn new(client: Client<Rc<C>>, program_id: Pubkey) -> Result<Self, VotingClientError> {
        let program = client.program(program_id)?;
        Ok(Self { program })
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.program.payer()
    }

    /// Cluster time, read from the environment rather than the local host
    pub fn current_time(&self) -> Result<i64, VotingClientError> {
        let rpc = self.program.rpc();
        let slot = rpc.get_slot()?;
        Ok(rpc.get_block_time(slot)?)
    }

    /// Create a new poll with a fixed voting window
    pub fn initialize_poll(
        &self,
        poll_id: u64,
        question: String,
        description: String,
        start_time: i64,
        end_time: i64,
    ) -> Result<Signature, VotingClientError> {
        let (poll, _) = find_poll_address(&self.program.id(), poll_id);

        self.program
            .request()
            .accounts(voting::accounts::InitializePoll {
                creator: self.program.payer(),
                poll,
                system_program: system_program::ID,
            })
            .args(voting::instruction::InitializePoll {
                poll_id,
                question,
                description,
                start_time,
                end_time,
            })
            .send()
            .map_err(|err| map_send_error(err, VotingClientError::PollAlreadyExists))
    }

    /// Register a candidate under a poll (poll creator only)
    pub fn add_candidate(
        &self,
        poll_id: u64,
        name: String,
        party: String,
    ) -> Result<Signature, VotingClientError> {
        let program_id = self.program.id();
        let (poll, _) = find_poll_address(&program_id, poll_id);
        let (candidate, _) = find_candidate_address(&program_id, poll_id, &name);

        self.program
            .request()
            .accounts(voting::accounts::AddCandidate {
                creator: self.program.payer(),
                poll,
                candidate,
                system_program: system_program::ID,
            })
            .args(voting::instruction::AddCandidate {
                poll_id,
                name,
                party,
            })
            .send()
            .map_err(|err| map_send_error(err, VotingClientError::CandidateAlreadyExists))
    }

    /// Cast the payer's single-use ballot for a candidate
    pub fn cast_vote(
        &self,
        poll_id: u64,
        candidate_name: String,
    ) -> Result<Signature, VotingClientError> {
        let program_id = self.program.id();
        let voter = self.program.payer();
        let (poll, _) = find_poll_address(&program_id, poll_id);
        let (candidate, _) = find_candidate_address(&program_id, poll_id, &candidate_name);
        let (receipt, _) = find_receipt_address(&program_id, poll_id, &voter);

        self.program
            .request()
            .accounts(voting::accounts::CastVote {
                voter,
                poll,
                candidate,
                receipt,
                system_program: system_program::ID,
            })
            .args(voting::instruction::CastVote {
                poll_id,
                candidate_name,
            })
            .send()
            .map_err(|err| map_send_error(err, VotingClientError::AlreadyVoted))
    }

    /// Fetch a poll by id
    pub fn get_poll(&self, poll_id: u64) -> Result<Poll, VotingClientError> {
        let (address, _) = find_poll_address(&self.program.id(), poll_id);
        match self.program.account::<Poll>(address) {
            Ok(poll) => Ok(poll),
            Err(ClientError::AccountNotFound) => Err(VotingClientError::PollNotFound),
            Err(err) => Err(VotingClientError::Environment(err)),
        }
    }

    /// Fetch a single candidate by poll id and name
    pub fn get_candidate(&self, poll_id: u64, name: &str) -> Result<Candidate, VotingClientError> {
        let (address, _) = find_candidate_address(&self.program.id(), poll_id, name);
        match self.program.account::<Candidate>(address) {
            Ok(candidate) => Ok(candidate),
            Err(ClientError::AccountNotFound) => Err(VotingClientError::CandidateNotFound),
            Err(err) => Err(VotingClientError::Environment(err)),
        }
    }

    /// Fetch every candidate registered under a poll, in registration order
    pub fn get_candidates(&self, poll_id: u64) -> Result<Vec<Candidate>, VotingClientError> {
        let (poll_address, _) = find_poll_address(&self.program.id(), poll_id);

        // Scan candidate accounts whose `poll` field (right after the
        // discriminator) points at this poll.
        let filters = vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
            8,
            poll_address.to_bytes().to_vec(),
        ))];

        let mut candidates: Vec<Candidate> = self
            .program
            .accounts::<Candidate>(filters)?
            .into_iter()
            .map(|(_, candidate)| candidate)
            .collect();
        candidates.sort_by_key(|c| c.position);

        Ok(candidates)
    }

    /// Fetch a poll and aggregate its tallies at cluster time
    pub fn get_results(&self, poll_id: u64) -> Result<(Poll, PollResults), VotingClientError> {
        let poll = self.get_poll(poll_id)?;
        let candidates = self.get_candidates(poll_id)?;
        let now = self.current_time()?;
        let results = aggregate(&poll, &candidates, now);
        Ok((poll, results))
    }

    /// Whether a voter has already cast a ballot in a poll
    pub fn has_voted(&self, poll_id: u64, voter: Pubkey) -> Result<bool, VotingClientError> {
        let (address, _) = find_receipt_address(&self.program.id(), poll_id, &voter);
        match self.program.account::<VoterReceipt>(address) {
            Ok(receipt) => Ok(receipt.has_voted),
            Err(ClientError::AccountNotFound) => Ok(false),
            Err(err) => Err(VotingClientError::Environment(err)),
        }
    }
}
