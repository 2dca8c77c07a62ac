//! Address derivation for every account class the program owns.
//!
//! Derivation is a pure function of the seed tuple and the program id, so any
//! client can compute where an account must live before it exists. There is
//! no registry or allocator anywhere: the derived address itself is what makes
//! "create exactly once" enforceable by the runtime.

use anchor_lang::prelude::*;

use crate::constants::{CANDIDATE_SEED, POLL_SEED, RECEIPT_SEED};

/// Derive the PDA for a poll account
pub fn find_poll_address(program_id: &Pubkey, poll_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POLL_SEED, &poll_id.to_le_bytes()], program_id)
}

/// Derive the PDA for a candidate account. The candidate name is part of the
/// seed tuple, which is what makes names unique per poll.
pub fn find_candidate_address(
    program_id: &Pubkey,
    poll_id: u64,
    candidate_name: &str,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CANDIDATE_SEED,
            &poll_id.to_le_bytes(),
            candidate_name.as_bytes(),
        ],
        program_id,
    )
}

/// Derive the PDA for a voter receipt. One address exists per (poll, voter)
/// pair, so at most one receipt can ever be created for it.
pub fn find_receipt_address(program_id: &Pubkey, poll_id: u64, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RECEIPT_SEED, &poll_id.to_le_bytes(), voter.as_ref()], program_id)
}
