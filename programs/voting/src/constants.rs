//! Seed namespaces for program-derived addresses. Each entity class gets its
//! own namespace so the three address families can never collide.

pub const POLL_SEED: &[u8] = b"poll";
pub const CANDIDATE_SEED: &[u8] = b"candidate";
pub const RECEIPT_SEED: &[u8] = b"receipt";
