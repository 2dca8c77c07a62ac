use std::rc::Rc;

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig, pubkey::Pubkey, signature::read_keypair_file,
    },
    Client, Cluster,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod error;

use client::VotingClient;

#[derive(Parser)]
#[command(name = "voting-cli")]
#[command(about = "CLI for the time-bounded voting program", long_about = None)]
struct Cli {
    /// Path to the payer keypair file
    #[arg(short, long, default_value = "~/.config/solana/id.json")]
    keypair: String,

    /// Cluster to use (localnet, devnet, testnet, mainnet)
    #[arg(short, long, default_value = "localnet")]
    cluster: String,

    /// Program id of the voting program (defaults to the built-in id)
    #[arg(short, long)]
    program_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new poll
    InitializePoll {
        /// Unique poll id
        poll_id: u64,
        /// Poll question
        question: String,
        /// Poll description
        description: String,
        /// Start of the voting window (Unix timestamp)
        start_time: i64,
        /// End of the voting window (Unix timestamp)
        end_time: i64,
    },
    /// Register a candidate under a poll (poll creator only)
    AddCandidate {
        /// Poll id
        poll_id: u64,
        /// Candidate name
        name: String,
        /// Candidate party affiliation
        party: String,
    },
    /// Cast a vote for a candidate
    Vote {
        /// Poll id
        poll_id: u64,
        /// Candidate name
        candidate_name: String,
    },
    /// Show a poll
    GetPoll {
        /// Poll id
        poll_id: u64,
    },
    /// Show a single candidate
    GetCandidate {
        /// Poll id
        poll_id: u64,
        /// Candidate name
        name: String,
    },
    /// Show poll results with tallies, shares, and the leader
    GetResults {
        /// Poll id
        poll_id: u64,
    },
    /// Check whether a voter has already cast a ballot in a poll
    HasVoted {
        /// Poll id
        poll_id: u64,
        /// Voter public key (defaults to the payer)
        #[arg(short, long)]
        voter: Option<String>,
    },
}

fn format_ts(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let keypair_path = shellexpand::tilde(&cli.keypair).to_string();
    let payer = read_keypair_file(&keypair_path)
        .map_err(|e| anyhow::anyhow!("failed to read keypair from {}: {}", keypair_path, e))?;

    let cluster = match cli.cluster.as_str() {
        "localnet" => Cluster::Localnet,
        "devnet" => Cluster::Devnet,
        "testnet" => Cluster::Testnet,
        "mainnet" => Cluster::Mainnet,
        _ => return Err(anyhow::anyhow!("invalid cluster: {}", cli.cluster)),
    };

    let program_id = match cli.program_id {
        Some(raw) => raw
            .parse::<Pubkey>()
            .map_err(|e| anyhow::anyhow!("invalid program id: {}", e))?,
        None => voting::ID,
    };

    let client = Client::new_with_options(cluster, Rc::new(payer), CommitmentConfig::confirmed());
    let voting_client = VotingClient::new(client, program_id)?;

    match cli.command {
        Commands::InitializePoll {
            poll_id,
            question,
            description,
            start_time,
            end_time,
        } => {
            println!("Initializing poll {}...", poll_id);
            let signature = voting_client.initialize_poll(
                poll_id,
                question.clone(),
                description,
                start_time,
                end_time,
            )?;
            println!("Poll created");
            println!("  Poll id: {}", poll_id);
            println!("  Question: {}", question);
            println!("  Window: {} -> {}", format_ts(start_time), format_ts(end_time));
            println!("  Transaction: {}", signature);
        }
        Commands::AddCandidate {
            poll_id,
            name,
            party,
        } => {
            println!("Registering candidate in poll {}...", poll_id);
            let signature = voting_client.add_candidate(poll_id, name.clone(), party.clone())?;
            println!("Candidate registered");
            println!("  Name: {}", name);
            println!("  Party: {}", party);
            println!("  Transaction: {}", signature);
        }
        Commands::Vote {
            poll_id,
            candidate_name,
        } => {
            println!("Voting for {} in poll {}...", candidate_name, poll_id);
            let signature = voting_client.cast_vote(poll_id, candidate_name.clone())?;
            println!("Vote cast");
            println!("  Candidate: {}", candidate_name);
            println!("  Transaction: {}", signature);
        }
        Commands::GetPoll { poll_id } => {
            let poll = voting_client.get_poll(poll_id)?;
            println!("=== Poll {} ===", poll_id);
            println!("Creator: {}", poll.creator);
            println!("Question: {}", poll.question);
            println!("Description: {}", poll.description);
            println!("Window: {} -> {}", format_ts(poll.start_time), format_ts(poll.end_time));
            println!("Candidates: {}", poll.candidate_count);
        }
        Commands::GetCandidate { poll_id, name } => {
            let candidate = voting_client.get_candidate(poll_id, &name)?;
            println!("=== Candidate {} (poll {}) ===", candidate.name, poll_id);
            println!("Party: {}", candidate.party);
            println!("Votes: {}", candidate.votes);
            println!("Registered at position: {}", candidate.position);
        }
        Commands::GetResults { poll_id } => {
            let (poll, results) = voting_client.get_results(poll_id)?;
            println!("=== Poll {} results ===", poll_id);
            println!("Question: {}", poll.question);
            println!("Status: {}", results.status.as_str());
            println!();
            for tally in &results.tallies {
                println!(
                    "  {} ({}): {} votes ({:.1}%)",
                    tally.name,
                    tally.party,
                    tally.votes,
                    tally.share_bps as f64 / 100.0
                );
            }
            println!();
            println!("Total votes cast: {}", results.total_votes);
            if let Some(winner) = &results.winner {
                println!("Leading candidate: {}", winner);
            }
        }
        Commands::HasVoted { poll_id, voter } => {
            let voter_pubkey = match voter {
                Some(raw) => raw
                    .parse::<Pubkey>()
                    .map_err(|e| anyhow::anyhow!("invalid voter pubkey: {}", e))?,
                None => voting_client.payer_pubkey(),
            };
            if voting_client.has_voted(poll_id, voter_pubkey)? {
                println!("{} has voted in poll {}", voter_pubkey, poll_id);
            } else {
                println!("{} has not voted in poll {}", voter_pubkey, poll_id);
            }
        }
    }

    Ok(())
}
