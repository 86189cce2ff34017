pub mod chunk;
pub mod client;
pub mod closer;
pub mod signer;
pub mod types;

pub use chunk::{chunk, DEFAULT_CHUNK_SIZE};
pub use client::{cluster_api_url, SolanaClient};
pub use closer::{build_close_transactions, close_empty_accounts, LedgerConnection};
pub use signer::DelegatedSigner;
pub use types::{SubmissionResult, SubmissionStatus, TokenAccountRecord, NO_ACCOUNTS_MESSAGE};
