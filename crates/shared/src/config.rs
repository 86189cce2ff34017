use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub solana: SolanaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolanaConfig {
    /// Cluster name used to derive the public RPC endpoint (devnet, testnet, mainnet-beta)
    pub cluster: String,
    /// Explicit RPC URL; overrides the cluster-derived endpoint when set
    pub rpc_url: Option<String>,
    /// Base58-encoded fee payer keypair. Absence is a per-request error,
    /// not a startup failure.
    pub fee_payer_secret_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            solana: SolanaConfig {
                cluster: env::var("SOLANA_CLUSTER").unwrap_or_else(|_| "devnet".to_string()),
                rpc_url: env::var("SOLANA_RPC_URL").ok(),
                fee_payer_secret_key: env::var("FEE_PAYER_SECRET_KEY").ok(),
            },
        })
    }
}
