use anyhow::Context;
use shared::{Error, Result};
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_client::rpc_response::RpcKeyedAccount;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::closer::LedgerConnection;
use crate::types::TokenAccountRecord;

/// Public RPC endpoint for a named cluster (devnet, testnet, mainnet-beta)
pub fn cluster_api_url(cluster: &str) -> String {
    format!("https://api.{}.solana.com", cluster)
}

/// Solana client wrapper for blockchain interactions
pub struct SolanaClient {
    client: RpcClient,
}

impl SolanaClient {
    pub fn new(rpc_url: String) -> Self {
        info!("Initializing Solana client with RPC: {}", rpc_url);
        let client = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed());
        Self { client }
    }

    /// Validate a Solana wallet address format
    pub fn validate_address(&self, address: &str) -> Result<Pubkey> {
        Pubkey::from_str(address).map_err(|e| {
            warn!("Invalid wallet address format: {} - {}", address, e);
            Error::InvalidWalletAddress(format!("Invalid Solana address format: {}", e))
        })
    }

    /// Parse a token account from the RPC's JSON-parsed response
    fn parse_token_account(
        owner: &Pubkey,
        keyed: &RpcKeyedAccount,
    ) -> anyhow::Result<TokenAccountRecord> {
        use solana_account_decoder::UiAccountData;

        let pubkey =
            Pubkey::from_str(&keyed.pubkey).context("Invalid token account pubkey")?;

        match &keyed.account.data {
            UiAccountData::Json(parsed_account) => {
                let info = parsed_account
                    .parsed
                    .get("info")
                    .ok_or_else(|| anyhow::anyhow!("Missing info field"))?;

                let mint = info
                    .get("mint")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| anyhow::anyhow!("Missing mint field"))?
                    .to_string();

                let token_amount = info
                    .get("tokenAmount")
                    .ok_or_else(|| anyhow::anyhow!("Missing tokenAmount field"))?;

                let amount_str = token_amount
                    .get("amount")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| anyhow::anyhow!("Missing amount field"))?;

                let amount = amount_str
                    .parse::<u64>()
                    .context("Failed to parse amount")?;

                let decimals = token_amount
                    .get("decimals")
                    .and_then(|v| v.as_u64())
                    .ok_or_else(|| anyhow::anyhow!("Missing decimals field"))?
                    as u8;

                Ok(TokenAccountRecord {
                    pubkey,
                    mint,
                    owner: owner.to_string(),
                    amount,
                    decimals,
                })
            }
            _ => Err(anyhow::anyhow!("Expected JSON parsed account data")),
        }
    }
}

impl LedgerConnection for SolanaClient {
    fn token_accounts_by_owner(&self, owner: &Pubkey) -> Result<Vec<TokenAccountRecord>> {
        debug!("Fetching token accounts for owner: {}", owner);

        let accounts = self
            .client
            .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(spl_token::id()))
            .map_err(|e| Error::SolanaRpc(format!("Failed to fetch token accounts: {}", e)))?;

        let mut records = Vec::new();
        for account in &accounts {
            match Self::parse_token_account(owner, account) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Failed to parse token account: {}", e);
                    continue;
                }
            }
        }

        debug!("Retrieved {} token accounts", records.len());
        Ok(records)
    }

    fn latest_blockhash(&self) -> Result<Hash> {
        self.client
            .get_latest_blockhash()
            .map_err(|e| Error::SolanaRpc(format!("Failed to fetch latest blockhash: {}", e)))
    }

    fn submit_transaction(&self, transaction: &Transaction) -> Result<Signature> {
        self.client
            .send_transaction(transaction)
            .map_err(|e| Error::SolanaRpc(format!("Failed to send transaction: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_account_decoder::parse_account_data::ParsedAccount;
    use solana_account_decoder::{UiAccount, UiAccountData};
    use solana_client::rpc_response::RpcKeyedAccount;

    fn test_client() -> SolanaClient {
        SolanaClient::new(cluster_api_url("devnet"))
    }

    fn keyed_account(pubkey: &Pubkey, mint: &Pubkey, amount: &str, decimals: u8) -> RpcKeyedAccount {
        RpcKeyedAccount {
            pubkey: pubkey.to_string(),
            account: UiAccount {
                lamports: 2_039_280,
                data: UiAccountData::Json(ParsedAccount {
                    program: "spl-token".to_string(),
                    parsed: serde_json::json!({
                        "type": "account",
                        "info": {
                            "mint": mint.to_string(),
                            "tokenAmount": {
                                "amount": amount,
                                "decimals": decimals,
                                "uiAmount": 0.0,
                                "uiAmountString": "0",
                            },
                        },
                    }),
                    space: 165,
                }),
                owner: spl_token::id().to_string(),
                executable: false,
                rent_epoch: 0,
                space: Some(165),
            },
        }
    }

    #[test]
    fn validates_well_formed_address() {
        let client = test_client();
        assert!(client
            .validate_address("11111111111111111111111111111111")
            .is_ok());
    }

    #[test]
    fn rejects_malformed_address() {
        let client = test_client();
        let result = client.validate_address("not-an-address");
        assert!(matches!(result, Err(Error::InvalidWalletAddress(_))));
    }

    #[test]
    fn rejects_empty_address() {
        let client = test_client();
        assert!(client.validate_address("").is_err());
    }

    #[test]
    fn cluster_urls() {
        assert_eq!(cluster_api_url("devnet"), "https://api.devnet.solana.com");
        assert_eq!(cluster_api_url("testnet"), "https://api.testnet.solana.com");
        assert_eq!(
            cluster_api_url("mainnet-beta"),
            "https://api.mainnet-beta.solana.com"
        );
    }

    #[test]
    fn parses_json_token_account() {
        let owner = Pubkey::new_unique();
        let account_pubkey = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let keyed = keyed_account(&account_pubkey, &mint, "0", 6);

        let record = SolanaClient::parse_token_account(&owner, &keyed).unwrap();
        assert_eq!(record.pubkey, account_pubkey);
        assert_eq!(record.mint, mint.to_string());
        assert_eq!(record.owner, owner.to_string());
        assert_eq!(record.amount, 0);
        assert_eq!(record.decimals, 6);
        assert!(record.is_empty());
    }

    #[test]
    fn parses_funded_token_account() {
        let owner = Pubkey::new_unique();
        let keyed = keyed_account(&Pubkey::new_unique(), &Pubkey::new_unique(), "1500000", 6);

        let record = SolanaClient::parse_token_account(&owner, &keyed).unwrap();
        assert_eq!(record.amount, 1_500_000);
        assert!(!record.is_empty());
    }

    #[test]
    fn rejects_binary_account_data() {
        let owner = Pubkey::new_unique();
        let keyed = RpcKeyedAccount {
            pubkey: Pubkey::new_unique().to_string(),
            account: UiAccount {
                lamports: 0,
                data: UiAccountData::LegacyBinary("AAAA".to_string()),
                owner: spl_token::id().to_string(),
                executable: false,
                rent_epoch: 0,
                space: None,
            },
        };

        assert!(SolanaClient::parse_token_account(&owner, &keyed).is_err());
    }
}
