use shared::{Error, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

/// Signing capability bound to a wallet, with a separate key doing the signing.
///
/// The wallet is the nominal owner of the accounts being closed; the fee
/// payer is the only key that ever signs. The wallet's own private key is
/// never involved.
pub struct DelegatedSigner {
    wallet: Pubkey,
    fee_payer: Keypair,
}

impl DelegatedSigner {
    pub fn new(wallet: Pubkey, fee_payer: Keypair) -> Self {
        Self { wallet, fee_payer }
    }

    /// Build a signer from a base58-encoded 64-byte secret key.
    pub fn from_base58_secret(wallet: Pubkey, secret: &str) -> Result<Self> {
        let bytes = bs58::decode(secret).into_vec().map_err(|e| {
            Error::Configuration(format!("Fee payer secret key is not valid base58: {}", e))
        })?;
        let fee_payer = Keypair::from_bytes(&bytes).map_err(|e| {
            Error::Configuration(format!("Fee payer secret key is not a valid keypair: {}", e))
        })?;
        Ok(Self::new(wallet, fee_payer))
    }

    pub fn wallet(&self) -> &Pubkey {
        &self.wallet
    }

    pub fn fee_payer_pubkey(&self) -> Pubkey {
        self.fee_payer.pubkey()
    }

    /// Apply the fee payer's signature to every transaction, in one call,
    /// order preserved. Other required signers are left unsigned.
    pub fn sign_all(&self, mut transactions: Vec<Transaction>) -> Result<Vec<Transaction>> {
        for transaction in &mut transactions {
            let recent_blockhash = transaction.message.recent_blockhash;
            transaction
                .try_partial_sign(&[&self.fee_payer], recent_blockhash)
                .map_err(|e| Error::Signing(format!("Failed to sign transaction: {}", e)))?;
        }
        Ok(transactions)
    }
}
