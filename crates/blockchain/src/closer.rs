use shared::{Error, Result};
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use tracing::{debug, info, warn};

use crate::chunk::{chunk, DEFAULT_CHUNK_SIZE};
use crate::signer::DelegatedSigner;
use crate::types::{SubmissionResult, TokenAccountRecord};

/// Ledger operations the batch closer depends on.
pub trait LedgerConnection {
    /// All token accounts owned by `owner`, scoped to the SPL token program.
    fn token_accounts_by_owner(&self, owner: &Pubkey) -> Result<Vec<TokenAccountRecord>>;

    fn latest_blockhash(&self) -> Result<Hash>;

    fn submit_transaction(&self, transaction: &Transaction) -> Result<Signature>;
}

/// Close every zero-balance token account owned by the signer's wallet.
///
/// Accounts are batched into transactions of at most [`DEFAULT_CHUNK_SIZE`]
/// close instructions. The blockhash is fetched once and shared by every
/// transaction in the call; submissions that outlive its validity window are
/// rejected by the cluster. A failed submission is recorded in its own result
/// entry and does not stop the remaining transactions.
pub async fn close_empty_accounts<C: LedgerConnection>(
    connection: &C,
    signer: &DelegatedSigner,
    fee_payer: &Pubkey,
) -> Result<Vec<SubmissionResult>> {
    let accounts = connection.token_accounts_by_owner(signer.wallet())?;
    let empty_accounts: Vec<TokenAccountRecord> =
        accounts.into_iter().filter(|a| a.is_empty()).collect();

    if empty_accounts.is_empty() {
        info!(
            "No zero-balance token accounts for wallet {}",
            signer.wallet()
        );
        return Ok(vec![SubmissionResult::nothing_to_close()]);
    }

    info!(
        "Closing {} zero-balance token accounts for wallet {}",
        empty_accounts.len(),
        signer.wallet()
    );

    let recent_blockhash = connection.latest_blockhash()?;

    let transactions =
        build_close_transactions(&empty_accounts, signer.wallet(), fee_payer, recent_blockhash)?;
    let signed = signer.sign_all(transactions)?;

    let mut results = Vec::with_capacity(signed.len());
    for transaction in &signed {
        match connection.submit_transaction(transaction) {
            Ok(signature) => {
                debug!("Submitted close transaction: {}", signature);
                results.push(SubmissionResult::success(signature.to_string()));
            }
            Err(e) => {
                warn!("Close transaction failed: {}", e);
                results.push(SubmissionResult::failure(e.to_string()));
            }
        }
    }

    Ok(results)
}

/// Build one unsigned transaction per chunk of accounts, each instruction
/// closing one account with the wallet as both authority and rent destination.
pub fn build_close_transactions(
    accounts: &[TokenAccountRecord],
    wallet: &Pubkey,
    fee_payer: &Pubkey,
    recent_blockhash: Hash,
) -> Result<Vec<Transaction>> {
    chunk(accounts, DEFAULT_CHUNK_SIZE)
        .into_iter()
        .map(|batch| {
            let instructions = batch
                .iter()
                .map(|account| {
                    spl_token::instruction::close_account(
                        &spl_token::id(),
                        &account.pubkey,
                        wallet,
                        wallet,
                        &[],
                    )
                    .map_err(|e| {
                        Error::Internal(format!("Failed to build close instruction: {}", e))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let mut transaction = Transaction::new_with_payer(&instructions, Some(fee_payer));
            transaction.message.recent_blockhash = recent_blockhash;
            Ok(transaction)
        })
        .collect()
}
