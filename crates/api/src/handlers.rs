use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use blockchain::{close_empty_accounts, DelegatedSigner, SubmissionResult};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CloseAccountsParams {
    #[serde(rename = "walletPublicKey")]
    pub wallet_public_key: Option<String>,
}

/// GET /close-accounts
///
/// Closes every zero-balance SPL token account owned by the queried wallet,
/// fee paid and signed by the configured fee payer. Responds with one result
/// entry per submitted transaction.
pub async fn close_accounts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CloseAccountsParams>,
) -> ApiResult<Json<Vec<SubmissionResult>>> {
    // Validation happens before any network call.
    let address = params
        .wallet_public_key
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingWalletParam)?;

    let wallet = state
        .client
        .validate_address(&address)
        .map_err(|_| ApiError::InvalidWalletFormat)?;

    let secret = state
        .config
        .solana
        .fee_payer_secret_key
        .as_deref()
        .ok_or_else(|| ApiError::Configuration("FEE_PAYER_SECRET_KEY is not set".to_string()))?;

    let signer = DelegatedSigner::from_base58_secret(wallet, secret)?;
    let fee_payer = signer.fee_payer_pubkey();

    info!("Processing close-accounts request for wallet {}", wallet);

    let results = close_empty_accounts(state.client.as_ref(), &signer, &fee_payer).await?;
    Ok(Json(results))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "token-account-sweeper",
    })
}
