use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Informational message returned when a wallet has nothing to close
pub const NO_ACCOUNTS_MESSAGE: &str = "No zero-balance token accounts found to close.";

/// A token account as reported by the RPC node, with its parsed balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAccountRecord {
    pub pubkey: Pubkey,
    pub mint: String,
    pub owner: String,
    pub amount: u64,
    pub decimals: u8,
}

impl TokenAccountRecord {
    /// True when the account holds no tokens and is eligible for closing
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Error,
}

/// Per-transaction outcome reported back to the caller.
///
/// Serializes to the same shapes the endpoint has always returned:
/// `{"status":"success","txid":...}`, `{"status":"error","error":...}`,
/// or the single informational `{"status":"success","message":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionResult {
    pub fn success(txid: String) -> Self {
        Self {
            status: SubmissionStatus::Success,
            txid: Some(txid),
            error: None,
            message: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            status: SubmissionStatus::Error,
            txid: None,
            error: Some(error),
            message: None,
        }
    }

    pub fn nothing_to_close() -> Self {
        Self {
            status: SubmissionStatus::Success,
            txid: None,
            error: None,
            message: Some(NO_ACCOUNTS_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_result_serializes_with_txid_only() {
        let result = SubmissionResult::success("5wHu1qwD7q5ifaN5nwdcDqNFo53GJqa7nLp2BeeEpcHCusb4GzARz4GjgzsEHMkBMgCJMuKQyxhQrZJGzWqRhLux".to_string());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "success");
        assert!(value["txid"].is_string());
        assert!(value.get("error").is_none());
        assert!(value.get("message").is_none());
    }

    #[test]
    fn failure_result_serializes_with_error_only() {
        let result = SubmissionResult::failure("blockhash not found".to_string());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"status": "error", "error": "blockhash not found"})
        );
    }

    #[test]
    fn nothing_to_close_carries_the_informational_message() {
        let result = SubmissionResult::nothing_to_close();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"status": "success", "message": "No zero-balance token accounts found to close."})
        );
    }

    #[test]
    fn zero_balance_predicate() {
        let mut record = TokenAccountRecord {
            pubkey: Pubkey::new_unique(),
            mint: Pubkey::new_unique().to_string(),
            owner: Pubkey::new_unique().to_string(),
            amount: 0,
            decimals: 6,
        };
        assert!(record.is_empty());

        record.amount = 1;
        assert!(!record.is_empty());
    }
}
