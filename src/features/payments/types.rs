use crate::app_lib::payload::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub available_balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_earned: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_withdrawal: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_paid: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub processing: f64,
    pub minimum_withdrawal: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub can_withdraw: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_history: Vec<Payment>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    pub status: String,
    pub status_display: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
    pub created_at: String,
    pub paid_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
}

impl Payment {
    pub fn status_label(&self) -> &str {
        self.status_display
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(&self.status)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Pix,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::BankTransfer => "Bank transfer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountType {
    #[default]
    Checking,
    Savings,
}

impl BankAccountType {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "savings" => BankAccountType::Savings,
            _ => BankAccountType::Checking,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BankAccountType::Checking => "Checking",
            BankAccountType::Savings => "Savings",
        }
    }
}

/// Payout details sent to `PUT /api/influencers/payment-info/`.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct PaymentInfo {
    pub payment_method: PaymentMethod,
    pub pix_key: String,
    pub bank_name: String,
    pub bank_agency: String,
    pub bank_account: String,
    pub bank_account_type: BankAccountType,
}

impl fmt::Debug for PaymentInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PaymentInfo")
            .field("payment_method", &self.payment_method)
            .field("pix_key", &"<redacted>")
            .field("bank_name", &self.bank_name)
            .field("bank_agency", &"<redacted>")
            .field("bank_account", &"<redacted>")
            .field("bank_account_type", &self.bank_account_type)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WithdrawalRequest {
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
