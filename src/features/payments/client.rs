//! Client helpers for the payments endpoints.

use crate::{
    app_lib::{AppError, get_json, post_json_empty, put_json_empty},
    features::payments::types::{PaymentInfo, PaymentSummary, WithdrawalRequest},
};

/// Fetches balances together with the payment history.
pub async fn get_payment_summary() -> Result<PaymentSummary, AppError> {
    get_json("/api/influencers/payment-summary/").await
}

pub async fn request_withdrawal(request: &WithdrawalRequest) -> Result<(), AppError> {
    post_json_empty("/api/influencers/payments/request-withdrawal/", request).await
}

/// Replaces the stored payout details after local validation.
pub async fn update_payment_info(info: &PaymentInfo) -> Result<(), AppError> {
    info.validate()?;
    put_json_empty("/api/influencers/payment-info/", info).await
}
