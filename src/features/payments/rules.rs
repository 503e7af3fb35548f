//! Payout rules: details prefilled from the profile, masked display, form
//! validation, and withdrawal eligibility. A withdrawal always requests the
//! whole available balance.

use crate::{
    app_lib::AppError,
    features::{
        auth::types::{InfluencerProfile, is_present},
        payments::types::{BankAccountType, PaymentInfo, PaymentMethod, PaymentSummary, WithdrawalRequest},
    },
};

pub const DEFAULT_MINIMUM_WITHDRAWAL: f64 = 50.0;
const MASK: &str = "••••••";
const WITHDRAWAL_NOTE: &str = "Requested through the partners portal";

impl PaymentInfo {
    /// Prefills the form from the profile. PIX wins when both kinds of details
    /// exist; an empty profile starts on PIX.
    pub fn from_profile(profile: Option<&InfluencerProfile>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };
        let text = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();

        let payment_method = if is_present(profile.pix_key.as_deref()) {
            PaymentMethod::Pix
        } else if is_present(profile.bank_account.as_deref()) {
            PaymentMethod::BankTransfer
        } else {
            PaymentMethod::Pix
        };

        Self {
            payment_method,
            pix_key: text(&profile.pix_key),
            bank_name: text(&profile.bank_name),
            bank_agency: text(&profile.bank_agency),
            bank_account: text(&profile.bank_account),
            bank_account_type: profile
                .bank_account_type
                .as_deref()
                .map(BankAccountType::parse)
                .unwrap_or_default(),
        }
    }

    /// True when the selected method has the details it needs.
    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        match self.payment_method {
            PaymentMethod::Pix if self.pix_key.trim().is_empty() => {
                Err(AppError::Validation("PIX key is required.".to_string()))
            }
            PaymentMethod::BankTransfer
                if [&self.bank_name, &self.bank_agency, &self.bank_account]
                    .iter()
                    .any(|field| field.trim().is_empty()) =>
            {
                Err(AppError::Validation(
                    "Bank, agency, and account are required.".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// `abc••••••xyz`. Keys too short to keep both ends are fully masked.
pub fn mask_pix_key(key: &str) -> String {
    let chars: Vec<char> = key.trim().chars().collect();
    match chars.len() {
        0 => "—".to_string(),
        len if len <= 6 => MASK.to_string(),
        len => {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[len - 3..].iter().collect();
            format!("{head}{MASK}{tail}")
        }
    }
}

/// `••••1234`. Accounts of four characters or fewer are fully masked.
pub fn mask_account(account: &str) -> String {
    let chars: Vec<char> = account.trim().chars().collect();
    match chars.len() {
        0 => "—".to_string(),
        len if len <= 4 => "••••".to_string(),
        len => {
            let tail: String = chars[len - 4..].iter().collect();
            format!("••••{tail}")
        }
    }
}

/// Where the withdrawal button stands for a summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Withdrawal {
    Available { amount: f64 },
    BelowMinimum { minimum: f64 },
    /// A withdrawal is already pending or being processed.
    InProgress,
}

/// Minimum balance for a withdrawal; missing or non-positive values use 50.
pub fn minimum_withdrawal(summary: &PaymentSummary) -> f64 {
    summary
        .minimum_withdrawal
        .filter(|minimum| minimum.is_finite() && *minimum > 0.0)
        .unwrap_or(DEFAULT_MINIMUM_WITHDRAWAL)
}

pub fn withdrawal_state(summary: &PaymentSummary) -> Withdrawal {
    if summary.pending_withdrawal > 0.0 || summary.processing > 0.0 {
        return Withdrawal::InProgress;
    }
    let minimum = minimum_withdrawal(summary);
    if !summary.can_withdraw || summary.available_balance < minimum {
        return Withdrawal::BelowMinimum { minimum };
    }
    Withdrawal::Available {
        amount: summary.available_balance,
    }
}

/// Builds the request for the full available balance, or explains why none can
/// be sent.
pub fn plan_withdrawal(
    summary: &PaymentSummary,
    info: &PaymentInfo,
) -> Result<WithdrawalRequest, AppError> {
    let amount = match withdrawal_state(summary) {
        Withdrawal::Available { amount } => amount,
        Withdrawal::BelowMinimum { minimum } => {
            return Err(AppError::Validation(format!(
                "Minimum balance for withdrawal: R$ {minimum:.2}"
            )));
        }
        Withdrawal::InProgress => {
            return Err(AppError::Validation(
                "A withdrawal is already in progress.".to_string(),
            ));
        }
    };
    if !info.is_configured() {
        return Err(AppError::Validation(
            "Configure your payment details before withdrawing.".to_string(),
        ));
    }

    Ok(WithdrawalRequest {
        amount,
        payment_method: info.payment_method,
        notes: Some(WITHDRAWAL_NOTE.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_MINIMUM_WITHDRAWAL, Withdrawal, mask_account, mask_pix_key, minimum_withdrawal,
        plan_withdrawal, withdrawal_state,
    };
    use crate::{
        app_lib::AppError,
        features::{
            auth::types::InfluencerProfile,
            payments::types::{BankAccountType, PaymentInfo, PaymentMethod, PaymentSummary},
        },
    };

    fn profile() -> InfluencerProfile {
        serde_json::from_str(r#"{"id": 3, "status": "approved"}"#).expect("profile")
    }

    fn summary(balance: f64) -> PaymentSummary {
        PaymentSummary {
            available_balance: balance,
            can_withdraw: true,
            ..PaymentSummary::default()
        }
    }

    fn pix() -> PaymentInfo {
        PaymentInfo {
            pix_key: "ana@pix.com".to_string(),
            ..PaymentInfo::default()
        }
    }

    #[test]
    fn from_profile_prefers_pix() {
        let mut profile = profile();
        profile.pix_key = Some("ana@pix.com".to_string());
        profile.bank_account = Some("123456".to_string());
        let info = PaymentInfo::from_profile(Some(&profile));
        assert_eq!(info.payment_method, PaymentMethod::Pix);
        assert_eq!(info.bank_account, "123456");
    }

    #[test]
    fn from_profile_falls_back_to_bank_transfer() {
        let mut profile = profile();
        profile.pix_key = Some("  ".to_string());
        profile.bank_account = Some("123456".to_string());
        profile.bank_account_type = Some("savings".to_string());
        let info = PaymentInfo::from_profile(Some(&profile));
        assert_eq!(info.payment_method, PaymentMethod::BankTransfer);
        assert_eq!(info.bank_account_type, BankAccountType::Savings);
    }

    #[test]
    fn from_empty_profile_starts_on_pix() {
        assert_eq!(PaymentInfo::from_profile(None), PaymentInfo::default());
        let info = PaymentInfo::from_profile(Some(&profile()));
        assert_eq!(info.payment_method, PaymentMethod::Pix);
        assert!(!info.is_configured());
    }

    #[test]
    fn validation_checks_the_selected_method() {
        assert!(pix().validate().is_ok());

        let bank = PaymentInfo {
            payment_method: PaymentMethod::BankTransfer,
            bank_name: "Banco Azul".to_string(),
            bank_agency: "0001".to_string(),
            ..PaymentInfo::default()
        };
        assert!(matches!(bank.validate(), Err(AppError::Validation(_))));

        let bank = PaymentInfo {
            bank_account: "123456-7".to_string(),
            ..bank
        };
        assert!(bank.validate().is_ok());
    }

    #[test]
    fn pix_keys_are_masked() {
        assert_eq!(mask_pix_key("ana.souza@pix.com"), "ana••••••com");
        assert_eq!(mask_pix_key("1234567"), "123••••••567");
        assert_eq!(mask_pix_key("abc"), "••••••");
        assert_eq!(mask_pix_key(""), "—");
    }

    #[test]
    fn accounts_are_masked() {
        assert_eq!(mask_account("123456-7"), "••••56-7");
        assert_eq!(mask_account("1234"), "••••");
        assert_eq!(mask_account(" "), "—");
    }

    #[test]
    fn minimum_defaults_to_fifty() {
        assert_eq!(minimum_withdrawal(&summary(0.0)), DEFAULT_MINIMUM_WITHDRAWAL);
        let custom = PaymentSummary {
            minimum_withdrawal: Some(100.0),
            ..summary(0.0)
        };
        assert_eq!(minimum_withdrawal(&custom), 100.0);
        let zero = PaymentSummary {
            minimum_withdrawal: Some(0.0),
            ..summary(0.0)
        };
        assert_eq!(minimum_withdrawal(&zero), DEFAULT_MINIMUM_WITHDRAWAL);
    }

    #[test]
    fn withdrawal_state_follows_balance_and_progress() {
        assert_eq!(
            withdrawal_state(&summary(49.99)),
            Withdrawal::BelowMinimum { minimum: 50.0 }
        );
        assert_eq!(
            withdrawal_state(&summary(50.0)),
            Withdrawal::Available { amount: 50.0 }
        );

        let blocked = PaymentSummary {
            can_withdraw: false,
            ..summary(500.0)
        };
        assert_eq!(
            withdrawal_state(&blocked),
            Withdrawal::BelowMinimum { minimum: 50.0 }
        );

        let pending = PaymentSummary {
            pending_withdrawal: 80.0,
            ..summary(500.0)
        };
        assert_eq!(withdrawal_state(&pending), Withdrawal::InProgress);
    }

    #[test]
    fn plan_requests_the_full_balance() {
        let request = plan_withdrawal(&summary(120.5), &pix()).expect("request");
        assert_eq!(request.amount, 120.5);
        assert_eq!(request.payment_method, PaymentMethod::Pix);
        assert!(request.notes.is_some());
    }

    #[test]
    fn plan_rejects_low_balance_and_missing_details() {
        let err = plan_withdrawal(&summary(10.0), &pix()).expect_err("below minimum");
        assert_eq!(
            err,
            AppError::Validation("Minimum balance for withdrawal: R$ 50.00".to_string())
        );

        let err = plan_withdrawal(&summary(100.0), &PaymentInfo::default()).expect_err("no details");
        assert!(matches!(err, AppError::Validation(_)));
    }
}
