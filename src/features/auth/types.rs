//! Request and response types for auth-related API calls. The login payload
//! carries the plain password, so its `Debug` output is redacted.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Profile returned by the identity check. Only `is_influencer` gates access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub is_influencer: bool,
    pub influencer_profile: Option<InfluencerProfile>,
}

impl UserProfile {
    /// Name shown in greetings; falls back to the email address.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }

    pub fn reference_code(&self) -> Option<&str> {
        self.influencer_profile
            .as_ref()
            .map(|profile| profile.reference_code.as_str())
            .filter(|code| !code.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfluencerProfile {
    pub id: i64,
    pub status: String,
    #[serde(default)]
    pub reference_code: String,
    pub custom_slug: Option<String>,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub current_month_points: i64,
    pub current_level: Option<PartnerLevel>,
    #[serde(default)]
    pub product_commissions: Vec<ProductCommission>,
    #[serde(default)]
    pub total_commission: f64,
    #[serde(default)]
    pub pending_commission: f64,
    pub instagram_handle: Option<String>,
    pub tiktok_handle: Option<String>,
    pub youtube_channel: Option<String>,
    pub bio: Option<String>,
    pub pix_key: Option<String>,
    pub bank_name: Option<String>,
    pub bank_agency: Option<String>,
    pub bank_account: Option<String>,
    pub bank_account_type: Option<String>,
    pub approved_at: Option<String>,
}

impl InfluencerProfile {
    pub fn is_approved(&self) -> bool {
        self.status == "approved"
    }

    pub fn has_payment_info(&self) -> bool {
        is_present(self.pix_key.as_deref()) || is_present(self.bank_account.as_deref())
    }

    pub fn has_social_media(&self) -> bool {
        is_present(self.instagram_handle.as_deref())
            || is_present(self.tiktok_handle.as_deref())
            || is_present(self.youtube_channel.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartnerLevel {
    pub id: i64,
    pub name: String,
    pub level_number: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCommission {
    pub product_type: String,
    pub commission_amount: f64,
}

pub(crate) fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{LoginRequest, UserProfile};

    #[test]
    fn minimal_identity_payload_parses() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id": 7, "email": "ana@moodverse.com.br", "is_influencer": true}"#,
        )
        .expect("minimal profile");
        assert_eq!(user.id, 7);
        assert!(user.is_influencer);
        assert!(user.influencer_profile.is_none());
        assert_eq!(user.display_name(), "ana@moodverse.com.br");
    }

    #[test]
    fn full_identity_payload_parses() {
        let user: UserProfile = serde_json::from_str(
            r#"{
                "id": 7,
                "email": "ana@moodverse.com.br",
                "full_name": "Ana Souza",
                "is_influencer": true,
                "influencer_profile": {
                    "id": 3,
                    "status": "approved",
                    "reference_code": "ANA10",
                    "total_points": 120,
                    "current_month_points": 20,
                    "current_level": {"id": 1, "name": "Bronze", "level_number": 1},
                    "product_commissions": [
                        {"product_type": "camiseta", "commission_amount": 7.5}
                    ],
                    "total_commission": 310.4,
                    "pending_commission": 42.0,
                    "instagram_handle": "@ana",
                    "pix_key": "ana@pix.com"
                }
            }"#,
        )
        .expect("full profile");

        let profile = user.influencer_profile.as_ref().expect("influencer profile");
        assert_eq!(user.display_name(), "Ana Souza");
        assert_eq!(user.reference_code(), Some("ANA10"));
        assert!(profile.is_approved());
        assert!(profile.has_payment_info());
        assert!(profile.has_social_media());
        assert_eq!(profile.product_commissions.len(), 1);
    }

    #[test]
    fn identity_payload_without_flag_is_rejected() {
        let result = serde_json::from_str::<UserProfile>(r#"{"id": 7, "email": "a@b.c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn blank_name_falls_back_to_email() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id": 1, "email": "x@y.z", "full_name": "  ", "is_influencer": false}"#,
        )
        .expect("profile");
        assert_eq!(user.display_name(), "x@y.z");
        assert_eq!(user.reference_code(), None);
    }

    #[test]
    fn login_request_debug_redacts_password() {
        let request = LoginRequest {
            email: "ana@moodverse.com.br".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
