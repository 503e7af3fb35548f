use crate::features::auth::types::UserProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Approved,
    Coupon,
    PaymentDetails,
    Share,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub title: &'static str,
    pub description: String,
    pub completed: bool,
}

/// Builds the four onboarding steps from the signed-in profile. Sharing is an
/// action the partner repeats, so it never counts as done.
pub fn steps(user: Option<&UserProfile>) -> Vec<Step> {
    let profile = user.and_then(|user| user.influencer_profile.as_ref());
    let code = user.and_then(UserProfile::reference_code);
    let has_payment_info = profile.is_some_and(|profile| profile.has_payment_info());

    vec![
        Step {
            kind: StepKind::Approved,
            title: "Account approved",
            description: "Your account is approved and you can start promoting.".to_string(),
            completed: profile.is_some_and(|profile| profile.is_approved()),
        },
        Step {
            kind: StepKind::Coupon,
            title: "Exclusive coupon",
            description: match code {
                Some(code) => format!("Your coupon is {code}."),
                None => "Your coupon will be generated automatically.".to_string(),
            },
            completed: code.is_some(),
        },
        Step {
            kind: StepKind::PaymentDetails,
            title: "Payment details",
            description: if has_payment_info {
                "Your payout details are set up.".to_string()
            } else {
                "Add your payout details to receive commissions.".to_string()
            },
            completed: has_payment_info,
        },
        Step {
            kind: StepKind::Share,
            title: "Share your link",
            description: "Post your link on social media and start earning.".to_string(),
            completed: false,
        },
    ]
}

/// Completed steps and the percentage they represent.
pub fn progress(steps: &[Step]) -> (usize, f64) {
    let done = steps.iter().filter(|step| step.completed).count();
    if steps.is_empty() {
        return (0, 0.0);
    }
    (done, done as f64 / steps.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::{StepKind, progress, steps};
    use crate::features::auth::{test_support::partner, types::InfluencerProfile};

    #[test]
    fn anonymous_visitor_has_nothing_done() {
        let steps = steps(None);
        assert_eq!(steps.len(), 4);
        assert_eq!(progress(&steps), (0, 0.0));
    }

    #[test]
    fn approved_partner_with_code_and_pix_is_three_quarters_done() {
        let mut user = partner();
        let profile: InfluencerProfile = serde_json::from_str(
            r#"{"id": 3, "status": "approved", "reference_code": "ANA10", "pix_key": "ana@pix.com"}"#,
        )
        .expect("profile");
        user.influencer_profile = Some(profile);

        let steps = steps(Some(&user));
        assert!(steps.iter().filter(|step| step.kind != StepKind::Share).all(|step| step.completed));
        assert_eq!(steps[1].description, "Your coupon is ANA10.");
        assert_eq!(progress(&steps), (3, 75.0));
    }

    #[test]
    fn pending_partner_without_details() {
        let mut user = partner();
        user.influencer_profile = Some(
            serde_json::from_str(r#"{"id": 3, "status": "pending"}"#).expect("profile"),
        );

        let steps = steps(Some(&user));
        assert!(!steps[0].completed);
        assert!(!steps[1].completed);
        assert!(!steps[2].completed);
        assert_eq!(progress(&steps), (0, 0.0));
        assert_eq!(progress(&[]), (0, 0.0));
    }
}
