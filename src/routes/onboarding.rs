use crate::{
    app_lib::config::AppConfig,
    components::CopyButton,
    features::{
        auth::state::use_auth,
        onboarding::steps::{Step, StepKind, progress, steps},
        referrals::referral_link,
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let auth = use_auth();
    let store_url = AppConfig::load().store_url;
    let checklist = Memo::new(move |_| auth.session.with(|session| steps(session.user.as_ref())));
    let link = Signal::derive(move || {
        auth.session.with(|session| {
            session
                .user
                .as_ref()
                .and_then(|user| user.reference_code())
                .and_then(|code| referral_link(&store_url, code).ok())
                .unwrap_or_default()
        })
    });

    view! {
        <div class="mx-auto max-w-4xl space-y-8">
            <div class="space-y-2 text-center">
                <h1 class="text-3xl font-bold text-gray-900">"Welcome to MoodVerse Partners!"</h1>
                <p class="mx-auto max-w-xl text-gray-600">
                    "Follow the steps below to start earning commissions."
                </p>
            </div>
            {move || {
                let (done, percent) = progress(&checklist.get());
                let total = checklist.with(Vec::len);
                view! {
                    <div class="rounded-xl border bg-white p-6 shadow-sm">
                        <div class="mb-3 flex items-center justify-between text-sm font-medium">
                            <span class="text-gray-600">"Your progress"</span>
                            <span class="text-purple-600">{format!("{done}/{total} steps complete")}</span>
                        </div>
                        <div class="h-3 w-full rounded-full bg-gray-100">
                            <div
                                class="h-3 rounded-full bg-purple-600 transition-all"
                                style=format!("width: {percent:.0}%")
                            ></div>
                        </div>
                    </div>
                }
            }}
            <div class="space-y-4">
                {move || {
                    checklist
                        .get()
                        .into_iter()
                        .map(|step| step_card(step, link))
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn step_card(step: Step, link: Signal<String>) -> impl IntoView {
    let action = match step.kind {
        StepKind::PaymentDetails => Some(
            view! {
                <A
                    href=paths::PAYMENTS
                    {..}
                    class="text-sm font-medium text-purple-700 hover:underline"
                >
                    {if step.completed { "View payments" } else { "Set up" }}
                </A>
            }
                .into_any(),
        ),
        StepKind::Share => Some(view! { <CopyButton text=link label="Copy link" /> }.into_any()),
        StepKind::Approved | StepKind::Coupon => None,
    };

    view! {
        <div
            class="flex items-center justify-between rounded-xl border bg-white p-5"
            class:border-emerald-300=step.completed
        >
            <div class="flex items-start gap-4">
                <span
                    class="mt-1 inline-flex h-6 w-6 items-center justify-center rounded-full text-xs font-bold"
                    class:bg-emerald-500=step.completed
                    class:text-white=step.completed
                    class:bg-gray-100=!step.completed
                >
                    {if step.completed { "✓" } else { "" }}
                </span>
                <div>
                    <p class="font-semibold text-gray-900">{step.title}</p>
                    <p class="text-sm text-gray-500">{step.description}</p>
                </div>
            </div>
            {action}
        </div>
    }
}
