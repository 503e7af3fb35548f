//! Partner sign-in. A successful login is followed by the identity check so the
//! store already holds the profile when the guard runs on the return page.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{
    client,
    redirect::return_target,
    session::SessionStore,
    state::use_auth,
    types::LoginRequest,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    components::Redirect,
    hooks::{use_navigate, use_query_map},
};
use tracing::info;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let target = Memo::new(move |_| query.with(|query| return_target(query.get("next").as_deref())));
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move {
            client::login(&request).await?;
            client::fetch_me().await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    info!(partner = user.is_influencer, "signed in");
                    auth.login(user);
                    navigate(
                        &target.get_untracked(),
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    let signed_in = move || {
        auth.session
            .with(|session| session.user.as_ref().is_some_and(|user| user.is_influencer))
            && login_action.value().with(Option::is_none)
    };

    view! {
        <Show when=signed_in>
            <Redirect path=target.get_untracked() />
        </Show>
        <div class="flex min-h-screen items-center justify-center bg-gray-50 px-4">
            <form
                class="w-full max-w-sm space-y-5 rounded-xl border border-gray-200 bg-white p-8 shadow-sm"
                on:submit=on_submit
            >
                <div class="space-y-1 text-center">
                    <h1 class="text-2xl font-bold text-gray-900">"MoodVerse Partners"</h1>
                    <p class="text-sm text-gray-500">"Sign in to your partner account"</p>
                </div>
                <div>
                    <label class="mb-2 block text-sm font-medium text-gray-900" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-gray-900 focus:ring-gray-900"
                        autocomplete="email"
                        placeholder="you@example.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="mb-2 block text-sm font-medium text-gray-900" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-gray-900 focus:ring-gray-900"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
                }}
            </form>
        </div>
    }
}
