use crate::components::{AccessDenied, Spinner};
use crate::features::auth::{
    client::ApiIdentity,
    guard::{Access, SessionGuard, decide},
    redirect::requested_location,
    state::use_auth,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, components::Redirect, hooks::use_location};
use std::rc::Rc;

/// Gates partner-only routes. UX-only guard; the API enforces access itself.
#[component]
pub fn RequirePartner(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let guard = StoredValue::new_local(SessionGuard::new(auth, Rc::new(ApiIdentity)));

    Effect::new(move |_| {
        auth.session.track();
        if let Some(task) = guard.try_with_value(SessionGuard::activate).flatten() {
            spawn_local(task);
        }
    });

    on_cleanup(move || {
        guard.try_with_value(SessionGuard::deactivate);
    });

    // Re-renders only when the decision changes; Granted is never rebuilt.
    let access = Memo::new(move |_| {
        let requested = requested_location(&location.pathname.get(), &location.search.get());
        auth.session.with(|session| decide(session, &requested))
    });

    move || match access.get() {
        Access::Loading => {
            view! {
                <div class="flex justify-center items-center min-h-screen">
                    <Spinner />
                </div>
            }
                .into_any()
        }
        Access::Login { path } => {
            view! {
                <Redirect
                    path=path
                    options=NavigateOptions {
                        replace: true,
                        ..Default::default()
                    }
                />
            }
                .into_any()
        }
        Access::Denied => view! { <AccessDenied /> }.into_any(),
        Access::Granted => children().into_any(),
    }
}
