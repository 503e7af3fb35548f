use crate::{
    components::{Alert, AlertKind, Spinner},
    features::{
        auth::state::use_auth,
        ranking::{
            client,
            types::{Leaderboard, LeaderboardEntry, LeaderboardPeriod},
        },
    },
};
use leptos::prelude::*;

#[component]
pub fn RankingPage() -> impl IntoView {
    let auth = use_auth();
    let (period, set_period) = signal(LeaderboardPeriod::default());
    let board = LocalResource::new(move || {
        let period = period.get();
        async move { client::get_leaderboard(period).await }
    });
    let influencer_id = Signal::derive(move || {
        auth.session.with(|session| {
            session
                .user
                .as_ref()
                .and_then(|user| user.influencer_profile.as_ref())
                .map(|profile| profile.id)
        })
    });

    let tabs = LeaderboardPeriod::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    type="button"
                    class="rounded-lg px-4 py-2 text-sm font-medium"
                    class:bg-gray-900=move || period.get() == option
                    class:text-white=move || period.get() == option
                    class:bg-gray-100=move || period.get() != option
                    on:click=move |_| set_period.set(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900">"Ranking"</h1>
                <p class="text-sm text-gray-500">"See where you stand among partners"</p>
            </div>
            <div class="flex gap-2">{tabs}</div>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match board.get() {
                    Some(Ok(board)) => ranking_body(board, influencer_id.get()).into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

fn ranking_body(board: Leaderboard, influencer_id: Option<i64>) -> impl IntoView {
    if board.leaderboard.is_empty() {
        return view! {
            <p class="p-12 text-center text-gray-500">"No partners in the ranking yet."</p>
        }
            .into_any();
    }

    let own = board.entry_for(influencer_id).map(|entry| {
        view! {
            <div class="flex items-center justify-between rounded-xl bg-purple-600 p-6 text-white">
                <div>
                    <p class="text-sm text-purple-200">"Your position"</p>
                    <p class="text-3xl font-bold">{format!("#{}", entry.position)}</p>
                    <p class="text-sm text-purple-200">{format!("{} points", entry.points)}</p>
                </div>
                <div class="text-right">
                    <p class="font-medium">{entry.level.clone()}</p>
                    {entry.is_top_ten().then_some(view! { <p class="text-sm text-purple-200">"Top 10!"</p> })}
                </div>
            </div>
        }
    });

    let podium = board.podium().map(|places| {
        let places = places.map(|entry| {
            view! {
                <div class="flex flex-col items-center gap-1">
                    <span class="text-2xl font-bold">{entry.position}</span>
                    <span class="text-sm font-medium">{entry.name.clone()}</span>
                    <span class="text-xs text-gray-500">{format!("{} pts", entry.points)}</span>
                </div>
            }
        });
        let [first, second, third] = places;
        view! {
            <div class="flex items-end justify-center gap-8 rounded-xl bg-yellow-50 p-6">
                {second}
                {first}
                {third}
            </div>
        }
    });

    let rows = board
        .leaderboard
        .iter()
        .map(|entry| leaderboard_row(entry, influencer_id))
        .collect_view();

    view! {
        {own}
        {podium}
        <div class="divide-y overflow-hidden rounded-xl border border-gray-200 bg-white">{rows}</div>
    }
        .into_any()
}

fn leaderboard_row(entry: &LeaderboardEntry, influencer_id: Option<i64>) -> impl IntoView {
    let is_own = influencer_id == Some(entry.influencer_id);
    let handle = entry
        .instagram_handle
        .as_deref()
        .filter(|handle| !handle.trim().is_empty())
        .map(|handle| format!("@{}", handle.trim_start_matches('@')));

    view! {
        <div class="flex items-center justify-between px-6 py-4" class:bg-purple-50=is_own>
            <div class="flex items-center gap-4">
                <span class="w-10 text-center font-bold text-gray-500">{entry.position}</span>
                <div>
                    <p class="font-medium text-gray-900">{entry.name.clone()}</p>
                    {handle.map(|handle| view! { <p class="text-xs text-gray-500">{handle}</p> })}
                </div>
            </div>
            <div class="text-right">
                <p class="font-semibold">{format!("{} pts", entry.points)}</p>
                <p class="text-xs text-gray-500">{entry.level.clone()}</p>
            </div>
        </div>
    }
}
