//! Balances, payout details, withdrawals, and payment history. Payout details
//! render masked outside the edit form.

use crate::{
    app_lib::{
        AppError,
        format::{money, short_date},
    },
    components::{Alert, AlertKind, Button, Card, Spinner, StatCard},
    features::{
        auth::{client as auth_client, session::SessionStore, state::use_auth},
        payments::{
            client,
            rules::{Withdrawal, mask_account, mask_pix_key, plan_withdrawal, withdrawal_state},
            types::{
                BankAccountType, Payment, PaymentInfo, PaymentMethod, PaymentSummary,
                WithdrawalRequest,
            },
        },
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use tracing::info;

#[derive(Clone)]
struct Notice {
    kind: AlertKind,
    message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.to_string(),
        }
    }

    fn error(err: &AppError) -> Self {
        Self {
            kind: AlertKind::Error,
            message: err.user_message(),
        }
    }
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let auth = use_auth();
    let summary = LocalResource::new(move || async move { client::get_payment_summary().await });
    let details = RwSignal::new(auth.session.with_untracked(|session| {
        PaymentInfo::from_profile(
            session
                .user
                .as_ref()
                .and_then(|user| user.influencer_profile.as_ref()),
        )
    }));
    let (editing, set_editing) = signal(false);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (confirming, set_confirming) = signal::<Option<WithdrawalRequest>>(None);

    let save_action = Action::new_local(move |info: &PaymentInfo| {
        let info = info.clone();
        async move {
            client::update_payment_info(&info).await?;
            auth_client::fetch_me().await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(user) => {
                    details.set(PaymentInfo::from_profile(user.influencer_profile.as_ref()));
                    auth.login(user);
                    set_editing.set(false);
                    set_notice.set(Some(Notice::success("Payment details saved.")));
                }
                Err(err) => set_notice.set(Some(Notice::error(&err))),
            }
        }
    });

    let withdraw_action = Action::new_local(move |request: &WithdrawalRequest| {
        let request = request.clone();
        async move { client::request_withdrawal(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = withdraw_action.value().get() {
            set_confirming.set(None);
            match result {
                Ok(()) => {
                    info!("withdrawal requested");
                    set_notice.set(Some(Notice::success("Withdrawal requested.")));
                    summary.refetch();
                }
                Err(err) => set_notice.set(Some(Notice::error(&err))),
            }
        }
    });

    let on_withdraw = move |current: PaymentSummary| {
        set_notice.set(None);
        match plan_withdrawal(&current, &details.get_untracked()) {
            Ok(request) => set_confirming.set(Some(request)),
            Err(err) => set_notice.set(Some(Notice::error(&err))),
        }
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900">"Payments"</h1>
                <p class="text-sm text-gray-500">"Balances, payout details, and history"</p>
            </div>
            {move || {
                notice
                    .get()
                    .map(|notice| view! { <Alert kind=notice.kind message=notice.message /> })
            }}
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match summary.get() {
                    Some(Ok(current)) => {
                        let requested = current.clone();
                        view! {
                            <BalanceCards summary=current.clone() />
                            <WithdrawalPanel
                                summary=current
                                confirming=confirming
                                pending=withdraw_action.pending()
                                on_request=move || on_withdraw(requested.clone())
                                on_confirm=move |request| {
                                    withdraw_action.dispatch(request);
                                }
                                on_cancel=move || set_confirming.set(None)
                            />
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
            <Card title="Payout details">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <PaymentDetails details=details />
                            <div class="mt-4">
                                <button
                                    type="button"
                                    class="text-sm font-medium text-purple-700 hover:underline"
                                    on:click=move |_| set_editing.set(true)
                                >
                                    "Edit details"
                                </button>
                            </div>
                        }
                    }
                >
                    <PaymentDetailsForm
                        details=details
                        saving=save_action.pending()
                        on_save=move |info| {
                            set_notice.set(None);
                            save_action.dispatch(info);
                        }
                        on_cancel=move || set_editing.set(false)
                    />
                </Show>
            </Card>
            <Card title="Payment history">
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || {
                        summary
                            .get()
                            .and_then(Result::ok)
                            .map(|current| history_table(current.payment_history))
                    }}
                </Suspense>
            </Card>
        </div>
    }
}

#[component]
fn BalanceCards(summary: PaymentSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4">
            <StatCard title="Available balance" value=money(summary.available_balance) accent=true />
            <StatCard title="Total earned" value=money(summary.total_earned) />
            <StatCard title="Pending withdrawal" value=money(summary.pending_withdrawal) />
            <StatCard title="Total paid" value=money(summary.total_paid) />
        </div>
    }
}

#[component]
fn WithdrawalPanel<R, C, X>(
    summary: PaymentSummary,
    confirming: ReadSignal<Option<WithdrawalRequest>>,
    pending: Memo<bool>,
    on_request: R,
    on_confirm: C,
    on_cancel: X,
) -> impl IntoView
where
    R: Fn() + Send + Sync + 'static,
    C: Fn(WithdrawalRequest) + Clone + Send + Sync + 'static,
    X: Fn() + Clone + Send + Sync + 'static,
{
    let state = withdrawal_state(&summary);
    let available = match state {
        Withdrawal::Available { amount } => view! {
            <button
                type="button"
                class="rounded-lg bg-emerald-600 px-6 py-3 font-semibold text-white hover:bg-emerald-700"
                on:click=move |_| on_request()
            >
                {format!("Withdraw {}", money(amount))}
            </button>
        }
            .into_any(),
        Withdrawal::BelowMinimum { minimum } => view! {
            <p class="text-sm text-gray-500">
                {format!("Minimum balance for withdrawal: {}", money(minimum))}
            </p>
        }
            .into_any(),
        Withdrawal::InProgress => view! {
            <p class="text-sm text-gray-500">"A withdrawal is being processed."</p>
        }
            .into_any(),
    };

    view! {
        <div class="space-y-4">
            {available}
            {move || {
                confirming
                    .get()
                    .map(|request| {
                        let on_confirm = on_confirm.clone();
                        let on_cancel = on_cancel.clone();
                        let prompt = format!(
                            "Withdraw {} via {}?",
                            money(request.amount),
                            request.payment_method.label(),
                        );
                        view! {
                            <div class="space-y-3 rounded-xl border border-gray-200 bg-white p-5">
                                <p class="font-medium text-gray-900">{prompt}</p>
                                <div class="flex gap-3">
                                    <button
                                        type="button"
                                        class="rounded-lg bg-gray-900 px-4 py-2 text-sm font-medium text-white hover:bg-black disabled:opacity-60"
                                        disabled=move || pending.get()
                                        on:click=move |_| on_confirm(request.clone())
                                    >
                                        "Confirm"
                                    </button>
                                    <button
                                        type="button"
                                        class="rounded-lg px-4 py-2 text-sm text-gray-700 hover:bg-gray-100"
                                        on:click=move |_| on_cancel()
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn PaymentDetails(details: RwSignal<PaymentInfo>) -> impl IntoView {
    move || {
        let info = details.get();
        match info.payment_method {
            PaymentMethod::Pix => view! {
                <dl class="space-y-1 text-sm">
                    <dt class="text-gray-500">"Method"</dt>
                    <dd class="font-medium">{PaymentMethod::Pix.label()}</dd>
                    <dt class="text-gray-500">"PIX key"</dt>
                    <dd class="font-mono">{mask_pix_key(&info.pix_key)}</dd>
                </dl>
            }
                .into_any(),
            PaymentMethod::BankTransfer => view! {
                <dl class="grid grid-cols-2 gap-2 text-sm">
                    <dt class="text-gray-500">"Bank"</dt>
                    <dd class="font-medium">{info.bank_name}</dd>
                    <dt class="text-gray-500">"Agency"</dt>
                    <dd class="font-mono">{info.bank_agency}</dd>
                    <dt class="text-gray-500">"Account"</dt>
                    <dd class="font-mono">{mask_account(&info.bank_account)}</dd>
                    <dt class="text-gray-500">"Account type"</dt>
                    <dd>{info.bank_account_type.label()}</dd>
                </dl>
            }
                .into_any(),
        }
    }
}

#[component]
fn PaymentDetailsForm<S, X>(
    details: RwSignal<PaymentInfo>,
    saving: Memo<bool>,
    on_save: S,
    on_cancel: X,
) -> impl IntoView
where
    S: Fn(PaymentInfo) + Send + Sync + 'static,
    X: Fn() + Send + Sync + 'static,
{
    let draft = RwSignal::new(details.get_untracked());
    let is_pix = move || draft.with(|info| info.payment_method == PaymentMethod::Pix);
    let field_class = "block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm";

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        on_save(draft.get_untracked());
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div class="flex gap-6 text-sm">
                <label class="flex items-center gap-2">
                    <input
                        type="radio"
                        name="payment_method"
                        prop:checked=is_pix
                        on:change=move |_| draft.update(|info| info.payment_method = PaymentMethod::Pix)
                    />
                    {PaymentMethod::Pix.label()}
                </label>
                <label class="flex items-center gap-2">
                    <input
                        type="radio"
                        name="payment_method"
                        prop:checked=move || !is_pix()
                        on:change=move |_| {
                            draft.update(|info| info.payment_method = PaymentMethod::BankTransfer)
                        }
                    />
                    {PaymentMethod::BankTransfer.label()}
                </label>
            </div>
            <Show
                when=is_pix
                fallback=move || {
                    view! {
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                            <input
                                class=field_class
                                placeholder="Bank"
                                prop:value=move || draft.with(|info| info.bank_name.clone())
                                on:input=move |event| {
                                    draft.update(|info| info.bank_name = event_target_value(&event))
                                }
                            />
                            <input
                                class=field_class
                                placeholder="Agency"
                                prop:value=move || draft.with(|info| info.bank_agency.clone())
                                on:input=move |event| {
                                    draft.update(|info| info.bank_agency = event_target_value(&event))
                                }
                            />
                            <input
                                class=field_class
                                placeholder="Account"
                                autocomplete="off"
                                prop:value=move || draft.with(|info| info.bank_account.clone())
                                on:input=move |event| {
                                    draft.update(|info| info.bank_account = event_target_value(&event))
                                }
                            />
                            <select
                                class=field_class
                                on:change=move |event| {
                                    let kind = BankAccountType::parse(&event_target_value(&event));
                                    draft.update(|info| info.bank_account_type = kind);
                                }
                            >
                                {[BankAccountType::Checking, BankAccountType::Savings]
                                    .into_iter()
                                    .map(|kind| {
                                        let value = match kind {
                                            BankAccountType::Checking => "checking",
                                            BankAccountType::Savings => "savings",
                                        };
                                        view! {
                                            <option
                                                value=value
                                                selected=move || {
                                                    draft.with(|info| info.bank_account_type == kind)
                                                }
                                            >
                                                {kind.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                }
            >
                <input
                    class=field_class
                    placeholder="PIX key"
                    autocomplete="off"
                    prop:value=move || draft.with(|info| info.pix_key.clone())
                    on:input=move |event| draft.update(|info| info.pix_key = event_target_value(&event))
                />
            </Show>
            <div class="flex gap-3">
                <Button button_type="submit" disabled=saving>
                    "Save"
                </Button>
                <button
                    type="button"
                    class="rounded-lg px-4 py-2 text-sm text-gray-700 hover:bg-gray-100"
                    on:click=move |_| on_cancel()
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

fn history_table(history: Vec<Payment>) -> impl IntoView {
    if history.is_empty() {
        return view! { <p class="text-sm text-gray-500">"No payments yet."</p> }.into_any();
    }

    view! {
        <table class="min-w-full text-sm">
            <thead>
                <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                    <th class="px-2 py-3 text-left">"Requested"</th>
                    <th class="px-2 py-3 text-left">"Period"</th>
                    <th class="px-2 py-3 text-right">"Amount"</th>
                    <th class="px-2 py-3 text-left">"Status"</th>
                    <th class="px-2 py-3 text-left">"Method"</th>
                    <th class="px-2 py-3 text-left">"Paid"</th>
                </tr>
            </thead>
            <tbody>
                {history
                    .into_iter()
                    .map(|payment| {
                        let status = payment.status_label().to_string();
                        let paid = payment.paid_at.as_deref().map(short_date).unwrap_or_default();
                        view! {
                            <tr class="border-b border-gray-100">
                                <td class="px-2 py-3">{short_date(&payment.created_at)}</td>
                                <td class="px-2 py-3">{payment.period}</td>
                                <td class="px-2 py-3 text-right font-medium">{money(payment.amount)}</td>
                                <td class="px-2 py-3">{status}</td>
                                <td class="px-2 py-3">{payment.payment_method}</td>
                                <td class="px-2 py-3">{paid}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
        .into_any()
}
