use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::actions::{CollateralDeposit, LenderAction, LenderDecision, Repayment};
use crate::core::loan::{LoanError, LoanRequest, LoanStatus};
use crate::core::records::{loan_rows, LoanRow};
use crate::t;

/// Label/value pairs shown for a successful check.
type Rows = Vec<(String, String)>;

/// Loan request calculator, the other wallet-side checks, a loan record
/// viewer and the status legend.
#[component]
pub fn Loans() -> Element {
    let mut amount = use_signal(String::new);
    let mut term = use_signal(String::new);
    let mut borrower = use_signal(String::new);

    let outcome = use_memo(move || {
        if amount().trim().is_empty() && term().trim().is_empty() {
            return None;
        }
        Some(
            LoanRequest::new(&amount(), &term(), &borrower())
                .and_then(|request| request.preview(OffsetDateTime::now_utc()))
                .map(|preview| {
                    let mut rows = vec![
                        (t!("loans-preview-amount"), format!("{} ETH", preview.amount_ether)),
                        (t!("loans-preview-wei"), preview.amount_wei),
                        (t!("loans-preview-term"), preview.term),
                        (t!("loans-preview-requested"), preview.requested_at),
                        (t!("loans-preview-deadline"), preview.deadline),
                        (t!("loans-preview-status"), preview.status.label().to_string()),
                    ];
                    if let Some(addr) = preview.borrower {
                        rows.push((t!("loans-preview-borrower"), addr));
                    }
                    rows
                }),
        )
    });

    rsx! {
        section { class: "page page-loans",
            h1 { {t!("loans-title")} }
            p { {t!("loans-intro")} }

            form { class: "loans-form",
                onsubmit: move |evt| evt.prevent_default(),

                label { r#for: "loan-amount", {t!("loans-amount-label")} }
                input {
                    id: "loan-amount",
                    r#type: "text",
                    placeholder: "0.5",
                    value: "{amount}",
                    oninput: move |evt| amount.set(evt.value()),
                }

                label { r#for: "loan-term", {t!("loans-term-label")} }
                input {
                    id: "loan-term",
                    r#type: "text",
                    placeholder: "86400",
                    value: "{term}",
                    oninput: move |evt| term.set(evt.value()),
                }

                label { r#for: "loan-borrower", {t!("loans-borrower-label")} }
                input {
                    id: "loan-borrower",
                    r#type: "text",
                    placeholder: t!("loans-borrower-optional"),
                    value: "{borrower}",
                    oninput: move |evt| borrower.set(evt.value()),
                }
            }

            section { class: "loans-preview",
                h2 { {t!("loans-preview-title")} }
                {render_check(outcome(), t!("loans-preview-empty"))}
            }

            CollateralCheck {}
            RepaymentCheck {}
            LenderCheck {}
            LoanRecords {}

            section { class: "loans-legend",
                h2 { {t!("loans-status-title")} }
                ul {
                    for status in LoanStatus::KNOWN {
                        li { key: "{status.label()}", class: "loan-status {status.css_class()}",
                            span { class: "loan-status__code", {status.code().unwrap_or_default().to_string()} }
                            span { class: "loan-status__label", {status.label()} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CollateralCheck() -> Element {
    let mut value = use_signal(String::new);

    let outcome = use_memo(move || {
        (!value().trim().is_empty()).then(|| {
            CollateralDeposit::new(&value()).map(|deposit| {
                vec![
                    (t!("loans-preview-amount"), format!("{} ETH", deposit.amount_ether())),
                    (t!("loans-preview-wei"), deposit.amount_wei.to_string()),
                ]
            })
        })
    });

    rsx! {
        section { class: "loans-check loans-deposit",
            h2 { {t!("loans-deposit-title")} }
            label { r#for: "deposit-value", {t!("loans-value-label")} }
            input {
                id: "deposit-value",
                r#type: "text",
                placeholder: "1",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            {render_check(outcome(), t!("loans-deposit-empty"))}
        }
    }
}

#[component]
fn RepaymentCheck() -> Element {
    let mut loan_id = use_signal(String::new);
    let mut value = use_signal(String::new);

    let outcome = use_memo(move || {
        if loan_id().trim().is_empty() && value().trim().is_empty() {
            return None;
        }
        Some(Repayment::new(&loan_id(), &value()).map(|repayment| {
            vec![
                (t!("loans-loan-id-label"), repayment.loan_id.to_string()),
                (t!("loans-preview-amount"), format!("{} ETH", repayment.amount_ether())),
                (t!("loans-preview-wei"), repayment.amount_wei.to_string()),
            ]
        }))
    });

    rsx! {
        section { class: "loans-check loans-repay",
            h2 { {t!("loans-repay-title")} }
            label { r#for: "repay-loan-id", {t!("loans-loan-id-label")} }
            input {
                id: "repay-loan-id",
                r#type: "text",
                placeholder: "0",
                value: "{loan_id}",
                oninput: move |evt| loan_id.set(evt.value()),
            }
            label { r#for: "repay-value", {t!("loans-value-label")} }
            input {
                id: "repay-value",
                r#type: "text",
                placeholder: "1.1",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            {render_check(outcome(), t!("loans-repay-empty"))}
        }
    }
}

fn action_label(action: LenderAction) -> String {
    match action {
        LenderAction::Approve => t!("loans-lender-approve"),
        LenderAction::Liquidate => t!("loans-lender-liquidate"),
    }
}

#[component]
fn LenderCheck() -> Element {
    let mut action = use_signal(|| LenderAction::Approve);
    let mut borrower = use_signal(String::new);
    let mut loan_id = use_signal(String::new);

    let outcome = use_memo(move || {
        if borrower().trim().is_empty() && loan_id().trim().is_empty() {
            return None;
        }
        Some(
            LenderDecision::new(action(), &borrower(), &loan_id()).map(|decision| {
                vec![
                    (t!("loans-lender-action-label"), action_label(decision.action)),
                    (t!("loans-preview-borrower"), decision.borrower.to_string()),
                    (t!("loans-loan-id-label"), decision.loan_id.to_string()),
                ]
            }),
        )
    });

    rsx! {
        section { class: "loans-check loans-lender",
            h2 { {t!("loans-lender-title")} }
            label { r#for: "lender-action", {t!("loans-lender-action-label")} }
            select {
                id: "lender-action",
                value: "{action().key()}",
                onchange: move |evt| {
                    if let Some(picked) = LenderAction::from_key(&evt.value()) {
                        action.set(picked);
                    }
                },
                for choice in LenderAction::ALL {
                    option { key: "{choice.key()}", value: "{choice.key()}", {action_label(choice)} }
                }
            }
            label { r#for: "lender-borrower", {t!("loans-borrower-label")} }
            input {
                id: "lender-borrower",
                r#type: "text",
                placeholder: "0x…",
                value: "{borrower}",
                oninput: move |evt| borrower.set(evt.value()),
            }
            label { r#for: "lender-loan-id", {t!("loans-loan-id-label")} }
            input {
                id: "lender-loan-id",
                r#type: "text",
                placeholder: "0",
                value: "{loan_id}",
                oninput: move |evt| loan_id.set(evt.value()),
            }
            {render_check(outcome(), t!("loans-lender-empty"))}
        }
    }
}

/// Paste the JSON result of a contract read call to see it formatted.
#[component]
fn LoanRecords() -> Element {
    let mut raw = use_signal(String::new);

    let outcome = use_memo(move || (!raw().trim().is_empty()).then(|| loan_rows(&raw())));

    rsx! {
        section { class: "loans-records",
            h2 { {t!("loans-records-title")} }
            label { r#for: "loan-records", {t!("loans-records-label")} }
            textarea {
                id: "loan-records",
                rows: "4",
                placeholder: "[[0, 1000000000000000000, 86400, 1709294400, 0]]",
                value: "{raw}",
                oninput: move |evt| raw.set(evt.value()),
            }
            {render_records(outcome())}
        }
    }
}

fn render_records(outcome: Option<Result<Vec<LoanRow>, LoanError>>) -> Element {
    match outcome {
        None => rsx! {
            p { class: "loans-records__placeholder", {t!("loans-records-empty")} }
        },
        Some(Err(err)) => rsx! {
            p { class: "loans-check__error", role: "alert", "{err}" }
        },
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            p { class: "loans-records__none", {t!("loans-records-none")} }
        },
        Some(Ok(rows)) => rsx! {
            table { class: "loans-records__table",
                thead {
                    tr {
                        th { {t!("loans-loan-id-label")} }
                        th { {t!("loans-preview-borrower")} }
                        th { {t!("loans-preview-amount")} }
                        th { {t!("loans-preview-term")} }
                        th { {t!("loans-preview-requested")} }
                        th { {t!("loans-preview-deadline")} }
                        th { {t!("loans-preview-status")} }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}",
                            td { "{row.id}" }
                            td { class: "loans-records__address", {row.borrower.unwrap_or_else(|| "—".into())} }
                            td { "{row.amount_ether} ETH" }
                            td { "{row.term}" }
                            td { "{row.requested_at}" }
                            td { {row.deadline.unwrap_or_else(|| "—".into())} }
                            td { class: "loan-status {row.status.css_class()}", {row.status.label()} }
                        }
                    }
                }
            }
        },
    }
}

fn render_check(outcome: Option<Result<Rows, LoanError>>, empty: String) -> Element {
    match outcome {
        None => rsx! {
            p { class: "loans-check__placeholder", "{empty}" }
        },
        Some(Err(err)) => rsx! {
            p { class: "loans-check__error", role: "alert", "{err}" }
        },
        Some(Ok(rows)) => rsx! {
            dl { class: "loans-check__grid",
                for (label, value) in rows {
                    div { key: "{label}", class: "loans-check__row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        },
    }
}
