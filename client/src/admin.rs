use seed::{prelude::*, *};

use shared::action::{ActionController, DetailsController};
use shared::api::{ActionKind, RequestDetail, RequestPage, ResourceStock, SystemStats};
use shared::config::ClientConfig;
use shared::error::FetchFailure;
use shared::pending::{BoardState, ListingPart, PendingBoard};
use shared::view::{DetailView, PendingRow, StatsView};

use crate::{api, apply_effects};

pub struct Model {
    api_base: String,
    action: ActionController,
    details: DetailsController,
    stats: Option<SystemStats>,
    pending: PendingBoard,
}

#[derive(Clone)]
pub enum Msg {
    StatsFetched(Result<SystemStats, FetchFailure>),
    RequestsFetched(Result<RequestPage, FetchFailure>),
    ResourcesFetched(Result<Vec<ResourceStock>, FetchFailure>),
    BeginAction {
        target_id: u64,
        kind: ActionKind,
        insufficient: bool,
    },
    CommentChanged(String),
    SubmitAction,
    ActionCompleted(Result<(), FetchFailure>),
    CancelAction,
    ViewDetails(u64),
    DetailsFetched(Result<RequestDetail, FetchFailure>),
    CloseDetails,
}

pub fn init(config: &ClientConfig, orders: &mut impl Orders<Msg>) -> Model {
    let base = config.api_base.clone();
    orders
        .perform_cmd({
            let base = base.clone();
            async move { Msg::StatsFetched(api::stats(base).await) }
        })
        .perform_cmd({
            let base = base.clone();
            async move { Msg::RequestsFetched(api::pending_requests(base, 1).await) }
        })
        .perform_cmd({
            let base = base.clone();
            async move { Msg::ResourcesFetched(api::admin_resources(base).await) }
        });

    Model {
        api_base: base,
        action: ActionController::new(config.action_reload_delay_ms),
        details: DetailsController::default(),
        stats: None,
        pending: PendingBoard::default(),
    }
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::StatsFetched(Ok(stats)) => model.stats = Some(stats),
        // best-effort: the card simply stays empty
        Msg::StatsFetched(Err(failure)) => {
            error!("stats unavailable:", failure.to_string());
            orders.skip();
        }

        Msg::RequestsFetched(Ok(page)) => {
            if let Some(next) = model.pending.absorb_page(page) {
                let base = model.api_base.clone();
                orders.perform_cmd(async move {
                    Msg::RequestsFetched(api::pending_requests(base, next).await)
                });
            }
        }
        Msg::RequestsFetched(Err(failure)) => {
            orders.notify(model.pending.fail(ListingPart::Requests, &failure));
        }

        Msg::ResourcesFetched(Ok(resources)) => model.pending.set_resources(resources),
        Msg::ResourcesFetched(Err(failure)) => {
            orders.notify(model.pending.fail(ListingPart::Resources, &failure));
        }

        Msg::BeginAction {
            target_id,
            kind,
            insufficient,
        } => {
            if let Err(err) = model.action.begin(target_id, kind, insufficient) {
                log!("action not started:", err.to_string());
                orders.skip();
            }
        }

        Msg::CommentChanged(comment) => {
            model.action.set_comment(comment);
            orders.skip();
        }

        Msg::SubmitAction => match model.action.submit() {
            Ok((id, body)) => {
                let base = model.api_base.clone();
                orders.perform_cmd(async move {
                    Msg::ActionCompleted(api::post_action(base, id, body).await)
                });
            }
            Err(err) => {
                log!("submit ignored:", err.to_string());
                orders.skip();
            }
        },

        Msg::ActionCompleted(result) => {
            let effects = model.action.complete(result);
            apply_effects(effects, orders);
        }

        Msg::CancelAction => {
            if let Err(err) = model.action.cancel() {
                log!("cancel ignored:", err.to_string());
            }
        }

        Msg::ViewDetails(id) => {
            let base = model.api_base.clone();
            orders
                .skip()
                .perform_cmd(async move { Msg::DetailsFetched(api::request_detail(base, id).await) });
        }

        Msg::DetailsFetched(Ok(detail)) => model.details.open(detail),
        Msg::DetailsFetched(Err(failure)) => {
            orders.notify(DetailsController::failure_notice(&failure));
        }

        Msg::CloseDetails => model.details.close(),
    }
}

// ------ ------
//     View
// ------ ------

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    nodes![
        div![
            C!["row"],
            div![C!["col-lg-8"], pending_card(model)],
            div![C!["col-lg-4"], stats_card(model.stats.as_ref())],
        ],
        action_dialog(model),
        details_dialog(model.details.shown()),
    ]
}

fn stats_card(stats: Option<&SystemStats>) -> Node<Msg> {
    div![
        C!["card"],
        div![C!["card-header"], h5![C!["mb-0"], "System Statistics"]],
        div![
            C!["card-body"],
            id!("statsContainer"),
            match stats.map(StatsView::from) {
                None => nodes![div![
                    C!["spinner-border", "spinner-border-sm", "text-secondary"],
                    span![C!["visually-hidden"], "Loading..."],
                ]],
                Some(stats) => nodes![
                    div![
                        C!["row", "text-center", "mb-3"],
                        stats.counters.iter().map(|counter| div![
                            C!["col-4"],
                            h5![counter.value.as_str()],
                            small![C!["text-muted"], counter.label],
                        ]),
                    ],
                    hr![],
                    h6!["Resource Utilization"],
                    stats.bars.iter().map(|bar| div![
                        C!["mb-2"],
                        div![
                            C!["d-flex", "justify-content-between"],
                            span![bar.label.as_str()],
                            span![bar.value_text.as_str()],
                        ],
                        div![
                            C!["progress"],
                            style! {St::Height => px(8)},
                            div![
                                C!["progress-bar", bar.class],
                                style! {St::Width => format!("{}%", bar.width)},
                            ],
                        ],
                    ]).collect::<Vec<_>>(),
                ],
            },
        ],
    ]
}

fn pending_card(model: &Model) -> Node<Msg> {
    div![
        C!["card", "mb-3"],
        div![C!["card-header"], h5![C!["mb-0"], "Pending Requests"]],
        div![
            C!["card-body", "p-0"],
            match model.pending.state() {
                BoardState::Loading => div![
                    C!["p-3"],
                    div![C!["spinner-border", "text-secondary"]],
                ],
                BoardState::Failed(part) => p![
                    C!["text-danger", "p-3", "mb-0"],
                    i![C!["bi", "bi-exclamation-circle", "me-1"]],
                    match part {
                        ListingPart::Requests => "Pending requests could not be loaded.",
                        ListingPart::Resources => "Resource stock could not be loaded.",
                    },
                ],
                BoardState::Ready(rows) if rows.is_empty() => {
                    p![C!["text-muted", "p-3", "mb-0"], "No pending requests."]
                }
                BoardState::Ready(rows) => table![
                    C!["table", "table-hover", "mb-0"],
                    thead![tr![
                        th!["Requester"],
                        th!["Resource"],
                        th!["Event"],
                        th!["Quantity"],
                        th!["Urgency"],
                        th!["Created"],
                        th![],
                    ]],
                    tbody![rows.iter().map(pending_row)],
                ],
            },
        ],
    ]
}

fn pending_row(row: &PendingRow) -> Node<Msg> {
    let id = row.id;
    let insufficient = row.insufficient;
    tr![
        C![IF!(insufficient => "table-warning")],
        td![row.requester.as_str()],
        td![row.resource.as_str()],
        td![row.event.as_str()],
        td![
            row.quantity.to_string(),
            row.available.map(|available| small![
                C!["text-muted", "ms-1"],
                format!("/ {} available", available)
            ]),
        ],
        td![span![C!["badge", format!("bg-{}", row.urgency_badge)], row.urgency.as_str()]],
        td![row.created.as_str()],
        td![
            C!["text-end", "text-nowrap"],
            button![
                C![
                    "btn",
                    "btn-sm",
                    if insufficient {
                        "btn-outline-warning"
                    } else {
                        "btn-success"
                    },
                    "me-1"
                ],
                attrs! {At::Title => if insufficient { "Not enough stock" } else { "Approve" }},
                ev(Ev::Click, move |_| Msg::BeginAction {
                    target_id: id,
                    kind: ActionKind::Approve,
                    insufficient,
                }),
                i![C!["bi", "bi-check-lg"]],
            ],
            button![
                C!["btn", "btn-sm", "btn-danger", "me-1"],
                attrs! {At::Title => "Reject"},
                ev(Ev::Click, move |_| Msg::BeginAction {
                    target_id: id,
                    kind: ActionKind::Reject,
                    insufficient: false,
                }),
                i![C!["bi", "bi-x-lg"]],
            ],
            button![
                C!["btn", "btn-sm", "btn-outline-secondary"],
                attrs! {At::Title => "Details"},
                ev(Ev::Click, move |_| Msg::ViewDetails(id)),
                i![C!["bi", "bi-eye"]],
            ],
        ],
    ]
}

fn modal(title: &str, on_close: Msg, body: Vec<Node<Msg>>) -> Vec<Node<Msg>> {
    nodes![
        div![
            C!["modal", "fade", "show", "d-block"],
            attrs! {At::TabIndex => "-1", At::from("role") => "dialog"},
            div![
                C!["modal-dialog"],
                div![
                    C!["modal-content"],
                    div![
                        C!["modal-header"],
                        h5![C!["modal-title"], title],
                        button![
                            C!["btn-close"],
                            attrs! {At::Type => "button"},
                            ev(Ev::Click, |_| on_close),
                        ],
                    ],
                    body,
                ],
            ],
        ],
        div![C!["modal-backdrop", "fade", "show"]],
    ]
}

fn action_dialog(model: &Model) -> Vec<Node<Msg>> {
    let dialog = match model.action.dialog() {
        Some(dialog) => dialog,
        None => return Vec::new(),
    };
    let control = model.action.control();
    let comment = model
        .action
        .pending()
        .map(|p| p.comment.clone())
        .unwrap_or_default();

    modal(
        dialog.title,
        Msg::CancelAction,
        nodes![form![
            ev(Ev::Submit, |event| {
                event.prevent_default();
                Msg::SubmitAction
            }),
            div![
                C!["modal-body"],
                dialog.warning.map(|warning| div![
                    C!["alert", "alert-warning"],
                    i![C!["bi", "bi-exclamation-triangle"]],
                    " ",
                    strong!["Warning:"],
                    " ",
                    warning,
                ]),
                label![C!["form-label"], attrs! {At::For => "actionComment"}, "Comment"],
                textarea![
                    C!["form-control"],
                    id!("actionComment"),
                    attrs! {
                        At::Rows => "3",
                        At::Value => comment,
                        At::Placeholder => "Optional note for the requester",
                        At::Disabled => control.is_disabled().as_at_value(),
                    },
                    input_ev(Ev::Input, Msg::CommentChanged),
                ],
            ],
            div![
                C!["modal-footer"],
                button![
                    C!["btn", "btn-secondary"],
                    attrs! {
                        At::Type => "button",
                        At::Disabled => control.is_disabled().as_at_value(),
                    },
                    ev(Ev::Click, |_| Msg::CancelAction),
                    "Cancel",
                ],
                button![
                    C![dialog.button_class],
                    id!("actionSubmit"),
                    attrs! {
                        At::Type => "submit",
                        At::Disabled => control.is_disabled().as_at_value(),
                    },
                    if control.is_busy() {
                        i![C!["bi", "bi-arrow-repeat", "spin"]]
                    } else {
                        i![C![dialog.button_icon]]
                    },
                    " ",
                    control.label(),
                ],
            ],
        ]],
    )
}

fn details_dialog(detail: Option<&RequestDetail>) -> Vec<Node<Msg>> {
    let view = match detail.map(DetailView::from) {
        Some(view) => view,
        None => return Vec::new(),
    };

    modal(
        "Request Details",
        Msg::CloseDetails,
        nodes![div![
            C!["modal-body"],
            id!("requestDetailsContent"),
            div![
                C!["row"],
                div![
                    C!["col-md-6"],
                    view.requester
                        .as_ref()
                        .map(|requester| p![strong!["Requester: "], requester.as_str()]),
                    p![strong!["Resource: "], view.resource.as_str()],
                    p![strong!["Event: "], view.event.as_str()],
                ],
                div![
                    C!["col-md-6"],
                    p![strong!["Quantity: "], view.quantity.as_str()],
                    p![
                        strong!["Urgency: "],
                        span![C!["badge", format!("bg-{}", view.urgency_badge)], view.urgency.as_str()],
                    ],
                    p![
                        strong!["Status: "],
                        span![C!["badge", format!("bg-{}", view.status_badge)], view.status.as_str()],
                    ],
                    p![strong!["Created: "], view.created.as_str()],
                ],
            ],
            view.response.as_ref().map(|response| div![
                C!["alert", response.alert_class],
                h6!["Admin Response"],
                p![strong!["Action: "], response.action.as_str()],
                p![strong!["By: "], response.by.as_str()],
                p![strong!["Comment: "], response.comment.as_str()],
                p![strong!["Responded: "], response.responded.as_str()],
            ]),
        ]],
    )
}
