use seed::{prelude::*, *};

use shared::api::{EventSummary, ResourceStock};
use shared::config::ClientConfig;
use shared::error::FetchFailure;
use shared::submission::{
    DonationForm, RequestForm, SubmissionFlow, SubmissionForm, SubmissionKind, URGENCY_LEVELS,
};
use shared::view::event_label;

use crate::{api, apply_effects};

pub struct Model {
    api_base: String,
    donation: SubmissionFlow<DonationForm>,
    request: SubmissionFlow<RequestForm>,
    resources: Vec<ResourceStock>,
    events: Vec<EventSummary>,
}

#[derive(Clone)]
pub enum Msg {
    ResourcesFetched(Result<Vec<ResourceStock>, FetchFailure>),
    EventsFetched(Result<Vec<EventSummary>, FetchFailure>),
    Open(SubmissionKind),
    Close(SubmissionKind),
    FieldChanged(SubmissionKind, &'static str, String),
    Submit(SubmissionKind),
    Submitted(SubmissionKind, Result<(), FetchFailure>),
}

pub fn init(config: &ClientConfig, orders: &mut impl Orders<Msg>) -> Model {
    let base = config.api_base.clone();
    orders
        .perform_cmd({
            let base = base.clone();
            async move { Msg::ResourcesFetched(api::user_resources(base).await) }
        })
        .perform_cmd({
            let base = base.clone();
            async move { Msg::EventsFetched(api::user_events(base).await) }
        });

    Model {
        api_base: base,
        donation: SubmissionFlow::new(config.submission_reload_delay_ms),
        request: SubmissionFlow::new(config.submission_reload_delay_ms),
        resources: Vec::new(),
        events: Vec::new(),
    }
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::ResourcesFetched(Ok(resources)) => model.resources = resources,
        Msg::EventsFetched(Ok(events)) => model.events = events,
        // the selects stay empty and the server rejects the form with its own message
        Msg::ResourcesFetched(Err(failure)) | Msg::EventsFetched(Err(failure)) => {
            error!("form options unavailable:", failure.to_string());
            orders.skip();
        }

        Msg::Open(SubmissionKind::Donation) => model.donation.open(),
        Msg::Open(SubmissionKind::Request) => model.request.open(),

        Msg::Close(kind) => {
            let closed = match kind {
                SubmissionKind::Donation => model.donation.close(),
                SubmissionKind::Request => model.request.close(),
            };
            if let Err(err) = closed {
                log!("dialog kept open:", err.to_string());
            }
        }

        Msg::FieldChanged(kind, name, value) => {
            let applied = match kind {
                SubmissionKind::Donation => set_field(&mut model.donation, name, value),
                SubmissionKind::Request => set_field(&mut model.request, name, value),
            };
            if !applied {
                orders.skip();
            }
        }

        Msg::Submit(SubmissionKind::Donation) => {
            submit(&mut model.donation, &model.api_base, orders);
        }
        Msg::Submit(SubmissionKind::Request) => {
            submit(&mut model.request, &model.api_base, orders);
        }

        Msg::Submitted(kind, result) => {
            let effects = match kind {
                SubmissionKind::Donation => model.donation.complete(result),
                SubmissionKind::Request => model.request.complete(result),
            };
            apply_effects(effects, orders);
        }
    }
}

fn set_field<F: SubmissionForm>(flow: &mut SubmissionFlow<F>, name: &str, value: String) -> bool {
    match flow.form_mut() {
        Some(form) => {
            form.set_field(name, value);
            true
        }
        None => false,
    }
}

fn submit<F: SubmissionForm>(
    flow: &mut SubmissionFlow<F>,
    base: &str,
    orders: &mut impl Orders<Msg>,
) {
    let kind = flow.kind();
    match flow.submit() {
        Ok(fields) => {
            let url = kind.endpoint(base);
            orders.perform_cmd(async move { Msg::Submitted(kind, api::post_form(url, fields).await) });
        }
        Err(err) => {
            log!("submit ignored:", err.to_string());
            orders.skip();
        }
    }
}

// ------ ------
//     View
// ------ ------

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    nodes![
        div![
            C!["d-flex", "gap-2", "mb-3"],
            button![
                C!["btn", "btn-primary"],
                ev(Ev::Click, |_| Msg::Open(SubmissionKind::Donation)),
                i![C!["bi", "bi-heart"]],
                " Donate",
            ],
            button![
                C!["btn", "btn-outline-primary"],
                ev(Ev::Click, |_| Msg::Open(SubmissionKind::Request)),
                i![C!["bi", "bi-box-seam"]],
                " Request Resources",
            ],
        ],
        dialog(&model.donation, donation_fields(model)),
        dialog(&model.request, request_fields(model)),
    ]
}

fn dialog<F: SubmissionForm>(flow: &SubmissionFlow<F>, fields: Vec<Node<Msg>>) -> Vec<Node<Msg>> {
    if !flow.is_open() {
        return Vec::new();
    }
    let kind = flow.kind();
    let control = flow.control();

    nodes![
        div![
            C!["modal", "fade", "show", "d-block"],
            attrs! {At::TabIndex => "-1", At::from("role") => "dialog"},
            div![
                C!["modal-dialog"],
                div![
                    C!["modal-content"],
                    form![
                        ev(Ev::Submit, move |event| {
                            event.prevent_default();
                            Msg::Submit(kind)
                        }),
                        div![
                            C!["modal-header"],
                            h5![C!["modal-title"], kind.title()],
                            button![
                                C!["btn-close"],
                                attrs! {At::Type => "button"},
                                ev(Ev::Click, move |_| Msg::Close(kind)),
                            ],
                        ],
                        div![C!["modal-body"], fields],
                        div![
                            C!["modal-footer"],
                            button![
                                C!["btn", "btn-secondary"],
                                attrs! {
                                    At::Type => "button",
                                    At::Disabled => control.is_disabled().as_at_value(),
                                },
                                ev(Ev::Click, move |_| Msg::Close(kind)),
                                "Cancel",
                            ],
                            button![
                                C!["btn", "btn-primary"],
                                attrs! {
                                    At::Type => "submit",
                                    At::Disabled => control.is_disabled().as_at_value(),
                                },
                                IF!(control.is_busy() => i![C!["bi", "bi-arrow-repeat", "spin", "me-1"]]),
                                control.label(),
                            ],
                        ],
                    ],
                ],
            ],
        ],
        div![C!["modal-backdrop", "fade", "show"]],
    ]
}

fn field_input(kind: SubmissionKind, name: &'static str) -> EventHandler<Msg> {
    input_ev(Ev::Input, move |value| Msg::FieldChanged(kind, name, value))
}

fn resource_select(model: &Model, kind: SubmissionKind, selected: &str) -> Node<Msg> {
    div![
        C!["mb-3"],
        label![C!["form-label"], "Resource"],
        select![
            C!["form-select"],
            attrs! {At::Name => "resource_id", At::Required => AtValue::None},
            field_input(kind, "resource_id"),
            option![attrs! {At::Value => ""}, "Choose a resource"],
            model.resources.iter().map(|resource| option![
                attrs! {
                    At::Value => resource.id.to_string(),
                    At::Selected => (resource.id.to_string() == selected).as_at_value(),
                },
                format!(
                    "{} ({} {} available)",
                    resource.name, resource.available_quantity, resource.unit
                ),
            ]),
        ],
    ]
}

fn event_select(
    model: &Model,
    kind: SubmissionKind,
    selected: &str,
    placeholder: &str,
    required: bool,
) -> Node<Msg> {
    div![
        C!["mb-3"],
        label![C!["form-label"], "Event"],
        select![
            C!["form-select"],
            attrs! {At::Name => "event_id", At::Required => required.as_at_value()},
            field_input(kind, "event_id"),
            option![attrs! {At::Value => ""}, placeholder],
            model.events.iter().map(|event| option![
                attrs! {
                    At::Value => event.id.to_string(),
                    At::Selected => (event.id.to_string() == selected).as_at_value(),
                },
                event_label(event),
            ]),
        ],
    ]
}

fn quantity_input(kind: SubmissionKind, value: &str) -> Node<Msg> {
    div![
        C!["mb-3"],
        label![C!["form-label"], "Quantity"],
        input![
            C!["form-control"],
            attrs! {
                At::Type => "number",
                At::Name => "quantity",
                At::Min => "1",
                At::Required => AtValue::None,
                At::Value => value,
            },
            field_input(kind, "quantity"),
        ],
    ]
}

fn donation_fields(model: &Model) -> Vec<Node<Msg>> {
    let kind = SubmissionKind::Donation;
    let form = model.donation.form();
    nodes![
        resource_select(model, kind, &form.resource_id),
        quantity_input(kind, &form.quantity),
        event_select(model, kind, &form.event_id, "General donation", false),
        div![
            C!["mb-3"],
            label![C!["form-label"], "Notes"],
            textarea![
                C!["form-control"],
                attrs! {At::Name => "notes", At::Rows => "2", At::Value => form.notes.as_str()},
                field_input(kind, "notes"),
            ],
        ],
    ]
}

fn request_fields(model: &Model) -> Vec<Node<Msg>> {
    let kind = SubmissionKind::Request;
    let form = model.request.form();
    nodes![
        resource_select(model, kind, &form.resource_id),
        event_select(model, kind, &form.event_id, "Choose an event", true),
        quantity_input(kind, &form.quantity),
        div![
            C!["mb-3"],
            label![C!["form-label"], "Urgency"],
            select![
                C!["form-select"],
                attrs! {At::Name => "urgency"},
                field_input(kind, "urgency"),
                URGENCY_LEVELS.iter().map(|&level| option![
                    attrs! {
                        At::Value => level,
                        At::Selected => (level == form.urgency).as_at_value(),
                    },
                    level,
                ]),
            ],
        ],
    ]
}
