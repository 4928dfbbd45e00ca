use seed::{prelude::*, *};
use shared::notification::{Notice, Notifications};

pub struct Model {
    notifications: Notifications,
    timeout_ms: u32,
}

impl Model {
    pub fn new(timeout_ms: u32) -> Self {
        Model {
            notifications: Notifications::default(),
            timeout_ms,
        }
    }
}

pub enum Msg {
    Show(Notice),
    Dismiss(u64),
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Show(notice) => {
            let id = model.notifications.push(notice);
            orders.perform_cmd(cmds::timeout(model.timeout_ms, move || Msg::Dismiss(id)));
        }
        // fired by both the close button and the timer, whichever comes second is a no-op
        Msg::Dismiss(id) => {
            model.notifications.dismiss(id);
        }
    }
}

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    model
        .notifications
        .banners()
        .iter()
        .map(|banner| {
            let id = banner.id;
            div![
                C![
                    "alert",
                    banner.notice.severity.alert_class(),
                    "alert-dismissible",
                    "fade",
                    "show"
                ],
                attrs! {At::from("role") => "alert"},
                banner.notice.message.as_str(),
                button![
                    C!["btn-close"],
                    attrs! {At::Type => "button", At::from("aria-label") => "Close"},
                    ev(Ev::Click, move |_| Msg::Dismiss(id)),
                ],
            ]
        })
        .collect()
}
