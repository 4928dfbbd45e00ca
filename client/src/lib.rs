use seed::{prelude::*, *};
use shared::notification::Notice;
use shared::Effect;

mod admin;
mod api;
mod config;
mod dashboard;
mod notification;

// ------ ------
//     Init
// ------ ------

fn init(url: Url, orders: &mut impl Orders<Msg>) -> Model {
    let config = config::load();
    orders.subscribe(|notice: Notice| Msg::Notification(notification::Msg::Show(notice)));

    let page = match url.path().first().map(String::as_str) {
        Some("admin") => Page::Admin(admin::init(&config, &mut orders.proxy(Msg::Admin))),
        _ => Page::Dashboard(dashboard::init(
            &config,
            &mut orders.proxy(Msg::Dashboard),
        )),
    };

    Model {
        notifications: notification::Model::new(config.notification_timeout_ms),
        page,
    }
}

// ------ ------
//     Model
// ------ ------

struct Model {
    notifications: notification::Model,
    page: Page,
}

enum Page {
    Admin(admin::Model),
    Dashboard(dashboard::Model),
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    Notification(notification::Msg),
    Admin(admin::Msg),
    Dashboard(dashboard::Msg),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match (msg, &mut model.page) {
        (Msg::Notification(msg), _) => {
            notification::update(
                msg,
                &mut model.notifications,
                &mut orders.proxy(Msg::Notification),
            );
        }
        (Msg::Admin(msg), Page::Admin(page)) => {
            admin::update(msg, page, &mut orders.proxy(Msg::Admin));
        }
        (Msg::Dashboard(msg), Page::Dashboard(page)) => {
            dashboard::update(msg, page, &mut orders.proxy(Msg::Dashboard));
        }
        _ => {
            orders.skip();
        }
    }
}

/// Carries out what a controller asked for after a call resolved.
fn apply_effects<Ms: 'static>(effects: Vec<Effect>, orders: &mut impl Orders<Ms>) {
    for effect in effects {
        match effect {
            Effect::Notify(notice) => {
                orders.notify(notice);
            }
            Effect::Reload { after_ms } => {
                orders.perform_cmd(cmds::timeout(after_ms, reload_page));
            }
        }
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            error!("page reload failed:", err);
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> impl IntoNodes<Msg> {
    div![
        C!["container", "py-3"],
        notification::view(&model.notifications).map_msg(Msg::Notification),
        match &model.page {
            Page::Admin(page) => admin::view(page).map_msg(Msg::Admin),
            Page::Dashboard(page) => dashboard::view(page).map_msg(Msg::Dashboard),
        },
    ]
}

//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view);
}
