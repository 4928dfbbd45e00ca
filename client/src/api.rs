use seed::browser::fetch::{FetchError, Method, Request, Response};
use seed::{prelude::*, *};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;

use shared::api::{
    endpoints, ActionRequest, ErrorBody, EventSummary, RequestDetail, RequestPage,
    ResourceStock, SystemStats,
};
use shared::error::FetchFailure;

fn js_message(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    }
}

fn transport(error: FetchError) -> FetchFailure {
    let message = match &error {
        FetchError::NetworkError(value)
        | FetchError::PromiseError(value)
        | FetchError::RequestError(value) => js_message(value),
        FetchError::DomException(exception) => exception.message(),
        FetchError::JsonError(error) => format!("{:?}", error),
        FetchError::StatusError(status) => status.text.clone(),
    };
    error!("request failed:", message);
    FetchFailure::Transport(message)
}

/// Non-2xx answers carry `{error}`; fall back to the status line if they don't.
async fn application_failure(response: Response) -> FetchFailure {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => FetchFailure::application(status.code, body.error),
        Err(_) => FetchFailure::application(status.code, status.text),
    }
}

async fn send(request: Request<'_>) -> Result<Response, FetchFailure> {
    let response = request.fetch().await.map_err(transport)?;
    if response.status().is_ok() {
        Ok(response)
    } else {
        Err(application_failure(response).await)
    }
}

async fn get_json<T: DeserializeOwned + 'static>(url: String) -> Result<T, FetchFailure> {
    let response = send(Request::new(url).method(Method::Get)).await?;
    response.json::<T>().await.map_err(transport)
}

pub async fn post_action(base: String, id: u64, body: ActionRequest) -> Result<(), FetchFailure> {
    let request = Request::new(endpoints::request_action(&base, id))
        .method(Method::Post)
        .json(&body)
        .map_err(transport)?;
    send(request).await.map(|_| ())
}

pub async fn post_form(url: String, fields: Vec<(&'static str, String)>) -> Result<(), FetchFailure> {
    let form_data = web_sys::FormData::new()
        .map_err(|value| FetchFailure::Transport(js_message(&value)))?;
    for (name, value) in fields.iter() {
        form_data
            .append_with_str(name, value)
            .map_err(|value| FetchFailure::Transport(js_message(&value)))?;
    }
    let request = Request::new(url)
        .method(Method::Post)
        .body(form_data.into());
    send(request).await.map(|_| ())
}

pub async fn request_detail(base: String, id: u64) -> Result<RequestDetail, FetchFailure> {
    get_json(endpoints::request_detail(&base, id)).await
}

pub async fn stats(base: String) -> Result<SystemStats, FetchFailure> {
    get_json(endpoints::stats(&base)).await
}

pub async fn pending_requests(base: String, page: u64) -> Result<RequestPage, FetchFailure> {
    get_json(endpoints::pending_requests(&base, page)).await
}

pub async fn admin_resources(base: String) -> Result<Vec<ResourceStock>, FetchFailure> {
    get_json(endpoints::admin_resources(&base)).await
}

pub async fn user_resources(base: String) -> Result<Vec<ResourceStock>, FetchFailure> {
    get_json(endpoints::user_resources(&base)).await
}

pub async fn user_events(base: String) -> Result<Vec<EventSummary>, FetchFailure> {
    get_json(endpoints::user_events(&base)).await
}
