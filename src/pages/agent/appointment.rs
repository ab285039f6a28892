use log::{error, info, warn};
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;
use web_sys::window;
use yew::prelude::*;

use crate::pages::agent::details_dialog::{DetailsDialog, ScheduleRecord};

const HOST_RECORD_KEY: &str = "__APPOINTMENT__";

/// What the host page left under `window.__APPOINTMENT__`.
#[derive(Clone, PartialEq, Debug)]
pub enum HostValue {
    Missing,
    Json(String),
    /// Set, but not a JSON string (an object, a number, ...).
    Other(String),
}

impl HostValue {
    fn from_js(value: JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return HostValue::Missing;
        }
        match value.as_string() {
            Some(raw) => HostValue::Json(raw),
            None => HostValue::Other(value.js_typeof().as_string().unwrap_or_default()),
        }
    }
}

/// Parses the JSON appointment a host page leaves on `window`.
pub fn parse_host_record(value: HostValue) -> Option<ScheduleRecord> {
    let raw = match value {
        HostValue::Missing => return None,
        HostValue::Json(raw) => raw,
        HostValue::Other(kind) => {
            warn!(
                "Ignoring {} appointment record, expected a JSON string in window.{}",
                kind, HOST_RECORD_KEY
            );
            return None;
        }
    };
    match serde_json::from_str::<ScheduleRecord>(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            error!("Ignoring malformed appointment record: {}", e);
            None
        }
    }
}

fn host_record() -> Option<ScheduleRecord> {
    let window = window()?;
    let value = Reflect::get(&window, &JsValue::from_str(HOST_RECORD_KEY)).ok()?;
    parse_host_record(HostValue::from_js(value))
}

/// Opens the details dialog over whatever appointment the host page supplied.
#[function_component(AppointmentPreview)]
pub fn appointment_preview() -> Html {
    let schedule = use_state(host_record);
    let open = use_state(|| false);

    let on_open_change = {
        let open = open.clone();
        Callback::from(move |next: bool| open.set(next))
    };

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening appointment details");
            open.set(true);
        })
    };

    let title = (*schedule)
        .as_ref()
        .and_then(|s| s.title.clone())
        .unwrap_or_else(|| "Appointment".to_string());

    html! {
        <div class="appointment-preview">
            <h1>{ title }</h1>
            <button class="appointment-details-button" onclick={show}>
                {"View details"}
            </button>
            <DetailsDialog
                open={*open}
                on_open_change={on_open_change}
                schedule={(*schedule).clone()}
            />
        </div>
    }
}
