use chrono::{DateTime, Utc};
use serde::Deserialize;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::icons::Icon;

/// Appointment as owned by the scheduling backend. Anything may be missing.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub client: Option<Client>,
    #[serde(default)]
    pub property: Option<Property>,
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Client {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default)]
    pub basic_info: Option<BasicInfo>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(default)]
    pub project_name: Option<String>,
}

/// Dates arrive either as preformatted text or as a timestamp.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum DateValue {
    Text(String),
    Structured(DateTime<Utc>),
}

impl DateValue {
    pub fn display(&self) -> String {
        match self {
            DateValue::Text(text) => text.clone(),
            DateValue::Structured(at) => at.format("%Y-%m-%d").to_string(),
        }
    }
}

fn clock(at: &Option<DateTime<Utc>>) -> String {
    at.map(|at| at.format("%H:%M").to_string()).unwrap_or_default()
}

/// Display strings for every row of the dialog. Missing values are empty.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ScheduleDetails {
    pub title: String,
    pub client: String,
    pub property: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub status: String,
    pub notes: String,
}

impl ScheduleDetails {
    pub fn from_record(record: Option<&ScheduleRecord>) -> Self {
        let Some(record) = record else {
            return Self::default();
        };

        Self {
            title: record.title.clone().unwrap_or_default(),
            client: record
                .client
                .as_ref()
                .and_then(|c| c.name.clone())
                .unwrap_or_default(),
            property: record
                .property
                .as_ref()
                .and_then(|p| p.basic_info.as_ref())
                .and_then(|info| info.project_name.clone())
                .unwrap_or_default(),
            date: record.date.as_ref().map(DateValue::display).unwrap_or_default(),
            start_time: clock(&record.start_time),
            end_time: clock(&record.end_time),
            location: record.location.clone().unwrap_or_default(),
            status: record.status.clone().unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    pub fn rows(&self) -> [(&'static str, &str); 9] {
        [
            ("Title", self.title.as_str()),
            ("Client", self.client.as_str()),
            ("Property", self.property.as_str()),
            ("Date", self.date.as_str()),
            ("Start Time", self.start_time.as_str()),
            ("End Time", self.end_time.as_str()),
            ("Location", self.location.as_str()),
            ("Status", self.status.as_str()),
            ("Notes", self.notes.as_str()),
        ]
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailsDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub schedule: Option<ScheduleRecord>,
}

#[function_component(DetailsDialog)]
pub fn details_dialog(props: &DetailsDialogProps) -> Html {
    {
        let open = props.open;
        let on_open_change = props.on_open_change.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_open_change.emit(false);
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_: MouseEvent| on_open_change.emit(false))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let details = ScheduleDetails::from_record(props.schedule.as_ref());
    let rows = details.rows();

    html! {
        <div class="dialog-overlay" onclick={close.clone()}>
            <div class="dialog-content" role="dialog" aria-modal="true" onclick={stop}>
                <div class="dialog-header">
                    <h2 class="dialog-title">{"Appointment Details"}</h2>
                    <button class="dialog-close" aria-label="Close" onclick={close}>
                        { Icon::Close.render("dialog-close-icon") }
                    </button>
                </div>
                <div class="dialog-body">
                    {
                        for rows.iter().map(|(label, value)| html! {
                            <p><strong>{ format!("{}:", label) }</strong>{" "}{ *value }</p>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .dialog-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.8);
                }
                .dialog-content {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    padding: 1.5rem;
                    border-radius: 8px;
                    background: white;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .dialog-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .dialog-title {
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .dialog-close {
                    background: none;
                    border: none;
                    cursor: pointer;
                    opacity: 0.7;
                }
                .dialog-close:hover {
                    opacity: 1;
                }
                .dialog-close-icon {
                    width: 1rem;
                    height: 1rem;
                }
                .dialog-body p {
                    margin: 0.5rem 0;
                }
                "#}
            </style>
        </div>
    }
}
