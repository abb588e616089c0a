//! UI Components
//!
//! Leptos components for the admin views.

mod admit_card_form;
mod admit_card_preview;
mod dashboard;
mod login;
mod student_list;

pub use admit_card_form::AdmitCardForm;
pub use admit_card_preview::AdmitCardPreview;
pub use dashboard::Dashboard;
pub use login::Login;
pub use student_list::StudentList;

use wasm_bindgen::JsCast;

/// Blocking modal alert, the error/success surface of every flow
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Current value of the input or select that fired the event
pub(crate) fn event_value(ev: &web_sys::Event) -> String {
    let Some(target) = ev.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Checked state of the checkbox that fired the event
pub(crate) fn event_checked(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.checked()))
        .unwrap_or(false)
}
