use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::models::{AvatarKind, SelectionOutcome};

const ALERT_FN: &str = "_alert";

pub const AVATAR_CHANGED: &str = "Your Avatar Has Been Changed!";
pub const SELECTION_FAILED: &str = "There was an error during avatar selection.";
pub const PRESET_LOAD_FAILED: &str = "There was an error during preset avatars load.";
pub const MY_LOAD_FAILED: &str = "There was an error during Your avatars load.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Error,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Error => "error",
        }
    }
}

/// Hands a message to the page's `_alert(payload, level)` helper, falling back to the console
/// when the page does not provide one.
pub fn notify(level: AlertLevel, message: &str) {
    match page_alert() {
        Some(alert) => {
            if let Err(e) = call_alert(&alert, level, message) {
                log::error!("_alert failed: {:?}", e);
                log_alert(level, message);
            }
        }
        None => log_alert(level, message),
    }
}

pub fn load_failed(kind: AvatarKind) -> (AlertLevel, &'static str) {
    let message = match kind {
        AvatarKind::Mine => MY_LOAD_FAILED,
        AvatarKind::Preset => PRESET_LOAD_FAILED,
    };
    (AlertLevel::Error, message)
}

/// The alert shown once a selection request has been answered, if any.
pub fn for_selection(outcome: &SelectionOutcome) -> Option<(AlertLevel, &'static str)> {
    match outcome {
        SelectionOutcome::Changed(_) => Some((AlertLevel::Success, AVATAR_CHANGED)),
        SelectionOutcome::Rejected => Some((AlertLevel::Error, SELECTION_FAILED)),
        SelectionOutcome::Missing => None,
    }
}

fn page_alert() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(ALERT_FN))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn call_alert(alert: &Function, level: AlertLevel, message: &str) -> Result<(), JsValue> {
    let payload = Object::new();
    Reflect::set(
        &payload,
        &JsValue::from_str("message"),
        &JsValue::from_str(message),
    )?;
    alert.call2(&JsValue::NULL, &payload, &JsValue::from_str(level.as_str()))?;
    Ok(())
}

fn log_alert(level: AlertLevel, message: &str) {
    match level {
        AlertLevel::Success => log::info!("{}", message),
        AlertLevel::Error => log::error!("{}", message),
    }
}
