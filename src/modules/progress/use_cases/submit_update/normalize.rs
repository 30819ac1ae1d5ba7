// Pure validation and normalization for the submit command.
//
// Purpose
// - Turn the permissive raw command into a ProgressUpdate, or reject it,
//   before anything touches the store.

use serde_json::Value;

use crate::modules::progress::core::update::ProgressUpdate;
use crate::modules::progress::use_cases::submit_update::command::SubmitUpdate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email address.")]
    InvalidEmail,
}

/// JSON strings and numbers count as present; everything else is missing.
/// Presence is decided before trimming, so a whitespace-only value passes.
fn coerce_present(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn normalize_submit(command: SubmitUpdate) -> Result<ProgressUpdate, ValidationError> {
    let module = [
        &command.module,
        &command.current_module,
        &command.current_module_alt,
    ]
    .into_iter()
    .find_map(coerce_present);

    let (Some(date), Some(name), Some(email), Some(module)) = (
        coerce_present(&command.date),
        coerce_present(&command.name),
        coerce_present(&command.email),
        module,
    ) else {
        return Err(ValidationError::MissingFields);
    };

    let email = email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ProgressUpdate {
        email,
        name: name.trim().to_string(),
        date: date.trim().to_string(),
        module: module.trim().to_string(),
        need_guidelines: is_truthy(&command.need_guidelines),
        submitted_at: command.submitted_at,
    })
}
