use serde_json::Value;

/// Raw submit command as received from a client, before validation.
///
/// Fields stay untyped `Value`s so the normalization step can apply the
/// same permissive coercion clients of the original service rely on
/// (numeric dates, string flags). The module value is accepted under the
/// keys `module`, `currentModule` and `current_module`.
#[derive(Debug, Clone)]
pub struct SubmitUpdate {
    pub date: Value,
    pub name: Value,
    pub email: Value,
    pub module: Value,
    pub current_module: Value,
    pub current_module_alt: Value,
    pub need_guidelines: Value,
    pub submitted_at: i64,
}

impl SubmitUpdate {
    /// Pull the recognized fields out of an arbitrary JSON body. Anything
    /// that is not a JSON object yields a command with every field missing.
    pub fn from_body(body: &Value, submitted_at: i64) -> Self {
        let field = |key: &str| body.get(key).cloned().unwrap_or(Value::Null);
        Self {
            date: field("date"),
            name: field("name"),
            email: field("email"),
            module: field("module"),
            current_module: field("currentModule"),
            current_module_alt: field("current_module"),
            need_guidelines: field("needGuidelines"),
            submitted_at,
        }
    }
}
