/// A submit command after validation and normalization: email is trimmed and
/// lowercased, date and module are trimmed, the flag is a real bool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub email: String,
    pub name: String,
    pub date: String,
    pub module: String,
    pub need_guidelines: bool,
    pub submitted_at: i64,
}

/// Which mutation the store applied for a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The (email, date) day record already existed and was extended.
    SameDayAppend,
    /// A new day record was appended, creating the user record if needed.
    NewDayRow,
}
