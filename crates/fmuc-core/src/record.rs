//! # Result Record
//!
//! The verdict handed to OCEAN: `{"result": <bool>, "log": "<string>"}`.
//! `result` is `true` iff the external validator reported zero problems.
//! Field order is fixed by declaration order, so the serialized JSON always
//! lists `result` before `log`.

use serde::{Deserialize, Serialize};

use crate::error::MetricError;

/// Log text when the invoker is called without a path.
pub const MSG_PATH_MISSING: &str = "The path to the FMU is missing";

/// Log text when the path does not point to a regular file.
pub const MSG_FMU_NOT_FOUND: &str = "For the given path to the FMU, no FMU could be found";

/// Log text when the validator reported no problems.
pub const MSG_NO_ERRORS: &str = "The modelDescription.xml of the FMU does not contain any errors.";

/// Log text when the input directory holds no FMU at all.
pub const MSG_NO_FMU_PROVIDED: &str = "No FMU file provided";

/// Separator placed between consecutive problem descriptions.
pub const PROBLEM_SEPARATOR: &str = " // next error: ";

/// Pass/fail verdict with a human-readable log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Whether the quality metric has been passed.
    pub result: bool,
    /// Success message, joined problem list, or explanation of a missing input.
    pub log: String,
}

impl ResultRecord {
    /// A passing record carrying [`MSG_NO_ERRORS`].
    pub fn passed() -> Self {
        Self {
            result: true,
            log: MSG_NO_ERRORS.to_string(),
        }
    }

    /// A failing record with the given log text.
    pub fn failed(log: impl Into<String>) -> Self {
        Self {
            result: false,
            log: log.into(),
        }
    }

    /// Build the verdict from the validator's problem list.
    ///
    /// An empty list passes; otherwise the problems are joined with
    /// [`PROBLEM_SEPARATOR`] in the order the validator reported them.
    pub fn from_problems<S: AsRef<str>>(problems: &[S]) -> Self {
        if problems.is_empty() {
            return Self::passed();
        }
        let log = problems
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(PROBLEM_SEPARATOR);
        Self::failed(log)
    }

    /// Serialize to compact JSON text.
    pub fn to_json(&self) -> Result<String, MetricError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_problem_list_passes() {
        let record = ResultRecord::from_problems::<String>(&[]);
        assert!(record.result);
        assert_eq!(record.log, MSG_NO_ERRORS);
    }

    #[test]
    fn problems_are_joined_in_order() {
        let record = ResultRecord::from_problems(&["missing unit", "duplicate name"]);
        assert!(!record.result);
        assert_eq!(record.log, "missing unit // next error: duplicate name");
    }

    #[test]
    fn single_problem_has_no_separator() {
        let record = ResultRecord::from_problems(&["Variable \"x\" has no start value"]);
        assert!(!record.result);
        assert_eq!(record.log, "Variable \"x\" has no start value");
    }

    #[test]
    fn json_lists_result_before_log() {
        let json = ResultRecord::failed(MSG_NO_FMU_PROVIDED).to_json().unwrap();
        assert_eq!(json, r#"{"result":false,"log":"No FMU file provided"}"#);
    }

    #[test]
    fn json_escapes_quotes_and_newlines() {
        let record = ResultRecord::failed("line \"one\"\nline two");
        let parsed: ResultRecord = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn parses_python_style_spacing() {
        let parsed: ResultRecord =
            serde_json::from_str(r#"{"result": true, "log": "ok"}"#).unwrap();
        assert!(parsed.result);
        assert_eq!(parsed.log, "ok");
    }
}
