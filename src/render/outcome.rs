use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::backend::QueryError;

pub const PATH_INPUT_ERROR: &str = "Error: start and end locations must be provided.";
pub const PATH_UNEXPECTED: &str = "Unexpected error computing path.";
pub const FURTHEST_INPUT_ERROR: &str = "Error: start location must be provided.";
pub const FURTHEST_NOT_FOUND: &str =
    "Error: start location is unknown or has no reachable destinations.";
pub const FURTHEST_UNVERIFIED: &str = "Error: unable to verify start location.";
pub const FURTHEST_UNEXPECTED: &str = "Unexpected error computing furthest destination.";

/// What kind of answer a rendered fragment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentClass {
    Ok,
    /// Required input was missing; the backend was not consulted.
    InputError,
    /// The backend reported an unknown location or nothing reachable.
    NotFound,
    Unexpected,
}

impl FragmentClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::InputError => "input_error",
            Self::NotFound => "not_found",
            Self::Unexpected => "unexpected",
        }
    }
}

impl Display for FragmentClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a backend failure onto the fragment shown to the user. Failure detail
/// stays in the error and is never rendered.
pub fn classify(
    error: &QueryError,
    unexpected: &'static str,
    not_found: impl FnOnce() -> Fragment,
) -> Fragment {
    match error {
        QueryError::NotFound { .. } => not_found(),
        QueryError::Failure(_) => Fragment::message(FragmentClass::Unexpected, unexpected),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub class: FragmentClass,
    pub html: String,
}

impl Fragment {
    pub fn new(class: FragmentClass, html: String) -> Self {
        Self { class, html }
    }

    /// A single fixed paragraph.
    pub fn message(class: FragmentClass, text: &'static str) -> Self {
        Self::new(class, format!("<p>{text}</p>"))
    }

    pub fn is_ok(&self) -> bool {
        self.class == FragmentClass::Ok
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.html)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::backend::QueryError;

    use super::{Fragment, FragmentClass, PATH_UNEXPECTED, classify};

    #[test]
    fn classify_keeps_not_found_apart_from_other_failures() {
        let not_found = classify(
            &QueryError::not_found("unknown location `X`"),
            PATH_UNEXPECTED,
            || Fragment::message(FragmentClass::NotFound, "<gone>"),
        );
        assert_eq!(not_found.class, FragmentClass::NotFound);

        let failure = classify(
            &QueryError::failure("graph not loaded at /var/lib/campus"),
            PATH_UNEXPECTED,
            || panic!("failures must not render as not-found"),
        );
        assert_eq!(failure.class, FragmentClass::Unexpected);
        assert_eq!(failure.as_str(), "<p>Unexpected error computing path.</p>");
    }

    #[test]
    fn message_fragment_wraps_fixed_text_in_paragraph() {
        let fragment = Fragment::message(FragmentClass::Unexpected, PATH_UNEXPECTED);
        assert_eq!(fragment.as_str(), "<p>Unexpected error computing path.</p>");
        assert!(!fragment.is_ok());
        assert_eq!(fragment.to_string(), fragment.clone().into_html());
    }

    #[test]
    fn fragment_serializes_with_snake_case_class() {
        let fragment = Fragment::new(FragmentClass::InputError, "<p>x</p>".to_owned());
        assert_eq!(
            serde_json::to_value(&fragment).expect("fragment should serialize"),
            json!({ "class": "input_error", "html": "<p>x</p>" })
        );
    }
}
