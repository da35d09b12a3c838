//! A port of request parameter *Optionals from apimachinery/types.go
use serde::Serialize;

/// Common query parameters used in list/watch calls on collections
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListParams {
    /// A selector to restrict the list of returned objects by their labels.
    ///
    /// Defaults to everything if `None`.
    pub label_selector: Option<String>,

    /// A selector to restrict the list of returned objects by their fields.
    ///
    /// Defaults to everything if `None`.
    pub field_selector: Option<String>,

    /// Timeout for the list/watch call.
    ///
    /// This limits the duration of the call, regardless of any activity or inactivity.
    pub timeout: Option<u32>,
}

impl ListParams {
    /// Configure the selector to restrict the list of returned objects by their labels.
    ///
    /// Expects a selector expression such as `greenhouse.sap/plugin=true,team notin (ops)`.
    #[must_use]
    pub fn labels(mut self, label_selector: &str) -> Self {
        self.label_selector = Some(label_selector.to_string());
        self
    }

    /// Configure the selector to restrict the list of returned objects by their fields.
    #[must_use]
    pub fn fields(mut self, field_selector: &str) -> Self {
        self.field_selector = Some(field_selector.to_string());
        self
    }

    /// Configure the timeout for list/watch calls.
    #[must_use]
    pub fn timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Common query parameters for put/post calls
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct PostParams {
    /// Whether to run this as a dry run
    pub dry_run: bool,
}

/// Common query parameters for delete calls
#[derive(Default, Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    /// When present, indicates that modifications should not be persisted
    #[serde(serialize_with = "dry_run_all_ser", skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
}

// dryRun serialization differs from the flat query-parameter form used elsewhere
fn dry_run_all_ser<S: serde::Serializer>(t: &bool, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeTuple;
    if *t {
        let mut map = s.serialize_tuple(1)?;
        map.serialize_element("All")?;
        map.end()
    } else {
        s.serialize_none()
    }
}
