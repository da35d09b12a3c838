//! Typed resource editing.
//!
//! Form field edits become clone-with-update calls on a closed set of
//! typed functions per kind (see [`updates`]), replacing stringly-typed
//! dot-path patching. Value coercion from form controls happens here,
//! before any update is applied, so parse failures surface synchronously
//! in the form.

pub mod updates;

use greenhouse_core::kinds::{OptionType, OptionValue, Plugin};
use serde_json::Value;
use thiserror::Error;

/// Option names the platform injects and the console never shows or edits
pub const MANAGED_OPTION_PREFIX: &str = "greenhouse.";

/// Rejected form input
#[derive(Error, Debug)]
pub enum EditError {
    /// A number field held something other than an integer
    #[error("{value:?} is not a valid integer")]
    InvalidNumber {
        /// The raw field content
        value: String,
        /// The underlying parse error
        #[source]
        source: std::num::ParseIntError,
    },

    /// A json textarea held something other than valid json
    #[error("not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// The form control a field is rendered as
///
/// Chosen from the option's declared type; drives value coercion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormControl {
    /// Checkbox, coerced to a boolean
    Checkbox,
    /// Number input, coerced to an integer
    Number,
    /// Plain text input
    Text,
    /// Password-style input whose value lands in a Secret
    SecretText,
    /// Textarea holding json for list and map options
    JsonText,
}

impl FormControl {
    /// The control used for an option of the given declared type
    #[must_use]
    pub fn for_option(type_: OptionType) -> Self {
        match type_ {
            OptionType::Bool => FormControl::Checkbox,
            OptionType::Int => FormControl::Number,
            OptionType::String => FormControl::Text,
            OptionType::Secret => FormControl::SecretText,
            OptionType::List | OptionType::Map => FormControl::JsonText,
        }
    }
}

/// Coerce raw form input into the option value it encodes
///
/// No validation beyond coercion happens here; required-ness and the like
/// are the gateway's job.
pub fn coerce(control: FormControl, raw: &str) -> Result<Value, EditError> {
    match control {
        FormControl::Checkbox => Ok(Value::Bool(matches!(raw, "true" | "on" | "checked"))),
        FormControl::Number => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|source| EditError::InvalidNumber {
                value: raw.to_string(),
                source,
            }),
        FormControl::Text | FormControl::SecretText => Ok(Value::String(raw.to_string())),
        FormControl::JsonText => serde_json::from_str(raw).map_err(EditError::InvalidJson),
    }
}

/// A plaintext secret value travelling alongside a resource update
///
/// Secret-kind options are never written into the Plugin; the Plugin gets
/// a reference and the caller persists this entry into the named Secret.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretDataEntry {
    /// Name of the Secret to write into
    pub secret: String,
    /// Data key within the Secret
    pub key: String,
    /// Plaintext value; encode before persisting
    pub value: String,
}

/// The option values a detail view renders
///
/// Platform-managed options (names under [`MANAGED_OPTION_PREFIX`]) are
/// suppressed.
#[must_use]
pub fn visible_options(plugin: &Plugin) -> Vec<&OptionValue> {
    plugin
        .spec
        .option_values
        .iter()
        .filter(|option| !option.name.starts_with(MANAGED_OPTION_PREFIX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coercion_follows_the_declared_control() {
        assert_eq!(coerce(FormControl::Checkbox, "on").unwrap(), json!(true));
        assert_eq!(coerce(FormControl::Checkbox, "").unwrap(), json!(false));
        assert_eq!(coerce(FormControl::Number, " 42 ").unwrap(), json!(42));
        assert_eq!(coerce(FormControl::Text, "abc").unwrap(), json!("abc"));
        assert_eq!(
            coerce(FormControl::JsonText, r#"{"a": [1, 2]}"#).unwrap(),
            json!({"a": [1, 2]})
        );
    }

    #[test]
    fn bad_numbers_and_json_surface_parse_errors() {
        assert!(matches!(
            coerce(FormControl::Number, "2.5"),
            Err(EditError::InvalidNumber { .. })
        ));
        assert!(matches!(
            coerce(FormControl::JsonText, "{broken"),
            Err(EditError::InvalidJson(_))
        ));
    }

    #[test]
    fn controls_map_from_declared_option_types() {
        use greenhouse_core::kinds::OptionType;
        assert_eq!(FormControl::for_option(OptionType::Bool), FormControl::Checkbox);
        assert_eq!(FormControl::for_option(OptionType::Map), FormControl::JsonText);
        assert_eq!(
            FormControl::for_option(OptionType::Secret),
            FormControl::SecretText
        );
    }

    // The detail-view scenario from the console: user options render,
    // platform-managed options stay hidden.
    #[test]
    fn detail_view_hides_managed_options() {
        let plugin: Plugin = serde_json::from_value(json!({
            "metadata": {"name": "test"},
            "spec": {
                "disabled": false,
                "optionValues": [
                    {"name": "value1", "value": true},
                    {"name": "greenhouse.value2", "value": "hidden"},
                ],
            },
        }))
        .unwrap();

        let visible = visible_options(&plugin);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "value1");
        assert_eq!(visible[0].value, Some(json!(true)));
    }
}
