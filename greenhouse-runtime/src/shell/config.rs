use serde::Deserialize;
use thiserror::Error;

/// What a configured panel is, for navigation purposes
#[derive(Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum PanelKind {
    /// A user-facing admin module, listed in the navigation
    #[default]
    App,
    /// A headless module mounted for its side effects (e.g. auth)
    Background,
}

/// Raw, partial panel configuration as read from the org configuration
///
/// Everything is optional here; [`PanelConfig::new`] applies defaults and
/// validates the mandatory fields.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PanelConfigSpec {
    /// Unique panel id within the shell
    #[serde(default)]
    pub id: Option<String>,

    /// Logical app name resolved against the asset manifest
    #[serde(default)]
    pub name: Option<String>,

    /// Navigation label; defaults to `name`
    #[serde(default)]
    pub display_name: Option<String>,

    /// Navigation sort weight; lower sorts first, defaults to 0
    #[serde(default)]
    pub weight: Option<i32>,

    /// Bundle version to load; defaults to `latest`
    #[serde(default)]
    pub version: Option<String>,

    /// Whether the panel appears in the navigation; defaults to true
    #[serde(default)]
    pub navigable: Option<bool>,

    /// Kind of panel; defaults to [`PanelKind::App`]
    #[serde(default)]
    pub kind: Option<PanelKind>,

    /// Module-specific mount properties
    #[serde(default)]
    pub props: Option<serde_json::Value>,
}

/// Rejected panel configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration names no id
    #[error("panel config requires an id")]
    MissingId,
    /// The configuration names no app
    #[error("panel config requires a name")]
    MissingName,
}

/// A validated panel configuration with defaults applied
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Unique panel id within the shell
    pub id: String,
    /// Logical app name resolved against the asset manifest
    pub name: String,
    /// Navigation label
    pub display_name: String,
    /// Navigation sort weight, lower sorts first
    pub weight: i32,
    /// Bundle version to load
    pub version: String,
    /// Whether the panel appears in the navigation
    pub navigable: bool,
    /// Kind of panel
    pub kind: PanelKind,
    /// Module-specific mount properties
    pub props: serde_json::Value,
}

impl PanelConfig {
    /// Validates a raw spec, rejecting configs without id or name
    pub fn new(spec: PanelConfigSpec) -> Result<Self, ConfigError> {
        let id = spec
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingId)?;
        let name = spec
            .name
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingName)?;
        Ok(Self {
            display_name: spec.display_name.unwrap_or_else(|| name.clone()),
            weight: spec.weight.unwrap_or(0),
            version: spec.version.unwrap_or_else(|| "latest".to_string()),
            navigable: spec.navigable.unwrap_or(true),
            kind: spec.kind.unwrap_or_default(),
            props: spec.props.unwrap_or_default(),
            id,
            name,
        })
    }
}

/// Partition configs into navigable apps and everything else
///
/// The first half feeds the navigation; the second is mounted without a
/// navigation entry.
#[must_use]
pub fn split_navigable(configs: Vec<PanelConfig>) -> (Vec<PanelConfig>, Vec<PanelConfig>) {
    configs
        .into_iter()
        .partition(|c| c.navigable && c.kind == PanelKind::App)
}

/// Pick the panel to activate on shell startup
///
/// A previously active id wins if it still names a known config;
/// otherwise the lowest-weight navigable app becomes active (ties broken
/// by id for determinism).
#[must_use]
pub fn initial_active<'a>(
    configs: &'a [PanelConfig],
    previous: Option<&str>,
) -> Option<&'a PanelConfig> {
    if let Some(prev) = previous {
        if let Some(config) = configs.iter().find(|c| c.id == prev) {
            return Some(config);
        }
    }
    configs
        .iter()
        .filter(|c| c.navigable && c.kind == PanelKind::App)
        .min_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.id.cmp(&b.id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str, name: &str) -> PanelConfigSpec {
        PanelConfigSpec {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..PanelConfigSpec::default()
        }
    }

    #[test]
    fn config_without_id_or_name_is_rejected() {
        assert_eq!(
            PanelConfig::new(PanelConfigSpec::default()).unwrap_err(),
            ConfigError::MissingId
        );
        assert_eq!(
            PanelConfig::new(PanelConfigSpec {
                id: Some("id_test".into()),
                ..PanelConfigSpec::default()
            })
            .unwrap_err(),
            ConfigError::MissingName
        );
        assert_eq!(
            PanelConfig::new(PanelConfigSpec {
                id: Some(String::new()),
                name: Some("name_test".into()),
                ..PanelConfigSpec::default()
            })
            .unwrap_err(),
            ConfigError::MissingId
        );
    }

    #[test]
    fn config_defaults_are_applied() {
        let config = PanelConfig::new(spec("id_test", "name_test")).unwrap();
        assert_eq!(config.display_name, "name_test");
        assert_eq!(config.weight, 0);
        assert_eq!(config.version, "latest");
        assert!(config.navigable);
        assert_eq!(config.kind, PanelKind::App);
    }

    #[test]
    fn lowest_weight_navigable_app_becomes_active() {
        let mut heavy = PanelConfig::new(spec("heavy", "heavy")).unwrap();
        heavy.weight = 9;
        let zero = PanelConfig::new(spec("zero", "zero")).unwrap();
        let mut light = PanelConfig::new(spec("light", "light")).unwrap();
        light.weight = 1;

        let configs = vec![heavy, zero, light];
        assert_eq!(initial_active(&configs, None).unwrap().id, "zero");
    }

    #[test]
    fn previously_active_id_wins_when_still_known() {
        let zero = PanelConfig::new(spec("zero", "zero")).unwrap();
        let mut other = PanelConfig::new(spec("other", "other")).unwrap();
        other.weight = 5;
        let configs = vec![zero, other];

        assert_eq!(initial_active(&configs, Some("other")).unwrap().id, "other");
        assert_eq!(initial_active(&configs, Some("gone")).unwrap().id, "zero");
    }

    #[test]
    fn background_and_hidden_panels_do_not_become_active() {
        let mut background = PanelConfig::new(spec("auth", "auth")).unwrap();
        background.kind = PanelKind::Background;
        background.weight = -10;
        let mut hidden = PanelConfig::new(spec("hidden", "hidden")).unwrap();
        hidden.navigable = false;
        hidden.weight = -5;
        let app = PanelConfig::new(spec("app", "app")).unwrap();

        let configs = vec![background.clone(), hidden.clone(), app];
        assert_eq!(initial_active(&configs, None).unwrap().id, "app");

        let (nav, rest) = split_navigable(configs);
        assert_eq!(nav.len(), 1);
        assert_eq!(rest.len(), 2);
    }
}
