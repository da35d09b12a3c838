//! Clone-with-update functions, one closed set per kind.
//!
//! Every function returns a new resource with exactly the addressed field
//! changed; the input is never mutated, so an in-flight submit always
//! works from a consistent value.

/// Updates on [`Plugin`](greenhouse_core::kinds::Plugin) resources
pub mod plugin {
    use crate::edit::SecretDataEntry;
    use greenhouse_core::kinds::{OptionValue, Plugin, SecretKeySelector, ValueFromSource};
    use serde_json::Value;

    /// Set the display name; an empty string clears it
    #[must_use]
    pub fn with_display_name(plugin: &Plugin, display_name: &str) -> Plugin {
        let mut next = plugin.clone();
        next.spec.display_name = if display_name.is_empty() {
            None
        } else {
            Some(display_name.to_string())
        };
        next
    }

    /// Enable or disable the plugin deployment
    #[must_use]
    pub fn with_disabled(plugin: &Plugin, disabled: bool) -> Plugin {
        let mut next = plugin.clone();
        next.spec.disabled = disabled;
        next
    }

    /// Point the plugin at an onboarded cluster; an empty name clears it
    #[must_use]
    pub fn with_cluster_name(plugin: &Plugin, cluster_name: &str) -> Plugin {
        let mut next = plugin.clone();
        next.spec.cluster_name = if cluster_name.is_empty() {
            None
        } else {
            Some(cluster_name.to_string())
        };
        next
    }

    /// Set one option value
    ///
    /// An empty-string value deletes the entry; otherwise the matching
    /// entry is replaced (dropping any previous secret reference), or a
    /// new one appended if no entry matches.
    #[must_use]
    pub fn with_option_value(plugin: &Plugin, name: &str, value: Value) -> Plugin {
        let mut next = plugin.clone();
        if value == Value::String(String::new()) {
            next.spec.option_values.retain(|option| option.name != name);
            return next;
        }
        upsert(&mut next, name, Some(value), None);
        next
    }

    /// Set a secret-kind option
    ///
    /// The plugin only receives a reference to `secret_name`/`name`; the
    /// plaintext travels in the returned [`SecretDataEntry`], which the
    /// caller persists into the Secret alongside the plugin update.
    #[must_use]
    pub fn with_secret_option(
        plugin: &Plugin,
        secret_name: &str,
        name: &str,
        plaintext: &str,
    ) -> (Plugin, SecretDataEntry) {
        let mut next = plugin.clone();
        let selector = SecretKeySelector {
            name: secret_name.to_string(),
            key: name.to_string(),
        };
        upsert(&mut next, name, None, Some(ValueFromSource::Secret(selector)));
        let entry = SecretDataEntry {
            secret: secret_name.to_string(),
            key: name.to_string(),
            value: plaintext.to_string(),
        };
        (next, entry)
    }

    fn upsert(
        plugin: &mut Plugin,
        name: &str,
        value: Option<Value>,
        value_from: Option<ValueFromSource>,
    ) {
        if let Some(existing) = plugin
            .spec
            .option_values
            .iter_mut()
            .find(|option| option.name == name)
        {
            existing.value = value;
            existing.value_from = value_from;
        } else {
            plugin.spec.option_values.push(OptionValue {
                name: name.to_string(),
                value,
                value_from,
            });
        }
    }
}

/// Updates on [`Cluster`](greenhouse_core::kinds::Cluster) resources
pub mod cluster {
    use greenhouse_core::kinds::Cluster;

    /// Set one metadata label; an empty value removes the key
    #[must_use]
    pub fn with_label(cluster: &Cluster, key: &str, value: &str) -> Cluster {
        let mut next = cluster.clone();
        if value.is_empty() {
            next.metadata.labels.remove(key);
        } else {
            next.metadata.labels.insert(key.to_string(), value.to_string());
        }
        next
    }
}

/// Updates on [`Secret`](greenhouse_core::kinds::Secret) resources
pub mod secret {
    use greenhouse_core::{kinds::Secret, secret_data};

    /// Set one data entry from plaintext; an empty value removes the key
    ///
    /// The value is wire-encoded on the way in, matching how the gateway
    /// serves the resource.
    #[must_use]
    pub fn with_entry(secret: &Secret, key: &str, plaintext: &str) -> Secret {
        let mut next = secret.clone();
        if plaintext.is_empty() {
            next.data.remove(key);
        } else {
            next.data
                .insert(key.to_string(), secret_data::encode_value(plaintext));
        }
        next
    }
}

/// Updates on [`TeamMembership`](greenhouse_core::kinds::TeamMembership) resources
pub mod team {
    use greenhouse_core::kinds::{TeamMembership, User};

    /// Add a member, or replace the entry with the same id
    #[must_use]
    pub fn with_member(membership: &TeamMembership, user: User) -> TeamMembership {
        let mut next = membership.clone();
        if let Some(existing) = next
            .spec
            .members
            .iter_mut()
            .find(|member| member.id == user.id)
        {
            *existing = user;
        } else {
            next.spec.members.push(user);
        }
        next
    }

    /// Remove the member with the given id, if present
    #[must_use]
    pub fn without_member(membership: &TeamMembership, id: &str) -> TeamMembership {
        let mut next = membership.clone();
        next.spec.members.retain(|member| member.id != id);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::{cluster, plugin, secret, team};
    use greenhouse_core::{
        kinds::{Plugin, Secret, TeamMembership, User, ValueFromSource},
        secret_data,
    };
    use serde_json::json;

    fn plugin_with_option(name: &str, value: serde_json::Value) -> Plugin {
        let mut base = Plugin::default();
        base.spec.option_values = vec![greenhouse_core::kinds::OptionValue {
            name: name.to_string(),
            value: Some(value),
            value_from: None,
        }];
        base
    }

    #[test]
    fn option_value_replaces_matching_entry() {
        let base = plugin_with_option("replicas", json!(1));
        let next = plugin::with_option_value(&base, "replicas", json!(3));
        assert_eq!(next.spec.option_values.len(), 1);
        assert_eq!(next.spec.option_values[0].value, Some(json!(3)));
        // the original is untouched
        assert_eq!(base.spec.option_values[0].value, Some(json!(1)));
    }

    #[test]
    fn option_value_appends_when_no_entry_matches() {
        let base = plugin_with_option("replicas", json!(1));
        let next = plugin::with_option_value(&base, "logLevel", json!("debug"));
        assert_eq!(next.spec.option_values.len(), 2);
        assert_eq!(next.spec.option_values[1].name, "logLevel");
    }

    #[test]
    fn empty_string_deletes_the_entry() {
        let base = plugin_with_option("replicas", json!(1));
        let next = plugin::with_option_value(&base, "replicas", json!(""));
        assert!(next.spec.option_values.is_empty());
    }

    #[test]
    fn secret_options_become_references_plus_data_entry() {
        let base = Plugin::default();
        let (next, entry) =
            plugin::with_secret_option(&base, "ingress-keys", "tls.key", "-----BEGIN KEY-----");

        let option = &next.spec.option_values[0];
        assert_eq!(option.name, "tls.key");
        assert_eq!(option.value, None);
        match option.value_from.as_ref().unwrap() {
            ValueFromSource::Secret(selector) => {
                assert_eq!(selector.name, "ingress-keys");
                assert_eq!(selector.key, "tls.key");
            }
        }
        assert_eq!(entry.secret, "ingress-keys");
        assert_eq!(entry.value, "-----BEGIN KEY-----");
    }

    #[test]
    fn display_name_and_cluster_clear_on_empty() {
        let mut base = Plugin::default();
        base.spec.display_name = Some("Ingress".into());
        base.spec.cluster_name = Some("obs-eu".into());
        let next = plugin::with_display_name(&base, "");
        assert_eq!(next.spec.display_name, None);
        let next = plugin::with_cluster_name(&next, "");
        assert_eq!(next.spec.cluster_name, None);
    }

    #[test]
    fn cluster_labels_upsert_and_remove() {
        let base = cluster::with_label(&Default::default(), "region", "eu-de-1");
        assert_eq!(base.metadata.labels.get("region").unwrap(), "eu-de-1");
        let next = cluster::with_label(&base, "region", "");
        assert!(next.metadata.labels.is_empty());
    }

    #[test]
    fn secret_entries_are_wire_encoded() {
        let base = secret::with_entry(&Secret::default(), "clientSecret", "hunter2");
        assert_eq!(
            base.data.get("clientSecret").unwrap(),
            &secret_data::encode_value("hunter2")
        );
        let next = secret::with_entry(&base, "clientSecret", "");
        assert!(next.data.is_empty());
    }

    #[test]
    fn members_replace_by_id() {
        let user = |id: &str, email: &str| User {
            id: id.to_string(),
            email: email.to_string(),
            ..User::default()
        };
        let base = team::with_member(&TeamMembership::default(), user("u1", "a@example.com"));
        let next = team::with_member(&base, user("u1", "b@example.com"));
        assert_eq!(next.spec.members.len(), 1);
        assert_eq!(next.spec.members[0].email, "b@example.com");

        let next = team::without_member(&next, "u1");
        assert!(next.spec.members.is_empty());
    }
}
