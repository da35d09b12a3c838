/// Query parameter key for the active panel id
pub const ACTIVE_PANEL_KEY: &str = "a";
/// Query parameter key for the open detail target
pub const DETAIL_KEY: &str = "d";
/// Query parameter key for the open cluster detail target
pub const CLUSTER_DETAIL_KEY: &str = "cd";

/// The shell state round-tripped through the page url
///
/// Kept to a few short keys so deep links stay shareable; unknown keys in
/// an incoming query are preserved-by-omission (ignored here, untouched
/// by whoever owns the rest of the url).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlState {
    /// Active panel id (`a`)
    pub active_panel: Option<String>,
    /// Open detail target (`d`)
    pub detail: Option<String>,
    /// Open cluster detail target (`cd`)
    pub cluster_detail: Option<String>,
}

impl UrlState {
    /// Serialize to a query string fragment
    #[must_use]
    pub fn encode(&self) -> String {
        let mut qp = form_urlencoded::Serializer::new(String::new());
        if let Some(active) = &self.active_panel {
            qp.append_pair(ACTIVE_PANEL_KEY, active);
        }
        if let Some(detail) = &self.detail {
            qp.append_pair(DETAIL_KEY, detail);
        }
        if let Some(cluster_detail) = &self.cluster_detail {
            qp.append_pair(CLUSTER_DETAIL_KEY, cluster_detail);
        }
        qp.finish()
    }

    /// Parse from a query string fragment, ignoring unknown keys
    #[must_use]
    pub fn decode(query: &str) -> Self {
        let mut state = UrlState::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                ACTIVE_PANEL_KEY => state.active_panel = Some(value.into_owned()),
                DETAIL_KEY => state.detail = Some(value.into_owned()),
                CLUSTER_DETAIL_KEY => state.cluster_detail = Some(value.into_owned()),
                _ => {}
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::UrlState;

    #[test]
    fn encode_decode_roundtrips() {
        let state = UrlState {
            active_panel: Some("cluster-admin".into()),
            detail: Some("ingress nginx".into()),
            cluster_detail: Some("obs-eu".into()),
        };
        assert_eq!(UrlState::decode(&state.encode()), state);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let state = UrlState::decode("a=team-admin&org=acme&utm_source=mail");
        assert_eq!(state.active_panel.as_deref(), Some("team-admin"));
        assert_eq!(state.detail, None);
    }

    #[test]
    fn empty_state_encodes_to_empty_query() {
        assert_eq!(UrlState::default().encode(), "");
        assert_eq!(UrlState::decode(""), UrlState::default());
    }
}
