use crate::metadata::ObjectMeta;

/// The API group all Greenhouse kinds are served under
pub const API_GROUP: &str = "greenhouse.sap";

/// The API version all Greenhouse kinds are currently served at
pub const API_VERSION: &str = "v1alpha1";

/// An accessor trait for a Greenhouse custom resource.
///
/// Every kind the admin console works with is namespaced, carries
/// [`ObjectMeta`], and SHOULD have `.metadata.name` populated once
/// persisted. Implementors provide the static type information; the
/// url composition and metadata helpers are provided.
pub trait GreenhouseResource {
    /// Singular PascalCase name of the kind
    const KIND: &'static str;

    /// Plural resource name used in url paths
    const PLURAL: &'static str;

    /// Metadata that all persisted resources must have
    fn meta(&self) -> &ObjectMeta;

    /// Metadata that all persisted resources must have
    fn meta_mut(&mut self) -> &mut ObjectMeta;

    /// Returns the api group of this kind
    fn group() -> &'static str {
        API_GROUP
    }

    /// Returns the api version of this kind
    fn version() -> &'static str {
        API_VERSION
    }

    /// Returns `group/version` as served by the gateway
    fn api_version() -> String {
        format!("{}/{}", Self::group(), Self::version())
    }

    /// Creates a url path for gateway requests for this kind
    fn url_path(namespace: &str) -> String {
        format!(
            "/apis/{group}/{version}/namespaces/{namespace}/{plural}",
            group = Self::group(),
            version = Self::version(),
            namespace = namespace,
            plural = Self::PLURAL,
        )
    }

    /// The name of the object, if persisted
    fn name(&self) -> Option<&str> {
        self.meta().name.as_deref()
    }

    /// The namespace of the object
    fn namespace(&self) -> Option<&str> {
        self.meta().namespace.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::GreenhouseResource;
    use crate::kinds::Cluster;

    #[test]
    fn url_path_composes_group_version_and_plural() {
        assert_eq!(
            Cluster::url_path("my-org"),
            "/apis/greenhouse.sap/v1alpha1/namespaces/my-org/clusters"
        );
    }

    #[test]
    fn api_version_joins_group_and_version() {
        assert_eq!(Cluster::api_version(), "greenhouse.sap/v1alpha1");
    }
}
