use greenhouse_core::GreenhouseResource;
use std::fmt;

/// A name-keyed reference to an object in a watched collection
///
/// This is the unique key of a [`Store`](super::Store): at most one entry
/// per `ObjectRef` exists in a collection at any time.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ObjectRef {
    /// The name of the object
    pub name: String,
    /// The namespace of the object
    pub namespace: Option<String>,
}

impl ObjectRef {
    /// Creates an `ObjectRef` from a name alone
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Scopes the reference to a namespace
    #[must_use]
    pub fn within(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Creates an `ObjectRef` from a resource's metadata
    ///
    /// Unpersisted objects without a name map to the empty name.
    pub fn from_obj<K: GreenhouseResource>(obj: &K) -> Self {
        Self {
            name: obj.name().unwrap_or_default().into(),
            namespace: obj.namespace().map(Into::into),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}.{}", self.name, ns),
            None => write!(f, "{}", self.name),
        }
    }
}
