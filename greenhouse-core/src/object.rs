//! Generic object list wrapper.
use crate::metadata::ListMeta;
use serde::{Deserialize, Serialize};

/// A generic Greenhouse object list
///
/// The gateway exposes collection queries in the apimachinery `List`
/// shape; this is the one iterable wrapper used for all kinds instead of
/// a `ClusterList`, `PluginList`, etc. per kind.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ObjectList<T>
where
    T: Clone,
{
    /// ListMeta - only really used for its `resourceVersion`
    #[serde(default)]
    pub metadata: ListMeta,

    /// The items we are actually interested in
    #[serde(bound(deserialize = "Vec<T>: Deserialize<'de>"))]
    pub items: Vec<T>,
}

impl<T: Clone> ObjectList<T> {
    /// Returns an Iterator over the elements of this ObjectList
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> IntoIterator for ObjectList<T> {
    type IntoIter = std::vec::IntoIter<Self::Item>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a ObjectList<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
