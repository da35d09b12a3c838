//! Request builder for the REST/watch gateway.
use crate::{
    params::{DeleteParams, ListParams, PostParams},
    Error, Result,
};

/// Default watch timeout in seconds, kept under common LB idle cutoffs
const WATCH_TIMEOUT_SECS: u32 = 290;

/// A Greenhouse gateway request builder
///
/// Takes a resource's url path and supplies constructors for the
/// operations the admin console issues. All operations return
/// [`http::Request`] objects for the transport (a collaborator, not part
/// of this crate) to execute.
#[derive(Debug, Clone)]
pub struct Request {
    /// The path component of a url
    pub url_path: String,
}

impl Request {
    /// New request with a resource's url path
    pub fn new<S: Into<String>>(url_path: S) -> Self {
        Self {
            url_path: url_path.into(),
        }
    }
}

/// Convenience methods found from API conventions
impl Request {
    /// List a collection of a resource
    pub fn list(&self, lp: &ListParams) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}?", self.url_path);
        let mut qp = form_urlencoded::Serializer::new(target);
        if let Some(fields) = &lp.field_selector {
            qp.append_pair("fieldSelector", fields);
        }
        if let Some(labels) = &lp.label_selector {
            qp.append_pair("labelSelector", labels);
        }
        let urlstr = qp.finish();
        http::Request::get(urlstr).body(vec![]).map_err(Error::BuildRequest)
    }

    /// Watch a collection at a given version
    pub fn watch(&self, lp: &ListParams, ver: &str) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}?", self.url_path);
        let mut qp = form_urlencoded::Serializer::new(target);
        qp.append_pair("watch", "true");
        qp.append_pair("resourceVersion", ver);
        qp.append_pair(
            "timeoutSeconds",
            &lp.timeout.unwrap_or(WATCH_TIMEOUT_SECS).to_string(),
        );
        if let Some(fields) = &lp.field_selector {
            qp.append_pair("fieldSelector", fields);
        }
        if let Some(labels) = &lp.label_selector {
            qp.append_pair("labelSelector", labels);
        }
        let urlstr = qp.finish();
        http::Request::get(urlstr).body(vec![]).map_err(Error::BuildRequest)
    }

    /// Get a single instance
    pub fn get(&self, name: &str) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}/{}", self.url_path, name);
        http::Request::get(target).body(vec![]).map_err(Error::BuildRequest)
    }

    /// Create an instance of a resource
    pub fn create(&self, pp: &PostParams, data: Vec<u8>) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}?", self.url_path);
        let mut qp = form_urlencoded::Serializer::new(target);
        if pp.dry_run {
            qp.append_pair("dryRun", "All");
        }
        let urlstr = qp.finish();
        http::Request::post(urlstr).body(data).map_err(Error::BuildRequest)
    }

    /// Replace an instance of a resource
    ///
    /// Requires `metadata.resourceVersion` set in `data` to the version
    /// the edit was based on; the gateway rejects stale writes.
    pub fn replace(&self, name: &str, pp: &PostParams, data: Vec<u8>) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}/{}?", self.url_path, name);
        let mut qp = form_urlencoded::Serializer::new(target);
        if pp.dry_run {
            qp.append_pair("dryRun", "All");
        }
        let urlstr = qp.finish();
        http::Request::put(urlstr).body(data).map_err(Error::BuildRequest)
    }

    /// Delete an instance of a resource
    pub fn delete(&self, name: &str, dp: &DeleteParams) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}/{}", self.url_path, name);
        let body = serde_json::to_vec(&dp)?;
        http::Request::delete(target).body(body).map_err(Error::BuildRequest)
    }
}
