//! Static content responder
//!
//! Resolves request paths against the configured public directory and turns
//! the outcome into a response. Every outcome is a `200 OK`: missing and
//! unreadable files are reported in a plain-text body rather than through the
//! status code.

use std::path::PathBuf;

use crate::config::StaticFilesConfig;
use crate::files::store::{DiskStore, FileStore};
use crate::http::response::Response;

/// Serves files from a single base directory.
#[derive(Debug, Clone)]
pub struct StaticResponder<S = DiskStore> {
    config: StaticFilesConfig,
    store: S,
}

impl StaticResponder<DiskStore> {
    /// Responder reading straight from disk.
    pub fn from_disk(config: StaticFilesConfig) -> Self {
        Self::new(config, DiskStore)
    }
}

impl<S: FileStore> StaticResponder<S> {
    pub fn new(config: StaticFilesConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.config.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Joins the request path onto the base directory.
    ///
    /// The path is taken verbatim (no percent decoding, query strings are
    /// kept as part of the file name). Empty and `.` segments are dropped and
    /// `..` removes the previous segment. Returns `None` when a `..` would
    /// climb above the base directory.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let mut segments: Vec<&str> = Vec::new();

        for segment in request_path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop()?;
                }
                name => segments.push(name),
            }
        }

        let mut candidate = self.config.root.clone();
        candidate.extend(segments);
        Some(candidate)
    }

    /// Produces the response for one request path.
    ///
    /// The existence check runs first; the file is only read when it reports
    /// the path as present.
    pub async fn respond(&self, request_path: &str) -> Response {
        let Some(candidate) = self.resolve(request_path) else {
            tracing::warn!(path = %request_path, "Request path escapes public directory");
            return not_found(request_path);
        };

        tracing::debug!(
            path = %request_path,
            file = %candidate.display(),
            "Resolved request path"
        );

        if !self.store.exists(&candidate).await {
            tracing::warn!(path = %request_path, file = %candidate.display(), "File does not exist");
            return not_found(request_path);
        }

        match self.store.read(&candidate).await {
            Ok(data) => {
                tracing::debug!(path = %request_path, bytes = data.len(), "Serving file");
                Response::html(data)
            }
            Err(e) => {
                tracing::warn!(
                    path = %request_path,
                    file = %candidate.display(),
                    error = %e,
                    "Unable to read file"
                );
                Response::text(format!("Unable to read file {request_path}"))
            }
        }
    }
}

fn not_found(request_path: &str) -> Response {
    Response::text(format!("File does not exist {request_path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn responder() -> StaticResponder {
        StaticResponder::from_disk(StaticFilesConfig::new("/srv/public"))
    }

    #[test]
    fn resolve_strips_leading_slash() {
        let path = responder().resolve("/index.html").unwrap();
        assert_eq!(path, Path::new("/srv/public/index.html"));
    }

    #[test]
    fn resolve_root_is_base_directory() {
        assert_eq!(responder().resolve("/").unwrap(), Path::new("/srv/public"));
    }

    #[test]
    fn resolve_collapses_dot_segments() {
        let path = responder().resolve("/a/./b/../c.txt").unwrap();
        assert_eq!(path, Path::new("/srv/public/a/c.txt"));
    }

    #[test]
    fn resolve_rejects_escape() {
        assert!(responder().resolve("/../etc/passwd").is_none());
        assert!(responder().resolve("/a/../../secret").is_none());
    }

    #[test]
    fn resolve_keeps_query_string() {
        let path = responder().resolve("/page.html?v=1").unwrap();
        assert_eq!(path, Path::new("/srv/public/page.html?v=1"));
    }
}
