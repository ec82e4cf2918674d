//! Logical paths of nodes in the scanned route tree.
//!
//! A [`LogicalPath`] is an ordered list of segments below the routes root,
//! rendered behind a fixed marker such as `./app`. Paths are built by
//! pushing segments, never by rewriting strings, so a directory that happens
//! to share the root's name is left alone.

use crate::conventions::Conventions;
use std::fmt;

/// Path of a node relative to the routes root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalPath {
    root: String,
    segments: Vec<String>,
}

impl LogicalPath {
    /// The routes root itself.
    pub fn root(marker: impl Into<String>) -> Self {
        Self {
            root: marker.into(),
            segments: Vec::new(),
        }
    }

    /// Returns this path extended by one segment.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self {
            root: self.root.clone(),
            segments,
        }
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Builds the URL path for the segments from `from` onwards.
    ///
    /// Route group segments are dropped. When nothing remains the result is
    /// `/`.
    pub fn url_path(&self, from: usize, conventions: &Conventions) -> String {
        let visible: Vec<&str> = self
            .segments
            .iter()
            .skip(from)
            .map(String::as_str)
            .filter(|segment| !conventions.is_route_group(segment))
            .collect();

        format!("/{}", visible.join("/"))
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
