//! Derives the route table from a loaded [`FileNode`] tree.
//!
//! Only folders become routes. Files are inspected solely to decide whether
//! their folder holds a page. A folder with no page and no routable
//! descendant is pruned, so purely organizational directories such as
//! `components/` or `utils/` never reach the route table.

use crate::conventions::Conventions;
use crate::scanner::FileNode;
use clap::ValueEnum;
use log::debug;
use serde::Serialize;

/// How the `path` of a nested route is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PathStyle {
    /// Only the segments below the parent route (`/settings`)
    #[default]
    Relative,
    /// The full URL path from the application root (`/dashboard/settings`)
    Absolute,
}

/// A routable folder and its routable descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// URL path with route groups removed
    pub path: String,
    /// Whether the folder directly contains a page file
    pub has_page: bool,
    /// Logical path of the folder, the base of its page module
    pub source: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
}

/// Derives the route descriptors for a sequence of sibling nodes.
///
/// `nodes` are the children of the routes root. The result keeps the order
/// of the folders in `nodes`.
pub fn derive_routes(
    nodes: &[FileNode],
    conventions: &Conventions,
    style: PathStyle,
) -> Vec<RouteDescriptor> {
    derive_level(nodes, 0, conventions, style)
}

fn derive_level(
    nodes: &[FileNode],
    parent_depth: usize,
    conventions: &Conventions,
    style: PathStyle,
) -> Vec<RouteDescriptor> {
    nodes
        .iter()
        .filter(|node| node.is_folder())
        .filter_map(|folder| derive_folder(folder, parent_depth, conventions, style))
        .collect()
}

fn derive_folder(
    folder: &FileNode,
    parent_depth: usize,
    conventions: &Conventions,
    style: PathStyle,
) -> Option<RouteDescriptor> {
    let from = match style {
        PathStyle::Relative => parent_depth,
        PathStyle::Absolute => 0,
    };
    let path = folder.logical_path.url_path(from, conventions);

    let has_page = folder
        .children
        .iter()
        .any(|child| child.is_file() && conventions.is_page_file(&child.name));

    let children = derive_level(
        &folder.children,
        folder.logical_path.depth(),
        conventions,
        style,
    );

    if !has_page && children.is_empty() {
        debug!("Pruning {}: no page below it", folder.logical_path);
        return None;
    }

    debug!(
        "Route {} from {} (page: {}, children: {})",
        path,
        folder.logical_path,
        has_page,
        children.len()
    );

    Some(RouteDescriptor {
        path,
        has_page,
        source: folder.logical_path.to_string(),
        children,
    })
}
