use crate::error::{Error, Result};
use crate::logical_path::LogicalPath;
use clap::ValueEnum;
use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Order in which sibling entries are loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EntryOrder {
    /// Sorted by file name; identical on every platform
    #[default]
    Name,
    /// Whatever order the operating system enumerates entries in
    Filesystem,
}

/// Kind of a scanned filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// One entry below the routes root.
///
/// Files never have children. A folder holds exactly one child per
/// directory entry, in the order chosen by [`EntryOrder`].
#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    pub absolute_path: PathBuf,
    pub logical_path: LogicalPath,
    pub kind: NodeKind,
    pub children: Vec<FileNode>,
}

impl FileNode {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// Loads a directory into a [`FileNode`] tree.
///
/// # Example
///
/// ```no_run
/// use route_migrate::scanner::{EntryOrder, TreeLoader};
/// use std::path::PathBuf;
///
/// let loader = TreeLoader::new(PathBuf::from("./vite/src/app"), "./app");
/// let nodes = loader.with_order(EntryOrder::Name).load().unwrap();
/// println!("Loaded {} top-level entries", nodes.len());
/// ```
pub struct TreeLoader {
    root_path: PathBuf,
    logical_root: String,
    order: EntryOrder,
}

impl TreeLoader {
    /// Creates a loader for `root_path`, whose logical paths start with
    /// `logical_root`.
    pub fn new(root_path: PathBuf, logical_root: impl Into<String>) -> Self {
        Self {
            root_path,
            logical_root: logical_root.into(),
            order: EntryOrder::default(),
        }
    }

    pub fn with_order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    /// Loads every entry below the root, depth-first.
    ///
    /// Returns the root's children; the root itself is not a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the root is missing or not a readable
    /// directory, and [`Error::Access`] if any entry below it cannot be read
    /// or has a name that is not valid UTF-8.
    /// Nothing is returned on failure.
    pub fn load(&self) -> Result<Vec<FileNode>> {
        if !self.root_path.is_dir() {
            return Err(Error::NotFound(self.root_path.clone()));
        }

        info!("Loading route tree from {}", self.root_path.display());
        let root = LogicalPath::root(self.logical_root.clone());
        let nodes = match self.load_dir(&self.root_path, &root) {
            Ok(nodes) => nodes,
            // The root passed is_dir() but still could not be listed
            Err(Error::Access { path, .. }) if path == self.root_path => {
                return Err(Error::NotFound(path));
            }
            Err(e) => return Err(e),
        };

        debug!("Loaded {} top-level entries", nodes.len());
        Ok(nodes)
    }

    fn load_dir(&self, dir: &Path, logical: &LogicalPath) -> Result<Vec<FileNode>> {
        let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
        if self.order == EntryOrder::Name {
            walker = walker.sort_by_file_name();
        }

        // Collect first so the directory handle is released before recursing
        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| access_error(dir, e))?;
            entries.push(entry);
        }

        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            let absolute_path = entry.path().to_path_buf();
            // Names end up in generated import paths, which must match the disk
            let name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => {
                    return Err(Error::Access {
                        path: absolute_path,
                        source: std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            "file name is not valid UTF-8",
                        ),
                    })
                }
            };
            let logical_path = logical.join(name.clone());

            let node = if entry.file_type().is_dir() {
                let children = self.load_dir(&absolute_path, &logical_path)?;
                FileNode {
                    name,
                    absolute_path,
                    logical_path,
                    kind: NodeKind::Folder,
                    children,
                }
            } else {
                FileNode {
                    name,
                    absolute_path,
                    logical_path,
                    kind: NodeKind::File,
                    children: Vec::new(),
                }
            };
            nodes.push(node);
        }

        Ok(nodes)
    }
}

fn access_error(dir: &Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    Error::Access { path, source }
}
