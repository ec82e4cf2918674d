//! Route compiler: load, derive and emit in one pass.

use crate::conventions::Conventions;
use crate::deriver::{derive_routes, PathStyle, RouteDescriptor};
use crate::emitter::emit_routes;
use crate::error::Result;
use crate::scanner::{EntryOrder, TreeLoader};
use log::info;
use std::path::Path;

/// Output of a compilation.
#[derive(Debug, Clone)]
pub struct CompiledRoutes {
    /// Derived route table
    pub routes: Vec<RouteDescriptor>,
    /// The table as an embeddable array literal
    pub fragment: String,
}

/// Compiles a file-based route tree into a route table.
///
/// The tree is loaded completely before derivation starts, and derived
/// completely before emission starts.
///
/// # Example
///
/// ```no_run
/// use route_migrate::compiler::RouteCompiler;
/// use route_migrate::conventions::Conventions;
/// use std::path::Path;
///
/// let compiler = RouteCompiler::new(Conventions::default());
/// let compiled = compiler.compile(Path::new("./vite/src/app")).unwrap();
/// println!("{}", compiled.fragment);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteCompiler {
    conventions: Conventions,
    order: EntryOrder,
    path_style: PathStyle,
}

impl RouteCompiler {
    pub fn new(conventions: Conventions) -> Self {
        Self {
            conventions,
            ..Self::default()
        }
    }

    pub fn with_order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_path_style(mut self, path_style: PathStyle) -> Self {
        self.path_style = path_style;
        self
    }

    /// Compiles the route tree rooted at `routes_root`.
    pub fn compile(&self, routes_root: &Path) -> Result<CompiledRoutes> {
        let logical_root = self.conventions.logical_root.clone();
        let loader =
            TreeLoader::new(routes_root.to_path_buf(), logical_root).with_order(self.order);
        let nodes = loader.load()?;

        let routes = derive_routes(&nodes, &self.conventions, self.path_style);
        info!("Derived {} top-level routes", routes.len());

        let fragment = emit_routes(&routes, &self.conventions);
        Ok(CompiledRoutes { routes, fragment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_compile_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("blog/[slug]")).unwrap();
        fs::create_dir_all(root.join("(auth)/login")).unwrap();
        fs::write(root.join("blog/page.tsx"), "").unwrap();
        fs::write(root.join("blog/[slug]/page.tsx"), "").unwrap();
        fs::write(root.join("(auth)/login/page.tsx"), "").unwrap();

        let compiler = RouteCompiler::new(Conventions::default());
        let first = compiler.compile(root).unwrap();
        let second = compiler.compile(root).unwrap();

        assert_eq!(first.fragment, second.fragment);
        assert_eq!(first.routes, second.routes);
    }

    #[test]
    fn test_compile_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let compiler = RouteCompiler::new(Conventions::default());

        let result = compiler.compile(&temp_dir.path().join("app"));

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_compile_applies_path_style() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("dashboard/settings")).unwrap();
        fs::write(root.join("dashboard/settings/page.tsx"), "").unwrap();

        let compiled = RouteCompiler::new(Conventions::default())
            .with_path_style(PathStyle::Absolute)
            .compile(root)
            .unwrap();

        assert_eq!(compiled.routes[0].children[0].path, "/dashboard/settings");
        assert!(compiled.fragment.contains("path: '/dashboard/settings',"));
    }
}
