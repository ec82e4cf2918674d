//! Route Migrate - Compile a file-based route tree into an explicit route table.
//!
//! Next.js 13 derives routes from the layout of its `app/` directory. This
//! library turns such a directory into a react-router route table and the
//! source files that load it in a Vite project.
//!
//! # Conventions
//!
//! - A folder is a route if it directly contains a `page.*` file
//! - A folder named `(group)` organizes files but adds nothing to the URL
//! - A folder with no page anywhere below it is not a route
//!
//! All of these names live in [`conventions::Conventions`].
//!
//! # Architecture
//!
//! 1. [`scanner`] - Loads the route directory into a node tree
//! 2. [`deriver`] - Derives the pruned, nested route table
//! 3. [`emitter`] - Emits the table as a TypeScript array literal
//! 4. [`compiler`] - Runs the three stages in order
//! 5. [`templates`] - Wraps the table into the generated source files
//! 6. [`copier`] and [`serializer`] - Copy the project and write output
//!
//! # Example Usage
//!
//! ```no_run
//! use route_migrate::{
//!     conventions::Conventions,
//!     deriver::{derive_routes, PathStyle},
//!     emitter::emit_routes,
//!     scanner::TreeLoader,
//!     templates::render_routes_module,
//! };
//! use std::path::PathBuf;
//!
//! let conventions = Conventions::default();
//! let loader = TreeLoader::new(PathBuf::from("./vite/src/app"), conventions.logical_root.clone());
//! let nodes = loader.load().unwrap();
//!
//! let routes = derive_routes(&nodes, &conventions, PathStyle::Relative);
//! let fragment = emit_routes(&routes, &conventions);
//! println!("{}", render_routes_module(&fragment, PathStyle::Relative));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod compiler;
pub mod conventions;
pub mod copier;
pub mod deriver;
pub mod emitter;
pub mod error;
pub mod logical_path;
pub mod scanner;
pub mod serializer;
pub mod templates;
