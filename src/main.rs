//! Route Migrate - Command-line tool for moving a Next.js 13 app to Vite.
//!
//! Copies the source tree, compiles its `app/` directory into a react-router
//! route table, and writes `routes.tsx`, `app.tsx` and `index.tsx`.
//!
//! # Usage
//!
//! ```bash
//! route-migrate [OPTIONS] <FROM> <TO>
//! ```
//!
//! # Examples
//!
//! Migrate a project:
//! ```bash
//! route-migrate ./next-app/src ./vite-app/src
//! ```
//!
//! Preview the generated route module:
//! ```bash
//! route-migrate ./next-app/src ./vite-app/src --dry-run
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use route_migrate::cli;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Route Migrate starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    Ok(())
}
