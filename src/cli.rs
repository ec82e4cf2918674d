use crate::conventions::Conventions;
use crate::deriver::PathStyle;
use crate::scanner::EntryOrder;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Route Migrate - Convert a Next.js 13 app directory into a Vite + react-router project
#[derive(Parser, Debug)]
#[command(name = "route-migrate")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Source directory of the Next.js project (the one holding `app/`)
    #[arg(value_name = "FROM")]
    pub from: PathBuf,

    /// Destination directory of the Vite project
    #[arg(value_name = "TO")]
    pub to: PathBuf,

    /// Order of sibling routes
    #[arg(long = "order", value_enum, default_value = "name")]
    pub order: EntryOrder,

    /// Write nested route paths relative to their parent or in full
    #[arg(long = "path-style", value_enum, default_value = "relative")]
    pub path_style: PathStyle,

    /// YAML file overriding the routing conventions
    #[arg(short = 'c', long = "conventions", value_name = "FILE")]
    pub conventions: Option<PathBuf>,

    /// Do not copy FROM into TO; compile what TO already holds
    #[arg(long = "skip-copy")]
    pub skip_copy: bool,

    /// Print the generated routes module instead of writing any file
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the derived route table as JSON
    #[arg(long = "dump-routes", value_name = "FILE")]
    pub dump_routes: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    let checked = if args.skip_copy { &args.to } else { &args.from };
    if !checked.exists() {
        anyhow::bail!("Path does not exist: {}", checked.display());
    }
    if !checked.is_dir() {
        anyhow::bail!("Path is not a directory: {}", checked.display());
    }

    info!("Source: {}", args.from.display());
    info!("Target: {}", args.to.display());
    info!("Entry order: {:?}", args.order);
    info!("Path style: {:?}", args.path_style);
    if let Some(ref conventions) = args.conventions {
        info!("Conventions: {}", conventions.display());
    } else {
        info!("Conventions: Next.js app router");
    }

    Ok(args)
}

/// Run the migration
pub fn run(args: CliArgs) -> Result<()> {
    use crate::compiler::RouteCompiler;
    use crate::copier::copy_tree;
    use crate::serializer::{serialize_routes_json, write_generated_files, write_to_file};
    use crate::templates::{generated_files, ROUTES_FILE};

    // Step 1: Resolve routing conventions
    let conventions = match &args.conventions {
        Some(path) => Conventions::from_yaml_file(path)
            .with_context(|| format!("Failed to load conventions from {}", path.display()))?,
        None => Conventions::default(),
    };

    // Step 2: Copy the source tree
    if args.skip_copy {
        info!("Skipping copy, compiling {} in place", args.to.display());
    } else if args.dry_run {
        info!("Dry run, compiling {} without copying", args.from.display());
    } else {
        copy_tree(&args.from, &args.to)?;
    }

    // Step 3: Compile the route tree
    let project = if args.dry_run && !args.skip_copy {
        &args.from
    } else {
        &args.to
    };
    let routes_root = project.join(&conventions.app_dir);
    info!("Compiling routes from {}", routes_root.display());

    let compiler = RouteCompiler::new(conventions)
        .with_order(args.order)
        .with_path_style(args.path_style);
    let compiled = compiler
        .compile(&routes_root)
        .with_context(|| format!("Failed to compile routes in {}", routes_root.display()))?;

    if compiled.routes.is_empty() {
        log::warn!("No routable folders found in {}", routes_root.display());
    }

    if let Some(dump_path) = &args.dump_routes {
        let json = serialize_routes_json(&compiled.routes)?;
        write_to_file(&json, dump_path)?;
        info!("Wrote route table to {}", dump_path.display());
    }

    // Step 4: Generate and write files
    let files = generated_files(&compiled.fragment, args.path_style);
    if args.dry_run {
        if let Some(routes) = files.iter().find(|f| f.name == ROUTES_FILE) {
            println!("{}", routes.contents);
        }
        return Ok(());
    }

    info!("Writing generated files to {}", args.to.display());
    let written = write_generated_files(&files, &args.to)?;
    for path in &written {
        debug!("Wrote {}", path.display());
    }

    info!("Migration complete!");
    info!("Summary:");
    info!("  - Top-level routes: {}", compiled.routes.len());
    info!("  - Files generated: {}", written.len());
    info!("Now you can review the code in {}", args.to.display());

    Ok(())
}
