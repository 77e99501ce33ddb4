//! Implementation of the `joist project` command.
//!
//! Creates a fresh project tree:
//!
//! 1. Root `CMakeLists.txt` rendered from `root_cmake`
//! 2. `cmake/warnings.cmake` helper
//! 3. `code/`, `code/applications/`, `code/libraries/` with their
//!    aggregating `CMakeLists.txt` files
//! 4. Requested applications and libraries, reusing the `app`/`lib`
//!    scaffolding
//!
//! The root path must not exist; nothing is overwritten.

use crate::cli::ProjectArgs;
use crate::config::Config;
use crate::context::GeneratorContext;
use crate::error::Result;
use crate::events::{Event, EventAction, record};
use crate::fs::atomic_write_file;
use crate::scaffold;
use crate::template::{CMAKE_WARNINGS, Definitions, TemplateRole, TemplateSet, validate_identifier};
use serde_json::json;
use std::path::Path;

use super::app::create_application;
use super::lib_cmd::create_library;

/// Execute the `joist project` command.
pub(super) fn cmd_project(args: ProjectArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref().map(Path::new))?;

    // Validate every identifier before touching the filesystem.
    validate_identifier(&args.name, "project name")?;
    let namespace = args
        .namespace
        .clone()
        .unwrap_or_else(|| config.namespace.clone());
    validate_identifier(&namespace, "namespace")?;
    for app in &args.apps {
        validate_identifier(app, "application name")?;
    }
    for lib in &args.libs {
        validate_identifier(lib, "library name")?;
    }

    let root = args.path.clone().unwrap_or_else(|| args.name.clone());
    let ctx = GeneratorContext::resolve(
        Path::new(&root),
        args.templates_dir.as_deref().map(Path::new),
    )?;

    scaffold::ensure_absent(&ctx.root_path)?;

    let templates = TemplateSet::load(ctx.templates_dir.as_deref(), &config)?;

    let description = args
        .description
        .clone()
        .unwrap_or_else(|| format!("{} project", args.name));
    let defs = Definitions::new()
        .with("projectname", args.name.as_str())
        .with("project_description", description.as_str());

    // Root scaffolding
    scaffold::create_directory(&ctx.root_path)?;
    scaffold::write_rendered(
        templates.get(TemplateRole::RootCmake),
        &defs,
        &ctx.root_cmake_path(),
    )?;
    atomic_write_file(ctx.cmake_dir().join("warnings.cmake"), CMAKE_WARNINGS)?;

    // code/ aggregation tree
    let subdir = templates.get(TemplateRole::SubdirCmake);
    scaffold::create_directory(&ctx.code_root())?;
    scaffold::write_rendered(subdir, &defs, &ctx.code_cmake_path())?;
    scaffold::append_subdirectories(&ctx.code_cmake_path(), &["applications", "libraries"])?;

    scaffold::create_directory(&ctx.applications_root())?;
    scaffold::write_rendered(subdir, &defs, &ctx.applications_cmake_path())?;

    scaffold::create_directory(&ctx.libraries_root())?;
    scaffold::write_rendered(subdir, &defs, &ctx.libraries_cmake_path())?;

    for app in &args.apps {
        create_application(&ctx, &templates, app)?;
    }
    for lib in &args.libs {
        create_library(&ctx, &templates, &config, &namespace, lib)?;
    }

    record(
        &ctx,
        &config,
        Event::new(EventAction::Project).with_details(json!({
            "name": args.name,
            "namespace": namespace,
            "apps": args.apps,
            "libs": args.libs,
        })),
    );

    println!("Created project '{}'.", args.name);
    println!();
    println!("Project root: {}", ctx.root_path.display());
    println!("Namespace:    {}", namespace);
    println!();
    println!("Layout:");
    println!("  CMakeLists.txt");
    println!("  cmake/warnings.cmake");
    println!("  code/applications/");
    for app in &args.apps {
        println!("  code/applications/{}/", app);
    }
    println!("  code/libraries/");
    for lib in &args.libs {
        println!("  code/libraries/{}/", lib);
    }
    println!();
    println!(
        "Add more with `joist app <name> --path {}` or `joist lib <name> --path {}`.",
        root, root
    );

    Ok(())
}
