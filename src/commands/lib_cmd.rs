//! Implementation of the `joist lib` command.
//!
//! Scaffolds one or more libraries under `code/libraries/`. Each library
//! gets a `CMakeLists.txt`, a public header at `include/<name>/<name>.h`,
//! an implementation source at `src/<name>.cpp`, and a unit-test skeleton
//! at `test/<name>_test.cpp`.
//!
//! The test skeleton is the generation smoke test: a fixture class that
//! rejects copy and move, plus one test case that unconditionally fails
//! until real test logic replaces it.

use crate::cli::LibArgs;
use crate::config::Config;
use crate::context::GeneratorContext;
use crate::error::{JoistError, Result};
use crate::events::{Event, EventAction, record};
use crate::scaffold;
use crate::template::{Definitions, TemplateRole, TemplateSet, validate_identifier};
use serde_json::json;
use std::path::Path;

use super::render_header;

/// Execute the `joist lib` command.
pub(super) fn cmd_lib(args: LibArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref().map(Path::new))?;

    for name in &args.names {
        validate_identifier(name, "library name")?;
    }
    let namespace = args
        .namespace
        .clone()
        .unwrap_or_else(|| config.namespace.clone());
    validate_identifier(&namespace, "namespace")?;

    let ctx = GeneratorContext::resolve(
        Path::new(&args.path),
        args.templates_dir.as_deref().map(Path::new),
    )?;
    require_project_tree(&ctx)?;

    let templates = TemplateSet::load(ctx.templates_dir.as_deref(), &config)?;

    for name in &args.names {
        create_library(&ctx, &templates, &config, &namespace, name)?;
        record(
            &ctx,
            &config,
            Event::new(EventAction::Lib)
                .with_details(json!({ "name": name, "namespace": namespace })),
        );
        println!("Created library '{}'.", name);
    }

    Ok(())
}

/// Scaffold a single library. Shared with `joist project`.
pub(super) fn create_library(
    ctx: &GeneratorContext,
    templates: &TemplateSet,
    config: &Config,
    namespace: &str,
    name: &str,
) -> Result<()> {
    let lib_root = ctx.library_root(name);
    scaffold::ensure_absent(&lib_root)?;

    scaffold::create_directory(&lib_root.join("src"))?;
    scaffold::create_directory(&lib_root.join("include").join(name))?;
    scaffold::create_directory(&lib_root.join("test"))?;

    let description = format!("{} library", name);
    let class = format!("{}{}", name, config.class_suffix);
    let test_class = format!("{}{}", name, config.test_class_suffix);

    let base = Definitions::new()
        .with("project_name", name)
        .with("project_description", description.as_str())
        .with("namespace", namespace)
        .with("libname", name);

    scaffold::write_rendered(
        templates.get(TemplateRole::LibCmake),
        &base,
        &lib_root.join("CMakeLists.txt"),
    )?;

    // Public header
    let filename = format!("{}.h", name);
    let header = render_header(templates, name, &filename, "Library header file")?;
    let defs = base
        .clone()
        .with("class", class.as_str())
        .with("header", header.as_str());
    scaffold::write_rendered(
        templates.get(TemplateRole::LibHeader),
        &defs,
        &lib_root.join("include").join(name).join(&filename),
    )?;

    // Implementation source
    let filename = format!("{}.cpp", name);
    let header = render_header(templates, name, &filename, "Library source file")?;
    let defs = base
        .clone()
        .with("class", class.as_str())
        .with("header", header.as_str());
    scaffold::write_rendered(
        templates.get(TemplateRole::LibSource),
        &defs,
        &lib_root.join("src").join(&filename),
    )?;

    // Unit-test skeleton
    let filename = format!("{}_test.cpp", name);
    let header = render_header(templates, name, &filename, "Library test skeleton")?;
    let defs = base
        .with("class", test_class.as_str())
        .with("header", header.as_str());
    scaffold::write_rendered(
        templates.get(TemplateRole::TestSource),
        &defs,
        &lib_root.join("test").join(&filename),
    )?;

    scaffold::append_subdirectories(&ctx.libraries_cmake_path(), &[name])
}

/// Check that the target root looks like a joist-generated project.
fn require_project_tree(ctx: &GeneratorContext) -> Result<()> {
    let cmake = ctx.libraries_cmake_path();
    if !cmake.exists() {
        return Err(JoistError::UserError(format!(
            "'{}' is not a joist project (missing '{}'); run `joist project` first",
            ctx.root_path.display(),
            cmake.display()
        )));
    }
    Ok(())
}
