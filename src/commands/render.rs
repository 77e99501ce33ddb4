//! Implementation of the `joist render` command.
//!
//! Renders one template with caller-supplied definitions, to stdout or to a
//! file. This is the scaffolding pipeline reduced to a single substitution:
//! the same templates, the same engine, no directory layout around it.

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{JoistError, Result};
use crate::fs::atomic_write_file;
use crate::template::{Definitions, TemplateRole, TemplateSet, validate_identifier};
use std::path::Path;

use super::render_header;

/// Execute the `joist render` command.
pub(super) fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref().map(Path::new))?;

    let role = TemplateRole::from_str(&args.template).ok_or_else(|| {
        JoistError::UserError(format!(
            "unknown template '{}' (expected one of: {})",
            args.template,
            TemplateRole::ALL
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    if let Some(namespace) = &args.namespace {
        validate_identifier(namespace, "namespace")?;
    }
    if let Some(class) = &args.class_name {
        validate_identifier(class, "class name")?;
    }
    if let Some(libname) = &args.libname {
        validate_identifier(libname, "library name")?;
    }

    let templates = TemplateSet::load(args.templates_dir.as_deref().map(Path::new), &config)?;
    let defs = build_definitions(&args, role, &config, &templates)?;

    let output = templates.get(role).render(&defs)?;

    match &args.out {
        Some(out) => {
            atomic_write_file(Path::new(out), &output)?;
            println!("Rendered {} to {}.", role, out);
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Assemble the definitions map for one render.
///
/// Precedence, lowest to highest: derived defaults, the named options
/// (`--namespace`, `--class`, `--libname`, `--header`), then `--set` pairs.
fn build_definitions(
    args: &RenderArgs,
    role: TemplateRole,
    config: &Config,
    templates: &TemplateSet,
) -> Result<Definitions> {
    let mut defs = Definitions::new();

    // Derived defaults keep single-file rendering usable without spelling
    // out every CMake-side field.
    let subject = args
        .libname
        .clone()
        .unwrap_or_else(|| "project".to_string());
    defs.set("projectname", subject.as_str());
    defs.set("project_name", subject.as_str());
    defs.set("project_description", format!("{} project", subject));
    defs.set(
        "filename",
        args.out
            .as_deref()
            .and_then(|out| Path::new(out).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or_else(|| role.default_file_name()),
    );
    defs.set("description", format!("Generated from the {} template", role));

    defs.set(
        "namespace",
        args.namespace.clone().unwrap_or_else(|| config.namespace.clone()),
    );
    if let Some(libname) = &args.libname {
        defs.set("libname", libname.as_str());
    }

    let class = args.class_name.clone().or_else(|| {
        args.libname.as_ref().map(|libname| match role {
            TemplateRole::TestSource => format!("{}{}", libname, config.test_class_suffix),
            _ => format!("{}{}", libname, config.class_suffix),
        })
    });
    if let Some(class) = class {
        defs.set("class", class);
    }

    for (key, value) in &args.set {
        defs.set(key.as_str(), value.as_str());
    }

    if !defs.contains("header") {
        match &args.header {
            Some(header) => defs.set("header", header.as_str()),
            None => {
                let project_name = defs
                    .get("project_name")
                    .unwrap_or(subject.as_str())
                    .to_string();
                let filename = defs.get("filename").unwrap_or("").to_string();
                let description = defs.get("description").unwrap_or("").to_string();
                let header = render_header(templates, &project_name, &filename, &description)?;
                defs.set("header", header);
            }
        }
    }

    Ok(defs)
}
