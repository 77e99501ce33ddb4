//! Command implementations for joist.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers every scaffolding command shares.

mod app;
mod lib_cmd;
mod project;
mod render;
mod templates;

use crate::cli::Command;
use crate::error::Result;
use crate::template::{Definitions, TemplateRole, TemplateSet};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Project(args) => project::cmd_project(args),
        Command::App(args) => app::cmd_app(args),
        Command::Lib(args) => lib_cmd::cmd_lib(args),
        Command::Render(args) => render::cmd_render(args),
        Command::Templates(args) => templates::cmd_templates(args),
    }
}

/// Render the comment header that becomes the `{header}` value of a
/// generated source file.
pub(crate) fn render_header(
    templates: &TemplateSet,
    project_name: &str,
    filename: &str,
    description: &str,
) -> Result<String> {
    let defs = Definitions::new()
        .with("project_name", project_name)
        .with("filename", filename)
        .with("description", description);

    Ok(templates.get(TemplateRole::CommentHeader).render(&defs)?)
}
