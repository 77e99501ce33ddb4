//! CLI argument parsing for joist.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// joist: CMake/C++ project scaffolding generator driven by fill-in templates.
///
/// Projects are plain directory trees:
/// - A root `CMakeLists.txt` plus a `code/` tree split into
///   `applications/` and `libraries/`
/// - Every generated file is rendered from a template with `{placeholder}`
///   substitution
/// - Built-in templates can be overridden per file from a template directory
#[derive(Parser, Debug)]
#[command(name = "joist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for joist.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project tree.
    ///
    /// Lays out the root CMakeLists.txt, the code/applications and
    /// code/libraries aggregation, and any requested apps and libs.
    /// Refuses to overwrite an existing root.
    Project(ProjectArgs),

    /// Add applications to an existing project.
    ///
    /// Scaffolds src/main.cpp and a CMakeLists.txt per application and
    /// registers each in code/applications/CMakeLists.txt.
    App(AppArgs),

    /// Add libraries to an existing project.
    ///
    /// Scaffolds header, source, CMakeLists.txt, and a failing unit-test
    /// skeleton per library and registers each in
    /// code/libraries/CMakeLists.txt.
    Lib(LibArgs),

    /// Render a single template to stdout or a file.
    ///
    /// Useful for inspecting what a scaffold command would produce, or for
    /// generating one file into an existing tree by hand.
    Render(RenderArgs),

    /// List templates, their override status, and their placeholders.
    Templates(TemplatesArgs),
}

/// Arguments for the `project` command.
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project name, used in the generated CMake files.
    pub name: String,

    /// Directory to create the project in (default: ./<name>).
    #[arg(long)]
    pub path: Option<String>,

    /// Application names to scaffold (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub apps: Vec<String>,

    /// Library names to scaffold (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub libs: Vec<String>,

    /// C++ namespace for generated sources (default from config).
    #[arg(long)]
    pub namespace: Option<String>,

    /// One-line project description used in the root CMakeLists.txt.
    #[arg(long)]
    pub description: Option<String>,

    /// Directory of template files overriding the built-in bodies.
    #[arg(long)]
    pub templates_dir: Option<String>,

    /// Config file path (default: ./joist.yaml when present).
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for the `app` command.
#[derive(Parser, Debug)]
pub struct AppArgs {
    /// Application names (comma separated).
    #[arg(required = true, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Project root containing code/applications.
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Directory of template files overriding the built-in bodies.
    #[arg(long)]
    pub templates_dir: Option<String>,

    /// Config file path (default: ./joist.yaml when present).
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for the `lib` command.
#[derive(Parser, Debug)]
pub struct LibArgs {
    /// Library names (comma separated).
    #[arg(required = true, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Project root containing code/libraries.
    #[arg(long, default_value = ".")]
    pub path: String,

    /// C++ namespace for generated sources (default from config).
    #[arg(long)]
    pub namespace: Option<String>,

    /// Directory of template files overriding the built-in bodies.
    #[arg(long)]
    pub templates_dir: Option<String>,

    /// Config file path (default: ./joist.yaml when present).
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template to render (e.g. test_source; see `joist templates`).
    pub template: String,

    /// Value for the {header} placeholder (default: rendered comment header).
    #[arg(long)]
    pub header: Option<String>,

    /// Value for the {namespace} placeholder (default from config).
    #[arg(long)]
    pub namespace: Option<String>,

    /// Value for the {class} placeholder (default derived from --libname).
    #[arg(long = "class")]
    pub class_name: Option<String>,

    /// Value for the {libname} placeholder.
    #[arg(long)]
    pub libname: Option<String>,

    /// Additional definitions as KEY=VALUE (repeatable).
    #[arg(long = "set", value_parser = parse_key_val, value_name = "KEY=VALUE")]
    pub set: Vec<(String, String)>,

    /// Write output to a file instead of stdout.
    #[arg(long)]
    pub out: Option<String>,

    /// Directory of template files overriding the built-in bodies.
    #[arg(long)]
    pub templates_dir: Option<String>,

    /// Config file path (default: ./joist.yaml when present).
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for the `templates` command.
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Directory of template files overriding the built-in bodies.
    #[arg(long)]
    pub templates_dir: Option<String>,

    /// Config file path (default: ./joist.yaml when present).
    #[arg(long)]
    pub config: Option<String>,
}

/// Parse a `KEY=VALUE` definition.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
