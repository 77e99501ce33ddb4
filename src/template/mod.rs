//! Template model for joist.
//!
//! A template is a static, read-only body string plus the set of placeholder
//! names it declares. Rendering substitutes declared `{name}` occurrences
//! from a [`Definitions`] map and leaves every other brace untouched (the
//! bodies are C++ and CMake text).
//!
//! [`TemplateRole`] enumerates the artifacts joist can produce. Each role has
//! a built-in body; a template directory may override any role by file name.

mod builtin;
mod definitions;
mod engine;

pub use builtin::CMAKE_WARNINGS;
pub use definitions::{Definitions, is_valid_identifier, validate_identifier};
pub use engine::{TemplateError, scan_placeholders};

use crate::config::Config;
use crate::error::{JoistError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The artifacts joist knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemplateRole {
    /// Root `CMakeLists.txt` of a project.
    RootCmake,
    /// Intermediate `CMakeLists.txt` that aggregates subdirectories.
    SubdirCmake,
    /// Per-application `CMakeLists.txt`.
    AppCmake,
    /// Per-library `CMakeLists.txt`.
    LibCmake,
    /// Application entry point (`src/main.cpp`).
    ExeMain,
    /// Public library header (`include/<lib>/<lib>.h`).
    LibHeader,
    /// Library implementation source (`src/<lib>.cpp`).
    LibSource,
    /// Unit-test skeleton (`test/<lib>_test.cpp`).
    TestSource,
    /// Comment block rendered into the `header` definition.
    CommentHeader,
}

impl TemplateRole {
    /// All roles, in listing order.
    pub const ALL: [TemplateRole; 9] = [
        TemplateRole::RootCmake,
        TemplateRole::SubdirCmake,
        TemplateRole::AppCmake,
        TemplateRole::LibCmake,
        TemplateRole::ExeMain,
        TemplateRole::LibHeader,
        TemplateRole::LibSource,
        TemplateRole::TestSource,
        TemplateRole::CommentHeader,
    ];

    /// Stable name used on the CLI and as a config key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateRole::RootCmake => "root_cmake",
            TemplateRole::SubdirCmake => "subdir_cmake",
            TemplateRole::AppCmake => "app_cmake",
            TemplateRole::LibCmake => "lib_cmake",
            TemplateRole::ExeMain => "exe_main",
            TemplateRole::LibHeader => "lib_header",
            TemplateRole::LibSource => "lib_source",
            TemplateRole::TestSource => "test_source",
            TemplateRole::CommentHeader => "comment_header",
        }
    }

    /// Parse a role from its stable name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.as_str() == s)
    }

    /// File name looked up in a template directory to override this role.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            TemplateRole::RootCmake => "root_CMakeLists.txt",
            TemplateRole::SubdirCmake => "subdir_CMakeLists.txt",
            TemplateRole::AppCmake => "app_CMakeLists.txt",
            TemplateRole::LibCmake => "lib_CMakeLists.txt",
            TemplateRole::ExeMain => "exe_main.cpp",
            TemplateRole::LibHeader => "lib.h",
            TemplateRole::LibSource => "lib.cpp",
            TemplateRole::TestSource => "test.cpp",
            TemplateRole::CommentHeader => "comment_header.txt",
        }
    }

    /// Built-in body for this role.
    pub fn builtin_body(&self) -> &'static str {
        match self {
            TemplateRole::RootCmake => builtin::ROOT_CMAKE,
            TemplateRole::SubdirCmake => builtin::SUBDIR_CMAKE,
            TemplateRole::AppCmake => builtin::APP_CMAKE,
            TemplateRole::LibCmake => builtin::LIB_CMAKE,
            TemplateRole::ExeMain => builtin::EXE_MAIN,
            TemplateRole::LibHeader => builtin::LIB_HEADER,
            TemplateRole::LibSource => builtin::LIB_SOURCE,
            TemplateRole::TestSource => builtin::TEST_SOURCE,
            TemplateRole::CommentHeader => builtin::COMMENT_HEADER,
        }
    }

    /// Placeholder names this role substitutes.
    ///
    /// Every name listed here must be defined at render time. Brace content
    /// outside this set is literal text.
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            TemplateRole::RootCmake => &["projectname", "project_description"],
            TemplateRole::SubdirCmake => &["projectname"],
            TemplateRole::AppCmake => &["project_name", "project_description"],
            TemplateRole::LibCmake => &["project_name", "project_description"],
            TemplateRole::ExeMain => &["header", "project_name"],
            TemplateRole::LibHeader => &["header", "namespace", "class"],
            TemplateRole::LibSource => &["header", "namespace", "class", "libname"],
            TemplateRole::TestSource => &["header", "namespace", "class", "libname"],
            TemplateRole::CommentHeader => &["year", "filename", "description", "project_name"],
        }
    }
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a template body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Embedded in the binary.
    Builtin,
    /// Read from an override file.
    File(PathBuf),
}

/// A renderable template: role, body, and provenance.
#[derive(Debug, Clone)]
pub struct Template {
    role: TemplateRole,
    body: String,
    source: TemplateSource,
}

impl Template {
    /// The built-in template for a role.
    pub fn builtin(role: TemplateRole) -> Self {
        Self {
            role,
            body: role.builtin_body().to_string(),
            source: TemplateSource::Builtin,
        }
    }

    /// Load an override body from a file.
    pub fn from_file(role: TemplateRole, path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path).map_err(|e| {
            JoistError::IoError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self {
            role,
            body,
            source: TemplateSource::File(path.to_path_buf()),
        })
    }

    pub fn role(&self) -> TemplateRole {
        self.role
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render this template against a definitions map.
    pub fn render(&self, definitions: &Definitions) -> std::result::Result<String, TemplateError> {
        engine::render(&self.body, self.role.placeholders(), definitions)
    }
}

/// The resolved template for every role, override-aware.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: BTreeMap<TemplateRole, Template>,
}

impl TemplateSet {
    /// Built-in templates only.
    pub fn builtin_only() -> Self {
        let templates = TemplateRole::ALL
            .iter()
            .map(|&role| (role, Template::builtin(role)))
            .collect();
        Self { templates }
    }

    /// Resolve templates, preferring files in `templates_dir` over built-ins.
    ///
    /// A role's file name defaults to [`TemplateRole::default_file_name`] and
    /// can be renamed via the config `templates` map. A configured override
    /// that cannot be found is an error; an absent default file silently
    /// falls back to the built-in body.
    pub fn load(templates_dir: Option<&Path>, config: &Config) -> Result<Self> {
        let mut templates = BTreeMap::new();

        for &role in &TemplateRole::ALL {
            let configured = config.templates.get(role.as_str());
            let file_name = configured
                .map(String::as_str)
                .unwrap_or_else(|| role.default_file_name());

            let template = match templates_dir {
                Some(dir) => {
                    let path = dir.join(file_name);
                    if path.exists() {
                        Template::from_file(role, &path)?
                    } else if configured.is_some() {
                        return Err(JoistError::UserError(format!(
                            "template override '{}' configured for {} does not exist in '{}'",
                            file_name,
                            role,
                            dir.display()
                        )));
                    } else {
                        Template::builtin(role)
                    }
                }
                None => {
                    if configured.is_some() {
                        return Err(JoistError::UserError(format!(
                            "template override '{}' configured for {} but no template directory was given (use --templates-dir)",
                            file_name, role
                        )));
                    }
                    Template::builtin(role)
                }
            };

            templates.insert(role, template);
        }

        Ok(Self { templates })
    }

    /// The resolved template for a role.
    pub fn get(&self, role: TemplateRole) -> &Template {
        // Construction always populates every role.
        &self.templates[&role]
    }
}
