//! Implementation of the `joist app` command.
//!
//! Scaffolds one or more applications under `code/applications/`:
//! a `CMakeLists.txt`, an `include/` directory, and a `src/main.cpp`
//! entry point rendered from the `exe_main` template.

use crate::cli::AppArgs;
use crate::config::Config;
use crate::context::GeneratorContext;
use crate::error::{JoistError, Result};
use crate::events::{Event, EventAction, record};
use crate::scaffold;
use crate::template::{Definitions, TemplateRole, TemplateSet, validate_identifier};
use serde_json::json;
use std::path::Path;

use super::render_header;

/// Execute the `joist app` command.
pub(super) fn cmd_app(args: AppArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref().map(Path::new))?;

    for name in &args.names {
        validate_identifier(name, "application name")?;
    }

    let ctx = GeneratorContext::resolve(
        Path::new(&args.path),
        args.templates_dir.as_deref().map(Path::new),
    )?;
    require_project_tree(&ctx)?;

    let templates = TemplateSet::load(ctx.templates_dir.as_deref(), &config)?;

    for name in &args.names {
        create_application(&ctx, &templates, name)?;
        record(
            &ctx,
            &config,
            Event::new(EventAction::App).with_details(json!({ "name": name })),
        );
        println!("Created application '{}'.", name);
    }

    Ok(())
}

/// Scaffold a single application. Shared with `joist project`.
pub(super) fn create_application(
    ctx: &GeneratorContext,
    templates: &TemplateSet,
    name: &str,
) -> Result<()> {
    let app_root = ctx.application_root(name);
    scaffold::ensure_absent(&app_root)?;

    scaffold::create_directory(&app_root.join("src"))?;
    scaffold::create_directory(&app_root.join("include"))?;

    let description = format!("{} application", name);
    let mut defs = Definitions::new()
        .with("project_name", name)
        .with("project_description", description.as_str());

    scaffold::write_rendered(
        templates.get(TemplateRole::AppCmake),
        &defs,
        &app_root.join("CMakeLists.txt"),
    )?;

    let header = render_header(
        templates,
        name,
        "main.cpp",
        &format!("Main {} application source file", name),
    )?;
    defs.set("header", header);
    scaffold::write_rendered(
        templates.get(TemplateRole::ExeMain),
        &defs,
        &app_root.join("src").join("main.cpp"),
    )?;

    scaffold::append_subdirectories(&ctx.applications_cmake_path(), &[name])
}

/// Check that the target root looks like a joist-generated project.
fn require_project_tree(ctx: &GeneratorContext) -> Result<()> {
    let cmake = ctx.applications_cmake_path();
    if !cmake.exists() {
        return Err(JoistError::UserError(format!(
            "'{}' is not a joist project (missing '{}'); run `joist project` first",
            ctx.root_path.display(),
            cmake.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::create_test_project;
    use std::fs;

    fn app_args(root: &std::path::Path, names: &[&str]) -> AppArgs {
        AppArgs {
            names: names.iter().map(|s| s.to_string()).collect(),
            path: root.to_string_lossy().into_owned(),
            templates_dir: None,
            config: None,
        }
    }

    #[test]
    fn scaffolds_application_tree() {
        let (_tmp, root) = create_test_project("demo");

        cmd_app(app_args(&root, &["cli"])).unwrap();

        let app_root = root.join("code/applications/cli");
        assert!(app_root.join("CMakeLists.txt").is_file());
        assert!(app_root.join("include").is_dir());

        let main_cpp = fs::read_to_string(app_root.join("src/main.cpp")).unwrap();
        assert!(main_cpp.contains("int main(int argc, char *argv[])"));
        assert!(main_cpp.contains("std::cout << \"cli\""));
        assert!(main_cpp.contains("File:        main.cpp"));
        assert!(main_cpp.contains("Description: Main cli application source file"));

        let cmake = fs::read_to_string(app_root.join("CMakeLists.txt")).unwrap();
        assert!(cmake.contains("project(cli"));
        assert!(cmake.contains("add_executable(cli"));
    }

    #[test]
    fn registers_app_in_aggregation_cmake() {
        let (_tmp, root) = create_test_project("demo");

        cmd_app(app_args(&root, &["cli", "daemon"])).unwrap();

        let cmake = fs::read_to_string(root.join("code/applications/CMakeLists.txt")).unwrap();
        assert!(cmake.contains("add_subdirectory(cli)"));
        assert!(cmake.contains("add_subdirectory(daemon)"));
    }

    #[test]
    fn refuses_existing_application() {
        let (_tmp, root) = create_test_project("demo");

        cmd_app(app_args(&root, &["cli"])).unwrap();
        let err = cmd_app(app_args(&root, &["cli"])).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("will not overwrite"));
    }

    #[test]
    fn rejects_invalid_name_before_creating_anything() {
        let (_tmp, root) = create_test_project("demo");

        let err = cmd_app(app_args(&root, &["good", "bad name"])).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(!root.join("code/applications/good").exists());
    }

    #[test]
    fn fails_outside_a_project_tree() {
        let tmp = tempfile::TempDir::new().unwrap();

        let err = cmd_app(app_args(tmp.path(), &["cli"])).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("not a joist project"));
    }

    #[test]
    #[serial_test::serial]
    fn default_path_is_the_working_directory() {
        let (_tmp, root) = create_test_project("demo");
        let _guard = crate::test_support::DirGuard::new(&root);

        cmd_app(AppArgs {
            names: vec!["cli".to_string()],
            path: ".".to_string(),
            templates_dir: None,
            config: None,
        })
        .unwrap();

        assert!(root.join("code/applications/cli/src/main.cpp").is_file());
    }

    #[test]
    fn appends_app_events() {
        let (_tmp, root) = create_test_project("demo");

        cmd_app(app_args(&root, &["cli"])).unwrap();

        let log = fs::read_to_string(root.join(".joist/events.ndjson")).unwrap();
        // One project event from the fixture, one app event.
        assert_eq!(log.lines().count(), 2);
        assert!(log.contains("\"action\":\"app\""));
    }
}
