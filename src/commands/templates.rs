//! Implementation of the `joist templates` command.
//!
//! Lists every template role, where its body currently comes from, and the
//! placeholders a render must define.

use crate::cli::TemplatesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::template::{TemplateRole, TemplateSet, TemplateSource};
use std::path::Path;

/// Execute the `joist templates` command.
pub(super) fn cmd_templates(args: TemplatesArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref().map(Path::new))?;
    let templates = TemplateSet::load(args.templates_dir.as_deref().map(Path::new), &config)?;

    println!("Available templates:");
    println!();

    for &role in &TemplateRole::ALL {
        let template = templates.get(role);

        println!("  {}:", role);
        match template.source() {
            TemplateSource::Builtin => println!("    Source:       builtin"),
            TemplateSource::File(path) => println!("    Source:       {}", path.display()),
        }

        let file_name = config
            .templates
            .get(role.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| role.default_file_name());
        println!("    File name:    {}", file_name);
        println!("    Placeholders: {}", role.placeholders().join(", "));
        println!();
    }

    println!("Override any template by placing the file in --templates-dir.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_builtin_templates() {
        let args = TemplatesArgs {
            templates_dir: None,
            config: None,
        };
        // Smoke test: listing must succeed with no template directory.
        cmd_templates(args).unwrap();
    }

    #[test]
    fn fails_cleanly_for_bad_config_path() {
        let args = TemplatesArgs {
            templates_dir: None,
            config: Some("/nonexistent/joist.yaml".to_string()),
        };
        assert!(cmd_templates(args).is_err());
    }
}
