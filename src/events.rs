//! Generation log for joist.
//!
//! Scaffolding commands append one record per action to
//! `<root>/.joist/events.ndjson` (one JSON object per line), so a generated
//! tree carries its own history of what was added and when.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (project, app, lib)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `details`: Freeform object with action-specific details
//!
//! Logging is best-effort: commands warn on a failed append but never fail
//! because of it.

use crate::config::Config;
use crate::context::GeneratorContext;
use crate::error::{JoistError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Project root created
    Project,
    /// Application scaffolded
    App,
    /// Library scaffolded
    Lib,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Project => write!(f, "project"),
            EventAction::App => write!(f, "app"),
            EventAction::Lib => write!(f, "lib"),
        }
    }
}

/// A single generation log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the action happened.
    pub ts: DateTime<Utc>,

    /// What happened.
    pub action: EventAction,

    /// Who did it (`user@host`).
    pub actor: String,

    /// Action-specific details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Event {
    /// Create an event stamped now, attributed to the current user and host.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: default_actor(),
            details: None,
        }
    }

    /// Attach details to the event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Build the `user@host` actor string.
fn default_actor() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the generation log.
pub fn append_event(ctx: &GeneratorContext, event: &Event) -> Result<()> {
    let state_dir = ctx.state_dir();
    fs::create_dir_all(&state_dir).map_err(|e| {
        JoistError::IoError(format!(
            "failed to create state directory '{}': {}",
            state_dir.display(),
            e
        ))
    })?;

    let line = serde_json::to_string(event)
        .map_err(|e| JoistError::IoError(format!("failed to serialize event: {}", e)))?;

    let path = ctx.events_path();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            JoistError::IoError(format!(
                "failed to open event log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line)
        .map_err(|e| JoistError::IoError(format!("failed to append event: {}", e)))?;

    Ok(())
}

/// Append an event unless the config disables logging; warn instead of
/// failing when the append itself goes wrong.
pub fn record(ctx: &GeneratorContext, config: &Config, event: Event) {
    if !config.write_events_log {
        return;
    }
    if let Err(e) = append_event(ctx, &event) {
        eprintln!("Warning: failed to log {} event: {}", event.action, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_ctx(root: &Path) -> GeneratorContext {
        GeneratorContext::resolve(root, None).unwrap()
    }

    #[test]
    fn append_creates_log_and_writes_one_line() {
        let dir = TempDir::new().unwrap();
        let ctx = test_ctx(dir.path());

        let event = Event::new(EventAction::Lib).with_details(json!({"name": "mylib"}));
        append_event(&ctx, &event).unwrap();

        let content = fs::read_to_string(ctx.events_path()).unwrap();
        assert_eq!(content.lines().count(), 1);

        let parsed: Event = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(parsed.action, EventAction::Lib);
        assert_eq!(parsed.details.unwrap()["name"], "mylib");
    }

    #[test]
    fn append_is_append_only() {
        let dir = TempDir::new().unwrap();
        let ctx = test_ctx(dir.path());

        append_event(&ctx, &Event::new(EventAction::Project)).unwrap();
        append_event(&ctx, &Event::new(EventAction::App)).unwrap();
        append_event(&ctx, &Event::new(EventAction::Lib)).unwrap();

        let content = fs::read_to_string(ctx.events_path()).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn actor_has_user_at_host_shape() {
        let actor = default_actor();
        assert!(actor.contains('@'));
    }

    #[test]
    fn action_serializes_snake_case() {
        let event = Event::new(EventAction::Project);
        let line = serde_json::to_string(&event).unwrap();
        assert!(line.contains("\"action\":\"project\""));
    }

    #[test]
    fn record_respects_config_toggle() {
        let dir = TempDir::new().unwrap();
        let ctx = test_ctx(dir.path());
        let mut config = Config::default();
        config.write_events_log = false;

        record(&ctx, &config, Event::new(EventAction::Lib));
        assert!(!ctx.events_path().exists());

        config.write_events_log = true;
        record(&ctx, &config, Event::new(EventAction::Lib));
        assert!(ctx.events_path().exists());
    }
}
