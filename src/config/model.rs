//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the joist generator.
///
/// This struct represents the contents of `joist.yaml`. Unknown fields in
/// the YAML are preserved for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default C++ namespace for generated sources (overridable per run
    /// with `--namespace`).
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Suffix appended to a library name to form its class name
    /// (e.g. `mylib` -> `mylibClass`).
    #[serde(default = "default_class_suffix")]
    pub class_suffix: String,

    /// Suffix appended to a library name to form its test fixture class
    /// name (e.g. `mylib` -> `mylibTest`).
    #[serde(default = "default_test_class_suffix")]
    pub test_class_suffix: String,

    /// Per-role template file name overrides (role name -> file name in the
    /// template directory).
    #[serde(default)]
    pub templates: BTreeMap<String, String>,

    /// Whether scaffolding commands append to `.joist/events.ndjson`.
    #[serde(default = "default_true")]
    pub write_events_log: bool,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            class_suffix: default_class_suffix(),
            test_class_suffix: default_test_class_suffix(),
            templates: BTreeMap::new(),
            write_events_log: true,
            extra: BTreeMap::new(),
        }
    }
}
