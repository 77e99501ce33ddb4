//! Configuration defaults for joist.

/// Default C++ namespace for generated sources.
pub fn default_namespace() -> String {
    "ns".to_string()
}

/// Default suffix for generated library class names (`<lib>Class`).
pub fn default_class_suffix() -> String {
    "Class".to_string()
}

/// Default suffix for generated test fixture class names (`<lib>Test`).
pub fn default_test_class_suffix() -> String {
    "Test".to_string()
}

pub fn default_true() -> bool {
    true
}
