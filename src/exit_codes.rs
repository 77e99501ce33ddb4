//! Exit code constants for the joist CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, malformed identifiers, existing paths)
//! - 2: Template failure (undefined placeholder, substitution cycle)
//! - 3: I/O failure (directory creation, file write)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed identifiers, or refusal to overwrite.
pub const USER_ERROR: i32 = 1;

/// Template failure: undefined placeholder or unresolvable substitution.
pub const TEMPLATE_FAILURE: i32 = 2;

/// I/O failure: directory or file could not be created or written.
pub const IO_FAILURE: i32 = 3;
