//! Exit code constants for the coderun CLI.
//!
//! - 0: Success (code ran and exited 0, or command succeeded)
//! - 1: Execution failed (child exited non-zero)
//! - 2: Internal error (path, write, or launch fault)
//! - 3: Configuration error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The child process ran and exited non-zero.
pub const EXECUTION_FAILED: i32 = 1;

/// A fault prevented the child from being observed to exit.
pub const INTERNAL_ERROR: i32 = 2;

/// Configuration file missing fields, unreadable, or invalid.
pub const CONFIG_ERROR: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, EXECUTION_FAILED, INTERNAL_ERROR, CONFIG_ERROR];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
