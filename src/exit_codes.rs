//! Exit code constants for the dependabot-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, refused operation)
//! - 2: Validation failure (invalid enumeration values, failing `validate`)
//! - 3: I/O failure (configuration file could not be read or written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed input document, or refused operation.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the document or the requested entry is not valid.
pub const VALIDATION_FAILURE: i32 = 2;

/// I/O failure: the configuration file could not be read or written.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
