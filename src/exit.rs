// src/exit.rs
//! Standardized process exit codes for `arbor`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ArborExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config, corrupt forest).
    Error = 1,
    /// The graph file could not be parsed.
    InvalidInput = 2,
    /// The computed tree failed the cross-check or does not span the graph.
    VerifyFailed = 3,
}

impl ArborExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ArborExit {
    fn report(self) -> std::process::ExitCode {
        // Codes are small and non-negative, so the u8 cast is lossless.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
