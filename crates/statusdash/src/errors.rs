//! Error handling and exit codes.

use statusdash_core::DashError;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ERROR_GENERIC: i32 = 1;
    pub const ERROR_CONFIG: i32 = 4;
}

/// Exit code for a display error.
#[must_use]
pub fn exit_code(err: &DashError) -> i32 {
    match err {
        DashError::InvalidConfig(_)
        | DashError::InvalidKind(_)
        | DashError::DuplicateAttribute(_)
        | DashError::UnknownAttribute(_)
        | DashError::NonNumericValue { .. } => exit_codes::ERROR_CONFIG,
        DashError::NotOpen | DashError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any top-level failure.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DashError>()
        .map_or(exit_codes::ERROR_GENERIC, exit_code)
}
