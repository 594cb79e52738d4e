use soroban_sdk::{contracterror, log, Env, String, Symbol};

/// Reasons an invocation is rejected.
///
/// `invoke` never traps on these: the caller sees `false` and the code is
/// written to the diagnostic log.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Operation name does not match any known operation
    UnknownOperation = 1,
    /// `hello` was called without a target argument
    MissingArgument = 2,
}

impl Error {
    /// Stable string code for log filtering.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownOperation => "UNKNOWN_OPERATION",
            Error::MissingArgument => "MISSING_ARGUMENT",
        }
    }
}

/// Write a rejected invocation to the diagnostic log as
/// `invoke rejected, <operation>, <CODE>, <numeric code>`.
pub fn log_rejection(env: &Env, operation: &String, error: Error) {
    log!(
        env,
        "invoke rejected",
        operation.clone(),
        Symbol::new(env, error.code()),
        error as u32
    );
}
