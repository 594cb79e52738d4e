use soroban_sdk::{Env, String, Vec};

use crate::config::{HELLO_OPERATION, TARGET_ARG_INDEX};
use crate::errors::Error;

/// A decoded `invoke` request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Hello { to: String },
}

impl Operation {
    /// Match the operation name (exact, case-sensitive) and pull out its arguments.
    pub fn parse(env: &Env, operation: &String, args: &Vec<String>) -> Result<Self, Error> {
        if *operation != String::from_str(env, HELLO_OPERATION) {
            return Err(Error::UnknownOperation);
        }
        let to = args.get(TARGET_ARG_INDEX).ok_or(Error::MissingArgument)?;
        Ok(Operation::Hello { to })
    }
}
