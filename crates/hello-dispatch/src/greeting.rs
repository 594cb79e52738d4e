use soroban_sdk::{vec, Env, String, Vec};

use crate::config::GREETING_WORD;

/// `["Hello", to]`
pub fn greeting(env: &Env, to: String) -> Vec<String> {
    vec![env, String::from_str(env, GREETING_WORD), to]
}
