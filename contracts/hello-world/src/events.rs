use hello_dispatch::config::HELLO_TOPIC;
use soroban_sdk::{Env, String};

/// Event emission utilities
pub struct EventEmitter;

impl EventEmitter {
    /// Publish the `hello` notification with the greeting target as data.
    pub fn emit_hello(env: &Env, to: &String) {
        env.events().publish((HELLO_TOPIC,), to.clone());
    }
}
