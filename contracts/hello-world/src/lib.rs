#![no_std]
use hello_dispatch::{greeting, log_rejection, Operation};
use soroban_sdk::{contract, contractimpl, Env, String, Vec};

pub mod events;

use crate::events::EventEmitter;

/// Hello World template contract, notification flavour.
///
/// Simulation and deployment tooling ships this contract as its demo payload.
/// It has a single dispatching entry point, `invoke`, which takes an
/// operation name and an argument list. The only operation it accepts is
/// `hello`. That operation publishes a notification event carrying the first
/// argument.
///
/// # Contract Functions
///
/// - `invoke(operation, args)` - Dispatch on `operation`, returning `true` on success
/// - `hello(to)` - Returns the greeting `["Hello", to]` without side effects
///
/// # Example Usage
///
/// ```rust
/// # use soroban_sdk::{vec, Env, String};
/// # use hello_world::{HelloWorld, HelloWorldClient};
/// # let env = Env::default();
/// # let contract_id = env.register(HelloWorld, ());
/// # let client = HelloWorldClient::new(&env, &contract_id);
///
/// let op = String::from_str(&env, "hello");
/// let args = vec![&env, String::from_str(&env, "World")];
/// assert!(client.invoke(&op, &args));
///
/// let other = String::from_str(&env, "goodbye");
/// assert!(!client.invoke(&other, &args));
/// ```
#[contract]
pub struct HelloWorld;

#[contractimpl]
impl HelloWorld {
    /// Dispatch an operation by name.
    ///
    /// For `hello`, publishes a contract event with topic `("hello",)` and the
    /// first argument as data, then returns `true`.
    ///
    /// Any other operation, or `hello` without an argument, publishes nothing
    /// and returns `false`. The rejection code goes to the diagnostic log
    /// (see [`hello_dispatch::log_rejection`]).
    pub fn invoke(env: Env, operation: String, args: Vec<String>) -> bool {
        match Operation::parse(&env, &operation, &args) {
            Ok(Operation::Hello { to }) => {
                EventEmitter::emit_hello(&env, &to);
                true
            }
            Err(e) => {
                log_rejection(&env, &operation, e);
                false
            }
        }
    }

    /// Build a greeting as a vector of strings: `["Hello", to]`.
    pub fn hello(env: Env, to: String) -> Vec<String> {
        greeting(&env, to)
    }
}
