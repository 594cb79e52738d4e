#![no_std]
use hello_dispatch::{greeting, log_rejection, Operation};
use soroban_sdk::{contract, contractimpl, log, Env, String, Vec};

/// Hello World template contract, printing flavour.
///
/// Dispatches exactly like the notifying contract. The difference is that a
/// successful `hello` prints its greeting to the diagnostic log instead of
/// publishing a contract event. Diagnostic output is only recorded when debug
/// assertions are enabled (tests, or the `release-with-logs` profile).
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
/// # use hello_world_print::{HelloWorldPrint, HelloWorldPrintClient};
/// # let env = Env::default();
/// # let contract_id = env.register(HelloWorldPrint, ());
/// # let client = HelloWorldPrintClient::new(&env, &contract_id);
///
/// let op = String::from_str(&env, "hello");
/// let args = vec![&env, String::from_str(&env, "World")];
/// assert!(client.invoke(&op, &args));
/// // env.logs().print() shows: greeting, ["Hello", "World"]
/// ```
#[contract]
pub struct HelloWorldPrint;

#[contractimpl]
impl HelloWorldPrint {
    /// Dispatch an operation by name.
    ///
    /// `hello` logs `["Hello", args[0]]` under the message `greeting` and
    /// returns `true`. Anything else logs the rejection code and returns
    /// `false`. No contract event is published either way.
    pub fn invoke(env: Env, operation: String, args: Vec<String>) -> bool {
        match Operation::parse(&env, &operation, &args) {
            Ok(Operation::Hello { to }) => {
                log!(&env, "greeting", greeting(&env, to));
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
