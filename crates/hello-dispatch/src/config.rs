//! Compile-time configuration shared by the hello contracts.

use soroban_sdk::{symbol_short, Symbol};

/// Operation name accepted by `invoke`.
pub const HELLO_OPERATION: &str = "hello";

/// First element of every greeting.
pub const GREETING_WORD: &str = "Hello";

/// Index into the invocation arguments that carries the greeting target.
pub const TARGET_ARG_INDEX: u32 = 0;

/// Topic of the notification published by a successful `hello`.
pub const HELLO_TOPIC: Symbol = symbol_short!("hello");
