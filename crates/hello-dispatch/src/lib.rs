#![no_std]
//! Operation dispatch shared by the hello template contracts.
//!
//! Both contracts accept the same `(operation, args)` pair and reject the
//! same inputs; only what a successful `hello` does differs between them.

pub mod config;
pub mod errors;
pub mod greeting;
pub mod operation;

pub use errors::{log_rejection, Error};
pub use greeting::greeting;
pub use operation::Operation;

mod test;
