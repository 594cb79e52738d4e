#![cfg(test)]

use super::*;
use soroban_sdk::{vec, Env, String, Vec};

#[test]
fn test_parse_hello() {
    let env = Env::default();
    let hello = String::from_str(&env, "hello");
    let to = String::from_str(&env, "World");

    assert_eq!(
        Operation::parse(&env, &hello, &vec![&env, to.clone()]),
        Ok(Operation::Hello { to })
    );
}

#[test]
fn test_parse_ignores_extra_arguments() {
    let env = Env::default();
    let op = String::from_str(&env, "hello");
    let args = vec![
        &env,
        String::from_str(&env, "first"),
        String::from_str(&env, "second"),
    ];

    assert_eq!(
        Operation::parse(&env, &op, &args),
        Ok(Operation::Hello {
            to: String::from_str(&env, "first")
        })
    );
}

#[test]
fn test_parse_rejections() {
    let env = Env::default();
    let args = vec![&env, String::from_str(&env, "World")];

    assert_eq!(
        Operation::parse(&env, &String::from_str(&env, "hello"), &Vec::new(&env)),
        Err(Error::MissingArgument)
    );
    for name in ["bye", "", "Hello", "HELLO", "hello "] {
        assert_eq!(
            Operation::parse(&env, &String::from_str(&env, name), &args),
            Err(Error::UnknownOperation)
        );
    }
}

#[test]
fn test_unknown_operation_wins_over_missing_argument() {
    let env = Env::default();
    assert_eq!(
        Operation::parse(&env, &String::from_str(&env, "print"), &Vec::new(&env)),
        Err(Error::UnknownOperation)
    );
}

#[test]
fn test_error_codes() {
    assert_eq!(Error::UnknownOperation as u32, 1);
    assert_eq!(Error::MissingArgument as u32, 2);
    assert_eq!(Error::UnknownOperation.code(), "UNKNOWN_OPERATION");
    assert_eq!(Error::MissingArgument.code(), "MISSING_ARGUMENT");
}

#[test]
fn test_greeting() {
    let env = Env::default();
    let to = String::from_str(&env, "Dev");
    assert_eq!(
        greeting(&env, to.clone()),
        vec![&env, String::from_str(&env, "Hello"), to]
    );
}
