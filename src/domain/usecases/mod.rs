//
// Copyright (c) 2025 Nathan Fiedler
//
use anyhow::Error;

pub mod submit_inquiry;

/// `UseCase` is the interface by which all use cases are invoked.
pub trait UseCase<Type, Params> {
    fn call(&self, params: Params) -> Result<Type, Error>;
}
