//
// Copyright (c) 2025 Nathan Fiedler
//
#[cfg(feature = "ssr")]
pub mod api;
pub mod leptos;
