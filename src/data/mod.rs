//
// Copyright (c) 2025 Nathan Fiedler
//
pub mod repositories;
pub mod sources;
