//
// Copyright (c) 2025 Nathan Fiedler
//

//! Container health probe: fetch one page from the local server and report
//! the outcome through the exit code.

use reqwest::Client;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let port = env::var("PORT").unwrap_or_else(|_| "3000".into());
    let path = env::var("HEALTHCHECK_PATH").unwrap_or_else(|_| "/".into());
    let url = format!("http://localhost:{}{}", port, path);
    match Client::new().get(&url).send().await {
        Ok(res) if res.status().is_client_error() || res.status().is_server_error() => {
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
