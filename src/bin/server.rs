//! Recetas 80/20 server binary.
//! Run with: cargo run --bin recetas-server

use std::process::ExitCode;

use recetas_8020::start_recetas_server;

fn main() -> ExitCode {
    start_recetas_server::run()
}
