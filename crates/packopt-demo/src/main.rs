//! `ccdrv`: a pretend compiler driver showing packopt's packed short options.
//!
//! ```text
//! ccdrv -gcvvO2 -Wall -I include --std=c11 main.c
//! ```
//!
//! Set `RUST_LOG=packopt=trace` to watch each option being dispatched.

mod driver;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut argv = std::env::args();
    let program = argv
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "ccdrv".to_string());
    let args: Vec<String> = argv.collect();

    match driver::plan(&program, &args) {
        Ok(plan) => {
            println!("{}", plan);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
