use std::env;

use tracing_subscriber::EnvFilter;

mod cli;
mod exits;
mod settings;
mod terminal;

/// Logs go to stderr and only when RUST_LOG asks for them.
fn init_tracing() {
    if env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

fn main() {
    exits::install_handlers();
    disable_core_dumps();

    init_tracing();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
