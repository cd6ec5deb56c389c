//! src/main.rs
//!
//! Entrypoint: installs error/log handlers, then delegates to `app::run()`.

mod app;
mod clipboard;
mod controller;
mod effect;
mod panels;
mod share;
mod store;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // logs go to stderr; enable with RUST_LOG and redirect when debugging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    app::run()
}
