//! Web page decorator walkthrough.
//!
//! Renders a basic page, an access-gated page, and a paginated page to
//! stdout. Diagnostics go to stderr.
//!
//! Run with: `cargo run --example web_page_decorators`

use page_decor::{StdoutSink, demo};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = demo::run(&StdoutSink::new()) {
        eprintln!("demo failed: {}", e);
        std::process::exit(1);
    }
}
