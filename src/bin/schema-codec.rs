use clap::Parser;
use schema_codec::cli::SchemaCodec;

use std::process;

fn main() {
    let app = SchemaCodec::parse();
    timber::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    if let Err(error) = app.run() {
        tracing::debug!(?error);
        eprintln!("error: {error:#}");
        process::exit(1)
    }
}
