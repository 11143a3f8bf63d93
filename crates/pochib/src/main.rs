//! The fast-interpreter boilerplate builder CLI.
//!
//! `pochib <bitcode-path> <object-path>` JITs the bitcode module, runs its
//! enumeration entry point, resolves every registered template instantiation
//! back to the IR symbol that defines it, and prints the manifest, one pack
//! per AST node kind, to stdout:
//!
//! ```text
//! LogicalNot:
//!     neg_false
//!     neg_true
//! ```
//!
//! Diagnostics go to stderr; any failure exits non-zero without emitting a
//! partial manifest. The object path is validated and reserved for the
//! serialized manifest in a follow-up.

use std::path::PathBuf;
use std::process;

use clap::Parser;

mod manifest;
mod pipeline;

#[derive(Parser)]
#[command(name = "pochib", version, about = "The fast-interpreter boilerplate builder")]
struct Cli {
    /// The bitcode module containing the enumeration entry point, then the
    /// reserved manifest output path (validated, not yet written).
    ///
    /// Collected loosely so that a wrong argument count is diagnosed
    /// through the same fatal-error path as every other failure.
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match pipeline::run_from_args(&cli.paths) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
