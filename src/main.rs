//! Spelltrie CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;

use spelltrie::cli::args::SpelltrieArgs;
use spelltrie::cli::commands::execute_command;

fn main() {
    let args = SpelltrieArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(err) = execute_command(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
