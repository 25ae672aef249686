use clap::Parser;
use smacross::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
