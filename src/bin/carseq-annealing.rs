use carseq::cli::{self, Algorithm};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::main(Algorithm::Annealing)
}
