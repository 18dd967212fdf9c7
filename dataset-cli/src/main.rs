//! A command line interface to inspect datasets of routing problems and to evaluate solutions
//! against them.
//!
//! ## Usage
//!
//! - print information about a local TSPLIB instance
//!
//!     `dataset-cli inspect tsp --file data/tsplib/square4.tsp`
//!
//! - score a solution of a capacitated problem stored in the registry
//!
//!     `dataset-cli evaluate cvrp --registry-id 42 --credential TOKEN --solution-file routes.json`
//!
//! - score a random solution using problem configuration file
//!
//!     `dataset-cli evaluate tsp --config problem.json --random --seed 7`
//!
//! For more details, simply run
//!
//!     dataset-cli --help

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

mod cli {
    use super::commands::evaluate::{get_evaluate_app, run_evaluate};
    use super::commands::inspect::{get_inspect_app, run_inspect};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Dataset Problem CLI")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to inspect datasets and evaluate solutions against them")
            .subcommand(get_inspect_app())
            .subcommand(get_evaluate_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("inspect", inspect_matches)) => run_inspect(inspect_matches),
            Some(("evaluate", evaluate_matches)) => run_evaluate(evaluate_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

use cli::{get_app, run_subcommand};

fn main() {
    run_subcommand(get_app().get_matches());
}
