//! A command line interface to validate TSPLIB tours and evaluate their cost.

#![forbid(unsafe_code)]

mod commands;

use crate::cli::{get_app, run_subcommand};

fn main() {
    let matches = get_app().get_matches();

    run_subcommand(matches);
}

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Geometric TSP tour checker")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to validate TSPLIB tours and evaluate their cost")
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("check", check_matches)) => run_check(check_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
