#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::BufReader;
use std::path::PathBuf;
use xtsp_cli::core::prelude::CheckResult;
use xtsp_cli::core::utils::{create_noop_logger, create_stdout_logger};
use xtsp_cli::extensions::check::*;
use xtsp_cli::extensions::config::{Config, read_config};
use xtsp_cli::scientific::tsplib::TsplibSolution;

const PROBLEM_ARG_NAME: &str = "problem-file";
const TOUR_ARG_NAME: &str = "tour-file";
const NO_ROUNDING_ARG_NAME: &str = "no-rounding";
const NORM_ARG_NAME: &str = "norm";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_TOUR_ARG_NAME: &str = "out-tour";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to validate TSPLIB tours and evaluate their cost")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets problem files in TSPLIB format (TSP or GTSP)")
                .short('p')
                .long(PROBLEM_ARG_NAME)
                .required(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(TOUR_ARG_NAME)
                .help("Sets tour files in TSPLIB format, one per problem file")
                .short('t')
                .long(TOUR_ARG_NAME)
                .required(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(NO_ROUNDING_ARG_NAME)
                .help("Disables rounding of every edge length to the nearest integer")
                .long(NO_ROUNDING_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(NORM_ARG_NAME)
                .help("Specifies distance norm order: a number not less than 1, 'inf' or 'auto'")
                .short('n')
                .long(NORM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a json config file, command line flags take precedence")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether check progress is written to stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to a file where check reports are written as json")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_TOUR_ARG_NAME)
                .help("Specifies path to a file where a valid tour is written in canonical TSPLIB form")
                .long(OUT_TOUR_ARG_NAME)
                .required(false),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), GenericError> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let options = get_check_options(matches, &config)?;
    let logger = if matches.get_flag(LOG_ARG_NAME) || config.is_logging_enabled() {
        create_stdout_logger()
    } else {
        create_noop_logger()
    };

    let pairs = get_file_pairs(matches)?;
    let out_tour = matches.get_one::<String>(OUT_TOUR_ARG_NAME);
    if out_tour.is_some() && pairs.len() != 1 {
        return Err(format!("'{OUT_TOUR_ARG_NAME}' expects exactly one problem and tour pair").into());
    }

    let results = check_tsplib_batch(pairs.as_slice(), &options, logger);

    write_summary(pairs.as_slice(), results.as_slice())?;

    if let Some(out_result) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        let reports = pairs
            .iter()
            .zip(results.iter())
            .map(|((problem_path, tour_path), result)| CheckReport::new(problem_path, tour_path, result))
            .collect::<Vec<_>>();

        write_reports_json(create_write_buffer(Some(create_file(out_result, "result")?)), reports.as_slice())?;
    }

    if let (Some(out_tour), Some(Ok(checked))) = (out_tour, results.first()) {
        checked.tour.write_tsplib(create_write_buffer(Some(create_file(out_tour, "tour")?)))?;
    }

    let errors =
        results.iter().filter_map(|result| result.as_ref().err().cloned()).map(GenericError::from).collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("checker found {} errors:\n{}", errors.len(), GenericError::join_many(errors.as_slice(), "\n")).into())
    }
}

fn get_check_options(matches: &ArgMatches, config: &Config) -> Result<CheckOptions, GenericError> {
    let mut options = config.to_check_options()?;

    if matches.get_flag(NO_ROUNDING_ARG_NAME) {
        options.is_rounded = false;
    }

    if let Some(norm) = matches.get_one::<String>(NORM_ARG_NAME) {
        options.norm = norm.parse()?;
    }

    Ok(options)
}

fn get_file_pairs(matches: &ArgMatches) -> Result<Vec<(PathBuf, PathBuf)>, GenericError> {
    let get_paths = |arg_name: &str| {
        matches.get_many::<String>(arg_name).map(|paths| paths.map(PathBuf::from).collect::<Vec<_>>()).unwrap_or_default()
    };

    let (problems, tours) = (get_paths(PROBLEM_ARG_NAME), get_paths(TOUR_ARG_NAME));

    if problems.len() != tours.len() {
        return Err(format!("expected the same amount of problem and tour files, got {} and {}", problems.len(), tours.len())
            .into());
    }

    Ok(problems.into_iter().zip(tours).collect())
}

fn write_summary(pairs: &[(PathBuf, PathBuf)], results: &[CheckResult<CheckedSolution>]) -> Result<(), GenericError> {
    let mut writer = create_write_buffer(None);

    pairs.iter().zip(results.iter()).try_for_each(|((problem_path, tour_path), result)| match result {
        Ok(checked) => {
            writeln!(writer, "{} {}: cost {}", problem_path.display(), tour_path.display(), checked.report.cost)
        }
        Err(err) => writeln!(writer, "{} {}: invalid ({err})", problem_path.display(), tour_path.display()),
    })?;

    writer.flush()?;

    Ok(())
}
