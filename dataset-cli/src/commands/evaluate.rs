#[cfg(test)]
#[path = "../../tests/unit/commands/evaluate_test.rs"]
mod evaluate_test;

use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::{Value, json};

pub const SOLUTION_ARG_NAME: &str = "solution-file";
pub const RANDOM_ARG_NAME: &str = "random";
pub const SEED_ARG_NAME: &str = "seed";

pub fn get_evaluate_app() -> Command {
    add_problem_args(Command::new("evaluate").about("Scores and validates a solution against a dataset"))
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file: an array of node indices for tsp, an array of routes for vrp")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required_unless_present(RANDOM_ARG_NAME)
                .conflicts_with(RANDOM_ARG_NAME),
        )
        .arg(
            Arg::new(RANDOM_ARG_NAME)
                .help("Evaluates a random solution instead of the one from file")
                .long(RANDOM_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Sets seed of random solution generator")
                .long(SEED_ARG_NAME)
                .requires(RANDOM_ARG_NAME)
                .value_parser(clap::value_parser!(u64)),
        )
}

/// Prints cost and validity verdict of the solution. Unscorable solution has `null` cost.
pub fn run_evaluate(matches: &ArgMatches) -> Result<(), String> {
    let problem = get_problem(matches)?;

    let solution = match matches.get_one::<String>(SOLUTION_ARG_NAME) {
        Some(path) => serde_json::from_reader::<_, Value>(BufReader::new(open_file(path, "solution")?))
            .map_err(|err| format!("cannot read solution: '{err}'"))?,
        None => {
            let mut random = match matches.get_one::<u64>(SEED_ARG_NAME) {
                Some(seed) => SmallRng::seed_from_u64(*seed),
                None => SmallRng::from_entropy(),
            };

            problem.random_value(&mut random).map_err(|err| format!("cannot generate solution: {err}"))?
        }
    };

    let (cost, is_valid) = problem.evaluate_value(&solution).map_err(|err| format!("cannot evaluate solution: {err}"))?;
    let cost = if cost.is_finite() { json!(cost) } else { Value::Null };

    let result = json!({
        "problem_type": problem.problem_type().to_string(),
        "cost": cost,
        "is_valid": is_valid,
        "solution": solution,
    });

    let mut writer = get_write_buffer(matches)?;
    write_json(&mut writer, &result)
}
