#[cfg(test)]
#[path = "../../tests/unit/commands/inspect_test.rs"]
mod inspect_test;

use super::*;
use serde_json::{Value, json};

pub fn get_inspect_app() -> Command {
    add_problem_args(
        Command::new("inspect").about("Loads and parses a dataset, then prints information about the problem"),
    )
}

/// Prints problem information. Load or parse error is printed as a part of information and
/// reported as a command failure.
pub fn run_inspect(matches: &ArgMatches) -> Result<(), String> {
    let problem = get_problem(matches)?;
    let prepared = problem.prepare();

    let mut info = problem.problem_info();
    info.insert("problem_type".to_string(), json!(problem.problem_type().to_string()));
    if let Ok(size_info) = problem.size_info() {
        info.insert("size_info".to_string(), Value::Object(size_info.into_iter().collect()));
    }
    if let Err(err) = &prepared {
        info.insert("error".to_string(), json!(err.to_string()));
    }

    let mut writer = get_write_buffer(matches)?;
    write_json(&mut writer, &Value::Object(info.into_iter().collect()))?;

    prepared.map_err(|err| format!("cannot inspect problem: {err}"))
}
