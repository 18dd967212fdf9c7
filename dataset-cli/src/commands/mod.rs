use clap::{Arg, ArgAction, ArgMatches, Command};
use dataset_core::prelude::*;
use dataset_scientific::factory::{AnyProblem, FamilyOptions, create_problem};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::path::PathBuf;
use std::sync::Arc;

pub mod evaluate;
pub mod inspect;

pub const PROBLEM_TYPE_ARG_NAME: &str = "PROBLEM_TYPE";
pub const CONFIG_ARG_NAME: &str = "config";
pub const FILE_ARG_NAME: &str = "file";
pub const URL_ARG_NAME: &str = "url";
pub const REGISTRY_ID_ARG_NAME: &str = "registry-id";
pub const CREDENTIAL_ARG_NAME: &str = "credential";
pub const BASE_DIR_ARG_NAME: &str = "base-dir";
pub const FORMAT_ARG_NAME: &str = "format";
pub const STRICT_ARG_NAME: &str = "strict";
pub const OPTIONS_ARG_NAME: &str = "options";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

/// Adds arguments which describe where dataset comes from and how it is read.
pub(crate) fn add_problem_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(PROBLEM_TYPE_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["tsp", "vrp", "cvrp"])
                .index(1),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Sets problem configuration file, other source arguments override its values")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(Arg::new(FILE_ARG_NAME).help("Sets local dataset file").short('f').long(FILE_ARG_NAME).required(false))
        .arg(Arg::new(URL_ARG_NAME).help("Sets external dataset url").short('u').long(URL_ARG_NAME).required(false))
        .arg(
            Arg::new(REGISTRY_ID_ARG_NAME)
                .help("Sets dataset id in the registry")
                .short('r')
                .long(REGISTRY_ID_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CREDENTIAL_ARG_NAME)
                .help("Sets bearer token used for registry requests")
                .long(CREDENTIAL_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BASE_DIR_ARG_NAME)
                .help("Sets base directory to resolve relative dataset file path")
                .long(BASE_DIR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies dataset format, it is detected from content when omitted")
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["tsplib", "json", "csv"]),
        )
        .arg(
            Arg::new(STRICT_ARG_NAME)
                .help("Rejects datasets of unrecognized or mismatching format")
                .long(STRICT_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OPTIONS_ARG_NAME)
                .help("Sets problem family options file")
                .long(OPTIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Creates a problem from command line arguments.
pub(crate) fn get_problem(matches: &ArgMatches) -> Result<AnyProblem, String> {
    let problem_type = matches
        .get_one::<String>(PROBLEM_TYPE_ARG_NAME)
        .ok_or_else(|| "problem type is not specified".to_string())?;

    let config = get_problem_config(matches)?;
    let options = get_family_options(matches)?;
    let environment = Environment::with_logger(Arc::new(|msg| eprintln!("{msg}")));

    create_problem(problem_type, config, options, &environment).map_err(|err| err.to_string())
}

fn get_problem_config(matches: &ArgMatches) -> Result<ProblemConfig, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_problem_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string())?,
        None => ProblemConfig::default(),
    };

    let get_value = |arg_name: &str| matches.get_one::<String>(arg_name).cloned();

    if let Some(path) = get_value(FILE_ARG_NAME) {
        config.source.local_path = Some(PathBuf::from(path));
    }
    if let Some(url) = get_value(URL_ARG_NAME) {
        config.source.url = Some(url);
    }
    if let Some(registry_id) = get_value(REGISTRY_ID_ARG_NAME) {
        config.source.registry_id = Some(registry_id);
    }
    if let Some(credential) = get_value(CREDENTIAL_ARG_NAME) {
        config.source.credential = Some(credential);
    }
    if let Some(base_dir) = get_value(BASE_DIR_ARG_NAME) {
        config.loading.base_dir = Some(PathBuf::from(base_dir));
    }
    if let Some(format) = get_value(FORMAT_ARG_NAME) {
        config.format.format = Some(format.parse::<DatasetFormat>().map_err(|err| err.to_string())?);
    }
    if matches.get_flag(STRICT_ARG_NAME) {
        config.format.policy = FormatPolicy::Strict;
    }

    Ok(config)
}

fn get_family_options(matches: &ArgMatches) -> Result<FamilyOptions, String> {
    match matches.get_one::<String>(OPTIONS_ARG_NAME) {
        Some(path) => serde_json::from_reader(BufReader::new(open_file(path, "options")?))
            .map_err(|err| format!("cannot read options: '{err}'")),
        None => Ok(FamilyOptions::default()),
    }
}

pub(crate) fn get_write_buffer(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

pub(crate) fn write_json(writer: &mut BufWriter<Box<dyn Write>>, value: &serde_json::Value) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|err| err.to_string())
        .and_then(|_| writer.write_all(b"\n").map_err(|err| err.to_string()))
        .and_then(|_| writer.flush().map_err(|err| err.to_string()))
}

fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}
