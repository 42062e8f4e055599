use anyhow::Result;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use detmat_cli::commands::{det, store};
use detmat_cli::config::CliConfig;
use detmat_cli::input::matrix_from_arguments;

fn matrix_source_args() -> [Arg; 2] {
    [
        Arg::new("file")
            .short('f')
            .long("file")
            .help("Read the matrix from a headerless .tsv or .csv file")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath),
        Arg::new("values")
            .short('v')
            .long("values")
            .help("Matrix literal: rows separated by ';', entries by spaces or commas, e.g. \"1 2; 3 4\"")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .allow_hyphen_values(true)
            .value_hint(ValueHint::Other),
    ]
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a JSON configuration file")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn determinant_args() -> [Arg; 3] {
    [
        Arg::new("strict")
            .long("strict")
            .help("Fail on non-square matrices instead of reporting a determinant of 0")
            .action(ArgAction::SetTrue),
        Arg::new("tolerance")
            .long("tolerance")
            .help("Treat pivots with absolute value <= TOLERANCE as zero (default: exact zero)")
            .value_parser(clap::value_parser!(f64)),
        Arg::new("precision")
            .short('p')
            .long("precision")
            .help("Decimal places in the printed determinant (default: 2)")
            .value_parser(clap::value_parser!(usize)),
    ]
}

fn store_path_arg() -> Arg {
    Arg::new("store")
        .help("Path to the matrix store text file")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .help("Name of the stored matrix")
        .required(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
}

fn source_group() -> ArgGroup {
    ArgGroup::new("source").args(["file", "values"]).multiple(false)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DETMAT_LOG", "error,detmat=info"))
        .init();

    let matches = Command::new("detmat")
        .version(clap::crate_version!())
        .about("Enter integer matrices and compute their determinants")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("det")
                .about("Compute the determinant of a matrix (prompts on stdin when no source is given)")
                .args(matrix_source_args())
                .group(source_group())
                .arg(config_arg())
                .args(determinant_args()),
        )
        .subcommand(
            Command::new("store")
                .about("Manage named matrices saved in a text file")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("list")
                        .about("List stored matrices and their dimensions")
                        .arg(store_path_arg())
                        .arg(config_arg()),
                )
                .subcommand(
                    Command::new("save")
                        .about("Save a matrix under a name, replacing any previous one")
                        .arg(store_path_arg())
                        .arg(name_arg())
                        .args(matrix_source_args())
                        .group(source_group())
                        .arg(config_arg()),
                )
                .subcommand(
                    Command::new("show")
                        .about("Print a stored matrix")
                        .arg(store_path_arg())
                        .arg(name_arg())
                        .arg(config_arg()),
                )
                .subcommand(
                    Command::new("det")
                        .about("Compute the determinant of a stored matrix")
                        .arg(store_path_arg())
                        .arg(name_arg())
                        .arg(config_arg())
                        .args(determinant_args()),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Delete a stored matrix")
                        .arg(store_path_arg())
                        .arg(name_arg())
                        .arg(config_arg()),
                ),
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("det", sub_m)) => handle_det(sub_m),
        Some(("store", sub_m)) => handle_store(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = outcome {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn handle_det(matches: &ArgMatches) -> Result<()> {
    let config = CliConfig::from_arguments(matches)?;
    let matrix = matrix_from_arguments(matches)?;
    println!("{}", det::run_det(&matrix, &config)?);
    Ok(())
}

fn handle_store(matches: &ArgMatches) -> Result<()> {
    let (command, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow::anyhow!("A store subcommand is required"))?;
    let path: &PathBuf = sub_m
        .get_one("store")
        .ok_or_else(|| anyhow::anyhow!("Missing store path"))?;
    let config = if command == "det" {
        CliConfig::from_arguments(sub_m)?
    } else {
        CliConfig::from_config_argument(sub_m)?
    };

    match command {
        "list" => {
            for line in store::list(path, &config)? {
                println!("{}", line);
            }
        }
        "save" => {
            let name = required_name(sub_m)?;
            let matrix = matrix_from_arguments(sub_m)?;
            let replaced = store::save(path, name, matrix, &config)?;
            let verb = if replaced { "Replaced" } else { "Saved" };
            println!("{} '{}' in {}", verb, name, path.display());
        }
        "show" => println!("{}", store::show(path, required_name(sub_m)?, &config)?),
        "det" => println!("{}", store::det(path, required_name(sub_m)?, &config)?),
        "remove" => {
            let name = required_name(sub_m)?;
            store::remove(path, name, &config)?;
            println!("Removed '{}' from {}", name, path.display());
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn required_name(matches: &ArgMatches) -> Result<&String> {
    matches
        .get_one::<String>("name")
        .ok_or_else(|| anyhow::anyhow!("Missing matrix name"))
}
