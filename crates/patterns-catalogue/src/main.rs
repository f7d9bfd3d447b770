//! `patterns` command line interface

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use patterns_catalogue::Catalogue;
use patterns_escalation::{ChainConfig, HandlerId, Request, Severity};
use patterns_state::{Action, Television};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("patterns")
        .version(patterns_catalogue::VERSION)
        .about("Runnable catalogue of design pattern demonstrations")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level unless RUST_LOG is set"),
        )
        .subcommand(Command::new("list").about("List registered demonstrations"))
        .subcommand(
            Command::new("run")
                .about("Run one demonstration, or all of them")
                .arg(Arg::new("name").help("Demonstration name (default: all)"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("escalate")
                .about("Submit a problem to a support escalation chain")
                .arg(
                    Arg::new("severity")
                        .long("severity")
                        .short('s')
                        .required(true)
                        .value_parser(|s: &str| s.parse::<Severity>())
                        .help("no_problem, simple, troublesome, urgent or critical"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_parser(value_parser!(PathBuf))
                        .help("Chain description (.toml, .yaml or .yml); default is the built-in support team"),
                )
                .arg(
                    Arg::new("entry")
                        .long("entry")
                        .help("Handler to submit to (default: the chain's entry)"),
                ),
        )
        .subcommand(
            Command::new("tv")
                .about("Drive a television with remote control actions")
                .arg(
                    Arg::new("actions")
                        .required(true)
                        .num_args(1..)
                        .value_parser(|s: &str| s.parse::<Action>())
                        .help("power, volume-up, volume-down or mute"),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn list(catalogue: &Catalogue) {
    for demonstration in catalogue.iter() {
        println!(
            "{:<24} {:<11} {}",
            demonstration.name(),
            demonstration.category().to_string(),
            demonstration.intent()
        );
    }
}

fn run(catalogue: &Catalogue, args: &ArgMatches) -> Result<bool> {
    let reports = match args.get_one::<String>("name") {
        Some(name) => vec![catalogue.run(name)?],
        None => catalogue.run_all()?,
    };

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", report.generate_text());
        }
    }

    Ok(reports.iter().all(|r| r.passed()))
}

fn escalate(args: &ArgMatches) -> Result<()> {
    let Some(&severity) = args.get_one::<Severity>("severity") else {
        bail!("--severity is required");
    };

    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => ChainConfig::load(path)
            .with_context(|| format!("failed to load chain configuration from {}", path.display()))?,
        None => ChainConfig::default(),
    };
    if let Some(entry) = args.get_one::<String>("entry") {
        config.entry = Some(entry.clone());
    }

    let built = config.build().context("invalid chain configuration")?;
    let mut request = Request::new(severity);
    let trace = built.chain.submit(built.entry, &mut request)?;

    let name_of = |id: HandlerId| built.chain.handler(id).map_or("<unknown>", |h| h.name());
    let path: Vec<&str> = trace.visited().iter().map(|&id| name_of(id)).collect();
    println!("severity: {severity}");
    println!("path:     {}", path.join(" -> "));
    match trace.resolved_by() {
        Some(id) => println!("resolved: {}", name_of(id)),
        None => println!("resolved: no (end of chain)"),
    }
    Ok(())
}

fn tv(args: &ArgMatches) {
    let mut television = Television::new();
    println!("{:<12} {}", "", television.state());
    for &action in args.get_many::<Action>("actions").into_iter().flatten() {
        let state = television.apply(action);
        println!("{:<12} {state}", action.to_string());
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let catalogue = Catalogue::with_defaults();

    match matches.subcommand() {
        Some(("list", _)) => list(&catalogue),
        Some(("run", args)) => {
            if !run(&catalogue, args)? {
                std::process::exit(1);
            }
        }
        Some(("escalate", args)) => escalate(args)?,
        Some(("tv", args)) => tv(args),
        _ => {}
    }

    Ok(())
}
