use std::env;
use std::fmt::Display;
use std::process;
use std::str::FromStr;
use std::time::Duration;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::debug;

use sokoban_race::config::{Format, SolverConfig, Strategy};
use sokoban_race::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-race")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Races sokoban search strategies against a deadline")
        .arg(
            Arg::with_name("codes")
                .long("codes")
                .help("parse as rows of cell codes"),
        ).arg(Arg::with_name("xsb").long("xsb").help("parse as XSB"))
        .group(ArgGroup::with_name("format").args(&["codes", "xsb"]))
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .possible_values(&["bfs", "best-first", "astar", "a-star"])
                .help("run only this strategy, without a deadline"),
        ).arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SECS")
                .help("how long to race strategies before falling back (default 30)"),
        ).arg(
            Arg::with_name("workers")
                .short("w")
                .long("workers")
                .takes_value(true)
                .value_name("N")
                .help("how many strategies to race (default 2)"),
        ).arg(
            Arg::with_name("no-fallback")
                .long("no-fallback")
                .help("don't run best-first when the race fails"),
        ).arg(
            Arg::with_name("max-states")
                .long("max-states")
                .takes_value(true)
                .value_name("N")
                .help("give up after creating this many states per search"),
        ).arg(
            Arg::with_name("print-states")
                .short("p")
                .long("print-states")
                .help("print every state of the solution"),
        ).arg(Arg::with_name("file").required(true))
        .get_matches();

    let config = build_config(&matches);
    debug!("{:?}", config);

    let path = matches.value_of("file").unwrap();
    let loaded = if matches.is_present("codes") {
        path.load_level_as(Format::Codes)
    } else if matches.is_present("xsb") {
        path.load_level_as(Format::Xsb)
    } else {
        path.load_level()
    };
    let level = loaded.unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(current_dir) => println!(
                "Can't load level {} in {}: {}",
                path,
                current_dir.display(),
                err
            ),
            Err(_) => println!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve_bounded(&config);

    match solver_ok.strategy {
        Some(strategy) => println!("{} ({})", solver_ok.outcome, strategy),
        None => println!("{}", solver_ok.outcome),
    }
    if let Some(moves) = solver_ok.outcome.moves() {
        println!("{}", moves);
        println!("Moves: {}", moves.move_cnt());
        println!("Pushes: {}", moves.push_cnt());
    }
    println!();
    print!("{}", solver_ok.stats);

    if matches.is_present("print-states") {
        if let Some(moves) = solver_ok.outcome.moves() {
            println!();
            print!("{}", level.xsb_solution(moves, true));
        }
    }
}

fn build_config(matches: &ArgMatches<'_>) -> SolverConfig {
    let mut config = SolverConfig::default();
    if let Some(strategy) = parse_arg::<Strategy>(matches, "strategy") {
        config.strategy = Some(strategy);
    }
    if let Some(secs) = parse_arg::<f64>(matches, "timeout") {
        config.timeout = Duration::try_from_secs_f64(secs).unwrap_or_else(|err| {
            println!("Invalid value for --timeout: {}", err);
            process::exit(1);
        });
    }
    if let Some(workers) = parse_arg(matches, "workers") {
        config.workers = workers;
    }
    if matches.is_present("no-fallback") {
        config.fallback = false;
    }
    config.max_states = parse_arg(matches, "max-states");
    config
}

fn parse_arg<T>(matches: &ArgMatches<'_>, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    matches.value_of(name).map(|value| {
        value.parse().unwrap_or_else(|err| {
            println!("Invalid value for --{}: {}", name, err);
            process::exit(1);
        })
    })
}
