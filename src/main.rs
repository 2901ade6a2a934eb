//! trv-setback entry point: CLI wiring and config-driven scenario runs.

use std::path::{Path, PathBuf};
use std::process;

use tracing::{Level, info};

use trv_setback::config::ScenarioConfig;
use trv_setback::io::export::export_csv;
use trv_setback::model::{Archetype, Regulation};
use trv_setback::report::{DEFAULT_SAG_TEMPERATURES_C, ReferenceReport, SagTable, SummaryTable};
use trv_setback::sim::run_scenario_with_options;
use trv_setback::weather::stations::load_dataset_201x;
use trv_setback::weather::{HourlyTemperature, load_ddn_csv};

/// Parsed CLI arguments.
#[derive(Default)]
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    temperatures: Option<String>,
    archetype: Option<Archetype>,
    regulation: Option<Regulation>,
    hourly_out: Option<String>,
    reference: bool,
    sag_table: bool,
    summary_table: bool,
    stations: Option<String>,
    verbose: bool,
}

fn print_help() {
    eprintln!("trv-setback: does TRV setback raise heat-pump electricity demand?");
    eprintln!();
    eprintln!("Usage: trv-setback [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --temperatures <path>    degreedays.net hourly CSV (default: synthetic year)");
    eprintln!("  --archetype <name>       bungalow or detached");
    eprintln!("  --regulation <name>      stiff or soft");
    eprintln!("  --hourly-out <path>      Export per-hour results to CSV");
    eprintln!("  --reference              Print the single-temperature computation and exit");
    eprintln!("  --sag-table              Print the soft regulation sag table and exit");
    eprintln!("  --summary-table          Print stiff and soft tables over every archetype and layout, then exit");
    eprintln!("  --stations <dir>         Summary table over the 201X station set under <dir>");
    eprintln!("  --verbose                Debug logging on stderr");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the reference preset is used.");
}

/// Returns the value following a flag, or exits with an error.
fn flag_value(args: &[String], i: usize, flag: &str, what: &str) -> String {
    match args.get(i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                cli.scenario_path = Some(flag_value(&args, i, flag, "a path argument"));
            }
            "--preset" => {
                i += 1;
                cli.preset = Some(flag_value(&args, i, flag, "a name argument"));
            }
            "--temperatures" => {
                i += 1;
                cli.temperatures = Some(flag_value(&args, i, flag, "a path argument"));
            }
            "--archetype" => {
                i += 1;
                match flag_value(&args, i, flag, "a name argument").parse::<Archetype>() {
                    Ok(a) => cli.archetype = Some(a),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--regulation" => {
                i += 1;
                match flag_value(&args, i, flag, "a name argument").parse::<Regulation>() {
                    Ok(r) => cli.regulation = Some(r),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--hourly-out" => {
                i += 1;
                cli.hourly_out = Some(flag_value(&args, i, flag, "a path argument"));
            }
            "--reference" => cli.reference = true,
            "--sag-table" => cli.sag_table = true,
            "--summary-table" => cli.summary_table = true,
            "--stations" => {
                i += 1;
                cli.stations = Some(flag_value(&args, i, flag, "a directory argument"));
                cli.summary_table = true;
            }
            "--verbose" | "-v" => cli.verbose = true,
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Loads the scenario: --scenario takes priority, then --preset, then the
/// reference default. Command-line overrides are applied on top.
fn load_scenario(cli: &CliArgs) -> ScenarioConfig {
    let loaded = if let Some(ref path) = cli.scenario_path {
        ScenarioConfig::from_toml_file(Path::new(path))
    } else if let Some(ref name) = cli.preset {
        ScenarioConfig::from_preset(name)
    } else {
        Ok(ScenarioConfig::reference())
    };
    let mut scenario = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if let Some(a) = cli.archetype {
        scenario.run.archetype = a;
    }
    if let Some(r) = cli.regulation {
        scenario.run.regulation = r;
    }
    if let Some(ref path) = cli.temperatures {
        scenario.run.temperatures = Some(PathBuf::from(path));
    }
    scenario
}

fn load_temperatures(scenario: &ScenarioConfig) -> Vec<HourlyTemperature> {
    match scenario.run.temperatures {
        Some(ref path) => {
            info!(path = %path.display(), "loading hourly temperatures");
            load_ddn_csv(path).unwrap_or_else(|e| {
                eprintln!("error: {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => {
            let weather = scenario.synthetic.weather();
            info!(days = weather.days, seed = weather.seed, "generating synthetic temperatures");
            weather.generate()
        }
    }
}

/// Labelled series for the summary table: the 201X station set when
/// --stations is given, otherwise the scenario's own series.
fn load_summary_series(cli: &CliArgs, scenario: &ScenarioConfig) -> Vec<(String, Vec<HourlyTemperature>)> {
    if let Some(ref dir) = cli.stations {
        let loaded = load_dataset_201x(Path::new(dir)).unwrap_or_else(|e| {
            eprintln!("error: {dir}: {e}");
            process::exit(1);
        });
        return loaded.into_iter().map(|(d, hours)| (d.label(), hours)).collect();
    }
    let label = scenario
        .run
        .temperatures
        .as_ref()
        .and_then(|p| p.file_name())
        .map_or_else(|| "synthetic".to_string(), |n| n.to_string_lossy().into_owned());
    vec![(label, load_temperatures(scenario))]
}

fn main() {
    let cli = parse_args();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let scenario = load_scenario(&cli);

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let params = scenario.model_parameters().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });
    let archetype = scenario.run.archetype;

    if cli.reference || cli.sag_table || cli.summary_table {
        if cli.reference {
            match ReferenceReport::compute(&params, archetype) {
                Ok(report) => println!("{report}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }
        if cli.sag_table {
            match SagTable::compute(&params, archetype, DEFAULT_SAG_TEMPERATURES_C) {
                Ok(table) => println!("{table}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }
        if cli.summary_table {
            let series = load_summary_series(&cli, &scenario);
            let views: Vec<(&str, &[HourlyTemperature])> = series
                .iter()
                .map(|(label, hours)| (label.as_str(), hours.as_slice()))
                .collect();
            let tables = SummaryTable::compute_both(&params, scenario.engine_options(), &views);
            for table in &tables {
                println!("{table}");
            }
            if tables.iter().all(|t| t.failed_rows() == t.rows.len()) {
                eprintln!("error: every summary run failed");
                process::exit(1);
            }
        }
        return;
    }

    let temperatures = load_temperatures(&scenario);
    let run = run_scenario_with_options(
        &params,
        &temperatures,
        archetype,
        scenario.run.regulation,
        scenario.engine_options(),
    )
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    println!("{}", run.summary);

    if let Some(ref path) = cli.hourly_out {
        if let Err(e) = export_csv(&run.hours, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Hourly results written to {path}");
    }
}
