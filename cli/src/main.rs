use std::cell::{Cell, RefCell};

use clap::Parser;
use optrie_core::{ParseReport, ParserConfig, Target};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "optrie-demo")]
#[command(about = "Dispatch tokens through the demo option table")]
#[command(after_help = "Options: -test/-t, -fdebug, -f<VALUE>, echo <TOKEN>, -level/-l <N>.\n\
                        Pass tokens after `--`, e.g. `optrie-demo -- -t -fhello`.")]
struct Cli {
    /// Print the final state and parse report as JSON.
    #[arg(long)]
    json: bool,
    /// Enable debug logging on stderr.
    #[arg(long)]
    verbose: bool,
    /// Skip the first token, treating it as a program name.
    #[arg(long)]
    skip_first: bool,
    /// Omit "did you mean" suggestions from errors.
    #[arg(long)]
    no_suggest: bool,
    /// Tokens to dispatch.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

/// Values written by the demo option handlers.
#[derive(Debug, Default)]
struct Outputs {
    is_set: Cell<bool>,
    debug: Cell<bool>,
    file: RefCell<Option<String>>,
    echoed: RefCell<Vec<String>>,
    level: Cell<Option<i64>>,
}

#[derive(Debug, Serialize)]
struct DemoState {
    is_set: bool,
    debug: bool,
    file: Option<String>,
    echoed: Vec<String>,
    level: Option<i64>,
}

impl From<Outputs> for DemoState {
    fn from(outputs: Outputs) -> Self {
        Self {
            is_set: outputs.is_set.get(),
            debug: outputs.debug.get(),
            file: outputs.file.into_inner(),
            echoed: outputs.echoed.into_inner(),
            level: outputs.level.get(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DemoOutput {
    state: DemoState,
    report: ParseReport,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "optrie_core=debug,optrie_demo=debug"
    } else {
        "optrie_core=error,optrie_demo=info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = ParserConfig::default()
        .skip_first(cli.skip_first)
        .suggest(!cli.no_suggest);

    let outputs = Outputs::default();
    let report = dispatch(&outputs, config, &cli.tokens).map_err(|err| err.to_string())?;
    let state = DemoState::from(outputs);

    if cli.json {
        let output = DemoOutput { state, report };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|err| format!("Failed to serialize output: {err}"))?;
        println!("{json}");
        return Ok(());
    }

    for diagnostic in &report.diagnostics {
        eprintln!("error: {}", diagnostic.message);
    }
    print_state(&state);
    Ok(())
}

/// Registers the demo option table and parses `tokens` against it.
fn dispatch(
    outputs: &Outputs,
    config: ParserConfig,
    tokens: &[String],
) -> optrie_core::Result<ParseReport> {
    let mut parser = optrie_core::Parser::with_config(config);

    parser
        .add("-test")?
        .alias("-t")?
        .bind(Target::flag(&outputs.is_set, true))?
        .finish();
    parser
        .add("-fdebug")?
        .bind(Target::flag(&outputs.debug, true))?
        .finish();
    parser
        .add("-f")?
        .bind(Target::remainder(|rest| {
            *outputs.file.borrow_mut() = Some(rest.to_string())
        }))?
        .finish();
    parser
        .add("echo")?
        .bind(Target::adjacent(|tokens| {
            let value = tokens.next_str()?;
            outputs.echoed.borrow_mut().push(value.to_string());
            Ok(())
        }))?
        .finish();
    parser
        .add("-level")?
        .alias("-l")?
        .bind(Target::adjacent(|tokens| {
            outputs.level.set(Some(tokens.next_int()?));
            Ok(())
        }))?
        .finish();

    debug!(options = parser.option_count(), "registered demo options");
    Ok(parser.parse(tokens))
}

fn print_state(state: &DemoState) {
    println!("is_set: {}", state.is_set);
    println!("debug: {}", state.debug);
    if let Some(file) = &state.file {
        println!("file: {file}");
    }
    for value in &state.echoed {
        println!("echo: {value}");
    }
    if let Some(level) = state.level {
        println!("level: {level}");
    }
}
