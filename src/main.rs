//! Terminal front end and entry point.
//!
//! A thin line-oriented shell over the library: every line typed on stdin
//! becomes the new search text, and `:`-prefixed lines are commands. Each
//! state change redraws the whole frame to stdout; diagnostics go to the log
//! file, never to the terminal.
//!
//! # Event Mapping
//!
//! - `<text>` → `FeedController::set_query(text)` (an empty line clears it)
//! - `:open N` → `FeedController::select_image` for tile N
//! - `:close` → `FeedController::close_dialog`
//! - `:clear` → `FeedController::clear_query`
//! - `:q` → quit
//!
//! # Runtime
//!
//! A `current_thread` tokio runtime drives one loop that waits on either the
//! next stdin line or the next controller event (timer expiry, fetch
//! response), so state is only ever touched from this task.

#![allow(clippy::multiple_crate_versions)]

use photogrid::observability::init_tracing;
use photogrid::ui::{render, CLEAR_SCREEN};
use photogrid::{initialize, Config, FeedController, HttpPhotoService};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

const HELP: &str = "\
photogrid: browse and search photos from an Unsplash-style API

USAGE:
    photogrid [OPTIONS]

OPTIONS:
    --config <PATH>         Config file (default: <config_dir>/photogrid/config.toml)
    --access-key <KEY>      API access key, overrides the config file
    --trace-level <LEVEL>   Log filter, overrides the config file
    -h, --help              Print this help

COMMANDS (typed at the prompt):
    <text>      search for <text>; an empty line shows the feed
    :open N     show details for tile N
    :close      close the details dialog
    :clear      clear the search
    :q          quit
";

/// Parsed command-line flags.
#[derive(Debug, Default)]
struct Args {
    help: bool,
    config: Option<PathBuf>,
    access_key: Option<String>,
    trace_level: Option<String>,
}

impl Args {
    fn parse(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            config: args.opt_value_from_str("--config")?,
            access_key: args.opt_value_from_str("--access-key")?,
            trace_level: args.opt_value_from_str("--trace-level")?,
        };

        let rest = args.finish();
        if let Some(extra) = rest.first() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument '{}'", extra.to_string_lossy()),
            });
        }

        Ok(parsed)
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Query(String),
    Open(usize),
    Close,
    Clear,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.strip_prefix(':') else {
            return Self::Query(line.to_string());
        };

        let mut words = command.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("q" | "quit"), None, None) => Self::Quit,
            (Some("close"), None, None) => Self::Close,
            (Some("clear"), None, None) => Self::Clear,
            (Some("open"), Some(n), None) => n
                .parse()
                .map_or_else(|_| Self::Unknown(line.to_string()), Self::Open),
            _ => Self::Unknown(line.to_string()),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::parse(pico_args::Arguments::from_env()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("photogrid: {e}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    if args.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("photogrid: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> photogrid::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default()?,
    };
    if let Some(key) = args.access_key {
        config.access_key = Some(key);
    }
    if let Some(level) = args.trace_level {
        config.trace_level = level;
    }

    init_tracing(&config);
    tracing::info!(api = %config.api_base_url, "starting photogrid");

    let service = HttpPhotoService::from_config(&config)?;
    let state = initialize(&config);
    let mut controller = FeedController::new(Arc::new(service), state, config.quiet_period());

    let mut stdout = tokio::io::stdout();
    controller.mount();
    draw(&mut stdout, &controller, &config).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let needs_render = tokio::select! {
            line = lines.next_line() => match line? {
                None => break,
                Some(line) => match Command::parse(&line) {
                    Command::Quit => break,
                    command => apply(&mut controller, command),
                },
            },
            render = controller.process_next() => render,
        };

        if needs_render {
            draw(&mut stdout, &controller, &config).await?;
        }
    }

    controller.shutdown();
    tracing::info!("photogrid exiting");
    Ok(())
}

fn apply(controller: &mut FeedController, command: Command) -> bool {
    match command {
        Command::Query(text) => controller.set_query(text),
        Command::Open(position) => match controller.image_id_at(position).map(str::to_owned) {
            Some(id) => controller.select_image(id),
            None => {
                tracing::debug!(position, "no tile at position");
                false
            }
        },
        Command::Close => controller.close_dialog(),
        Command::Clear => controller.clear_query(),
        Command::Unknown(line) => {
            tracing::debug!(input = %line, "unknown command");
            false
        }
        Command::Quit => false,
    }
}

async fn draw(stdout: &mut Stdout, controller: &FeedController, config: &Config) -> std::io::Result<()> {
    let frame = render(controller.state(), config.rows, config.cols);
    let prompt_row = config.rows + 1;
    let output = format!("{CLEAR_SCREEN}{frame}\u{1b}[{prompt_row};1H> ");
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await
}
