mod host;
mod terminal;
mod view;

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use filterselect::{FilterableSelect, Outcome, SelectConfig, SelectList, SelectOption, TextInput};
use simplelog::{Config, LevelFilter, WriteLogger};

use terminal::Terminal;
use view::Layout;

const DEFAULT_OPTIONS: &[&str] = &[
    "--", "Apple", "Apricot", "Avocado", "Banana", "Blackberry", "Cherry", "Grape", "Lemon",
    "Mango", "Pineapple",
];

/// Searchable dropdown in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Option labels; the first one is treated as a placeholder row
    options: Vec<String>,

    /// Characters needed before options are hidden
    #[arg(long, default_value_t = 2)]
    min_query_len: usize,

    /// Milliseconds an input blur waits for the list to take focus
    #[arg(long, default_value_t = 50)]
    grace_ms: u64,

    /// Debug log destination
    #[arg(long, default_value = "filterselect-demo.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(std::io::Error::other)?;

    let labels: Vec<String> = if cli.options.is_empty() {
        DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.options
    };
    let config = SelectConfig::new()
        .min_query_len(cli.min_query_len)
        .blur_grace(Duration::from_millis(cli.grace_ms));
    let list = SelectList::with_options(labels.into_iter().map(SelectOption::text));
    let mut select = FilterableSelect::with_config(TextInput::default().outer_height(3), list, config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let mut term = Terminal::new()?;
    let mut status = String::from("(nothing yet)");

    loop {
        let layout = Layout::compute(&select);
        view::render(&mut term, &select, &layout, &status)?;

        let timeout = select
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));
        let raw_events = term.poll(timeout)?;

        let mut events = Vec::new();
        for raw in &raw_events {
            if host::is_quit(raw) {
                log::info!("[demo] quit");
                return Ok(());
            }
            events.extend(host::translate(raw, &select, &layout));
        }

        let mut outcomes = Vec::new();
        for event in &events {
            log::debug!("[demo] event {:?}", event);
            outcomes.extend(select.dispatch(event, Instant::now()));
        }
        outcomes.extend(select.tick(Instant::now()));

        for outcome in outcomes {
            if let Outcome::Committed { label, value } = outcome {
                status = format!("{label} ({})", value.unwrap_or_default());
            }
        }
    }
}
