//! CLI entry point for the games registry.
//!
//! This binary lists, inspects, searches and checks the game registry,
//! honoring a JSON configuration file and a translation catalog.
//!
//! # Usage
//!
//! ```bash
//! games [OPTIONS] <COMMAND>
//!
//! # Choice list with two pinned games and a separator
//! games list --first TIB,WOW --first-break "---"
//!
//! # One game as JSON
//! games --format json show poe
//!
//! # Names starting with "diablo", in German
//! games --lang de search diablo --mode starts-with
//!
//! # Data checks, including the icon directory
//! games check --icons static/icons
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use games_core::{Config, GameTuple, GamesOptions, I18nConfig};
use games_i18n::{Catalog, Translator};
use games_registry::{checks, Game, Games, NameLookup, SearchOptions};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Game code registry: list, look up, search and check games.
#[derive(Parser)]
#[command(name = "games", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "GAMES_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Display language (overrides the configured language).
    #[arg(short, long, global = true, env = "GAMES_LANG")]
    lang: Option<String>,

    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the ordered choice list.
    List(ListArgs),

    /// Show one game.
    Show {
        /// Code, alternate code or numeric code.
        code: String,
    },

    /// Find games by name.
    Search {
        /// Text (or pattern with `--regex`) to match against names.
        text: String,

        /// How the text is matched.
        #[arg(short, long, value_enum, default_value_t = SearchMode::Exact)]
        mode: SearchMode,

        /// Treat the text as a regular expression.
        #[arg(long, conflicts_with = "mode")]
        regex: bool,

        /// Match case.
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Check the registry data, and optionally an icon directory.
    Check {
        /// Directory holding one `<CODE>.svg` icon per game.
        #[arg(long)]
        icons: Option<Utf8PathBuf>,
    },
}

/// Choice list flags. Each one overrides the configuration file.
#[derive(Args, Default)]
struct ListArgs {
    /// Codes pinned to the top of the list (comma-separated).
    #[arg(long, value_delimiter = ',')]
    first: Vec<String>,

    /// Separator label between the pinned codes and the rest.
    #[arg(long)]
    first_break: Option<String>,

    /// Sort the pinned codes by name.
    #[arg(long)]
    first_sort: bool,

    /// Repeat the pinned codes in the main list.
    #[arg(long)]
    first_repeat: bool,

    /// Restrict the list to these codes (comma-separated).
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Use the static names instead of the common names.
    #[arg(long)]
    no_common_names: bool,
}

impl ListArgs {
    /// Converts the flags that were given into registry options.
    fn options(&self) -> GamesOptions {
        let mut options = GamesOptions::default();
        if !self.first.is_empty() {
            options = options.with_first(&self.first);
        }
        if let Some(label) = &self.first_break {
            options = options.with_first_break(label.as_str());
        }
        if self.first_sort {
            options = options.with_first_sort(true);
        }
        if self.first_repeat {
            options = options.with_first_repeat(true);
        }
        if !self.only.is_empty() {
            options = options.with_only(self.only.iter().collect());
        }
        if self.no_common_names {
            options = options.with_common_names(false);
        }
        options
    }
}

/// Output format.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Name matching mode for `search`.
#[derive(Clone, Copy, ValueEnum)]
enum SearchMode {
    /// Whole name.
    Exact,
    /// Anywhere in the name.
    Contains,
    /// Start of the name.
    StartsWith,
    /// End of the name.
    EndsWith,
}

/// Maps search flags onto a name lookup.
fn name_lookup(text: &str, mode: SearchMode, regex: bool, case_sensitive: bool) -> NameLookup {
    let text = text.to_owned();
    match (regex, mode, case_sensitive) {
        (true, _, true) => NameLookup::Regex(text),
        (true, _, false) => NameLookup::IRegex(text),
        (false, SearchMode::Exact, true) => NameLookup::Name(text),
        (false, SearchMode::Exact, false) => NameLookup::IName(text),
        (false, SearchMode::Contains, true) => NameLookup::Contains(text),
        (false, SearchMode::Contains, false) => NameLookup::IContains(text),
        (false, SearchMode::StartsWith, true) => NameLookup::StartsWith(text),
        (false, SearchMode::StartsWith, false) => NameLookup::IStartsWith(text),
        (false, SearchMode::EndsWith, true) => NameLookup::EndsWith(text),
        (false, SearchMode::EndsWith, false) => NameLookup::IEndsWith(text),
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default. Logs go
/// to stderr so command output stays parseable.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Loads the configuration file, or the defaults when none is given.
fn load_config(path: Option<&Utf8Path>) -> color_eyre::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let config = Config::from_file(path)?;
    info!(path = %path, "Loaded configuration");
    Ok(config)
}

/// Loads the translation catalog and activates `language` on it.
fn load_translator(i18n: &I18nConfig, language: &str) -> color_eyre::Result<Arc<Catalog>> {
    let catalog = match &i18n.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::new(),
    };
    let previous = catalog.activate(language);
    debug!(%previous, language, "Activated display language");
    Ok(Arc::new(catalog))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Renders the choice list.
fn run_list(games: &Games, format: OutputFormat) -> color_eyre::Result<String> {
    let choices: Vec<GameTuple> = games.choices().collect();
    info!(choices = choices.len(), "Listing games");
    match format {
        OutputFormat::Text => Ok(render_table(&choices)),
        OutputFormat::Json => to_json(&choices),
    }
}

/// Renders one game.
///
/// # Errors
///
/// Returns an error if `code` does not resolve to a game.
fn run_show(games: &Games, code: &str, format: OutputFormat) -> color_eyre::Result<String> {
    let game = Game::new(code, games);
    if !games.contains(game.code()) {
        return Err(eyre!("Unknown game code: {code}"));
    }
    match format {
        OutputFormat::Text => Ok(render_game(&game)),
        OutputFormat::Json => to_json(&game),
    }
}

/// Renders the games matching a name lookup.
fn run_search(
    games: &Games,
    lookup: &NameLookup,
    language: &str,
    format: OutputFormat,
) -> color_eyre::Result<String> {
    let options = SearchOptions::default().with_language(language);
    let codes = games.lookup_with(lookup, &options)?;
    info!(%lookup, matches = codes.len(), "Searched games");

    let found: Vec<GameTuple> = codes
        .iter()
        .filter_map(|code| games.translate_pair(code))
        .collect();
    match format {
        OutputFormat::Text => Ok(render_table(&found)),
        OutputFormat::Json => to_json(&found),
    }
}

/// Runs the data checks.
///
/// # Errors
///
/// Returns an error if any problem is found, after the report is written.
fn run_check(
    games: &Games,
    icons: Option<&Utf8Path>,
    format: OutputFormat,
) -> color_eyre::Result<()> {
    let report = checks::run(games, icons);
    let content = match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => to_json(&report)?,
    };
    emit(&content)?;

    if report.is_clean() {
        Ok(())
    } else {
        Err(eyre!("{} problem(s) found", report.problem_count()))
    }
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Renders `(code, name)` rows with the codes left-aligned in one column.
fn render_table(rows: &[GameTuple]) -> String {
    use std::fmt::Write;

    let width = rows.iter().map(|row| row.code.len()).max().unwrap_or(0);
    let mut output = String::new();
    for row in rows {
        let _ = writeln!(output, "{:<width$}  {}", row.code, row.name);
    }
    output
}

/// Renders one game as `key: value` lines.
fn render_game(game: &Game<'_>) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    let _ = writeln!(output, "code:     {}", game.code());
    let _ = writeln!(output, "name:     {}", game.name());
    let _ = writeln!(output, "alpha3:   {}", or_dash(game.alpha3()));
    let _ = writeln!(
        output,
        "numeric:  {}",
        or_dash(game.numeric_padded().unwrap_or_default())
    );
    let _ = writeln!(output, "ioc code: {}", or_dash(game.ioc_code()));
    let _ = writeln!(output, "icon:     {}", game.icon_url());
    output
}

fn or_dash(value: String) -> String {
    if value.is_empty() {
        "-".to_owned()
    } else {
        value
    }
}

/// Serializes `value` as pretty JSON with a trailing newline.
fn to_json(value: &impl serde::Serialize) -> color_eyre::Result<String> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| eyre!("Failed to serialize JSON: {}", e))?;
    json.push('\n');
    Ok(json)
}

/// Writes `content` to stdout.
fn emit(content: &str) -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{content}")?;
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Build the process-wide registry from configuration and flags
    let config = load_config(cli.config.as_deref())?;
    let language = cli.lang.clone().unwrap_or_else(|| config.i18n.language.clone());
    let translator = load_translator(&config.i18n, &language)?;

    let mut games = Games::new()
        .with_settings(config.games)
        .with_translator(translator);
    if let Commands::List(args) = &cli.command {
        games = games.with_options(args.options());
    }
    let games = games_registry::install(games)
        .map_err(|_| eyre!("Games registry was initialized before configuration"))?;
    games.ensure_built()?;

    // 5. Route to appropriate command
    let format = cli.format;
    match &cli.command {
        Commands::List(_) => emit(&run_list(games, format)?),
        Commands::Show { code } => emit(&run_show(games, code, format)?),
        Commands::Search {
            text,
            mode,
            regex,
            case_sensitive,
        } => {
            let lookup = name_lookup(text, *mode, *regex, *case_sensitive);
            emit(&run_search(games, &lookup, &language, format)?)
        }
        Commands::Check { icons } => run_check(games, icons.as_deref(), format),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use games_core::Only;

    use super::*;

    fn pinned_games() -> Games {
        let args = ListArgs {
            first: vec!["tib".to_owned()],
            first_break: Some("---".to_owned()),
            only: vec!["WOW".to_owned(), "POE".to_owned(), "TIB".to_owned()],
            ..ListArgs::default()
        };
        Games::new().with_options(args.options())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags_become_options() {
        let cli = Cli::try_parse_from([
            "games",
            "list",
            "--first",
            "TIB,WOW",
            "--first-break",
            "---",
            "--first-sort",
        ])
        .unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected the list command");
        };
        let options = args.options();
        assert_eq!(options.first.as_deref(), Some(&["TIB".to_owned(), "WOW".to_owned()][..]));
        assert_eq!(options.first_break.as_deref(), Some("---"));
        assert_eq!(options.first_sort, Some(true));
        assert_eq!(options.first_repeat, None);
        assert_eq!(options.common_names, None);
        assert!(options.only.is_none());
    }

    #[test]
    fn test_only_flag() {
        let args = ListArgs {
            only: vec!["WOW".to_owned()],
            ..ListArgs::default()
        };
        let expected: Only = ["WOW"].into_iter().collect();
        assert_eq!(args.options().only, Some(expected));
    }

    #[test]
    fn test_regex_conflicts_with_mode() {
        let result = Cli::try_parse_from(["games", "search", "x", "--regex", "--mode", "contains"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_text() {
        let output = run_list(&pinned_games(), OutputFormat::Text).unwrap();
        assert_eq!(
            output,
            "TIB  Tibia\n     ---\nPOE  Path of Exile\nWOW  World of Warcraft\n"
        );
    }

    #[test]
    fn test_show() {
        let games = Games::new();
        let output = run_show(&games, "poe", OutputFormat::Text).unwrap();
        insta::assert_snapshot!(output, @r"
        code:     POE
        name:     Path of Exile
        alpha3:   POE
        numeric:  329
        ioc code: POE
        icon:     icons/poe.gif
        ");
        assert!(run_show(&games, "nope", OutputFormat::Text).is_err());
    }

    #[test]
    fn test_search_modes() {
        let games = pinned_games();
        let lookup = name_lookup("of", SearchMode::Contains, false, false);
        let output = run_search(&games, &lookup, "en", OutputFormat::Text).unwrap();
        assert_eq!(output, "POE  Path of Exile\nWOW  World of Warcraft\n");

        let lookup = name_lookup("tibia", SearchMode::Exact, false, true);
        let output = run_search(&games, &lookup, "en", OutputFormat::Json).unwrap();
        assert_eq!(output, "[]\n");

        let lookup = name_lookup("^t", SearchMode::Exact, true, false);
        assert_eq!(lookup, NameLookup::IRegex("^t".to_owned()));
    }
}
