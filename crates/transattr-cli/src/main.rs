mod display;

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;
use transattr_core::config::{MAX_MARGIN_DAYS, OFFLINE_WORK_MARGIN_DAYS};
use transattr_core::{CheckConfig, check_attribution};
use transattr_wiki::api::{DEFAULT_API_URL, DEFAULT_REVISION_LIMIT};
use transattr_wiki::{MediaWikiSource, WikiClient, WikiConfig};

use crate::display::{JsonPresenter, Presenter, TextPresenter};

/// Exit status when the wiki could not be read.
const FETCH_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "transattr", version, about = "Flag likely unattributed translations on a wiki")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one article's history and citations.
    Check(CheckArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Page title, e.g. "Tour Eiffel" or "Draft:Tour_Eiffel".
    title: String,

    #[arg(long, env = "TRANSATTR_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Days of offline work tolerated before creation.
    #[arg(
        long,
        env = "TRANSATTR_MARGIN_DAYS",
        default_value_t = OFFLINE_WORK_MARGIN_DAYS,
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_MARGIN_DAYS))
    )]
    margin_days: u32,

    /// How many recent revisions to read summaries from.
    #[arg(long, env = "TRANSATTR_REVISION_LIMIT", default_value_t = DEFAULT_REVISION_LIMIT)]
    revision_limit: u32,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Check pages outside the article and draft namespaces too.
    #[arg(long)]
    any_namespace: bool,

    /// Also print the signals behind the outcome.
    #[arg(long)]
    details: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("transattr v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Check(args) => run_check(args, &mut std::io::stdout()).await,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// What to do with a page given its namespace.
#[derive(Debug, PartialEq, Eq)]
enum Gate {
    Check,
    Skip { namespace: i64 },
}

fn namespace_gate(config: &CheckConfig, namespace: i64) -> Gate {
    if config.checks_namespace(namespace) {
        Gate::Check
    } else {
        Gate::Skip { namespace }
    }
}

/// Check one page and present the verdict on `out`.
///
/// Skipped pages and fetch failures write nothing to `out`.
async fn run_check<W: Write>(args: CheckArgs, out: &mut W) -> anyhow::Result<ExitCode> {
    let config = CheckConfig::default().with_margin_days(args.margin_days);
    let client = WikiClient::new(WikiConfig {
        api_url: args.api_url,
        revision_limit: args.revision_limit,
        timeout: Duration::from_secs(args.timeout_secs),
        ..WikiConfig::default()
    })?;
    let source = MediaWikiSource::new(client, &args.title);
    let title = source.title().to_string();

    if !args.any_namespace {
        let namespace = match source.client().namespace(&title).await {
            Ok(ns) => ns,
            Err(err) => {
                tracing::error!(title = %title, error = %err, "error checking translation attribution");
                return Ok(ExitCode::from(FETCH_FAILED));
            }
        };
        if let Gate::Skip { namespace } = namespace_gate(&config, namespace) {
            tracing::info!(title = %title, namespace, "namespace not checked, skipping");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let verdict = match check_attribution(&source, &config).await {
        Ok(verdict) => verdict,
        Err(err) => {
            tracing::error!(title = %title, error = %err, "error checking translation attribution");
            return Ok(ExitCode::from(FETCH_FAILED));
        }
    };

    let mut presenter: Box<dyn Presenter + '_> = match args.format {
        Format::Text => Box::new(TextPresenter::new(&mut *out, args.details)),
        Format::Json => Box::new(JsonPresenter::new(&mut *out)),
    };
    presenter.present(&title, &verdict)?;

    Ok(ExitCode::SUCCESS)
}
