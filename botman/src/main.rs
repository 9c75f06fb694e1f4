//! Entry point for the botman TUI. Parses args, resolves settings and runs the App.

use std::{
    env,
    fs::OpenOptions,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};

use anyhow::Context;
use botman::{
    app::App,
    auth::{AuthProvider, SessionAuth},
    config::{load_settings, save_settings, session_path, Overrides},
    presenter::{Panel, Presenter, PresenterState},
    source::{AnySource, FileSource, MetricsSource, StaticSource},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct ParsedArgs {
    snapshot: Option<String>,
    wallet: Option<String>,
    log: Option<String>,
    save: bool,
    demo: bool,
    dry_run: bool,
}

fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--snapshot FILE|-s FILE] [--wallet NAME|-w NAME] [--log FILE|-l FILE] [--save] [--demo] [--dry-run]"
    )
}

enum ArgsError {
    /// `--help`: print usage and exit cleanly.
    Help(String),
    Invalid(String),
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, ArgsError> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "botman".into());
    let mut snapshot: Option<String> = None;
    let mut wallet: Option<String> = None;
    let mut log: Option<String> = None;
    let mut save = false; // --save
    let mut demo = false; // --demo
    let mut dry_run = false; // --dry-run

    // A flag that takes a value must get one; never fall back to defaults silently.
    let missing = |flag: &str| ArgsError::Invalid(format!("Missing value for {flag}. {}", usage(&prog)));

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgsError::Help(usage(&prog))),
            "--snapshot" | "-s" => snapshot = Some(it.next().ok_or_else(|| missing(&arg))?),
            "--wallet" | "-w" => wallet = Some(it.next().ok_or_else(|| missing(&arg))?),
            "--log" | "-l" => log = Some(it.next().ok_or_else(|| missing(&arg))?),
            "--save" => save = true,
            "--demo" => demo = true,
            "--dry-run" => dry_run = true,
            _ if arg.starts_with("--snapshot=") || arg.starts_with("--wallet=") => {
                let (flag, v) = arg.split_once('=').unwrap_or((arg.as_str(), ""));
                if v.is_empty() {
                    return Err(missing(flag));
                }
                if flag == "--snapshot" {
                    snapshot = Some(v.to_string());
                } else {
                    wallet = Some(v.to_string());
                }
            }
            _ => {
                return Err(ArgsError::Invalid(format!(
                    "Unexpected argument '{arg}'. {}",
                    usage(&prog)
                )))
            }
        }
    }
    Ok(ParsedArgs {
        snapshot,
        wallet,
        log,
        save,
        demo,
        dry_run,
    })
}

// The TUI owns stdout, so tracing only goes to a file when one is named.
fn init_logging(path: Option<&str>) -> anyhow::Result<()> {
    let Some(path) = path
        .map(PathBuf::from)
        .or_else(|| env::var_os("BOTMAN_LOG").map(PathBuf::from))
    else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_summary<A: AuthProvider, S: MetricsSource>(p: &Presenter<A, S>) {
    println!("state: {}", p.state_name());
    println!("fetches: {}", p.fetch_count());
    match p.state() {
        PresenterState::Unauthenticated => println!("action: connect wallet"),
        PresenterState::Authenticated(Panel::Unavailable(reason)) => println!("error: {reason}"),
        PresenterState::Authenticated(Panel::Ready(d)) => {
            println!("cpu: {}%", d.snapshot.cpu);
            println!("cores: {}", d.snapshot.core_count);
            for e in d.memory.entries().iter().chain(d.swap.entries().iter()) {
                println!("{}: {}", e.label, e.value);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(ArgsError::Help(msg)) => {
            eprintln!("{msg}");
            return Ok(());
        }
        Err(ArgsError::Invalid(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };
    init_logging(parsed.log.as_deref())?;

    let overrides = Overrides {
        snapshot: parsed.snapshot.map(PathBuf::from),
        wallet: parsed.wallet,
        demo: parsed.demo,
    };
    let settings = load_settings().merged_with(&overrides);
    if parsed.save {
        save_settings(&settings).context("saving settings")?;
    }

    let source = match settings.snapshot.as_ref() {
        Some(path) => AnySource::File(FileSource::new(path)),
        None => AnySource::Static(StaticSource::demo()),
    };
    let auth = SessionAuth::new(
        session_path(),
        settings.wallet_label(),
        Duration::from_millis(settings.approve_delay_ms),
    );
    info!(snapshot = ?settings.snapshot, "starting");

    let presenter = Presenter::mount(auth, source);
    if parsed.dry_run {
        print_summary(&presenter);
        return Ok(());
    }

    let mut app = App::new(presenter, Duration::from_millis(settings.tick_ms));
    app.run().await
}
