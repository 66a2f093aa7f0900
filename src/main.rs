use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use pokewalk::catalog::HttpCatalogClient;
use pokewalk::config::Config;
use pokewalk::fetch::{FetchOrchestrator, FetchResult, FetchSettings, ResultStore, ThreadRandom};
use pokewalk::lifecycle::{LifecycleBinding, PermissionGate, StaticPermission};
use pokewalk::location::{
    load_track, random_walk, Coordinate, LocationRequest, MovementGate, MovementWatcher,
    TrackProvider,
};
use pokewalk::logging::init_tracing;
use pokewalk::presenter::{self, ConsoleNotifier, FAILED_TOAST};
use pokewalk::shutdown::ShutdownHandle;

#[derive(Debug, Parser)]
#[command(name = "pokewalk", version, about = "Fetch a random creature whenever you move")]
struct Cli {
    /// Config file (default: ~/.config/pokewalk/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Override the description language code
    #[arg(long, global = true, value_name = "CODE")]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one creature and print it
    Fetch {
        /// Fetch this id instead of a random one
        #[arg(long)]
        id: Option<u32>,

        /// Print the merged record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a walk and fetch a creature on every significant move
    Walk(WalkArgs),
}

#[derive(Debug, Args)]
struct WalkArgs {
    /// JSON track of {"latitude", "longitude"} waypoints
    #[arg(long, value_name = "PATH")]
    track: Option<PathBuf>,

    /// Steps in the generated random walk (ignored with --track)
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Distance between generated waypoints
    #[arg(long, default_value_t = 15.0)]
    step_meters: f64,

    /// Start latitude of the generated walk
    #[arg(long, default_value_t = 40.4168, allow_negative_numbers = true)]
    start_lat: f64,

    /// Start longitude of the generated walk
    #[arg(long, default_value_t = -3.7038, allow_negative_numbers = true)]
    start_lon: f64,

    /// Override location.interval_ms
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Start without location permission (grant it with `g`)
    #[arg(long)]
    deny_location: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(&cli)?;

    match cli.command {
        Command::Fetch { id, json } => run_fetch(&config, id, json).await,
        Command::Walk(args) => {
            if let Some(interval_ms) = args.interval_ms {
                config.location.interval_ms = interval_ms;
                config.location.fastest_interval_ms =
                    config.location.fastest_interval_ms.min(interval_ms);
                config.validate()?;
            }
            run_walk(&config, args).await
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(language) = &cli.language {
        config.api.language = language.clone();
    }

    config.validate()?;
    Ok(config)
}

fn build_orchestrator(config: &Config) -> anyhow::Result<FetchOrchestrator> {
    let client = HttpCatalogClient::new(&config.api).context("failed to build HTTP client")?;
    Ok(FetchOrchestrator::new(
        Arc::new(client),
        Arc::new(ThreadRandom),
        ResultStore::new(),
        FetchSettings::from(&config.api),
    ))
}

async fn run_fetch(config: &Config, id: Option<u32>, json: bool) -> anyhow::Result<()> {
    let orchestrator = build_orchestrator(config)?;

    let task = match id {
        Some(id) => orchestrator.fetch_by_id(id),
        None => orchestrator.fetch_random(),
    };
    task.await.context("fetch task failed")?;

    match orchestrator.store().current() {
        Some(FetchResult::Found(entity)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&entity)?);
            } else {
                println!("{}", presenter::render(&entity));
            }
            Ok(())
        }
        Some(FetchResult::NoResult) | None => bail!(FAILED_TOAST),
    }
}

const WALK_HELP: &str = "Commands: <Enter>/f fetch now, p pause, r resume, g grant permission, s status, q quit";

async fn run_walk(config: &Config, args: WalkArgs) -> anyhow::Result<()> {
    let waypoints = match &args.track {
        Some(path) => load_track(path)?,
        None => random_walk(
            Coordinate::new(args.start_lat, args.start_lon),
            args.steps,
            args.step_meters,
            &mut rand::thread_rng(),
        ),
    };

    let provider = Arc::new(TrackProvider::new(waypoints));
    let permission = Arc::new(StaticPermission::new(!args.deny_location));
    let orchestrator = build_orchestrator(config)?;
    let watcher = Arc::new(MovementWatcher::new(
        MovementGate::new(config.location.min_displacement_meters),
        orchestrator.clone(),
        Arc::new(ConsoleNotifier),
    ));
    let mut binding = LifecycleBinding::new(
        provider.clone(),
        permission.clone(),
        watcher,
        LocationRequest::from(&config.location),
    );

    let shutdown = ShutdownHandle::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.signal();
            }
        });
    }

    let mut results = orchestrator.store().subscribe();
    let presenter_task = tokio::spawn(async move {
        while let Some(result) = results.next().await {
            if let Some(entity) = result.entity() {
                println!("{}\n", presenter::render(entity));
            }
            println!("[{}]\n", presenter::toast(&result));
        }
    });

    tracing::info!(
        waypoints = provider.len(),
        threshold_meters = config.location.min_displacement_meters,
        interval_ms = config.location.interval_ms,
        "Starting walk"
    );
    println!("{}", WALK_HELP);
    binding.resume()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut track_done = false;

    while !track_done && !shutdown.is_shutting_down() {
        tokio::select! {
            _ = shutdown.wait() => {}
            _ = provider.wait_finished() => {
                tracing::info!("Track finished");
                track_done = true;
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    handle_command(line.trim(), &mut binding, &orchestrator, &permission, &provider, &shutdown);
                }
                Ok(None) | Err(_) => stdin_open = false,
            },
        }
    }

    if track_done {
        tokio::select! {
            _ = shutdown.wait() => {}
            _ = binding.drain() => {}
        }
    }
    binding.pause();

    // Let outstanding fetches publish before tearing down.
    tokio::select! {
        _ = shutdown.wait() => {}
        _ = orchestrator.wait_idle() => {}
    }

    drop(binding);
    drop(orchestrator);
    let _ = tokio::time::timeout(Duration::from_secs(1), presenter_task).await;
    Ok(())
}

fn handle_command(
    command: &str,
    binding: &mut LifecycleBinding,
    orchestrator: &FetchOrchestrator,
    permission: &StaticPermission,
    provider: &TrackProvider,
    shutdown: &ShutdownHandle,
) {
    match command {
        "" | "f" => drop(orchestrator.fetch_random()),
        "p" => {
            let state = binding.pause();
            println!("state: {:?}", state);
        }
        "r" => match binding.resume() {
            Ok(state) => println!("state: {:?}", state),
            Err(err) => eprintln!("resume failed: {}", err),
        },
        "g" => {
            permission.set_granted(true);
            println!("permission granted: {}", permission.is_granted());
        }
        "s" => {
            let last = binding
                .watcher()
                .last_accepted()
                .map(|p| format!("({:.5}, {:.5})", p.latitude, p.longitude))
                .unwrap_or_else(|| "none".to_string());
            println!(
                "state: {:?}, last accepted: {}, waypoints: {}/{}, in flight: {}",
                binding.state(),
                last,
                provider.emitted(),
                provider.len(),
                orchestrator.in_flight()
            );
        }
        "q" => shutdown.signal(),
        _ => println!("{}", WALK_HELP),
    }
}
