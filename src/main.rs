use anyhow::{bail, Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use ridge_runner::core::constants::{DEFAULT_WEB_PORT, REALTIME_FRAME_MS};
use ridge_runner::input::{map_key, KeyAction};
use ridge_runner::{logging, process_input, tick_runner, ui};
use ridge_runner::{GameSnapshot, RunnerConfig, RunnerGame};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct CliOptions {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    time_scaled: bool,
    log_path: Option<PathBuf>,
    serve_port: Option<u16>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    let config = build_config(&options)?;

    if let Some(port) = options.serve_port {
        let installed = match &options.log_path {
            Some(path) => logging::init_file(path),
            None => logging::init_stderr("info"),
        };
        installed.context("failed to install logger")?;
        return serve(config, port);
    }

    if let Some(path) = &options.log_path {
        logging::init_file(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
    }
    tracing::info!(
        seed = ?config.seed,
        time_scaled = config.time_scaled_physics,
        "terminal front end"
    );

    run_terminal(config)
}

/// Parse command-line flags. `Ok(None)` means the invocation was fully
/// handled (`--help`, `--version`).
fn parse_args(args: &[String]) -> Result<Option<CliOptions>> {
    let mut options = CliOptions::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).context("--config requires a file")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                i += 1;
                let seed = args.get(i).context("--seed requires a number")?;
                options.seed = Some(
                    seed.parse()
                        .with_context(|| format!("--seed: not a number: {}", seed))?,
                );
            }
            "--time-scaled" => options.time_scaled = true,
            "--log" => {
                i += 1;
                let path = args.get(i).context("--log requires a file")?;
                options.log_path = Some(PathBuf::from(path));
            }
            "--serve" => options.serve_port = Some(DEFAULT_WEB_PORT),
            arg if arg.starts_with("--serve=") => {
                let port = &arg["--serve=".len()..];
                options.serve_port = Some(
                    port.parse()
                        .with_context(|| format!("--serve: not a port: {}", port))?,
                );
            }
            "--version" | "-v" => {
                println!("ridge-runner {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => {
                print_usage();
                bail!("unknown argument: {}", other);
            }
        }
        i += 1;
    }
    Ok(Some(options))
}

fn print_usage() {
    eprintln!(
        "Ridge Runner - jump the ridge, dodge the rocks\n\
         \n\
         Usage: ridge-runner [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --config FILE     Load settings from a JSON file\n\
         \x20 --seed N          Seed obstacle generation\n\
         \x20 --time-scaled     Scale physics by elapsed time instead of per frame\n\
         \x20 --log FILE        Append logs to FILE (filter: RIDGE_RUNNER_LOG)\n\
         \x20 --serve[=PORT]    Serve the game to browsers (default port {})\n\
         \x20 --version, -v     Show version information\n\
         \x20 --help, -h        Show this help",
        DEFAULT_WEB_PORT
    );
}

fn build_config(options: &CliOptions) -> Result<RunnerConfig> {
    let mut config = match &options.config_path {
        Some(path) => RunnerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RunnerConfig::default(),
    };
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    if options.time_scaled {
        config.time_scaled_physics = true;
    }
    Ok(config)
}

#[cfg(feature = "web")]
fn serve(config: RunnerConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(ridge_runner::web::start_web_server(port, config))
        .with_context(|| format!("web server on port {} failed", port))
}

#[cfg(not(feature = "web"))]
fn serve(_config: RunnerConfig, _port: u16) -> Result<()> {
    bail!("--serve needs a build with the `web` feature (cargo run --features web -- --serve)")
}

fn run_terminal(config: RunnerConfig) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = stdout.execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("failed to set up terminal")
        .and_then(|mut terminal| game_loop(&mut terminal, config));

    // Restore before any error reaches the user
    let restored = restore_terminal();
    result?;
    restored.context("failed to restore terminal")
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    Ok(())
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: RunnerConfig,
) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = RunnerGame::new(config);

    let epoch = Instant::now();
    let frame_time = Duration::from_millis(REALTIME_FRAME_MS);
    let mut next_frame = Instant::now();

    loop {
        let snap = GameSnapshot::capture(&game);
        terminal.draw(|frame| ui::draw_ui(frame, &snap))?;

        // Input until the next frame is due
        next_frame += frame_time;
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match map_key(key_event, game.phase) {
                    KeyAction::Runner(input) => {
                        process_input(&mut game, input, elapsed_ms(epoch));
                    }
                    KeyAction::Quit => {
                        tracing::info!(best = game.best_score, "quit");
                        return Ok(());
                    }
                    KeyAction::Ignore => {}
                }
            }
        }

        // Don't try to catch up after a stall
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }

        tick_runner(&mut game, elapsed_ms(epoch), &mut rng);
    }
}

fn elapsed_ms(epoch: Instant) -> f64 {
    epoch.elapsed().as_secs_f64() * 1000.0
}
