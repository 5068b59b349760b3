//! Livescatter - live scatter plot of random-walk series.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use livescatter::{Surface, Visualizer, VisualizerConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::backend::Backend;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "livescatter")]
#[command(about = "A live terminal scatter plot of random-walk series", long_about = None)]
struct Args {
    /// Comma-separated series labels
    #[arg(long, value_delimiter = ',', default_value = "alpha,beta,gamma")]
    series: Vec<String>,

    /// Plot the y axis on a log10 scale
    #[arg(long)]
    log_scale: bool,

    /// Stop adding points after this many
    #[arg(long)]
    points: Option<usize>,

    /// Delay between points, in milliseconds
    #[arg(long, default_value_t = 200)]
    interval_ms: u64,

    /// Seed for series colors and generated data
    #[arg(long)]
    seed: Option<u64>,

    /// Draw in memory and print the final frame to stdout
    #[arg(long, requires = "points")]
    headless: bool,

    /// Frame width for --headless
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Frame height for --headless
    #[arg(long, default_value_t = 24)]
    height: u16,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Multiplicative random walk, one strictly positive value per series.
struct RandomWalk {
    values: Vec<f64>,
    rng: StdRng,
}

impl RandomWalk {
    fn new(series: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let values = (0..series).map(|_| rng.random_range(1.0..100.0)).collect();
        Self { values, rng }
    }

    fn step(&mut self) -> &[f64] {
        for v in &mut self.values {
            *v *= 1.0 + self.rng.random_range(-0.1..0.1);
        }
        &self.values
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting livescatter");
    }

    let mut config = VisualizerConfig::default()
        .with_log_scale(args.log_scale)
        .with_title("livescatter");
    if let Some(seed) = args.seed {
        config = config.with_color_seed(seed);
    }

    let mut walk = RandomWalk::new(args.series.len(), args.seed);

    if args.headless {
        let points = args.points.unwrap_or(0);
        let surface = Surface::headless(args.width, args.height)?;
        let mut vis = Visualizer::with_config(
            surface,
            config.with_refresh_pause(Duration::ZERO),
            &args.series,
        )?;
        for i in 0..points {
            feed(&mut vis, &args.series, i as f64, walk.step())?;
            vis.update()?;
        }
        println!("{}", vis.surface().snapshot());
    } else {
        let surface = Surface::stdout_interactive()?;
        let mut vis = Visualizer::with_config(surface, config, &args.series)?;
        let interval = Duration::from_millis(args.interval_ms);
        let res = run_live(&mut vis, &args, &mut walk, interval);

        // Restore terminal
        drop(vis);

        if let Err(err) = res {
            eprintln!("Error: {}", err);
        }
    }

    if args.log.is_some() {
        tracing::info!("Livescatter exited");
    }

    Ok(())
}

fn feed<B: Backend>(
    vis: &mut Visualizer<B>,
    labels: &[String],
    x: f64,
    values: &[f64],
) -> livescatter::Result<()> {
    vis.add_data(x, labels.iter().map(String::as_str).zip(values.iter().copied()))
}

fn run_live<B: Backend>(
    vis: &mut Visualizer<B>,
    args: &Args,
    walk: &mut RandomWalk,
    interval: Duration,
) -> Result<()> {
    let mut added = 0usize;

    loop {
        if args.points.map_or(true, |limit| added < limit) {
            feed(vis, &args.series, added as f64, walk.step())?;
            added += 1;
            vis.update()?;
        }

        if event::poll(interval)? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}
