use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use thumbnailer::imaging::SizingPolicy;
use thumbnailer::{config, output, process};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "thumbnailer")]
#[command(version, about = "Shrink a directory of images into PNG thumbnails")]
#[command(long_about = "\
Shrink a directory of images into PNG thumbnails

Every .png, .jpg and .jpeg file in FROM (case-insensitive, not recursive) is
downsampled and written to TO as thumbnail0.png, thumbnail1.png, ... in
sorted filename order. Thumbnails are never larger than their source.

PAR selects how WIDTH and HEIGHT are used:

  0  exact          resize to WIDTH x HEIGHT (centered, never stretched)
  1  by width       WIDTH is fixed, height follows the aspect ratio
  2  by height      HEIGHT is fixed, width follows the aspect ratio
  3  shrink factor  divide both sides by WIDTH (may be fractional)

Arguments a mode does not use are ignored but must still be numbers.")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Directory of source images
    #[arg(value_name = "FROM")]
    from: PathBuf,

    /// Directory to place thumbnails in (must exist)
    #[arg(value_name = "TO")]
    to: PathBuf,

    /// Sizing policy (0-3, see above)
    #[arg(value_name = "PAR")]
    par: i64,

    /// Target width, or shrink factor when PAR=3
    #[arg(value_name = "WIDTH")]
    width: f64,

    /// Target height
    #[arg(value_name = "HEIGHT")]
    height: i64,

    /// TOML run configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Replace thumbnails that already exist in TO
    #[arg(long)]
    overwrite: bool,

    /// Max parallel workers (capped at CPU cores)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = match SizingPolicy::from_args(cli.par, cli.width, cli.height) {
        Ok(policy) => policy,
        Err(err) => Cli::command().error(ErrorKind::InvalidValue, err).exit(),
    };

    match run(&cli, policy) {
        Ok(result) if result.skipped() == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    cli: &Cli,
    policy: SizingPolicy,
) -> Result<process::ProcessResult, Box<dyn std::error::Error>> {
    let mut run_config = config::load_config(cli.config.as_deref())?;
    if cli.overwrite {
        run_config.output.overwrite = true;
    }
    if let Some(jobs) = cli.jobs {
        run_config.processing.max_processes = Some(jobs);
    }
    run_config.validate()?;
    init_thread_pool(&run_config.processing);

    let options = process::ProcessOptions::from_config(policy, &run_config);
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = process::process(&cli.from, &cli.to, &options, Some(tx));
    if printer.join().is_err() {
        tracing::warn!("progress printer thread panicked");
    }

    let result = result?;
    output::print_summary(&result);
    Ok(result)
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("thumbnailer={level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
