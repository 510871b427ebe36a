// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::app_config::{AspectRatio, Config};
use crate::pipeline::HighlightPipeline;
use crate::transcript::TranscriptSource;

mod app_config;
mod errors;
mod pipeline;
mod render_job;
mod subtitle_writer;
mod transcript;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan highlight clips from a transcript (default command)
    Plan(PlanArgs),

    /// Generate shell completions for shortsmith
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Transcript file (.srt, or a JSON array of words)
    #[arg(value_name = "TRANSCRIPT")]
    transcript: PathBuf,

    /// Source media duration in seconds
    #[arg(short, long)]
    duration: f64,

    /// Source frame width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Source frame height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Output path for the render job manifest
    #[arg(short, long, default_value = "render_job.json")]
    output: PathBuf,

    /// Directory to write per-clip ASS caption files into
    #[arg(long)]
    ass_dir: Option<PathBuf>,

    /// Target clip length in seconds
    #[arg(long)]
    clip_length: Option<u32>,

    /// Maximum number of clips to produce
    #[arg(long)]
    max_clips: Option<usize>,

    /// Target aspect ratio (9:16, 1:1 or 16:9)
    #[arg(short, long)]
    aspect: Option<String>,

    /// Caption style preset name
    #[arg(short, long)]
    style: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// shortsmith - highlight clip planning for short-form video
///
/// Reads a time-aligned transcript, selects the most engaging
/// non-overlapping windows and emits a declarative render job for an
/// external encoder.
#[derive(Parser, Debug)]
#[command(name = "shortsmith")]
#[command(version = "0.3.0")]
#[command(about = "Transcript-driven highlight clip planner")]
#[command(long_about = "shortsmith turns a word-level transcript into a ranked set of \
short, vertically-framed clip plans with caption timelines.

EXAMPLES:
    shortsmith plan talk.srt -d 1800                 # Plan with defaults
    shortsmith plan words.json -d 600 --max-clips 3  # At most three clips
    shortsmith plan talk.srt -d 1800 -a 1:1          # Square output
    shortsmith plan talk.srt -d 1800 --ass-dir out/  # Also write ASS captions
    shortsmith completions bash > shortsmith.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config-path. Missing files fall back to the
    built-in defaults; CLI flags override either.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "shortsmith", &mut std::io::stdout());
            Ok(())
        }
        Commands::Plan(args) => run_plan(args),
    }
}

fn run_plan(options: PlanArgs) -> Result<()> {
    let config = load_config(&options)?;

    // Command-line log level wins over the configured one
    match &options.log_level {
        Some(cmd_log_level) => log::set_max_level(cmd_log_level.clone().into()),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    if options.duration <= 0.0 || !options.duration.is_finite() {
        return Err(anyhow!("--duration must be a positive number of seconds"));
    }

    let words = TranscriptSource::load_words(&options.transcript)?;
    info!(
        "Loaded {} transcript entries from {}",
        words.len(),
        options.transcript.display()
    );
    let source = TranscriptSource::new(words, options.duration, options.width, options.height);

    let pipeline = HighlightPipeline::new(config.clone());
    let job = pipeline.run(&source)?;

    let manifest = job
        .to_manifest_json()
        .context("Failed to serialize render job")?;
    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(&options.output, manifest)
        .with_context(|| format!("Failed to write manifest: {}", options.output.display()))?;
    info!(
        "Wrote render job with {} clips to {}",
        job.clips.len(),
        options.output.display()
    );

    if let Some(ass_dir) = &options.ass_dir {
        write_caption_files(&job, ass_dir)?;
    }

    Ok(())
}

/// Load configuration from file if present, apply CLI overrides
fn load_config(options: &PlanArgs) -> Result<Config> {
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        Config::default()
    };

    if let Some(clip_length) = options.clip_length {
        config.clip_length_sec = clip_length;
    }
    if let Some(max_clips) = options.max_clips {
        config.max_clips = max_clips;
    }
    if let Some(aspect) = &options.aspect {
        config.aspect = AspectRatio::from_str(aspect)?;
    }
    if let Some(style) = &options.style {
        config.style = style.clone();
    }

    Ok(config)
}

/// Write one ASS caption document per planned clip
fn write_caption_files(job: &render_job::RenderJob, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (idx, clip) in job.clips.iter().enumerate() {
        let doc = subtitle_writer::render_ass(
            clip,
            &job.caption_style,
            (job.target_width, job.target_height),
        );
        let path = dir.join(format!("clip_{:02}.ass", idx + 1));
        fs::write(&path, doc)
            .with_context(|| format!("Failed to write caption file: {}", path.display()))?;
    }
    info!("Wrote {} caption files to {}", job.clips.len(), dir.display());
    Ok(())
}
