//! RasterLab command line: runs one point transform, histogram or line
//! profile on an image file without opening any window.
//!
//!   rasterlab -i photo.png -o negated.png negate
//!   rasterlab -i scan.png -o levels.png threshold --value 4
//!   rasterlab -i scan.png -o bw.png threshold --value 128 --simple
//!   rasterlab -i photo.jpg -o poster.png posterize --bins 4
//!   rasterlab -i scan.png -o wide.tiff --tiff-compression lzw stretch
//!   rasterlab -i scan.png histogram
//!   rasterlab -i scan.png profile --from 0,0 --to 120,40

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use rasterlab::logger;
use rasterlab::raster_engine::common::parse_point_param;
use rasterlab::raster_engine::{
    EngineConfig, Presenter, ProfileSource, Session, TextPresenter, ThresholdMode,
    TiffCompression,
};

#[derive(Parser, Debug)]
#[command(
    name = "rasterlab",
    version,
    about = "RasterLab headless point transforms, histograms and line profiles"
)]
struct Cli {
    /// Input image (JPEG, PNG or BMP)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Where to write the transformed image; the format follows the
    /// extension (png, jpg, jpeg, bmp, tif, tiff)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 90, value_name = "1-100")]
    jpeg_quality: u8,

    /// TIFF compression: none, lzw, deflate, deflate-fast, deflate-best
    #[arg(long, default_value = "none", value_name = "MODE")]
    tiff_compression: String,

    /// Debug logging with span timings
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Invert every color channel
    Negate,
    /// Threshold a grayscale image
    Threshold {
        /// Number of levels, or the cut point with --simple (default 2)
        #[arg(long, default_value = "")]
        value: String,
        /// Binary threshold at --value instead of multilevel bins
        #[arg(long)]
        simple: bool,
    },
    /// Reduce each color channel to a number of levels
    Posterize {
        #[arg(long)]
        bins: String,
    },
    /// Linear histogram stretch; all four bounds or none (auto range)
    Stretch {
        #[arg(long, default_value = "")]
        p1: String,
        #[arg(long, default_value = "")]
        p2: String,
        #[arg(long, default_value = "")]
        q3: String,
        #[arg(long, default_value = "")]
        q4: String,
    },
    /// Print the per-channel histogram as a table
    Histogram,
    /// Print intensity values sampled along a line
    Profile {
        /// Start point as x,y
        #[arg(long)]
        from: String,
        /// End point as x,y
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 100)]
        samples: usize,
        /// Sample one channel by index instead of luma
        #[arg(long)]
        channel: Option<usize>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let compression = TiffCompression::from_name(&cli.tiff_compression)
        .with_context(|| format!("unknown TIFF compression '{}'", cli.tiff_compression))?;

    let samples = match &cli.command {
        Command::Profile { samples, .. } => *samples,
        _ => EngineConfig::default().profile_samples,
    };

    let config = EngineConfig::builder()
        .jpeg_quality(cli.jpeg_quality)
        .tiff_compression(compression)
        .profile_samples(samples)
        .build();

    let mut session = Session::new(config);
    session
        .import(&cli.input)
        .with_context(|| format!("could not import {}", cli.input.display()))?;

    let stdout = std::io::stdout();
    let mut presenter = TextPresenter::new(stdout.lock());

    let result = match cli.command {
        Command::Negate => session.negate()?,
        Command::Threshold { value, simple } => {
            let mode = if simple {
                ThresholdMode::Simple
            } else {
                ThresholdMode::Multilevel
            };
            session.threshold(&value, mode)?
        }
        Command::Posterize { bins } => session.posterize(&bins)?,
        Command::Stretch { p1, p2, q3, q4 } => session.stretch(&p1, &p2, &q3, &q4)?,
        Command::Histogram => {
            presenter.show_histogram(&session.histogram()?)?;
            return Ok(());
        }
        Command::Profile { from, to, channel, .. } => {
            session.click(parse_point_param(&from)?);
            session.click(parse_point_param(&to)?);
            let source = channel.map_or(ProfileSource::Luma, ProfileSource::Channel);
            presenter.show_profile(&session.profile(source)?)?;
            return Ok(());
        }
    };

    match &cli.output {
        Some(output) => {
            session
                .save_as(output)
                .with_context(|| format!("could not save {}", output.display()))?;
            info!(output = %output.display(), "Saved");
        }
        None => {
            let title = cli.input.display().to_string();
            presenter.show_raster(&result, &title)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
