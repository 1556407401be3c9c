//! spinlogo: drive the VGA generator from the command line.
//!
//! Usage: spinlogo [OPTIONS]
//!
//! Holds reset for one tick, runs the requested number of frames and prints a
//! CRC-32 of the emitted output bytes together with the final sprite state.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spinlogo::sprite::logo::builtin_logo;
use spinlogo::timing::{TICKS_PER_FRAME, TICKS_PER_LINE};
use spinlogo::{Board, Checkerboard, Config, LogoEncoding, PinInputs, RotatingLogo, RotationScale};

/// Picture source
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum PatternKind {
    /// Bouncing, rotating logo
    #[default]
    Logo,
    /// Static checkerboard
    Checkerboard,
}

/// Logo storage layout
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Encoding {
    /// Two 4-bit indices per byte
    #[default]
    Packed,
    /// One 64x64 bit plane per index bit
    Planar,
}

/// Rotation output scaling
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Scale {
    /// Arithmetic shift by 6
    #[default]
    Shift6,
    /// Floor division by 127
    Unit,
}

#[derive(ClapParser, Debug)]
#[command(name = "spinlogo")]
#[command(version)]
#[command(about = "Cycle-stepped 640x480 VGA bouncing logo generator", long_about = None)]
struct Args {
    /// Picture source
    #[arg(short, long, value_enum, default_value = "logo")]
    pattern: PatternKind,

    /// Logo storage layout
    #[arg(short, long, value_enum, default_value = "packed")]
    encoding: Encoding,

    /// Rotation output scaling
    #[arg(short, long, value_enum, default_value = "shift6")]
    scale: Scale,

    /// Set the tile-mode configuration bit
    #[arg(short, long)]
    tile_mode: bool,

    /// Number of frames to run
    #[arg(short, long, default_value = "60")]
    frames: u32,

    /// Write the frame following the run to this PNG file
    #[cfg(feature = "screenshot")]
    #[arg(long)]
    screenshot: Option<std::path::PathBuf>,

    /// Open a window and keep running after the batch
    #[cfg(feature = "display")]
    #[arg(long)]
    display: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    run(&args)
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "spinlogo=debug" } else { "spinlogo=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}

fn build_board(args: &Args) -> Result<Board> {
    Ok(match args.pattern {
        PatternKind::Logo => {
            let encoding = match args.encoding {
                Encoding::Packed => LogoEncoding::Packed,
                Encoding::Planar => LogoEncoding::Planar,
            };
            let scale = match args.scale {
                Scale::Shift6 => RotationScale::Shift6,
                Scale::Unit => RotationScale::UnitExact,
            };
            let bitmap = builtin_logo(encoding).context("building the built-in logo")?;
            Board::with_pattern(RotatingLogo::new(bitmap, scale))
        }
        PatternKind::Checkerboard => Board::with_pattern(Checkerboard::default()),
    })
}

fn run(args: &Args) -> Result<()> {
    let mut board = build_board(args)?;
    let inputs = PinInputs::running(Config {
        tile_mode: args.tile_mode,
    });

    board.tick(PinInputs::RESET);

    let started = Instant::now();
    let mut hasher = crc32fast::Hasher::new();
    let mut line = Vec::with_capacity(TICKS_PER_LINE as usize);
    let total = u64::from(args.frames) * u64::from(TICKS_PER_FRAME);
    for _ in 0..total {
        line.push(board.tick(inputs).bits());
        if line.len() == TICKS_PER_LINE as usize {
            hasher.update(&line);
            line.clear();
        }
    }
    hasher.update(&line);
    let digest = hasher.finalize();
    info!(
        ticks = board.ticks(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch finished"
    );

    println!("pattern: {}", board.pattern().name());
    println!("ticks: {}", board.ticks());
    println!("frame pulses: {}", board.frames());
    println!("output crc32: 0x{:08X}", digest);
    if let Some(s) = board.sprite() {
        println!(
            "sprite: left={} top={} dir_x={} dir_y={} angle={}",
            s.left, s.top, s.dir_x, s.dir_y, s.angle
        );
    }

    #[cfg(feature = "screenshot")]
    if let Some(path) = &args.screenshot {
        let frame = board.capture_frame(inputs);
        spinlogo::screenshot::save_png(&frame, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    #[cfg(feature = "display")]
    if args.display {
        spinlogo::display::run(board, inputs).context("running the display window")?;
    }

    Ok(())
}
