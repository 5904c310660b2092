// c3pro - Microcontroller Benchmark Harness
// Copyright (C) 2026 C3PRO Team
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use c3pro_core::probe::HardwareInfo;
use c3pro_core::BenchSuite;
use c3pro_surface::{PixelSurface, SurfaceError};
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Render surface width in pixels
    #[arg(long, default_value_t = 240, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Render surface height in pixels
    #[arg(long, default_value_t = 240, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Enable debug-level tracing
    #[arg(short, long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout carries only the report.
    if args.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    info!("Starting C3-PRO benchmark harness");

    let hw_info = HardwareInfo::probe();

    let surface = match PixelSurface::new(args.width, args.height) {
        Ok(surface) => Some(surface),
        Err(err @ SurfaceError::BadDimensions(..)) => return Err(err.into()),
        Err(err) => {
            warn!("Surface allocation failed, running without graphics: {}", err);
            None
        }
    };

    let report = BenchSuite::new(hw_info, surface).run_all();
    info!("Benchmark finished with score {}", report.score());

    Ok(())
}
