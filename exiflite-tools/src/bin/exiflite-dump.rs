use std::process::ExitCode;

use exiflite_jpeg::Jpeg;
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: exiflite-dump <FILE> [--segments]");
        return ExitCode::FAILURE;
    };
    let show_segments = args.any(|x| x == "--segments");

    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Failed to read '{path}': {err}");
            return ExitCode::FAILURE;
        }
    };

    if show_segments {
        if let Ok(jpeg) = Jpeg::new(&data) {
            for segment in jpeg.segments().flatten() {
                println!(
                    "{:?} at {} ({} bytes)",
                    segment.marker(),
                    segment.pos(),
                    segment.length()
                );
            }
            println!();
        }
    }

    let inspection = match exiflite::inspect(&data, &path) {
        Ok(inspection) => inspection,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(err) = inspection.tiff_error {
        println!("No tags: {err}");
    }

    for (name, value) in inspection.tags.iter() {
        println!("{name}: {value}");
    }

    ExitCode::SUCCESS
}
