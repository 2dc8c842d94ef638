use std::path::PathBuf;

use log::error;
use mandelbrot_zoom::{session, Config};

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_path);

    if let Err(err) = run(path) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(path: PathBuf) -> mandelbrot_zoom::Result<()> {
    let config = Config::load_from(&path)?;
    let mut producer = config.build()?;
    let mut sink = session::LogSink::new();
    session::run(
        &mut producer,
        &mut sink,
        config.frame_interval(),
        config.frames,
    )
}
