use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use lemniscate::cli::Cli;
use lemniscate::demo::DemoWindows;
use lemniscate::{Style, WgpuBackend};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let style = match &cli.style {
        Some(path) => Style::load(path)
            .with_context(|| format!("failed to load style from {}", path.display()))?,
        None => Style::default(),
    };

    let backend = Rc::new(WgpuBackend::new().context("failed to start the window system")?);
    let windows = DemoWindows::open(backend, &style).context("failed to open windows")?;
    let curves = windows
        .curves(cli.smoothness, !cli.no_axis)
        .context("failed to build curves")?;

    println!("lemniscate - close a window or press Escape to quit");

    let mut frames = 0u64;
    while windows.is_open() {
        windows.draw(&curves).context("failed to draw frame")?;
        frames += 1;

        if cli.frames.is_some_and(|limit| frames >= limit) {
            break;
        }
    }

    info!("rendered {} frame(s)", frames);
    Ok(())
}
