use std::io::{stdout, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use crossterm::{cursor, event::PopKeyboardEnhancementFlags, terminal, ExecutableCommand};

use spirit_seal::config::{Config, CONFIG_ENV};
use spirit_seal::host;

// ── Config ────────────────────────────────────────────────────────────────────

/// `--config <path>` wins over the environment variable.
fn config_path() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    std::env::var_os(CONFIG_ENV).map(PathBuf::from)
}

fn load_config() -> anyhow::Result<Config> {
    match config_path() {
        Some(path) => Config::load(&path)
            .with_context(|| format!("could not load config from {}", path.display())),
        None => {
            log::info!("No config file given, using defaults");
            Ok(Config::default())
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = load_config()?;
    log::info!("Spirit Seal starting ({} ms frames)", config.frame_ms);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("could not enable raw mode")?;
    let mut keyboard_enhanced = false;
    let result = host::run(&mut out, &config, &mut keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")?;
    log::info!("Spirit Seal exiting");
    Ok(())
}
