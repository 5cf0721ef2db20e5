use std::io::Write;
use std::path::Path;

use cgmistake_core::{AnnouncerConfig, AnnouncerConfigExt};

use crate::CliContext;
use crate::replay::{ReplayScript, run_replay};

pub fn replay(
    path: &str,
    seed: Option<u64>,
    config_path: Option<&str>,
    ctx: &CliContext,
) -> Result<(), String> {
    let config = match config_path {
        Some(path) => AnnouncerConfig::load_from(Path::new(path)).map_err(error_chain)?,
        None => ctx.config.clone(),
    };
    let script = ReplayScript::load(Path::new(path)).map_err(error_chain)?;

    let mut stdout = std::io::stdout();
    let summary = run_replay(&script, config, seed.or(ctx.seed), &mut stdout).map_err(error_chain)?;

    println!(
        "replayed {} ticks: {} encounter(s), {} boss attack(s), {} mistake(s)",
        summary.ticks,
        summary.encounters,
        summary.attacks,
        summary.total_mistakes()
    );
    for (category, count) in summary.mistakes.iter().filter(|(_, n)| *n > 0) {
        println!("  {:<20} {}", category.label(), count);
    }
    Ok(())
}

pub fn show_config(ctx: &CliContext, show_path: bool) -> Result<(), String> {
    if show_path {
        let path = AnnouncerConfig::config_path().map_err(error_chain)?;
        println!("{}", path.display());
        return Ok(());
    }
    let rendered = toml::to_string_pretty(&ctx.config).map_err(|e| e.to_string())?;
    print!("{rendered}");
    Ok(())
}

pub fn set_seed(ctx: &mut CliContext, seed: Option<u64>) {
    ctx.seed = seed;
    match seed {
        Some(seed) => println!("replays will use seed {seed}"),
        None => println!("replays will use random messages"),
    }
}

pub fn exit() {
    let mut stdout = std::io::stdout();
    let _ = writeln!(stdout, "quitting...");
    let _ = stdout.flush();
}

/// Render an error with its source chain
fn error_chain(err: impl std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}
