use cgmistake_cli::CliContext;
use cgmistake_cli::commands;
use cgmistake_cli::logging;
use cgmistake_cli::readline;
use clap::{Parser, Subcommand};
use std::io::Write;

fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let mut ctx = CliContext::new();

    // One-shot mode: `cgmistake replay --path fight.toml`
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
        respond(cli, &mut ctx)?;
        return Ok(());
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line).and_then(|cli| respond(cli, &mut ctx)) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Replay Hunllef encounters through the mistake announcer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scripted encounter and print announcements
    Replay {
        #[arg(short, long)]
        path: String,
        /// Seed for message selection
        #[arg(short, long)]
        seed: Option<u64>,
        /// Config file to use instead of the stored one
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Show the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
    /// Set or clear the default replay seed
    Seed { seed: Option<u64> },
    Exit,
}

fn parse_line(line: &str) -> Result<Cli, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "cgmistake".to_string());
    Cli::try_parse_from(args).map_err(|e| e.to_string())
}

fn respond(cli: Cli, ctx: &mut CliContext) -> Result<bool, String> {
    match &cli.command {
        Some(Commands::Replay { path, seed, config }) => {
            commands::replay(path, *seed, config.as_deref(), ctx)?
        }
        Some(Commands::Config { path }) => commands::show_config(ctx, *path)?,
        Some(Commands::Seed { seed }) => commands::set_seed(ctx, *seed),
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
