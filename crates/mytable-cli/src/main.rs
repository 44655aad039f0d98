use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use mytable::{Config, JsonType, Order};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mytable")]
#[command(about = "Transpiles extended MySQL DDL into portable MySQL DDL")]
#[command(version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Transpile a schema into a DDL script
    Transpile(TranspileCommand),

    /// Validate a schema without emitting anything
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
struct TranspileCommand {
    /// Schema file to read, `-` for stdin
    input: PathBuf,

    /// Write the script here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit a DROP TABLE IF EXISTS for every table first
    #[arg(long)]
    drop: bool,

    /// Add CASCADE to emitted drops
    #[arg(long, requires = "drop")]
    cascade: bool,

    /// Table order: `declaration` or `dependency`
    #[arg(long)]
    order: Option<Order>,

    /// Store container columns as MEDIUMTEXT instead of JSON
    #[arg(long)]
    mediumtext: bool,
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Schema file to read, `-` for stdin
    input: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl TranspileCommand {
    fn run(self) -> Result<()> {
        let mut config = load_config(self.config.as_deref())?;

        if self.drop {
            config.emit = config.emit.drop_tables(true, self.cascade);
        }

        if let Some(order) = self.order {
            config.emit = config.emit.order(order);
        }

        if self.mediumtext {
            config.emit = config.emit.json_type(JsonType::Mediumtext);
        }

        let src = read_input(&self.input)?;
        let script = mytable::transpile(&src, &config)?;

        match &self.output {
            Some(path) => {
                fs::write(path, &script)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!(
                    "{} {}",
                    style("Wrote").green().bold(),
                    style(path.display()).cyan()
                );
            }
            None => print!("{script}"),
        }

        Ok(())
    }
}

impl CheckCommand {
    fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let src = read_input(&self.input)?;
        let tables = mytable::rewrite(&src, &config)?;

        let synthesized = tables.iter().filter(|table| table.is_synthesized()).count();

        eprintln!(
            "{} {} tables ({} declared, {} synthesized)",
            style("OK").green().bold(),
            tables.len(),
            tables.len() - synthesized,
            synthesized
        );

        for table in &tables {
            let marker = if table.is_synthesized() { "+" } else { " " };
            eprintln!("  {} {}", style(marker).magenta(), table.name);
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    contents
        .parse::<Config>()
        .with_context(|| format!("invalid config {}", path.display()))
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut src = String::new();
        io::stdin().read_to_string(&mut src)?;
        return Ok(src);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("MYTABLE_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Transpile(cmd) => cmd.run(),
        Command::Check(cmd) => cmd.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<mytable::Error>() {
                Some(err) if err.is_syntax() => {
                    eprintln!("{} syntax error", style("error:").red().bold());
                    for diagnostic in err.diagnostics() {
                        eprintln!("  {} {diagnostic}", style("-").dim());
                    }
                }
                _ => eprintln!("{} {err:#}", style("error:").red().bold()),
            }

            ExitCode::FAILURE
        }
    }
}
