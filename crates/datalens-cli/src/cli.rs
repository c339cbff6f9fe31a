//! datalens binary entry point

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use datalens_cli::args::{Args, Commands};
use datalens_cli::driver::{read_script, run_batch, run_repl};
use datalens_cli::logging::{self, LoggingConfig};
use datalens_cli::output::format_table;
use datalens_cli::repl::Repl;
use datalens_cli::session::Session;
use datalens_cli::settings::Settings;
use datalens_interchange::{export_table, load_table};

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.settings.as_deref())?;
    let _log_guard = logging::init(LoggingConfig::from_settings(&settings, args.verbose))
        .context("Failed to initialize logging")?;

    if let Some(Commands::Convert { input, output }) = &args.command {
        return convert(input, output);
    }

    let file = match &args.file {
        Some(file) => file.clone(),
        None if args.is_batch() => anyhow::bail!("A data file is required with --execute or --script"),
        None => prompt_for_file()?,
    };

    let table =
        load_table(&file).with_context(|| format!("Failed to load {}", file.display()))?;
    let page_size = args.page_size.unwrap_or(settings.default_page_size);
    let mut session = Session::new(table, page_size)?;

    if args.is_batch() {
        let mut lines = args.execute.clone();
        if let Some(script) = &args.script {
            lines.extend(read_script(script)?);
        }
        return run_batch(&mut session, lines, &mut std::io::stdout().lock());
    }

    println!(
        "Loaded {} ({} rows, {} columns). Type 'help'.",
        file.display(),
        session.current().row_count(),
        session.current().column_count()
    );
    if settings.show_rows > 0 && !session.current().is_empty() {
        println!("{}", format_table(&session.current().head(settings.show_rows)));
    }

    run_repl(&mut session, settings.history_path().as_deref())
}

fn convert(input: &Path, output: &Path) -> Result<()> {
    let table =
        load_table(input).with_context(|| format!("Failed to load {}", input.display()))?;
    export_table(&table, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Converted {} rows: {} -> {}",
        table.row_count(),
        input.display(),
        output.display()
    );
    Ok(())
}

fn prompt_for_file() -> Result<PathBuf> {
    let mut repl = Repl::new().context("Failed to start line editor")?;
    let line = repl
        .read_line("Enter file name (data.csv or data.json): ")?
        .context("No file name given")?;
    Ok(PathBuf::from(line.trim()))
}
