//! Linetint - tints the gutter of long files in the terminal.
//!
//! # Usage
//!
//! ```bash
//! linetint src/main.rs
//! linetint --watch src/*.rs
//! linetint --start-line 100 --end-line 200 --report src/*.rs
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use linetint::app::App;
use linetint::config::{ConfigFlags, global_config_path, load_config_flags, local_override_path};
use linetint::gradient::GradientTable;
use linetint::marker::export_icons;
use linetint::report::build_reports;

/// Tint the gutter of long files
#[derive(Parser, Debug)]
#[command(name = "linetint", version, about, long_about = None)]
struct Cli {
    /// Files to view
    #[arg(value_name = "FILE", required_unless_present = "export_icons")]
    files: Vec<PathBuf>,

    /// Reload files changed on disk
    #[arg(short, long)]
    watch: bool,

    /// First tinted line (default 150)
    #[arg(long, value_name = "N")]
    start_line: Option<usize>,

    /// Last line with its own color (default 230)
    #[arg(long, value_name = "N")]
    end_line: Option<usize>,

    /// Light end of the ramp (default #FFFBE5)
    #[arg(long, value_name = "HEX")]
    start_color: Option<String>,

    /// Dark end of the ramp (default #C9464C)
    #[arg(long, value_name = "HEX")]
    end_color: Option<String>,

    /// Print tinted ranges per file and exit
    #[arg(long)]
    report: bool,

    /// Write bucket icons as PNG to DIR and exit
    #[arg(long, value_name = "DIR")]
    export_icons: Option<PathBuf>,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            watch: self.watch,
            start_line: self.start_line,
            end_line: self.end_line,
            start_color: self.start_color.clone(),
            end_color: self.end_color.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let global_flags = load_config_flags(&global_config_path())?;
    let local_flags = load_config_flags(&local_override_path())?;
    let effective = global_flags.union(&local_flags).union(&cli.flags());
    let config = effective
        .resolve()
        .context("Invalid gradient settings")?;
    tracing::debug!(?config, "resolved settings");

    if let Some(dir) = &cli.export_icons {
        let table = GradientTable::build(&config)?;
        let written = export_icons(&table, dir)?;
        println!("Wrote {} icons to {}", written.len(), dir.display());
        return Ok(());
    }

    for file in &cli.files {
        if !file.exists() {
            anyhow::bail!("File not found: {}", file.display());
        }
    }

    if cli.report {
        for report in build_reports(config, &cli.files)? {
            println!("{report}");
        }
        return Ok(());
    }

    let mut app = App::new(cli.files)
        .with_watch(effective.watch)
        .with_config(config);

    app.run().context("Application error")
}
