mod commands;
mod markup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Assemble the clinic's static pages from a CMS export.
#[derive(Parser)]
#[command(name = "clinic-site", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Clean a page export and insert its sections into the template
    Extract {
        #[arg(long, default_value = "temp.html")]
        export: PathBuf,
        #[arg(long, default_value = "index_template.html")]
        template: PathBuf,
        #[arg(long, default_value = "index.html")]
        out: PathBuf,
    },
    /// Replace the page footer with a cleaned footer snippet
    Footer {
        #[arg(long, default_value = "footer.html")]
        footer: PathBuf,
        #[arg(long, default_value = "index.html")]
        page: PathBuf,
    },
    /// Strip leftover editor markup from a page, in place
    Clean {
        #[arg(long, default_value = "index.html")]
        page: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_site=info".into()),
        )
        .init();

    match Cli::parse().command {
        Command::Extract { export, template, out } => {
            commands::extract(&export, &template, &out)?;
        }
        Command::Footer { footer, page } => commands::footer(&footer, &page)?,
        Command::Clean { page } => commands::clean(&page)?,
    }

    Ok(())
}
