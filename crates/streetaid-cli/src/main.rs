use std::path::PathBuf;

use clap::{Parser, Subcommand};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing_subscriber::EnvFilter;

use streetaid_client::DirectoryClient;
use streetaid_pages::{
    accommodation, category, run_accommodation_page, run_category_page, today_offset, PageState,
    TracingShell, Unavailable,
};
use streetaid_render::Document;

mod templates;

#[derive(Debug, Parser)]
#[command(name = "streetaid")]
#[command(about = "Renders street support directory pages from the directory API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the rendered markup to a file instead of stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render an accommodation detail page.
    Accommodation {
        /// Accommodation record id.
        #[arg(long)]
        id: String,

        /// Full page address; overrides the address built from --id.
        #[arg(long)]
        address: Option<String>,
    },
    /// Render a category-by-day service listing page.
    Category {
        /// Category key, e.g. "dropin".
        #[arg(long)]
        category: String,

        /// Named location key, e.g. "manchester".
        #[arg(long)]
        location: Option<String>,

        /// Full page address; overrides the address built from --category
        /// and --location.
        #[arg(long)]
        address: Option<String>,
    },
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = streetaid_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let client = DirectoryClient::new(&config)?;
    let mut shell = TracingShell::new();
    let mut doc = Document::new();
    templates::install(&mut doc);

    let (state, output_id) = match &cli.command {
        Commands::Accommodation { id, address } => {
            let address = address
                .clone()
                .unwrap_or_else(|| format!("/accommodation?id={}", encode(id)));
            let state = run_accommodation_page(
                &client,
                &mut shell,
                &mut doc,
                &address,
                &config.error_route,
            )
            .await;
            (state, accommodation::OUTPUT_ID)
        }
        Commands::Category {
            category,
            location,
            address,
        } => {
            let address = address.clone().unwrap_or_else(|| {
                let mut built = format!("/find-help?category={}", encode(category));
                if let Some(location) = location {
                    built.push_str(&format!("&location={}", encode(location)));
                }
                built
            });
            let state = run_category_page(
                &client,
                &Unavailable,
                &mut shell,
                &mut doc,
                &address,
                today_offset(),
                &config.error_route,
            )
            .await;
            (state, category::OUTPUT_ID)
        }
    };

    if state == PageState::Failed {
        let route = shell.redirected_to().unwrap_or(&config.error_route);
        anyhow::bail!("page load failed; redirected to {route}");
    }

    let markup = doc.content(output_id).unwrap_or_default();
    match &cli.out {
        Some(path) => std::fs::write(path, markup)?,
        None => println!("{markup}"),
    }

    Ok(())
}
