use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use inquire::Text;
use massage_core::{Config, HttpGateway, Massage, MassageService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "massage", version, about = "Massage booking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the supplier service endpoint.
    Configure,

    /// List bookable massages for a date.
    List {
        /// Quote date in YYYY-MM-DD form, e.g. 2024-03-07.
        date: NaiveDate,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::List { date } => list(date).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let base_url = Text::new("Massage service base URL:")
        .with_initial_value(config.base_url_or_default())
        .prompt()
        .context("Failed to read base URL")?;

    config.set_base_url(base_url.trim().trim_end_matches('/').to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn list(date: NaiveDate) -> anyhow::Result<()> {
    let config = Config::load()?;
    let gateway = HttpGateway::new(config.base_url_or_default());
    let service = MassageService::new(Box::new(gateway));

    let massages = service
        .available_massages(date)
        .await
        .with_context(|| format!("Failed to fetch massages for {date}"))?;

    if massages.is_empty() {
        println!("No bookable massages for {date}.");
        return Ok(());
    }

    for massage in &massages {
        print_massage(massage);
    }

    Ok(())
}

fn print_massage(massage: &Massage) {
    let duration = massage
        .duration
        .map(|d| format!(", {} min", d.num_minutes()))
        .unwrap_or_default();

    println!(
        "{} [{}] {:.2} {}{duration}",
        massage.name, massage.status, massage.amount, massage.currency
    );
    for line in massage.cancellation_summary() {
        println!("  {line}");
    }
    println!();
}
