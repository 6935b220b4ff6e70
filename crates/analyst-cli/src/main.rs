//! Command-line interface for the analyst workspace

use analyst_advisor::{Advisor, AdvisorConfig, SecuritySnapshot, format};
use analyst_data::{YahooMarketData, list_supported};
use analyst_llm::{FallbackProvider, GenerationRequest, LLMProvider};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "analyst")]
#[command(about = "AI-powered security analysis and trading advisories", long_about = None)]
struct Cli {
    /// Calendar days of price history to fetch
    #[arg(long, default_value_t = 365)]
    lookback: i64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an actionable trading advisory for an ISIN
    Advise {
        isin: String,
    },
    /// Generate a long-form investment report for an ISIN
    Analyze {
        isin: String,
    },
    /// Compute the technical snapshot without any LLM call
    Snapshot {
        isin: String,
        /// Print the raw analysis as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List supported securities
    Securities,
}

/// Placeholder provider for subcommands that never generate narratives
struct OfflineProvider;

#[async_trait]
impl LLMProvider for OfflineProvider {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> analyst_llm::Result<analyst_llm::Generation> {
        Err(analyst_llm::LLMError::ConfigurationError(
            "offline mode has no narrative provider".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "offline"
    }
}

fn build_advisor(lookback: i64, llm: Arc<dyn LLMProvider>) -> anyhow::Result<Advisor> {
    let config = AdvisorConfig::builder().lookback_days(lookback).build()?;
    let market_data =
        Arc::new(YahooMarketData::new()?.with_lookback_days(config.lookback_days));
    Ok(Advisor::new(market_data, llm, config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Advise { isin } => {
            let llm = Arc::new(FallbackProvider::from_env()?);
            info!(providers = ?llm.provider_names(), "provider chain ready");
            let advisor = build_advisor(cli.lookback, llm)?;

            let report = advisor.advise(&isin).await?;
            println!("{}", report.document);
            eprintln!(
                "\n[generated by {} ({}) for {} / {}]",
                report.provider, report.model, report.isin, report.symbol
            );
        }
        Command::Analyze { isin } => {
            let llm = Arc::new(FallbackProvider::from_env()?);
            let advisor = build_advisor(cli.lookback, llm)?;

            let report = advisor.report(&isin).await?;
            println!("{}", report.document);
            eprintln!(
                "\n[generated by {} ({}) for {} / {}]",
                report.provider, report.model, report.isin, report.symbol
            );
        }
        Command::Snapshot { isin, json } => {
            let advisor = build_advisor(cli.lookback, Arc::new(OfflineProvider))?;
            let snapshot = advisor.snapshot(&isin).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&snapshot);
            }
        }
        Command::Securities => {
            let mut table = Table::new();
            table.set_header(vec!["ISIN", "Ticker"]);
            for (isin, ticker) in list_supported() {
                table.add_row(vec![*isin, *ticker]);
            }
            println!("{table}");
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &SecuritySnapshot) {
    let a = &snapshot.analysis;
    let ind = &a.indicators;

    let name = snapshot
        .profile
        .name
        .clone()
        .unwrap_or_else(|| snapshot.symbol.clone());
    println!("{} ({}) - {} sessions\n", name, snapshot.symbol, a.sessions);

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Close".to_string(), format!("{:.2}", a.last_close)]);
    table.add_row(vec!["Regime".to_string(), a.regime.to_string()]);
    table.add_row(vec!["RSI(14)".to_string(), format::indicator(ind.rsi14)]);
    table.add_row(vec!["SMA(50)".to_string(), format::indicator(ind.sma50)]);
    table.add_row(vec!["SMA(200)".to_string(), format::indicator(ind.sma200)]);
    table.add_row(vec!["MACD".to_string(), format::indicator_fine(ind.macd)]);
    table.add_row(vec![
        "MACD signal".to_string(),
        format::indicator_fine(ind.macd_signal),
    ]);
    table.add_row(vec![
        "MACD histogram".to_string(),
        format::indicator_fine(ind.macd_histogram),
    ]);
    table.add_row(vec!["BB upper".to_string(), format::indicator(ind.bb_upper)]);
    table.add_row(vec![
        "BB middle".to_string(),
        format::indicator(ind.bb_middle),
    ]);
    table.add_row(vec!["BB lower".to_string(), format::indicator(ind.bb_lower)]);
    table.add_row(vec!["ATR(14)".to_string(), format::indicator(ind.atr14)]);
    table.add_row(vec![
        "Support (90d)".to_string(),
        format!("{:.2}", a.zones.support_90d),
    ]);
    table.add_row(vec![
        "Resistance (90d)".to_string(),
        format!("{:.2}", a.zones.resistance_90d),
    ]);
    table.add_row(vec!["Pivot".to_string(), format!("{:.2}", a.zones.pivot)]);
    table.add_row(vec!["S1".to_string(), format!("{:.2}", a.zones.support_1)]);
    table.add_row(vec!["R1".to_string(), format!("{:.2}", a.zones.resistance_1)]);
    table.add_row(vec![
        "Volume ratio".to_string(),
        format::indicator(a.volume_ratio),
    ]);
    table.add_row(vec![
        "Implied upside %".to_string(),
        format::indicator(a.upside_potential),
    ]);
    table.add_row(vec![
        "Analysts".to_string(),
        a.consensus.analyst_count.to_string(),
    ]);
    table.add_row(vec![
        "Target (mean)".to_string(),
        format::ratio(a.consensus.target_mean),
    ]);
    println!("{table}");
}
