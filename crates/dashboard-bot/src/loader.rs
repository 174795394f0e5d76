//! Input Tables
//!
//! CSV tables in the portfolio directory: `holdings.csv` (code, lots, buy
//! price), `cash.csv` (ledger; the last non-missing numeric balance is
//! authoritative), `config.csv` (parameter, value). Numeric cells go
//! through the core normalizer, so comma decimal separators are accepted.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;

use dashboard_core::{DashboardConfig, Holding, PortfolioSnapshot, numeric};

/// Load everything one evaluation pass needs.
pub fn load_portfolio(dir: &Path) -> anyhow::Result<(PortfolioSnapshot, DashboardConfig)> {
    let holdings = parse_holdings(open(dir, "holdings.csv")?)?;
    let cash = parse_cash_ledger(open(dir, "cash.csv")?)?;
    let config = parse_config(open(dir, "config.csv")?)?;

    Ok((PortfolioSnapshot::new(holdings, cash), config))
}

fn open(dir: &Path, name: &str) -> anyhow::Result<File> {
    let path = dir.join(name);
    File::open(&path).with_context(|| format!("cannot open {}", path.display()))
}

fn reader_for<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}

/// Rows with an empty code or a non-positive lot count are skipped with a
/// warning; an unparsable buy price normalizes to zero.
pub fn parse_holdings<R: Read>(input: R) -> anyhow::Result<Vec<Holding>> {
    let mut reader = reader_for(input);
    let mut holdings = Vec::new();

    for record in reader.records() {
        let record = record.context("unreadable holdings row")?;
        let code = record.get(0).unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }

        let Some(lots) = record.get(1).and_then(|v| v.parse::<u32>().ok()).filter(|l| *l > 0)
        else {
            tracing::warn!("skipping holding {code}: missing or non-positive lot count");
            continue;
        };

        let buy_price = numeric::ID.parse_or_zero(record.get(2));
        holdings.push(Holding::new(code, lots, buy_price));
    }

    Ok(holdings)
}

/// The last parseable balance wins; blank and junk cells are passed over.
pub fn parse_cash_ledger<R: Read>(input: R) -> anyhow::Result<Decimal> {
    let mut reader = reader_for(input);
    let mut cash = Decimal::ZERO;

    for record in reader.records() {
        let record = record.context("unreadable cash row")?;
        if let Some(value) = record.get(1).and_then(|v| numeric::ID.try_parse(v)) {
            cash = value;
        }
    }

    Ok(cash)
}

pub fn parse_config<R: Read>(input: R) -> anyhow::Result<DashboardConfig> {
    let mut reader = reader_for(input);
    let mut pairs: Vec<(String, String)> = Vec::new();

    for record in reader.records() {
        let record = record.context("unreadable config row")?;
        if let (Some(key), Some(value)) = (record.get(0), record.get(1)) {
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    Ok(DashboardConfig::from_pairs(
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    ))
}
