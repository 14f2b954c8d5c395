//! CLI command implementations
//!
//! `serve` runs the HTTP surface; the one-shot commands drive a seeded
//! in-memory store through the same components the server uses. One-shot
//! commands are read-only: there is no persistence layer, so a mutation
//! would not outlive the process.

use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError};
use crate::observability::{Event, Logger};
use crate::schema::RuleSchema;
use crate::store::{MemoryStore, RuleStore, EXPORT_FILENAME};
use crate::view::{RulesView, ViewConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments, build the runtime, and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(cli.command))
}

async fn dispatch(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config).await,
        Command::List { config, filters } => list(&config, filters).await,
        Command::Options { field, config } => options(&config, &field).await,
        Command::Export { config, output } => export(&config, output).await,
    }
}

fn load_config(path: &Path) -> CliResult<Config> {
    let config = Config::load(path)?;
    Logger::info(Event::ConfigLoaded, &[("path", &path.display().to_string())]);
    Ok(config)
}

async fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("invalid bind_addr '{}'", config.bind_addr)))
        .map_err(CliError::Config)?;

    let server = crate::http::ApiServer::new(MemoryStore::seeded(), config.write_access);
    server.serve(addr).await?;
    Ok(())
}

async fn list(config_path: &Path, filters: Vec<String>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let selection = parse_filters(&filters)?;

    let view_config = ViewConfig {
        write_access: config.write_access,
        op_timeout: config.op_timeout(),
    };
    let mut view = RulesView::new(MemoryStore::seeded(), view_config);
    view.initialize().await;

    for (field, values) in selection {
        view.set_filter(field, values);
    }

    for notice in view.take_notices() {
        eprintln!("{}", notice.message);
    }

    for record in view.visible_records() {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}

async fn options(config_path: &Path, field: &str) -> CliResult<()> {
    load_config(config_path)?;

    let store = MemoryStore::seeded();
    let options = store.distinct_values(field).await?;
    for option in options {
        println!("{}", option.value);
    }
    Ok(())
}

async fn export(config_path: &Path, output: Option<PathBuf>) -> CliResult<()> {
    load_config(config_path)?;

    let store = MemoryStore::seeded();
    Logger::info(Event::ExportStart, &[]);
    let csv = store.export_csv().await?;

    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));
    fs::write(&path, &csv)?;
    Logger::info(
        Event::ExportComplete,
        &[
            ("bytes", &csv.len().to_string()),
            ("path", &path.display().to_string()),
        ],
    );
    println!("{}", path.display());
    Ok(())
}

/// Group repeated `Field=Value` arguments by field
fn parse_filters(filters: &[String]) -> CliResult<HashMap<String, Vec<String>>> {
    let schema = RuleSchema::default();
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();

    for raw in filters {
        let (field, value) = raw
            .split_once('=')
            .ok_or_else(|| CliError::InvalidFilter(raw.clone()))?;
        let field = field.trim();
        let value = value.trim();
        if field.is_empty() || value.is_empty() {
            return Err(CliError::InvalidFilter(raw.clone()));
        }
        if !schema.contains(field) {
            return Err(CliError::UnknownField(field.to_string()));
        }
        grouped
            .entry(field.to_string())
            .or_default()
            .push(value.to_string());
    }

    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_groups_by_field() {
        let filters = vec![
            "MD State=NY".to_string(),
            "MD State=CA".to_string(),
            "Channel=Retail".to_string(),
        ];
        let grouped = parse_filters(&filters).unwrap();

        assert_eq!(grouped["MD State"], ["NY", "CA"]);
        assert_eq!(grouped["Channel"], ["Retail"]);
    }

    #[test]
    fn test_parse_filters_rejects_malformed() {
        let err = parse_filters(&["MD State".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::InvalidFilter(_)));

        let err = parse_filters(&["=NY".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::InvalidFilter(_)));
    }

    #[test]
    fn test_parse_filters_rejects_unknown_field() {
        let err = parse_filters(&["Bogus=1".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::UnknownField(_)));
    }

    #[test]
    fn test_parse_filters_trims_whitespace() {
        let grouped = parse_filters(&[" Zip Code = 90210 ".to_string()]).unwrap();
        assert_eq!(grouped["Zip Code"], ["90210"]);
    }
}
