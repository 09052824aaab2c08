use crate::cli::{Args, Command, KindArg};
use anyhow::{Context, bail};
use clap::Parser;
use prettytable::{Cell, Row, Table};
use sparql_workbench_client::{EntityLookupClient, QueryExecutor};
use sparql_workbench_model::{EntityKind, QueryOutcome, ResultTable};
use std::fs;
use std::io::{self, stdin};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match args.command {
        Command::Query {
            endpoint,
            file,
            template,
            accept,
            timeout,
            raw,
        } => run_query(&endpoint, file, template, &accept, timeout, raw).await,
        Command::Search {
            term,
            kind,
            language,
            limit,
        } => run_search(&term, kind, &language, limit).await,
        Command::Templates { show } => run_templates(show.as_deref()),
    }
}

async fn run_query(
    endpoint: &str,
    file: Option<PathBuf>,
    template: Option<String>,
    accept: &str,
    timeout: u64,
    raw: bool,
) -> anyhow::Result<()> {
    let query = read_query(file, template)?;
    if query.trim().is_empty() {
        bail!("the query is empty");
    }

    let endpoint = sparql_workbench_templates::resolve_endpoint(endpoint);
    let executor = QueryExecutor::with_timeout(Duration::from_secs(timeout))
        .context("could not build the HTTP client")?;
    let outcome = executor.execute_with_accept(&query, endpoint, accept).await;
    render_outcome(&outcome, raw)
}

fn read_query(file: Option<PathBuf>, template: Option<String>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("could not read the query from {}", path.display()));
    }
    if let Some(name) = template {
        return sparql_workbench_templates::template(&name)
            .map(str::to_owned)
            .with_context(|| format!("unknown template '{name}'"));
    }
    io::read_to_string(stdin().lock()).context("could not read the query from stdin")
}

fn render_outcome(outcome: &QueryOutcome, raw: bool) -> anyhow::Result<()> {
    match outcome {
        QueryOutcome::Table { table, .. } => {
            if table.num_rows() == 0 {
                println!("The query ran but matched no results.");
            } else {
                println!("{} rows", table.num_rows());
            }
            print_table(table);
        }
        QueryOutcome::CsvTable { table, .. } => {
            println!("{} rows (CSV)", table.num_rows());
            print_table(table);
        }
        QueryOutcome::Boolean { value, .. } => println!("Result: {value}"),
        QueryOutcome::RawText { content, note } => {
            println!("{note}");
            println!("{content}");
        }
        QueryOutcome::Failure {
            message, detail, ..
        } => {
            if let Some(detail) = detail {
                let text: String = detail.to_display_string().chars().take(500).collect();
                eprintln!("{text}");
            }
            bail!("query failed: {message}");
        }
    }

    if raw {
        if let Some(payload) = outcome.raw_payload() {
            println!("--- raw response ---");
            println!("{}", payload.to_display_string());
        }
    }
    Ok(())
}

fn print_table(result: &ResultTable) {
    let mut table = Table::new();
    table.set_titles(Row::new(
        result.columns().iter().map(|c| Cell::new(c)).collect(),
    ));
    for row in result.rows() {
        table.add_row(Row::new(
            row.iter()
                .map(|cell| Cell::new(cell.as_deref().unwrap_or("")))
                .collect(),
        ));
    }
    table.printstd();
}

async fn run_search(
    term: &str,
    kind: KindArg,
    language: &str,
    limit: usize,
) -> anyhow::Result<()> {
    let kind = EntityKind::from(kind);
    let client = EntityLookupClient::new().context("could not build the HTTP client")?;
    let response = client.search(term, kind, language, limit).await;

    if let Some(error) = &response.error {
        eprintln!("entity search failed: {error}");
    }
    if response.matches.is_empty() {
        println!("No matches for '{term}'.");
        return Ok(());
    }

    // The printed identifier is ready to paste into a query.
    let prefix = match kind {
        EntityKind::Item => "wd:",
        EntityKind::Property => "wdt:",
    };
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("Label"),
        Cell::new("Identifier"),
        Cell::new("Description"),
    ]));
    for entity in &response.matches {
        table.add_row(Row::new(vec![
            Cell::new(&entity.label),
            Cell::new(&format!("{prefix}{}", entity.id)),
            Cell::new(&entity.description),
        ]));
    }
    table.printstd();
    Ok(())
}

fn run_templates(show: Option<&str>) -> anyhow::Result<()> {
    if let Some(name) = show {
        let body = sparql_workbench_templates::template(name)
            .with_context(|| format!("unknown template '{name}'"))?;
        println!("{body}");
        return Ok(());
    }
    for (name, _) in sparql_workbench_templates::templates() {
        println!("{name}");
    }
    Ok(())
}
