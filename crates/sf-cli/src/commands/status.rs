//! Status command implementation

use anyhow::{Context, Result};
use sf_migrate::{ledger_table_exists, Ledger, MigrationRecord, ScriptLedger};

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use crate::commands::common;

/// Execute the status command
pub(crate) fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let db = common::open_database(&config)?;

    if !ledger_table_exists(db.as_ref()) {
        match args.output {
            StatusOutput::Json => println!("[]"),
            StatusOutput::Text => println!("No migrations have been applied (ledger table missing)"),
        }
        return Ok(());
    }

    let ledger = ScriptLedger::new(db.as_ref());
    let records = match args.id {
        Some(id) => vec![ledger
            .get_by_id(id)
            .with_context(|| format!("Failed to read ledger row {id}"))?],
        None => ledger.get_all().context("Failed to read ledger")?,
    };

    match args.output {
        StatusOutput::Json => {
            let json = serde_json::to_string_pretty(&records)
                .context("Failed to serialize ledger rows")?;
            println!("{json}");
        }
        StatusOutput::Text => print_table(&records),
    }
    Ok(())
}

fn print_table(records: &[MigrationRecord]) {
    if records.is_empty() {
        println!("No migrations have been applied");
        return;
    }

    let name_width = records
        .iter()
        .map(|r| r.script_name.len())
        .max()
        .unwrap_or(0)
        .max("SCRIPT".len());

    println!(
        "{:>5}  {:<name_width$}  {:<20}  {:<7}  {:<10}  ERROR",
        "ID", "SCRIPT", "EXECUTED AT", "STATUS", "VERSION"
    );
    for record in records {
        println!(
            "{:>5}  {:<name_width$}  {:<20}  {:<7}  {:<10}  {}",
            record.id,
            record.script_name,
            record.executed_at_formatted(),
            record.status.as_str(),
            record.app_version,
            record.error_msg
        );
    }

    let failed = records.iter().filter(|r| !r.is_success()).count();
    println!();
    println!("{} row(s), {failed} failed", records.len());
}
