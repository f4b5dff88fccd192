//! Transaction CLI commands
//!
//! Implements `ledger add`.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::Category;
use crate::storage::LedgerStore;
use crate::validate::{self, RetryPolicy};

use super::prompt::prompt_with;

/// Arguments of `ledger add`
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Amount (positive); prompted for when omitted
    pub amount: Option<String>,
    /// Category: 'I' for Income or 'E' for Expense; prompted for when omitted
    #[arg(short, long)]
    pub category: Option<String>,
    /// Transaction date (DD-MM-YYYY), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Description
    #[arg(short = 'm', long = "description")]
    pub description: Option<String>,
}

/// A fully validated entry ready to append
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: String,
    pub amount: f64,
    pub category: Category,
    pub description: String,
}

/// Validate `args`, prompting on `input`/`output` for whatever is missing
pub fn resolve_entry<R, W>(
    args: AddArgs,
    settings: &Settings,
    today: NaiveDate,
    input: &mut R,
    output: &mut W,
) -> LedgerResult<NewEntry>
where
    R: BufRead,
    W: Write,
{
    let date = validate::parse_date(
        args.date.as_deref().unwrap_or(""),
        true,
        today,
        &settings.date_format,
    )?;

    let amount = match args.amount {
        Some(raw) => validate::parse_amount(&raw)?,
        None => prompt_with(
            input,
            output,
            "Enter the amount: ",
            RetryPolicy::default(),
            validate::parse_amount,
        )?,
    };

    let category = match args.category {
        Some(raw) => validate::parse_category(&raw)?,
        None => prompt_with(
            input,
            output,
            "Enter the category ('I' for Income or 'E' for Expense): ",
            RetryPolicy::default(),
            validate::parse_category,
        )?,
    };

    let description = validate::parse_description(args.description.as_deref().unwrap_or(""));

    Ok(NewEntry {
        date,
        amount,
        category,
        description,
    })
}

/// Handle `ledger add`
pub fn handle_add_command(
    store: &LedgerStore,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let today = Local::now().date_naive();

    let entry = resolve_entry(args, settings, today, &mut input, &mut output)?;

    store.initialize()?;
    store.append(
        &entry.date,
        entry.amount,
        entry.category.as_str(),
        &entry.description,
    )?;

    println!("Entry added successfully!");
    Ok(())
}
