use std::io::{self, Write};

use quoteboard_core::{ErrorView, StockQuote, TableView, View};

use crate::cli::OutputFormat;
use crate::error::CliError;

const COLUMNS: [&str; 8] = [
    "ID",
    "Name",
    "Symbol",
    "Industry",
    "Sector",
    "Buy",
    "Sell",
    "Timestamp",
];

pub fn render_to<W: Write>(
    out: &mut W,
    view: &View,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(view)?
            } else {
                serde_json::to_string(view)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => match view {
            View::Loading(_) => render_loading(out)?,
            View::Error(error) => render_error(out, error)?,
            View::Table(table) => render_table(out, table)?,
        },
    }

    Ok(())
}

fn render_loading<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "We are loading your API request........")?;
    writeln!(out, "Your data will be here very soon....")
}

fn render_error<W: Write>(out: &mut W, error: &ErrorView) -> io::Result<()> {
    writeln!(out, "We're very sorry: An error has occured in the API call")?;
    writeln!(out, "The error message is: {}", error.message)
}

fn render_table<W: Write>(out: &mut W, table: &TableView) -> io::Result<()> {
    if let Some(banner) = table.tier.banner() {
        writeln!(out, "{banner}")?;
    }
    writeln!(out, "Stocks API Display ({})", table.count)?;

    let rows: Vec<[String; 8]> = table.rows.iter().map(row_cells).collect();
    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let header = COLUMNS.map(String::from);

    writeln!(out, "+{separator}+")?;
    write_row(out, &header, &widths)?;
    writeln!(out, "+{separator}+")?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    writeln!(out, "+{separator}+")
}

fn row_cells(quote: &StockQuote) -> [String; 8] {
    [
        quote.id().to_string(),
        quote.name().to_owned(),
        quote.symbol().to_owned(),
        quote.industry().to_owned(),
        quote.sector().to_owned(),
        quote.buy_price().to_string(),
        quote.sell_price().to_string(),
        quote.timestamp().to_string(),
    ]
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 8], widths: &[usize; 8]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {cell:<width$} "))
        .collect::<Vec<_>>()
        .join("|");
    writeln!(out, "|{line}|")
}
