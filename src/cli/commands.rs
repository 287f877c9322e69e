use crate::config::ConvertConfig;
use crate::converter::{convert_items, ConversionSummary};
use crate::error::SheetResult;
use crate::writer::{render_items, PriorContent};
use colored::Colorize;
use std::fmt::Display;

/// Status line; goes to stderr in dry runs so stdout carries only the JSON
fn status(dry_run: bool, line: impl Display) {
    if dry_run {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Execute the convert command
pub fn convert(config: ConvertConfig, verbose: bool) -> SheetResult<()> {
    let dry_run = config.dry_run;

    status(dry_run, "📦 Itemsheet - Spreadsheet to JSON".bold().green());
    status(dry_run, format!("   Output: {}", config.output_path.display()));
    status(
        dry_run,
        format!("   Schema: {}", config.schema.to_string().bright_yellow()),
    );
    status(dry_run, "");

    if dry_run {
        status(
            dry_run,
            "📋 DRY RUN MODE - No changes will be written\n".yellow(),
        );
    }

    let summary = convert_items(&config)?;

    if verbose {
        print_details(&summary, dry_run);
    }

    if summary.written {
        println!(
            "{} '{}' updated with {} items.",
            "✅".green(),
            summary.destination.display(),
            summary.record_count().to_string().bold()
        );
    } else {
        println!("{}", render_items(&summary.records)?);
        status(
            dry_run,
            format!(
                "📋 Dry run complete - {} items, nothing written",
                summary.record_count()
            )
            .yellow(),
        );
    }

    Ok(())
}

fn print_details(summary: &ConversionSummary, dry_run: bool) {
    status(
        dry_run,
        format!(
            "   📖 Source: {} ({}, {} schema)",
            summary.source.display(),
            summary.source_kind.to_string().cyan(),
            summary.schema
        ),
    );
    let prior = match summary.prior {
        PriorContent::Malformed => summary.prior.to_string().yellow(),
        _ => summary.prior.to_string().normal(),
    };
    status(dry_run, format!("   💾 Previous content: {}", prior));
    for record in &summary.records {
        status(
            dry_run,
            format!(
                "      {} {}x{}",
                record.name.bright_blue(),
                record.width,
                record.height
            ),
        );
    }
    status(dry_run, "");
}
