//! Display functions for family lists

use super::formatters::{percentage, share_bar};
use crate::commands::PartitionSummary;
use crate::family::FamilyList;
use colored::Colorize;
use std::io::{self, Write};

/// Print every family's signature, word count and words to stdout
///
/// One block per family in list order: a header line, the words indented by
/// five spaces, then a blank line.
pub fn print_families(list: &FamilyList<'_>) {
    print!("{list}");
}

/// Write the same dump as [`print_families`] to any writer
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_families<W: Write>(out: &mut W, list: &FamilyList<'_>) -> io::Result<()> {
    write!(out, "{list}")
}

/// Print a colored one-line-per-family overview
pub fn print_summary(summary: &PartitionSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' over {} words of length {}",
        "FAMILIES FOR".bright_cyan().bold(),
        summary.letter.to_string().bright_yellow().bold(),
        summary.total_words,
        summary.word_length
    );
    println!("{}", "═".repeat(60).cyan());

    for family in &summary.families {
        let bar = share_bar(family.count, summary.total_words, 24);
        let line = format!(
            "   {:<width$} {} {:5} ({:>6})",
            family.signature,
            bar,
            family.count,
            percentage(family.count, summary.total_words),
            width = summary.word_length
        );
        if family.is_largest {
            println!("{}", line.green().bold());
        } else if family.is_blank {
            println!("{}", line.bright_black());
        } else {
            println!("{line}");
        }
    }

    println!("\n   {} families", summary.families.len());
}
