use std::io;
use std::io::Write;

use serde::Serialize;

use crate::bench::RunSummary;

pub fn write_table<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let report = &summary.report;
    writeln!(out, "\n--- Sorting Algorithm Time Comparison ---\n")?;
    writeln!(out, "{:<20} {:<10}", "Algorithm", "Avg Time (s)")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for record in report.records() {
        writeln!(out, "{:<20} {:.6}", record.name, record.time)?;
    }

    writeln!(out, "\n--- Summary ---")?;
    let lines = [
        ("Best", report.best()),
        ("Worst", report.worst()),
        ("Median", report.median()),
    ];
    for (label, record) in lines.iter() {
        if let Some(record) = record {
            writeln!(out, "{} Sorting Algorithm: {} ({:.6} seconds)", label, record.name, record.time)?;
        }
    }

    writeln!(out, "\nArrays processed: {}, skipped: {}", summary.processed, summary.skipped.len())
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    avg_seconds: f64,
}

#[derive(Serialize)]
struct JsonSkipped {
    position: usize,
    reason: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    arrays: usize,
    skipped: Vec<JsonSkipped>,
    results: Vec<JsonEntry<'a>>,
    best: Option<&'a str>,
    worst: Option<&'a str>,
    median: Option<&'a str>,
}

pub fn write_json<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let report = &summary.report;
    let json = JsonReport {
        arrays: summary.processed,
        skipped: summary.skipped.iter()
            .map(|s| JsonSkipped { position: s.position, reason: s.reason.to_string() })
            .collect(),
        results: report.records().iter()
            .map(|r| JsonEntry { name: r.name, avg_seconds: r.time })
            .collect(),
        best: report.best().map(|r| r.name),
        worst: report.worst().map(|r| r.name),
        median: report.median().map(|r| r.name),
    };

    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}
