//! Batch Prescription Filler
//!
//! Fills a whole roster of patient records and exports one multi-page PDF,
//! printing per-record progress and a succeeded/skipped summary.
//!
//! Usage:
//!   cargo run --example batch_fill -- <template.png> <font.ttf> <records.json> [output.pdf] [layout.json]
//!
//! Examples:
//!   cargo run --example batch_fill -- assets/prescription.png assets/font.ttf input/roster.json
//!   cargo run --example batch_fill -- assets/prescription.png assets/font.ttf input/roster.json output/august.pdf input/layout.json

use anyhow::{Context, Result};
use formfill::{parse_layout, parse_records, run_batch_with_progress, Layout, RunConfig};
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 4 {
        eprintln!(
            "Usage: {} <template.png> <font.ttf> <records.json> [output.pdf] [layout.json]",
            args[0]
        );
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  cargo run --example batch_fill -- assets/prescription.png assets/font.ttf input/roster.json");
        std::process::exit(1);
    }

    let template_path = &args[1];
    let font_path = &args[2];
    let records_path = &args[3];
    let output_path = if args.len() > 4 {
        args[4].clone()
    } else {
        "output/prescriptions.pdf".to_string()
    };

    // Optional layout JSON; the stock prescription layout otherwise
    let layout = if args.len() > 5 {
        let layout_json = std::fs::read_to_string(&args[5])
            .with_context(|| format!("Failed to read layout '{}'", args[5]))?;
        parse_layout(&layout_json)?
    } else {
        Layout::new()
    };

    let template_bytes = std::fs::read(template_path)
        .with_context(|| format!("Failed to read template '{}'", template_path))?;
    let font_bytes =
        std::fs::read(font_path).with_context(|| format!("Failed to read font '{}'", font_path))?;
    let records_json = std::fs::read_to_string(records_path)
        .with_context(|| format!("Failed to read records '{}'", records_path))?;
    let records = parse_records(&records_json)?;

    let config = RunConfig::from_layout(&template_bytes, font_bytes, layout)?;
    let outcome = run_batch_with_progress(&config, &records, |completed, total| {
        println!("Processing record {}/{}", completed, total);
    })?;

    for failure in &outcome.skipped {
        eprintln!("Skipped record {}: {}", failure.index + 1, failure.error);
    }

    // Create output directory
    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, &outcome.pdf_bytes)?;

    println!(
        "Generated: {} ({} succeeded, {} skipped)",
        output_path,
        outcome.succeeded,
        outcome.skipped_count()
    );

    Ok(())
}
