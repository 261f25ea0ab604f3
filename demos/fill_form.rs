//! Single Prescription Filler
//!
//! Fills one patient record onto a form template and exports a single-page
//! PDF.
//!
//! Usage:
//!   cargo run --example fill_form -- <template.png> <font.ttf> <record.json> [output.pdf] [layout.json]
//!
//! Examples:
//!   cargo run --example fill_form -- assets/prescription.png assets/font.ttf input/record.json
//!   cargo run --example fill_form -- assets/prescription.png assets/font.ttf input/record.json output/asha.pdf input/layout.json

use anyhow::{Context, Result};
use formfill::{parse_layout, parse_record, Compositor, Layout, RunConfig};
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 4 {
        eprintln!(
            "Usage: {} <template.png> <font.ttf> <record.json> [output.pdf] [layout.json]",
            args[0]
        );
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  cargo run --example fill_form -- assets/prescription.png assets/font.ttf input/record.json");
        std::process::exit(1);
    }

    let template_path = &args[1];
    let font_path = &args[2];
    let record_path = &args[3];
    let output_path = if args.len() > 4 {
        args[4].clone()
    } else {
        "output/prescription.pdf".to_string()
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
    let record_json = std::fs::read_to_string(record_path)
        .with_context(|| format!("Failed to read record '{}'", record_path))?;
    let record = parse_record(&record_json)?;

    let config = RunConfig::from_layout(&template_bytes, font_bytes, layout)?;
    let compositor = Compositor::new(&config)?;
    let page = compositor.fill(&record)?;
    let pdf_bytes = pdf_export::export_single(&page)?;

    // Create output directory
    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, pdf_bytes)?;

    println!("Generated: {}", output_path);

    Ok(())
}
