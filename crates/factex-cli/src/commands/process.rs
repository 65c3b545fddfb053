//! Process command - extract data from a single document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use factex_core::extract::{DocumentParser, HeuristicParser};
use factex_core::models::config::FactexConfig;
use factex_core::models::document::ExtractionResult;
use factex_core::pdf::{PageDecoder, PdfDecoder};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Include the raw text preview in JSON output
    #[arg(long)]
    raw_text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let result = extract_file(&args.input, &config)?;

    let output = format_result(&result, args.format, args.raw_text, &config)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration, falling back to defaults when no path is given.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<FactexConfig> {
    match config_path {
        Some(path) => Ok(FactexConfig::from_file(Path::new(path))?),
        None => Ok(FactexConfig::default()),
    }
}

/// Decode and extract one file.
///
/// Decode failures are absorbed into a default result per the engine
/// contract; only filesystem errors propagate.
pub(crate) fn extract_file(path: &Path, config: &FactexConfig) -> anyhow::Result<ExtractionResult> {
    let data = fs::read(path)?;

    let mut decoder = PdfDecoder::new();
    let parser = HeuristicParser::new().with_max_pages(config.pdf.max_pages);

    let result = match decoder.load(&data).and_then(|()| decoder.decode_pages()) {
        Ok(pages) => parser.parse(&pages),
        Err(e) => {
            warn!("Failed to decode {}: {}", path.display(), e);
            ExtractionResult::empty(format!("Error opening PDF: {}", e))
        }
    };

    Ok(result)
}

pub(crate) fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    include_raw_text: bool,
    config: &FactexConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(result)?;
            if let Some(object) = value.as_object_mut() {
                if include_raw_text {
                    let preview = result
                        .raw_text_preview(config.extraction.raw_text_preview)
                        .to_string();
                    object.insert("raw_text".to_string(), serde_json::Value::String(preview));
                } else {
                    object.remove("raw_text");
                }
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "kind",
        "locale",
        "title",
        "from_address",
        "to_address",
        "items",
        "total",
    ])?;

    let from_address = result.from_address.replace('\n', ", ");
    let to_address = result.to_address.replace('\n', ", ");
    let item_count = result.items.len().to_string();
    let total = result.total.to_string();

    wtr.write_record([
        result.kind.as_str(),
        result.locale.as_str(),
        result.title.as_str(),
        from_address.as_str(),
        to_address.as_str(),
        item_count.as_str(),
        total.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let table = result.locale.table();
    let mut output = String::new();

    output.push_str(result.kind.label(result.locale));
    if !result.title.is_empty() {
        output.push_str(&format!(" {}", result.title));
    }
    output.push_str("\n\n");

    output.push_str(&format!("{}\n", table.label_from));
    if !result.from_address.is_empty() {
        output.push_str(&format!("{}\n", result.from_address));
    }
    output.push('\n');

    output.push_str(&format!("{}\n", table.label_to));
    if !result.to_address.is_empty() {
        output.push_str(&format!("{}\n", result.to_address));
    }
    output.push('\n');

    for item in &result.items {
        output.push_str(&format!(
            "  {} x{} @ {}{}\n",
            item.description, item.quantity, table.currency_symbol, item.unit_price
        ));
    }

    output.push_str(&format!(
        "\nTotal: {}{}\n",
        table.currency_symbol, result.total
    ));

    output
}

#[cfg(test)]
mod tests {
    use factex_core::models::document::LineItem;
    use rust_decimal::Decimal;

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample() -> ExtractionResult {
        let mut result = ExtractionResult::empty("");
        result.title = "F-2024-09".to_string();
        result.from_address = "Atelier Dupont\n3 rue Verte".to_string();
        result.items = vec![LineItem {
            description: "Consulting".to_string(),
            quantity: 2,
            unit_price: dec("50.00"),
        }];
        result.total = dec("100.00");
        result.raw_text = "Facture n° F-2024-09".to_string();
        result
    }

    #[test]
    fn test_json_omits_raw_text_by_default() {
        let output = format_result(
            &sample(),
            OutputFormat::Json,
            false,
            &FactexConfig::default(),
        )
        .unwrap();

        assert!(output.contains("\"kind\": \"invoice\""));
        assert!(!output.contains("raw_text"));
    }

    #[test]
    fn test_json_raw_text_is_clipped() {
        let mut config = FactexConfig::default();
        config.extraction.raw_text_preview = 7;

        let output = format_result(&sample(), OutputFormat::Json, true, &config).unwrap();

        assert!(output.contains("\"raw_text\": \"Facture\""));
    }

    #[test]
    fn test_csv_flattens_addresses() {
        let output = format_csv(&sample()).unwrap();

        assert!(output.contains("Atelier Dupont, 3 rue Verte"));
        assert!(output.contains("invoice,fr,F-2024-09"));
    }

    #[test]
    fn test_text_uses_locale_labels() {
        let output = format_text(&sample());

        assert!(output.starts_with("Facture F-2024-09"));
        assert!(output.contains("De :"));
        assert!(output.contains("Consulting x2 @ €50.00"));
        assert!(output.contains("Total: €100.00"));
    }
}
