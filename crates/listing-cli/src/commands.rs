use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use listing_ingest::{read_category_table, read_origin_table, read_rows};
use listing_model::{CategoryTable, NormalizedProductRequest};
use listing_cli::batch::{BatchMode, BatchResult, run_batch};
use listing_cli::config::load_config;
use listing_transform::RowConverter;

use crate::cli::{ConvertArgs, VocabularyArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_convert(args: &ConvertArgs) -> Result<(BatchResult, BatchMode)> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;

    let categories = match &args.categories {
        Some(path) => read_category_table(path)
            .with_context(|| format!("load category table {}", path.display()))?,
        None => CategoryTable::new(),
    };
    let mut origins = config.origin_table();
    if let Some(path) = &args.origins {
        let table = read_origin_table(path)
            .with_context(|| format!("load origin table {}", path.display()))?;
        origins.extend(
            table
                .entries()
                .map(|(name, code)| (name.to_string(), code.to_string())),
        );
    }
    let vocabulary = config.vocabulary();
    let classifier = config.classifier();

    let rows = read_rows(&args.input)
        .with_context(|| format!("read rows from {}", args.input.display()))?;
    info!(
        rows = rows.len(),
        categories = categories.len(),
        origins = origins.len(),
        "inputs loaded"
    );

    let converter = RowConverter::new(
        &config.conversion,
        &vocabulary,
        &categories,
        &classifier,
        &origins,
    );
    let mode = if args.check {
        BatchMode::Check
    } else {
        BatchMode::Convert
    };
    let result = run_batch(&converter, &rows, mode);

    if mode == BatchMode::Convert {
        write_requests(&result.requests(), args.output.as_deref())?;
    }
    Ok((result, mode))
}

fn write_requests(requests: &[&NormalizedProductRequest], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, requests).context("serialize requests")?;
            writer.flush().with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), requests = requests.len(), "requests written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, requests).context("serialize requests")?;
            writeln!(writer).context("write requests")?;
        }
    }
    Ok(())
}

pub fn run_vocabulary(args: &VocabularyArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let vocabulary = config.vocabulary();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Vocabulary"),
        header_cell("Label"),
        header_cell("Code"),
    ]);
    apply_table_style(&mut table);
    let kind = vocabulary.sale_status.kind();
    for (label, value) in vocabulary.sale_status.entries() {
        table.add_row(vec![kind, label, value.code()]);
    }
    let kind = vocabulary.display_status.kind();
    for (label, value) in vocabulary.display_status.entries() {
        table.add_row(vec![kind, label, value.code()]);
    }
    let kind = vocabulary.delivery_method.kind();
    for (label, value) in vocabulary.delivery_method.entries() {
        table.add_row(vec![kind, label, value.code()]);
    }
    for (alias, carrier) in vocabulary.carrier_aliases() {
        table.add_row(vec!["carrier", alias, carrier.code()]);
    }
    println!("{table}");
    Ok(())
}
