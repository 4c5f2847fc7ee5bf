//! Command implementations.

use anyhow::Context;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde_json::Value as JsonValue;
use tracing::info;

use rowmap_cli::input::{csv_records, json_records, load_mapping, open_input};
use rowmap_model::{BooleanRule, DecodeOptions, MissingKeyRule};

use crate::cli::{DecodeArgs, EncodeArgs, InputFormatArg, ShowArgs};

pub fn run_decode(args: &DecodeArgs) -> anyhow::Result<()> {
    let mapping = load_mapping(&args.mapping)?;
    let mut options = DecodeOptions::default();
    if args.strict_booleans {
        options = options.with_booleans(BooleanRule::Strict);
    }
    if args.fail_on_missing {
        options = options.with_missing_keys(MissingKeyRule::Error);
    }

    let reader = open_input(args.input.as_deref())?;
    let mut count = 0usize;
    match args.format {
        InputFormatArg::Json => {
            for record in json_records(reader) {
                decode_one(&record?, &mapping, &options, &mut count)?;
            }
        }
        InputFormatArg::Csv => {
            for record in csv_records(reader)? {
                decode_one(&record?, &mapping, &options, &mut count)?;
            }
        }
    }
    info!(records = count, "decode finished");
    Ok(())
}

fn decode_one(
    record: &rowmap_model::ExternalRecord,
    mapping: &rowmap_model::Mapping,
    options: &DecodeOptions,
    count: &mut usize,
) -> anyhow::Result<()> {
    *count += 1;
    let decoded = rowmap_codec::decode_with(record, mapping, options)
        .with_context(|| format!("failed to decode record {count}"))?;
    println!("{}", decoded.to_json());
    Ok(())
}

pub fn run_encode(args: &EncodeArgs) -> anyhow::Result<()> {
    let mapping = load_mapping(&args.mapping)?;
    let options = DecodeOptions::default();
    let reader = open_input(args.input.as_deref())?;
    let mut count = 0usize;
    for record in json_records(reader) {
        count += 1;
        let record = record?;
        // Internal-record input is a JSON object keyed by internal names;
        // values are interpreted against the mapping's declared types.
        let JsonValue::Object(object) = record.to_json() else {
            anyhow::bail!("record {count} is not a JSON object");
        };
        let internal = rowmap_codec::decode_internal(&object, &mapping, &options)
            .with_context(|| format!("failed to read internal record {count}"))?;
        let encoded = rowmap_codec::encode(&internal, &mapping);
        println!("{}", encoded.to_json());
    }
    info!(records = count, "encode finished");
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let mapping = load_mapping(&args.mapping)?;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Internal", "External", "Type"]);
    for field in mapping.fields() {
        table.add_row(vec![
            field.internal_name.as_str(),
            field.external_name.as_str(),
            field.semantic_type.as_str(),
        ]);
    }
    println!("{table}");
    println!("{} field(s)", mapping.len());
    Ok(())
}
