use anyhow::{Context, Result};
use comfy_table::Table;

use baac_cli::runner;
use baac_cli::settings::{RunOverrides, resolve_config};
use baac_model::RecordKind;
use baac_output::{RunReport, write_run_report};
use baac_transform::build_pipeline;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_kinds() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Source table", "Column", "Reads", "Rule"]);
    apply_table_style(&mut table);
    for kind in RecordKind::ALL {
        let pipeline = build_pipeline(kind, baac_model::DEFAULT_YEAR);
        for rule in &pipeline.rules {
            table.add_row(vec![
                kind.to_string(),
                kind.source_name().to_string(),
                rule.target.to_string(),
                rule.source_columns().join(", "),
                rule.transform.to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_normalize(args: &RunArgs) -> Result<RunReport> {
    let overrides = RunOverrides {
        year: args.year,
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        kinds: args.kinds.iter().map(|&kind| kind.into()).collect(),
        skip_invalid_rows: args.skip_invalid_rows,
        encoding: args.encoding.map(Into::into),
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;
    let report = runner::run(&config);
    if let Some(path) = &args.report {
        write_run_report(path, &report).context("write run report")?;
    }
    Ok(report)
}
