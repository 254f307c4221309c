//! Apply a rule table to one raw record.

use baac_model::{CellValue, NormalizedRecord, RawRecord};

use crate::error::{Result, TransformError};
use crate::normalization::{
    NormalizeError, clamp_letter_enum, clamp_range, clamp_security_code, clamp_vehicle_category,
    clean, compose_datetime, format_commune_code, is_sentinel, normalize_address,
    normalize_postal_code,
};
use crate::types::{FieldRule, KindPipeline, TransformType};

/// Normalize `record` into the output schema of `pipeline`.
///
/// `row` is the 1-based data row number used in diagnostics.
pub fn execute_record(
    pipeline: &KindPipeline,
    row: u64,
    record: &RawRecord,
) -> Result<NormalizedRecord> {
    let mut values = Vec::with_capacity(pipeline.rules.len());
    for rule in &pipeline.rules {
        let value = apply_rule(pipeline, rule, record).map_err(|err| match err {
            RuleFailure::Missing(column) => TransformError::MissingColumns {
                kind: pipeline.kind,
                columns: vec![column.to_string()],
            },
            RuleFailure::Invalid(source) => TransformError::InvalidRow {
                kind: pipeline.kind,
                row,
                column: rule.target,
                source,
            },
        })?;
        values.push(value);
    }
    Ok(NormalizedRecord::new(pipeline.kind, values)?)
}

enum RuleFailure {
    Missing(&'static str),
    Invalid(NormalizeError),
}

impl From<NormalizeError> for RuleFailure {
    fn from(err: NormalizeError) -> Self {
        RuleFailure::Invalid(err)
    }
}

fn lookup<'a>(
    record: &'a RawRecord,
    column: &'static str,
) -> std::result::Result<&'a str, RuleFailure> {
    record.get(column).ok_or(RuleFailure::Missing(column))
}

fn apply_rule(
    pipeline: &KindPipeline,
    rule: &FieldRule,
    record: &RawRecord,
) -> std::result::Result<CellValue, RuleFailure> {
    let raw = lookup(record, rule.source)?;
    let value = match &rule.transform {
        TransformType::CopyRaw => CellValue::text(raw),
        TransformType::Clean => clean(raw),
        TransformType::Range { min, max } => clamp_range(raw, *min, *max),
        TransformType::VehicleCategory => clamp_vehicle_category(raw),
        TransformType::SecurityCode => clamp_security_code(raw),
        TransformType::LetterEnum { allowed } => clamp_letter_enum(raw, allowed),
        TransformType::CommuneCode => format_commune_code(raw)?,
        TransformType::Address => {
            if is_sentinel(raw) {
                CellValue::Empty
            } else {
                match normalize_address(raw) {
                    address if address.is_empty() => CellValue::Empty,
                    address => CellValue::Text(address),
                }
            }
        }
        TransformType::PostalCode => {
            if is_sentinel(raw) {
                CellValue::Empty
            } else {
                normalize_postal_code(raw)?
            }
        }
        TransformType::DateTime { day, hour_minute } => compose_datetime(
            pipeline.year,
            raw,
            lookup(record, *day)?,
            lookup(record, *hour_minute)?,
        )?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::build_pipeline;
    use baac_model::RecordKind;
    use chrono::NaiveDate;

    fn characteristics_row(pairs: &[(&str, &str)]) -> RawRecord {
        let mut row = vec![
            ("Num_Acc", "200900000001"),
            ("mois", "3"),
            ("jour", "15"),
            ("hrmn", "800"),
            ("lum", "2"),
            ("agg", "9"),
            ("int", "1"),
            ("atm", "1"),
            ("col", "3"),
            ("adr", "- rte de nice"),
            ("gps", "Z"),
            ("dep", "130"),
            ("com", "1"),
        ];
        for &(column, value) in pairs {
            if let Some(slot) = row.iter_mut().find(|slot| slot.0 == column) {
                slot.1 = value;
            }
        }
        RawRecord::from_pairs(row)
    }

    #[test]
    fn characteristics_row_end_to_end() {
        let pipeline = build_pipeline(RecordKind::Characteristics, 2009);
        let record = execute_record(&pipeline, 1, &characteristics_row(&[])).unwrap();

        let expected_date = NaiveDate::from_ymd_opt(2009, 3, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(record.get("Num_Acc"), Some(&CellValue::text("200900000001")));
        assert_eq!(record.get("date"), Some(&CellValue::DateTime(expected_date)));
        assert_eq!(record.get("lum"), Some(&CellValue::Integer(2)));
        assert_eq!(record.get("agg"), Some(&CellValue::text("9")));
        assert_eq!(record.get("adr"), Some(&CellValue::text("ROUTE DE NICE")));
        assert_eq!(record.get("gps"), Some(&CellValue::Empty));
        assert_eq!(record.get("dep"), Some(&CellValue::Integer(13)));
        assert_eq!(record.get("com"), Some(&CellValue::Integer(100)));
    }

    #[test]
    fn sentinel_address_and_department_are_empty() {
        let pipeline = build_pipeline(RecordKind::Characteristics, 2009);
        let row = characteristics_row(&[("adr", "-"), ("dep", ""), ("lum", "")]);
        let record = execute_record(&pipeline, 1, &row).unwrap();
        assert_eq!(record.get("adr"), Some(&CellValue::Empty));
        assert_eq!(record.get("dep"), Some(&CellValue::Empty));
        assert_eq!(record.get("lum"), Some(&CellValue::zero_default()));
    }

    #[test]
    fn bad_date_names_row_and_column() {
        let pipeline = build_pipeline(RecordKind::Characteristics, 2009);
        let row = characteristics_row(&[("mois", "2"), ("jour", "30")]);
        let err = execute_record(&pipeline, 7, &row).unwrap_err();
        match err {
            TransformError::InvalidRow { row, column, .. } => {
                assert_eq!(row, 7);
                assert_eq!(column, "date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_is_reported() {
        let pipeline = build_pipeline(RecordKind::Vehicles, 2009);
        let row = RawRecord::from_pairs([("Num_Acc", "1"), ("catv", "7")]);
        let err = execute_record(&pipeline, 1, &row).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumns { .. }));
    }

    #[test]
    fn raw_copies_keep_sentinels() {
        let pipeline = build_pipeline(RecordKind::Vehicles, 2009);
        let row = RawRecord::from_pairs([
            ("Num_Acc", "200900000002"),
            ("catv", "41"),
            ("obs", ""),
            ("obsm", "2"),
            ("choc", "12"),
            ("manv", "-"),
            ("num_veh", "-"),
        ]);
        let record = execute_record(&pipeline, 1, &row).unwrap();
        assert_eq!(
            record.to_fields(),
            vec!["200900000002", "", "0", "2", "12", "0", "-"]
        );
    }
}
