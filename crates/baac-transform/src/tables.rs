//! Column tables for the four record kinds.

use baac_model::RecordKind;

use crate::types::{FieldRule, KindPipeline, TransformType};

/// GPS precision codes of the Characteristics table.
pub const GPS_CODES: &[&str] = &["M", "A", "G", "R"];

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i64 = 1900;

const fn range(min: i64, max: i64) -> TransformType {
    TransformType::Range { min, max }
}

/// Same-name column with the given rule.
const fn column(name: &'static str, transform: TransformType) -> FieldRule {
    FieldRule::new(name, name, transform)
}

/// Build the rule table of `kind` for a dataset of the given year.
pub fn build_pipeline(kind: RecordKind, year: i32) -> KindPipeline {
    let rules = match kind {
        RecordKind::Characteristics => characteristics_rules(),
        RecordKind::Persons => persons_rules(year),
        RecordKind::Locations => locations_rules(),
        RecordKind::Vehicles => vehicles_rules(),
    };
    KindPipeline { kind, year, rules }
}

fn characteristics_rules() -> Vec<FieldRule> {
    vec![
        column("Num_Acc", TransformType::CopyRaw),
        FieldRule::new(
            "date",
            "mois",
            TransformType::DateTime {
                day: "jour",
                hour_minute: "hrmn",
            },
        ),
        column("lum", range(0, 5)),
        column("agg", range(0, 2)),
        column("int", range(0, 9)),
        column("atm", range(0, 9)),
        column("col", range(0, 7)),
        column("adr", TransformType::Address),
        column("gps", TransformType::LetterEnum { allowed: GPS_CODES }),
        column("dep", TransformType::PostalCode),
        column("com", TransformType::CommuneCode),
    ]
}

fn persons_rules(year: i32) -> Vec<FieldRule> {
    vec![
        column("Num_Acc", TransformType::CopyRaw),
        column("place", range(1, 9)),
        column("catu", range(0, 4)),
        column("grav", range(0, 4)),
        column("sexe", range(0, 2)),
        column("trajet", range(0, 9)),
        column("secu", TransformType::SecurityCode),
        column("locp", range(0, 8)),
        column("actp", range(0, 9)),
        column("etatp", range(0, 3)),
        column("an_nais", range(MIN_BIRTH_YEAR, i64::from(year))),
        column("num_veh", TransformType::Clean),
    ]
}

fn locations_rules() -> Vec<FieldRule> {
    vec![
        column("Num_Acc", TransformType::CopyRaw),
        column("catr", range(0, 9)),
        column("voie", TransformType::CopyRaw),
        column("v1", TransformType::CopyRaw),
        column("v2", TransformType::CopyRaw),
        column("circ", range(0, 4)),
        column("nbv", TransformType::CopyRaw),
        column("pr", TransformType::CopyRaw),
        column("pr1", TransformType::CopyRaw),
        column("vosp", range(0, 3)),
        column("prof", range(0, 4)),
        column("plan", range(0, 4)),
        column("lartpc", TransformType::CopyRaw),
        column("larrout", TransformType::CopyRaw),
        column("surf", range(0, 9)),
        column("infra", range(0, 7)),
        column("situ", range(0, 5)),
        column("env1", TransformType::CopyRaw),
    ]
}

fn vehicles_rules() -> Vec<FieldRule> {
    vec![
        column("Num_Acc", TransformType::CopyRaw),
        column("catv", TransformType::VehicleCategory),
        column("obs", range(0, 16)),
        column("obsm", range(0, 9)),
        column("choc", range(0, 9)),
        column("manv", range(0, 24)),
        column("num_veh", TransformType::CopyRaw),
    ]
}
