//! The four BAAC tables and their fixed output schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the four related accident tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Accident characteristics (`caracteristiques`).
    Characteristics,
    /// Involved persons (`usagers`).
    Persons,
    /// Accident locations (`lieux`).
    Locations,
    /// Involved vehicles (`vehicules`).
    Vehicles,
}

const CHARACTERISTICS_COLUMNS: &[&str] = &[
    "Num_Acc", "date", "lum", "agg", "int", "atm", "col", "adr", "gps", "dep", "com",
];

const PERSONS_COLUMNS: &[&str] = &[
    "Num_Acc", "place", "catu", "grav", "sexe", "trajet", "secu", "locp", "actp", "etatp",
    "an_nais", "num_veh",
];

const LOCATIONS_COLUMNS: &[&str] = &[
    "Num_Acc", "catr", "voie", "v1", "v2", "circ", "nbv", "pr", "pr1", "vosp", "prof", "plan",
    "lartpc", "larrout", "surf", "infra", "situ", "env1",
];

const VEHICLES_COLUMNS: &[&str] = &["Num_Acc", "catv", "obs", "obsm", "choc", "manv", "num_veh"];

impl RecordKind {
    /// All kinds, in the order the passes run.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Characteristics,
        RecordKind::Persons,
        RecordKind::Locations,
        RecordKind::Vehicles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Characteristics => "characteristics",
            RecordKind::Persons => "persons",
            RecordKind::Locations => "locations",
            RecordKind::Vehicles => "vehicles",
        }
    }

    /// Table name used by the source export (`usagers`, `lieux`, ...).
    pub fn source_name(self) -> &'static str {
        match self {
            RecordKind::Characteristics => "caracteristiques",
            RecordKind::Persons => "usagers",
            RecordKind::Locations => "lieux",
            RecordKind::Vehicles => "vehicules",
        }
    }

    /// Output header, in write order.
    pub fn output_columns(self) -> &'static [&'static str] {
        match self {
            RecordKind::Characteristics => CHARACTERISTICS_COLUMNS,
            RecordKind::Persons => PERSONS_COLUMNS,
            RecordKind::Locations => LOCATIONS_COLUMNS,
            RecordKind::Vehicles => VEHICLES_COLUMNS,
        }
    }

    /// Field delimiter of the source export. Characteristics ships tab-separated.
    pub fn input_delimiter(self) -> u8 {
        match self {
            RecordKind::Characteristics => b'\t',
            _ => b',',
        }
    }

    /// Default input file name, e.g. `usagers_2009.csv`.
    pub fn default_input_file(self, year: i32) -> String {
        format!("{}_{year}.csv", self.source_name())
    }

    /// Default output file name, e.g. `NEW_usagers_2009.csv`.
    pub fn default_output_file(self, year: i32) -> String {
        format!("NEW_{}", self.default_input_file(year))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ModelError;

    /// Accepts both the English kind name and the source table name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered || kind.source_name() == lowered)
            .ok_or_else(|| ModelError::UnknownRecordKind(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_source_names() {
        assert_eq!("persons".parse(), Ok(RecordKind::Persons));
        assert_eq!("USAGERS".parse(), Ok(RecordKind::Persons));
        assert_eq!("lieux".parse(), Ok(RecordKind::Locations));
        assert!("accidents".parse::<RecordKind>().is_err());
    }

    #[test]
    fn every_schema_starts_with_accident_id() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.output_columns()[0], "Num_Acc", "{kind}");
        }
    }

    #[test]
    fn default_file_names_follow_export() {
        assert_eq!(
            RecordKind::Characteristics.default_input_file(2009),
            "caracteristiques_2009.csv"
        );
        assert_eq!(
            RecordKind::Vehicles.default_output_file(2009),
            "NEW_vehicules_2009.csv"
        );
    }
}
