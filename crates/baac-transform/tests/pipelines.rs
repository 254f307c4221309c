//! End-to-end rule-table tests, one raw row per record kind.

use baac_model::{RawRecord, RecordKind};
use baac_transform::{TransformError, build_pipeline, execute_record};

fn render(kind: RecordKind, pairs: &[(&str, &str)]) -> String {
    let pipeline = build_pipeline(kind, 2009);
    let record = RawRecord::from_pairs(pairs.iter().copied());
    execute_record(&pipeline, 1, &record)
        .expect("row normalizes")
        .to_fields()
        .join(",")
}

#[test]
fn characteristics_row() {
    let line = render(
        RecordKind::Characteristics,
        &[
            ("Num_Acc", "200900000001"),
            ("mois", "3"),
            ("jour", "15"),
            ("hrmn", "800"),
            ("lum", "2"),
            ("agg", "9"),
            ("int", ""),
            ("atm", "1"),
            ("col", "7"),
            ("adr", "- rte de nice"),
            ("gps", "Z"),
            ("dep", "130"),
            ("com", "1"),
        ],
    );
    insta::assert_snapshot!(line, @"200900000001,2009-03-15 08:00:00,2,9,0,1,7,ROUTE DE NICE,,13,100");
}

#[test]
fn characteristics_row_without_time() {
    let line = render(
        RecordKind::Characteristics,
        &[
            ("Num_Acc", "200900000002"),
            ("mois", "10"),
            ("jour", "4"),
            ("hrmn", ""),
            ("lum", "-"),
            ("agg", "1"),
            ("int", "2"),
            ("atm", "?"),
            ("col", "6"),
            ("adr", "bd de la liberte"),
            ("gps", "M"),
            ("dep", "59"),
            ("com", "350"),
        ],
    );
    insta::assert_snapshot!(line, @"200900000002,2009-10-04,0,1,2,0,6,BOULEVARD DE LA LIBERTE,M,59,350");
}

#[test]
fn persons_rows() {
    let first = render(
        RecordKind::Persons,
        &[
            ("Num_Acc", "200900000001"),
            ("place", ""),
            ("catu", "1"),
            ("grav", "4"),
            ("sexe", "3"),
            ("trajet", "-"),
            ("secu", "12"),
            ("locp", ""),
            ("actp", "0"),
            ("etatp", "9"),
            ("an_nais", "1899"),
            ("num_veh", "-"),
        ],
    );
    insta::assert_snapshot!(first, @"200900000001,,1,4,3,0,12,0,0,9,1899,");

    let second = render(
        RecordKind::Persons,
        &[
            ("Num_Acc", "200900000002"),
            ("place", "2"),
            ("catu", "2"),
            ("grav", "3"),
            ("sexe", "1"),
            ("trajet", "5"),
            ("secu", "14"),
            ("locp", "0"),
            ("actp", "0"),
            ("etatp", "0"),
            ("an_nais", "1975"),
            ("num_veh", "B02"),
        ],
    );
    insta::assert_snapshot!(second, @"200900000002,2,2,3,1,5,,0,0,0,1975,B02");
}

#[test]
fn locations_row() {
    let line = render(
        RecordKind::Locations,
        &[
            ("Num_Acc", "200900000003"),
            ("catr", "3"),
            ("voie", "12"),
            ("v1", ""),
            ("v2", "A"),
            ("circ", ""),
            ("nbv", "2"),
            ("pr", ""),
            ("pr1", "-"),
            ("vosp", "5"),
            ("prof", "1"),
            ("plan", ""),
            ("lartpc", "0"),
            ("larrout", "60"),
            ("surf", "1"),
            ("infra", ""),
            ("situ", "1"),
            ("env1", "99"),
        ],
    );
    insta::assert_snapshot!(line, @"200900000003,3,12,,A,0,2,,-,5,1,0,0,60,1,0,1,99");
}

#[test]
fn vehicles_row() {
    let line = render(
        RecordKind::Vehicles,
        &[
            ("Num_Acc", "200900000004"),
            ("catv", "33"),
            ("obs", "17"),
            ("obsm", "2"),
            ("choc", ""),
            ("manv", "24"),
            ("num_veh", "A01"),
        ],
    );
    insta::assert_snapshot!(line, @"200900000004,33,17,2,0,24,A01");
}

#[test]
fn invalid_commune_code_is_a_row_error() {
    let pipeline = build_pipeline(RecordKind::Characteristics, 2009);
    let record = RawRecord::from_pairs([
        ("Num_Acc", "200900000005"),
        ("mois", "1"),
        ("jour", "1"),
        ("hrmn", "1200"),
        ("lum", "1"),
        ("agg", "1"),
        ("int", "1"),
        ("atm", "1"),
        ("col", "1"),
        ("adr", ""),
        ("gps", ""),
        ("dep", "201"),
        ("com", "0A"),
    ]);
    let err = execute_record(&pipeline, 5, &record).unwrap_err();
    assert!(matches!(
        err,
        TransformError::InvalidRow {
            row: 5,
            column: "com",
            ..
        }
    ));
}
