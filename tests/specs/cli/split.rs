//! `duratiform split` specs

use crate::prelude::*;

#[test]
fn default_parts_are_hours_minutes_seconds() {
    cli()
        .args(&["split", &ms(9 * HOUR + 28 * MINUTE + 51 * SECOND)])
        .passes()
        .stdout_eq("hour: 9\nminute: 28\nsecond: 51\n");
}

#[test]
fn carries_overflowing_units() {
    cli()
        .args(&["split", &ms(67 * MINUTE + 67 * SECOND), "--parts", "3"])
        .passes()
        .stdout_eq("hour: 1\nminute: 8\nsecond: 7\n");
}

#[test]
fn named_parts_with_strings() {
    cli()
        .args(&["split", &ms(DAY + 2 * SECOND), "-p", "days", "--strings"])
        .passes()
        .stdout_eq("day: 1 (01)\nhour: 0 (00)\nminute: 0 (00)\nsecond: 2 (02)\n");
}

#[test]
fn json_is_flat_map() {
    cli()
        .args(&[
            "split",
            &ms(358 * HOUR + 29 * MINUTE + 7 * SECOND),
            "--strings",
            "-o",
            "json",
        ])
        .passes()
        .stdout_json(serde_json::json!({
            "hour": 358,
            "hour2": "358",
            "minute": 29,
            "minute2": "29",
            "second": 7,
            "second2": "07",
        }));
}

#[test]
fn json_without_strings() {
    cli()
        .args(&["split", "1999", "-p", "1", "-o", "json"])
        .passes()
        .stdout_json(serde_json::json!({ "second": 1 }));
}
