//! Clock entry lifecycle tests - clock in, clock out, update, insert
//!
//! Times are injected so the scenarios are deterministic.

mod common;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use common::{cursor, fixture, parsed};
use orgtree::clock::{clock_in, clock_out, insert_timestamp, is_clocked_in, update_clock};
use orgtree::{OrgConfig, OrgError};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 7)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

#[test]
fn test_full_clock_lifecycle() {
    let config = OrgConfig::default();
    let (mut doc, outline) = fixture("* Task\nbody\n");

    // Idle -> clock in at 10:00
    let plan = clock_in(&doc, &outline, cursor(0, 0), at(10, 0), &config).unwrap();
    doc.apply(&plan);
    assert_eq!(doc.text(), "* Task\nCLOCK: [2026-08-07 Fri 10:00]\nbody\n");

    let outline = parsed(&doc);
    assert!(is_clocked_in(&doc, &outline, 0, &config));

    // Running -> clock out at 11:30 yields duration 1:30
    let plan = clock_out(&doc, &outline, cursor(0, 0), at(11, 30), &config).unwrap();
    doc.apply(&plan);
    assert_eq!(
        doc.text(),
        "* Task\nCLOCK: [2026-08-07 Fri 10:00]--[2026-08-07 Fri 11:30] => 1:30\nbody\n"
    );

    let outline = parsed(&doc);
    assert!(!is_clocked_in(&doc, &outline, 0, &config));
}

#[test]
fn test_update_clock_after_manual_edit() {
    let config = OrgConfig::default();

    // The end stamp was hand-edited back to 11:00; the duration is stale
    let (mut doc, outline) = fixture(
        "* Task\nCLOCK: [2026-08-07 Fri 10:00]--[2026-08-07 Fri 11:00] => 1:30\n",
    );
    let plan = update_clock(&doc, &outline, cursor(1, 0), &config).unwrap();
    doc.apply(&plan);
    assert_eq!(
        doc.text(),
        "* Task\nCLOCK: [2026-08-07 Fri 10:00]--[2026-08-07 Fri 11:00] => 1:00\n"
    );
}

#[test]
fn test_second_clock_in_appends_below_previous_entry() {
    let config = OrgConfig::default();
    let (mut doc, outline) = fixture(
        "* Task\nCLOCK: [2026-08-06 Thu 09:00]--[2026-08-06 Thu 10:00] => 1:00\n",
    );
    let plan = clock_in(&doc, &outline, cursor(0, 0), at(10, 0), &config).unwrap();
    doc.apply(&plan);
    assert_eq!(
        doc.text(),
        "* Task\n\
         CLOCK: [2026-08-06 Thu 09:00]--[2026-08-06 Thu 10:00] => 1:00\n\
         CLOCK: [2026-08-07 Fri 10:00]\n"
    );
}

#[test]
fn test_clock_out_requires_an_open_entry() {
    let config = OrgConfig::default();
    let (doc, outline) = fixture("* Task\n");
    assert_eq!(
        clock_out(&doc, &outline, cursor(0, 0), at(11, 0), &config),
        Err(OrgError::NoClockEntry)
    );
}

#[test]
fn test_malformed_clock_leaves_document_unchanged() {
    let config = OrgConfig::default();
    let (doc, outline) = fixture("* Task\nCLOCK: [garbled stamp\n");
    let before = doc.text();

    let result = clock_out(&doc, &outline, cursor(0, 0), at(11, 0), &config);
    assert!(matches!(result, Err(OrgError::MalformedTimestamp(_))));
    assert_eq!(doc.text(), before);
}

#[test]
fn test_clock_under_nearest_heading_only() {
    let config = OrgConfig::default();
    let (mut doc, outline) = fixture("* Parent\n** Child\nchild body\n");

    // Cursor inside the child's body clocks the child, not the parent
    let plan = clock_in(&doc, &outline, cursor(2, 0), at(9, 0), &config).unwrap();
    doc.apply(&plan);
    assert_eq!(
        doc.text(),
        "* Parent\n** Child\nCLOCK: [2026-08-07 Fri 09:00]\nchild body\n"
    );
}

#[test]
fn test_insert_timestamp_active_and_inactive() {
    let config = OrgConfig::default();
    let (mut doc, _) = fixture("Meet on \n");

    let plan = insert_timestamp(cursor(0, 8), at(0, 0), true, &config);
    doc.apply(&plan);
    assert_eq!(doc.text(), "Meet on <2026-08-07 Fri>\n");

    let plan = insert_timestamp(plan.cursor, at(0, 0), false, &config);
    doc.apply(&plan);
    assert_eq!(doc.text(), "Meet on <2026-08-07 Fri>[2026-08-07 Fri]\n");
}
