// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_keirin_race;
use crate::{CsvRecord, RaceRecord, decode_records, encode_records, upsert_merge};
use race_schedule_domain::{RaceEntity, RaceType};
use std::collections::HashSet;

fn keirin_records(entities: &[RaceEntity]) -> Vec<RaceRecord> {
    entities.iter().map(RaceRecord::from_entity).collect()
}

#[test]
fn test_empty_text_decodes_to_no_records() {
    let records: Vec<RaceRecord> = decode_records(RaceType::Keirin, "").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_malformed_row_is_dropped() {
    let text: &str = "id,name,stage,dateTime,location,grade,number,updateDate\n\
                      keirin202401012801,一般,S級決勝,2024-01-01 10:00:00,立川,GⅢ,1,2024-01-01 12:00:00\n\
                      keirin202401012802,一般,S級決勝,not-a-date,立川,GⅢ,2,2024-01-01 12:00:00\n\
                      keirin202401012803,一般,S級決勝,2024-01-01 11:00:00,立川,GⅢ,3,2024-01-01 12:00:00\n\
                      keirin202401012804,一般\n";

    let records: Vec<RaceRecord> = decode_records(RaceType::Keirin, text).unwrap();

    let ids: Vec<&str> = records.iter().map(CsvRecord::id).collect();
    assert_eq!(ids, vec!["keirin202401012801", "keirin202401012803"]);
}

#[test]
fn test_values_with_delimiters_are_quoted() {
    let entity: RaceEntity = create_test_keirin_race(1, 1, "立川記念, 初日");
    let text: String =
        encode_records(RaceType::Keirin, &keirin_records(&[entity.clone()])).unwrap();

    assert!(text.contains("\"立川記念, 初日\""));
    let records: Vec<RaceRecord> = decode_records(RaceType::Keirin, &text).unwrap();
    let players = entity.race_player_data_list().to_vec();
    assert_eq!(records[0].to_entity(players).unwrap(), entity);
}

#[test]
fn test_upsert_merge_overwrites_and_appends() {
    let existing: Vec<RaceRecord> = keirin_records(&[
        create_test_keirin_race(1, 1, "一般"),
        create_test_keirin_race(1, 2, "一般"),
    ]);
    let batch: Vec<RaceRecord> = keirin_records(&[
        create_test_keirin_race(1, 2, "選抜"),
        create_test_keirin_race(2, 1, "一般"),
    ]);

    let merged: Vec<RaceRecord> = upsert_merge(existing, batch.clone());

    let ids: HashSet<&str> = merged.iter().map(CsvRecord::id).collect();
    assert_eq!(merged.len(), 3);
    assert_eq!(ids.len(), 3);
    let replaced: &RaceRecord = merged
        .iter()
        .find(|r| r.id() == "keirin202401012802")
        .unwrap();
    assert_eq!(replaced, &batch[0]);
}

#[test]
fn test_upsert_merge_sorts_newest_first() {
    let existing: Vec<RaceRecord> = keirin_records(&[create_test_keirin_race(1, 1, "一般")]);
    let batch: Vec<RaceRecord> = keirin_records(&[
        create_test_keirin_race(3, 1, "一般"),
        create_test_keirin_race(2, 1, "一般"),
    ]);

    let merged: Vec<RaceRecord> = upsert_merge(existing, batch);

    let ids: Vec<&str> = merged.iter().map(CsvRecord::id).collect();
    assert_eq!(
        ids,
        vec![
            "keirin202401032801",
            "keirin202401022801",
            "keirin202401012801"
        ]
    );
}

#[test]
fn test_upsert_merge_is_idempotent() {
    let batch: Vec<RaceRecord> = keirin_records(&[
        create_test_keirin_race(1, 1, "一般"),
        create_test_keirin_race(2, 5, "一般"),
    ]);

    let once: Vec<RaceRecord> = upsert_merge(Vec::new(), batch.clone());
    let twice: Vec<RaceRecord> = upsert_merge(once.clone(), batch);

    assert_eq!(
        encode_records(RaceType::Keirin, &once).unwrap(),
        encode_records(RaceType::Keirin, &twice).unwrap()
    );
}
