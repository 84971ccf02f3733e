// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    create_test_boatrace_place, create_test_jra_place, create_test_jra_race,
    create_test_keirin_race,
};
use crate::{CsvRecord, PlaceRecord, RacePlayerRecord, RaceRecord, decode_records, encode_records};
use race_schedule_domain::{PlaceEntity, RaceEntity, RacePlayerData, RaceType};

fn round_trip_place(entity: &PlaceEntity) -> PlaceEntity {
    let text: String =
        encode_records(entity.race_type(), &[PlaceRecord::from_entity(entity)]).unwrap();
    let records: Vec<PlaceRecord> = decode_records(entity.race_type(), &text).unwrap();
    assert_eq!(records.len(), 1);
    records[0].to_entity().unwrap()
}

fn round_trip_race(entity: &RaceEntity) -> RaceEntity {
    let race_type: RaceType = entity.race_type();
    let race_text: String = encode_records(race_type, &[RaceRecord::from_entity(entity)]).unwrap();
    let player_text: String =
        encode_records(race_type, &RacePlayerRecord::from_entity(entity)).unwrap();

    let races: Vec<RaceRecord> = decode_records(race_type, &race_text).unwrap();
    let players: Vec<RacePlayerRecord> = decode_records(race_type, &player_text).unwrap();
    let player_data: Vec<RacePlayerData> = players
        .iter()
        .map(|p| p.to_player_data().unwrap())
        .collect();

    assert_eq!(races.len(), 1);
    races[0].to_entity(player_data).unwrap()
}

#[test]
fn test_place_records_round_trip() {
    let boatrace: PlaceEntity = create_test_boatrace_place(15);
    assert_eq!(round_trip_place(&boatrace), boatrace);

    let jra: PlaceEntity = create_test_jra_place();
    assert_eq!(round_trip_place(&jra), jra);
}

#[test]
fn test_race_records_round_trip() {
    let keirin: RaceEntity = create_test_keirin_race(1, 11, "立川記念");
    assert_eq!(round_trip_race(&keirin), keirin);

    let jra: RaceEntity = create_test_jra_race(11);
    assert_eq!(round_trip_race(&jra), jra);
}

#[test]
fn test_race_headers_depend_on_race_type() {
    assert_eq!(
        RaceRecord::headers(RaceType::Keirin),
        vec![
            "id",
            "name",
            "stage",
            "dateTime",
            "location",
            "grade",
            "number",
            "updateDate"
        ]
    );
    assert_eq!(
        RaceRecord::headers(RaceType::Nar)[8..],
        ["surfaceType", "distance"]
    );
    assert_eq!(
        RaceRecord::headers(RaceType::Jra)[8..],
        ["surfaceType", "distance", "heldTimes", "heldDayTimes"]
    );
    assert_eq!(
        RacePlayerRecord::headers(RaceType::Boatrace).join(","),
        "id,raceId,positionNumber,playerNumber,updateDate"
    );
}

#[test]
fn test_encoded_keirin_race_row() {
    let keirin: RaceEntity = create_test_keirin_race(1, 1, "立川記念");
    let text: String =
        encode_records(RaceType::Keirin, &[RaceRecord::from_entity(&keirin)]).unwrap();

    assert_eq!(
        text,
        "id,name,stage,dateTime,location,grade,number,updateDate\n\
         keirin202401012801,立川記念,S級決勝,2024-01-01 15:40:00,立川,GⅢ,1,2024-01-01 12:00:00\n"
    );
}

#[test]
fn test_columns_are_matched_by_header_name() {
    let text: &str = "updateDate,grade,number,location,dateTime,stage,name,id\n\
                      2024-01-01 12:00:00,GⅢ,1,立川,2024-01-01 15:40:00,S級決勝,立川記念,keirin202401012801\n";

    let records: Vec<RaceRecord> = decode_records(RaceType::Keirin, text).unwrap();

    assert_eq!(records.len(), 1);
    let entity: RaceEntity = records[0].to_entity(Vec::new()).unwrap();
    assert_eq!(entity.id().as_str(), "keirin202401012801");
    assert_eq!(entity.race_data().name(), "立川記念");
}

#[test]
fn test_player_record_id_must_match_race_and_position() {
    let text: &str = "id,raceId,positionNumber,playerNumber,updateDate\n\
                      keirin20240101280103,keirin202401012801,3,15003,2024-01-01 12:00:00\n\
                      keirin20240101280104,keirin202401012801,5,15005,2024-01-01 12:00:00\n";

    let records: Vec<RacePlayerRecord> = decode_records(RaceType::Keirin, text).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), "keirin20240101280103");
}

#[test]
fn test_jra_race_row_requires_held_day_columns() {
    let text: &str = "id,name,stage,dateTime,location,grade,number,updateDate,surfaceType,distance\n\
                      jra202405260511,日本ダービー,,2024-05-26 15:40:00,東京,GⅠ,11,2024-01-01 12:00:00,芝,2400\n";

    let records: Vec<RaceRecord> = decode_records(RaceType::Jra, text).unwrap();

    assert!(records.is_empty());
}
