// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ConditionData, HeldDayData, PlaceData, PlaceEntity, RaceData, RaceEntity, RacePlayerData,
    RaceType,
};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn update_date() -> NaiveDateTime {
    date_time(2024, 1, 1, 12, 0)
}

pub fn create_keirin_race_data(number: u32, name: &str) -> RaceData {
    RaceData::create(
        RaceType::Keirin,
        name,
        date_time(2024, 1, 1, 15, 40),
        "立川",
        "GⅢ",
        number,
        Some("S級決勝"),
    )
    .unwrap()
}

pub fn create_keirin_race_entity(number: u32, name: &str) -> RaceEntity {
    let players: Vec<RacePlayerData> = (1..=9)
        .map(|position| {
            RacePlayerData::create(RaceType::Keirin, position, 10_000 + position).unwrap()
        })
        .collect();
    RaceEntity::create_without_id(
        create_keirin_race_data(number, name),
        None,
        None,
        players,
        update_date(),
    )
    .unwrap()
}

pub fn create_jra_race_data(number: u32) -> RaceData {
    RaceData::create(
        RaceType::Jra,
        "有馬記念",
        date_time(2024, 12, 22, 15, 40),
        "中山",
        "GⅠ",
        number,
        None,
    )
    .unwrap()
}

pub fn create_jra_race_entity(number: u32) -> RaceEntity {
    RaceEntity::create_without_id(
        create_jra_race_data(number),
        Some(HeldDayData::create(5, 8).unwrap()),
        Some(ConditionData::create("芝", 2500).unwrap()),
        Vec::new(),
        update_date(),
    )
    .unwrap()
}

pub fn create_boatrace_place_entity() -> PlaceEntity {
    let place_data: PlaceData = PlaceData::create(
        RaceType::Boatrace,
        date_time(2024, 6, 15, 0, 0),
        "住之江",
        Some("SG"),
    )
    .unwrap();
    PlaceEntity::create_without_id(place_data, None, update_date()).unwrap()
}
