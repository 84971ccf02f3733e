// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod codec_tests;
mod gateway_tests;
mod record_tests;

use chrono::{NaiveDate, NaiveDateTime};
use race_schedule_domain::{
    ConditionData, HeldDayData, PlaceData, PlaceEntity, RaceData, RaceEntity, RacePlayerData,
    RaceType,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

pub fn create_test_update_date() -> NaiveDateTime {
    date_time(2024, 1, 1, 12, 0)
}

pub fn create_test_keirin_race(day: u32, number: u32, name: &str) -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Keirin,
        name,
        date_time(2024, 1, day, 15, 40),
        "立川",
        "GⅢ",
        number,
        Some("S級決勝"),
    )
    .unwrap();
    let players: Vec<RacePlayerData> = (1..=9)
        .map(|position| {
            RacePlayerData::create(RaceType::Keirin, position, 15_000 + position).unwrap()
        })
        .collect();
    RaceEntity::create_without_id(race_data, None, None, players, create_test_update_date())
        .unwrap()
}

pub fn create_test_jra_race(number: u32) -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Jra,
        "日本ダービー",
        date_time(2024, 5, 26, 15, 40),
        "東京",
        "GⅠ",
        number,
        None,
    )
    .unwrap();
    RaceEntity::create_without_id(
        race_data,
        Some(HeldDayData::create(2, 12).unwrap()),
        Some(ConditionData::create("芝", 2400).unwrap()),
        Vec::new(),
        create_test_update_date(),
    )
    .unwrap()
}

pub fn create_test_boatrace_place(day: u32) -> PlaceEntity {
    let place_data: PlaceData = PlaceData::create(
        RaceType::Boatrace,
        date_time(2024, 6, day, 0, 0),
        "住之江",
        Some("SG"),
    )
    .unwrap();
    PlaceEntity::create_without_id(place_data, None, create_test_update_date()).unwrap()
}

pub fn create_test_jra_place() -> PlaceEntity {
    let place_data: PlaceData =
        PlaceData::create(RaceType::Jra, date_time(2024, 5, 26, 0, 0), "東京", None).unwrap();
    PlaceEntity::create_without_id(
        place_data,
        Some(HeldDayData::create(2, 12).unwrap()),
        create_test_update_date(),
    )
    .unwrap()
}
