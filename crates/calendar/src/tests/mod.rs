// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{CalendarConfig, GatewayCalendarRepository, InMemoryCalendarGateway};
use chrono::{NaiveDate, NaiveDateTime};
use race_schedule_domain::{
    CalendarData, ConditionData, HeldDayData, RaceData, RaceEntity, RacePlayerData, RaceType,
};
use std::sync::Arc;

pub const KEIRIN_CALENDAR: &str = "keirin@group.calendar.google.com";
pub const JRA_CALENDAR: &str = "jra@group.calendar.google.com";

pub fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn create_test_update_date() -> NaiveDateTime {
    date_time(2024, 1, 1, 12, 0)
}

pub fn create_test_keirin_race(number: u32, grade: &str) -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Keirin,
        "立川記念",
        date_time(2024, 1, 1, 15, 40),
        "立川",
        grade,
        number,
        Some("S級決勝"),
    )
    .unwrap();
    let players: Vec<RacePlayerData> =
        vec![RacePlayerData::create(RaceType::Keirin, 1, 15_001).unwrap()];
    RaceEntity::create_without_id(race_data, None, None, players, create_test_update_date())
        .unwrap()
}

pub fn create_test_jra_race() -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Jra,
        "有馬記念",
        date_time(2024, 12, 22, 15, 40),
        "中山",
        "GⅠ",
        11,
        None,
    )
    .unwrap();
    RaceEntity::create_without_id(
        race_data,
        Some(HeldDayData::create(5, 8).unwrap()),
        Some(ConditionData::create("芝", 2500).unwrap()),
        Vec::new(),
        create_test_update_date(),
    )
    .unwrap()
}

pub fn create_test_calendar_data(id: &str, race_type: RaceType) -> CalendarData {
    CalendarData::create(
        Some(id.to_string()),
        race_type,
        None,
        None,
        None,
        None,
        None,
    )
}

pub fn create_test_repository() -> (Arc<InMemoryCalendarGateway>, GatewayCalendarRepository) {
    let gateway: Arc<InMemoryCalendarGateway> = Arc::new(InMemoryCalendarGateway::new());
    let config: CalendarConfig = CalendarConfig::new()
        .with_calendar(RaceType::Keirin, KEIRIN_CALENDAR)
        .with_calendar(RaceType::Jra, JRA_CALENDAR);
    let repository: GatewayCalendarRepository =
        GatewayCalendarRepository::new(gateway.clone(), config);
    (gateway, repository)
}
