// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar event payloads and their conversion to and from races.
//!
//! Event ids are race ids, so re-syncing a race always targets the same
//! event. Start and end times are written with the `+09:00` offset.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Asia::Tokyo;
use chrono_tz::Tz;
use race_schedule_domain::{
    CalendarData, GradeTier, RaceData, RaceEntity, RaceType, format_date_time, pad_digits,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TIME_ZONE: &str = "Asia/Tokyo";

/// Every race event lasts this long; race duration is not modelled.
pub const EVENT_DURATION_MINUTES: i64 = 10;

/// Start or end of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Application-private key/value pairs stored on an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedProperties {
    #[serde(default)]
    pub private: BTreeMap<String, String>,
}

/// A calendar event as sent to and received from the calendar API.
///
/// Every field is optional because the API omits empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<ExtendedProperties>,
}

/// Current Japan local wall-clock time.
#[must_use]
pub fn japan_now() -> NaiveDateTime {
    Utc::now().with_timezone(&Tokyo).naive_local()
}

/// Interprets a Japan local wall-clock time.
#[must_use]
pub fn to_japan_time(date_time: NaiveDateTime) -> DateTime<Tz> {
    Tokyo
        .from_local_datetime(&date_time)
        .earliest()
        .unwrap_or_else(|| Tokyo.from_utc_datetime(&date_time))
}

fn event_time(date_time: DateTime<Tz>) -> EventDateTime {
    EventDateTime {
        date_time: Some(date_time.to_rfc3339()),
        time_zone: Some(String::from(TIME_ZONE)),
    }
}

fn parse_event_time(value: Option<&EventDateTime>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| v.date_time.as_deref())
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|v| v.with_timezone(&Utc))
}

/// Calendar colour of a race, from its grade tier.
#[must_use]
pub fn color_id(race_data: &RaceData) -> &'static str {
    match race_data.grade().tier() {
        GradeTier::Top => "9",
        GradeTier::Second => "3",
        GradeTier::Third => "10",
        GradeTier::Listed => "5",
        GradeTier::Other => "8",
    }
}

/// Suffix appended to the venue name in the event location.
#[must_use]
pub const fn location_suffix(race_type: RaceType) -> &'static str {
    match race_type {
        RaceType::Jra | RaceType::Nar => "競馬場",
        RaceType::Overseas => "",
        RaceType::Keirin => "競輪場",
        RaceType::Autorace => "オートレース場",
        RaceType::Boatrace => "ボートレース場",
    }
}

fn autorace_slug(location: &str) -> Option<&'static str> {
    match location {
        "川口" => Some("kawaguchi"),
        "伊勢崎" => Some("isesaki"),
        "浜松" => Some("hamamatsu"),
        "飯塚" => Some("iizuka"),
        "山陽" => Some("sanyou"),
        _ => None,
    }
}

/// External race information link, when the race type has one.
#[must_use]
pub fn race_link(entity: &RaceEntity) -> Option<String> {
    let race_data: &RaceData = entity.race_data();
    let date_time: NaiveDateTime = race_data.date_time();
    let code: &str = race_data.location().code();
    let number: u32 = u32::from(race_data.number().value());
    let year: String = date_time.format("%Y").to_string();
    let ymd: String = date_time.format("%Y%m%d").to_string();

    match entity.race_type() {
        RaceType::Jra => entity.held_day_data().map(|held_day| {
            format!(
                "https://race.netkeiba.com/race/shutuba.html?race_id={year}{code}{}{}{}",
                pad_digits(u32::from(held_day.held_times().value()), 2),
                pad_digits(u32::from(held_day.held_day_times().value()), 2),
                pad_digits(number, 2),
            )
        }),
        RaceType::Nar => Some(format!(
            "https://nar.netkeiba.com/race/shutuba.html?race_id={year}{code}{}{}{}",
            pad_digits(date_time.month(), 2),
            pad_digits(date_time.day(), 2),
            pad_digits(number, 2),
        )),
        RaceType::Overseas => None,
        RaceType::Keirin => Some(format!(
            "https://keirin.netkeiba.com/race/entry/?race_id={ymd}{code}{}",
            pad_digits(number, 2),
        )),
        RaceType::Autorace => autorace_slug(race_data.location().name()).map(|slug| {
            format!(
                "https://autorace.jp/race_info/Program/{slug}/{}_{number}",
                date_time.format("%Y-%m-%d"),
            )
        }),
        RaceType::Boatrace => Some(format!(
            "https://www.boatrace.jp/owpc/pc/race/racelist?rno={number}&jcd={code}&hd={ymd}"
        )),
    }
}

fn summary(race_data: &RaceData) -> String {
    race_data.stage().map_or_else(
        || race_data.name().to_string(),
        |stage| format!("{} {}", race_data.name(), stage.value()),
    )
}

/// Builds the event description shown in the calendar.
#[must_use]
pub fn description(entity: &RaceEntity, update_date: NaiveDateTime) -> String {
    let race_data: &RaceData = entity.race_data();
    let mut lines: Vec<String> = vec![format!(
        "発走: {}",
        race_data.date_time().format("%H:%M")
    )];
    if let Some(condition) = entity.condition_data() {
        lines.push(format!(
            "{}{}m",
            condition.surface_type(),
            condition.distance().value()
        ));
    }
    if let Some(stage) = race_data.stage() {
        lines.push(stage.value().to_string());
    }
    if let Some(link) = race_link(entity) {
        lines.push(format!("<a href=\"{link}\">レース情報</a>"));
    }
    lines.push(format!(
        "更新日時: {}",
        update_date.format("%Y/%m/%d %H:%M:%S")
    ));
    lines.join("\n")
}

fn private_properties(entity: &RaceEntity) -> BTreeMap<String, String> {
    let race_data: &RaceData = entity.race_data();
    let mut properties: BTreeMap<String, String> = BTreeMap::new();
    let mut put = |key: &str, value: String| {
        properties.insert(key.to_string(), value);
    };
    put("raceId", entity.id().as_str().to_string());
    put("raceType", entity.race_type().as_str().to_string());
    put("name", race_data.name().to_string());
    put("dateTime", format_date_time(&race_data.date_time()));
    put("location", race_data.location().name().to_string());
    put("grade", race_data.grade().value().to_string());
    put("number", race_data.number().value().to_string());
    put("updateDate", format_date_time(&entity.update_date()));
    if let Some(stage) = race_data.stage() {
        put("stage", stage.value().to_string());
    }
    if let Some(condition) = entity.condition_data() {
        put("surfaceType", condition.surface_type().as_str().to_string());
        put("distance", condition.distance().value().to_string());
    }
    if let Some(held_day) = entity.held_day_data() {
        put("heldTimes", held_day.held_times().value().to_string());
        put(
            "heldDayTimes",
            held_day.held_day_times().value().to_string(),
        );
    }
    properties
}

impl CalendarEvent {
    /// Builds the event of a race. `update_date` is the as-of time shown in
    /// the description.
    #[must_use]
    pub fn from_race_entity(entity: &RaceEntity, update_date: NaiveDateTime) -> Self {
        let race_data: &RaceData = entity.race_data();
        let start: DateTime<Tz> = to_japan_time(race_data.date_time());
        Self {
            id: Some(entity.id().as_str().to_string()),
            summary: Some(summary(race_data)),
            location: Some(format!(
                "{}{}",
                race_data.location().name(),
                location_suffix(entity.race_type())
            )),
            start: Some(event_time(start)),
            end: Some(event_time(start + TimeDelta::minutes(EVENT_DURATION_MINUTES))),
            color_id: Some(color_id(race_data).to_string()),
            description: Some(description(entity, update_date)),
            extended_properties: Some(ExtendedProperties {
                private: private_properties(entity),
            }),
        }
    }

    /// Projects the event for callers, defaulting missing fields.
    #[must_use]
    pub fn to_calendar_data(&self, race_type: RaceType) -> CalendarData {
        CalendarData::create(
            self.id.clone(),
            race_type,
            self.summary.clone(),
            parse_event_time(self.start.as_ref()),
            parse_event_time(self.end.as_ref()),
            self.location.clone(),
            self.description.clone(),
        )
    }

    /// Returns the event id if it is present and non-empty.
    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Start instant, if present and parseable.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        parse_event_time(self.start.as_ref())
    }
}
