// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{date_time, update_date};
use crate::{
    RaceData, RaceEntity, RaceType, SearchFilter, filter_by_grade, filter_by_location,
    filter_by_stage,
};

fn create_boatrace_race(location: &str, grade: &str, stage: &str, number: u32) -> RaceEntity {
    let race_data: RaceData = RaceData::create(
        RaceType::Boatrace,
        "テストレース",
        date_time(2024, 6, 15, 15, 0),
        location,
        grade,
        number,
        Some(stage),
    )
    .unwrap();
    RaceEntity::create_without_id(race_data, None, None, Vec::new(), update_date()).unwrap()
}

fn sample() -> Vec<RaceEntity> {
    vec![
        create_boatrace_race("住之江", "SG", "優勝戦", 12),
        create_boatrace_race("住之江", "SG", "予選", 1),
        create_boatrace_race("桐生", "GⅠ", "優勝戦", 12),
        create_boatrace_race("桐生", "一般", "予選", 3),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn test_empty_filter_is_a_no_op() {
    let entities: Vec<RaceEntity> = sample();

    assert_eq!(filter_by_grade(entities.clone(), &[]), entities);
    assert_eq!(filter_by_location(entities.clone(), &[]), entities);
    assert_eq!(filter_by_stage(entities.clone(), &[]), entities);
    assert!(SearchFilter::default().is_empty());
    assert_eq!(SearchFilter::default().apply(entities.clone()), entities);
}

#[test]
fn test_each_dimension_keeps_matching_entities() {
    let by_grade: Vec<RaceEntity> = filter_by_grade(sample(), &strings(&["SG"]));
    assert_eq!(by_grade.len(), 2);

    let by_location: Vec<RaceEntity> = filter_by_location(sample(), &strings(&["桐生"]));
    assert_eq!(by_location.len(), 2);

    let by_stage: Vec<RaceEntity> = filter_by_stage(sample(), &strings(&["優勝戦"]));
    assert_eq!(by_stage.len(), 2);
}

#[test]
fn test_filters_commute() {
    let grades: Vec<String> = strings(&["SG", "GⅠ"]);
    let stages: Vec<String> = strings(&["優勝戦"]);

    let grade_then_stage: Vec<RaceEntity> =
        filter_by_stage(filter_by_grade(sample(), &grades), &stages);
    let stage_then_grade: Vec<RaceEntity> =
        filter_by_grade(filter_by_stage(sample(), &stages), &grades);

    assert_eq!(grade_then_stage, stage_then_grade);
    assert_eq!(grade_then_stage.len(), 2);

    let combined: SearchFilter = SearchFilter {
        grades,
        locations: Vec::new(),
        stages,
    };
    assert_eq!(combined.apply(sample()), grade_then_stage);
}

#[test]
fn test_stage_filter_drops_entities_without_stage() {
    let jra: RaceEntity = crate::tests::helpers::create_jra_race_entity(11);

    let filtered: Vec<RaceEntity> = filter_by_stage(vec![jra.clone()], &strings(&["優勝戦"]));
    assert!(filtered.is_empty());

    let unfiltered: Vec<RaceEntity> = filter_by_stage(vec![jra.clone()], &[]);
    assert_eq!(unfiltered, vec![jra]);
}
