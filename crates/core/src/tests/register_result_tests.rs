// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RegisterResult;
use race_schedule_persistence::RegisterOutcome;

#[test]
fn test_aggregate_of_successes_is_ok() {
    let outcomes: Vec<RegisterOutcome<u8>> = vec![
        RegisterOutcome::success(vec![1, 2]),
        RegisterOutcome::success(vec![3]),
    ];

    let result: RegisterResult = RegisterResult::aggregate(&outcomes);

    assert_eq!(result.code, 200);
    assert!(result.is_success());
    assert_eq!(result.message, "Data registered successfully");
    assert_eq!(result.success_data_count, 3);
    assert_eq!(result.failure_data_count, 0);
}

#[test]
fn test_aggregate_with_one_failure_is_error() {
    let outcomes: Vec<RegisterOutcome<u8>> = vec![
        RegisterOutcome::success(vec![1]),
        RegisterOutcome::failure("write failed", Vec::new(), vec![2, 3]),
        RegisterOutcome::success(vec![4]),
    ];

    let result: RegisterResult = RegisterResult::aggregate(&outcomes);

    assert_eq!(result.code, 500);
    assert_eq!(result.message, "Data registered successfully, write failed");
    assert_eq!(result.success_data_count, 2);
    assert_eq!(result.failure_data_count, 2);
}

#[test]
fn test_aggregate_of_nothing_is_ok_and_empty() {
    let result: RegisterResult = RegisterResult::aggregate::<u8>(&[]);

    assert!(result.is_success());
    assert!(result.message.is_empty());
    assert_eq!(result.success_data_count + result.failure_data_count, 0);
}
