// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use race_schedule_persistence::{RegisterOutcome, STATUS_ERROR, STATUS_OK};

/// Aggregate result of registering a batch across race types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterResult {
    /// `200` only if every race type's registration succeeded.
    pub code: u16,
    /// Distinct partition messages in first-seen order.
    pub message: String,
    pub success_data_count: usize,
    pub failure_data_count: usize,
}

impl RegisterResult {
    /// Combines per-race-type outcomes.
    #[must_use]
    pub fn aggregate<T>(outcomes: &[RegisterOutcome<T>]) -> Self {
        let mut messages: Vec<&str> = Vec::new();
        for outcome in outcomes {
            let message: &str = outcome.message.as_str();
            if !message.is_empty() && !messages.contains(&message) {
                messages.push(message);
            }
        }
        let code: u16 = if outcomes.iter().all(RegisterOutcome::is_success) {
            STATUS_OK
        } else {
            STATUS_ERROR
        };
        Self {
            code,
            message: messages.join(", "),
            success_data_count: outcomes.iter().map(|o| o.success_data.len()).sum(),
            failure_data_count: outcomes.iter().map(|o| o.failure_data.len()).sum(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == STATUS_OK
    }
}
