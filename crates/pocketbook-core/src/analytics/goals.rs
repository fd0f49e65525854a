//! Savings-goal progress

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::SavingGoal;

use super::AnalysisContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Achieved,
    OnTrack,
    Overdue,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Achieved => "achieved",
            Self::OnTrack => "on_track",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub name: String,
    pub target: f64,
    pub current: f64,
    /// `max(target - current, 0)`
    pub remaining: f64,
    /// Saved share of the target, capped to 0..=100. A goal with no positive
    /// target counts as complete.
    pub percentage: f64,
    /// Days until the deadline; negative once it has passed
    pub days_left: i64,
    pub status: GoalStatus,
}

/// Progress of each goal as of the context's date, in goal order
pub fn goal_progress(goals: &[SavingGoal], ctx: &AnalysisContext<'_>) -> Vec<GoalProgress> {
    let today = ctx.today();

    goals
        .iter()
        .map(|goal| {
            let target = goal.target_amount;
            let current = goal.current_amount;
            let percentage = if target > 0.0 {
                (current / target * 100.0).clamp(0.0, 100.0)
            } else {
                100.0
            };
            let days_left = (goal.deadline - today).num_days();

            let status = if percentage >= 100.0 {
                GoalStatus::Achieved
            } else if days_left < 0 {
                GoalStatus::Overdue
            } else {
                GoalStatus::OnTrack
            };

            GoalProgress {
                name: goal.name.clone(),
                target,
                current,
                remaining: (target - current).max(0.0),
                percentage,
                days_left,
                status,
            }
        })
        .collect()
}
