//! Advisor wire types

use serde::{Deserialize, Serialize};
use tp_core::traits::Id;
use tp_models::{Developer, Task};

/// Suggested assignee for a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub developer_id: Option<Id>,
    pub developer_name: String,
    pub estimated_days: f64,
    pub confidence: f64,
    pub reason: String,
}

impl Recommendation {
    /// Answer for a task id that is not among the supplied tasks
    pub fn task_not_found() -> Self {
        Self {
            developer_id: None,
            developer_name: "Task not found".to_string(),
            estimated_days: 0.0,
            confidence: 0.0,
            reason: "Invalid taskId supplied".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskyTask {
    pub id: Id,
    pub name: String,
    pub risk: Risk,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperEfficiency {
    pub id: Id,
    pub name: String,
    pub completed_tasks: u32,
    pub in_progress_tasks: u32,
    pub efficiency: f64,
    pub grade: String,
}

/// Project health report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Percent of work done
    pub completion: f64,
    pub risky_tasks: Vec<RiskyTask>,
    pub developer_efficiency: Vec<DeveloperEfficiency>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendRequest<'a> {
    pub developers: &'a [Developer],
    pub tasks: &'a [Task],
    pub current_task: &'a Task,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportRequest<'a> {
    pub developers: &'a [Developer],
    pub tasks: &'a [Task],
}
