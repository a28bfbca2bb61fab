use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::{Product, Variant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    #[default]
    Idle,
    CreatingParent,
    ParentCreated,
    UpdatingChild,
    Completed,
    Failed,
}

impl RunPhase {
    /// Phases in which a new run may not start.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            RunPhase::CreatingParent | RunPhase::ParentCreated | RunPhase::UpdatingChild
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Completed | RunPhase::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::CreatingParent => "creating_parent",
            RunPhase::ParentCreated => "parent_created",
            RunPhase::UpdatingChild => "updating_child",
            RunPhase::Completed => "completed",
            RunPhase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of the latest run. Replaced wholesale when a new run starts.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PipelineRun {
    pub phase: RunPhase,
    pub history: Vec<RunPhase>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<RunPhase>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Product>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Variant>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
}

impl PipelineRun {
    pub(super) fn started() -> Self {
        Self {
            phase: RunPhase::CreatingParent,
            history: vec![RunPhase::Idle, RunPhase::CreatingParent],
            started_at: Some(now_ts()),
            ..Self::default()
        }
    }

    pub(super) fn advance(&mut self, phase: RunPhase) {
        self.phase = phase;
        self.history.push(phase);
    }

    pub(super) fn fail(&mut self, at: RunPhase, error: String) {
        self.failed_at = Some(at);
        self.error = Some(error);
        self.advance(RunPhase::Failed);
        self.finished_at = Some(now_ts());
    }

    pub(super) fn complete(&mut self) {
        self.advance(RunPhase::Completed);
        self.finished_at = Some(now_ts());
    }
}

fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}
