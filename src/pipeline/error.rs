use crate::admin::TransportError;
use crate::model::{Product, ResourceId};

use super::RunPhase;

/// Why a phase produced no record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureCause {
    /// The channel failed before a response was available.
    Transport(TransportError),
    /// The server answered with errors instead of the record.
    Rejected(Vec<String>),
    /// The response carried neither the record nor any error.
    MissingRecord,
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureCause::Transport(err) => write!(f, "{}", err),
            FailureCause::Rejected(messages) => write!(f, "{}", messages.join("; ")),
            FailureCause::MissingRecord => f.write_str("response contained no record"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("a provisioning run is already in flight")]
    RunInFlight,

    #[error("product creation failed: {cause}")]
    ParentCreation { cause: FailureCause },

    #[error("product {} was created without a default variant", .parent.id)]
    ChildNotFound { parent: Box<Product> },

    #[error("product {} was created but updating variant {child_id} failed: {cause}", .parent.id)]
    ChildUpdate {
        parent: Box<Product>,
        child_id: ResourceId,
        cause: FailureCause,
    },
}

impl PipelineError {
    /// Phase the run had reached when it failed.
    ///
    /// `None` for `RunInFlight`: the rejected trigger never started a run.
    pub fn phase(&self) -> Option<RunPhase> {
        match self {
            PipelineError::RunInFlight => None,
            PipelineError::ParentCreation { .. } => Some(RunPhase::CreatingParent),
            PipelineError::ChildNotFound { .. } => Some(RunPhase::ParentCreated),
            PipelineError::ChildUpdate { .. } => Some(RunPhase::UpdatingChild),
        }
    }

    /// The product left behind when a later phase failed. Nothing is rolled back.
    pub fn parent(&self) -> Option<&Product> {
        match self {
            PipelineError::ChildNotFound { parent } | PipelineError::ChildUpdate { parent, .. } => {
                Some(&**parent)
            }
            PipelineError::RunInFlight | PipelineError::ParentCreation { .. } => None,
        }
    }

    pub fn parent_created(&self) -> bool {
        self.parent().is_some()
    }

    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            PipelineError::ParentCreation { cause } | PipelineError::ChildUpdate { cause, .. } => {
                Some(cause)
            }
            PipelineError::RunInFlight | PipelineError::ChildNotFound { .. } => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self.cause(), Some(FailureCause::Transport(_)))
    }
}
