//! Two-phase provisioning: create a product, then update the default variant
//! whose id is only known from the creation response.
//!
//! The phases are strictly sequential and there is no rollback: when the
//! variant update fails the product stays created, and the error carries it.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::{info, warn};

use crate::admin::AdminChannel;
use crate::model::{Product, Variant, VariantUpdateInput};

mod error;
mod request;
mod run;

pub use self::error::{FailureCause, PipelineError};
pub use self::request::{ProvisionRequest, request_or_demo};
pub use self::run::{PipelineRun, RunPhase};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Provisioned {
    pub parent: Product,
    pub child: Variant,
}

pub struct ProvisioningPipeline<C> {
    channel: C,
    run: Mutex<PipelineRun>,
}

impl<C: AdminChannel> ProvisioningPipeline<C> {
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            run: Mutex::new(PipelineRun::default()),
        }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn phase(&self) -> RunPhase {
        self.lock().phase
    }

    pub fn last_run(&self) -> PipelineRun {
        self.lock().clone()
    }

    /// Executes one run. Fails fast with `RunInFlight` if another run is active.
    pub fn run(&self, request: &ProvisionRequest) -> Result<Provisioned, PipelineError> {
        {
            let mut run = self.lock();
            if run.phase.is_active() {
                warn!(phase = %run.phase, "provisioning rejected: run in flight");
                return Err(PipelineError::RunInFlight);
            }
            *run = PipelineRun::started();
        }
        info!(title = %request.title, price = %request.price, "provisioning started");

        let result = self.execute(request);

        let mut run = self.lock();
        match &result {
            Ok(done) => {
                run.child = Some(done.child.clone());
                run.complete();
                info!(product = %done.parent.id, variant = %done.child.id, "provisioning completed");
            }
            Err(err) => {
                let at = err.phase().unwrap_or(run.phase);
                run.fail(at, err.to_string());
                warn!(phase = %at, error = %err, "provisioning failed");
            }
        }
        result
    }

    fn execute(&self, request: &ProvisionRequest) -> Result<Provisioned, PipelineError> {
        let outcome = self
            .channel
            .create_product(&request.product_input())
            .map_err(|err| PipelineError::ParentCreation {
                cause: FailureCause::Transport(err),
            })?;
        let parent = match outcome.record {
            Some(product) => product,
            None => {
                return Err(PipelineError::ParentCreation {
                    cause: cause_from(outcome.errors),
                });
            }
        };
        self.transition(RunPhase::ParentCreated, Some(&parent));

        let Some(child_id) = parent.default_variant().map(|v| v.id.clone()) else {
            return Err(PipelineError::ChildNotFound {
                parent: Box::new(parent),
            });
        };

        self.transition(RunPhase::UpdatingChild, None);
        let input = VariantUpdateInput {
            id: child_id.clone(),
            price: request.price,
        };
        let outcome = match self.channel.update_variant(&input) {
            Ok(outcome) => outcome,
            Err(err) => {
                return Err(PipelineError::ChildUpdate {
                    parent: Box::new(parent),
                    child_id,
                    cause: FailureCause::Transport(err),
                });
            }
        };
        match outcome.record {
            Some(child) => Ok(Provisioned { parent, child }),
            None => Err(PipelineError::ChildUpdate {
                parent: Box::new(parent),
                child_id,
                cause: cause_from(outcome.errors),
            }),
        }
    }

    fn transition(&self, phase: RunPhase, parent: Option<&Product>) {
        let mut run = self.lock();
        run.advance(phase);
        if let Some(parent) = parent {
            run.parent = Some(parent.clone());
        }
        info!(%phase, "provisioning phase");
    }

    fn lock(&self) -> MutexGuard<'_, PipelineRun> {
        self.run.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn cause_from(errors: Vec<String>) -> FailureCause {
    if errors.is_empty() {
        FailureCause::MissingRecord
    } else {
        FailureCause::Rejected(errors)
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
