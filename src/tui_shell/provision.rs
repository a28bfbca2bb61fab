use std::sync::Arc;
use std::sync::mpsc::{self, TryRecvError};

use crate::pipeline::{PipelineError, ProvisionRequest};

use super::App;

impl App {
    /// Runs the pipeline off the UI thread so rendering continues while it waits.
    pub(super) fn start_provisioning(&mut self) {
        let Some(pipeline) = self.pipeline.clone() else {
            self.push_log("cannot provision: not connected");
            return;
        };
        if self.inflight.is_some() || pipeline.phase().is_active() {
            self.push_log("provisioning already in flight; ignored");
            return;
        }
        let request = match ProvisionRequest::demo() {
            Ok(r) => r,
            Err(err) => {
                self.push_log(format!("cannot build request: {:#}", err));
                return;
            }
        };
        self.push_log(format!(
            "provisioning {:?} at {}",
            request.title, request.price
        ));

        let (tx, rx) = mpsc::channel();
        let worker = Arc::clone(&pipeline);
        std::thread::spawn(move || {
            let _ = tx.send(worker.run(&request));
        });
        self.inflight = Some(rx);
    }

    pub(super) fn poll_provisioning(&mut self) {
        let Some(rx) = &self.inflight else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.inflight = None;
                self.push_log("provisioning worker exited without a result");
                return;
            }
        };
        self.inflight = None;

        match result {
            Ok(done) => {
                self.last_result = vec![
                    format!("product  {}  {}", done.parent.id.short(), done.parent.title),
                    format!("handle   {}", done.parent.handle),
                    format!("variant  {}  price {}", done.child.id.short(), done.child.price),
                ];
                self.push_log(format!("provisioned {}", done.parent.title));
            }
            Err(err) => {
                self.last_result = failure_lines(&err);
                self.push_log(format!("provisioning failed: {}", err));
            }
        }
    }
}

fn failure_lines(err: &PipelineError) -> Vec<String> {
    let mut lines = match err.phase() {
        Some(phase) => vec![format!("failed during {}", phase), err.to_string()],
        None => vec![err.to_string()],
    };
    match err {
        PipelineError::ChildUpdate { child_id, .. } => {
            lines.push(format!(
                "product kept; retry price update on variant {}",
                child_id.short()
            ));
        }
        PipelineError::ChildNotFound { .. } => {
            lines.push("product kept; it has no variant to price".to_string());
        }
        PipelineError::ParentCreation { .. } | PipelineError::RunInFlight => {
            lines.push("nothing was created".to_string());
        }
    }
    lines
}

#[cfg(test)]
#[path = "../tests/tui_shell/provision_tests.rs"]
mod tests;
