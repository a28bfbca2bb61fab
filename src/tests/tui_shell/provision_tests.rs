use std::time::{Duration, Instant};

use super::*;
use crate::admin::{AdminChannel, MutationOutcome};
use crate::model::StockroomConfig;
use crate::pipeline::{FailureCause, ProvisioningPipeline};
use crate::test_support::{FakeChannel, product, variant};

fn connected_app(fake: FakeChannel) -> (App, Arc<FakeChannel>) {
    let fake = Arc::new(fake);
    let channel: Arc<dyn AdminChannel> = fake.clone();
    let mut app = App::new(&StockroomConfig::default());
    app.pipeline = Some(Arc::new(ProvisioningPipeline::new(channel)));
    (app, fake)
}

fn wait_for_result(app: &mut App) {
    let start = Instant::now();
    while app.inflight.is_some() {
        assert!(start.elapsed() < Duration::from_secs(5), "worker never reported");
        std::thread::sleep(Duration::from_millis(5));
        app.poll_provisioning();
    }
}

#[test]
fn successful_run_reports_product_and_variant() {
    let (mut app, fake) = connected_app(FakeChannel::creating(product(
        "Green Snowboard",
        vec![variant("70", "0.00")],
    )));
    app.start_provisioning();
    assert!(app.inflight.is_some());
    wait_for_result(&mut app);

    assert_eq!(fake.creates(), 1);
    assert_eq!(fake.updates(), 1);
    assert!(app.last_result[0].contains("Green Snowboard"));
    assert!(app.last_result[2].starts_with("variant  70"));
}

#[test]
fn trigger_while_in_flight_is_ignored() {
    let (mut app, fake) = connected_app(FakeChannel::default());
    let (_tx, rx) = std::sync::mpsc::channel();
    app.inflight = Some(rx);

    app.start_provisioning();
    assert_eq!(
        app.log.last().map(String::as_str),
        Some("provisioning already in flight; ignored")
    );
    assert_eq!(fake.creates(), 0);
}

#[test]
fn trigger_without_connection_is_logged() {
    let mut app = App::new(&StockroomConfig::default());
    app.start_provisioning();
    assert!(app.inflight.is_none());
    assert_eq!(
        app.log.last().map(String::as_str),
        Some("cannot provision: not connected")
    );
}

#[test]
fn failed_update_says_product_was_kept() {
    let fake = FakeChannel::creating(product("Red Snowboard", vec![variant("11", "0.00")]));
    fake.push_update(Ok(MutationOutcome::rejected(vec![
        "input.price: Price is locked".to_string(),
    ])));
    let (mut app, _) = connected_app(fake);
    app.start_provisioning();
    wait_for_result(&mut app);

    assert_eq!(app.last_result[0], "failed during updating_child");
    assert_eq!(
        app.last_result.last().map(String::as_str),
        Some("product kept; retry price update on variant 11")
    );
}

#[test]
fn failure_lines_tell_kept_product_from_nothing_created() {
    let creation = PipelineError::ParentCreation {
        cause: FailureCause::Rejected(vec!["boom".to_string()]),
    };
    let lines = failure_lines(&creation);
    assert_eq!(lines[0], "failed during creating_parent");
    assert_eq!(lines.last().unwrap(), "nothing was created");

    let missing = PipelineError::ChildNotFound {
        parent: Box::new(product("Bare", Vec::new())),
    };
    assert_eq!(
        failure_lines(&missing).last().unwrap(),
        "product kept; it has no variant to price"
    );

    let lines = failure_lines(&PipelineError::RunInFlight);
    assert_eq!(lines[0], "a provisioning run is already in flight");
}
