use super::*;
use crate::test_support::{FakeChannel, customer};

#[test]
fn loads_once_and_caches() {
    let fake = FakeChannel::with_customers((0..12).map(|i| customer(&i.to_string(), "C")).collect());
    let list = CandidateList::new(10);
    assert!(!list.is_loaded());
    assert!(list.get().is_empty());

    assert_eq!(list.load(&fake).unwrap().len(), 10);
    assert_eq!(list.load(&fake).unwrap().len(), 10);
    assert_eq!(
        fake.customer_calls.load(std::sync::atomic::Ordering::SeqCst),
        1
    );
    assert!(list.is_loaded());
    assert_eq!(list.get()[0].id.short(), "0");
}

#[test]
fn configured_limit_above_ten_is_capped() {
    let fake = FakeChannel::with_customers((0..12).map(|i| customer(&i.to_string(), "C")).collect());
    let list = CandidateList::new(50);
    assert_eq!(list.limit(), 10);
    assert_eq!(list.load(&fake).unwrap().len(), 10);

    let small = CandidateList::new(3);
    assert_eq!(small.load(&fake).unwrap().len(), 3);
}

#[test]
fn configured_limit_from_config_file_is_capped() {
    let cfg: crate::model::StockroomConfig =
        serde_json::from_str(r#"{"version":1,"selection":{"candidate_limit":50}}"#).unwrap();
    let fake = FakeChannel::with_customers((0..12).map(|i| customer(&i.to_string(), "C")).collect());
    let list = CandidateList::new(cfg.selection.candidate_limit);
    assert_eq!(list.load(&fake).unwrap().len(), 10);
}
