use super::*;
use crate::picker::PickedImage;
use crate::test_support::customer;

fn picked(id: &str, title: &str) -> PickedResource {
    PickedResource {
        id: Some(ResourceId::new(id)),
        title: Some(title.to_string()),
        handle: Some(title.to_lowercase()),
        images: vec![PickedImage {
            original_src: Some(format!("https://cdn.example.com/{}.png", title)),
        }],
        image: None,
    }
}

#[test]
fn toggling_twice_restores_membership() {
    let mut sel = SelectionReconciler::new(CustomerKeyMode::Id);
    let a = customer("1", "Ada");
    let b = customer("2", "Grace");

    assert!(sel.toggle_customer(&a));
    assert!(sel.toggle_customer(&b));
    assert!(!sel.toggle_customer(&a));
    assert!(!sel.is_customer_selected(&a));
    assert!(sel.is_customer_selected(&b));

    assert!(!sel.toggle_customer(&b));
    let SelectionView::Customers(set) = sel.current_selection(ResourceKind::Customer) else {
        panic!("expected customer view");
    };
    assert!(set.is_empty());
}

#[test]
fn toggle_sequence_matches_parity_of_each_key() {
    let mut sel = SelectionReconciler::default();
    let keys = ["a", "b", "a", "c", "b", "a", "c", "c"];
    for k in keys {
        sel.toggle_customer_key(k);
    }

    let SelectionView::Customers(set) = sel.current_selection(ResourceKind::Customer) else {
        panic!("expected customer view");
    };
    for k in ["a", "b", "c"] {
        let odd = keys.iter().filter(|x| **x == k).count() % 2 == 1;
        assert_eq!(set.contains(k), odd, "key {}", k);
    }
}

#[test]
fn label_mode_collides_on_shared_display_names() {
    let first = customer("1", "Alex Rivera");
    let second = customer("2", "Alex Rivera");

    let mut by_label = SelectionReconciler::new(CustomerKeyMode::Label);
    by_label.toggle_customer(&first);
    assert!(by_label.is_customer_selected(&second));

    let mut by_id = SelectionReconciler::new(CustomerKeyMode::Id);
    by_id.toggle_customer(&first);
    assert!(!by_id.is_customer_selected(&second));
    let candidates = vec![first.clone(), second];
    assert_eq!(by_id.selected_customers(&candidates), vec![&first]);
}

#[test]
fn empty_or_cancelled_pick_leaves_state_alone() {
    let mut sel = SelectionReconciler::default();
    sel.pick(PickKind::Product, Some(&[picked("p1", "Board")]))
        .unwrap();

    assert_eq!(
        sel.pick(PickKind::Product, Some(&[])).unwrap(),
        PickOutcome::Unchanged
    );
    assert_eq!(sel.pick(PickKind::Product, None).unwrap(), PickOutcome::Unchanged);
    assert_eq!(sel.selected(PickKind::Product).unwrap().id.as_str(), "p1");

    assert_eq!(sel.pick(PickKind::Collection, None).unwrap(), PickOutcome::Unchanged);
    assert!(sel.selected(PickKind::Collection).is_none());
}

#[test]
fn second_pick_replaces_first() {
    let mut sel = SelectionReconciler::default();
    sel.pick(PickKind::Product, Some(&[picked("p1", "Board")]))
        .unwrap();
    sel.pick(
        PickKind::Product,
        Some(&[picked("p2", "Wax"), picked("p3", "Bindings")]),
    )
    .unwrap();

    let stored = sel.selected(PickKind::Product).unwrap();
    assert_eq!(stored.id.as_str(), "p2");
    assert_eq!(stored.display_label, "Wax");
    assert_eq!(stored.kind, ResourceKind::Product);
    assert!(sel.selected(PickKind::Collection).is_none());
}

#[test]
fn malformed_first_record_is_rejected_without_touching_state() {
    let mut sel = SelectionReconciler::default();
    sel.pick(PickKind::Collection, Some(&[picked("c1", "Winter")]))
        .unwrap();

    let no_id = PickedResource {
        title: Some("Summer".into()),
        ..PickedResource::default()
    };
    let err = sel
        .pick(PickKind::Collection, Some(&[no_id]))
        .unwrap_err();
    assert_eq!(
        err,
        InvalidPickResult::MissingId {
            kind: PickKind::Collection
        }
    );

    let blank_title = PickedResource {
        id: Some(ResourceId::new("c2")),
        title: Some("   ".into()),
        ..PickedResource::default()
    };
    let err = sel
        .pick(PickKind::Collection, Some(&[blank_title]))
        .unwrap_err();
    assert!(matches!(err, InvalidPickResult::MissingLabel { .. }));

    assert_eq!(sel.selected(PickKind::Collection).unwrap().id.as_str(), "c1");
}

#[test]
fn form_projects_selected_record() {
    let mut sel = SelectionReconciler::default();
    assert!(!sel.form(PickKind::Product).is_selected());

    sel.pick(PickKind::Product, Some(&[picked("p1", "Board")]))
        .unwrap();
    let form = sel.form(PickKind::Product);
    assert_eq!(form.id, Some(ResourceId::new("p1")));
    assert_eq!(form.title.as_deref(), Some("Board"));
    assert_eq!(form.handle.as_deref(), Some("board"));
    assert_eq!(
        form.image_url.as_deref(),
        Some("https://cdn.example.com/Board.png")
    );
}
