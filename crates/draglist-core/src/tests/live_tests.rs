use super::*;

#[test]
fn live_ref_clones_share_storage() {
    let cell = LiveRef::new(1);
    let cached = cell.clone();

    cell.set(5);
    assert_eq!(cached.get(), 5);

    cached.update(|value| *value += 1);
    assert_eq!(cell.get(), 6);
    assert!(cell.ptr_eq(&cached));
}

#[test]
fn separate_live_refs_are_distinct() {
    let a = LiveRef::new(0);
    let b = LiveRef::new(0);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn handle_does_not_keep_target_alive() {
    let handle = LiveHandle::<String>::new();
    assert!(!handle.is_populated());

    let target = Rc::new(String::from("scroll"));
    handle.attach(&target);
    assert_eq!(handle.current().as_deref().map(String::as_str), Some("scroll"));

    drop(target);
    assert!(handle.current().is_none());
}

#[test]
fn handle_clones_observe_attach_and_detach() {
    let handle = LiveHandle::<u32>::new();
    let frame_side = handle.clone();
    let target = Rc::new(7);

    handle.attach(&target);
    assert_eq!(frame_side.current().map(|v| *v), Some(7));

    frame_side.detach();
    assert!(!handle.is_populated());
    assert!(handle.ptr_eq(&frame_side));
}

#[test]
fn debug_does_not_panic_while_borrowed() {
    let cell = LiveRef::new(vec![1, 2]);
    let _guard = cell.borrow_mut();
    assert_eq!(format!("{cell:?}"), "LiveRef(<borrowed>)");
}
