use super::*;

use std::panic::catch_unwind;

use crate::session::SessionSlot;

struct Surface;

struct TestHost;

impl SurfaceHost for TestHost {
    type Container = Surface;
    type List = Surface;
    type Scroll = Surface;

    fn native_scroll_surface(_list: &Surface) -> Option<Rc<Surface>> {
        None
    }
}

fn config(rows: usize) -> ListConfig<u32> {
    ListConfig::new((0..rows as u32).collect(), |item: &u32, _| item.to_string())
}

#[test]
fn use_session_outside_provider_panics_every_time() {
    for _ in 0..3 {
        let result = catch_unwind(|| use_session::<u32, TestHost>());
        let payload = result.expect_err("use_session must fail without a provider");
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert!(message.contains("use_session"), "unexpected message: {message}");
    }
}

#[test]
fn try_use_session_reports_missing_provider() {
    let err = try_use_session::<u32, TestHost>().expect_err("no provider");
    assert_eq!(err, SessionError::OutsideProvider);
    assert_eq!(
        err.to_string(),
        "use_session must be called from within a SessionProvider"
    );
}

#[test]
fn provider_exposes_the_rendered_session() {
    let mut slot = SessionSlot::<u32, TestHost>::new();
    let seen = slot.provide(config(3), None, || {
        let session = use_session::<u32, TestHost>();
        session.reindex();
        session
    });

    let owned = slot.session().expect("session allocated").clone();
    assert!(seen.ptr_eq(&owned));
    assert_eq!(owned.index_of("2"), Some(2));
    assert!(try_use_session::<u32, TestHost>().is_err());
}

#[test]
fn descendants_see_same_bundle_across_renders() {
    let mut slot = SessionSlot::<u32, TestHost>::new();
    let first = slot.provide(config(1), None, use_session::<u32, TestHost>);
    let second = slot.provide(config(5), None, use_session::<u32, TestHost>);

    assert!(first.ptr_eq(&second));
    assert_eq!(first.config().with(|config| config.data.len()), 5);
}

#[test]
fn nested_provider_shadows_outer() {
    let mut outer = SessionSlot::<u32, TestHost>::new();
    let mut inner = SessionSlot::<u32, TestHost>::new();

    outer.provide(config(1), None, || {
        let outer_session = use_session::<u32, TestHost>();
        inner.provide(config(2), None, || {
            let inner_session = use_session::<u32, TestHost>();
            assert!(!inner_session.ptr_eq(&outer_session));
        });
        assert!(use_session::<u32, TestHost>().ptr_eq(&outer_session));
    });
}

#[test]
fn mismatched_session_type_is_reported() {
    let mut slot = SessionSlot::<u32, TestHost>::new();
    let session = slot.render(config(0), None);

    SessionProvider(&session, || {
        match try_use_session::<String, TestHost>() {
            Err(SessionError::TypeMismatch { expected }) => {
                assert!(expected.contains("ListSession"));
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }
    });
}
