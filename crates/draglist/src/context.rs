//! Publishing a [`ListSession`] to descendants.
//!
//! Passing the session explicitly is preferred. The provider exists for deep
//! row trees where threading it through every layer is impractical.

use std::any::Any;
use std::rc::Rc;

use draglist_core::{local, LiveHandle};
use thiserror::Error;

use crate::config::ListConfig;
use crate::session::{ListSession, SessionSlot};
use crate::surface::SurfaceHost;

/// Provider key for list sessions.
struct SessionLocal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("use_session must be called from within a SessionProvider")]
    OutsideProvider,
    #[error("enclosing SessionProvider publishes a different session type; expected {expected}")]
    TypeMismatch { expected: &'static str },
}

/// Run `content` with `session` available through [`use_session`].
#[allow(non_snake_case)]
pub fn SessionProvider<T: 'static, H: SurfaceHost, R>(
    session: &ListSession<T, H>,
    content: impl FnOnce() -> R,
) -> R {
    let erased: Rc<dyn Any> = Rc::new(session.clone());
    local::provide::<SessionLocal, R>(erased, content)
}

impl<T: 'static, H: SurfaceHost> SessionSlot<T, H> {
    /// Render with `config` and run `content` inside a provider for the session.
    pub fn provide<R>(
        &mut self,
        config: ListConfig<T>,
        forwarded_list: Option<&LiveHandle<H::List>>,
        content: impl FnOnce() -> R,
    ) -> R {
        let session = self.render(config, forwarded_list);
        SessionProvider(&session, content)
    }
}

/// The session published by the nearest enclosing provider.
pub fn try_use_session<T: 'static, H: SurfaceHost>() -> Result<ListSession<T, H>, SessionError> {
    let value = local::current::<SessionLocal>().ok_or(SessionError::OutsideProvider)?;
    value
        .downcast_ref::<ListSession<T, H>>()
        .cloned()
        .ok_or(SessionError::TypeMismatch {
            expected: std::any::type_name::<ListSession<T, H>>(),
        })
}

/// The session published by the nearest enclosing provider.
///
/// # Panics
/// Panics when called outside a [`SessionProvider`], or when the provider
/// publishes a session with different item or host types.
pub fn use_session<T: 'static, H: SurfaceHost>() -> ListSession<T, H> {
    match try_use_session() {
        Ok(session) => session,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
