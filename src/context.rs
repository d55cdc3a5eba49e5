//! Graphics context bootstrapping.
//!
//! Most platforms only hand out meaningful entry point addresses while a
//! context is current. When none is, the loader borrows a throwaway one for
//! the duration of a single reload.

use crate::error::{BootstrapError, Error, Result};
use std::fmt;

/// An API version, e.g. `2.0`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version {
    /// Major version.
    pub major: u8,

    /// Minor version.
    pub minor: u8,
}

impl Version {
    /// Constructor.
    pub const fn new(major: u8, minor: u8) -> Self {
        Version { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Platform hooks for creating a minimal context.
///
/// All calls for one reload happen on the thread that called
/// [`Loader::reload`].
///
/// [`Loader::reload`]: ../loader/struct.Loader.html#method.reload
pub trait ContextBootstrapper {
    /// Platform context handle.
    type Context;

    /// Platform drawable handle.
    type Drawable;

    /// Returns `true` if a context is current on the calling thread.
    fn has_current_context(&self) -> bool;

    /// Creates an offscreen context of at least `version` and a drawable to
    /// make it current against. Neither is made current.
    fn create_minimal_context(
        &self,
        version: Version,
    ) -> std::result::Result<(Self::Context, Self::Drawable), BootstrapError>;

    /// Makes `context` current against `drawable`, or releases it when
    /// `drawable` is `None`.
    fn make_current(
        &self,
        context: &mut Self::Context,
        drawable: Option<&Self::Drawable>,
    ) -> std::result::Result<(), BootstrapError>;

    /// Destroys a context. It is not current.
    fn dispose_context(&self, context: Self::Context);

    /// Destroys a drawable.
    fn dispose_drawable(&self, drawable: Self::Drawable);
}

impl<'a, T: ContextBootstrapper + ?Sized> ContextBootstrapper for &'a T {
    type Context = T::Context;
    type Drawable = T::Drawable;

    fn has_current_context(&self) -> bool {
        (**self).has_current_context()
    }

    fn create_minimal_context(
        &self,
        version: Version,
    ) -> std::result::Result<(Self::Context, Self::Drawable), BootstrapError> {
        (**self).create_minimal_context(version)
    }

    fn make_current(
        &self,
        context: &mut Self::Context,
        drawable: Option<&Self::Drawable>,
    ) -> std::result::Result<(), BootstrapError> {
        (**self).make_current(context, drawable)
    }

    fn dispose_context(&self, context: Self::Context) {
        (**self).dispose_context(context)
    }

    fn dispose_drawable(&self, drawable: Self::Drawable) {
        (**self).dispose_drawable(drawable)
    }
}

/// Bootstrapper for hosts that make their own context current before
/// loading. It never creates one.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentContext;

impl ContextBootstrapper for CurrentContext {
    type Context = ();
    type Drawable = ();

    fn has_current_context(&self) -> bool {
        true
    }

    fn create_minimal_context(
        &self,
        _: Version,
    ) -> std::result::Result<((), ()), BootstrapError> {
        Err("the host is expected to provide a current context".into())
    }

    fn make_current(&self, _: &mut (), _: Option<&()>) -> std::result::Result<(), BootstrapError> {
        Ok(())
    }

    fn dispose_context(&self, _: ()) {}

    fn dispose_drawable(&self, _: ()) {}
}

/// A context created and made current for one reload.
///
/// Dropping it releases the context, then destroys the context and its
/// drawable, on every exit path.
pub(crate) struct TransientContext<'a, B: ContextBootstrapper + ?Sized> {
    bootstrapper: &'a B,
    context: Option<B::Context>,
    drawable: Option<B::Drawable>,
}

impl<'a, B: ContextBootstrapper + ?Sized> TransientContext<'a, B> {
    /// Creates a context of `version` and makes it current.
    pub fn create(bootstrapper: &'a B, version: Version) -> Result<Self> {
        let (context, drawable) = bootstrapper
            .create_minimal_context(version)
            .map_err(Error::ContextUnavailable)?;
        let mut transient = TransientContext {
            bootstrapper,
            context: Some(context),
            drawable: Some(drawable),
        };
        transient.make_current()?;
        debug!("created transient {} context", version);
        Ok(transient)
    }

    fn make_current(&mut self) -> Result<()> {
        match (self.context.as_mut(), self.drawable.as_ref()) {
            (Some(context), Some(drawable)) => self
                .bootstrapper
                .make_current(context, Some(drawable))
                .map_err(Error::ContextUnavailable),
            _ => Ok(()),
        }
    }
}

impl<'a, B: ContextBootstrapper + ?Sized> Drop for TransientContext<'a, B> {
    fn drop(&mut self) {
        if let Some(mut context) = self.context.take() {
            if let Err(err) = self.bootstrapper.make_current(&mut context, None) {
                warn!("failed to release transient context: {}", err);
            }
            self.bootstrapper.dispose_context(context);
        }
        if let Some(drawable) = self.drawable.take() {
            self.bootstrapper.dispose_drawable(drawable);
        }
        debug!("disposed transient context");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
        fail_create: bool,
        fail_make_current: bool,
    }

    impl ContextBootstrapper for Recorder {
        type Context = u32;
        type Drawable = u32;

        fn has_current_context(&self) -> bool {
            false
        }

        fn create_minimal_context(
            &self,
            version: Version,
        ) -> std::result::Result<(u32, u32), BootstrapError> {
            if self.fail_create {
                return Err("no display".into());
            }
            self.events.borrow_mut().push(format!("create {}", version));
            Ok((1, 2))
        }

        fn make_current(
            &self,
            context: &mut u32,
            drawable: Option<&u32>,
        ) -> std::result::Result<(), BootstrapError> {
            self.events.borrow_mut().push(format!("current {} {:?}", context, drawable));
            if self.fail_make_current && drawable.is_some() {
                return Err("bad config".into());
            }
            Ok(())
        }

        fn dispose_context(&self, context: u32) {
            self.events.borrow_mut().push(format!("dispose context {}", context));
        }

        fn dispose_drawable(&self, drawable: u32) {
            self.events.borrow_mut().push(format!("dispose drawable {}", drawable));
        }
    }

    #[test]
    fn teardown_releases_then_disposes() {
        let recorder = Recorder::default();
        {
            let _transient = TransientContext::create(&recorder, Version::new(2, 0)).unwrap();
        }
        assert_eq!(
            *recorder.events.borrow(),
            vec![
                "create 2.0",
                "current 1 Some(2)",
                "current 1 None",
                "dispose context 1",
                "dispose drawable 2",
            ],
        );
    }

    #[test]
    fn make_current_failure_still_disposes() {
        let recorder = Recorder {
            fail_make_current: true,
            ..Recorder::default()
        };
        match TransientContext::create(&recorder, Version::new(2, 0)) {
            Err(Error::ContextUnavailable(_)) => {}
            _ => panic!("expected ContextUnavailable"),
        }
        let events = recorder.events.borrow();
        assert!(events.contains(&"dispose context 1".to_owned()));
        assert!(events.contains(&"dispose drawable 2".to_owned()));
    }

    #[test]
    fn create_failure_is_context_unavailable() {
        let recorder = Recorder {
            fail_create: true,
            ..Recorder::default()
        };
        match TransientContext::create(&recorder, Version::new(2, 0)) {
            Err(Error::ContextUnavailable(err)) => assert_eq!(err.to_string(), "no display"),
            _ => panic!("expected ContextUnavailable"),
        }
        assert!(recorder.events.borrow().is_empty());
    }

    #[test]
    fn current_context_never_creates() {
        assert!(CurrentContext.has_current_context());
        assert!(CurrentContext.create_minimal_context(Version::new(2, 0)).is_err());
    }
}
