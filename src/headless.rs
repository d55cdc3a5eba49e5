//! Surfaceless EGL bootstrapping through `glutin`.
//!
//! Useful for tools and tests that need entry points without ever opening a
//! window: the display is created on an EGL device and transient contexts
//! render to a 1x1 pbuffer.

use crate::context::{ContextBootstrapper, Version};
use crate::error::BootstrapError;
use crate::symbol::{Address, EntryPointFn};
use glutin::api::egl;
use glutin::config::{Api, ConfigSurfaceTypes, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder};
use glutin::prelude::*;
use glutin::surface::{PbufferSurface, SurfaceAttributesBuilder};
use std::ffi::CString;
use std::num::NonZeroU32;
use std::os::raw::c_void;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{fmt, mem, ptr};

/// A context owned by [`Headless`].
pub enum HeadlessContext {
    /// Created, or released after use.
    NotCurrent(egl::context::NotCurrentContext),

    /// Current on the creating thread.
    Current(egl::context::PossiblyCurrentContext),

    /// Lost to a failed transition.
    Lost,
}

impl fmt::Debug for HeadlessContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            HeadlessContext::NotCurrent(_) => "NotCurrent",
            HeadlessContext::Current(_) => "Current",
            HeadlessContext::Lost => "Lost",
        })
    }
}

/// `eglGetCurrentContext`.
type GetCurrentContext = unsafe extern "system" fn() -> *mut c_void;

/// Returns `true` if the host claims a current context or EGL reports one
/// on the calling thread.
fn context_is_current(host_current: bool, get_current_context: Option<GetCurrentContext>) -> bool {
    host_current || get_current_context.map_or(false, |f| unsafe { !f().is_null() })
}

/// EGL display on the first usable device.
pub struct Headless {
    display: egl::display::Display,
    get_current_context: Option<GetCurrentContext>,
    host_current: AtomicBool,
}

impl Headless {
    /// Opens a display on the first EGL device that accepts one.
    pub fn new() -> Result<Self, BootstrapError> {
        let mut last_error: Option<BootstrapError> = None;
        for device in egl::device::Device::query_devices()? {
            match unsafe { egl::display::Display::with_device(&device, None) } {
                Ok(display) => {
                    debug!("using EGL device {:?}", device.name());
                    let mut headless = Headless {
                        display,
                        get_current_context: None,
                        host_current: AtomicBool::new(false),
                    };
                    headless.get_current_context = Address::new(headless.proc_address("eglGetCurrentContext"))
                        .map(|address| unsafe { GetCurrentContext::from_address(address) });
                    if headless.get_current_context.is_none() {
                        warn!("eglGetCurrentContext unavailable, relying on set_host_current");
                    }
                    return Ok(headless);
                }
                Err(err) => last_error = Some(err.into()),
            }
        }
        Err(last_error.unwrap_or_else(|| "no EGL devices".into()))
    }

    /// Forces reloads to treat a host context as current, for drivers where
    /// `eglGetCurrentContext` cannot be queried.
    pub fn set_host_current(&self, current: bool) {
        self.host_current.store(current, Ordering::SeqCst);
    }

    /// Looks up `name` through `eglGetProcAddress`.
    pub fn proc_address(&self, name: &str) -> *const c_void {
        match CString::new(name) {
            Ok(symbol) => self.display.get_proc_address(symbol.as_c_str()),
            Err(_) => ptr::null(),
        }
    }
}

impl fmt::Debug for Headless {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Headless")
            .field("host_current", &self.host_current.load(Ordering::SeqCst))
            .finish()
    }
}

impl ContextBootstrapper for Headless {
    type Context = HeadlessContext;
    type Drawable = egl::surface::Surface<PbufferSurface>;

    fn has_current_context(&self) -> bool {
        context_is_current(self.host_current.load(Ordering::SeqCst), self.get_current_context)
    }

    fn create_minimal_context(
        &self,
        version: Version,
    ) -> Result<(Self::Context, Self::Drawable), BootstrapError> {
        let template = ConfigTemplateBuilder::new()
            .with_surface_type(ConfigSurfaceTypes::PBUFFER)
            .with_api(Api::GLES2)
            .build();
        let config = unsafe { self.display.find_configs(template)? }
            .next()
            .ok_or("no pbuffer-capable GLES2 config")?;
        let attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(glutin::context::Version::new(
                version.major,
                version.minor,
            ))))
            .build(None);
        let context = unsafe { self.display.create_context(&config, &attributes)? };
        let one = NonZeroU32::MIN;
        let surface_attributes = SurfaceAttributesBuilder::<PbufferSurface>::new().build(one, one);
        let surface = unsafe { self.display.create_pbuffer_surface(&config, &surface_attributes)? };
        Ok((HeadlessContext::NotCurrent(context), surface))
    }

    fn make_current(
        &self,
        context: &mut Self::Context,
        drawable: Option<&Self::Drawable>,
    ) -> Result<(), BootstrapError> {
        *context = match (mem::replace(context, HeadlessContext::Lost), drawable) {
            (HeadlessContext::NotCurrent(ctx), Some(surface)) => {
                HeadlessContext::Current(ctx.make_current(surface)?)
            }
            (HeadlessContext::Current(ctx), Some(surface)) => {
                ctx.make_current(surface)?;
                HeadlessContext::Current(ctx)
            }
            (HeadlessContext::Current(ctx), None) => {
                HeadlessContext::NotCurrent(ctx.make_not_current()?)
            }
            (state @ HeadlessContext::NotCurrent(_), None) => state,
            (HeadlessContext::Lost, _) => return Err("context was lost".into()),
        };
        Ok(())
    }

    fn dispose_context(&self, context: Self::Context) {
        drop(context);
    }

    fn dispose_drawable(&self, drawable: Self::Drawable) {
        drop(drawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "system" fn no_context() -> *mut c_void {
        ptr::null_mut()
    }

    unsafe extern "system" fn some_context() -> *mut c_void {
        0x10 as *mut c_void
    }

    #[test]
    fn egl_reports_the_host_context() {
        assert!(context_is_current(false, Some(some_context as GetCurrentContext)));
        assert!(!context_is_current(false, Some(no_context as GetCurrentContext)));
    }

    #[test]
    fn host_flag_overrides_egl() {
        assert!(context_is_current(true, Some(no_context as GetCurrentContext)));
        assert!(context_is_current(true, None));
        assert!(!context_is_current(false, None));
    }
}
