#![allow(dead_code)]

use gles2_loader::{AddressResolver, BootstrapError, ContextBootstrapper, Version};
use std::collections::HashMap;
use std::os::raw::c_void;
use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// State of the fake windowing system.
#[derive(Debug, Default)]
pub struct Platform {
    /// The host has a context current.
    pub host_current: AtomicBool,

    /// A transient context is current.
    pub transient_current: AtomicBool,

    /// Refuse to create contexts.
    pub fail_create: AtomicBool,

    pub created: AtomicUsize,
    pub disposed_contexts: AtomicUsize,
    pub disposed_drawables: AtomicUsize,
    events: Mutex<Vec<String>>,
}

impl Platform {
    pub fn new() -> Arc<Self> {
        Arc::new(Platform::default())
    }

    pub fn with_host_context() -> Arc<Self> {
        let platform = Platform::default();
        platform.host_current.store(true, Ordering::SeqCst);
        Arc::new(platform)
    }

    pub fn is_current(&self) -> bool {
        self.host_current.load(Ordering::SeqCst) || self.transient_current.load(Ordering::SeqCst)
    }

    /// Contexts created but not yet disposed.
    pub fn live_contexts(&self) -> usize {
        self.created.load(Ordering::SeqCst) - self.disposed_contexts.load(Ordering::SeqCst)
    }

    /// Drawables created but not yet disposed.
    pub fn live_drawables(&self) -> usize {
        self.created.load(Ordering::SeqCst) - self.disposed_drawables.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Clone, Debug)]
pub struct Bootstrapper(pub Arc<Platform>);

impl ContextBootstrapper for Bootstrapper {
    type Context = usize;
    type Drawable = usize;

    fn has_current_context(&self) -> bool {
        self.0.is_current()
    }

    fn create_minimal_context(&self, version: Version) -> Result<(usize, usize), BootstrapError> {
        if self.0.fail_create.load(Ordering::SeqCst) {
            return Err("display unavailable".into());
        }
        let id = self.0.created.fetch_add(1, Ordering::SeqCst) + 1;
        self.0.record(format!("create {}", version));
        Ok((id, id))
    }

    fn make_current(&self, context: &mut usize, drawable: Option<&usize>) -> Result<(), BootstrapError> {
        self.0.record(format!("current {} {:?}", context, drawable));
        self.0.transient_current.store(drawable.is_some(), Ordering::SeqCst);
        Ok(())
    }

    fn dispose_context(&self, context: usize) {
        self.0.record(format!("dispose context {}", context));
        self.0.disposed_contexts.fetch_add(1, Ordering::SeqCst);
    }

    fn dispose_drawable(&self, drawable: usize) {
        self.0.record(format!("dispose drawable {}", drawable));
        self.0.disposed_drawables.fetch_add(1, Ordering::SeqCst);
    }
}

/// A fake driver answering `GetProcAddress` queries.
#[derive(Debug)]
pub struct Driver {
    platform: Arc<Platform>,
    exports: HashMap<&'static str, isize>,
    delay: Option<(&'static str, Duration)>,
    panic_on: Option<&'static str>,
    in_flight: AtomicUsize,

    /// Largest number of queries seen running at once.
    pub max_in_flight: AtomicUsize,

    /// Total queries.
    pub calls: AtomicUsize,

    /// Queries made while no context was current.
    pub calls_without_context: AtomicUsize,
}

impl Driver {
    pub fn new(platform: &Arc<Platform>) -> Self {
        Driver {
            platform: platform.clone(),
            exports: HashMap::new(),
            delay: None,
            panic_on: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            calls_without_context: AtomicUsize::new(0),
        }
    }

    /// Answers `value` for `name`. Everything else answers null.
    pub fn export(mut self, name: &'static str, value: isize) -> Self {
        self.exports.insert(name, value);
        self
    }

    /// Sleeps while answering `name`.
    pub fn delay(mut self, name: &'static str, duration: Duration) -> Self {
        self.delay = Some((name, duration));
        self
    }

    /// Panics while answering `name`.
    pub fn panic_on(mut self, name: &'static str) -> Self {
        self.panic_on = Some(name);
        self
    }

    pub fn query(&self, name: &str) -> *const c_void {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.platform.is_current() {
            self.calls_without_context.fetch_add(1, Ordering::SeqCst);
        }
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some((slow, duration)) = self.delay {
            if slow == name {
                thread::sleep(duration);
            }
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.panic_on == Some(name) {
            panic!("driver crashed looking up {}", name);
        }
        self.exports.get(name).map_or(ptr::null(), |&value| value as *const c_void)
    }

    /// Wraps the driver in a resolver closure.
    pub fn into_resolver(self) -> (Arc<Driver>, impl AddressResolver + Send + Sync) {
        let driver = Arc::new(self);
        let handle = driver.clone();
        (driver, move |name: &str| handle.query(name))
    }
}
