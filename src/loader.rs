//! Entry point resolution.

use crate::context::{ContextBootstrapper, TransientContext, Version};
use crate::error::{Error, Result};
use crate::fallback::{self, CoreLookup};
use crate::queue::Queue;
use crate::resolver::{AddressResolver, SentinelRange};
use crate::symbol::{Address, SymbolDescriptor};
use crate::table::{BindingTable, Origin, Resolved};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Loader settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Resolver return values that mean "not found".
    pub sentinel: SentinelRange,

    /// Prefix stripped from symbol names to find core implementations.
    pub fallback_prefix: &'static str,

    /// Version requested when a transient context must be created.
    pub transient_version: Version,
}

impl Config {
    /// Sets the sentinel range.
    pub fn with_sentinel(mut self, sentinel: SentinelRange) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Sets the fallback prefix.
    pub fn with_fallback_prefix(mut self, prefix: &'static str) -> Self {
        self.fallback_prefix = prefix;
        self
    }

    /// Sets the transient context version.
    pub fn with_transient_version(mut self, version: Version) -> Self {
        self.transient_version = version;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sentinel: SentinelRange::PERMISSIVE,
            fallback_prefix: "gl",
            transient_version: Version::new(2, 0),
        }
    }
}

/// Summary of one completed reload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReloadReport {
    /// Generation of the table this reload published.
    pub generation: u64,

    /// Slots bound to resolver addresses.
    pub native: usize,

    /// Slots bound to core implementations.
    pub fallback: usize,

    /// Slots left unbound.
    pub unresolved: usize,

    /// Whether the reload had to create its own context.
    pub transient_context: bool,
}

/// Fate of one symbol in one reload.
#[derive(Clone, Copy, Debug)]
enum Outcome {
    Native(Address),
    Fallback(Address),
    Unresolved,
}

/// Resolves and binds every declared entry point.
///
/// Lifecycle: construct once, [`reload`] one or more times, drop. Each
/// reload builds a complete new [`BindingTable`] and publishes it in one
/// step, so readers see either the previous table or the new one. Reloads
/// are serialised; a reload briefly makes its own context current on the
/// calling thread when no context is.
///
/// [`reload`]: #method.reload
/// [`BindingTable`]: ../table/struct.BindingTable.html
pub struct Loader<R, B, C> {
    resolver: R,
    bootstrapper: B,
    core: C,
    config: Config,

    /// Declared slots, all unbound.
    template: BindingTable,

    /// Last published table.
    published: RwLock<Option<Arc<BindingTable>>>,

    /// Serialises reloads; holds the last generation.
    reload_lock: Mutex<u64>,

    /// Completed reloads, oldest first.
    reports: Queue<ReloadReport>,
}

impl<R, B, C> Loader<R, B, C>
    where R: AddressResolver, B: ContextBootstrapper, C: CoreLookup
{
    /// Declares `catalogue`. Nothing is resolved until [`reload`].
    ///
    /// [`reload`]: #method.reload
    pub fn new(
        catalogue: &'static [SymbolDescriptor],
        resolver: R,
        bootstrapper: B,
        core: C,
    ) -> Result<Self> {
        Ok(Loader {
            resolver,
            bootstrapper,
            core,
            config: Config::default(),
            template: BindingTable::with_catalogue(catalogue)?,
            published: RwLock::new(None),
            reload_lock: Mutex::new(0),
            reports: Queue::new(),
        })
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves every declared entry point from scratch and publishes the
    /// result.
    ///
    /// Fails only if no context could be made current or a core
    /// implementation has the wrong type; the previously published table is
    /// then left in place.
    pub fn reload(&self) -> Result<ReloadReport> {
        let mut generation = self.lock();
        self.reload_locked(&mut generation).map(|(report, _)| report)
    }

    /// Returns the published table, reloading first if there is none yet.
    pub fn ensure_loaded(&self) -> Result<Arc<BindingTable>> {
        if let Some(table) = self.table() {
            return Ok(table);
        }
        let mut generation = self.lock();
        // Another thread may have loaded while we waited.
        if let Some(table) = self.table() {
            return Ok(table);
        }
        self.reload_locked(&mut generation).map(|(_, table)| table)
    }

    /// The last published table, or `None` if nothing has been loaded yet.
    pub fn table(&self) -> Option<Arc<BindingTable>> {
        self.published.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Removes the oldest unread reload report.
    pub fn next_report(&self) -> Option<ReloadReport> {
        self.reports.next()
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reload_locked(&self, generation: &mut u64) -> Result<(ReloadReport, Arc<BindingTable>)> {
        match self.resolve_all(*generation + 1) {
            Ok((table, report)) => {
                let table = Arc::new(table);
                *generation = report.generation;
                *self.published.write().unwrap_or_else(PoisonError::into_inner) = Some(table.clone());
                info!(
                    "loaded {} entry points: {} native, {} fallback, {} unresolved",
                    report.native + report.fallback + report.unresolved,
                    report.native,
                    report.fallback,
                    report.unresolved,
                );
                self.reports.push(report);
                Ok((report, table))
            }
            Err(err) => {
                error!("reload failed: {}", err);
                Err(err)
            }
        }
    }

    fn resolve_all(&self, generation: u64) -> Result<(BindingTable, ReloadReport)> {
        let transient = if self.bootstrapper.has_current_context() {
            None
        } else {
            debug!("no current context, creating a transient one");
            Some(TransientContext::create(&self.bootstrapper, self.config.transient_version)?)
        };

        let mut table = self.template.clone();
        let mut report = ReloadReport {
            generation,
            transient_context: transient.is_some(),
            ..ReloadReport::default()
        };
        for &descriptor in self.template.descriptors() {
            let resolved = match self.resolve(descriptor)? {
                Outcome::Native(address) => {
                    report.native += 1;
                    Some(Resolved { origin: Origin::Native, address })
                }
                Outcome::Fallback(address) => {
                    report.fallback += 1;
                    Some(Resolved { origin: Origin::Fallback, address })
                }
                Outcome::Unresolved => {
                    report.unresolved += 1;
                    None
                }
            };
            table.set(descriptor.name, resolved);
        }
        drop(transient);

        table.set_generation(generation);
        Ok((table, report))
    }

    fn resolve(&self, descriptor: &SymbolDescriptor) -> Result<Outcome> {
        let name = descriptor.name;
        let ptr = match panic::catch_unwind(AssertUnwindSafe(|| self.resolver.resolve(name))) {
            Ok(ptr) => ptr,
            Err(_) => {
                warn!("resolver panicked on {}, leaving it unbound", name);
                return Ok(Outcome::Unresolved);
            }
        };
        if let Some(address) = self.config.sentinel.classify(ptr) {
            trace!(target: "gl", "{} => {:?}", name, address);
            return Ok(Outcome::Native(address));
        }
        let stripped = match fallback::fallback_name(self.config.fallback_prefix, name) {
            Some(stripped) => stripped,
            None => {
                trace!(target: "gl", "{} => unresolved ({:p})", name, ptr);
                return Ok(Outcome::Unresolved);
            }
        };
        let core = match panic::catch_unwind(AssertUnwindSafe(|| self.core.find_core_implementation(stripped))) {
            Ok(core) => core,
            Err(_) => {
                warn!("core lookup panicked on {}, leaving {} unbound", stripped, name);
                return Ok(Outcome::Unresolved);
            }
        };
        match core {
            Some(core) if core.matches(descriptor) => {
                trace!(target: "gl", "{} => core {:?}", name, core.address());
                Ok(Outcome::Fallback(core.address()))
            }
            Some(core) => Err(Error::SignatureMismatch {
                name: name.to_owned(),
                declared: descriptor.signature(),
                requested: core.type_name().to_owned(),
            }),
            None => {
                trace!(target: "gl", "{} => unresolved ({:p})", name, ptr);
                Ok(Outcome::Unresolved)
            }
        }
    }
}
