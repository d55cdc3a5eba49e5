//! Statically linked core implementations.

use crate::symbol::{Address, EntryPointFn, SymbolDescriptor};
use std::any::{self, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Maps a resolver symbol name to the name its core implementation is
/// registered under, e.g. `glBindTexture` to `BindTexture`.
///
/// Returns `None` when `symbol` does not carry `prefix`, since such a symbol
/// cannot have a core counterpart.
pub fn fallback_name<'a>(prefix: &str, symbol: &'a str) -> Option<&'a str> {
    if symbol.starts_with(prefix) && symbol.len() > prefix.len() {
        Some(&symbol[prefix.len()..])
    } else {
        None
    }
}

/// A statically linked function together with its exact type.
#[derive(Clone, Copy)]
pub struct CoreFn {
    address: Address,
    type_id: TypeId,
    type_name: &'static str,
}

impl CoreFn {
    /// Captures `f`.
    pub fn new<F: EntryPointFn>(f: F) -> Self {
        CoreFn {
            address: f.address(),
            type_id: TypeId::of::<F>(),
            type_name: any::type_name::<F>(),
        }
    }

    /// Code address of the function.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Returns `true` if this function has the type `descriptor` declares.
    pub fn matches(&self, descriptor: &SymbolDescriptor) -> bool {
        (descriptor.type_id)() == self.type_id
    }

    /// Rust type name of the function.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for CoreFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CoreFn({:?}: {})", self.address, self.type_name)
    }
}

/// Finds a core implementation for an entry point the resolver could not
/// provide.
pub trait CoreLookup {
    /// Returns the core implementation registered under `name`, which has
    /// already been through [`fallback_name`].
    ///
    /// [`fallback_name`]: fn.fallback_name.html
    fn find_core_implementation(&self, name: &str) -> Option<CoreFn>;
}

impl<'a, T: CoreLookup + ?Sized> CoreLookup for &'a T {
    fn find_core_implementation(&self, name: &str) -> Option<CoreFn> {
        (**self).find_core_implementation(name)
    }
}

/// No core implementations at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCore;

impl CoreLookup for NoCore {
    fn find_core_implementation(&self, _: &str) -> Option<CoreFn> {
        None
    }
}

/// Core implementations registered by name.
#[derive(Clone, Debug, Default)]
pub struct CoreTable {
    entries: HashMap<&'static str, CoreFn>,
}

impl CoreTable {
    /// Constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `f` under `name`, replacing any previous entry.
    pub fn insert<F: EntryPointFn>(&mut self, name: &'static str, f: F) -> &mut Self {
        self.entries.insert(name, CoreFn::new(f));
        self
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CoreLookup for CoreTable {
    fn find_core_implementation(&self, name: &str) -> Option<CoreFn> {
        self.entries.get(name).cloned()
    }
}
