//! Name-indexed binding slots.

use crate::error::{Error, Result};
use crate::symbol::{Address, EntryPointFn, SymbolDescriptor};
use std::any;
use std::collections::HashMap;
use vec_map::VecMap;

/// Where a bound entry point came from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Origin {
    /// Address returned by the platform resolver.
    Native,

    /// Statically linked core implementation.
    Fallback,
}

/// Type-erased contents of a bound slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Resolved {
    /// Where the binding came from.
    pub origin: Origin,

    /// Code address of the binding.
    pub address: Address,
}

/// A bound entry point viewed through its declared function type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Binding<F> {
    /// Bound to the address the resolver returned.
    Native(F),

    /// Bound to a statically linked core implementation.
    Fallback(F),
}

impl<F: Copy> Binding<F> {
    /// Returns the callable.
    pub fn get(self) -> F {
        match self {
            Binding::Native(f) | Binding::Fallback(f) => f,
        }
    }

    /// Returns where the binding came from.
    pub fn origin(self) -> Origin {
        match self {
            Binding::Native(_) => Origin::Native,
            Binding::Fallback(_) => Origin::Fallback,
        }
    }
}

/// The set of declared entry points and their current bindings.
///
/// Slots are declared once, before any reload. A table published by a
/// [`Loader`] is never mutated again; each reload fills a fresh copy.
///
/// [`Loader`]: ../loader/struct.Loader.html
#[derive(Clone, Debug, Default)]
pub struct BindingTable {
    /// Declared entry points, in declaration order.
    descriptors: Vec<&'static SymbolDescriptor>,

    /// Symbol name to slot index.
    index: HashMap<&'static str, usize>,

    /// Bound slots; absent keys are unbound.
    slots: VecMap<Resolved>,

    /// Reload pass that produced this table, zero if never published.
    generation: u64,
}

impl BindingTable {
    /// Constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares every descriptor of a catalogue, in order.
    pub fn with_catalogue(catalogue: &'static [SymbolDescriptor]) -> Result<Self> {
        let mut table = Self::new();
        for descriptor in catalogue {
            table.declare(descriptor)?;
        }
        Ok(table)
    }

    /// Registers an unbound slot for `descriptor`.
    pub fn declare(&mut self, descriptor: &'static SymbolDescriptor) -> Result<()> {
        if self.index.contains_key(descriptor.name) {
            return Err(Error::DuplicateSymbol(descriptor.name));
        }
        self.index.insert(descriptor.name, self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Returns the binding for `name`, or `None` if it is unbound or was
    /// never declared.
    pub fn get(&self, name: &str) -> Option<Resolved> {
        self.index.get(name).and_then(|&i| self.slots.get(i).cloned())
    }

    /// Returns the binding for `name` as its declared function type.
    ///
    /// Fails if `F` is not the type the descriptor declares.
    pub fn get_as<F: EntryPointFn>(&self, name: &str) -> Result<Option<Binding<F>>> {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => return Ok(None),
        };
        let descriptor = self.descriptors[i];
        if !descriptor.accepts::<F>() {
            return Err(Error::SignatureMismatch {
                name: descriptor.name.to_owned(),
                declared: descriptor.signature(),
                requested: any::type_name::<F>().to_owned(),
            });
        }
        // Type checked above.
        Ok(unsafe { self.binding_unchecked(i) })
    }

    /// Typed access by slot index without the signature check.
    ///
    /// # Safety
    ///
    /// `F` must be the function type declared for slot `index`.
    #[doc(hidden)]
    pub unsafe fn binding_unchecked<F: EntryPointFn>(&self, index: usize) -> Option<Binding<F>> {
        debug_assert!(self.descriptors[index].accepts::<F>());
        self.slots.get(index).map(|resolved| {
            let f = F::from_address(resolved.address);
            match resolved.origin {
                Origin::Native => Binding::Native(f),
                Origin::Fallback => Binding::Fallback(f),
            }
        })
    }

    /// Binds or unbinds the slot for `name`. Undeclared names are ignored.
    pub(crate) fn set(&mut self, name: &str, resolved: Option<Resolved>) {
        if let Some(&i) = self.index.get(name) {
            match resolved {
                Some(resolved) => {
                    self.slots.insert(i, resolved);
                }
                None => {
                    self.slots.remove(i);
                }
            }
        }
    }

    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// Returns `true` if a slot named `name` exists, bound or not.
    pub fn is_declared(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the descriptor declared under `name`.
    pub fn descriptor(&self, name: &str) -> Option<&'static SymbolDescriptor> {
        self.index.get(name).map(|&i| self.descriptors[i])
    }

    /// Declared descriptors, in declaration order.
    pub fn descriptors(&self) -> &[&'static SymbolDescriptor] {
        &self.descriptors
    }

    /// Iterates over every slot in declaration order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'static SymbolDescriptor, Option<Resolved>)> + 'a {
        self.descriptors
            .iter()
            .enumerate()
            .map(move |(i, &d)| (d, self.slots.get(i).cloned()))
    }

    /// Number of declared slots.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Number of bound slots.
    pub fn bound(&self) -> usize {
        self.slots.len()
    }

    /// Reload pass that produced this table, zero if it was never published.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Checks that this table was declared from exactly `catalogue`.
    pub fn verify_catalogue(&self, catalogue: &[SymbolDescriptor]) -> Result<()> {
        for (i, expected) in catalogue.iter().enumerate() {
            match self.descriptors.get(i) {
                Some(&actual) if actual == expected => {}
                Some(&actual) => {
                    return Err(Error::SignatureMismatch {
                        name: actual.name.to_owned(),
                        declared: actual.signature(),
                        requested: format!("{:?}", expected),
                    });
                }
                None => {
                    return Err(Error::SignatureMismatch {
                        name: expected.name.to_owned(),
                        declared: "<undeclared>".to_owned(),
                        requested: expected.signature(),
                    });
                }
            }
        }
        if let Some(&extra) = self.descriptors.get(catalogue.len()) {
            return Err(Error::SignatureMismatch {
                name: extra.name.to_owned(),
                declared: extra.signature(),
                requested: "<undeclared>".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;
    use std::os::raw::c_void;

    type BindTexture = unsafe extern "system" fn(u32, u32);
    type GetError = unsafe extern "system" fn() -> u32;

    static CATALOGUE: [SymbolDescriptor; 2] = [
        SymbolDescriptor {
            name: "glBindTexture",
            params: &["GLenum", "GLuint"],
            ret: "()",
            type_id: TypeId::of::<BindTexture>,
        },
        SymbolDescriptor {
            name: "glGetError",
            params: &[],
            ret: "GLenum",
            type_id: TypeId::of::<GetError>,
        },
    ];

    fn native(value: usize) -> Resolved {
        Resolved {
            origin: Origin::Native,
            address: Address::new(value as *const c_void).unwrap(),
        }
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let mut table = BindingTable::with_catalogue(&CATALOGUE).unwrap();
        match table.declare(&CATALOGUE[0]) {
            Err(Error::DuplicateSymbol(name)) => assert_eq!(name, "glBindTexture"),
            other => panic!("expected DuplicateSymbol, got {:?}", other),
        }
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unbound_and_undeclared_are_distinguishable() {
        let table = BindingTable::with_catalogue(&CATALOGUE).unwrap();
        assert_eq!(table.get("glBindTexture"), None);
        assert!(table.is_declared("glBindTexture"));
        assert_eq!(table.get("glNotAThing"), None);
        assert!(!table.is_declared("glNotAThing"));
        assert_eq!(table.bound(), 0);
        assert_eq!(table.generation(), 0);
    }

    #[test]
    fn set_rebinds_and_unbinds() {
        let mut table = BindingTable::with_catalogue(&CATALOGUE).unwrap();
        table.set("glBindTexture", Some(native(0x1000)));
        assert_eq!(table.get("glBindTexture"), Some(native(0x1000)));
        table.set("glBindTexture", Some(native(0x2000)));
        assert_eq!(table.get("glBindTexture"), Some(native(0x2000)));
        table.set("glBindTexture", None);
        assert_eq!(table.get("glBindTexture"), None);
        table.set("glNotAThing", Some(native(0x3000)));
        assert_eq!(table.bound(), 0);
    }

    #[test]
    fn typed_access_checks_the_signature() {
        let mut table = BindingTable::with_catalogue(&CATALOGUE).unwrap();
        table.set("glBindTexture", Some(native(0x1000)));

        let binding = table.get_as::<BindTexture>("glBindTexture").unwrap().unwrap();
        assert_eq!(binding.origin(), Origin::Native);
        assert_eq!(binding.get().address().value(), 0x1000);

        match table.get_as::<GetError>("glBindTexture") {
            Err(Error::SignatureMismatch { name, .. }) => assert_eq!(name, "glBindTexture"),
            other => panic!("expected SignatureMismatch, got {:?}", other.map(|b| b.is_some())),
        }

        assert!(table.get_as::<GetError>("glGetError").unwrap().is_none());
        assert!(table.get_as::<GetError>("glNotAThing").unwrap().is_none());
    }

    #[test]
    fn catalogue_verification() {
        let table = BindingTable::with_catalogue(&CATALOGUE).unwrap();
        assert!(table.verify_catalogue(&CATALOGUE).is_ok());
        assert!(table.verify_catalogue(&CATALOGUE[..1]).is_err());
        assert!(BindingTable::new().verify_catalogue(&CATALOGUE).is_err());
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let mut table = BindingTable::with_catalogue(&CATALOGUE).unwrap();
        table.set("glGetError", Some(native(0x4000)));
        let slots: Vec<_> = table.iter().map(|(d, r)| (d.name, r.is_some())).collect();
        assert_eq!(slots, vec![("glBindTexture", false), ("glGetError", true)]);
    }
}
