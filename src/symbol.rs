//! Entry point descriptors and typed function pointers.

use std::any::TypeId;
use std::os::raw::c_void;
use std::{fmt, mem, ptr};

/// Static description of one driver entry point.
///
/// Descriptors are generated by [`entry_points!`] and live for the whole
/// process. The name is the symbol as passed to the address resolver, for
/// example `glBindTexture`.
///
/// [`entry_points!`]: ../macro.entry_points.html
#[derive(Clone, Copy)]
pub struct SymbolDescriptor {
    /// Resolver name.
    pub name: &'static str,

    /// Parameter types, in order.
    pub params: &'static [&'static str],

    /// Return type, `()` for none.
    pub ret: &'static str,

    /// Identity of the Rust function pointer type for this entry point.
    pub type_id: fn() -> TypeId,
}

impl SymbolDescriptor {
    /// Returns `true` if `F` is the function pointer type declared for this
    /// entry point.
    pub fn accepts<F: EntryPointFn>(&self) -> bool {
        (self.type_id)() == TypeId::of::<F>()
    }

    /// Human readable signature, e.g. `fn(GLenum, GLuint)`.
    pub fn signature(&self) -> String {
        let mut s = format!("fn({})", self.params.join(", "));
        if self.ret != "()" {
            s.push_str(" -> ");
            s.push_str(self.ret);
        }
        s
    }
}

impl fmt::Debug for SymbolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.signature())
    }
}

impl PartialEq for SymbolDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && (self.type_id)() == (other.type_id)()
    }
}

impl Eq for SymbolDescriptor {}

/// A non-null native code address.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Address(ptr::NonNull<c_void>);

// Addresses point at immutable code.
unsafe impl Send for Address {}
unsafe impl Sync for Address {}

impl Address {
    /// Wraps a raw pointer, returning `None` for null.
    pub fn new(ptr: *const c_void) -> Option<Self> {
        ptr::NonNull::new(ptr as *mut c_void).map(Address)
    }

    /// Returns the raw pointer.
    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr() as *const _
    }

    /// Returns the address as a signed integer, as used by sentinel rules.
    pub fn value(self) -> isize {
        self.0.as_ptr() as isize
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:p}", self.0.as_ptr())
    }
}

/// Function pointer types that may occupy a binding slot.
///
/// Implemented for every `unsafe extern "system" fn` up to twelve
/// parameters. This is the only place a native address is turned into a
/// callable value.
pub unsafe trait EntryPointFn: Copy + 'static {
    /// Reinterprets `address` as a function of this type.
    ///
    /// # Safety
    ///
    /// `address` must point at a function with exactly this signature and
    /// calling convention.
    unsafe fn from_address(address: Address) -> Self;

    /// Returns the code address of this function.
    fn address(self) -> Address;
}

macro_rules! impl_entry_point_fn {
    ($($arg:ident),*) => {
        unsafe impl<Ret: 'static, $($arg: 'static),*> EntryPointFn
            for unsafe extern "system" fn($($arg),*) -> Ret
        {
            unsafe fn from_address(address: Address) -> Self {
                mem::transmute_copy::<*const c_void, Self>(&address.as_ptr())
            }

            fn address(self) -> Address {
                // Function pointers are never null.
                Address(unsafe { ptr::NonNull::new_unchecked(self as usize as *mut c_void) })
            }
        }
    };
}

impl_entry_point_fn!();
impl_entry_point_fn!(A);
impl_entry_point_fn!(A, B);
impl_entry_point_fn!(A, B, C);
impl_entry_point_fn!(A, B, C, D);
impl_entry_point_fn!(A, B, C, D, E);
impl_entry_point_fn!(A, B, C, D, E, F);
impl_entry_point_fn!(A, B, C, D, E, F, G);
impl_entry_point_fn!(A, B, C, D, E, F, G, H);
impl_entry_point_fn!(A, B, C, D, E, F, G, H, I);
impl_entry_point_fn!(A, B, C, D, E, F, G, H, I, J);
impl_entry_point_fn!(A, B, C, D, E, F, G, H, I, J, K);
impl_entry_point_fn!(A, B, C, D, E, F, G, H, I, J, K, L);
