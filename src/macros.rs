//! Helper macros.

/// Declares a catalogue of driver entry points.
///
/// For every `fn Name(args) -> Ret;` line this generates:
///
/// * `pfn::Name`, the `unsafe extern "system" fn` type of the entry point;
/// * a `Symbol::Name` variant, in declaration order;
/// * a descriptor in `DESCRIPTORS` named `prefix` + `Name`;
/// * a typed accessor `Name()` on the facade struct.
///
/// Types in the declarations are resolved in the invoking module.
///
/// ```rust
/// # #[macro_use] extern crate gles2_loader;
/// # fn main() {}
/// mod egl {
///     use std::os::raw::c_void;
///     pub type EGLint = i32;
///
///     entry_points! {
///         /// A tiny EGL catalogue.
///         pub struct Egl("egl");
///         fn GetError() -> EGLint;
///         fn GetCurrentContext() -> *mut c_void;
///     }
/// }
///
/// # fn check() {
/// assert_eq!(egl::DESCRIPTORS[0].name, "eglGetError");
/// assert_eq!(egl::Symbol::GetError.descriptor().ret, "EGLint");
/// assert_eq!(egl::Symbol::ALL.len(), 2);
/// # }
/// ```
#[macro_export]
macro_rules! entry_points {
    (
        $(#[$meta:meta])*
        pub struct $facade:ident($prefix:literal);
        $( fn $name:ident($($arg:ident: $ty:ty),* $(,)*) $(-> $ret:ty)?; )*
    ) => {
        /// Function pointer type of each entry point.
        #[allow(non_camel_case_types, non_snake_case, dead_code)]
        pub mod pfn {
            use super::*;

            $( pub type $name = unsafe extern "system" fn($($ty),*) $(-> $ret)?; )*
        }

        /// Entry points in declaration order.
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum Symbol {
            $( $name, )*
        }

        impl Symbol {
            /// Every entry point, in declaration order.
            pub const ALL: &'static [Symbol] = &[$( Symbol::$name, )*];

            /// Returns the descriptor of this entry point.
            pub fn descriptor(self) -> &'static $crate::SymbolDescriptor {
                &DESCRIPTORS[self as usize]
            }
        }

        /// Descriptors in declaration order.
        pub static DESCRIPTORS: &[$crate::SymbolDescriptor] = &[
            $(
                $crate::SymbolDescriptor {
                    name: concat!($prefix, stringify!($name)),
                    params: &[$( stringify!($ty) ),*],
                    ret: $crate::__entry_point_ret!($($ret)?),
                    type_id: ::std::any::TypeId::of::<pfn::$name>,
                },
            )*
        ];

        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $facade {
            table: ::std::sync::Arc<$crate::BindingTable>,
        }

        #[allow(non_snake_case, dead_code)]
        impl $facade {
            /// Wraps a table declared from `DESCRIPTORS`.
            pub fn from_table(
                table: ::std::sync::Arc<$crate::BindingTable>,
            ) -> $crate::Result<Self> {
                table.verify_catalogue(DESCRIPTORS)?;
                ::std::result::Result::Ok($facade { table })
            }

            /// Wraps the table published by `loader`, loading it first if
            /// necessary.
            pub fn load<R, B, C>(loader: &$crate::Loader<R, B, C>) -> $crate::Result<Self>
                where
                    R: $crate::AddressResolver,
                    B: $crate::ContextBootstrapper,
                    C: $crate::CoreLookup,
            {
                Self::from_table(loader.ensure_loaded()?)
            }

            /// The underlying table.
            pub fn table(&self) -> &$crate::BindingTable {
                &self.table
            }

            $(
                pub fn $name(&self) -> Option<$crate::Binding<pfn::$name>> {
                    // `from_table` checked the catalogue.
                    unsafe { self.table.binding_unchecked::<pfn::$name>(Symbol::$name as usize) }
                }
            )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entry_point_ret {
    () => { "()" };
    ($ret:ty) => { stringify!($ret) };
}
