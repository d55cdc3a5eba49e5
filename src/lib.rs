extern crate crossbeam_channel;
#[macro_use] extern crate log;
extern crate vec_map;

#[macro_use]
mod macros;

mod queue;

pub mod context;
pub mod error;
pub mod fallback;
pub mod gl;
pub mod gles2;
pub mod loader;
pub mod resolver;
pub mod symbol;
pub mod table;

#[cfg(feature = "glutin")]
pub mod headless;

use std::os;

/// Load the OpenGL ES 2.0 entry points for the context current on the
/// calling thread.
///
/// Entry points the platform does not export fall back to the statically
/// linked core implementations when the `static-core` feature is enabled.
pub fn init<F>(query_proc_address: F) -> Result<Gles2>
    where F: Fn(&str) -> *const os::raw::c_void
{
    #[cfg(feature = "static-core")]
    let core = gl::static_core();
    #[cfg(not(feature = "static-core"))]
    let core = NoCore;

    let loader = Loader::new(gles2::DESCRIPTORS, query_proc_address, CurrentContext, core)?;
    Gles2::load(&loader)
}

#[doc(inline)]
pub use context::ContextBootstrapper;

#[doc(inline)]
pub use context::CurrentContext;

#[doc(inline)]
pub use context::Version;

#[doc(inline)]
pub use error::BootstrapError;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use error::Result;

#[doc(inline)]
pub use fallback::fallback_name;

#[doc(inline)]
pub use fallback::CoreFn;

#[doc(inline)]
pub use fallback::CoreLookup;

#[doc(inline)]
pub use fallback::CoreTable;

#[doc(inline)]
pub use fallback::NoCore;

#[doc(inline)]
pub use gles2::Gles2;

#[doc(inline)]
pub use loader::Config;

#[doc(inline)]
pub use loader::Loader;

#[doc(inline)]
pub use loader::ReloadReport;

#[doc(inline)]
pub use resolver::AddressResolver;

#[doc(inline)]
pub use resolver::SentinelRange;

#[doc(inline)]
pub use symbol::Address;

#[doc(inline)]
pub use symbol::EntryPointFn;

#[doc(inline)]
pub use symbol::SymbolDescriptor;

#[doc(inline)]
pub use table::Binding;

#[doc(inline)]
pub use table::BindingTable;

#[doc(inline)]
pub use table::Origin;

#[doc(inline)]
pub use table::Resolved;
