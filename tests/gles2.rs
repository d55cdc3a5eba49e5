mod common;

use common::{Bootstrapper, Driver, Platform};
use gles2_loader::gl::types::{GLenum, GLuint};
use gles2_loader::gles2::{pfn, Symbol, DESCRIPTORS};
use gles2_loader::{gl, CoreTable, Gles2, Loader, NoCore, Origin};
use std::os::raw::c_void;
use std::ptr;
use std::sync::atomic::{AtomicU32, Ordering};

static BOUND_TEXTURE: AtomicU32 = AtomicU32::new(0);

unsafe extern "system" fn bind_texture(_: GLenum, texture: GLuint) {
    BOUND_TEXTURE.store(texture, Ordering::SeqCst);
}

unsafe extern "system" fn get_error() -> GLenum {
    gl::INVALID_OPERATION
}

#[test]
fn fallback_entry_points_are_callable() {
    common::init_logging();
    let platform = Platform::with_host_context();
    let (_, resolver) = Driver::new(&platform).into_resolver();
    let mut core = CoreTable::new();
    core.insert("BindTexture", bind_texture as pfn::BindTexture);
    let loader = Loader::new(DESCRIPTORS, resolver, Bootstrapper(platform), core).unwrap();

    let gles = Gles2::load(&loader).unwrap();
    let binding = gles.BindTexture().unwrap();
    assert_eq!(binding.origin(), Origin::Fallback);
    unsafe { binding.get()(gl::TEXTURE_2D, 7) };
    assert_eq!(BOUND_TEXTURE.load(Ordering::SeqCst), 7);
    assert!(gles.DrawArrays().is_none());
    assert_eq!(gles.table().generation(), 1);
}

#[test]
fn native_entry_points_are_callable() {
    common::init_logging();
    let gles = gles2_loader::init(|name| match name {
        "glGetError" => get_error as pfn::GetError as usize as *const c_void,
        _ => ptr::null(),
    })
    .unwrap();

    let binding = gles.GetError().unwrap();
    assert_eq!(binding.origin(), Origin::Native);
    assert_eq!(unsafe { binding.get()() }, gl::INVALID_OPERATION);
    assert!(gles.ExtGetTexturesQCOM().is_none());
}

#[test]
fn facade_snapshots_one_generation() {
    common::init_logging();
    let platform = Platform::with_host_context();
    let (_, resolver) = Driver::new(&platform).export("glFlush", 0x1000).into_resolver();
    let loader = Loader::new(DESCRIPTORS, resolver, Bootstrapper(platform), NoCore).unwrap();

    let before = Gles2::load(&loader).unwrap();
    loader.reload().unwrap();
    let after = Gles2::load(&loader).unwrap();
    assert_eq!(before.table().generation(), 1);
    assert_eq!(after.table().generation(), 2);
    assert!(before.Flush().is_some());
}

#[test]
fn symbols_index_the_catalogue() {
    for (i, symbol) in Symbol::ALL.iter().enumerate() {
        assert_eq!(*symbol as usize, i);
        assert_eq!(symbol.descriptor(), &DESCRIPTORS[i]);
    }
}
