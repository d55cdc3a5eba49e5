extern crate env_logger;
extern crate gles2_loader;

use gles2_loader::gles2;
use gles2_loader::headless::Headless;
use gles2_loader::{Gles2, Loader, NoCore};

fn main() {
    env_logger::init();

    let headless = Headless::new().expect("no usable EGL device");
    let loader = Loader::new(
        gles2::DESCRIPTORS,
        |name: &str| headless.proc_address(name),
        &headless,
        NoCore,
    )
    .expect("invalid catalogue");

    let report = loader.reload().expect("failed to load entry points");
    println!(
        "generation {}: {} native, {} fallback, {} unresolved (transient context: {})",
        report.generation, report.native, report.fallback, report.unresolved, report.transient_context,
    );

    let gl = Gles2::load(&loader).expect("failed to load entry points");
    for (descriptor, resolved) in gl.table().iter() {
        if resolved.is_none() {
            println!("missing {:?}", descriptor);
        }
    }
}
