#![allow(dead_code)]

mod backend;
mod ui;
pub use backend::*;
pub use ui::*;

pub use indexing_console::*;
pub use std::{rc::Rc, sync::{Arc, Mutex}};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn controller(backend: &MockBackend, ui: &Rc<RecordingUi>) -> IndexingController<HttpApi> {
    init_logger();
    IndexingController::new(HttpApi::new(backend.url()), ui.handles())
}
