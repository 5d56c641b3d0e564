pub use crate::{dom::*, logger::*, util::*};
pub use indexing_console::{HttpApi, IndexingController, UiHandles, IdInput, ToggleButton, StatusIcon, Notifier, UiEvent};
pub use log::{Level, Log, Metadata, Record, error, info, debug};
pub use std::{fmt, rc::Rc};
pub use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
pub use wasm_bindgen_futures::spawn_local;
pub use web_sys::{Element, Event, HtmlElement, HtmlInputElement};
