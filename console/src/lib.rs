//! Controller for a backend indexing job.
//!
//! Polls the status endpoint to colour an indicator icon, and toggles the job
//! with `POST /api/startIndexing` / `POST /api/stopIndexing`. The UI elements
//! are injected as trait objects so the same controller drives the browser
//! page (see the `indexing-webui` crate) and the terminal front-end.

mod prelude;
pub mod status;
pub mod api;
pub mod ui;
pub mod controller;

pub use crate::{status::*, api::*, ui::*, controller::*};
