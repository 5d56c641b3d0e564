pub use crate::{
    status::*,
    api::*,
    ui::*,
};

pub use async_trait::async_trait;
pub use log::{info, warn, error, debug, trace};
pub use reqwest::{Client, StatusCode};
pub use serde::{Serialize, Deserialize};
pub use std::{cell::Cell, fmt, rc::Rc, time::Duration};
