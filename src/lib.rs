#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![deny(clippy::use_self, rust_2018_idioms)]
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

pub mod app;
pub mod communication;
pub mod config;
pub mod error;
pub mod icons;
pub mod router;
pub mod store;
pub mod view;

/// editor window for new alarms
pub mod alarm_edit;

pub use app::{bootstrap, App};
pub use error::{Error, Result};
pub use store::AlarmStore;
pub use view::AlarmView;
