//! Service layer for business logic.
//!
//! Keeps the open-and-display flow apart from the Slint handlers so it can
//! be driven with fakes in tests.

pub mod open_service;

pub use open_service::{Notifier, OpenImageService, OpenOutcome, Presenter};
