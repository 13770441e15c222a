//! Two-person savings tracker: per-person slot marking, fine accrual and a
//! single-step undo history, driven by a command stream and persisted as a
//! JSON state document.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
