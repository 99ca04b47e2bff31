//! Bridge between the UI thread and the worker that performs network fetches.

pub mod commands;
pub mod runtime;
