//! Orchestration of encoding runs.

pub mod encode;

pub use encode::encode_files;
