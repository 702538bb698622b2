//! Pipelines.
//!
//! Each corpus has its pipeline, reading the source file, enriching turns and writing dialogs.
//! The module provides a light [pipeline::Pipeline] trait shared by both.
pub mod antiscam;
pub mod persuasion;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use antiscam::AntiScam;
pub use persuasion::Persuasion;
pub use pipeline::{Outputs, Pipeline, Summary};
