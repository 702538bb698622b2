pub mod cli;
pub mod dialog;
pub mod error;
pub mod filtering;
pub mod io;
pub mod nlp;
pub mod pipelines;
pub mod sources;
pub mod transformers;
