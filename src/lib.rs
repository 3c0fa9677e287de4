//! Rewrite links to the retired Papers with Code index into arXiv links, using the offline
//! `paperswithcode-data` backup as the lookup table.
//!
//! [`mapping::UrlMapping`] is built from the backup records and [`rewriter::convert`] applies it
//! to a document. The remaining modules are the command-line front end.

pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod report;
pub mod rewriter;
pub mod summary;
