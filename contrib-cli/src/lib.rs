//! Command-line front end for `contrib-core`: config loading, CSV batches
//! and report rendering.

pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod report;
