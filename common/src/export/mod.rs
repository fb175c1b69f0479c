//! Export core modules shared by the server and the CLI.

#[cfg(feature = "excel")]
pub mod excel_core;
