//! Command implementations, one module per subcommand tree.

pub mod agents;
pub mod auth;
pub mod dashboard;
pub mod leads;
pub mod reports;
pub mod tags;
