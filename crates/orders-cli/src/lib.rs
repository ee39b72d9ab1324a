//! Library side of the orders checker CLI.

pub mod check;
pub mod logging;
pub mod summary;
