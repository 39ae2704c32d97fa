//! Command implementations. Each module exposes an `execute` function.

pub mod check;
pub mod explain;
pub mod manifest;
pub mod plan;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use explain::execute as explain_execute;
pub use manifest::execute as manifest_execute;
pub use plan::execute as plan_execute;
