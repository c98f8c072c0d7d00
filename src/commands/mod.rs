//! Subcommand implementations

pub mod check;
pub mod context;
pub mod lists;
pub mod resolve;

pub use check::cmd_check;
pub use context::CommandContext;
pub use lists::cmd_lists;
pub use resolve::cmd_resolve;
