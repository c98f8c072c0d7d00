//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, policies)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `assemble` - Resolve, filter, exclude and prepend a runner's file list
//! - `CheckUseCase` - Resolve every list and collect resolution issues

pub mod build_input;
pub mod check;

pub use build_input::{assemble, BuildInput, BuildInputRequest, EXCLUSIONS_LIST};
pub use check::{CheckResult, CheckUseCase, ListReport};
