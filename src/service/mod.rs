mod boot;
pub mod mock;
pub mod orchestrator;

pub use boot::*;
pub use orchestrator::Orchestrator;
