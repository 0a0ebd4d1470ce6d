//! Configuration section definitions.

mod deploy;
mod page;
mod project;
mod publish;

pub use deploy::DeployConfig;
pub use page::PageConfig;
pub use project::ProjectSectionConfig;
pub use publish::{PublishConfig, Visibility};
