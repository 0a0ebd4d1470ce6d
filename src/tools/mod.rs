//! External CLI collaborators.
//!
//! The workflow delegates everything to two third-party tools, treated as
//! opaque collaborators: the source-hosting CLI (`gh` + `git`) and the
//! hosting-platform CLI (`vercel`). Each wrapper checks availability and
//! authentication up front, then invokes operations in a fixed order.

mod error;
mod hosting;
mod source_host;

pub use error::ToolError;
pub use hosting::HostingPlatform;
pub use source_host::SourceHost;
