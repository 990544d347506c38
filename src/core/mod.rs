// Public modules
pub mod defaults;
pub mod error;
pub mod naming;
pub mod scaffold;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use naming::{derive_repo_name, normalize, ProjectName, RepoName};
pub use scaffold::{build, PackageMetadata, ScaffoldTemplates};
