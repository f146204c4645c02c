// Data model: templates, manifests, and create options

pub mod create_options;
pub mod manifest;
pub mod template;

pub use create_options::CreateOptions;
pub use manifest::{Manifest, MANIFEST_FILE};
pub use template::Template;
