// Services: template discovery, ignore resolution, copying, and renaming

pub mod copier;
pub mod creator;
pub mod ignore;
pub mod locator;
pub mod rewriter;

pub use copier::copy_template;
pub use creator::create_from_template;
pub use ignore::{IgnoreSet, IGNORE_FILE};
pub use locator::{TemplateLocator, TEMPLATE_ENV_VAR};
pub use rewriter::rewrite_project_name;
