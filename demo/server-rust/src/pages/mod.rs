/* demo/server-rust/src/pages/mod.rs */

pub mod blog;
pub mod home;

use std::path::Path;

use plume_injector::Template;
use plume_server::PlumeError;

/// Load a page template relative to this crate's template root.
pub(crate) fn load_template(relative: &str) -> Result<Template, PlumeError> {
  let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates").join(relative);
  Template::load(&path)
    .map_err(|_| PlumeError::resource_missing(format!("file {} does not exist", path.display())))
}
