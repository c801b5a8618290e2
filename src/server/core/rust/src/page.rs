/* src/server/core/rust/src/page.rs */

//! Handler capability contracts and the structured output they produce.
//!
//! A page handler returns everything it wants on the page as one
//! `PageOutput` value: the body plus its css/js/component registrations.
//! Nothing is accumulated through shared state; the render pipeline copies
//! the output into its own per-request context.

use std::path::Path;

use crate::errors::PlumeError;

/// Call context injected into a handler: the pre-alias page, the
/// pre-fallback action, the raw argument, and the debug flag.
#[derive(Debug, Clone)]
pub struct CallContext {
  pub called_page: String,
  pub called_action: String,
  pub called_argument: Option<String>,
  pub debug_mode: bool,
}

/// Mixin classification of a registered UI component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixinType {
  None,
  Global,
  Vue,
}

/// A UI component registered by a handler. `script` starts empty and is
/// filled exactly once by the render pipeline; read-only afterward.
#[derive(Debug, Clone)]
pub struct UiComponent {
  name: String,
  mixin_type: MixinType,
  source: Option<String>,
  script: String,
}

impl UiComponent {
  /// A component whose script is loaded from `Components/<name>.js` under
  /// the template root.
  pub fn new(name: impl Into<String>, mixin_type: MixinType) -> Self {
    Self { name: name.into(), mixin_type, source: None, script: String::new() }
  }

  /// A component carrying its script inline.
  pub fn inline(name: impl Into<String>, mixin_type: MixinType, source: impl Into<String>) -> Self {
    Self { name: name.into(), mixin_type, source: Some(source.into()), script: String::new() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn mixin_type(&self) -> MixinType {
    self.mixin_type
  }

  pub fn script(&self) -> &str {
    &self.script
  }

  pub(crate) fn render(&mut self, template_root: &Path) -> Result<(), PlumeError> {
    self.script = match &self.source {
      Some(source) => source.clone(),
      None => {
        let path = template_root.join("Components").join(format!("{}.js", self.name));
        std::fs::read_to_string(&path).map_err(|_| {
          PlumeError::resource_missing(format!("component script {} does not exist", path.display()))
        })?
      }
    };
    Ok(())
  }
}

/// Structured result of `generate_content`.
#[derive(Debug, Default)]
pub struct PageOutput {
  pub body: String,
  pub css_files: Vec<String>,
  pub js_files: Vec<String>,
  pub external_js_files: Vec<String>,
  pub inline_js: Vec<String>,
  pub ui_components: Vec<UiComponent>,
}

fn push_unique(list: &mut Vec<String>, value: String) {
  if !list.contains(&value) {
    list.push(value);
  }
}

impl PageOutput {
  pub fn new(body: impl Into<String>) -> Self {
    Self { body: body.into(), ..Self::default() }
  }

  /// Register a stylesheet path; duplicates are dropped, order kept.
  pub fn register_css(&mut self, path: impl Into<String>) {
    push_unique(&mut self.css_files, path.into());
  }

  pub fn register_js(&mut self, path: impl Into<String>) {
    push_unique(&mut self.js_files, path.into());
  }

  pub fn register_external_js(&mut self, url: impl Into<String>) {
    push_unique(&mut self.external_js_files, url.into());
  }

  /// Inline snippets keep registration order and may repeat.
  pub fn register_inline_js(&mut self, code: impl Into<String>) {
    self.inline_js.push(code.into());
  }

  /// Register a file-backed component without mixin participation.
  pub fn register_ui_component(&mut self, name: impl Into<String>) {
    self.ui_components.push(UiComponent::new(name, MixinType::None));
  }

  /// Register a file-backed component with an explicit mixin classification.
  pub fn register_mixin_component(&mut self, name: impl Into<String>, mixin_type: MixinType) {
    self.ui_components.push(UiComponent::new(name, mixin_type));
  }

  pub fn register_component(&mut self, component: UiComponent) {
    self.ui_components.push(component);
  }
}

/// A page renderer: produces the page body and its asset registrations.
pub trait PageHandler: Send {
  fn generate_content(&mut self, ctx: &CallContext) -> Result<PageOutput, PlumeError>;

  /// Additional components appended after content generation, e.g.
  /// framework-level components the page wants rendered alongside its own.
  fn register_ui_components(&mut self, ctx: &CallContext) -> Vec<UiComponent> {
    let _ = ctx;
    Vec::new()
  }
}

/// An ajax responder: produces the `content` string of the JSON payload.
pub trait AjaxHandler: Send {
  fn render(&mut self, ctx: &CallContext) -> Result<String, PlumeError>;
}

/// A named module: a page handler that can also answer ajax diagnostics.
pub trait ModuleHandler: PageHandler {
  fn render_ajax(&mut self, ctx: &CallContext) -> Result<String, PlumeError> {
    let _ = ctx;
    Ok(String::new())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn css_registration_dedupes_in_order() {
    let mut output = PageOutput::new("body");
    output.register_css("a.css");
    output.register_css("b.css");
    output.register_css("a.css");
    assert_eq!(output.css_files, vec!["a.css", "b.css"]);
  }

  #[test]
  fn inline_js_keeps_duplicates() {
    let mut output = PageOutput::new("");
    output.register_inline_js("var x = 1;");
    output.register_inline_js("var x = 1;");
    assert_eq!(output.inline_js.len(), 2);
  }

  #[test]
  fn register_ui_component_defaults_to_no_mixin() {
    let mut output = PageOutput::new("");
    output.register_ui_component("my-widget");
    assert_eq!(output.ui_components[0].mixin_type(), MixinType::None);
  }

  #[test]
  fn inline_component_renders_from_source() {
    let mut component = UiComponent::inline("debug-console", MixinType::None, "var c = {};");
    component.render(Path::new("/nonexistent")).expect("inline render");
    assert_eq!(component.script(), "var c = {};");
  }

  #[test]
  fn file_component_renders_from_template_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("Components")).expect("mkdir");
    std::fs::write(dir.path().join("Components/my-widget.js"), "var myWidget = {};")
      .expect("write");
    let mut component = UiComponent::new("my-widget", MixinType::Vue);
    component.render(dir.path()).expect("render");
    assert_eq!(component.script(), "var myWidget = {};");
  }

  #[test]
  fn missing_component_script_is_resource_missing() {
    let mut component = UiComponent::new("ghost", MixinType::None);
    let err = component.render(Path::new("/nonexistent")).unwrap_err();
    assert_eq!(err.code(), "RESOURCE_MISSING");
  }
}
