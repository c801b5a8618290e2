/* src/server/core/rust/src/wrapper.rs */

//! Render assembly pipeline: drives a page handler's content contract,
//! aggregates its style/script/component registrations, and substitutes
//! everything into the root wrapper template.

use std::path::PathBuf;

use plume_injector::Template;

use crate::config::Config;
use crate::errors::PlumeError;
use crate::invoker::InvokedPage;
use crate::page::{CallContext, MixinType, PageOutput, UiComponent};
use crate::registry::HandlerRegistry;
use crate::strings::to_camel_case;

const ROOT_TEMPLATE: &str = "PageWrapper/PageWrapper.html";
const SUB_TEMPLATE: &str = "PageWrapper/PageWrapperSub.html";

/// Aggregation state for one render. Owned exclusively by the wrapper for
/// the duration of a single request.
struct RenderContext {
  content: String,
  ui_components: Vec<UiComponent>,
  css_files: Vec<String>,
  js_files: Vec<String>,
  external_js_files: Vec<String>,
  inline_js: Vec<String>,
}

impl RenderContext {
  fn from_output(output: PageOutput) -> Self {
    Self {
      content: output.body,
      ui_components: output.ui_components,
      css_files: output.css_files,
      js_files: output.js_files,
      external_js_files: output.external_js_files,
      inline_js: output.inline_js,
    }
  }
}

pub struct PageWrapper<'a> {
  config: &'a Config,
  registry: &'a HandlerRegistry,
  template_root: PathBuf,
}

impl<'a> PageWrapper<'a> {
  pub fn new(config: &'a Config, registry: &'a HandlerRegistry) -> Self {
    Self { config, registry, template_root: config.template_root() }
  }

  /// Render the full document. All-or-nothing: any resource failure aborts
  /// with no partial output.
  pub fn render(&self, invoked: &mut InvokedPage) -> Result<String, PlumeError> {
    // Root template is required, the sub template only when an integration
    // block needs it.
    let root_path = self.template_root.join(ROOT_TEMPLATE);
    let mut tpl = Template::load(&root_path)
      .map_err(|_| PlumeError::resource_missing(format!("file {} does not exist", root_path.display())))?;
    let sub_path = self.template_root.join(SUB_TEMPLATE);

    let output = invoked.handler.generate_content(&invoked.context)?;
    let mut ctx = RenderContext::from_output(output);
    ctx.ui_components.extend(invoked.handler.register_ui_components(&invoked.context));

    // Classify and concatenate the page's components.
    let mut global_mixins: Vec<String> = Vec::new();
    let mut main_mixins: Vec<String> = Vec::new();
    let mut vue_script = String::new();
    for component in &mut ctx.ui_components {
      component.render(&self.template_root)?;
      match component.mixin_type() {
        MixinType::Global => {
          global_mixins.push(format!("Vue.mixin({});", to_camel_case(component.name())));
        }
        MixinType::Vue => main_mixins.push(to_camel_case(component.name())),
        MixinType::None => {}
      }
      vue_script.push_str(component.script());
    }

    let component_count = ctx.ui_components.len();

    // Developer console: its components are rendered into the script block
    // but stay out of both mixin lists.
    if invoked.context.debug_mode {
      let (module_content, module_components) = self.render_debug_module(&invoked.context)?;
      tpl.substitute("DEBUG_CONTENT", module_content);
      ctx.ui_components.extend(module_components);
      for component in ctx.ui_components.iter_mut().skip(component_count) {
        component.render(&self.template_root)?;
        vue_script.push_str(component.script());
      }
    }

    if !global_mixins.is_empty() {
      tpl.substitute("VUE_MIXIN", global_mixins.join("\n"));
    }
    if !main_mixins.is_empty() {
      tpl.substitute("MAIN_MIXINS", format!(",\nmixins: [{}]", main_mixins.join(",\n")));
    }

    if invoked.context.debug_mode {
      tpl.substitute("VUE_DEVELOPMENT_URL", "/dist/vue.js");
      tpl.substitute("VUE_DEVELOPMENT", "Vue.config.devtools = true;");
    }

    if self.config.vuetify {
      tpl.substitute("VUETIFY_JS", load_sub_block(&sub_path, "VUETIFY_JS")?);
      tpl.substitute("VUETIFY_CSS", load_sub_block(&sub_path, "VUETIFY_CSS")?);
      let theme = match &self.config.vuetify_theme {
        Some(name) => format!("theme: {{ {name}: true }}"),
        None => String::new(),
      };
      tpl.substitute("VUETIFY_INIT", format!(", vuetify: new Vuetify({{{theme}}})"));
    }

    if self.config.axios {
      tpl.substitute("AXIOS_JS", load_sub_block(&sub_path, "AXIOS_JS")?);
    }

    tpl.substitute("CSS_INCLUDES", render_css_includes(&ctx.css_files));
    tpl.substitute("JS_INCLUDES", render_js_includes(&ctx.js_files));
    tpl.substitute("VUE_COMPONENTS", format!("\n{vue_script}"));
    tpl.substitute("EXTERNAL_JS", render_js_includes(&ctx.external_js_files));
    if !ctx.inline_js.is_empty() {
      tpl.substitute("JS_INLINE", format!("<script>\n{}\n</script>", ctx.inline_js.join("\n")));
    }
    tpl.substitute("WRAPPER_CONTENT", ctx.content);

    Ok(tpl.render())
  }

  fn render_debug_module(
    &self,
    ctx: &CallContext,
  ) -> Result<(String, Vec<UiComponent>), PlumeError> {
    let factory = self
      .registry
      .lookup_module("debugger")
      .ok_or_else(|| PlumeError::handler_load("module 'debugger' is not registered"))?;
    let mut module = factory();
    let output = module.generate_content(ctx)?;
    let mut components = output.ui_components;
    components.extend(module.register_ui_components(ctx));
    Ok((output.body, components))
  }
}

fn load_sub_block(sub_path: &std::path::Path, block: &str) -> Result<String, PlumeError> {
  Template::load_block(sub_path, block)
    .map(|tpl| tpl.render())
    .map_err(|e| PlumeError::resource_missing(e.to_string()))
}

fn render_css_includes(files: &[String]) -> String {
  files
    .iter()
    .map(|f| format!("<link rel=\"stylesheet\" href=\"{f}\">"))
    .collect::<Vec<_>>()
    .join("\n")
}

fn render_js_includes(files: &[String]) -> String {
  files
    .iter()
    .map(|f| format!("<script src=\"{f}\"></script>"))
    .collect::<Vec<_>>()
    .join("\n")
}
