/* src/server/core/rust/src/builtin.rs */

//! Framework-tier handlers: the `oops` not-found page and the `debugger`
//! module behind the developer console.

use std::sync::Arc;

use crate::errors::PlumeError;
use crate::page::{CallContext, MixinType, ModuleHandler, PageHandler, PageOutput, UiComponent};
use crate::registry::HandlerRegistry;
use crate::strings::escape_html;

pub(crate) fn register(registry: &mut HandlerRegistry) {
  registry.register_framework_page("oops", "default", Arc::new(|| Box::new(OopsAction)));
  registry.register_module("debugger", Arc::new(|| Box::new(DebugConsole)));
}

/// Built-in not-found page, terminal fallback of the resolution chain.
struct OopsAction;

impl PageHandler for OopsAction {
  fn generate_content(&mut self, ctx: &CallContext) -> Result<PageOutput, PlumeError> {
    let body = format!(
      "<section class=\"plume-oops\">\n<h1>Page not found</h1>\n\
       <p>The page &quot;{}&quot; does not exist.</p>\n</section>",
      escape_html(&ctx.called_page)
    );
    Ok(PageOutput::new(body))
  }
}

const DEBUG_CONSOLE_SCRIPT: &str = "var debugConsole = {\n  template: '#plume-debug-tpl',\n  \
                                    data: function () {\n    return { open: false };\n  }\n};\n";

/// Developer console module. Its components are diagnostic-only: the render
/// pipeline concatenates their scripts but keeps them out of the mixin
/// lists.
struct DebugConsole;

impl PageHandler for DebugConsole {
  fn generate_content(&mut self, ctx: &CallContext) -> Result<PageOutput, PlumeError> {
    let body = format!(
      "<aside id=\"plume-debug\">\n<dl>\n<dt>page</dt><dd>{}</dd>\n\
       <dt>action</dt><dd>{}</dd>\n<dt>argument</dt><dd>{}</dd>\n</dl>\n</aside>",
      escape_html(&ctx.called_page),
      escape_html(&ctx.called_action),
      escape_html(ctx.called_argument.as_deref().unwrap_or("-")),
    );
    let mut output = PageOutput::new(body);
    output.register_component(UiComponent::inline(
      "debug-console",
      MixinType::None,
      DEBUG_CONSOLE_SCRIPT,
    ));
    Ok(output)
  }
}

impl ModuleHandler for DebugConsole {
  fn render_ajax(&mut self, ctx: &CallContext) -> Result<String, PlumeError> {
    Ok(format!("ajax {}/{}", ctx.called_page, ctx.called_action))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx(page: &str, action: &str) -> CallContext {
    CallContext {
      called_page: page.to_string(),
      called_action: action.to_string(),
      called_argument: None,
      debug_mode: true,
    }
  }

  #[test]
  fn oops_page_escapes_the_requested_name() {
    let mut page = OopsAction;
    let output = page.generate_content(&ctx("<script>", "default")).expect("content");
    assert!(output.body.contains("&lt;script&gt;"));
    assert!(!output.body.contains("<script>"));
  }

  #[test]
  fn debug_console_registers_inline_component() {
    let mut module = DebugConsole;
    let output = module.generate_content(&ctx("home", "default")).expect("content");
    assert_eq!(output.ui_components.len(), 1);
    assert_eq!(output.ui_components[0].name(), "debug-console");
    assert_eq!(output.ui_components[0].mixin_type(), MixinType::None);
  }

  #[test]
  fn debug_console_ajax_summary() {
    let mut module = DebugConsole;
    let summary = module.render_ajax(&ctx("home", "search")).expect("ajax");
    assert_eq!(summary, "ajax home/search");
  }
}
