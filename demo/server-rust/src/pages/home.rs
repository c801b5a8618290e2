/* demo/server-rust/src/pages/home.rs */

use plume_server::{
  AjaxHandler, CallContext, MixinType, PageHandler, PageOutput, PlumeError,
};

use super::load_template;

pub struct DefaultAction;

impl PageHandler for DefaultAction {
  fn generate_content(&mut self, ctx: &CallContext) -> Result<PageOutput, PlumeError> {
    let mut tpl = load_template("Pages/Home/DefaultAction.html")?;
    tpl.substitute("VISITOR", ctx.called_argument.as_deref().unwrap_or("stranger"));

    let mut output = PageOutput::new(tpl.render());
    output.register_css("assets/css/home.css");
    output.register_js("assets/js/home.js");
    output.register_external_js("https://cdn.jsdelivr.net/npm/vue@2/dist/vue.js");
    output.register_inline_js("var searchEndpoint = '/?requestPage=home&requestAction=search';");
    output.register_mixin_component("hello-card", MixinType::Vue);
    Ok(output)
  }

  fn register_ui_components(&mut self, _ctx: &CallContext) -> Vec<plume_server::UiComponent> {
    vec![plume_server::UiComponent::new("site-banner", MixinType::Global)]
  }
}

pub struct SearchAjax;

impl AjaxHandler for SearchAjax {
  fn render(&mut self, ctx: &CallContext) -> Result<String, PlumeError> {
    let term = ctx.called_argument.as_deref().unwrap_or("");
    if term.is_empty() {
      return Ok("no search term".to_string());
    }
    Ok(format!("no results for '{term}' yet"))
  }
}
