/* demo/server-rust/src/pages/blog.rs */

use plume_server::{CallContext, PageHandler, PageOutput, PlumeError};

use super::load_template;

struct Post {
  slug: &'static str,
  title: &'static str,
  teaser: &'static str,
}

const POSTS: &[Post] = &[
  Post { slug: "hello-plume", title: "Hello, Plume", teaser: "A first look at the framework." },
  Post { slug: "aliases", title: "Friendly URLs", teaser: "Pages and actions under any name." },
];

/// Post list. The project config aliases `list`/`overview` onto this action
/// and `weblog`/`news` onto the page.
pub struct DefaultAction;

impl PageHandler for DefaultAction {
  fn generate_content(&mut self, _ctx: &CallContext) -> Result<PageOutput, PlumeError> {
    let mut tpl = load_template("Pages/Blog/DefaultAction.html")?;
    let listing = POSTS
      .iter()
      .map(|post| {
        format!(
          "<li><a href=\"/?requestPage=blog&requestAction=article&requestArgument={}\">{}</a> \
           &mdash; {}</li>",
          post.slug, post.title, post.teaser
        )
      })
      .collect::<Vec<_>>()
      .join("\n");
    tpl.substitute("POST_LIST", listing);

    let mut output = PageOutput::new(tpl.render());
    output.register_css("assets/css/blog.css");
    Ok(output)
  }
}

pub struct ArticleAction;

impl PageHandler for ArticleAction {
  fn generate_content(&mut self, ctx: &CallContext) -> Result<PageOutput, PlumeError> {
    let slug = ctx.called_argument.as_deref().unwrap_or("");
    let post = POSTS
      .iter()
      .find(|post| post.slug == slug)
      .ok_or_else(|| PlumeError::not_found(format!("no article '{slug}'")))?;

    let mut tpl = load_template("Pages/Blog/ArticleAction.html")?;
    tpl.substitute("TITLE", post.title);
    tpl.substitute("TEASER", post.teaser);

    let mut output = PageOutput::new(tpl.render());
    output.register_css("assets/css/blog.css");
    Ok(output)
  }
}
