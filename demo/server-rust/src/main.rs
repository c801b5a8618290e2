/* demo/server-rust/src/main.rs */

mod pages;

use std::path::Path;

use plume_server::{Config, PlumeServer};
use plume_server_axum::IntoAxumRouter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let base = Path::new(env!("CARGO_MANIFEST_DIR"));
  let mut config = Config::load(&base.join("plume.toml"))?;
  // Anchor the template root at this crate regardless of the working dir.
  config.file_root = Some(base.join(config.template_root()));

  PlumeServer::new()
    .config(config)
    .page("home", "default", || Box::new(pages::home::DefaultAction))
    .page("blog", "default", || Box::new(pages::blog::DefaultAction))
    .page("blog", "article", || Box::new(pages::blog::ArticleAction))
    .ajax("home", "search", || Box::new(pages::home::SearchAjax))
    .serve("0.0.0.0:3000")
    .await
}
