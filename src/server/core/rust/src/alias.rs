/* src/server/core/rust/src/alias.rs */

//! Page and action alias resolution.
//!
//! The alias table maps canonical page names to their declared alternates.
//! Declaration order is semantic: resolution scans entries in the order they
//! appear in the configuration document and the first match wins. An
//! undeclared name is its own canonical form.

use std::fmt;

use serde::Deserialize;
use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};

/// One canonical page's alias declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasEntry {
  /// Plain list of page aliases.
  List(Vec<String>),
  /// Structured entry: page aliases are the keys (minus the reserved
  /// `actions` key), action aliases live in the `actions` sub-mapping.
  Structured { page_aliases: Vec<String>, actions: Vec<(String, Vec<String>)> },
}

/// Ordered alias declarations, read-only after configuration load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasTable {
  entries: Vec<(String, AliasEntry)>,
}

impl AliasTable {
  pub fn new(entries: Vec<(String, AliasEntry)>) -> Self {
    Self { entries }
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Resolve a requested page name to its canonical page.
  pub fn resolve_page_alias(&self, page: &str) -> String {
    for (canonical, entry) in &self.entries {
      let matched = match entry {
        AliasEntry::List(aliases) => aliases.iter().any(|a| a == page),
        AliasEntry::Structured { page_aliases, .. } => page_aliases.iter().any(|a| a == page),
      };
      if matched {
        return canonical.clone();
      }
    }
    page.to_string()
  }

  /// Resolve a requested action name to its canonical action, scanning every
  /// page's `actions` sub-mapping in declaration order.
  pub fn resolve_action_alias(&self, action: &str) -> String {
    for (_, entry) in &self.entries {
      if let AliasEntry::Structured { actions, .. } = entry {
        for (canonical, aliases) in actions {
          if aliases.iter().any(|a| a == action) {
            return canonical.clone();
          }
        }
      }
    }
    action.to_string()
  }
}

// Hand-written Deserialize: toml's map type does not guarantee declaration
// order, so the visitor collects entries straight off the parse stream.

impl<'de> Deserialize<'de> for AliasTable {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct TableVisitor;

    impl<'de> Visitor<'de> for TableVisitor {
      type Value = AliasTable;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table of page alias declarations")
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut entries = Vec::new();
        while let Some((page, entry)) = map.next_entry::<String, AliasEntry>()? {
          entries.push((page, entry));
        }
        Ok(AliasTable { entries })
      }
    }

    deserializer.deserialize_map(TableVisitor)
  }
}

impl<'de> Deserialize<'de> for AliasEntry {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct EntryVisitor;

    impl<'de> Visitor<'de> for EntryVisitor {
      type Value = AliasEntry;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an alias list or a structured alias entry")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
      where
        A: SeqAccess<'de>,
      {
        let mut aliases = Vec::new();
        while let Some(alias) = seq.next_element::<String>()? {
          aliases.push(alias);
        }
        Ok(AliasEntry::List(aliases))
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut page_aliases = Vec::new();
        let mut actions = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
          if key == "actions" {
            actions = map.next_value::<ActionAliases>()?.0;
          } else {
            map.next_value::<IgnoredAny>()?;
            page_aliases.push(key);
          }
        }
        Ok(AliasEntry::Structured { page_aliases, actions })
      }
    }

    deserializer.deserialize_any(EntryVisitor)
  }
}

struct ActionAliases(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for ActionAliases {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct ActionsVisitor;

    impl<'de> Visitor<'de> for ActionsVisitor {
      type Value = ActionAliases;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table of action alias lists")
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut actions = Vec::new();
        while let Some((action, aliases)) = map.next_entry::<String, Vec<String>>()? {
          actions.push((action, aliases));
        }
        Ok(ActionAliases(actions))
      }
    }

    deserializer.deserialize_map(ActionsVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table(toml: &str) -> AliasTable {
    toml::from_str::<Wrapper>(toml).expect("parse").aliases
  }

  #[derive(Deserialize)]
  struct Wrapper {
    aliases: AliasTable,
  }

  #[test]
  fn list_alias_resolves_to_canonical_page() {
    let table = table("[aliases]\nblog = [\"weblog\", \"news\"]\n");
    assert_eq!(table.resolve_page_alias("weblog"), "blog");
    assert_eq!(table.resolve_page_alias("news"), "blog");
  }

  #[test]
  fn undeclared_page_is_identity() {
    let table = table("[aliases]\nblog = [\"weblog\"]\n");
    assert_eq!(table.resolve_page_alias("shop"), "shop");
  }

  #[test]
  fn canonical_page_itself_is_identity() {
    let table = table("[aliases]\nblog = [\"weblog\"]\n");
    assert_eq!(table.resolve_page_alias("blog"), "blog");
  }

  #[test]
  fn structured_entry_matches_on_keys() {
    let toml = "[aliases.portfolio]\nwork = true\nprojects = true\n\
                [aliases.portfolio.actions]\ndefault = [\"list\"]\n";
    let table = table(toml);
    assert_eq!(table.resolve_page_alias("work"), "portfolio");
    assert_eq!(table.resolve_page_alias("projects"), "portfolio");
  }

  #[test]
  fn actions_key_is_not_a_page_alias() {
    let toml = "[aliases.portfolio.actions]\ndefault = [\"list\"]\n";
    let table = table(toml);
    assert_eq!(table.resolve_page_alias("actions"), "actions");
  }

  #[test]
  fn action_alias_resolves_across_pages() {
    let toml = "[aliases.blog.actions]\ndefault = [\"list\", \"overview\"]\n\
                [aliases.shop.actions]\ncheckout = [\"buy\"]\n";
    let table = table(toml);
    assert_eq!(table.resolve_action_alias("list"), "default");
    assert_eq!(table.resolve_action_alias("overview"), "default");
    assert_eq!(table.resolve_action_alias("buy"), "checkout");
  }

  #[test]
  fn undeclared_action_is_identity() {
    let toml = "[aliases.blog.actions]\ndefault = [\"list\"]\n";
    assert_eq!(table(toml).resolve_action_alias("archive"), "archive");
  }

  #[test]
  fn declaration_order_wins() {
    let toml = "[aliases]\nfirst = [\"shared\"]\nsecond = [\"shared\"]\n";
    assert_eq!(table(toml).resolve_page_alias("shared"), "first");
  }

  #[test]
  fn resolution_is_idempotent() {
    let table = table("[aliases]\nblog = [\"weblog\"]\n");
    let once = table.resolve_page_alias("weblog");
    let twice = table.resolve_page_alias(&once);
    // "weblog" -> "blog", and "blog" is already canonical
    assert_eq!(once, "blog");
    assert_eq!(twice, "blog");
    assert_eq!(table.resolve_action_alias("x"), table.resolve_action_alias("x"));
  }

  #[test]
  fn empty_table() {
    let table = AliasTable::default();
    assert!(table.is_empty());
    assert_eq!(table.resolve_page_alias("home"), "home");
    assert_eq!(table.resolve_action_alias("default"), "default");
  }
}
