use super::*;

/// Recently changed items and profiles, as reported by the updates endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Updates {
  #[serde(default)]
  pub items: Vec<u64>,
  #[serde(default)]
  pub profiles: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_items_and_profiles() {
    let updates = serde_json::from_str::<Updates>(
      r#"{"items": [8863, 192327], "profiles": ["pg", "dang"]}"#,
    )
    .unwrap();

    assert_eq!(updates.items, vec![8863, 192_327]);
    assert_eq!(updates.profiles, vec!["pg", "dang"]);
  }

  #[test]
  fn missing_lists_default_to_empty() {
    let updates = serde_json::from_str::<Updates>("{}").unwrap();

    assert!(updates.items.is_empty());
    assert!(updates.profiles.is_empty());
  }
}
