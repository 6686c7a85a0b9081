use super::*;

/// A single node in the content graph: a story, comment, job, poll, or poll
/// option. Everything but the id may be absent on the wire. `position` is
/// never on the wire at all, it is stamped by `Story::set_comment_positions`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Item {
  pub by: Option<String>,
  pub dead: Option<bool>,
  pub deleted: Option<bool>,
  pub descendants: Option<u64>,
  pub id: u64,
  pub kids: Option<Vec<u64>>,
  pub parent: Option<u64>,
  pub parts: Option<Vec<u64>>,
  pub poll: Option<u64>,
  #[serde(skip)]
  pub position: Option<u64>,
  pub score: Option<u64>,
  pub text: Option<String>,
  pub time: Option<u64>,
  pub title: Option<String>,
  pub r#type: Option<String>,
  pub url: Option<String>,
}

impl Item {
  pub fn is_comment(&self) -> bool {
    self.r#type.as_deref() == Some("comment")
  }

  pub fn is_story(&self) -> bool {
    self.r#type.as_deref() == Some("story")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_story_fields() {
    let item = serde_json::from_str::<Item>(
      r#"{
        "id": 1,
        "type": "story",
        "by": "tester",
        "kids": [2, 3, 4],
        "descendants": 6,
        "score": 42,
        "title": "test title",
        "url": "http://example.com"
      }"#,
    )
    .unwrap();

    assert_eq!(item.id, 1);
    assert_eq!(item.r#type.as_deref(), Some("story"));
    assert_eq!(item.by.as_deref(), Some("tester"));
    assert_eq!(item.kids, Some(vec![2, 3, 4]));
    assert_eq!(item.descendants, Some(6));
    assert_eq!(item.score, Some(42));
    assert_eq!(item.title.as_deref(), Some("test title"));
    assert_eq!(item.url.as_deref(), Some("http://example.com"));
    assert!(item.is_story());
    assert!(!item.is_comment());
  }

  #[test]
  fn missing_fields_deserialize_to_none() {
    let item =
      serde_json::from_str::<Item>(r#"{"id": 7, "type": "comment"}"#).unwrap();

    assert_eq!(item.id, 7);
    assert!(item.is_comment());
    assert_eq!(item.kids, None);
    assert_eq!(item.parent, None);
    assert_eq!(item.text, None);
  }

  #[test]
  fn null_body_decodes_to_none() {
    assert!(serde_json::from_str::<Option<Item>>("null").unwrap().is_none());
  }

  #[test]
  fn position_is_not_part_of_the_wire_format() {
    let item = serde_json::from_str::<Item>(
      r#"{"id": 1, "type": "comment", "position": 9}"#,
    )
    .unwrap();

    assert_eq!(item.position, None);
  }
}
