use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct User {
  pub about: Option<String>,
  pub created: Option<u64>,
  pub id: Option<String>,
  pub karma: Option<i64>,
  pub submitted: Option<Vec<u64>>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_profile_fields() {
    let user = serde_json::from_str::<User>(
      r#"{
        "id": "test",
        "created": 1173923446,
        "karma": 2937,
        "about": "A test user.",
        "submitted": [1, 2, 3]
      }"#,
    )
    .unwrap();

    assert_eq!(user.id.as_deref(), Some("test"));
    assert_eq!(user.created, Some(1_173_923_446));
    assert_eq!(user.karma, Some(2937));
    assert_eq!(user.about.as_deref(), Some("A test user."));
    assert_eq!(user.submitted, Some(vec![1, 2, 3]));
  }

  #[test]
  fn null_body_decodes_to_none() {
    assert!(serde_json::from_str::<Option<User>>("null").unwrap().is_none());
  }
}
