use super::*;

/// Source of single items by id. `Ok(None)` means the remote has no item for
/// that id (the API answers JSON `null` for deleted and unassigned ids) and
/// is never an error.
#[async_trait]
pub trait ItemFetcher: Send + Sync {
  async fn fetch_item(&self, id: u64) -> Result<Option<Item>>;

  /// Follows parent links upward from `comment` until it reaches the story
  /// the comment belongs to. `Ok(None)` when the chain dead-ends before a
  /// story item.
  async fn story_id_from_comment(&self, comment: &Item) -> Result<Option<u64>> {
    if !comment.is_comment() {
      return Err(Error::InvalidItem("item is not a comment".into()));
    }

    let mut current = comment.clone();

    loop {
      if current.is_story() {
        return Ok(Some(current.id));
      }

      let Some(parent) = current.parent else {
        return Ok(None);
      };

      match self.fetch_item(parent).await? {
        Some(item) => current = item,
        None => return Ok(None),
      }
    }
  }
}
