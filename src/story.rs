use super::*;

/// A story item together with the descendant index one collection run
/// produced for it. The story itself is never a key in its own index.
#[derive(Clone, Debug)]
pub struct Story {
  pub comments: DescendantIndex,
  pub item: Item,
}

impl Story {
  pub fn is_top_level_comment(&self, comment: &Item) -> bool {
    comment.parent == Some(self.item.id)
  }

  /// All indexed ids sorted by traversal position. Errors with
  /// `Error::UnsetPosition` when any entry has no position yet, so call
  /// `set_comment_positions` first.
  pub fn ordered_comment_ids(&self) -> Result<Vec<u64>> {
    let mut ordered = Vec::with_capacity(self.comments.len());

    for (id, comment) in &self.comments {
      let Some(position) = comment.position else {
        return Err(Error::UnsetPosition { id: *id });
      };

      ordered.push((position, *id));
    }

    ordered.sort_unstable();

    Ok(ordered.into_iter().map(|(_, id)| id).collect())
  }

  /// Walks the story's kid lists depth first and stamps every reachable
  /// comment with its preorder position, starting at zero. Kids missing from
  /// the index are skipped together with their subtrees.
  pub fn set_comment_positions(&mut self) {
    let mut stack = Vec::new();

    if let Some(kids) = &self.item.kids {
      stack.extend(kids.iter().rev().copied());
    }

    let mut position = 0;

    while let Some(id) = stack.pop() {
      let Some(comment) = self.comments.get_mut(&id) else {
        continue;
      };

      comment.position = Some(position);

      position += 1;

      if let Some(kids) = &comment.kids {
        stack.extend(kids.iter().rev().copied());
      }
    }
  }
}
