//! Stock processors for `fetch_all_descendants`. The filters are all node
//! vetoes: they drop the matching comment but keep walking into its replies.

use super::*;

pub fn filter_out_deleted() -> impl ItemProcessor {
  |item: &mut Item| -> Result<(), Veto> {
    if item.deleted.unwrap_or(false) {
      return Err(Veto::node("deleted item"));
    }

    Ok(())
  }
}

pub fn filter_out_users(users: Vec<String>) -> impl ItemProcessor {
  move |item: &mut Item| -> Result<(), Veto> {
    if let Some(by) = &item.by
      && users.iter().any(|user| user == by)
    {
      return Err(Veto::node(format!("authored by {by}")));
    }

    Ok(())
  }
}

/// Drops comments whose text contains any of `words`, or whose title does
/// when `title_only` is set.
pub fn filter_out_words(
  words: Vec<String>,
  title_only: bool,
) -> impl ItemProcessor {
  move |item: &mut Item| -> Result<(), Veto> {
    let haystack = if title_only { &item.title } else { &item.text };

    if let Some(haystack) = haystack {
      let haystack = haystack.to_lowercase();

      for word in &words {
        if haystack.contains(&word.to_lowercase()) {
          return Err(Veto::node(format!("contains {word}")));
        }
      }
    }

    Ok(())
  }
}

/// Unescapes HTML entities in the comment text in place.
pub fn unescape_html() -> impl ItemProcessor {
  |item: &mut Item| -> Result<(), Veto> {
    if let Some(text) = &mut item.text {
      let decoded = html_escape::decode_html_entities(text.as_str());

      *text = decoded.into_owned();
    }

    Ok(())
  }
}
