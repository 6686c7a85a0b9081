use super::*;

/// Per-item hook run by the collector on every fetched item before it is
/// indexed. The hook may rewrite the item in place. `Ok` keeps the item and
/// expands its kids; an `Err` veto always excludes the item from the index,
/// and the veto decides whether the walk still continues into its kids.
pub trait ItemProcessor: Sync {
  fn process(&self, item: &mut Item) -> Result<(), Veto>;
}

impl<F> ItemProcessor for F
where
  F: Fn(&mut Item) -> Result<(), Veto> + Sync,
{
  fn process(&self, item: &mut Item) -> Result<(), Veto> {
    self(item)
  }
}

/// Why a processor rejected an item. A subtree veto also drops everything
/// below the item; a node veto drops only the item itself while its kids are
/// still fetched and indexed.
#[derive(Clone, Debug)]
pub struct Veto {
  pub prune: bool,
  pub reason: String,
}

impl fmt::Display for Veto {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.reason)
  }
}

impl Veto {
  pub fn node(reason: impl Into<String>) -> Self {
    Self {
      prune: false,
      reason: reason.into(),
    }
  }

  pub fn subtree(reason: impl Into<String>) -> Self {
    Self {
      prune: true,
      reason: reason.into(),
    }
  }
}
