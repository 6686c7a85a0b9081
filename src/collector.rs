use super::*;

const MAX_IN_FLIGHT: usize = 16;

/// Retrieves every descendant of `root` by draining its kid ids with at most
/// 16 fetches in flight, feeding newly discovered kids back into the queue.
///
/// A fetch failure or a `null` item costs only the branch below it and is
/// never surfaced as the call's error. The optional processor runs on each
/// fetched item before it is indexed and may veto it, see [`ItemProcessor`].
/// Cancellation discards the partial index and returns `Error::Cancelled`.
///
/// A root without a kid list is rejected with `Error::RootWithoutKids`; a
/// root with an empty kid list yields an empty index.
pub async fn fetch_all_descendants<F>(
  fetcher: &F,
  root: &Item,
  processor: Option<&dyn ItemProcessor>,
  cancel: Option<&CancelToken>,
) -> Result<DescendantIndex>
where
  F: ItemFetcher,
{
  let Some(kids) = &root.kids else {
    return Err(Error::RootWithoutKids);
  };

  let capacity = root
    .descendants
    .and_then(|count| usize::try_from(count).ok())
    .unwrap_or(kids.len());

  let mut index = DescendantIndex::with_capacity(capacity);

  let mut pending = kids.iter().copied().collect::<VecDeque<u64>>();

  let mut in_flight = FuturesUnordered::new();

  // One obligation per enqueued kid id, discharged exactly once when that
  // id's outcome has been fully processed, kids included. Reaching zero is
  // the only way the drain loop ends: an empty queue alone proves nothing
  // while fetches are still in flight.
  let mut outstanding = pending.len();

  while outstanding > 0 {
    if let Some(token) = cancel
      && token.is_cancelled()
    {
      return Err(Error::Cancelled);
    }

    while in_flight.len() < MAX_IN_FLIGHT {
      let Some(id) = pending.pop_front() else {
        break;
      };

      in_flight.push(async move { (id, fetcher.fetch_item(id).await) });
    }

    tokio::select! {
      () = wait_for_cancel(cancel) => return Err(Error::Cancelled),
      Some((id, outcome)) = in_flight.next() => {
        match outcome {
          Ok(Some(mut item)) => {
            let verdict = match processor {
              Some(processor) => processor.process(&mut item),
              None => Ok(()),
            };

            match verdict {
              Ok(()) => {
                if let Some(kids) = &item.kids {
                  outstanding += kids.len();
                  pending.extend(kids.iter().copied());
                }

                index.insert(item.id, item);
              }
              Err(veto) => {
                debug!("item {id} vetoed: {veto}");

                if !veto.prune
                  && let Some(kids) = &item.kids
                {
                  outstanding += kids.len();
                  pending.extend(kids.iter().copied());
                }
              }
            }
          }
          Ok(None) => {}
          Err(error) => warn!("failed to fetch item {id}: {error}"),
        }

        outstanding -= 1;
      }
    }
  }

  Ok(index)
}

async fn wait_for_cancel(cancel: Option<&CancelToken>) {
  match cancel {
    Some(token) => token.cancelled().await,
    None => future::pending().await,
  }
}
