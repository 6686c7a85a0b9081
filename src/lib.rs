//! Client library for the Hacker News API, built around a concurrent
//! whole-thread comment fetcher.
//!
//! A story's comments form an n-ary tree reachable only one item fetch at a
//! time: every item carries the ids of its direct kids and nothing else.
//! [`fetch_all_descendants`] drains that tree with bounded concurrency and
//! returns an id-keyed index of every comment; [`Story`] then reconstructs
//! the depth-first display order from the index.
//!
//! ```no_run
//! use hn_api::{Client, Story, processors};
//!
//! # async fn run() -> hn_api::Result {
//! let client = Client::default();
//!
//! let ids = client.top_story_ids().await?;
//!
//! if let Some(item) = client.item(ids[0]).await? {
//!   let unescape = processors::unescape_html();
//!
//!   let comments = client
//!     .fetch_all_descendants(&item, Some(&unescape), None)
//!     .await?;
//!
//!   let mut story = Story { comments, item };
//!
//!   story.set_comment_positions();
//!
//!   for id in story.ordered_comment_ids()? {
//!     println!("{:?}", story.comments[&id].text);
//!   }
//! }
//! # Ok(())
//! # }
//! ```

use {
  async_trait::async_trait,
  futures::{
    future,
    stream::{FuturesUnordered, StreamExt},
  },
  log::{debug, warn},
  serde::Deserialize,
  std::{
    collections::{HashMap, VecDeque},
    fmt,
    sync::Arc,
  },
  thiserror::Error,
  tokio::sync::watch,
};

mod cancel;
mod client;
mod collector;
mod descendant_index;
mod error;
mod fetcher;
mod item;
mod processor;
pub mod processors;
mod story;
mod update;
mod user;

pub use crate::{
  cancel::CancelToken,
  client::Client,
  collector::fetch_all_descendants,
  descendant_index::DescendantIndex,
  error::Error,
  fetcher::ItemFetcher,
  item::Item,
  processor::{ItemProcessor, Veto},
  story::Story,
  update::Updates,
  user::User,
};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
