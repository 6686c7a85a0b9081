use super::*;

#[derive(Clone)]
pub struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    let client = reqwest::Client::builder()
      .user_agent(Self::USER_AGENT)
      .build()
      .unwrap_or_default();

    Self { client }
  }
}

#[async_trait]
impl ItemFetcher for Client {
  async fn fetch_item(&self, id: u64) -> Result<Option<Item>> {
    self.item(id).await
  }
}

impl Client {
  const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  const USER_AGENT: &str = concat!("hn-api/", env!("CARGO_PKG_VERSION"));

  pub async fn ask_story_ids(&self) -> Result<Vec<u64>> {
    self.ids("askstories").await
  }

  pub async fn best_story_ids(&self) -> Result<Vec<u64>> {
    self.ids("beststories").await
  }

  /// Retrieves the whole comment subtree below `root`, see
  /// [`crate::fetch_all_descendants`].
  pub async fn fetch_all_descendants(
    &self,
    root: &Item,
    processor: Option<&dyn ItemProcessor>,
    cancel: Option<&CancelToken>,
  ) -> Result<DescendantIndex> {
    collector::fetch_all_descendants(self, root, processor, cancel).await
  }

  async fn ids(&self, endpoint: &str) -> Result<Vec<u64>> {
    Ok(
      self
        .client
        .get(format!("{}/{endpoint}.json", Self::API_BASE_URL))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<u64>>()
        .await?,
    )
  }

  pub async fn item(&self, id: u64) -> Result<Option<Item>> {
    Ok(
      self
        .client
        .get(format!("{}/item/{id}.json", Self::API_BASE_URL))
        .send()
        .await?
        .error_for_status()?
        .json::<Option<Item>>()
        .await?,
    )
  }

  pub async fn job_story_ids(&self) -> Result<Vec<u64>> {
    self.ids("jobstories").await
  }

  pub async fn max_item_id(&self) -> Result<Option<u64>> {
    Ok(
      self
        .client
        .get(format!("{}/maxitem.json", Self::API_BASE_URL))
        .send()
        .await?
        .error_for_status()?
        .json::<Option<u64>>()
        .await?,
    )
  }

  pub async fn new_story_ids(&self) -> Result<Vec<u64>> {
    self.ids("newstories").await
  }

  pub async fn show_story_ids(&self) -> Result<Vec<u64>> {
    self.ids("showstories").await
  }

  pub async fn top_story_ids(&self) -> Result<Vec<u64>> {
    self.ids("topstories").await
  }

  pub async fn updates(&self) -> Result<Updates> {
    Ok(
      self
        .client
        .get(format!("{}/updates.json", Self::API_BASE_URL))
        .send()
        .await?
        .error_for_status()?
        .json::<Updates>()
        .await?,
    )
  }

  pub async fn user(&self, username: &str) -> Result<Option<User>> {
    Ok(
      self
        .client
        .get(format!("{}/user/{username}.json", Self::API_BASE_URL))
        .send()
        .await?
        .error_for_status()?
        .json::<Option<User>>()
        .await?,
    )
  }
}
