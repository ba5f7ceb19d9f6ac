use tokio::{runtime::Handle, task::JoinHandle};
use trippick_core::{Destination, NewSwipe, SwipeEvent};
use url::Url;

use super::{LikedListCache, SwipeSink};
use crate::SinkError;

/// Sink posting swipes to a remote `TripPick` API.
///
/// Each submission runs on its own Tokio task. Failed writes are logged and
/// dropped; successful ones invalidate the attached [`LikedListCache`].
#[derive(Debug, Clone)]
pub struct HttpSwipeSink {
    client: reqwest::Client,
    base: Url,
    cache: Option<LikedListCache>,
    runtime: Handle,
}

impl HttpSwipeSink {
    /// Sink for the API rooted at `base`, e.g. `http://localhost:5000`.
    ///
    /// # Errors
    /// Returns [`SinkError::BaseUrl`] or [`SinkError::CannotBeABase`] for an
    /// unusable address and [`SinkError::NoRuntime`] outside a Tokio runtime.
    pub fn new(base: &str) -> Result<Self, SinkError> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(SinkError::CannotBeABase { url: base.into() });
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
            cache: None,
            runtime: Handle::try_current()?,
        })
    }

    /// Invalidate `cache` after every acknowledged write.
    #[must_use]
    pub fn with_cache(mut self, cache: LikedListCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Attached cache, if any.
    #[must_use]
    pub const fn cache(&self) -> Option<&LikedListCache> {
        self.cache.as_ref()
    }

    /// Post `swipe` on a background task. Awaiting the handle is optional;
    /// the task never fails.
    pub fn send(&self, swipe: NewSwipe) -> JoinHandle<()> {
        let client = self.client.clone();
        let endpoint = self.base.join("api/swipe");
        let cache = self.cache.clone();
        self.runtime.spawn(async move {
            let destination_id = swipe.destination_id;
            let result = match endpoint {
                Ok(endpoint) => post_swipe(&client, endpoint, &swipe).await,
                Err(err) => Err(SinkError::BaseUrl(err)),
            };
            match result {
                Ok(event) => {
                    log::debug!("swipe {} acknowledged for destination {destination_id}", event.id);
                    if let Some(cache) = cache {
                        cache.invalidate();
                    }
                }
                Err(err) => log::warn!("dropping swipe for destination {destination_id}: {err}"),
            }
        })
    }

    /// Liked destinations of `session_id`, served from the cache when fresh.
    ///
    /// A fetched list is cached only if no write was acknowledged while the
    /// request was in flight.
    ///
    /// # Errors
    /// Returns [`SinkError::Request`] when the API cannot be reached or
    /// answers with an error status.
    pub async fn liked(&self, session_id: &str) -> Result<Vec<Destination>, SinkError> {
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(session_id)) {
            return Ok(cached);
        }
        let generation = self.cache.as_ref().map(LikedListCache::generation);
        let url = self.liked_url(session_id)?;
        let destinations: Vec<Destination> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if let (Some(cache), Some(generation)) = (&self.cache, generation)
            && !cache.store_if(session_id, generation, destinations.clone())
        {
            log::debug!("liked list for {session_id} went stale during fetch");
        }
        Ok(destinations)
    }

    fn liked_url(&self, session_id: &str) -> Result<Url, SinkError> {
        let mut url = self.base.join("api/liked/")?;
        url.path_segments_mut()
            .map_err(|()| SinkError::CannotBeABase {
                url: self.base.to_string(),
            })?
            .pop_if_empty()
            .push(session_id);
        Ok(url)
    }
}

impl SwipeSink for HttpSwipeSink {
    fn submit(&self, swipe: NewSwipe) {
        drop(self.send(swipe));
    }
}

async fn post_swipe(
    client: &reqwest::Client,
    endpoint: Url,
    swipe: &NewSwipe,
) -> Result<SwipeEvent, SinkError> {
    let event = client
        .post(endpoint)
        .json(swipe)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(event)
}
