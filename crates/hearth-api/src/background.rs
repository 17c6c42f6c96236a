//! Site-wide background image.
//!
//! Reading the active background is open to any authenticated user; changing
//! it is an admin operation (see [`crate::admin`]).

use hearth_shared::BackgroundImage;

use crate::client::ApiClient;
use crate::{ApiError, Result};

/// The currently active background, or `None` when the site has none set.
pub async fn get_active(api: &ApiClient) -> Result<Option<BackgroundImage>> {
    match api.get_json("/api/background").await {
        Ok(background) => Ok(Some(background)),
        Err(ApiError::NotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}
