use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, info, spotify, types::PkceToken};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    info!(
        "Waiting for Spotify to redirect to {}",
        config::spotify_redirect_uri()
    );
    spotify::auth::auth(shared_state).await;
}
