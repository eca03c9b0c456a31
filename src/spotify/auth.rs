use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    spotify::ApiError,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

/// Runs the OAuth 2.0 PKCE authorization flow against Spotify.
///
/// 1. Generates a code verifier and its S256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the browser
/// 4. Waits up to 60 seconds for the callback to deliver a token
/// 5. Persists the token for later runs
///
/// The requested scope must allow creating and modifying playlists, see
/// [`config::spotify_scope`].
///
/// Terminates the program with an error message when the client ID is not
/// configured, the flow times out or the token cannot be saved.
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let verifier = utils::generate_code_verifier();
    let url = match authorize_url(&client_id, &utils::generate_code_challenge(&verifier)) {
        Ok(url) => url,
        Err(e) => error!("Invalid SPOTIFY_API_AUTH_URL: {}", e),
    };

    // the callback handler needs the verifier before the browser comes back
    *shared_state.lock().await = Some(PkceToken {
        code_verifier: verifier,
        token: None,
    });

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(url.as_str()).is_err() {
        warning!("Could not open a browser. Open this URL to log in:\n{}", url);
    }

    let Some(token) = wait_for_token(&shared_state, LOGIN_TIMEOUT).await else {
        error!("No login within {} seconds, giving up.", LOGIN_TIMEOUT.as_secs());
    };

    if let Err(e) = TokenManager::new(token).persist().await {
        error!("Cannot write token cache: {}", e);
    }
    success!("Logged in to Spotify.");
}

const LOGIN_TIMEOUT: Duration = Duration::from_secs(60);

/// Authorization URL with the PKCE challenge and the playlist scopes.
fn authorize_url(client_id: &str, challenge: &str) -> Result<Url, String> {
    let redirect_uri = config::spotify_redirect_uri();
    let scope = config::spotify_scope();

    Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("code_challenge", challenge),
            ("code_challenge_method", "S256"),
            ("scope", scope.as_str()),
        ],
    )
    .map_err(|e| e.to_string())
}

/// Checks the shared state every second until the callback handler has
/// stored a token or `timeout` has passed.
async fn wait_for_token(
    shared_state: &Mutex<Option<PkceToken>>,
    timeout: Duration,
) -> Option<Token> {
    let poll = async {
        let mut ticks = tokio::time::interval(Duration::from_secs(1));
        loop {
            ticks.tick().await;
            if let Some(token) = shared_state
                .lock()
                .await
                .as_ref()
                .and_then(|pkce| pkce.token.clone())
            {
                return token;
            }
        }
    };

    tokio::time::timeout(timeout, poll).await.ok()
}

/// Exchanges a refresh token for a new access token.
///
/// The returned token has an empty `refresh_token` when Spotify did not
/// rotate it; callers keep their previous one in that case.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json)
}

/// Exchanges an authorization code for a token using the PKCE verifier that
/// was generated when the flow started.
///
/// # Errors
///
/// - `ApiError::Auth` when the client ID is not configured
/// - `ApiError::Http` for network failures and rejected codes
/// - `ApiError::Unexpected` when the response lacks an access token
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, ApiError> {
    let client_id = config::spotify_client_id().map_err(ApiError::Auth)?;
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    token_from_json(&json).map_err(ApiError::Unexpected)
}

fn token_from_json(json: &Value) -> Result<Token, String> {
    let access_token = json["access_token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "token response has no access_token".to_string())?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_from_json_reads_all_fields() {
        let token = token_from_json(&json!({
            "access_token": "BQC",
            "refresh_token": "AQA",
            "scope": "playlist-modify-public",
            "expires_in": 1800
        }))
        .unwrap();

        assert_eq!(token.access_token, "BQC");
        assert_eq!(token.refresh_token, "AQA");
        assert_eq!(token.scope, "playlist-modify-public");
        assert_eq!(token.expires_in, 1800);
    }

    #[test]
    fn token_from_json_defaults_optional_fields() {
        let token = token_from_json(&json!({ "access_token": "BQC" })).unwrap();
        assert!(token.refresh_token.is_empty());
        assert_eq!(token.expires_in, 3600);
    }

    #[test]
    fn token_from_json_requires_access_token() {
        assert!(token_from_json(&json!({ "error": "invalid_grant" })).is_err());
    }

    #[test]
    fn authorize_url_carries_challenge_and_scope() {
        let url = authorize_url("client", "challenge").unwrap();
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(params.contains(&("client_id".to_string(), "client".to_string())));
        assert!(params.contains(&("code_challenge".to_string(), "challenge".to_string())));
        assert!(params.contains(&("code_challenge_method".to_string(), "S256".to_string())));
        assert!(
            params
                .iter()
                .any(|(k, v)| k == "scope" && v.contains("playlist-modify-private"))
        );
    }

    #[tokio::test]
    async fn wait_for_token_returns_stored_token() {
        let token = token_from_json(&json!({ "access_token": "BQC" })).unwrap();
        let state = Mutex::new(Some(PkceToken {
            code_verifier: "v".to_string(),
            token: Some(token),
        }));

        let found = wait_for_token(&state, Duration::from_secs(5)).await;
        assert_eq!(found.map(|t| t.access_token), Some("BQC".to_string()));
    }

    #[tokio::test]
    async fn wait_for_token_times_out() {
        let state = Mutex::new(None);
        assert!(wait_for_token(&state, Duration::from_millis(50)).await.is_none());
    }
}
