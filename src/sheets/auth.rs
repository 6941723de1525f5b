use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::SheetsError;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// The subset of a Google service-account JSON blob needed for the
/// JWT-bearer grant.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Signs an RS256 assertion with the service-account key and exchanges
/// it at the key's token endpoint for a short-lived access token.
pub async fn fetch_access_token(http: &Client, key: &ServiceAccountKey) -> Result<String, SheetsError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        iss: &key.client_email,
        scope: SHEETS_SCOPE,
        aud: &key.token_uri,
        iat: now,
        exp: now + 3600,
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    let assertion = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?;

    let params = [
        ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
        ("assertion", assertion.as_str()),
    ];
    let response = http.post(&key.token_uri).form(&params).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SheetsError::TokenExchange(format!("status {status}: {body}")));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| SheetsError::TokenExchange(format!("malformed token response: {e}")))?;
    Ok(token.access_token)
}
