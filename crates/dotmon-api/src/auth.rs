// Session authentication
//
// `POST /login` with the account UID sets the `.ASPXFORMSAUTH` cookie.
// The UID is remembered so an expired session can be renewed without
// the caller noticing. Logout is local only; the API has no endpoint.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::{Client, parse_body};
use crate::error::Error;
use crate::models::{LoginRequest, ResponseBlock};

impl Client {
    /// Log in with the account UID.
    ///
    /// A non-2xx status or `"Success": false` is an authentication error.
    pub async fn login(&self, uid: &SecretString) -> Result<(), Error> {
        let url = self.endpoint("login")?;
        debug!("logging in at {url}");

        let body = serde_json::to_vec(&LoginRequest {
            uid: uid.expose_secret(),
        })?;
        let resp = self.send(Method::POST, url, Some(body)).await?;

        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;
        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status})"),
            });
        }

        match parse_body::<ResponseBlock>(&text) {
            Ok(Some(block)) if block.success => {}
            Ok(Some(block)) => {
                return Err(Error::Authentication {
                    message: format!("login rejected: {}", block.error_message()),
                });
            }
            Ok(None) => {
                return Err(Error::Authentication {
                    message: "login returned an empty response".into(),
                });
            }
            Err(e) => {
                return Err(Error::Authentication {
                    message: format!("unreadable login response: {e}"),
                });
            }
        }

        self.open_session(uid.clone());
        debug!("login successful");
        Ok(())
    }

    /// End the session and forget the UID. Further calls fail with
    /// [`Error::NotLoggedIn`] until `login` is called again.
    pub fn logout(&self) {
        self.close_session();
        debug!("logged out");
    }
}
