use serde::de::DeserializeOwned;
use tracing::debug;

use super::*;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

impl AdminClient {
    pub(super) fn post_graphql<T: DeserializeOwned>(
        &self,
        label: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<GraphqlResponse<T>, TransportError> {
        debug!(label, endpoint = %self.endpoint(), "admin graphql request");
        let resp = self
            .client
            .post(self.endpoint())
            .header(ACCESS_TOKEN_HEADER, &self.token)
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .map_err(|err| TransportError::Request {
                label: label.to_string(),
                message: err.to_string(),
            })?;

        let resp = ensure_ok(resp, label)?;
        resp.json::<GraphqlResponse<T>>()
            .map_err(|err| TransportError::Decode {
                label: label.to_string(),
                message: err.to_string(),
            })
    }
}

fn ensure_ok(
    resp: reqwest::blocking::Response,
    label: &str,
) -> Result<reqwest::blocking::Response, TransportError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(TransportError::Unauthorized {
            label: label.to_string(),
        });
    }
    if status == reqwest::StatusCode::FORBIDDEN {
        return Err(TransportError::Forbidden {
            label: label.to_string(),
        });
    }
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(TransportError::Status {
            label: label.to_string(),
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        });
    }
    Ok(resp)
}
