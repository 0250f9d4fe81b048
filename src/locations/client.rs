use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client() -> Result<Client, ClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let client = Client::builder().user_agent(user_agent).default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_client_asks_for_json() -> Result<(), ClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("accept", "application/json")
            .match_header("user-agent", mockito::Matcher::Regex("^location-search/".to_string()))
            .create_async()
            .await;

        let client = new_client()?;
        client.get(format!("{}{}", server.url(), "/")).send().await?;

        mock.assert_async().await;
        Ok(())
    }
}
