use crate::domain::Location;
use crate::locations::locations_response::LocationsResponse;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

#[instrument(skip(client))]
pub async fn fetch_locations(client: &Client, url: &str) -> Result<Vec<Location>, LocationsError> {
    info!("🌍 Retrieving locations...");

    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    let locations_response = serde_json::from_str::<LocationsResponse<Location>>(&body)?;

    info!("🌍 Retrieving locations... OK, {} found", locations_response.data.len());
    Ok(locations_response.data)
}

#[derive(Error, Debug)]
pub enum LocationsError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected locations payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test(tokio::test)]
    async fn fetch_locations_returns_the_listed_locations() -> Result<(), LocationsError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/countries/positions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/positions_response.json"))
            .create_async()
            .await;

        let locations = fetch_locations(&Client::new(), &format!("{}/countries/positions", server.url())).await?;

        mock.assert_async().await;
        assert_eq!(locations.len(), 5);
        assert_eq!(locations[0], Location::new("Afghanistan", 33.0, 65.0));
        assert_eq!(locations[3], Location::new("Netherlands", 52.5, 5.75));
        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_locations_fails_on_an_error_status() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/").with_status(503).create_async().await;

        let result = fetch_locations(&Client::new(), &server.url()).await;

        assert!(matches!(result, Err(LocationsError::Request(_))), "expected a request error, got {:?}", result);
    }

    #[test(tokio::test)]
    async fn fetch_locations_fails_on_an_unexpected_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{ "error": true, "msg": "not found" }"#)
            .create_async()
            .await;

        let result = fetch_locations(&Client::new(), &server.url()).await;

        assert!(matches!(result, Err(LocationsError::Decode(_))), "expected a decode error, got {:?}", result);
    }
}
