use crate::domain::model::{Coordinate, CoordinateMap};
use crate::domain::ports::CoordinateResolver;
use crate::utils::error::{LocatorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolver backed by the postcodes.io bulk lookup endpoint.
/// One POST resolves a whole batch of postcodes; entries the service
/// cannot resolve come back with a null result and are dropped here.
#[derive(Debug, Clone)]
pub struct PostcodesIoResolver {
    bulk_postcodes_url: String,
    client: Client,
}

#[derive(Serialize)]
struct BulkRequest<'a> {
    postcodes: &'a [String],
}

#[derive(Deserialize)]
struct BulkResponse {
    result: Vec<BulkEntry>,
}

#[derive(Deserialize)]
struct BulkEntry {
    query: String,
    result: Option<ResolvedPostcode>,
}

#[derive(Deserialize)]
struct ResolvedPostcode {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PostcodesIoResolver {
    pub fn new(bulk_postcodes_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            bulk_postcodes_url: bulk_postcodes_url.into(),
            client,
        })
    }
}

#[async_trait]
impl CoordinateResolver for PostcodesIoResolver {
    async fn resolve(&self, postcodes: &[String]) -> Result<CoordinateMap> {
        tracing::debug!(
            "Resolving {} postcodes via: {}",
            postcodes.len(),
            self.bulk_postcodes_url
        );

        let response = self
            .client
            .post(&self.bulk_postcodes_url)
            .json(&BulkRequest { postcodes })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Resolver response status: {}", status);
        if !status.is_success() {
            return Err(LocatorError::ResolverStatusError {
                status: status.as_u16(),
            });
        }

        let body: BulkResponse = response.json().await?;

        let mut map = CoordinateMap::new();
        for entry in body.result {
            // Lat and long must both be present or the entry is treated
            // as unresolved; postcodes.io can return partial positions
            // for terminated postcodes.
            if let Some(ResolvedPostcode {
                latitude: Some(lat),
                longitude: Some(long),
            }) = entry.result
            {
                map.insert(entry.query, Coordinate { lat, long });
            }
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn resolver_for(server: &MockServer) -> PostcodesIoResolver {
        PostcodesIoResolver::new(server.url("/postcodes"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_maps_postcodes_to_coordinates() {
        let server = MockServer::start();
        let postcodes = vec!["CM20 2SX".to_string(), "EN9 3YW".to_string()];

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/postcodes")
                .json_body(serde_json::json!({"postcodes": ["CM20 2SX", "EN9 3YW"]}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": 200,
                    "result": [
                        {
                            "query": "CM20 2SX",
                            "result": {"latitude": 51.785161, "longitude": 0.121998}
                        },
                        {
                            "query": "EN9 3YW",
                            "result": {"latitude": 51.677378, "longitude": 0.001689}
                        }
                    ]
                }));
        });

        let resolver = resolver_for(&server);
        let map = resolver.resolve(&postcodes).await.unwrap();

        api_mock.assert();
        assert_eq!(map.len(), 2);
        assert_eq!(map["CM20 2SX"].lat, 51.785161);
        assert_eq!(map["EN9 3YW"].long, 0.001689);
    }

    #[tokio::test]
    async fn test_resolve_drops_unresolved_postcodes() {
        let server = MockServer::start();
        let postcodes = vec!["CM20 2SX".to_string(), "ZZ1 1ZZ".to_string()];

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/postcodes");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": 200,
                    "result": [
                        {
                            "query": "CM20 2SX",
                            "result": {"latitude": 51.785161, "longitude": 0.121998}
                        },
                        {"query": "ZZ1 1ZZ", "result": null}
                    ]
                }));
        });

        let resolver = resolver_for(&server);
        let map = resolver.resolve(&postcodes).await.unwrap();

        api_mock.assert();
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("ZZ1 1ZZ"));
    }

    #[tokio::test]
    async fn test_resolve_drops_partial_coordinates() {
        let server = MockServer::start();
        let postcodes = vec!["CM20 2SX".to_string()];

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/postcodes");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": 200,
                    "result": [
                        {"query": "CM20 2SX", "result": {"latitude": 51.785161, "longitude": null}}
                    ]
                }));
        });

        let resolver = resolver_for(&server);
        let map = resolver.resolve(&postcodes).await.unwrap();

        api_mock.assert();
        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_server_error_is_an_error() {
        let server = MockServer::start();
        let postcodes = vec!["CM20 2SX".to_string()];

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/postcodes");
            then.status(500);
        });

        let resolver = resolver_for(&server);
        let err = resolver.resolve(&postcodes).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(
            err,
            LocatorError::ResolverStatusError { status: 500 }
        ));
    }
}
