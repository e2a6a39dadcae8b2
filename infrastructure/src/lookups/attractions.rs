//! Overpass attractions client.

use super::LookupError;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use tourmate_domain::Coordinates;
use tracing::debug;

pub const OVERPASS_URL: &str = "https://overpass-api.de";

// Overpass queries can take a while; the QL timeout below is 25s.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Finds named tourist attractions around a coordinate via the Overpass
/// API. The query over-fetches because OSM elements are often unnamed or
/// duplicated across node/way/relation; the caller-facing cap is applied
/// after filtering.
pub struct AttractionsClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: Option<OverpassTags>,
}

#[derive(Debug, Deserialize)]
struct OverpassTags {
    name: Option<String>,
}

impl AttractionsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Returns up to `max` distinct attraction names within `radius_meters`
    /// of the coordinate. An empty list is a valid answer.
    pub async fn nearby(
        &self,
        at: Coordinates,
        radius_meters: u32,
        max: usize,
    ) -> Result<Vec<String>, LookupError> {
        let url = format!("{}/api/interpreter", self.base_url);
        let query = overpass_query(at, radius_meters, max);
        debug!("Querying attractions around {:.4},{:.4}", at.lat, at.lon);
        let response = self
            .client
            .post(&url)
            .form(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let payload: OverpassResponse = response.json().await?;
        Ok(collect_names(payload.elements, max))
    }
}

fn overpass_query(at: Coordinates, radius_meters: u32, max: usize) -> String {
    // Fetch three times the cap so that unnamed and duplicate elements do
    // not starve the result list.
    format!(
        "[out:json][timeout:25];\n\
         (\n\
           node[\"tourism\"](around:{radius},{lat},{lon});\n\
           way[\"tourism\"](around:{radius},{lat},{lon});\n\
           relation[\"tourism\"](around:{radius},{lat},{lon});\n\
         );\n\
         out center tags {limit};",
        radius = radius_meters,
        lat = at.lat,
        lon = at.lon,
        limit = max * 3,
    )
}

fn collect_names(elements: Vec<OverpassElement>, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for element in elements {
        let Some(name) = element.tags.and_then(|t| t.name) else {
            continue;
        };
        let name = name.trim().to_string();
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        names.push(name);
        if names.len() == max {
            break;
        }
    }
    names
}
