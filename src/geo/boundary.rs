//! Geographic boundary dataset (country polygons as GeoJSON)

use std::collections::BTreeSet;
use std::future::Future;
use std::time::Duration;

use geojson::feature::Id;
use geojson::{FeatureCollection, GeoJson};
use log::info;
use rustc_hash::FxHashMap;

use crate::error::BoundaryError;

/// Country polygons with their key space indexed.
///
/// Feature `properties.name` values form the key space the choropleth joins
/// on; feature ids (ISO alpha-3 in the default dataset) back the code lookup.
#[derive(Debug, Clone)]
pub struct BoundaryDataset {
    collection: FeatureCollection,
    names: BTreeSet<String>,
    name_by_id: FxHashMap<String, String>,
}

impl BoundaryDataset {
    /// Parse and index a GeoJSON feature collection
    pub fn from_geojson_str(text: &str) -> Result<Self, BoundaryError> {
        let GeoJson::FeatureCollection(collection) = text.parse::<GeoJson>()? else {
            return Err(BoundaryError::NotFeatureCollection);
        };

        let mut names = BTreeSet::new();
        let mut name_by_id = FxHashMap::default();
        for feature in &collection.features {
            let Some(name) = feature.property("name").and_then(|v| v.as_str()) else {
                continue;
            };
            names.insert(name.to_string());
            let id = match &feature.id {
                Some(Id::String(id)) => Some(id.to_uppercase()),
                Some(Id::Number(n)) => Some(n.to_string()),
                None => None,
            };
            if let Some(id) = id {
                name_by_id.insert(id, name.to_string());
            }
        }

        Ok(Self {
            collection,
            names,
            name_by_id,
        })
    }

    /// Whether a canonical key names a feature
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Feature name for a feature id, case-insensitive
    #[must_use]
    pub fn name_for_id(&self, id: &str) -> Option<&str> {
        self.name_by_id
            .get(&id.to_uppercase())
            .map(String::as_str)
    }

    /// Every feature name, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }

    /// The collection re-serialized for embedding in documents
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.collection)
    }
}

/// Something that can supply the boundary dataset
pub trait BoundaryProvider {
    fn load(&self) -> impl Future<Output = Result<BoundaryDataset, BoundaryError>> + Send;
}

/// Downloads the boundary dataset over HTTP
#[derive(Debug, Clone)]
pub struct HttpBoundaryProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpBoundaryProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BoundaryError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| BoundaryError::Fetch {
                url: url.clone(),
                source,
            })?;
        Ok(Self { client, url })
    }
}

impl BoundaryProvider for HttpBoundaryProvider {
    async fn load(&self) -> Result<BoundaryDataset, BoundaryError> {
        let fetch = |source| BoundaryError::Fetch {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(fetch)?;
        let status = response.status();
        if !status.is_success() {
            return Err(BoundaryError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|source| BoundaryError::Fetch {
            url: self.url.clone(),
            source,
        })?;
        let dataset = BoundaryDataset::from_geojson_str(&text)?;
        info!("Loaded {} boundary features from {}", dataset.len(), self.url);
        Ok(dataset)
    }
}
