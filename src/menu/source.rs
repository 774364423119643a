use anyhow::{Context, Result};
use log::{error, info};
use std::path::PathBuf;

use super::catalog::{FoodItem, parse_catalog};
use super::request::ChatRequest;

/// Something that can answer a catalog request with a raw response body
pub trait FoodSource {
    fn fetch(&self, request: &ChatRequest) -> Result<String>;
}

/// Serves a previously captured response body from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FoodSource for FileSource {
    fn fetch(&self, _request: &ChatRequest) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))
    }
}

/// Fetch and decode the catalog. Any failure is logged once and yields an
/// empty list; there is no retry.
pub fn load_foods(source: &dyn FoodSource, request: &ChatRequest) -> Vec<FoodItem> {
    let result = source
        .fetch(request)
        .and_then(|body| parse_catalog(&body));

    match result {
        Ok(items) => {
            info!("loaded {} food items", items.len());
            items
        }
        Err(err) => {
            error!("Error fetching food list: {err:#}");
            Vec::new()
        }
    }
}
