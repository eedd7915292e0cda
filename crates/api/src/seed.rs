//! Initial dish and order data loaded at start-up.

use std::path::{Path, PathBuf};

use domain::{Dish, Order};
use serde::de::DeserializeOwned;
use thiserror::Error;

const DISHES_JSON: &str = include_str!("../data/dishes.json");
const ORDERS_JSON: &str = include_str!("../data/orders.json");

/// Errors that can occur while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A seed document is not a JSON array of the expected resource.
    #[error("failed to parse {name} seed data: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The collections a process starts with.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Returns the seed data compiled into the binary.
    pub fn embedded() -> Result<Self, SeedError> {
        Ok(Self {
            dishes: parse("dishes", DISHES_JSON)?,
            orders: parse("orders", ORDERS_JSON)?,
        })
    }

    /// Reads `dishes.json` and `orders.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, SeedError> {
        Ok(Self {
            dishes: read(&dir.join("dishes.json"))?,
            orders: read(&dir.join("orders.json"))?,
        })
    }

    /// Loads from `dir` when given, otherwise the embedded data.
    pub fn load(dir: Option<&Path>) -> Result<Self, SeedError> {
        let seed = match dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::embedded()?,
        };
        tracing::info!(
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            source = %dir.map_or_else(|| "embedded".into(), |d| d.display().to_string()),
            "seed data loaded"
        );
        Ok(seed)
    }
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&path.display().to_string(), &contents)
}

fn parse<T: DeserializeOwned>(name: &str, contents: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(contents).map_err(|source| SeedError::Parse {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use domain::OrderStatus;

    use super::*;

    #[test]
    fn test_embedded_seed_parses() {
        let seed = SeedData::embedded().unwrap();
        assert!(!seed.dishes.is_empty());
        assert!(!seed.orders.is_empty());
        assert!(seed.dishes.iter().all(|d| d.price > 0));
    }

    #[test]
    fn test_embedded_seed_has_a_delivered_order() {
        let seed = SeedData::embedded().unwrap();
        assert!(
            seed.orders
                .iter()
                .any(|o| o.status == OrderStatus::Delivered)
        );
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let err = SeedData::from_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = parse::<Dish>("dishes", "{\"not\": \"a list\"}").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse dishes seed data"));
    }
}
