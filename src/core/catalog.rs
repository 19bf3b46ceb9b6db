//! The named table of storefront target sizes. The built-in set covers the
//! store capsules, the screenshot size, and the grid-composed library hero;
//! a custom table can be loaded from a JSON file.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::TargetSize;

/// Well-known catalog entry name of the grid-composed hero asset.
pub const LIBRARY_HERO: &str = "library_hero";

/// One named output size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl AssetSpec {
    pub fn size(&self) -> TargetSize {
        TargetSize::new(self.width, self.height)
    }
}

/// Ordered list of output sizes; generation order follows catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCatalog {
    pub assets: Vec<AssetSpec>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        let builtin = [
            ("header_capsule", 920, 430),
            ("small_capsule", 462, 174),
            ("main_capsule", 1232, 706),
            ("vertical_capsule", 748, 896),
            ("library_capsule", 600, 900),
            ("screenshot", 1920, 1080),
            (LIBRARY_HERO, 3840, 1240),
        ];
        Self {
            assets: builtin
                .into_iter()
                .map(|(name, width, height)| AssetSpec {
                    name: name.to_string(),
                    width,
                    height,
                })
                .collect(),
        }
    }
}

impl AssetCatalog {
    /// Load a catalog from a JSON file of the same shape `to_json` writes.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let catalog = serde_json::from_reader(BufReader::new(file))
            .map_err(crate::error::Error::external)?;
        Ok(catalog)
    }

    /// Entries produced by the fit transformer (everything but the hero).
    pub fn fit_assets(&self) -> impl Iterator<Item = &AssetSpec> {
        self.assets.iter().filter(|a| a.name != LIBRARY_HERO)
    }

    /// The hero entry, if the catalog carries one.
    pub fn hero(&self) -> Option<&AssetSpec> {
        self.assets.iter().find(|a| a.name == LIBRARY_HERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_names_the_storefront_set() {
        let catalog = AssetCatalog::default();
        let names: Vec<&str> = catalog.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "header_capsule",
                "small_capsule",
                "main_capsule",
                "vertical_capsule",
                "library_capsule",
                "screenshot",
                "library_hero",
            ]
        );
        assert_eq!(catalog.hero().unwrap().size(), TargetSize::new(3840, 1240));
        assert_eq!(catalog.fit_assets().count(), 6);
    }

    #[test]
    fn json_round_trip() {
        let catalog = AssetCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: AssetCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.assets, catalog.assets);
    }
}
