//! Furniture and texture catalogs consulted as the last resolution tier.

use std::collections::HashMap;

use crate::content::Content;

/// A texture available in the running environment's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTexture {
    pub id: String,
    pub image: Content,
}

/// A piece of furniture available in the running environment's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPiece {
    pub id: String,
    pub icon: Content,
    pub plan_icon: Option<Content>,
    pub model: Content,
}

/// Lookup of catalog entries by catalog id.
///
/// Several entries may share an id (catalogs merged from different sources),
/// so every candidate is returned and the caller disambiguates by file name.
pub trait Catalog {
    fn textures_by_id(&self, catalog_id: &str) -> Vec<CatalogTexture>;
    fn furniture_by_id(&self, catalog_id: &str) -> Vec<CatalogPiece>;
}

/// A catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    textures: HashMap<String, Vec<CatalogTexture>>,
    furniture: HashMap<String, Vec<CatalogPiece>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_texture(&mut self, texture: CatalogTexture) -> &mut Self {
        self.textures
            .entry(texture.id.clone())
            .or_default()
            .push(texture);
        self
    }

    pub fn add_piece(&mut self, piece: CatalogPiece) -> &mut Self {
        self.furniture
            .entry(piece.id.clone())
            .or_default()
            .push(piece);
        self
    }
}

impl Catalog for InMemoryCatalog {
    fn textures_by_id(&self, catalog_id: &str) -> Vec<CatalogTexture> {
        self.textures.get(catalog_id).cloned().unwrap_or_default()
    }

    fn furniture_by_id(&self, catalog_id: &str) -> Vec<CatalogPiece> {
        self.furniture.get(catalog_id).cloned().unwrap_or_default()
    }
}
