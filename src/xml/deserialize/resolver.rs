//! Resolution of content references found in attributes.
//!
//! A reference is tried, in order, as:
//! 1. an absolute URL;
//! 2. a token given to the caller's [`ContentContext`], whose failures are fatal;
//! 3. without a context, a catalog entry matching the element's `catalogId`
//!    and the reference's file name.
//!
//! When every tier fails the element can't be built.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::content::{Catalog, Content, ContentContext, file_name};
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// What a reference designates, which selects the catalog searched in tier 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    TextureImage,
    Icon,
    PlanIcon,
    Model,
    /// Content without catalog counterpart (background images, properties).
    Other,
}

pub struct ContentResolver {
    context: Option<Arc<dyn ContentContext>>,
    catalog: Option<Arc<dyn Catalog>>,
    /// Contents already resolved from a URL or the context, by reference.
    resolved: RefCell<HashMap<String, Content>>,
}

impl ContentResolver {
    pub fn new(
        context: Option<Arc<dyn ContentContext>>,
        catalog: Option<Arc<dyn Catalog>>,
    ) -> Self {
        Self {
            context,
            catalog,
            resolved: RefCell::new(HashMap::new()),
        }
    }

    /// Resolve an optional reference attribute.
    ///
    /// Returns `None` only when the attribute is absent; a present reference
    /// that can't be resolved is an error.
    pub fn resolve(
        &self,
        attributes: &Attributes,
        attribute: &str,
        kind: ContentKind,
    ) -> Result<Option<Content>, HomeXmlError> {
        match attributes.get_opt(attribute) {
            Some(reference) => self
                .resolve_reference(attributes, attribute, reference, kind)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Resolve a reference attribute that must be present.
    pub fn resolve_required(
        &self,
        attributes: &Attributes,
        attribute: &str,
        kind: ContentKind,
    ) -> Result<Content, HomeXmlError> {
        let reference = attributes.get_req(attribute)?;
        self.resolve_reference(attributes, attribute, reference, kind)
    }

    /// Resolve a reference given in an attribute other than its own, such as
    /// the `value` of a content property.
    pub fn resolve_reference(
        &self,
        attributes: &Attributes,
        attribute: &str,
        reference: &str,
        kind: ContentKind,
    ) -> Result<Content, HomeXmlError> {
        if let Some(content) = self.resolved.borrow().get(reference) {
            return Ok(content.clone());
        }

        let unresolved = |reason: &str| HomeXmlError::UnresolvedContent {
            element: attributes.element_name().to_string(),
            attribute: attribute.to_string(),
            reference: reference.to_string(),
            reason: reason.to_string(),
            source: None,
        };

        if let Some(content) = Content::from_absolute_url(reference) {
            return Ok(self.remember(reference, content));
        }

        if let Some(context) = &self.context {
            return match context.lookup_content(reference) {
                Ok(content) => Ok(self.remember(reference, content)),
                Err(e) => Err(HomeXmlError::UnresolvedContent {
                    element: attributes.element_name().to_string(),
                    attribute: attribute.to_string(),
                    reference: reference.to_string(),
                    reason: "content context lookup failed".to_string(),
                    source: Some(e),
                }),
            };
        }

        if let (Some(catalog), Some(catalog_id)) = (&self.catalog, attributes.get_opt("catalogId"))
        {
            if let Some(content) = find_in_catalog(catalog.as_ref(), catalog_id, reference, kind) {
                debug!(
                    "resolved {}@{} '{}' from catalog entry {}",
                    attributes.element_name(),
                    attribute,
                    reference,
                    catalog_id
                );
                return Ok(content);
            }
            return Err(unresolved("no matching catalog entry"));
        }

        Err(unresolved(
            "not an absolute URL and no content context or catalog to look it up",
        ))
    }

    fn remember(&self, reference: &str, content: Content) -> Content {
        self.resolved
            .borrow_mut()
            .entry(reference.to_string())
            .or_insert(content)
            .clone()
    }
}

/// Find the catalog content with `catalog_id` whose file name matches the reference.
///
/// Ids are not unique across catalogs, so the file name check guards against
/// picking another resource registered under the same id.
fn find_in_catalog(
    catalog: &dyn Catalog,
    catalog_id: &str,
    reference: &str,
    kind: ContentKind,
) -> Option<Content> {
    let wanted = file_name(reference);
    let matches = |content: &Content| content.file_name() == wanted;
    match kind {
        ContentKind::TextureImage => catalog
            .textures_by_id(catalog_id)
            .into_iter()
            .map(|texture| texture.image)
            .find(matches),
        ContentKind::Icon => catalog
            .furniture_by_id(catalog_id)
            .into_iter()
            .map(|piece| piece.icon)
            .find(matches),
        ContentKind::PlanIcon => catalog
            .furniture_by_id(catalog_id)
            .into_iter()
            .filter_map(|piece| piece.plan_icon)
            .find(matches),
        ContentKind::Model => catalog
            .furniture_by_id(catalog_id)
            .into_iter()
            .map(|piece| piece.model)
            .find(matches),
        ContentKind::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CatalogPiece, CatalogTexture, InMemoryCatalog, MapContentContext};

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        Attributes::from_pairs("pieceOfFurniture", pairs.iter().copied())
    }

    fn catalog() -> Arc<dyn Catalog> {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_piece(CatalogPiece {
            id: "eTeks#chair".to_string(),
            icon: Content::url("http://catalog/other/chair.png"),
            plan_icon: None,
            model: Content::url("http://catalog/other/chair.obj"),
        });
        catalog.add_piece(CatalogPiece {
            id: "eTeks#chair".to_string(),
            icon: Content::url("http://catalog/chairs/chair_icon.png"),
            plan_icon: Some(Content::url("http://catalog/chairs/chair_plan.png")),
            model: Content::url("http://catalog/chairs/chair.obj"),
        });
        catalog.add_texture(CatalogTexture {
            id: "eTeks#wood".to_string(),
            image: Content::url("http://catalog/wood.jpg"),
        });
        Arc::new(catalog)
    }

    #[test]
    fn test_absolute_url_wins() {
        let resolver = ContentResolver::new(None, None);
        let content = resolver
            .resolve(&attrs(&[("model", "http://host/a.obj")]), "model", ContentKind::Model)
            .unwrap()
            .unwrap();
        assert_eq!(content.location(), "http://host/a.obj");
    }

    #[test]
    fn test_absent_reference_is_none() {
        let resolver = ContentResolver::new(None, None);
        assert!(
            resolver
                .resolve(&attrs(&[]), "model", ContentKind::Model)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_context_failure_is_fatal_even_with_catalog() {
        let context: Arc<dyn ContentContext> = Arc::new(MapContentContext::new());
        let resolver = ContentResolver::new(Some(context), Some(catalog()));
        let err = resolver
            .resolve(
                &attrs(&[("model", "3"), ("catalogId", "eTeks#chair")]),
                "model",
                ContentKind::Model,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            HomeXmlError::UnresolvedContent { source: Some(_), .. }
        ));
    }

    #[test]
    fn test_context_results_are_shared() {
        let context: Arc<dyn ContentContext> =
            Arc::new(MapContentContext::new().with("0", Content::embedded("0", vec![7])));
        let resolver = ContentResolver::new(Some(context), None);
        let a = attrs(&[("icon", "0")]);
        let first = resolver.resolve(&a, "icon", ContentKind::Icon).unwrap().unwrap();
        let second = resolver.resolve(&a, "icon", ContentKind::Icon).unwrap().unwrap();
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn test_catalog_match_checks_file_name() {
        let resolver = ContentResolver::new(None, Some(catalog()));
        let a = attrs(&[
            ("catalogId", "eTeks#chair"),
            ("model", "chair.obj"),
            ("planIcon", "chair_plan.png"),
            ("icon", "missing.png"),
        ]);
        let model = resolver.resolve(&a, "model", ContentKind::Model).unwrap().unwrap();
        assert_eq!(model.location(), "http://catalog/other/chair.obj");
        let plan = resolver
            .resolve(&a, "planIcon", ContentKind::PlanIcon)
            .unwrap()
            .unwrap();
        assert_eq!(plan.location(), "http://catalog/chairs/chair_plan.png");
        assert!(resolver.resolve(&a, "icon", ContentKind::Icon).is_err());
    }

    #[test]
    fn test_texture_catalog() {
        let resolver = ContentResolver::new(None, Some(catalog()));
        let a = Attributes::from_pairs(
            "texture",
            [("catalogId", "eTeks#wood"), ("image", "wood.jpg")],
        );
        let image = resolver
            .resolve_required(&a, "image", ContentKind::TextureImage)
            .unwrap();
        assert_eq!(image.location(), "http://catalog/wood.jpg");
    }

    #[test]
    fn test_unresolvable_without_collaborators() {
        let resolver = ContentResolver::new(None, None);
        let err = resolver
            .resolve(&attrs(&[("model", "12")]), "model", ContentKind::Model)
            .unwrap_err();
        assert!(err.to_string().contains("pieceOfFurniture@model"));
    }
}
