pub mod data;

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::model::care_service::CareService;
use crate::model::location::Location;
use crate::model::product::{Category, Product};

/// Groups `items` by `key`, preserving the order of first key appearance and
/// the original item order inside each group.
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_categories: usize,
    pub featured_products: usize,
}

/// The static reference data for the site: supplies, service areas, and care
/// offerings. Built once at process start and shared by reference; every
/// query is pure and preserves catalog order. Absence is an expected outcome,
/// so lookups return `Option`/empty rather than erroring.
pub struct Catalog {
    products: Vec<Product>,
    locations: Vec<Location>,
    care_services: Vec<CareService>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            products: data::products(),
            locations: data::locations(),
            care_services: data::care_services(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn care_services(&self) -> &[CareService] {
        &self.care_services
    }

    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn location_by_slug(&self, slug: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.slug == slug)
    }

    pub fn care_service_by_slug(&self, slug: &str) -> Option<&CareService> {
        self.care_services.iter().find(|s| s.slug == slug)
    }

    /// Products whose `category_slug` matches, in catalog order. An unknown
    /// category yields an empty list.
    pub fn products_by_category(&self, category_slug: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_slug == category_slug)
            .collect()
    }

    /// Popular products in catalog order, truncated to `limit` when given.
    pub fn featured_products(&self, limit: Option<usize>) -> Vec<&Product> {
        let featured = self.products.iter().filter(|p| p.popular);
        match limit {
            Some(n) => featured.take(n).collect(),
            None => featured.collect(),
        }
    }

    /// Up to `limit` other products sharing the category of the product
    /// identified by `slug`, excluding that product itself. Empty when the
    /// slug does not resolve.
    pub fn related_products(&self, slug: &str, limit: usize) -> Vec<&Product> {
        let Some(current) = self.product_by_slug(slug) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category_slug == current.category_slug && p.slug != slug)
            .take(limit)
            .collect()
    }

    /// Case-insensitive substring search over name, description, and feature
    /// strings. An empty query matches everything.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.features.iter().any(|f| f.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Derives the category list by grouping products on `category_slug`, in
    /// order of first appearance. Recomputed on every call so that
    /// `product_count` can never go stale.
    pub fn categories(&self) -> Vec<Category> {
        group_by(&self.products, |p| p.category_slug.clone())
            .into_iter()
            .map(|(slug, members)| Category {
                name: members[0].category.clone(),
                description: data::category_description(&slug).to_string(),
                product_count: members.len(),
                slug,
            })
            .collect()
    }

    /// Locations grouped by region, regions in order of first appearance.
    pub fn locations_by_region(&self) -> Vec<(String, Vec<&Location>)> {
        group_by(&self.locations, |l| l.region.clone())
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_products: self.products.len(),
            total_categories: self.categories().len(),
            featured_products: self.featured_products(None).len(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
