//! Domain types for the product catalog.
//!
//! A catalog is an ordered collection of products that can be created,
//! partially updated, and deleted. Input validation (trimming, positivity,
//! integrality) happens at construction time via [`ProductDraft`] and
//! [`ProductPatch`], so a [`Product`] in the state is always well-formed.

use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unique identifier for a product.
///
/// Opaque short code assigned by the store at creation time. Never reused,
/// never changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a `ProductId` from an existing code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned at creation.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Free-form description.
    pub description: String,
    /// Unit price, strictly positive.
    pub price: f64,
    /// Units in stock.
    pub stock: u32,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Overwrites exactly the fields the patch supplies.
    ///
    /// Fields absent from the patch keep their prior values. The caller is
    /// responsible for refreshing `updated_at`.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(category) = &patch.category {
            self.category.clone_from(category);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

/// Validated input for creating a product.
///
/// Construction trims the text fields and enforces the field rules, so a
/// draft that exists is a draft that can be stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    name: String,
    category: String,
    description: String,
    price: f64,
    stock: u32,
}

impl ProductDraft {
    /// Validates creation input.
    ///
    /// Text fields are trimmed of surrounding whitespace and must be
    /// non-empty afterwards; `price` must be a finite number greater than
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the offending field.
    pub fn new(
        name: &str,
        category: &str,
        description: &str,
        price: f64,
        stock: u32,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            name: non_empty_text("name", name)?,
            category: non_empty_text("category", category)?,
            description: non_empty_text("description", description)?,
            price: positive_price(price)?,
            stock,
        })
    }

    /// Trimmed product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the draft into a stored record.
    #[must_use]
    pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            price: self.price,
            stock: self.stock,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated partial-update input.
///
/// Any subset of the product fields; each supplied field obeys the same
/// rules as at creation. An all-absent patch is constructible (callers
/// reject it via [`ProductPatch::is_empty`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPatch {
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    stock: Option<u32>,
}

impl ProductPatch {
    /// Validates partial-update input.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if any supplied field violates
    /// its rule.
    pub fn new(
        name: Option<&str>,
        category: Option<&str>,
        description: Option<&str>,
        price: Option<f64>,
        stock: Option<u32>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            name: name.map(|v| non_empty_text("name", v)).transpose()?,
            category: category.map(|v| non_empty_text("category", v)).transpose()?,
            description: description
                .map(|v| non_empty_text("description", v))
                .transpose()?,
            price: price.map(positive_price).transpose()?,
            stock,
        })
    }

    /// Returns `true` if the patch supplies no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }
}

fn non_empty_text(field: &'static str, value: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn positive_price(price: f64) -> Result<f64, CatalogError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CatalogError::validation("price must be greater than zero"));
    }
    Ok(price)
}

/// Authoritative catalog state.
///
/// Owns the ordered product collection (insertion order is observable via
/// [`CatalogState::products`]) and the set of every id ever issued, which
/// is how deleted ids stay retired forever.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    issued: HashSet<ProductId>,
}

impl CatalogState {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of live products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Returns `true` if a live product has this id.
    #[must_use]
    pub fn exists(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Returns `true` if this id was ever assigned, including to products
    /// since deleted.
    #[must_use]
    pub fn was_issued(&self, id: &ProductId) -> bool {
        self.issued.contains(id)
    }

    /// Appends a product, recording its id as issued.
    pub(crate) fn insert(&mut self, product: Product) {
        self.issued.insert(product.id.clone());
        self.products.push(product);
    }

    pub(crate) fn get_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| &p.id == id)
    }

    /// Removes a product, returning `true` if it existed. The id stays in
    /// the issued set.
    pub(crate) fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() != before
    }
}

/// Commands the catalog reducer processes.
#[derive(Clone, Debug)]
pub enum CatalogAction {
    /// Create a product from validated input.
    Create {
        /// Validated creation fields.
        draft: ProductDraft,
    },
    /// Overwrite a subset of an existing product's fields.
    Update {
        /// Target product.
        id: ProductId,
        /// Validated partial fields.
        patch: ProductPatch,
    },
    /// Remove a product permanently.
    Delete {
        /// Target product.
        id: ProductId,
    },
}

/// Outcome of a successfully processed command.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogEvent {
    /// A product was created.
    Created {
        /// The stored record, id assigned.
        product: Product,
    },
    /// A product was partially updated.
    Updated {
        /// The record after the patch.
        product: Product,
    },
    /// A product was deleted.
    Deleted {
        /// The retired id.
        id: ProductId,
    },
}
