use async_trait::async_trait;
use chrono::Utc;
use goldtiger_core::error::CoreError;
use goldtiger_core::seed::SeedPlan;
use goldtiger_core::text_list;
use goldtiger_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::product::{CreateProduct, Product, UpdateProduct, DEFAULT_RATING};
use crate::models::product_variant::{CreateProductVariant, ProductVariant};
use crate::repositories::SeedSummary;
use crate::store::CatalogStore;
use crate::StoreError;

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    variants: Vec<ProductVariant>,
    last_product_id: DbId,
    last_variant_id: DbId,
}

impl Tables {
    fn insert_product(&mut self, product: NewProductRow) -> Product {
        self.last_product_id += 1;
        let now = Utc::now();
        let row = Product {
            id: self.last_product_id,
            name: product.name,
            category: product.category,
            price: product.price,
            description: product.description,
            features: product.features,
            created_at: now,
            updated_at: now,
            is_featured: product.is_featured,
            rating: product.rating,
            review_count: product.review_count,
        };
        self.products.push(row.clone());
        row
    }

    fn insert_variant(
        &mut self,
        product_id: DbId,
        input: &CreateProductVariant,
    ) -> Result<ProductVariant, CoreError> {
        if !self.products.iter().any(|p| p.id == product_id) {
            return Err(CoreError::NotFound {
                entity: "Product",
                id: product_id,
            });
        }
        if self.variants.iter().any(|v| v.sku == input.sku) {
            return Err(CoreError::Conflict(format!(
                "SKU '{}' already exists",
                input.sku
            )));
        }
        if self
            .variants
            .iter()
            .any(|v| v.product_id == product_id && v.color == input.color && v.size == input.size)
        {
            return Err(CoreError::Conflict(format!(
                "Product {product_id} already has a {} / {} variant",
                input.color, input.size
            )));
        }

        self.last_variant_id += 1;
        let row = ProductVariant {
            id: self.last_variant_id,
            product_id,
            color: input.color.clone(),
            size: input.size.clone(),
            stock: input.stock.unwrap_or(0),
            image_paths: input.image_paths.as_deref().map(text_list::encode),
            sku: input.sku.clone(),
        };
        self.variants.push(row.clone());
        Ok(row)
    }
}

struct NewProductRow {
    name: String,
    category: String,
    price: f64,
    description: Option<String>,
    features: Option<String>,
    is_featured: bool,
    rating: f64,
    review_count: i32,
}

/// In-process [`CatalogStore`] with the same constraints as the PostgreSQL
/// schema. Data lives only as long as the store.
#[derive(Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn find_product(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn create_product(&self, input: &CreateProduct) -> Result<Product, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.insert_product(NewProductRow {
            name: input.name.clone(),
            category: input.category.clone(),
            price: input.price,
            description: input.description.clone(),
            features: input.features.as_deref().map(text_list::encode),
            is_featured: input.is_featured.unwrap_or(false),
            rating: input.rating.unwrap_or(DEFAULT_RATING),
            review_count: input.review_count.unwrap_or(0),
        }))
    }

    async fn update_product(
        &self,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(product) = tables.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            product.name = name.clone();
        }
        if let Some(category) = &input.category {
            product.category = category.clone();
        }
        if let Some(price) = input.price {
            product.price = price;
        }
        if let Some(description) = &input.description {
            product.description = Some(description.clone());
        }
        if let Some(features) = &input.features {
            product.features = Some(text_list::encode(features));
        }
        if let Some(is_featured) = input.is_featured {
            product.is_featured = is_featured;
        }
        if let Some(rating) = input.rating {
            product.rating = rating;
        }
        if let Some(review_count) = input.review_count {
            product.review_count = review_count;
        }
        product.updated_at = Utc::now();

        Ok(Some(product.clone()))
    }

    async fn list_variants_for_product(
        &self,
        product_id: DbId,
    ) -> Result<Vec<ProductVariant>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .variants
            .iter()
            .filter(|v| v.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn create_variant(
        &self,
        product_id: DbId,
        input: &CreateProductVariant,
    ) -> Result<ProductVariant, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.insert_variant(product_id, input)?)
    }

    async fn reload_catalog(&self, plan: &SeedPlan) -> Result<SeedSummary, StoreError> {
        // Build into a fresh table set and swap, so a failure leaves the old
        // catalog in place.
        let mut fresh = Tables::default();
        for entry in &plan.entries {
            let p = &entry.product;
            let product = fresh.insert_product(NewProductRow {
                name: p.name.clone(),
                category: p.category.clone(),
                price: p.price,
                description: Some(p.description.clone()),
                features: Some(text_list::encode(&p.features)),
                is_featured: p.is_featured,
                rating: p.rating,
                review_count: p.review_count,
            });
            for v in &entry.variants {
                fresh.insert_variant(
                    product.id,
                    &CreateProductVariant {
                        color: v.color.clone(),
                        size: v.size.clone(),
                        stock: Some(v.stock),
                        image_paths: Some(v.image_paths.clone()),
                        sku: v.sku.clone(),
                    },
                )?;
            }
        }

        let summary = SeedSummary {
            products: fresh.products.len(),
            variants: fresh.variants.len(),
        };
        *self.tables.write().await = fresh;
        Ok(summary)
    }
}
