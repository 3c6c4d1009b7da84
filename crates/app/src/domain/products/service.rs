//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        pagination::Page,
        products::{
            data::{NewProduct, ProductFilter, ProductSort, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductId, ProductRecord},
            repository::PgProductsRepository,
        },
    },
    slug::slugify,
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
        sort: ProductSort,
        page: Page,
    ) -> Result<(Vec<ProductRecord>, i64), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.count_matching(&mut tx, &filter).await?;
        let products = self
            .repository
            .list_products(&mut tx, &filter, sort, page)
            .await?;

        tx.commit().await?;

        Ok((products, total))
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn get_product_by_slug(
        &self,
        slug: String,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product_by_slug(&mut tx, &slug).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn get_product_by_sku(
        &self,
        sku: String,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product_by_sku(&mut tx, &sku).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        new: NewProduct,
        seller_id: String,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        if self.repository.sku_exists(&mut tx, &new.sku).await? {
            return Err(ProductsServiceError::DuplicateSku);
        }

        // Count-then-suffix disambiguation. Not race-safe by contract; the
        // unique constraint on slug is the backstop.
        let mut slug = slugify(&new.name);

        if self.repository.slug_exists(&mut tx, &slug).await? {
            let count = self.repository.count_products(&mut tx).await?;

            slug = format!("{slug}-{}", count + 1);

            tracing::debug!(%slug, "product slug taken, suffixed with row count");
        }

        let created = self
            .repository
            .create_product(&mut tx, &new, &slug, &seller_id)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
        seller: Option<String>,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.get_product(&mut tx, product).await?;

        if seller.is_some_and(|seller| current.seller_id != seller) {
            return Err(ProductsServiceError::NotOwner);
        }

        // Renaming regenerates the slug. Disambiguation is not re-run here;
        // a colliding rename surfaces AlreadyExists from the constraint.
        let slug = update.name.as_deref().map(slugify);

        let updated = self
            .repository
            .update_product(&mut tx, product, &update, slug.as_deref())
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(
        &self,
        product: ProductId,
        seller: Option<String>,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.get_product(&mut tx, product).await?;

        if seller.is_some_and(|seller| current.seller_id != seller) {
            return Err(ProductsServiceError::NotOwner);
        }

        self.repository.delete_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn adjust_stock(
        &self,
        product: ProductId,
        delta: i32,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        match self.repository.adjust_stock(&mut tx, product, delta).await? {
            Some(updated) => {
                tx.commit().await?;

                Ok(updated)
            }
            None => {
                // The conditional update matched nothing: either the product
                // is missing (NotFound from the lookup) or the floor check
                // refused the delta.
                self.repository.get_product(&mut tx, product).await?;

                Err(ProductsServiceError::InsufficientStock)
            }
        }
    }

    async fn increment_view_count(
        &self,
        product: ProductId,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.increment_view_count(&mut tx, product).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve one page of products plus the total count under the same
    /// predicate.
    async fn list_products(
        &self,
        filter: ProductFilter,
        sort: ProductSort,
        page: Page,
    ) -> Result<(Vec<ProductRecord>, i64), ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve a single product by slug.
    async fn get_product_by_slug(
        &self,
        slug: String,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve a single product by SKU.
    async fn get_product_by_sku(
        &self,
        sku: String,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Create a product owned by `seller_id`, deriving a unique slug from its
    /// name. A taken SKU is refused with [`ProductsServiceError::DuplicateSku`].
    async fn create_product(
        &self,
        new: NewProduct,
        seller_id: String,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Apply a sparse patch. `seller: Some(..)` enforces ownership;
    /// administrators pass `None` to bypass the check.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
        seller: Option<String>,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Delete a product, with the same ownership convention as updates.
    async fn delete_product(
        &self,
        product: ProductId,
        seller: Option<String>,
    ) -> Result<(), ProductsServiceError>;

    /// Add `delta` (positive or negative) to stock. Refused without mutation
    /// when the result would be negative.
    async fn adjust_stock(
        &self,
        product: ProductId,
        delta: i32,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Bump the view counter; a missing id is silently a no-op.
    async fn increment_view_count(
        &self,
        product: ProductId,
    ) -> Result<(), ProductsServiceError>;
}
