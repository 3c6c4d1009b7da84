//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{
    FromRow, Postgres, QueryBuilder, Row, Transaction,
    postgres::PgRow,
    query, query_as, query_scalar,
    types::Json,
};

use crate::domain::{
    categories::records::CategoryId,
    pagination::Page,
    products::{
        data::{NewProduct, ProductFilter, ProductSort, ProductUpdate},
        records::{ProductId, ProductRecord},
    },
};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_BY_SLUG_SQL: &str = include_str!("sql/get_product_by_slug.sql");
const GET_PRODUCT_BY_SKU_SQL: &str = include_str!("sql/get_product_by_sku.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const ADJUST_STOCK_SQL: &str = include_str!("sql/adjust_stock.sql");
const INCREMENT_VIEW_COUNT_SQL: &str = include_str!("sql/increment_view_count.sql");
const SLUG_EXISTS_SQL: &str = include_str!("sql/slug_exists.sql");
const SKU_EXISTS_SQL: &str = include_str!("sql/sku_exists.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

const PRODUCT_COLUMNS: &str = "id, name, slug, description, short_description, sku, price, \
     compare_price, cost_price, stock, low_stock_threshold, category_id, seller_id, brand, \
     images, attributes, is_active, is_featured, rating, review_count, sold_count, view_count, \
     created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fetch one page of products matching `filter`, ordered by `sort`.
    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
        sort: ProductSort,
        page: Page,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT ");

        builder.push(PRODUCT_COLUMNS).push(" FROM products");

        push_filters(&mut builder, filter);

        builder
            .push(" ORDER BY ")
            .push(sort.key.column())
            .push(" ")
            .push(sort.direction.keyword());

        builder.push(" OFFSET ").push_bind(page.skip);
        builder.push(" LIMIT ").push_bind(page.limit);

        builder
            .build_query_as::<ProductRecord>()
            .fetch_all(&mut **tx)
            .await
    }

    /// Count all products matching `filter` — the same predicate the page
    /// query uses, so `total` always agrees with the page contents.
    pub(crate) async fn count_matching(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<i64, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");

        push_filters(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_product_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_BY_SLUG_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_product_by_sku(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sku: &str,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_BY_SKU_SQL)
            .bind(sku)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn slug_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(SLUG_EXISTS_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn sku_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sku: &str,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(SKU_EXISTS_SQL)
            .bind(sku)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_PRODUCTS_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        new: &NewProduct,
        slug: &str,
        seller_id: &str,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(&new.name)
            .bind(slug)
            .bind(new.description.as_deref())
            .bind(new.short_description.as_deref())
            .bind(&new.sku)
            .bind(new.price)
            .bind(new.compare_price)
            .bind(new.cost_price)
            .bind(new.stock)
            .bind(new.low_stock_threshold)
            .bind(new.category_id.map(CategoryId::into_i64))
            .bind(seller_id)
            .bind(new.brand.as_deref())
            .bind(Json(new.images.clone()))
            .bind(new.attributes.clone())
            .bind(new.is_active)
            .bind(new.is_featured)
            .fetch_one(&mut **tx)
            .await
    }

    /// Apply a sparse patch. Only fields present in `update` are written;
    /// `slug` carries the regenerated value when the name changes.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        update: &ProductUpdate,
        slug: Option<&str>,
    ) -> Result<ProductRecord, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE products SET updated_at = now()");

        if let Some(name) = &update.name {
            builder.push(", name = ").push_bind(name.clone());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ").push_bind(slug.to_string());
        }

        if let Some(description) = &update.description {
            builder.push(", description = ").push_bind(description.clone());
        }

        if let Some(short_description) = &update.short_description {
            builder
                .push(", short_description = ")
                .push_bind(short_description.clone());
        }

        if let Some(price) = update.price {
            builder.push(", price = ").push_bind(price);
        }

        if let Some(compare_price) = update.compare_price {
            builder.push(", compare_price = ").push_bind(compare_price);
        }

        if let Some(cost_price) = update.cost_price {
            builder.push(", cost_price = ").push_bind(cost_price);
        }

        if let Some(stock) = update.stock {
            builder.push(", stock = ").push_bind(stock);
        }

        if let Some(low_stock_threshold) = update.low_stock_threshold {
            builder
                .push(", low_stock_threshold = ")
                .push_bind(low_stock_threshold);
        }

        if let Some(category_id) = update.category_id {
            builder
                .push(", category_id = ")
                .push_bind(category_id.map(CategoryId::into_i64));
        }

        if let Some(brand) = &update.brand {
            builder.push(", brand = ").push_bind(brand.clone());
        }

        if let Some(images) = &update.images {
            builder.push(", images = ").push_bind(Json(images.clone()));
        }

        if let Some(attributes) = &update.attributes {
            builder.push(", attributes = ").push_bind(attributes.clone());
        }

        if let Some(is_active) = update.is_active {
            builder.push(", is_active = ").push_bind(is_active);
        }

        if let Some(is_featured) = update.is_featured {
            builder.push(", is_featured = ").push_bind(is_featured);
        }

        builder.push(" WHERE id = ").push_bind(product.into_i64());
        builder.push(" RETURNING ").push(PRODUCT_COLUMNS);

        builder
            .build_query_as::<ProductRecord>()
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Atomic conditional stock adjustment: the floor check and the write are
    /// one statement, so concurrent adjustments cannot lose updates or drive
    /// stock negative. `None` means the statement matched no row — either the
    /// product is missing or the floor check refused the delta.
    pub(crate) async fn adjust_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        delta: i32,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(ADJUST_STOCK_SQL)
            .bind(product.into_i64())
            .bind(delta)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Unconditional counter bump; a missing id simply matches zero rows.
    pub(crate) async fn increment_view_count(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<(), sqlx::Error> {
        query(INCREMENT_VIEW_COUNT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    builder.push(" WHERE TRUE");

    if let Some(is_active) = filter.is_active {
        builder.push(" AND is_active = ").push_bind(is_active);
    }

    if let Some(category_id) = filter.category_id {
        builder
            .push(" AND category_id = ")
            .push_bind(category_id.into_i64());
    }

    if let Some(seller_id) = &filter.seller_id {
        builder.push(" AND seller_id = ").push_bind(seller_id.clone());
    }

    if let Some(brand) = &filter.brand {
        builder.push(" AND brand ILIKE ").push_bind(like_pattern(brand));
    }

    if let Some(min_price) = filter.min_price {
        builder.push(" AND price >= ").push_bind(min_price);
    }

    if let Some(max_price) = filter.max_price {
        builder.push(" AND price <= ").push_bind(max_price);
    }

    if let Some(is_featured) = filter.is_featured {
        builder.push(" AND is_featured = ").push_bind(is_featured);
    }

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);

        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR sku ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

fn like_pattern(term: &str) -> String {
    format!("%{term}%")
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            short_description: row.try_get("short_description")?,
            sku: row.try_get("sku")?,
            price: row.try_get::<Decimal, _>("price")?,
            compare_price: row.try_get::<Option<Decimal>, _>("compare_price")?,
            cost_price: row.try_get::<Option<Decimal>, _>("cost_price")?,
            stock: row.try_get("stock")?,
            low_stock_threshold: row.try_get("low_stock_threshold")?,
            category_id: row
                .try_get::<Option<i64>, _>("category_id")?
                .map(CategoryId::from_i64),
            seller_id: row.try_get("seller_id")?,
            brand: row.try_get("brand")?,
            images: row.try_get::<Json<Vec<String>>, _>("images")?.0,
            attributes: row.try_get::<Value, _>("attributes")?,
            is_active: row.try_get("is_active")?,
            is_featured: row.try_get("is_featured")?,
            rating: row.try_get::<Decimal, _>("rating")?,
            review_count: row.try_get("review_count")?,
            sold_count: row.try_get("sold_count")?,
            view_count: row.try_get("view_count")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
