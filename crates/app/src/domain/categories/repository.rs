//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, QueryBuilder, Row, Transaction, postgres::PgRow, query, query_as,
    query_scalar,
};

use crate::domain::{
    categories::{
        data::{CategoryFilter, CategoryUpdate, NewCategory},
        records::{CategoryId, CategoryRecord},
    },
    pagination::Page,
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const GET_CATEGORY_BY_SLUG_SQL: &str = include_str!("sql/get_category_by_slug.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const DELETE_CATEGORY_SQL: &str = include_str!("sql/delete_category.sql");
const SLUG_EXISTS_SQL: &str = include_str!("sql/slug_exists.sql");
const COUNT_CATEGORIES_SQL: &str = include_str!("sql/count_categories.sql");
const TREE_ROOTS_SQL: &str = include_str!("sql/tree_roots.sql");
const TREE_CHILDREN_SQL: &str = include_str!("sql/tree_children.sql");

const CATEGORY_COLUMNS: &str =
    "id, name, slug, description, image, parent_id, is_active, sort_order, created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: CategoryFilter,
        page: Page,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .bind(filter.parent_id.map(CategoryId::into_i64))
            .bind(filter.is_active)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryId,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORY_SQL)
            .bind(category.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_category_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORY_BY_SLUG_SQL)
            .bind(slug)
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

    pub(crate) async fn count_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_CATEGORIES_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        new: &NewCategory,
        slug: &str,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(CREATE_CATEGORY_SQL)
            .bind(&new.name)
            .bind(slug)
            .bind(new.description.as_deref())
            .bind(new.image.as_deref())
            .bind(new.parent_id.map(CategoryId::into_i64))
            .bind(new.is_active)
            .bind(new.sort_order)
            .fetch_one(&mut **tx)
            .await
    }

    /// Apply a sparse patch. Only fields present in `update` are written;
    /// `slug` carries the regenerated value when the name changes.
    pub(crate) async fn update_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryId,
        update: &CategoryUpdate,
        slug: Option<&str>,
    ) -> Result<CategoryRecord, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE categories SET updated_at = now()");

        if let Some(name) = &update.name {
            builder.push(", name = ").push_bind(name.clone());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ").push_bind(slug.to_string());
        }

        if let Some(description) = &update.description {
            builder.push(", description = ").push_bind(description.clone());
        }

        if let Some(image) = &update.image {
            builder.push(", image = ").push_bind(image.clone());
        }

        if let Some(parent_id) = update.parent_id {
            builder
                .push(", parent_id = ")
                .push_bind(parent_id.map(CategoryId::into_i64));
        }

        if let Some(is_active) = update.is_active {
            builder.push(", is_active = ").push_bind(is_active);
        }

        if let Some(sort_order) = update.sort_order {
            builder.push(", sort_order = ").push_bind(sort_order);
        }

        builder.push(" WHERE id = ").push_bind(category.into_i64());
        builder.push(" RETURNING ").push(CATEGORY_COLUMNS);

        builder
            .build_query_as::<CategoryRecord>()
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CATEGORY_SQL)
            .bind(category.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn tree_roots(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(TREE_ROOTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn tree_children(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        parents: &[CategoryId],
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        let parent_ids: Vec<i64> = parents.iter().copied().map(CategoryId::into_i64).collect();

        query_as::<Postgres, CategoryRecord>(TREE_CHILDREN_SQL)
            .bind(parent_ids)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CategoryId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            image: row.try_get("image")?,
            parent_id: row
                .try_get::<Option<i64>, _>("parent_id")?
                .map(CategoryId::from_i64),
            is_active: row.try_get("is_active")?,
            sort_order: row.try_get("sort_order")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
