//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::{
            errors::CategoriesServiceError,
            data::{CategoryFilter, CategoryUpdate, NewCategory},
            records::{CategoryId, CategoryRecord, CategoryTreeNode},
            repository::PgCategoriesRepository,
        },
        pagination::Page,
    },
    slug::slugify,
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(
        &self,
        filter: CategoryFilter,
        page: Page,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx, filter, page).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryId,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn get_category_by_slug(
        &self,
        slug: String,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category_by_slug(&mut tx, &slug).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        new: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        // Count-then-suffix disambiguation. Not race-safe by contract; the
        // unique constraint on slug is the backstop.
        let mut slug = slugify(&new.name);

        if self.repository.slug_exists(&mut tx, &slug).await? {
            let count = self.repository.count_categories(&mut tx).await?;

            slug = format!("{slug}-{}", count + 1);

            tracing::debug!(%slug, "category slug taken, suffixed with row count");
        }

        let created = self.repository.create_category(&mut tx, &new, &slug).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        // Renaming regenerates the slug. Disambiguation is not re-run here;
        // a colliding rename surfaces AlreadyExists from the constraint.
        let slug = update.name.as_deref().map(slugify);

        let updated = self
            .repository
            .update_category(&mut tx, category, &update, slug.as_deref())
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn category_tree(&self) -> Result<Vec<CategoryTreeNode>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let roots = self.repository.tree_roots(&mut tx).await?;
        let root_ids: Vec<CategoryId> = roots.iter().map(|root| root.id).collect();
        let children = self.repository.tree_children(&mut tx, &root_ids).await?;

        tx.commit().await?;

        let tree = roots
            .into_iter()
            .map(|root| {
                let subcategories = children
                    .iter()
                    .filter(|child| child.parent_id == Some(root.id))
                    .cloned()
                    .collect();

                CategoryTreeNode {
                    category: root,
                    subcategories,
                }
            })
            .collect();

        Ok(tree)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieve categories for one parent (roots when `parent_id` is unset),
    /// ordered by sort order then name.
    async fn list_categories(
        &self,
        filter: CategoryFilter,
        page: Page,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryId,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Retrieve a single category by slug.
    async fn get_category_by_slug(
        &self,
        slug: String,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Create a category, deriving a unique slug from its name.
    async fn create_category(
        &self,
        new: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Apply a sparse patch; a new name regenerates the slug.
    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Hard-delete a category. Dependent rows are nullified by the schema.
    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError>;

    /// Active root categories, each with its direct subcategories.
    async fn category_tree(&self) -> Result<Vec<CategoryTreeNode>, CategoriesServiceError>;
}
