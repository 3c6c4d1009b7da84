//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        pagination::Page,
        products::records::ProductId,
        reviews::{
            data::NewReview,
            errors::ReviewsServiceError,
            records::ReviewRecord,
            repository::PgReviewsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(
        &self,
        product: ProductId,
        page: Page,
    ) -> Result<(Vec<ReviewRecord>, i64), ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.count_reviews(&mut tx, product).await?;
        let reviews = self.repository.list_reviews(&mut tx, product, page).await?;

        tx.commit().await?;

        Ok((reviews, total))
    }

    async fn create_review(
        &self,
        product: ProductId,
        user_id: String,
        new: NewReview,
        is_verified_purchase: bool,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_review(&mut tx, product, &user_id, &new, is_verified_purchase)
            .await?;

        // Full recompute over the current approved set rather than an
        // incremental update, so the cached rating is correct regardless of
        // prior state.
        let (rating, count) = self.repository.rating_summary(&mut tx, product).await?;

        self.repository
            .apply_rating(&mut tx, product, rating, i32::try_from(count)?)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Approved reviews for one product, newest first, plus the total count
    /// under the same predicate.
    async fn list_reviews(
        &self,
        product: ProductId,
        page: Page,
    ) -> Result<(Vec<ReviewRecord>, i64), ReviewsServiceError>;

    /// Persist a review, then recompute the owning product's cached rating
    /// and review count from all currently-approved reviews.
    async fn create_review(
        &self,
        product: ProductId,
        user_id: String,
        new: NewReview,
        is_verified_purchase: bool,
    ) -> Result<ReviewRecord, ReviewsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::query;
    use testresult::TestResult;

    use crate::domain::products::service::ProductsService;
    use crate::test::{
        TestContext,
        helpers::{new_product, new_review},
    };

    use super::*;

    #[tokio::test]
    async fn create_review_recomputes_product_rating() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product("Keyboard", "KB-100"), "seller-1".to_string())
            .await?;

        for rating in [5, 4, 3] {
            ctx.reviews
                .create_review(product.id, "user-1".to_string(), new_review(rating), false)
                .await?;
        }

        let refreshed = ctx.products.get_product(product.id).await?;

        assert_eq!(refreshed.rating, Decimal::new(40, 1));
        assert_eq!(refreshed.review_count, 3);

        Ok(())
    }

    #[tokio::test]
    async fn rating_is_rounded_to_one_fractional_digit() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product("Keyboard", "KB-100"), "seller-1".to_string())
            .await?;

        for rating in [5, 5, 4] {
            ctx.reviews
                .create_review(product.id, "user-1".to_string(), new_review(rating), false)
                .await?;
        }

        let refreshed = ctx.products.get_product(product.id).await?;

        // 14 / 3 = 4.666…, rounded to one digit.
        assert_eq!(refreshed.rating, Decimal::new(47, 1));

        Ok(())
    }

    #[tokio::test]
    async fn create_review_returns_persisted_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product("Keyboard", "KB-100"), "seller-1".to_string())
            .await?;

        let mut new = new_review(5);
        new.title = Some("Clicky".to_string());
        new.comment = Some("Best board I have owned".to_string());

        let review = ctx
            .reviews
            .create_review(product.id, "user-7".to_string(), new, true)
            .await?;

        assert_eq!(review.product_id, product.id);
        assert_eq!(review.user_id, "user-7");
        assert_eq!(review.rating, 5);
        assert_eq!(review.title.as_deref(), Some("Clicky"));
        assert!(review.is_verified_purchase);
        assert!(review.is_approved, "reviews default to approved");
        assert_eq!(review.helpful_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn create_review_for_missing_product_is_refused() {
        let ctx = TestContext::new().await;

        let result = ctx
            .reviews
            .create_review(
                ProductId::from_i64(4096),
                "user-1".to_string(),
                new_review(4),
                false,
            )
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_reviews_returns_newest_first_with_total() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product("Keyboard", "KB-100"), "seller-1".to_string())
            .await?;

        for rating in [2, 3, 4] {
            ctx.reviews
                .create_review(product.id, "user-1".to_string(), new_review(rating), false)
                .await?;
        }

        let (page, total) = ctx.reviews.list_reviews(product.id, Page::new(0, 2)).await?;

        assert_eq!(total, 3, "total must reflect all approved reviews");
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].rating, 4, "newest review comes first");

        let (rest, total_again) = ctx.reviews.list_reviews(product.id, Page::new(2, 2)).await?;

        assert_eq!(total_again, 3);
        assert_eq!(rest.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn unapproved_reviews_are_excluded_from_listing_and_rating() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product("Keyboard", "KB-100"), "seller-1".to_string())
            .await?;

        // Moderation is out of scope, so unapproved rows can only appear via
        // direct storage writes; seed one that way.
        query(
            "INSERT INTO product_reviews (product_id, user_id, rating, is_approved) \
             VALUES ($1, $2, $3, FALSE)",
        )
        .bind(product.id.into_i64())
        .bind("user-2")
        .bind(1)
        .execute(ctx.db.pool())
        .await?;

        ctx.reviews
            .create_review(product.id, "user-1".to_string(), new_review(5), false)
            .await?;

        let (reviews, total) = ctx.reviews.list_reviews(product.id, Page::new(0, 10)).await?;

        assert_eq!(total, 1);
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 5);

        let refreshed = ctx.products.get_product(product.id).await?;

        assert_eq!(refreshed.rating, Decimal::new(50, 1));
        assert_eq!(refreshed.review_count, 1);

        Ok(())
    }
}
