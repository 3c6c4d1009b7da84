//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar,
    types::Json,
};

use crate::domain::{
    pagination::Page,
    products::records::ProductId,
    reviews::{
        data::NewReview,
        records::{ReviewId, ReviewRecord},
    },
};

const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");
const COUNT_REVIEWS_SQL: &str = include_str!("sql/count_reviews.sql");
const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const RATING_SUMMARY_SQL: &str = include_str!("sql/rating_summary.sql");
const APPLY_RATING_SQL: &str = include_str!("sql/apply_rating.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Approved reviews for one product, newest first.
    pub(crate) async fn list_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        page: Page,
    ) -> Result<Vec<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(LIST_REVIEWS_SQL)
            .bind(product.into_i64())
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_REVIEWS_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        user_id: &str,
        new: &NewReview,
        is_verified_purchase: bool,
    ) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(CREATE_REVIEW_SQL)
            .bind(product.into_i64())
            .bind(user_id)
            .bind(new.rating)
            .bind(new.title.as_deref())
            .bind(new.comment.as_deref())
            .bind(Json(new.images.clone()))
            .bind(is_verified_purchase)
            .fetch_one(&mut **tx)
            .await
    }

    /// Aggregate the full current approved set for one product: mean rating
    /// rounded to one fractional digit (0 when empty) and the count.
    pub(crate) async fn rating_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<(Decimal, i64), sqlx::Error> {
        query_as::<Postgres, (Decimal, i64)>(RATING_SUMMARY_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn apply_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        rating: Decimal,
        review_count: i32,
    ) -> Result<(), sqlx::Error> {
        query(APPLY_RATING_SQL)
            .bind(product.into_i64())
            .bind(rating)
            .bind(review_count)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ReviewId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            user_id: row.try_get("user_id")?,
            rating: row.try_get("rating")?,
            title: row.try_get("title")?,
            comment: row.try_get("comment")?,
            images: row.try_get::<Json<Vec<String>>, _>("images")?.0,
            is_verified_purchase: row.try_get("is_verified_purchase")?,
            is_approved: row.try_get("is_approved")?,
            helpful_count: row.try_get("helpful_count")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
