//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        categories::PgCategoriesService, products::PgProductsService, reviews::PgReviewsService,
    },
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub categories: PgCategoriesService,
    pub products: PgProductsService,
    pub reviews: PgReviewsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            categories: PgCategoriesService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            reviews: PgReviewsService::new(db),
            db: test_db,
        }
    }
}
