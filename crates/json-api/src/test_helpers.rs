//! Test helpers.
//!
//! Handler tests run against mock services; a mock method that a test did
//! not configure panics on first call, so every collaboration is explicit.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;

use vitrine_app::{
    context::AppContext,
    domain::{
        categories::{
            MockCategoriesService,
            records::{CategoryId, CategoryRecord},
        },
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
        reviews::{
            MockReviewsService,
            records::{ReviewId, ReviewRecord},
        },
    },
};

use crate::state::State;

fn state(
    categories: MockCategoriesService,
    products: MockProductsService,
    reviews: MockReviewsService,
) -> Arc<State> {
    State::shared(
        AppContext {
            categories: Arc::new(categories),
            products: Arc::new(products),
            reviews: Arc::new(reviews),
        },
        "vitrine-test".to_string(),
    )
}

fn service_with_state(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn empty_state() -> Arc<State> {
    state(
        MockCategoriesService::new(),
        MockProductsService::new(),
        MockReviewsService::new(),
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service_with_state(
        state(
            categories,
            MockProductsService::new(),
            MockReviewsService::new(),
        ),
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with_state(
        state(
            MockCategoriesService::new(),
            products,
            MockReviewsService::new(),
        ),
        route,
    )
}

pub(crate) fn reviews_service(
    products: MockProductsService,
    reviews: MockReviewsService,
    route: Router,
) -> Service {
    service_with_state(state(MockCategoriesService::new(), products, reviews), route)
}

pub(crate) fn make_category(id: i64, name: &str) -> CategoryRecord {
    CategoryRecord {
        id: CategoryId::from_i64(id),
        name: name.to_string(),
        slug: vitrine_app::slug::slugify(name),
        description: None,
        image: None,
        parent_id: None,
        is_active: true,
        sort_order: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(id: i64, name: &str, seller_id: &str) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: name.to_string(),
        slug: vitrine_app::slug::slugify(name),
        description: None,
        short_description: None,
        sku: format!("SKU-{id}"),
        price: Decimal::new(1999, 2),
        compare_price: None,
        cost_price: None,
        stock: 10,
        low_stock_threshold: 5,
        category_id: None,
        seller_id: seller_id.to_string(),
        brand: None,
        images: Vec::new(),
        attributes: json!({}),
        is_active: true,
        is_featured: false,
        rating: Decimal::ZERO,
        review_count: 0,
        sold_count: 0,
        view_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_review(id: i64, product_id: i64, rating: i32) -> ReviewRecord {
    ReviewRecord {
        id: ReviewId::from_i64(id),
        product_id: ProductId::from_i64(product_id),
        user_id: "user-1".to_string(),
        rating,
        title: None,
        comment: None,
        images: Vec::new(),
        is_verified_purchase: false,
        is_approved: true,
        helpful_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
