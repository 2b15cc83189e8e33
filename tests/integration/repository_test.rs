//! `PgOrderRepository` against PostgreSQL.

use chrono::{SubsecRound, Utc};
use rust_decimal_macros::dec;

use orderdesk_core::error::ErrorKind;
use orderdesk_core::traits::Repository;
use orderdesk_core::types::OrderId;
use orderdesk_database::OrderRepository;
use orderdesk_entity::order::{CreateOrder, OrderStatus};

use crate::helpers::TestDatabase;

#[tokio::test]
async fn test_save_assigns_identity_and_timestamp() {
    let db = TestDatabase::start().await;
    let repo = db.order_repo();
    // Postgres stores microseconds.
    let before = Utc::now().trunc_subsecs(6);

    let order = repo
        .save(&CreateOrder::customer("checkout@enouveau.io", dec!(42.90)).expect("valid"))
        .await
        .expect("save");

    assert_eq!(order.status(), OrderStatus::Created);
    assert!(order.created_at() >= before);
    assert_eq!(order.line().amount(), Some(dec!(42.90)));

    let found = repo.find_by_id(&order.id()).await.expect("find");
    assert_eq!(found, Some(order));
}

#[tokio::test]
async fn test_find_all_in_insertion_order() {
    let db = TestDatabase::start().await;
    let repo = db.order_repo();

    let a = repo
        .save(&CreateOrder::stock("A", 1).expect("valid"))
        .await
        .expect("a");
    let b = repo
        .save(&CreateOrder::customer("b@enouveau.io", dec!(7)).expect("valid"))
        .await
        .expect("b");

    assert_eq!(repo.find_all().await.expect("list"), vec![a, b]);
    assert_eq!(repo.count().await.expect("count"), 2);
}

#[tokio::test]
async fn test_mark_paid_is_one_way() {
    let db = TestDatabase::start().await;
    let repo = db.order_repo();
    let order = repo
        .save(&CreateOrder::stock("SKU-1", 2).expect("valid"))
        .await
        .expect("save");

    let paid = repo
        .mark_paid(&order.id())
        .await
        .expect("pay")
        .expect("exists");
    assert_eq!(paid.status(), OrderStatus::Paid);
    assert_eq!(paid.created_at(), order.created_at());

    let err = repo.mark_paid(&order.id()).await.expect_err("second pay");
    assert_eq!(err.kind, ErrorKind::Conflict);

    assert!(repo.mark_paid(&OrderId::new()).await.expect("ok").is_none());
    assert!(repo.health_check().await.expect("health"));
}
