//! 批量导入测试
//!
//! Row-level failures are logged and skipped; only transaction-level
//! failures discard the batch.

mod common;

use common::{count, setup};
use rms_server::db::repository::{import_error, product};
use rms_server::import::{csv::decode_products, import_products};
use shared::models::{ImportSummary, ProductDraft};

fn draft(name: &str, unit: &str, cost: Option<f64>, available: bool) -> ProductDraft {
    ProductDraft {
        name: name.into(),
        unit: unit.into(),
        cost_price: cost,
        is_available: available,
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let env = setup().await;
    let summary = import_products(env.pool(), &[]).await.unwrap();
    assert_eq!(summary, ImportSummary { inserted: 0, total: 0 });
    assert_eq!(count(env.pool(), "import_errors").await, 0);
}

#[tokio::test]
async fn test_tomato_scenario() {
    let env = setup().await;
    let summary = import_products(
        env.pool(),
        &[
            draft("Tomato", "kg", Some(1.5), true),
            draft("", "kg", None, false),
        ],
    )
    .await
    .unwrap();
    assert_eq!(summary, ImportSummary { inserted: 1, total: 2 });

    let errors = import_error::find_recent(env.pool(), 10).await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].entity, "product");
    assert!(errors[0].error_message.contains("name"));

    let raw: ProductDraft = serde_json::from_str(&errors[0].raw_data).unwrap();
    assert_eq!(raw.unit, "kg");
    assert_eq!(raw.name, "");

    let products = product::find_all(env.pool(), 10).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Tomato");
    assert_eq!(products[0].cost_price, Some(1.5));
    assert!(products[0].is_available);
}

#[tokio::test]
async fn test_validation_failures_are_counted_out() {
    let env = setup().await;
    let records = vec![
        draft("Flour", "kg", Some(0.8), true),
        draft("Sugar", "", None, true),
        draft("Eggs", "pcs", Some(0.2), true),
        draft("   ", "l", None, true),
        draft("Butter", "kg", None, false),
        draft("", "", None, false),
    ];

    let summary = import_products(env.pool(), &records).await.unwrap();
    assert_eq!(summary, ImportSummary { inserted: 4, total: 6 });
    assert_eq!(count(env.pool(), "products").await, 4);

    let mut messages: Vec<String> = import_error::find_recent(env.pool(), 10)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.error_message)
        .collect();
    messages.sort();
    assert_eq!(
        messages,
        vec![
            "name and unit are required",
            "name is required",
            "unit is required"
        ]
    );
}

#[tokio::test]
async fn test_reimport_updates_in_place() {
    let env = setup().await;
    import_products(env.pool(), &[draft("Milk", "l", Some(0.9), true)])
        .await
        .unwrap();
    let first = product::find_all(env.pool(), 10).await.unwrap();

    let summary = import_products(env.pool(), &[draft("Milk", "ml", Some(1.1), false)])
        .await
        .unwrap();
    assert_eq!(summary.inserted, 1);

    let second = product::find_all(env.pool(), 10).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, first[0].id);
    assert_eq!(second[0].unit, "ml");
    assert_eq!(second[0].cost_price, Some(1.1));
    assert!(!second[0].is_available);
}

#[tokio::test]
async fn test_duplicate_names_in_one_batch_last_wins() {
    let env = setup().await;
    let summary = import_products(
        env.pool(),
        &[
            draft("Rice", "kg", Some(2.0), true),
            draft("Rice", "kg", Some(2.4), true),
        ],
    )
    .await
    .unwrap();
    assert_eq!(summary, ImportSummary { inserted: 2, total: 2 });

    let products = product::find_all(env.pool(), 10).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].cost_price, Some(2.4));
}

#[tokio::test]
async fn test_store_rejection_is_recorded_and_batch_continues() {
    let env = setup().await;
    let summary = import_products(
        env.pool(),
        &[
            draft("Salt", "kg", Some(-1.0), true),
            draft("Pepper", "kg", Some(12.0), true),
        ],
    )
    .await
    .unwrap();
    assert_eq!(summary, ImportSummary { inserted: 1, total: 2 });

    let errors = import_error::find_recent(env.pool(), 10).await.unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].raw_data.contains("Salt"));
    assert!(product::find_all(env.pool(), 10)
        .await
        .unwrap()
        .iter()
        .all(|p| p.name != "Salt"));
}

#[tokio::test]
async fn test_csv_upload_feeds_pipeline() {
    let env = setup().await;
    let csv = b"name,unit,cost_price,is_available\n\
Tomato,kg,1.5,TRUE\n\
Onion,kg\n\
,kg,2,true\n\
Garlic, kg, n/a, false\n";
    let records = decode_products(csv).unwrap();
    assert_eq!(records.len(), 3);

    let summary = import_products(env.pool(), &records).await.unwrap();
    assert_eq!(summary, ImportSummary { inserted: 2, total: 3 });

    let products = product::find_all(env.pool(), 10).await.unwrap();
    let garlic = products.iter().find(|p| p.name == "Garlic").unwrap();
    assert_eq!(garlic.unit, "kg");
    assert_eq!(garlic.cost_price, None);
    assert!(!garlic.is_available);
}
