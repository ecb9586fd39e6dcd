//! Command reports built against the in-memory backend

mod common;

use common::MemoryGateway;
use palletctl::PalletctlError;
use palletctl::api::{Gateway, ListQuery, PackScope};
use palletctl::commands::{
    PackFields, PalletEdits, overview_report, pack_create_report, pack_list_report,
    pack_update_report, pallet_create_report, pallet_list_report, pallet_show_report,
    pallet_update_report,
};
use palletctl::display::pallet_fields;
use serde_json::json;

#[tokio::test]
async fn test_pallet_create_and_show() {
    let gateway = MemoryGateway::new();

    let created = pallet_create_report(&gateway, Some("1000"), 1).await.unwrap();
    assert_eq!(created.json()["seq_pallet"].as_f64(), Some(1000.0));
    let id = created.json()["id"].as_i64().unwrap();

    let shown = pallet_show_report(&gateway, id).await.unwrap();
    assert_eq!(shown.json()["id"], id);
    assert!(shown.text().unwrap().contains("1000"));

    let pallet = gateway.get_pallet(id).await.unwrap();
    let lines: Vec<String> = pallet_fields(&pallet)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    QR Code: —
    Completed: No
    Num Doca: —
    seq_pallet: 1000
    station: —
    Created: 2024-01-15T10:00:00Z
    Updated: —
    ");
}

#[tokio::test]
async fn test_pallet_create_defaults_to_timestamp() {
    let gateway = MemoryGateway::new();
    let created = pallet_create_report(&gateway, None, 1_700_000_000_000)
        .await
        .unwrap();
    assert_eq!(created.json()["seq_pallet"].as_f64(), Some(1_700_000_000_000.0));
}

#[tokio::test]
async fn test_pallet_create_rejects_non_numeric() {
    let gateway = MemoryGateway::new();
    let err = pallet_create_report(&gateway, Some("abc"), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, PalletctlError::InvalidInput(_)));
    assert!(err.to_string().contains("seq_pallet must be a number"));
    assert_eq!(gateway.pallet_count(), 0);
}

#[tokio::test]
async fn test_pallet_list_report() {
    let gateway = MemoryGateway::new();
    gateway.seed_pallet(1.0, "QR-A");
    gateway.seed_pallet(2.0, "QR-B");
    gateway.seed_pallet(3.0, "OTHER");

    let report = pallet_list_report(&gateway, &ListQuery::new(5, 0).with_search("qr"))
        .await
        .unwrap();
    assert_eq!(report.json()["total"], 2);
    assert_eq!(report.json()["items"].as_array().map(Vec::len), Some(2));
    let text = report.text().unwrap();
    assert!(text.contains("QR-A"));
    assert!(!text.contains("OTHER"));
    assert!(text.contains("Page 1 of 1"));

    let empty = pallet_list_report(&gateway, &ListQuery::new(5, 0).with_search("zzz"))
        .await
        .unwrap();
    assert_eq!(empty.text(), Some("No pallets matching 'zzz'."));
}

#[tokio::test]
async fn test_pallet_update_keeps_other_fields() {
    let gateway = MemoryGateway::new();
    let pallet = gateway.seed_pallet(5.0, "QR-A");

    let edits = PalletEdits {
        completed: Some(true),
        station: Some("3".to_string()),
        ..Default::default()
    };
    let report = pallet_update_report(&gateway, pallet.id, &edits).await.unwrap();
    assert_eq!(report.json()["completed"], json!(true));
    assert_eq!(report.json()["station"].as_f64(), Some(3.0));
    assert_eq!(report.json()["qr_code"], json!("QR-A"));
    assert_eq!(report.json()["seq_pallet"].as_f64(), Some(5.0));
}

#[tokio::test]
async fn test_pallet_update_requires_a_field() {
    let gateway = MemoryGateway::new();
    let pallet = gateway.seed_pallet(5.0, "QR-A");
    let err = pallet_update_report(&gateway, pallet.id, &PalletEdits::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PalletctlError::InvalidInput(_)));
}

#[tokio::test]
async fn test_pallet_show_missing_is_request_error() {
    let gateway = MemoryGateway::new();
    let err = pallet_show_report(&gateway, 404).await.unwrap_err();
    assert_eq!(err.to_string(), "Pallet not found");
}

#[tokio::test]
async fn test_pack_lifecycle_under_pallet() {
    let gateway = MemoryGateway::new();
    let pallet = gateway.seed_pallet(1000.0, "QR-A");
    let scope = PackScope::Pallet(pallet.id);

    let empty = pack_list_report(&gateway, scope, &ListQuery::new(10, 0))
        .await
        .unwrap();
    assert_eq!(empty.text(), Some("No pack items"));

    let fields = PackFields {
        qr_code: Some("P-1".to_string()),
        orig: Some("2".to_string()),
        ..Default::default()
    };
    let created = pack_create_report(&gateway, scope, &fields, 42).await.unwrap();
    assert_eq!(created.json()["seq_pack"].as_f64(), Some(42.0));
    assert_eq!(created.json()["seq_pallet"].as_f64(), Some(1000.0));
    let pack_id = created.json()["id"].as_i64().unwrap();

    let listed = pack_list_report(&gateway, scope, &ListQuery::new(10, 0))
        .await
        .unwrap();
    assert_eq!(listed.json()["total"], 1);
    assert_eq!(listed.json()["scope"], format!("pallet #{}", pallet.id));

    let update = PackFields {
        lastpack: true,
        ..Default::default()
    };
    let updated = pack_update_report(&gateway, pack_id, &update, true)
        .await
        .unwrap();
    assert_eq!(updated.json()["lastpack"], json!(true));
    assert!(updated.json()["qr_code"].is_null());
    assert!(updated.json()["seq_pack"].is_null());
}

#[tokio::test]
async fn test_partial_pack_update_is_refused() {
    let gateway = MemoryGateway::new();
    let pallet = gateway.seed_pallet(1000.0, "QR-A");
    let fields = PackFields {
        qr_code: Some("P-1".to_string()),
        orig: Some("2".to_string()),
        ..Default::default()
    };
    pack_create_report(&gateway, PackScope::Pallet(pallet.id), &fields, 42)
        .await
        .unwrap();

    let partial = PackFields {
        qr_code: Some("P-2".to_string()),
        ..Default::default()
    };
    let pack_id = gateway.packs_of(pallet.id)[0].id;
    let err = pack_update_report(&gateway, pack_id, &partial, false)
        .await
        .unwrap_err();
    assert!(matches!(err, PalletctlError::InvalidInput(_)));
    assert!(err.to_string().contains("--orig, --seq-pack, --pospallet, --robot-num"));

    let pack = &gateway.packs_of(pallet.id)[0];
    assert_eq!(pack.qr_code.as_deref(), Some("P-1"));
    assert_eq!(pack.orig, Some(2));
    assert_eq!(pack.seq_pack, Some(42.0));
}

#[tokio::test]
async fn test_orphan_pack_listing() {
    let gateway = MemoryGateway::new();
    let empty = pack_list_report(&gateway, PackScope::Orphans, &ListQuery::new(10, 0))
        .await
        .unwrap();
    assert_eq!(empty.text(), Some("No orphan packs"));

    gateway.seed_orphan_pack("LOOSE");
    let listed = pack_list_report(&gateway, PackScope::Orphans, &ListQuery::new(10, 0))
        .await
        .unwrap();
    assert_eq!(listed.json()["total"], 1);
    assert!(listed.text().unwrap().contains("LOOSE"));
}

#[tokio::test]
async fn test_overview_report() {
    let gateway = MemoryGateway::new();
    let empty = overview_report(&gateway, &ListQuery::new(10, 0)).await.unwrap();
    assert_eq!(empty.text(), Some("No overview data"));

    gateway.seed_overview(vec![
        serde_json::from_value(json!({
            "fecha": "2024-01-15T08:00:00Z",
            "iden_pallet": 7,
            "palet_completo": 0
        }))
        .unwrap(),
    ]);
    let report = overview_report(&gateway, &ListQuery::new(10, 0)).await.unwrap();
    let text = report.text().unwrap();
    assert!(text.contains("15-01-2024"));
    assert!(text.contains("PALET COMPLETO"));
    assert_eq!(report.json()["total"], 1);
}
