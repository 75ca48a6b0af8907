//! The members list is requested once, when the app first shows the table.

mod common;

use common::{TestCtx, member, numbered_members};
use kittest::Queryable;
use roster_business::LoadStatus;
use roster_ui::widgets::EMPTY_LABEL;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_members_are_displayed_after_fetch() {
    let mut ctx = TestCtx::with_members(serde_json::json!([
        member("1", "Aaron Miles", "aaron@mailinator.com", "member"),
        member("2", "Aishwarya Naik", "aishwarya@mailinator.com", "admin"),
    ]))
    .await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Aaron Miles").is_some());
    assert!(harness.query_by_label("aishwarya@mailinator.com").is_some());
    assert!(harness.query_by_label_contains("2 members").is_some());
    assert!(harness.query_by_label(EMPTY_LABEL).is_none());
}

#[tokio::test]
async fn test_fetch_happens_once_across_frames() {
    // The mock expects exactly one request; extra requests fail on drop.
    let mut ctx = TestCtx::with_members(numbered_members(3)).await;
    ctx.settle().await;

    for _ in 0..20 {
        ctx.harness_mut().step();
    }

    assert!(ctx.harness().state().state().members.loader.status().is_loaded());
}

#[tokio::test]
async fn test_server_error_leaves_grid_empty() {
    let mut ctx = TestCtx::with_response(ResponseTemplate::new(500)).await;
    ctx.settle().await;

    let members = &ctx.harness().state().state().members;
    assert!(members.rows.is_empty());
    assert!(matches!(members.loader.status(), LoadStatus::Failed(_)));
    assert!(ctx.harness_mut().query_by_label(EMPTY_LABEL).is_some());
}

#[tokio::test]
async fn test_malformed_body_leaves_grid_empty() {
    let mut ctx =
        TestCtx::with_response(ResponseTemplate::new(200).set_body_string("{\"members\": 3}"))
            .await;
    ctx.settle().await;

    assert!(ctx.harness().state().state().members.rows.is_empty());
    assert!(ctx.harness_mut().query_by_label(EMPTY_LABEL).is_some());
}
