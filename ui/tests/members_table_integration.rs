//! Selection, bulk delete, search and paging on a loaded table.

mod common;

use common::{TestCtx, member, numbered_members};
use egui::Key;
use egui::accesskit::Role;
use kittest::Queryable;
use roster_business::{MemberField, MemberId};
use roster_ui::widgets::members::table::cells::EDIT_ROW_LABEL;
use roster_ui::widgets::members::toolbar::BULK_DELETE_LABEL;

fn alice_and_bob() -> serde_json::Value {
    serde_json::json!([
        member("1", "Alice", "alice@example.com", "admin"),
        member("2", "Bob", "bob@example.com", "member"),
    ])
}

#[tokio::test]
async fn test_bulk_delete_removes_selected_member() {
    let mut ctx = TestCtx::with_members(alice_and_bob()).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    // Header checkbox first, then Alice's row.
    harness
        .query_all_by_role(Role::CheckBox)
        .nth(1)
        .expect("Alice has a checkbox")
        .click();
    for _ in 0..2 {
        harness.step();
    }
    assert!(harness.query_by_label("1 selected").is_some());

    harness.get_by_label(BULK_DELETE_LABEL).click();
    for _ in 0..3 {
        harness.step();
    }

    let members = &harness.state().state().members;
    assert_eq!(members.rows.len(), 1);
    assert_eq!(members.rows.ids().collect::<Vec<_>>(), [MemberId::new("2")]);
    assert!(members.grid.selection().is_empty());
    assert!(harness.query_by_label("Alice").is_none());
    assert!(harness.query_by_label("Bob").is_some());
}

#[tokio::test]
async fn test_next_page_shows_following_rows() {
    let mut ctx = TestCtx::with_members(numbered_members(23)).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("1 to 10 of 23").is_some());
    assert!(harness.query_by_label("Page 1 of 3").is_some());

    harness.get_by_label("Next ›").click();
    for _ in 0..3 {
        harness.step();
    }
    assert!(harness.query_by_label("11 to 20 of 23").is_some());
    assert!(harness.query_by_label("Member 11").is_some());
    assert!(harness.query_by_label("Member 10").is_none());

    harness.get_by_label("Last »").click();
    for _ in 0..3 {
        harness.step();
    }
    assert!(harness.query_by_label("21 to 23 of 23").is_some());
    assert!(harness.query_by_label("Member 23").is_some());
}

#[tokio::test]
async fn test_search_narrows_visible_rows() {
    let mut ctx = TestCtx::with_members(numbered_members(23)).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .state_mut()
        .members
        .grid
        .set_quick_filter("ADMIN".to_owned());
    for _ in 0..3 {
        harness.step();
    }

    // Every fifth member is an admin.
    assert!(harness.query_by_label("1 to 4 of 4").is_some());
    assert!(harness.query_by_label("Member 05").is_some());
    assert!(harness.query_by_label("Member 01").is_none());
    assert_eq!(harness.state().state().members.rows.len(), 23);
}

#[tokio::test]
async fn test_edit_commit_updates_member() {
    let mut ctx = TestCtx::with_members(alice_and_bob()).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness
        .query_all_by_label(EDIT_ROW_LABEL)
        .nth(1)
        .expect("Bob has an edit button")
        .click();
    for _ in 0..3 {
        harness.step();
    }

    {
        let grid = &mut harness.state_mut().state_mut().members.grid;
        assert!(grid.is_editing(MemberId::new("2"), MemberField::Name));
        let cell = grid.editing_mut().expect("editor is open");
        assert_eq!(cell.buffer, "Bob");
        cell.buffer = "Robert".to_owned();
    }
    harness.step();

    harness.key_press(Key::Enter);
    for _ in 0..3 {
        harness.step();
    }

    let members = &harness.state().state().members;
    assert!(members.grid.editing().is_none());
    assert_eq!(members.rows.as_slice()[1].name, "Robert");
    assert!(harness.query_by_label("Robert").is_some());
    assert!(harness.query_by_label("Bob").is_none());
}
