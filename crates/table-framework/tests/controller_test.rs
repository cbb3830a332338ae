use std::sync::Arc;

use table_framework::mock::{channel_api, expect_delete, expect_fetch_all, MockApi};
use table_framework::{
    ApiError, EntityApi, ListPhase, PageRequest, RemovalConfirm, StaticConfirm, TableContext,
    TableController, TableHandle, TableRecord,
};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Gadget {
    id: String,
    name: String,
}

#[derive(Debug)]
struct GadgetCreate {
    name: String,
}

#[derive(Debug)]
struct GadgetUpdate {
    name: Option<String>,
}

impl TableRecord for Gadget {
    type Id = String;
    type Create = GadgetCreate;
    type Update = GadgetUpdate;

    fn id(&self) -> &String {
        &self.id
    }

    fn kind_label() -> &'static str {
        "Gadget"
    }
}

fn gadget(id: &str, name: &str) -> Gadget {
    Gadget {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn spawn_table(
    api: Arc<dyn EntityApi<Gadget>>,
    confirm: Arc<dyn RemovalConfirm>,
) -> TableHandle<Gadget> {
    let (controller, table) = TableController::new(16);
    tokio::spawn(controller.run(TableContext { api, confirm }));
    table
}

// --- Tests ---

#[tokio::test]
async fn test_load_populates_rows_in_fetch_order() {
    let api = MockApi::new();
    api.expect_fetch_all().return_ok(vec![
        gadget("gadget_1", "Anvil"),
        gadget("gadget_2", "Bolt"),
        gadget("gadget_3", "Crank"),
    ]);
    let table = spawn_table(Arc::new(api.clone()), Arc::new(StaticConfirm(true)));

    let count = table.load().await.unwrap();
    assert_eq!(count, 3);

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, ListPhase::Loaded);
    assert!(!snapshot.is_loading());
    let ids: Vec<&str> = snapshot.items.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["gadget_1", "gadget_2", "gadget_3"]);

    api.verify();
}

#[tokio::test]
async fn test_load_failure_keeps_previous_rows_and_notifies() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil")]);
    api.expect_fetch_all()
        .return_err(ApiError::Unreachable("connection refused".into()));
    let table = spawn_table(Arc::new(api.clone()), Arc::new(StaticConfirm(true)));

    table.load().await.unwrap();
    let result = table.load().await;
    assert!(result.is_err(), "second load should report the fetch failure");

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, ListPhase::Error);
    assert_eq!(snapshot.items.len(), 1, "prior rows must survive the failure");
    assert_eq!(
        snapshot.notification.as_ref().map(|n| n.message.as_str()),
        Some("Error getting data")
    );

    table.dismiss_notification().await.unwrap();
    let snapshot = table.snapshot().await.unwrap();
    assert!(snapshot.notification.is_none());

    api.verify();
}

#[tokio::test]
async fn test_create_result_appends_at_the_end() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil"), gadget("gadget_2", "Bolt")]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    table
        .create_result(Some(gadget("gadget_3", "Crank")))
        .await
        .unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 3);
    assert_eq!(snapshot.items.last().unwrap().id, "gadget_3");
    assert_eq!(
        snapshot.notification.as_ref().map(|n| n.message.as_str()),
        Some("Gadget created successfully")
    );
}

#[tokio::test]
async fn test_create_result_none_leaves_rows_untouched() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil")]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    table.create_result(None).await.unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(
        snapshot.notification.as_ref().map(|n| n.message.as_str()),
        Some("Error creating gadget")
    );
}

#[tokio::test]
async fn test_update_result_replaces_in_place() {
    let api = MockApi::new();
    api.expect_fetch_all().return_ok(vec![
        gadget("gadget_1", "Anvil"),
        gadget("gadget_2", "Bolt"),
        gadget("gadget_3", "Crank"),
    ]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    table
        .update_result(Some(gadget("gadget_2", "Bigger Bolt")))
        .await
        .unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 3);
    assert_eq!(snapshot.items[0].name, "Anvil");
    assert_eq!(snapshot.items[1].name, "Bigger Bolt");
    assert_eq!(snapshot.items[2].name, "Crank");
    assert_eq!(
        snapshot.notification.as_ref().map(|n| n.message.as_str()),
        Some("Gadget updated successfully")
    );
}

#[tokio::test]
async fn test_update_result_for_vanished_row_is_guarded() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil")]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    // The row was removed while the update was in flight.
    table
        .update_result(Some(gadget("gadget_9", "Ghost")))
        .await
        .unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].id, "gadget_1");
}

#[tokio::test]
async fn test_update_result_none_leaves_rows_untouched() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil")]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    table.update_result(None).await.unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].name, "Anvil");
    assert_eq!(
        snapshot.notification.as_ref().map(|n| n.message.as_str()),
        Some("Error updating gadget")
    );
}

#[tokio::test]
async fn test_open_update_sets_the_record_being_edited() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil"), gadget("gadget_2", "Bolt")]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    let opened = table.open_update("gadget_2".to_string()).await.unwrap();
    assert!(opened);

    let snapshot = table.snapshot().await.unwrap();
    assert!(snapshot.update_open());
    assert_eq!(snapshot.editing.as_ref().map(|g| g.id.as_str()), Some("gadget_2"));

    // Closing clears the record being edited.
    table.close_update().await.unwrap();
    let snapshot = table.snapshot().await.unwrap();
    assert!(!snapshot.update_open());
    assert!(snapshot.editing.is_none());
}

#[tokio::test]
async fn test_open_update_unknown_id_is_a_silent_noop() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil")]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    let opened = table.open_update("gadget_404".to_string()).await.unwrap();
    assert!(!opened);

    let snapshot = table.snapshot().await.unwrap();
    assert!(!snapshot.update_open());
    assert!(snapshot.editing.is_none());
    assert!(snapshot.notification.is_none(), "a stale id raises no error");
}

#[tokio::test]
async fn test_dialogs_are_mutually_exclusive() {
    let api = MockApi::new();
    api.expect_fetch_all()
        .return_ok(vec![gadget("gadget_1", "Anvil")]);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    table.open_create().await.unwrap();
    let opened = table.open_update("gadget_1".to_string()).await.unwrap();
    assert!(!opened, "update must not open on top of the create dialog");

    let snapshot = table.snapshot().await.unwrap();
    assert!(snapshot.create_open);
    assert!(!snapshot.update_open());
}

#[tokio::test]
async fn test_remove_is_optimistic_and_fire_and_forget() {
    let (api, mut receiver) = channel_api::<Gadget>(8);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(true)));

    let load_task = {
        let table = table.clone();
        tokio::spawn(async move { table.load().await })
    };
    let responder = expect_fetch_all(&mut receiver).await.unwrap();
    responder
        .send(Ok(vec![gadget("gadget_1", "Anvil"), gadget("gadget_2", "Bolt")]))
        .unwrap();
    load_task.await.unwrap().unwrap();

    // The row disappears locally before the delete request is ever answered.
    let removed = table.remove("gadget_1".to_string()).await.unwrap();
    assert!(removed);

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].id, "gadget_2");

    let (id, responder) = expect_delete(&mut receiver).await.unwrap();
    assert_eq!(id, "gadget_1");
    responder.send(Ok(())).unwrap();

    // Removing an id that is already gone removes nothing.
    let removed = table.remove("gadget_1".to_string()).await.unwrap();
    assert!(!removed);
    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    // The delete call is still dispatched; drain it.
    let (id, _responder) = expect_delete(&mut receiver).await.unwrap();
    assert_eq!(id, "gadget_1");
}

#[tokio::test]
async fn test_remove_declined_by_confirmation() {
    let (api, mut receiver) = channel_api::<Gadget>(8);
    let table = spawn_table(Arc::new(api), Arc::new(StaticConfirm(false)));

    let load_task = {
        let table = table.clone();
        tokio::spawn(async move { table.load().await })
    };
    let responder = expect_fetch_all(&mut receiver).await.unwrap();
    responder.send(Ok(vec![gadget("gadget_1", "Anvil")])).unwrap();
    load_task.await.unwrap().unwrap();

    let removed = table.remove("gadget_1".to_string()).await.unwrap();
    assert!(!removed);

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);

    // No delete request was dispatched.
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_pagination_is_pure_view_state() {
    let api = MockApi::new();
    let rows: Vec<Gadget> = (1..=25)
        .map(|n| gadget(&format!("gadget_{n}"), &format!("Gadget {n}")))
        .collect();
    api.expect_fetch_all().return_ok(rows);
    let table = spawn_table(Arc::new(api.clone()), Arc::new(StaticConfirm(true)));
    table.load().await.unwrap();

    table
        .set_page(PageRequest { index: 1, size: 10 })
        .await
        .unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 25, "changing the page never refetches");
    assert_eq!(snapshot.page, PageRequest { index: 1, size: 10 });
    assert_eq!(snapshot.page_rows().len(), 10);
    assert_eq!(snapshot.page_rows()[0].id, "gadget_11");

    // Out-of-range windows are empty, not a panic.
    table
        .set_page(PageRequest { index: 7, size: 10 })
        .await
        .unwrap();
    let snapshot = table.snapshot().await.unwrap();
    assert!(snapshot.page_rows().is_empty());

    api.verify();
}
