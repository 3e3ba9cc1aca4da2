use std::sync::Mutex;

use async_trait::async_trait;
use shared::models::{
    CanvasChartResponse, GuestDirectory, ListChartResponse, PositionedTable, RsvpRequest,
    SAVE_SUCCESS_MESSAGE, SimpleTable, TABLE_COUNT,
};
use shared::seating::{GuestId, Location, Position, TableRole};

use super::*;
use crate::{ClientError, ClientResult, SeatingApi};

enum SaveFailure {
    Server(&'static str),
    Transport,
}

#[derive(Default)]
struct MockApi {
    directory: Vec<String>,
    list_tables: Vec<SimpleTable>,
    canvas_tables: Vec<PositionedTable>,
    fail_fetch: bool,
    save_failure: Option<SaveFailure>,
    saved_list: Mutex<Option<Vec<SimpleTable>>>,
    saved_canvas: Mutex<Option<Vec<PositionedTable>>>,
}

impl MockApi {
    fn with_directory(names: &[&str]) -> Self {
        Self {
            directory: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn save_result(&self) -> ClientResult<String> {
        match self.save_failure {
            None => Ok(SAVE_SUCCESS_MESSAGE.to_string()),
            Some(SaveFailure::Server(message)) => Err(ClientError::Api {
                status: 500,
                code: Some(9002),
                message: message.to_string(),
                details: None,
            }),
            Some(SaveFailure::Transport) => {
                let err = serde_json::from_str::<u8>("not json").unwrap_err();
                Err(ClientError::Serialization(err))
            }
        }
    }

    fn fetch_error(&self) -> ClientResult<()> {
        if self.fail_fetch {
            return Err(ClientError::Api {
                status: 500,
                code: Some(9002),
                message: "An error occurred while fetching seating chart data.".into(),
                details: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SeatingApi for MockApi {
    async fn fetch_directory(&self) -> ClientResult<GuestDirectory> {
        Ok(GuestDirectory {
            names: self.directory.clone(),
        })
    }

    async fn fetch_list_chart(&self) -> ClientResult<ListChartResponse> {
        self.fetch_error()?;
        Ok(ListChartResponse {
            tables: self.list_tables.clone(),
            seated_guests: Vec::new(),
        })
    }

    async fn save_list_chart(&self, tables: &[SimpleTable]) -> ClientResult<String> {
        let result = self.save_result();
        if result.is_ok() {
            *self.saved_list.lock().unwrap() = Some(tables.to_vec());
        }
        result
    }

    async fn fetch_canvas_chart(&self) -> ClientResult<CanvasChartResponse> {
        self.fetch_error()?;
        Ok(CanvasChartResponse {
            tables: self.canvas_tables.clone(),
            names: Vec::new(),
        })
    }

    async fn save_canvas_chart(&self, tables: &[PositionedTable]) -> ClientResult<String> {
        let result = self.save_result();
        if result.is_ok() {
            *self.saved_canvas.lock().unwrap() = Some(tables.to_vec());
        }
        result
    }

    async fn submit_rsvp(&self, _rsvp: &RsvpRequest) -> ClientResult<String> {
        Ok("RSVP submitted successfully!".into())
    }

    async fn check_access(&self, password: &str) -> ClientResult<bool> {
        Ok(password == "forever")
    }
}

fn drop_event(guest: GuestId, from: (Location, usize), to: Option<(Location, usize)>) -> DropEvent {
    DropEvent {
        guest,
        source: DropTarget::new(from.0, from.1),
        destination: to.map(|(location, index)| DropTarget::new(location, index)),
    }
}

async fn loaded_list(api: MockApi) -> ListEditor<MockApi> {
    let mut editor = ListEditor::new(api);
    editor.load().await.unwrap();
    editor
}

async fn loaded_canvas(api: MockApi) -> CanvasEditor<MockApi> {
    let mut editor = CanvasEditor::new(api);
    editor.load().await.unwrap();
    editor
}

fn full_table_api() -> MockApi {
    let mut names: Vec<String> = (1..=8).map(|i| format!("Guest {i}")).collect();
    names.push("Latecomer".into());
    MockApi {
        list_tables: vec![SimpleTable::new(names[..8].to_vec())],
        directory: names,
        ..Default::default()
    }
}

// ========================================================================
// ListEditor
// ========================================================================

#[tokio::test]
async fn test_list_load_and_drop_scenario() {
    let mut api = MockApi::with_directory(&["Alice", "Bob", "Carol"]);
    api.list_tables = vec![SimpleTable::new(vec!["Alice".into()])];
    let mut editor = loaded_list(api).await;

    let chart = editor.chart().unwrap();
    assert_eq!(chart.names_at(Location::Pool).unwrap(), vec!["Bob", "Carol"]);
    let bob = chart.guest_at(Location::Pool, 0).unwrap();

    let outcome = editor
        .on_drag_end(&drop_event(bob, (Location::Pool, 0), Some((Location::Table(1), 1))))
        .unwrap();

    assert_eq!(outcome, DropOutcome::Moved);
    let chart = editor.chart().unwrap();
    assert_eq!(chart.names_at(Location::Table(1)).unwrap(), vec!["Alice", "Bob"]);
    assert_eq!(chart.names_at(Location::Pool).unwrap(), vec!["Carol"]);
}

#[tokio::test]
async fn test_list_drop_outside_is_ignored() {
    let mut editor = loaded_list(MockApi::with_directory(&["Alice"])).await;
    let before = editor.chart().unwrap().clone();
    let alice = before.guest_at(Location::Pool, 0).unwrap();

    let outcome = editor
        .on_drag_end(&drop_event(alice, (Location::Pool, 0), None))
        .unwrap();

    assert_eq!(outcome, DropOutcome::Ignored);
    assert_eq!(editor.chart().unwrap(), &before);
}

#[tokio::test]
async fn test_list_full_table_alert() {
    let mut editor = loaded_list(full_table_api()).await;
    let before = editor.chart().unwrap().clone();
    let latecomer = before.guest_at(Location::Pool, 0).unwrap();

    let outcome = editor
        .on_drag_end(&drop_event(latecomer, (Location::Pool, 0), Some((Location::Table(1), 2))))
        .unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Rejected {
            alert: "A table can have a maximum of 8 guests.".into()
        }
    );
    assert_eq!(editor.chart().unwrap(), &before);
}

#[tokio::test]
async fn test_list_invalid_droppable_id() {
    let mut editor = loaded_list(MockApi::with_directory(&["Alice"])).await;
    let alice = editor.chart().unwrap().guest_at(Location::Pool, 0).unwrap();

    let event = DropEvent {
        guest: alice,
        source: DropTarget::new(Location::Pool, 0),
        destination: Some(DropTarget {
            droppable_id: "dance-floor".into(),
            index: 0,
        }),
    };

    assert!(matches!(
        editor.on_drag_end(&event),
        Err(EditorError::InvalidDroppable(_))
    ));
}

#[tokio::test]
async fn test_list_drop_before_load() {
    let mut editor = ListEditor::new(MockApi::default());
    let event = drop_event(GuestId(0), (Location::Pool, 0), Some((Location::Table(1), 0)));

    assert!(matches!(editor.on_drag_end(&event), Err(EditorError::NotLoaded)));
    assert!(matches!(editor.save().await, Err(EditorError::NotLoaded)));
}

#[tokio::test]
async fn test_list_load_failure_leaves_editor_unloaded() {
    let api = MockApi {
        fail_fetch: true,
        ..MockApi::with_directory(&["Alice"])
    };
    let mut editor = ListEditor::new(api);

    assert!(editor.load().await.is_err());
    assert!(!editor.is_loaded());
    assert_eq!(
        editor.load_error(),
        Some("An error occurred while fetching seating chart data.")
    );
}

#[tokio::test]
async fn test_list_save_sends_serialized_chart() {
    let mut api = MockApi::with_directory(&["Alice", "Bob"]);
    api.list_tables = vec![SimpleTable::new(vec!["Bob".into()])];
    let mut editor = loaded_list(api).await;

    let outcome = editor.save().await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.message, "Seating chart saved successfully!");
    assert_eq!(editor.save_message(), Some("Seating chart saved successfully!"));
    assert!(!editor.is_saving());

    let saved = editor.api().saved_list.lock().unwrap().clone().unwrap();
    assert_eq!(saved.len(), TABLE_COUNT);
    assert_eq!(saved[0].guests, vec!["Bob".to_string()]);
}

#[tokio::test]
async fn test_list_failed_save_keeps_partition() {
    let api = MockApi {
        save_failure: Some(SaveFailure::Server("Database is read-only")),
        ..full_table_api()
    };
    let mut editor = loaded_list(api).await;
    let before = editor.chart().unwrap().clone();

    let outcome = editor.save().await.unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Database is read-only");
    assert!(!editor.is_saving());
    assert_eq!(editor.chart().unwrap(), &before);
}

#[tokio::test]
async fn test_list_transport_failure_uses_fallback() {
    let api = MockApi {
        save_failure: Some(SaveFailure::Transport),
        ..MockApi::with_directory(&["Alice"])
    };
    let mut editor = loaded_list(api).await;

    let outcome = editor.save().await.unwrap();

    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "An error occurred while saving the seating chart."
    );
}

// ========================================================================
// CanvasEditor
// ========================================================================

#[tokio::test]
async fn test_canvas_filter_is_case_insensitive() {
    let editor = loaded_canvas(MockApi::with_directory(&["Alice", "Malik", "Bob"])).await;

    let names: Vec<String> = editor
        .filter_unseated("AL")
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Malik"]);
    assert_eq!(editor.filter_unseated("").len(), 3);
}

#[tokio::test]
async fn test_canvas_modal_shows_first_ten_candidates() {
    let names: Vec<String> = (0..12).map(|i| format!("Guest {i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let editor = loaded_canvas(MockApi::with_directory(&refs)).await;

    let modal = editor.open_table(3).unwrap();
    assert_eq!(modal.candidates.len(), MODAL_CANDIDATE_LIMIT);
    assert_eq!(modal.candidates[0].name, "Guest 00");
    assert_eq!(modal.candidates[9].name, "Guest 09");
    assert!(modal.truncated);
    assert!(modal.seated.is_empty());
    assert_eq!(modal.role, TableRole::Guest);

    assert_eq!(editor.open_table(17).unwrap().role, TableRole::Bridal);
    assert!(editor.open_table(18).is_err());
}

#[tokio::test]
async fn test_canvas_add_and_remove_keep_directory_order() {
    let mut editor = loaded_canvas(MockApi::with_directory(&["Alice", "Bob", "Carol"])).await;
    let bob = editor.chart().unwrap().guest_at(Location::Pool, 1).unwrap();
    let alice = editor.chart().unwrap().guest_at(Location::Pool, 0).unwrap();

    editor.add_guest(2, bob).unwrap();
    editor.add_guest(2, alice).unwrap();
    let modal = editor.open_table(2).unwrap();
    let seated: Vec<&str> = modal.seated.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(seated, vec!["Bob", "Alice"]);
    assert!(!modal.truncated);

    editor.remove_guest(2, bob).unwrap();
    let chart = editor.chart().unwrap();
    assert_eq!(chart.names_at(Location::Pool).unwrap(), vec!["Bob", "Carol"]);
    assert_eq!(chart.names_at(Location::Table(2)).unwrap(), vec!["Alice"]);

    assert!(matches!(
        editor.remove_guest(2, bob),
        Err(EditorError::NotAtTable { number: 2, .. })
    ));
    assert!(matches!(
        editor.add_guest(1, alice),
        Err(EditorError::NotUnseated(_))
    ));
}

#[tokio::test]
async fn test_canvas_no_capacity_limit() {
    let names: Vec<String> = (0..9).map(|i| format!("Guest {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut editor = loaded_canvas(MockApi::with_directory(&refs)).await;

    while let Some(entry) = editor.filter_unseated("").first().cloned() {
        editor.add_guest(5, entry.id).unwrap();
    }

    assert_eq!(editor.open_table(5).unwrap().seated.len(), 9);
}

#[tokio::test]
async fn test_canvas_table_drag_snaps() {
    let mut editor = loaded_canvas(MockApi::default()).await;

    let position = editor.drag_table_end(4, 57.0, 103.0).unwrap();
    assert_eq!(position, Position::new(40.0, 120.0));

    // Offsets are relative to the current position
    let position = editor.drag_table_end(4, 15.0, -25.0).unwrap();
    assert_eq!(position, Position::new(40.0, 80.0));
    assert_eq!(editor.open_table(4).unwrap().position, Position::new(40.0, 80.0));
}

#[tokio::test]
async fn test_canvas_save_message_lifecycle() {
    let mut api = MockApi::with_directory(&["Alice"]);
    api.canvas_tables = vec![PositionedTable {
        guests: vec!["Alice".into()],
        x: 120.0,
        y: 40.0,
    }];
    let mut editor = loaded_canvas(api).await;

    let outcome = editor.save().await.unwrap();
    assert!(outcome.success);
    assert_eq!(editor.save_message(), Some("Seating chart saved successfully!"));

    editor.clear_save_message();
    assert_eq!(editor.save_message(), None);

    let saved = editor.api().saved_canvas.lock().unwrap().clone().unwrap();
    assert_eq!(saved.len(), TABLE_COUNT);
    assert_eq!(saved[0].x, 120.0);
    assert_eq!(saved[0].guests, vec!["Alice".to_string()]);
}

#[tokio::test]
async fn test_canvas_failed_save_keeps_partition() {
    let api = MockApi {
        save_failure: Some(SaveFailure::Transport),
        ..MockApi::with_directory(&["Alice", "Bob"])
    };
    let mut editor = loaded_canvas(api).await;
    let alice = editor.chart().unwrap().guest_at(Location::Pool, 0).unwrap();
    editor.add_guest(1, alice).unwrap();
    editor.drag_table_end(1, 200.0, 200.0).unwrap();
    let before = editor.chart().unwrap().clone();

    let outcome = editor.save().await.unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.message, "An error occurred while saving.");
    assert_eq!(editor.chart().unwrap(), &before);
    assert!(editor.api().saved_canvas.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_canvas_static_objects() {
    let editor = CanvasEditor::new(MockApi::default());
    let objects = editor.static_objects();

    assert_eq!(objects.len(), 6);
    assert_eq!(objects[0].name, "Cake Table");
    assert_eq!(objects.iter().filter(|o| o.name == "Pillar").count(), 4);
}

// ========================================================================
// Session
// ========================================================================

#[tokio::test]
async fn test_session_flags() {
    let api = MockApi::default();
    let mut session = crate::Session::default();

    assert!(!session.unlock(&api, "wrong").await.unwrap());
    assert!(!session.authenticated);
    assert!(session.unlock(&api, "forever").await.unwrap());
    assert!(session.authenticated);

    let rsvp = RsvpRequest {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        meal: "Fish".into(),
    };
    session.submit_rsvp(&api, &rsvp).await.unwrap();
    assert_eq!(session, crate::Session::new(true, true));
}
