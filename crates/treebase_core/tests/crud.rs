//! End-to-end CRUD tests against the in-memory backend.

use serde::{Deserialize, Serialize};
use treebase_core::{
    to_field_map, AccessorConfig, AccessorError, Datable, StoreAccessor, TreePath, WritePolicy,
};
use treebase_store::MemoryBackend;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Task {
    id: String,
    title: String,
    done: bool,
}

impl Task {
    fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            done: false,
        }
    }
}

impl Datable for Task {
    fn path(&self) -> Vec<String> {
        vec!["tasks".into(), self.id.clone()]
    }
}

/// Shares the `tasks/{id}` location with `Task` but carries only a
/// subset of its fields, for exercising partial merge updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct TaskTitle {
    id: String,
    title: String,
}

impl Datable for TaskTitle {
    fn path(&self) -> Vec<String> {
        vec!["tasks".into(), self.id.clone()]
    }
}

fn tasks_path(id: &str) -> TreePath {
    TreePath::new(["tasks", id]).unwrap()
}

#[tokio::test]
async fn create_then_read_returns_equal_value() {
    let accessor = StoreAccessor::new(MemoryBackend::new());
    let task = Task::new("abc123", "x");

    accessor.create(&task).await.unwrap();
    let found: Task = accessor.read(&task).await.unwrap();
    assert_eq!(found, task);
}

#[tokio::test]
async fn scenario_create_then_read_at_explicit_path() {
    let accessor = StoreAccessor::new(MemoryBackend::new());
    let task = Task::new("abc123", "x");

    accessor.create(&task).await.unwrap();
    let found: Task = accessor.read_at(&tasks_path("abc123")).await.unwrap();
    assert_eq!(found.id, "abc123");
    assert_eq!(found.title, "x");
}

#[tokio::test]
async fn create_fully_replaces_existing_value() {
    let accessor = StoreAccessor::new(MemoryBackend::new());

    let mut task = Task::new("abc123", "first");
    task.done = true;
    accessor.create(&task).await.unwrap();

    // A second create at the same path is a full replacement, so the
    // previous `done` flag must not survive.
    accessor.create(&Task::new("abc123", "second")).await.unwrap();
    let found: Task = accessor.read(&task).await.unwrap();
    assert_eq!(found, Task::new("abc123", "second"));
}

#[tokio::test]
async fn update_merges_only_present_fields() {
    let accessor = StoreAccessor::new(MemoryBackend::new());

    let mut task = Task::new("abc123", "original");
    task.done = true;
    accessor.create(&task).await.unwrap();

    let retitled = TaskTitle {
        id: "abc123".into(),
        title: "renamed".into(),
    };
    accessor.update(&retitled).await.unwrap();

    let found: Task = accessor.read(&task).await.unwrap();
    assert_eq!(found.title, "renamed");
    // `done` was not in the update payload and must be untouched.
    assert!(found.done);
}

#[tokio::test]
async fn update_at_explicit_path_merges() {
    let accessor = StoreAccessor::new(MemoryBackend::new());
    accessor.create(&Task::new("abc123", "original")).await.unwrap();

    #[derive(Serialize)]
    struct DoneOnly {
        done: bool,
    }

    accessor
        .update_at(&tasks_path("abc123"), &DoneOnly { done: true })
        .await
        .unwrap();

    let found: Task = accessor.read_at(&tasks_path("abc123")).await.unwrap();
    assert_eq!(found.title, "original");
    assert!(found.done);
}

#[tokio::test]
async fn delete_then_read_is_not_found() {
    let accessor = StoreAccessor::new(MemoryBackend::new());
    let task = Task::new("abc123", "x");

    accessor.create(&task).await.unwrap();
    accessor.delete(&task).await.unwrap();

    let result = accessor.read::<Task>(&task).await;
    assert!(matches!(result, Err(AccessorError::NotFound { .. })));
}

#[tokio::test]
async fn delete_at_removes_descendants() {
    let accessor = StoreAccessor::new(MemoryBackend::new());
    accessor.create(&Task::new("a", "one")).await.unwrap();
    accessor.create(&Task::new("b", "two")).await.unwrap();

    accessor
        .delete_at(&TreePath::new(["tasks"]).unwrap())
        .await
        .unwrap();

    let result = accessor.read_at::<Task>(&tasks_path("a")).await;
    assert!(matches!(result, Err(AccessorError::NotFound { .. })));
}

#[tokio::test]
async fn read_siblings_returns_decodable_children_only() {
    let accessor = StoreAccessor::new(MemoryBackend::new());

    accessor.create(&Task::new("a", "one")).await.unwrap();
    accessor.create(&Task::new("b", "two")).await.unwrap();

    // A third child under the same parent that does not decode as Task.
    #[derive(Debug, Serialize, Deserialize)]
    struct Note {
        id: String,
        body: String,
    }
    impl Datable for Note {
        fn path(&self) -> Vec<String> {
            vec!["tasks".into(), self.id.clone()]
        }
    }
    accessor
        .create(&Note {
            id: "c".into(),
            body: "not a task".into(),
        })
        .await
        .unwrap();

    let siblings: Vec<Task> = accessor.read_siblings(&Task::new("a", "one")).await.unwrap();
    assert_eq!(siblings.len(), 2);
    assert!(siblings.iter().any(|t| t.id == "a"));
    assert!(siblings.iter().any(|t| t.id == "b"));
}

#[tokio::test]
async fn read_siblings_of_missing_parent_fails() {
    let accessor = StoreAccessor::new(MemoryBackend::new());
    let result = accessor.read_siblings(&Task::new("ghost", "absent")).await;
    assert!(matches!(result, Err(AccessorError::NotFound { .. })));
}

#[tokio::test]
async fn fire_and_forget_swallows_write_failures() {
    let backend = MemoryBackend::new();
    backend.set_online(false);
    let accessor = StoreAccessor::new(backend);
    let task = Task::new("abc123", "x");

    // Encoding succeeds, the transport failure is dropped by policy.
    accessor.create(&task).await.unwrap();
    accessor.update(&task).await.unwrap();
    accessor.delete(&task).await.unwrap();
}

#[tokio::test]
async fn surface_policy_forwards_write_failures() {
    let backend = MemoryBackend::new();
    backend.set_online(false);
    let config = AccessorConfig::new().with_write_policy(WritePolicy::Surface);
    let accessor = StoreAccessor::with_config(backend, config);
    let task = Task::new("abc123", "x");

    let result = accessor.create(&task).await;
    assert!(matches!(result, Err(AccessorError::Store(_))));

    let result = accessor.delete(&task).await;
    assert!(matches!(result, Err(AccessorError::Store(_))));
}

#[tokio::test]
async fn read_failures_are_always_surfaced() {
    let backend = MemoryBackend::new();
    backend.set_online(false);
    // Fire-and-forget applies to writes only.
    let accessor = StoreAccessor::new(backend);
    let task = Task::new("abc123", "x");

    let result = accessor.read::<Task>(&task).await;
    assert!(matches!(result, Err(AccessorError::Store(_))));

    let result = accessor.read_siblings::<Task>(&task).await;
    assert!(matches!(result, Err(AccessorError::Store(_))));
}

#[tokio::test]
async fn decode_error_on_wrong_shape() {
    let accessor = StoreAccessor::new(MemoryBackend::new());

    #[derive(Debug, Serialize, Deserialize)]
    struct Shapeless {
        id: String,
        title: u64,
    }
    impl Datable for Shapeless {
        fn path(&self) -> Vec<String> {
            vec!["tasks".into(), self.id.clone()]
        }
    }

    accessor
        .create(&Shapeless {
            id: "abc123".into(),
            title: 7,
        })
        .await
        .unwrap();

    let result = accessor.read_at::<Task>(&tasks_path("abc123")).await;
    assert!(matches!(result, Err(AccessorError::Decode { .. })));
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use treebase_core::from_field_map;

    proptest! {
        #[test]
        fn field_map_round_trip(
            id in "[a-z0-9]{1,16}",
            title in ".{0,40}",
            done in any::<bool>(),
        ) {
            let task = Task { id, title, done };
            let fields = to_field_map(&task).unwrap();
            let decoded: Task = from_field_map(fields).unwrap();
            prop_assert_eq!(decoded, task);
        }

        #[test]
        fn parent_path_drops_last_segment(
            id in "[a-z0-9]{1,16}",
        ) {
            let task = Task::new(&id, "t");
            let mut expected = task.path();
            expected.pop();
            prop_assert_eq!(task.parent_path(), expected);
        }
    }
}
