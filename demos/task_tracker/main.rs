//! Basic treebase example - a task tracker.
//!
//! This example demonstrates the typed CRUD layer end to end:
//! - Defining an entity that reports its own store path
//! - Create, read, merge-update, sibling listing, and delete
//! - The fire-and-forget write policy against a failing store
//!
//! Run with: cargo run -p task_tracker

use serde::{Deserialize, Serialize};
use treebase_core::{AccessorError, Datable, StoreAccessor, TreePath};
use treebase_store::MemoryBackend;
use tracing_subscriber::EnvFilter;

/// A task stored under `tasks/{id}`.
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

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AccessorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .init();

    let backend = MemoryBackend::new();
    let accessor = StoreAccessor::new(backend);

    println!("=== treebase task tracker ===\n");

    // Create a few tasks; each one derives its own location.
    for task in [
        Task::new("abc123", "write the report"),
        Task::new("def456", "review the queue"),
        Task::new("ghi789", "file expenses"),
    ] {
        accessor.create(&task).await?;
        println!("created {} at /tasks/{}", task.title, task.id);
    }

    // Read one back by its entity-derived path.
    let probe = Task::new("abc123", "");
    let found: Task = accessor.read(&probe).await?;
    println!("\nread back: {found:?}");

    // Merge-update: mark it done without touching the title.
    let mut done = found.clone();
    done.done = true;
    accessor.update(&done).await?;

    let explicit = TreePath::new(["tasks", "abc123"])?;
    let after: Task = accessor.read_at(&explicit).await?;
    println!("after update: {after:?}");

    // List every task in the collection.
    let siblings: Vec<Task> = accessor.read_siblings(&probe).await?;
    println!("\nall tasks ({}):", siblings.len());
    for task in &siblings {
        let marker = if task.done { "x" } else { " " };
        println!("  [{marker}] {} - {}", task.id, task.title);
    }

    // Delete one and confirm it is gone.
    accessor.delete(&probe).await?;
    match accessor.read::<Task>(&probe).await {
        Err(AccessorError::NotFound { path }) => {
            println!("\ndeleted, nothing left at {path}");
        }
        other => println!("\nunexpected read outcome: {other:?}"),
    }

    Ok(())
}
