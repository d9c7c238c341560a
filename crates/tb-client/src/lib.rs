//! External tool clients for ticket-branch
//!
//! Everything that leaves the process goes through a [`CommandRunner`], so the
//! issue tracker and git clients can be driven by a scripted runner in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │   TicketResolver     │      │       GitCli         │
//! │  - resolve()         │      │  - branch_exists()   │
//! │  - search()          │      │  - checkout()        │
//! └──────────┬───────────┘      │  - push_upstream()   │
//!            ▼                  └──────────┬───────────┘
//! ┌──────────────────────┐                 │
//! │   IssueTrackerCli    │                 │
//! │  - probe()           │                 │
//! │  - list_page()       │                 │
//! └──────────┬───────────┘                 │
//!            └───────────────┬─────────────┘
//!                            ▼
//!               ┌──────────────────────────┐
//!               │   CommandRunner trait    │
//!               └──────────────────────────┘
//!                            │
//!        ┌───────────────────┼───────────────────┐
//!        ▼                   ▼                   ▼
//! ┌─────────────┐   ┌────────────────┐   ┌────────────────┐
//! │ TokioRunner │   │ BlockingRunner │   │ ScriptedRunner │
//! │ (async)     │   │ (spawn_blocking│   │ (tests)        │
//! └─────────────┘   └────────────────┘   └────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tb_client::{IssueTrackerCli, TicketResolver, TokioRunner};
//!
//! # async fn example() {
//! let tracker = IssueTrackerCli::new(Arc::new(TokioRunner), "jira");
//! let resolver = TicketResolver::new(tracker, 100, 300);
//! let resolution = resolver.resolve("ABC-42").await;
//! println!("branch fragment: {}", resolution.title.as_str());
//! # }
//! ```

pub mod error;
pub mod git;
pub mod process;
pub mod resolver;
pub mod tracker;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{GitError, ProcessError};
pub use git::{BranchLocation, GitCli};
pub use process::{BlockingRunner, CommandOutput, CommandRunner, CommandSpec, TokioRunner};
pub use resolver::{
    normalize_fragment, sanitize_branch_fragment, ExtractionRule, Resolution, ResolveNotice,
    ResolvedTitle, TicketResolver,
};
pub use tracker::{escape_query, Availability, IssueTrackerCli, SearchPage};
