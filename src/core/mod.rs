//! # Core Logic
//!
//! Relative time labels and active-link resolution.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • relative_time        │
//!                    │  • nav / breadcrumb     │
//!                    │  • config               │
//!                    │                         │
//!                    │  No clock. No UI. Pure. │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │  Web nav   │      │  Mobile    │
//!     │  Adapter   │      │  (caller)  │      │  (caller)  │
//!     │   (clap)   │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`timestamp`]: validated instants, the only way a time enters the core
//! - [`relative_time`]: "just now" / "N units ago" / short date
//! - [`nav`]: exact-match activeness and desktop/mobile style tokens
//! - [`breadcrumb`]: the same activeness rule over an ordered trail
//! - [`clock`]: the `Clock` seam adapters use to obtain "now"
//! - [`config`]: TOML + env layering (the only module here that touches I/O)

pub mod breadcrumb;
pub mod clock;
pub mod config;
pub mod nav;
pub mod relative_time;
pub mod timestamp;
