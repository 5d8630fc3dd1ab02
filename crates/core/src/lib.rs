// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening hours schedule engine.
//!
//! Answers two questions for a resource: is it open now, and when does it
//! next open. Configuration is read through a [`ConfigStore`]; the current
//! instant comes from a [`Clock`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod error;
mod occurrence;
mod schedule;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, StoreError};
pub use occurrence::{MAX_WEEK_OFFSET, NextOpening, Occurrences};
pub use schedule::Schedule;
pub use store::{
    ConfigStore, DETAIL_DATE_END, DETAIL_DATE_START, DETAIL_DESCRIPTION, DETAIL_WEEK_SCHEME,
    InMemoryConfigStore, StoredRecord,
};
