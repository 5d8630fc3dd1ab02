// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writes to the configuration tables.

pub mod records;

pub use records::{
    insert_record, replace_holiday_configs, replace_period_configs, update_parent, upsert_detail,
};
