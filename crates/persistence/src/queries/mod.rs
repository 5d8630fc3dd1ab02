// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries against the configuration tables.

pub mod records;

pub use records::{
    count_records, find_parent_id, get_detail, list_child_ids, list_holiday_configs,
    list_period_configs, require_record,
};
