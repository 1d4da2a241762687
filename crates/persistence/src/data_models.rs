// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::diesel_schema::kv_entries;

/// Insertable row for the `kv_entries` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = kv_entries)]
pub struct NewKvEntry<'a> {
    pub entry_key: &'a str,
    pub entry_value: &'a [u8],
}
