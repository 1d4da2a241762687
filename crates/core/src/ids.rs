// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tutor_billing_domain::EntityId;
use uuid::Uuid;

/// A source of fresh entity identifiers.
///
/// Identifiers are generated client-side with no collision check against
/// the aggregate.
pub trait IdGenerator {
    /// Returns a new identifier.
    fn next_id(&mut self) -> EntityId;
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> EntityId {
        EntityId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Generates `prefix-1`, `prefix-2`, ... in order.
///
/// Deterministic; meant for tests and scripted imports.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `{prefix}-1`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EntityId {
        let id: EntityId = EntityId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
