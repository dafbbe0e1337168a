use mongodb::bson::Document;

use super::entity::Entity;
use super::record::ID_FIELD;

/// Hard cap for public listings.
pub const PUBLIC_LIST_CAP: i64 = 100;

/// Hard cap for admin listings.
pub const ADMIN_LIST_CAP: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Sort document for the store. `_id` follows the primary key in the
    /// same direction, so equal keys come back in insertion order.
    pub fn to_document(&self) -> Document {
        let order = match self.direction {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        };
        let mut sort = Document::new();
        sort.insert(self.field, order);
        if self.field != ID_FIELD {
            sort.insert(ID_FIELD, order);
        }
        sort
    }
}

/// Equality filter + one sort key (with `_id` as tiebreak) + limit.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub filter: Document,
    pub sort: Option<SortSpec>,
    pub limit: i64,
}

impl ListRequest {
    pub fn public<T: Entity>() -> Self {
        Self {
            filter: Document::new(),
            sort: Some(SortSpec::desc(T::PUBLIC_SORT_FIELD)),
            limit: PUBLIC_LIST_CAP,
        }
    }

    pub fn admin<T: Entity>() -> Self {
        Self {
            filter: Document::new(),
            sort: Some(SortSpec::desc(T::ADMIN_SORT_FIELD)),
            limit: ADMIN_LIST_CAP,
        }
    }

    pub fn matching(mut self, filter: Document) -> Self {
        self.filter = filter;
        self
    }

    pub fn sorted(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}
