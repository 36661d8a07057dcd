/// Query model for document collections
///
/// Filters and sort specifications render to the usual Mongo-style JSON
/// (`{"brandName": "acme", "_id": {"$gt": ...}}`, `{"lastModified": -1}`)
/// and can also be evaluated directly against a document.
use serde_json::{json, Map, Value};
use std::cmp::Ordering;

/// Stored document (a JSON object)
pub type Document = Value;

/// Field holding the document identifier
pub const ID_FIELD: &str = "_id";

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document
    All,
    Eq {
        field: String,
        value: Value,
    },
    /// Exclusive bounds; either side may be open
    Range {
        field: String,
        gt: Option<Value>,
        lt: Option<Value>,
    },
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn range(field: impl Into<String>, gt: Option<Value>, lt: Option<Value>) -> Self {
        if gt.is_none() && lt.is_none() {
            return Filter::All;
        }
        Filter::Range {
            field: field.into(),
            gt,
            lt,
        }
    }

    /// Conjunction of `filters`; `All` members are dropped and nested
    /// conjunctions are flattened.
    pub fn and(filters: Vec<Filter>) -> Self {
        let mut flat = Vec::with_capacity(filters.len());
        for filter in filters {
            match filter {
                Filter::All => {}
                Filter::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }

        match flat.len() {
            0 => Filter::All,
            1 => flat.remove(0),
            _ => Filter::And(flat),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Renders the filter as a query document, keeping field order
    pub fn to_document(&self) -> Value {
        match self {
            Filter::All => Value::Object(Map::new()),
            Filter::Eq { field, value } => single_field(field, value.clone()),
            Filter::Range { field, gt, lt } => single_field(field, Self::range_operators(gt, lt)),
            Filter::And(filters) => {
                let mut merged = Map::new();
                for filter in filters {
                    let Value::Object(part) = filter.to_document() else {
                        continue;
                    };
                    for (key, value) in part {
                        if merged.contains_key(&key) {
                            let parts: Vec<Value> = filters.iter().map(Filter::to_document).collect();
                            return json!({ "$and": parts });
                        }
                        merged.insert(key, value);
                    }
                }
                Value::Object(merged)
            }
        }
    }

    fn range_operators(gt: &Option<Value>, lt: &Option<Value>) -> Value {
        let mut ops = Map::new();
        if let Some(gt) = gt {
            ops.insert("$gt".to_string(), gt.clone());
        }
        if let Some(lt) = lt {
            ops.insert("$lt".to_string(), lt.clone());
        }
        Value::Object(ops)
    }

    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => lookup(document, field) == Some(value),
            Filter::Range { field, gt, lt } => {
                let Some(actual) = lookup(document, field) else {
                    return false;
                };
                let above = gt
                    .as_ref()
                    .map_or(true, |gt| compare_values(actual, gt) == Some(Ordering::Greater));
                let below = lt
                    .as_ref()
                    .map_or(true, |lt| compare_values(actual, lt) == Some(Ordering::Less));
                above && below
            }
            Filter::And(filters) => filters.iter().all(|f| f.matches(document)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// Ordered list of sort keys
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    keys: Vec<(String, SortDirection)>,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::default().then(field, SortDirection::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::default().then(field, SortDirection::Descending)
    }

    pub fn then(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.keys.push((field.into(), direction));
        self
    }

    pub fn keys(&self) -> &[(String, SortDirection)] {
        &self.keys
    }

    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        for (field, direction) in &self.keys {
            doc.insert(field.clone(), Value::from(direction.as_i32()));
        }
        Value::Object(doc)
    }

    /// Orders two documents; missing fields sort before present ones
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        for (field, direction) in &self.keys {
            let ordering = match (lookup(a, field), lookup(b, field)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(x), Some(y)) => compare_values(x, y).unwrap_or(Ordering::Equal),
            };
            let ordering = match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// A bounded, sorted find
#[derive(Debug, Clone, PartialEq)]
pub struct FindQuery {
    pub filter: Filter,
    pub sort: SortSpec,
    pub limit: Option<usize>,
}

impl FindQuery {
    pub fn to_document(&self) -> Value {
        json!({
            "filter": self.filter.to_document(),
            "sort": self.sort.to_document(),
            "limit": self.limit,
        })
    }
}

fn single_field(field: &str, value: Value) -> Value {
    let mut doc = Map::new();
    doc.insert(field.to_string(), value);
    Value::Object(doc)
}

/// Resolves a (possibly dotted) field path
fn lookup<'a>(document: &'a Document, field: &str) -> Option<&'a Value> {
    field
        .split('.')
        .try_fold(document, |current, key| current.get(key))
        .filter(|value| !value.is_null())
}

fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
