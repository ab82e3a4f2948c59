use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::aggregation::AggregationType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Key,
    Label,
    Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    #[serde(default)]
    pub by: SortBy,
    #[serde(default)]
    pub order: SortOrder,
    /// Aggregation whose values drive BY_VALUE ordering; first requested type otherwise
    #[serde(default)]
    pub aggregation_type: Option<AggregationType>,
    /// Distribution key whose value represents a group when groups are sorted BY_VALUE
    #[serde(default)]
    pub primary_distribution_key: Option<String>,
}

impl SortSpec {
    pub fn new(by: SortBy, order: SortOrder) -> Self {
        Self {
            by,
            order,
            ..Self::default()
        }
    }

    pub fn with_aggregation_type(mut self, aggregation_type: AggregationType) -> Self {
        self.aggregation_type = Some(aggregation_type);
        self
    }

    pub fn with_primary_distribution_key(mut self, key: &str) -> Self {
        self.primary_distribution_key = Some(key.to_string());
        self
    }
}
