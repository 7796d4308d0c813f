use scentdex_types::Facet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCountViewModel {
    pub value: String,
    pub count: usize,
}

/// `stats` output: how often each facet value occurs in the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsViewModel {
    pub facet: Facet,
    pub label: String,
    /// Size of the result set the counts were taken over
    pub items: usize,
    pub max_count: usize,
    pub values: Vec<ValueCountViewModel>,
}
