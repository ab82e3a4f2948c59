use std::cmp::Ordering;

use super::result::GroupEntry;
use crate::engine::types::{SortBy, SortSpec};

/// What one entry is compared on.
#[derive(Debug, Clone, Copy)]
struct SortItem<'a> {
    key: &'a str,
    label: &'a str,
    value: Option<f64>,
}

fn compare(a: &SortItem<'_>, b: &SortItem<'_>, spec: &SortSpec) -> Ordering {
    match spec.by {
        SortBy::Key => spec.order.apply(a.key.cmp(b.key)),
        SortBy::Label => spec
            .order
            .apply(a.label.cmp(b.label).then_with(|| a.key.cmp(b.key))),
        // nulls last regardless of direction
        SortBy::Value => match (a.value, b.value) {
            (Some(x), Some(y)) => spec.order.apply(x.total_cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Stable permutation of `items` under `spec`.
fn order_of(items: &[SortItem<'_>], spec: &SortSpec) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| compare(&items[a], &items[b], spec));
    indices
}

/// Ordering of both axes, computed once and applied to every measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperMapOrder {
    /// Group positions in output order
    pub groups: Vec<usize>,
    /// Distribution positions in output order, per original group position
    pub distributions: Vec<Vec<usize>>,
}

impl HyperMapOrder {
    /// Reorders one measure's entries. Groups missing from `groups` are dropped.
    pub fn apply(&self, data: Vec<GroupEntry>) -> Vec<GroupEntry> {
        let mut slots: Vec<Option<GroupEntry>> = data.into_iter().map(Some).collect();
        let mut out = Vec::with_capacity(self.groups.len());
        for &g in &self.groups {
            let Some(mut group) = slots.get_mut(g).and_then(Option::take) else {
                continue;
            };
            if let Some(order) = self.distributions.get(g) {
                let mut dist: Vec<_> = group.value.into_iter().map(Some).collect();
                group.value = order
                    .iter()
                    .filter_map(|&d| dist.get_mut(d).and_then(Option::take))
                    .collect();
            }
            out.push(group);
        }
        out
    }
}

/// Orders the group axis and, independently per group, the distribution axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSorter {
    group_sort: SortSpec,
    distribution_sort: SortSpec,
}

impl ResultSorter {
    /// Unset specs sort by key ascending.
    pub fn new(group_sort: Option<&SortSpec>, distribution_sort: Option<&SortSpec>) -> Self {
        Self {
            group_sort: group_sort.cloned().unwrap_or_default(),
            distribution_sort: distribution_sort.cloned().unwrap_or_default(),
        }
    }

    /// Computes the ordering from unsorted entries. Groups are ordered on
    /// `group_data`, distributions on `distribution_data`; both describe the
    /// same axes, possibly under different measures.
    ///
    /// `group_totals[i]` is the collapsed value of group `i` over all its
    /// samples, which represents the group in BY_VALUE sorting unless a
    /// primary distribution key is nominated.
    pub fn order(
        &self,
        group_data: &[GroupEntry],
        group_totals: &[Option<f64>],
        distribution_data: &[GroupEntry],
    ) -> HyperMapOrder {
        HyperMapOrder {
            groups: self.group_order(group_data, group_totals),
            distributions: distribution_data
                .iter()
                .map(|g| self.distribution_order(g))
                .collect(),
        }
    }

    pub fn group_order(&self, data: &[GroupEntry], group_totals: &[Option<f64>]) -> Vec<usize> {
        let primary = self.group_sort.primary_distribution_key.as_deref();
        let items: Vec<SortItem<'_>> = data
            .iter()
            .enumerate()
            .map(|(i, g)| SortItem {
                key: &g.key,
                label: &g.label,
                value: match primary {
                    Some(key) => g.distribution(key).and_then(|d| d.value),
                    None => group_totals.get(i).copied().flatten(),
                },
            })
            .collect();
        order_of(&items, &self.group_sort)
    }

    pub fn distribution_order(&self, group: &GroupEntry) -> Vec<usize> {
        let items: Vec<SortItem<'_>> = group
            .value
            .iter()
            .map(|d| SortItem {
                key: &d.key,
                label: &d.label,
                value: d.value,
            })
            .collect();
        order_of(&items, &self.distribution_sort)
    }
}
