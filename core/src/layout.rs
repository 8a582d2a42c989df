// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Collision-free column layout of overlapping items.
//!
//! Layout runs in two phases. Items are first split into overlap groups, the connected
//! components of the "overlaps" relation, so two items share a group when a chain of pairwise
//! overlaps links them. Each group is then placed first-fit into columns, visiting items by
//! ascending start. On start-sorted intervals first-fit opens the minimum number of columns.
//!
//! Items are addressed by their index in the caller's slice. The slice itself is never
//! reordered.

use chrono::NaiveDateTime;

use crate::SchedulerItem;

/// The placement of one item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotLayoutResult<T, Ts = NaiveDateTime> {
    /// A copy of the placed item.
    pub item: SchedulerItem<T, Ts>,

    /// Position of the item in the input slice.
    pub index: usize,

    /// The overlap group of the item, groups being numbered by ascending start.
    pub group: usize,

    /// The column the item is rendered in, in `0..column_count`.
    pub column_index: usize,

    /// Number of columns opened for the group, identical for all of its members.
    pub column_count: usize,
}

/// The placement of a whole item set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotLayout<T, Ts = NaiveDateTime> {
    results: Vec<SlotLayoutResult<T, Ts>>,
    column_counts: Vec<usize>,
}

impl<T, Ts> SlotLayout<T, Ts> {
    /// Results ordered by group, then by ascending start within a group.
    pub fn results(&self) -> &[SlotLayoutResult<T, Ts>] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SlotLayoutResult<T, Ts>> {
        self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotLayoutResult<T, Ts>> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.column_counts.len()
    }

    /// Number of columns of `group`, if it exists.
    pub fn column_count_of(&self, group: usize) -> Option<usize> {
        self.column_counts.get(group).copied()
    }

    /// The widest group, i.e. the most items ever rendered side by side.
    pub fn max_column_count(&self) -> usize {
        self.column_counts.iter().copied().max().unwrap_or(0)
    }

    /// The result of the item at `index` in the input slice.
    pub fn result_for(&self, index: usize) -> Option<&SlotLayoutResult<T, Ts>> {
        self.results.iter().find(|r| r.index == index)
    }
}

impl<'a, T, Ts> IntoIterator for &'a SlotLayout<T, Ts> {
    type Item = &'a SlotLayoutResult<T, Ts>;
    type IntoIter = std::slice::Iter<'a, SlotLayoutResult<T, Ts>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Places every item into a column such that overlapping items of a group never share one.
#[tracing::instrument(skip_all, fields(items = items.len()))]
pub fn compute_layout<T: Clone, Ts: Ord + Copy>(
    items: &[SchedulerItem<T, Ts>],
) -> SlotLayout<T, Ts> {
    let groups = overlap_groups(items);
    let mut results = Vec::with_capacity(items.len());
    let mut column_counts = Vec::with_capacity(groups.len());

    for (group, members) in groups.iter().enumerate() {
        let placement = assign_columns(items, members);
        let column_count = placement.column_count;

        // Counts are only final once the whole group is placed
        results.extend(placement.columns.into_iter().map(|(index, column_index)| {
            SlotLayoutResult {
                item: items[index].clone(),
                index,
                group,
                column_index,
                column_count,
            }
        }));
        column_counts.push(column_count);
    }

    tracing::debug!(groups = column_counts.len(), "computed layout");
    SlotLayout {
        results,
        column_counts,
    }
}

/// Indices of `items` ordered by ascending start, ties keeping their input order.
pub fn sorted_order<T, Ts: Ord + Copy>(items: &[SchedulerItem<T, Ts>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| items[i].start);
    order
}

/// Splits `items` into overlap groups.
///
/// Each group lists indices into `items` by ascending start (ties in input order), and groups
/// are ordered by the start of their first member. Every item belongs to exactly one group.
///
/// Expanding a group rescans every unvisited item, so this is quadratic in the number of items.
pub fn overlap_groups<T, Ts: Ord + Copy>(items: &[SchedulerItem<T, Ts>]) -> Vec<Vec<usize>> {
    let order = sorted_order(items);
    let mut visited = vec![false; order.len()];
    let mut groups = Vec::new();
    let mut stack = Vec::new();

    // Positions refer to `order`, so sorting a group by position restores start order
    for seed in 0..order.len() {
        if visited[seed] {
            continue;
        }

        visited[seed] = true;
        stack.push(seed);
        let mut group = Vec::new();
        while let Some(current) = stack.pop() {
            group.push(current);
            let item = &items[order[current]];
            for (next, seen) in visited.iter_mut().enumerate() {
                if !*seen && item.overlaps(&items[order[next]]) {
                    *seen = true;
                    stack.push(next);
                }
            }
        }

        group.sort_unstable();
        groups.push(group.into_iter().map(|pos| order[pos]).collect());
    }
    groups
}

/// The column placement of one overlap group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlacement {
    /// `(index, column)` pairs in the order the group's members were given.
    pub columns: Vec<(usize, usize)>,

    /// Number of columns opened.
    pub column_count: usize,
}

/// Places the members of one group first-fit, in the order given.
///
/// `members` are indices into `items`, and are expected in ascending start order as returned
/// by [`overlap_groups`]; that order is what makes the column count minimal.
pub fn assign_columns<T, Ts: Ord + Copy>(
    items: &[SchedulerItem<T, Ts>],
    members: &[usize],
) -> ColumnPlacement {
    let mut lanes: Vec<Vec<usize>> = Vec::new();
    let mut columns = Vec::with_capacity(members.len());

    for &index in members {
        let item = &items[index];
        let free = lanes
            .iter()
            .position(|lane| lane.iter().all(|&other| !item.overlaps(&items[other])));

        let column = match free {
            Some(column) => column,
            None => {
                lanes.push(Vec::new());
                lanes.len() - 1
            }
        };
        lanes[column].push(index);
        columns.push((index, column));
    }

    ColumnPlacement {
        columns,
        column_count: lanes.len(),
    }
}
