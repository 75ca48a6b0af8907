//! Sorting, column filters and the search box.
//!
//! A query never reorders the row collection. It yields the indices of the
//! rows to show, in display order.

use std::cmp::Ordering;

use crate::{Member, MemberField, RosterRows};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: MemberField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    sort: Option<SortSpec>,
    quick_filter: String,
    column_filters: [String; 3],
}

impl RowQuery {
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Cycles a column through unsorted, ascending, descending.
    ///
    /// Sorting by another column starts that column at ascending.
    pub fn cycle_sort(&mut self, field: MemberField) {
        self.sort = match self.sort {
            Some(SortSpec {
                field: current,
                direction: SortDirection::Ascending,
            }) if current == field => Some(SortSpec {
                field,
                direction: SortDirection::Descending,
            }),
            Some(SortSpec {
                field: current,
                direction: SortDirection::Descending,
            }) if current == field => None,
            _ => Some(SortSpec {
                field,
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub fn quick_filter(&self) -> &str {
        &self.quick_filter
    }

    pub fn set_quick_filter(&mut self, text: String) {
        self.quick_filter = text;
    }

    pub fn column_filter(&self, field: MemberField) -> &str {
        &self.column_filters[field.index()]
    }

    pub fn set_column_filter(&mut self, field: MemberField, text: String) {
        self.column_filters[field.index()] = text;
    }

    /// Whether a member passes the search box and every column filter.
    pub fn matches(&self, member: &Member) -> bool {
        let quick = self.quick_filter.trim();
        let quick_ok = quick.is_empty()
            || MemberField::ALL
                .iter()
                .any(|&field| contains_ignore_case(member.field(field), quick));

        quick_ok
            && MemberField::ALL.iter().all(|&field| {
                let filter = self.column_filters[field.index()].trim();
                filter.is_empty() || contains_ignore_case(member.field(field), filter)
            })
    }

    /// Indices into `rows` of the visible members, in display order.
    pub fn visible_indices(&self, rows: &RosterRows) -> Vec<usize> {
        let members = rows.as_slice();
        let mut indices: Vec<usize> = members
            .iter()
            .enumerate()
            .filter(|(_, member)| self.matches(member))
            .map(|(index, _)| index)
            .collect();

        if let Some(SortSpec { field, direction }) = self.sort {
            // Stable, so equal keys keep collection order.
            indices.sort_by(|&a, &b| {
                let ord = compare_ignore_case(members[a].field(field), members[b].field(field));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        indices
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
