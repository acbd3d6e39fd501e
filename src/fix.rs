//! Autofix edit computation.
//!
//! Walks the same rule tree the validator checked and emits text splices
//! against the ORIGINAL source: for every list position whose occupant
//! differs from the sorted order, delete the original declaration's range
//! and insert the target declaration's text, taken verbatim from the
//! original source, so a moved declaration keeps its exact formatting and
//! any `${…}` expression it carries.

use std::ops::Range;

use crate::location::{LineIndex, Span};
use crate::order::PropertyOrder;
use crate::parse::{Declaration, Rule, StyleNode};

/// A single text splice: delete `range`, insert `text` at its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range into the original source to delete.
    pub range: Range<usize>,
    /// Replacement text inserted at the deletion start.
    pub text: String,
}

/// Compute the edits that put every rule's declarations in order.
///
/// `source` and `index` address the original file. Edits are scoped to
/// individual declaration spans, which are disjoint by construction, so
/// the returned set is safe to apply against one snapshot.
pub fn collect_fixes(
    rule: &Rule,
    source: &str,
    index: &LineIndex<'_>,
    order: &PropertyOrder,
) -> Vec<Edit> {
    let mut edits = Vec::new();
    fix_rule(rule, source, index, order, &mut edits);
    edits
}

fn fix_rule(
    rule: &Rule,
    source: &str,
    index: &LineIndex<'_>,
    order: &PropertyOrder,
    edits: &mut Vec<Edit>,
) {
    // nested rules first; each is fixed independently and keeps its
    // structural slot in the parent
    for node in &rule.nodes {
        if let StyleNode::Rule(child) = node {
            fix_rule(child, source, index, order, edits);
        }
    }

    let decls: Vec<&Declaration> = rule.declarations().collect();
    let mut target = decls.clone();
    // stable: ranked properties ascend, unranked ones land after them in
    // their original relative order
    target.sort_by_key(|decl| order.sort_key(&decl.prop));

    for (original, sorted) in decls.iter().zip(&target) {
        if same_declaration(original, sorted) {
            continue;
        }
        let Some(range) = span_to_range(original.span, index) else {
            log::warn!(
                "skipping fix for '{}': span not found in source",
                original.prop
            );
            continue;
        };
        let Some(text_range) = span_to_range(sorted.span, index) else {
            log::warn!(
                "skipping fix for '{}': replacement span not found in source",
                sorted.prop
            );
            continue;
        };
        edits.push(Edit {
            range,
            text: source[text_range].to_string(),
        });
    }
}

/// Positional identity: two views of the same source declaration start at
/// the same location.
fn same_declaration(a: &Declaration, b: &Declaration) -> bool {
    a.span.start == b.span.start
}

fn span_to_range(span: Span, index: &LineIndex<'_>) -> Option<Range<usize>> {
    let start = index.offset(span.start)?;
    let end = index.offset(span.end)?;
    (start <= end).then_some(start..end)
}

/// Apply a set of non-overlapping splices against one snapshot of the
/// source. Ranges must be disjoint; the fixer's are by construction.
pub fn apply_edits(source: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|edit| edit.range.start);
    debug_assert!(
        ordered
            .windows(2)
            .all(|pair| pair[0].range.end <= pair[1].range.start),
        "overlapping edit ranges"
    );

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in ordered {
        out.push_str(&source[cursor..edit.range.start]);
        out.push_str(&edit.text);
        cursor = edit.range.end;
    }
    out.push_str(&source[cursor..]);
    out
}
