//! Declaration order validation.
//!
//! A pure predicate over a parsed rule tree: either every rule's own
//! declaration list is non-decreasing in rank, or the first violation
//! found is returned with its location. No repair happens here.

use crate::location::Span;
use crate::order::PropertyOrder;
use crate::parse::{Declaration, Rule, StyleNode};

/// An adjacent pair of declarations that breaks the canonical order.
///
/// The span runs from the start of the earlier (offending) declaration to
/// the end of the later one: the minimal range containing the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub span: Span,
}

/// Check a rule subtree. Nested rules are checked completely, in source
/// order, before the rule's own declaration list; the first violation
/// found anywhere aborts the walk.
pub fn check_rule(rule: &Rule, order: &PropertyOrder) -> Option<Violation> {
    for node in &rule.nodes {
        if let StyleNode::Rule(child) = node
            && let Some(violation) = check_rule(child, order)
        {
            return Some(violation);
        }
    }
    check_declarations(rule, order)
}

/// Check one rule's own flat declaration list, ignoring nested children.
fn check_declarations(rule: &Rule, order: &PropertyOrder) -> Option<Violation> {
    let decls: Vec<&Declaration> = rule.declarations().collect();
    // empty and singleton lists are trivially ordered
    for pair in decls.windows(2) {
        let (prev, current) = (pair[0], pair[1]);
        if order.sort_key(&current.prop) < order.sort_key(&prev.prop) {
            return Some(Violation {
                span: Span::new(prev.span.start, current.span.end),
            });
        }
    }
    None
}
