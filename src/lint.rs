//! Per-template orchestration.
//!
//! One entry point per detected template node: decide eligibility,
//! reconstruct the style text, parse, validate, and on violation package
//! the location and the fix edits for the host. Malformed style content
//! is swallowed: this is a best-effort tool, and a node it cannot read
//! produces no report rather than a failure.

use crate::fix::{Edit, collect_fixes};
use crate::location::LineIndex;
use crate::order::PropertyOrder;
use crate::parse::parse_style_text;
use crate::reconstruct::reconstruct_styles;
use crate::template::{TemplateLiteral, TemplateTag};
use crate::validate::{Violation, check_rule};

/// Message attached to every reported violation.
pub const MESSAGE: &str = "Style declarations are not sorted in the expected order.";

/// A reported ordering problem in one style template: where it is, and
/// the splices that fix the whole template. Hosts that don't autofix can
/// discard `edits`.
#[derive(Debug, Clone)]
pub struct LintReport {
    pub violation: Violation,
    pub message: &'static str,
    pub edits: Vec<Edit>,
}

/// Check one template node against a property order.
///
/// Returns `None` when the tag is not a recognized style-template shape,
/// when the style content cannot be parsed, or when the declarations are
/// already in order. Edit ranges are byte offsets into `source`.
pub fn lint_template(
    source: &str,
    tag: &TemplateTag,
    template: &TemplateLiteral,
    order: &PropertyOrder,
) -> Option<LintReport> {
    if !tag.is_style_template() {
        return None;
    }

    let styles = reconstruct_styles(template);
    let root = parse_style_text(&styles).ok()?;
    let violation = check_rule(&root, order)?;

    let index = LineIndex::new(source);
    let edits = collect_fixes(&root, source, &index, order);

    Some(LintReport {
        violation,
        message: MESSAGE,
        edits,
    })
}
