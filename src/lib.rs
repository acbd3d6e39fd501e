//! # styled-order
//!
//! Declaration order checking and autofix for CSS-in-JS template
//! literals.
//!
//! Given a source file and the tagged-template nodes a host front-end
//! located in it, this crate verifies that property declarations inside
//! each style rule follow a canonical order, reports the first violation
//! with its exact source span, and computes text splices that rewrite the
//! declarations into sorted order, preserving every declaration's own
//! formatting and any interpolated `${…}` expression it carries.
//!
//! ## Quick Start
//!
//! ```
//! use styled_order::{
//!     Location, PropertyOrder, Quasi, Span, TemplateLiteral, TemplateTag, apply_edits,
//!     lint_template,
//! };
//!
//! // host front-end found:  const b = css`height: 200px; width: 300px;`
//! let source = "const b = css`height: 200px; width: 300px;`";
//! let tag = TemplateTag::Identifier("css".into());
//! let template = TemplateLiteral::new(vec![Quasi::new(
//!     "height: 200px; width: 300px;",
//!     Span::new(Location::new(1, 14), Location::new(1, 42)),
//! )]);
//!
//! let report = lint_template(source, &tag, &template, PropertyOrder::yandex()).unwrap();
//! assert_eq!(
//!     apply_edits(source, &report.edits),
//!     "const b = css`width: 300px; height: 200px;`"
//! );
//! ```
//!
//! ## Scope
//!
//! The crate owns the ordering engine only: rule traversal, rank
//! comparison, violation localization, and edit computation. Locating
//! template nodes in the host language is the front-end's job; style
//! content is tokenized with `cssparser` but never interpreted beyond
//! declaration names; the rank table is external data
//! ([`PropertyOrder`]), with the Yandex order bundled as a default.

pub mod error;
pub mod fix;
pub mod lint;
pub mod location;
pub mod order;
pub mod parse;
pub mod reconstruct;
pub mod template;
pub mod validate;

pub use error::{Error, Result};
pub use fix::{Edit, apply_edits, collect_fixes};
pub use lint::{LintReport, MESSAGE, lint_template};
pub use location::{LineIndex, Location, Span};
pub use order::{PropertyOrder, RankEntry};
pub use parse::{Declaration, Rule, StyleNode, parse_style_text};
pub use reconstruct::reconstruct_styles;
pub use template::{Quasi, TemplateLiteral, TemplateTag};
pub use validate::{Violation, check_rule};
