//! Style-text reconstruction from template quasis.
//!
//! Produces a single string whose line/column addressing matches the
//! original source file for every literal character, so spans computed by
//! the style parser map back to the original file with no further
//! transformation. Interpolated expressions are replaced by whitespace
//! shaped to their gap and never reproduced.

use crate::location::Location;
use crate::template::TemplateLiteral;

/// Reconstruct the style content of a template as position-aligned text.
///
/// Before the first quasi, `line − 1` newlines and `column` spaces put the
/// first literal character at its original address. Between quasis, the
/// gap left by an interpolation becomes spaces when it stays on one line,
/// or newlines followed by the final line's column offset when it spans
/// several.
pub fn reconstruct_styles(template: &TemplateLiteral) -> String {
    let mut out = String::new();
    let mut prev_end: Option<Location> = None;

    for quasi in &template.quasis {
        let start = quasi.span.start;
        match prev_end {
            None => pad(&mut out, start.line.saturating_sub(1), start.column),
            Some(end) if start.line == end.line => {
                pad(&mut out, 0, start.column.saturating_sub(end.column));
            }
            Some(end) => pad(&mut out, start.line.saturating_sub(end.line), start.column),
        }
        out.push_str(&quasi.raw);
        prev_end = Some(quasi.span.end);
    }

    out
}

fn pad(out: &mut String, newlines: u32, spaces: u32) {
    for _ in 0..newlines {
        out.push('\n');
    }
    for _ in 0..spaces {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{LineIndex, Span};
    use crate::template::Quasi;

    fn loc(line: u32, column: u32) -> Location {
        Location::new(line, column)
    }

    #[test]
    fn test_single_quasi_offset_into_line() {
        // const b = css`width: 300px;`
        //               ^ column 14
        let template = TemplateLiteral::new(vec![Quasi::new(
            "width: 300px;",
            Span::new(loc(1, 14), loc(1, 27)),
        )]);
        let styles = reconstruct_styles(&template);
        assert_eq!(styles, format!("{}width: 300px;", " ".repeat(14)));

        // the literal text sits at its original address
        let index = LineIndex::new(&styles);
        assert_eq!(index.offset(loc(1, 14)), Some(14));
        assert_eq!(&styles[14..], "width: 300px;");
    }

    #[test]
    fn test_leading_lines_compensated() {
        // template opens on line 3 of the file
        let template = TemplateLiteral::new(vec![Quasi::new(
            "\n  width: 300px;\n",
            Span::new(loc(3, 20), loc(5, 0)),
        )]);
        let styles = reconstruct_styles(&template);
        let index = LineIndex::new(&styles);
        assert_eq!(index.offset(loc(4, 2)).map(|o| &styles[o..o + 5]), Some("width"));
    }

    #[test]
    fn test_same_line_gap_becomes_spaces() {
        // width: 300px; color: ${expr}; height: 200px;
        // quasi 1 ends at column 21, quasi 2 resumes at column 28
        let template = TemplateLiteral::new(vec![
            Quasi::new("width: 300px; color: ", Span::new(loc(1, 0), loc(1, 21))),
            Quasi::new("; height: 200px;", Span::new(loc(1, 28), loc(1, 44))),
        ]);
        let styles = reconstruct_styles(&template);
        assert_eq!(styles, "width: 300px; color:        ; height: 200px;");
    }

    #[test]
    fn test_multi_line_declaration_keeps_line_break() {
        // border: 1px solid
        //   ${expr};
        // width: 300px;
        let template = TemplateLiteral::new(vec![
            Quasi::new("border: 1px solid\n  ", Span::new(loc(1, 0), loc(2, 2))),
            Quasi::new(";\nwidth: 300px;", Span::new(loc(2, 9), loc(3, 13))),
        ]);
        let styles = reconstruct_styles(&template);
        assert_eq!(styles, "border: 1px solid\n         ;\nwidth: 300px;");
        let index = LineIndex::new(&styles);
        assert_eq!(index.offset(loc(3, 0)).map(|o| &styles[o..o + 5]), Some("width"));
    }

    #[test]
    fn test_multi_line_gap_becomes_newlines() {
        // color: ${
        //   expr
        // };
        let template = TemplateLiteral::new(vec![
            Quasi::new("color: ", Span::new(loc(1, 0), loc(1, 7))),
            Quasi::new(";", Span::new(loc(3, 1), loc(3, 2))),
        ]);
        let styles = reconstruct_styles(&template);
        assert_eq!(styles, "color: \n\n ;");
    }

    #[test]
    fn test_expression_content_never_appears() {
        let template = TemplateLiteral::new(vec![
            Quasi::new("color: ", Span::new(loc(1, 0), loc(1, 7))),
            Quasi::new(";", Span::new(loc(1, 30), loc(1, 31))),
        ]);
        let styles = reconstruct_styles(&template);
        assert!(styles.chars().all(|c| c == ' ' || "color:;".contains(c)));
    }
}
