//! Documentation block scan and description insertion.
//!
//! Works on classified lines only: blocks are found first, the missing
//! descriptions become a list of insertions against the original line
//! numbers, and the output is built in one pass.

use crate::classify;
use crate::model::{DocBlock, Insertion, LineKind};
use crate::rules;
use tracing::trace;

/// Result of ensuring descriptions in one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ensured {
    pub inserted: usize,
    /// Rewritten content, present only when something was inserted.
    pub content: Option<String>,
}

/// Find every block opened by a summary line.
///
/// A block runs from the summary line through the following comment
/// lines. Scanning resumes after the block, so a second summary inside
/// the same comment run does not open a block of its own.
pub fn scan<'a>(kinds: &[LineKind<'a>]) -> Vec<DocBlock<'a>> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < kinds.len() {
        let LineKind::Summary(summary) = &kinds[i] else {
            i += 1;
            continue;
        };
        let end = kinds[i + 1..]
            .iter()
            .position(|kind| !kind.is_comment())
            .map_or(kinds.len(), |offset| i + 1 + offset);
        let has_description = kinds[i..end]
            .iter()
            .any(|kind| matches!(kind, LineKind::Description));
        blocks.push(DocBlock {
            start: i,
            end,
            summary: summary.clone(),
            has_description,
        });
        i = end;
    }
    blocks
}

/// Insertions for blocks lacking a description, in line order.
pub fn plan(blocks: &[DocBlock<'_>]) -> Vec<Insertion> {
    blocks
        .iter()
        .filter(|block| !block.has_description)
        .map(|block| Insertion {
            at: block.start + 1,
            line: description_line(block),
        })
        .collect()
}

/// `<indent>//<gap>@Description <text>`, mirroring the summary line's prefix.
fn description_line(block: &DocBlock<'_>) -> String {
    let summary = &block.summary;
    format!(
        "{}//{}@Description {}",
        summary.indent,
        summary.gap,
        rules::default_description(summary.text)
    )
}

/// Join `lines` with the insertions applied; every line ends with `\n`.
pub fn apply(lines: &[&str], insertions: &[Insertion]) -> String {
    let mut out = String::new();
    let mut pending = insertions.iter().peekable();
    for (idx, line) in lines.iter().enumerate() {
        while let Some(insertion) = pending.next_if(|ins| ins.at <= idx) {
            push_line(&mut out, &insertion.line);
        }
        push_line(&mut out, line);
    }
    for insertion in pending {
        push_line(&mut out, &insertion.line);
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Insert a description into every block that lacks one.
pub fn ensure_descriptions(content: &str) -> Ensured {
    let lines: Vec<&str> = content.lines().collect();
    let kinds = classify::classify_lines(&lines);
    let blocks = scan(&kinds);
    for block in &blocks {
        trace!(
            start = block.start,
            end = block.end,
            has_description = block.has_description,
            "doc block"
        );
    }
    let insertions = plan(&blocks);

    if insertions.is_empty() {
        return Ensured {
            inserted: 0,
            content: None,
        };
    }
    Ensured {
        inserted: insertions.len(),
        content: Some(apply(&lines, &insertions)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ensure(input: &str) -> (usize, String) {
        let ensured = ensure_descriptions(input);
        let content = ensured.content.unwrap_or_else(|| input.to_string());
        (ensured.inserted, content)
    }

    #[test]
    fn inserts_after_summary() {
        let input = "\
// ListUsers godoc
// @Summary List users
// @Tags Users
// @Router /users [get]
func ListUsers() {}
";
        let (inserted, output) = ensure(input);
        assert_eq!(inserted, 1);
        assert_eq!(
            output,
            "\
// ListUsers godoc
// @Summary List users
// @Description Returns a filtered, paginated list for this endpoint.
// @Tags Users
// @Router /users [get]
func ListUsers() {}
"
        );
    }

    #[test]
    fn second_run_inserts_nothing() {
        let input = "// @Summary Get a plan\n// @Tags Plans\nfunc Get() {}\n";
        let (_, once) = ensure(input);
        let again = ensure_descriptions(&once);
        assert_eq!(again.inserted, 0);
        assert!(again.content.is_none());
    }

    #[test]
    fn existing_description_anywhere_in_block_is_kept() {
        let input = "\
\t// @Tags Wallets
\t// @Summary Create wallet
\t// @Accept json
\t// @Description Creates a prepaid wallet
\t// @Router /wallets [post]
\tfunc Create() {}
";
        let ensured = ensure_descriptions(input);
        assert_eq!(ensured.inserted, 0);
        assert!(ensured.content.is_none());
    }

    #[test]
    fn description_before_summary_does_not_count() {
        let input = "// @Description stale\n// @Summary Update a plan\nfunc U() {}\n";
        let (inserted, output) = ensure(input);
        assert_eq!(inserted, 1);
        assert_eq!(
            output,
            "// @Description stale\n// @Summary Update a plan\n// @Description Validates input and updates the target resource.\nfunc U() {}\n"
        );
    }

    #[test]
    fn prefixed_keyword_is_not_a_description() {
        let input = "// @Summary Delete a coupon\n// @DescriptionX nope\nfunc D() {}\n";
        let (inserted, output) = ensure(input);
        assert_eq!(inserted, 1);
        assert!(output.contains(
            "// @Summary Delete a coupon\n// @Description Deletes the target resource and returns the operation result.\n// @DescriptionX nope\n"
        ));
    }

    #[test]
    fn indentation_and_marker_gap_are_reused() {
        let input = "    //  @Summary Health check\n    func H() {}\n";
        let (_, output) = ensure(input);
        assert_eq!(
            output,
            "    //  @Summary Health check\n    //  @Description Returns service health and readiness information.\n    func H() {}\n"
        );
    }

    #[test]
    fn blank_line_ends_block() {
        let input = "\
// @Summary List prices

// @Description belongs to something else
func L() {}
";
        let (inserted, output) = ensure(input);
        assert_eq!(inserted, 1);
        assert!(output.starts_with(
            "// @Summary List prices\n// @Description Returns a filtered, paginated list for this endpoint.\n\n"
        ));
    }

    #[test]
    fn summary_on_last_line() {
        let (inserted, output) = ensure("package v1\n// @Summary Retrieve usage");
        assert_eq!(inserted, 1);
        assert_eq!(
            output,
            "package v1\n// @Summary Retrieve usage\n// @Description Returns the requested resource if found and accessible.\n"
        );
    }

    #[test]
    fn multiple_blocks_in_one_file() {
        let input = "\
// @Summary List invoices
// @Router /invoices [get]
func A() {}

// @Summary Get invoice
// @Description Existing text
func B() {}

// @Summary Finalize invoice
func C() {}
";
        let (inserted, output) = ensure(input);
        assert_eq!(inserted, 2);
        assert_eq!(
            output,
            "\
// @Summary List invoices
// @Description Returns a filtered, paginated list for this endpoint.
// @Router /invoices [get]
func A() {}

// @Summary Get invoice
// @Description Existing text
func B() {}

// @Summary Finalize invoice
// @Description Handles this endpoint operation.
func C() {}
"
        );
    }

    #[test]
    fn summaries_in_one_comment_run_form_one_block() {
        let input = "// @Summary List a\n// @Summary List b\nfunc A() {}\n";
        let kinds = classify::classify_lines(&input.lines().collect::<Vec<_>>());
        let blocks = scan(&kinds);
        assert_eq!(blocks.len(), 1);
        assert_eq!((blocks[0].start, blocks[0].end), (0, 2));

        let (inserted, _) = ensure(input);
        assert_eq!(inserted, 1);
    }

    #[test]
    fn crlf_input_is_rewritten_with_lf() {
        let (_, output) = ensure("// @Summary Get x\r\nfunc X() {}\r\n");
        assert_eq!(
            output,
            "// @Summary Get x\n// @Description Returns the requested resource if found and accessible.\nfunc X() {}\n"
        );
    }

    #[test]
    fn no_summary_no_change() {
        let ensured = ensure_descriptions("package v1\n\n// helper\nfunc h() {}\n");
        assert_eq!(
            ensured,
            Ensured {
                inserted: 0,
                content: None
            }
        );
    }

    #[test]
    fn apply_places_insertions_before_their_line() {
        let lines = ["a", "b", "c"];
        let insertions = [
            Insertion {
                at: 1,
                line: "x".to_string(),
            },
            Insertion {
                at: 3,
                line: "y".to_string(),
            },
        ];
        assert_eq!(apply(&lines, &insertions), "a\nx\nb\nc\ny\n");
    }
}
