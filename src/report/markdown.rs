//! GitHub-flavored markdown report.

use crate::error::Result;
use crate::model::*;
use crate::report::Renderer;
use std::collections::HashMap;

pub struct MarkdownRenderer;

const INDEX_HEADING: &str = "Index";
const PARAMS_HEADING: &str = "Parameters";
const RETURNS_HEADING: &str = "Returns";
const SUMMARY_HEADING: &str = "Summary";

impl Renderer for MarkdownRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        for class in &report.classes {
            out.push_str(&format!("# {}\n\n", class.name));
            let author = class.author.trim();
            if !author.is_empty() {
                out.push_str(&format!("**Author:** {}\n\n", author));
            }
        }

        let visible: Vec<&MethodFact> = report
            .methods
            .iter()
            .filter(|m| !m.name.is_empty())
            .collect();
        if !visible.is_empty() {
            let anchors = method_anchors(report, &visible);
            out.push_str(&format!("## {}\n\n", INDEX_HEADING));
            for (method, anchor) in visible.iter().zip(&anchors) {
                out.push_str(&format!("* [{}](#{})\n", method.name, anchor));
            }
            out.push('\n');
        }

        for method in &visible {
            out.push_str(&render_method(method));
        }

        out.push_str(&format!("## {}\n\n", SUMMARY_HEADING));
        out.push_str("| Metric | Count |\n");
        out.push_str("| --- | --- |\n");
        out.push_str(&format!("| Total lines | {} |\n", report.summary.total_lines));
        out.push_str(&format!(
            "| Non-blank lines | {} |\n",
            report.summary.non_blank_lines
        ));
        out.push_str(&format!("| Javadoc comments | {} |\n", report.summary.doc_blocks));

        Ok(out)
    }
}

fn render_method(method: &MethodFact) -> String {
    let mut lines = vec![format!("### {}\n", method.name)];

    let params: Vec<&TagEntry> = method
        .tags
        .iter()
        .filter(|t| t.kind == TagKind::Parameter)
        .collect();
    if !params.is_empty() {
        lines.push(format!("#### {}\n", PARAMS_HEADING));
        for p in &params {
            lines.push(format!("* {}", p.text.trim()));
        }
        lines.push(String::new());
    }

    for r in method.tags.iter().filter(|t| t.kind == TagKind::Returns) {
        lines.push(format!("#### {}\n", RETURNS_HEADING));
        lines.push(r.text.trim().to_string());
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Anchor of each visible method heading, walking every heading in
/// document order so repeated names get GitHub's `-1`, `-2` suffixes.
fn method_anchors(report: &Report, visible: &[&MethodFact]) -> Vec<String> {
    let mut anchors = Anchors::default();
    for class in &report.classes {
        anchors.next(&class.name);
    }
    anchors.next(INDEX_HEADING);

    let mut out = Vec::with_capacity(visible.len());
    for method in visible {
        out.push(anchors.next(&method.name));
        if method.tags.iter().any(|t| t.kind == TagKind::Parameter) {
            anchors.next(PARAMS_HEADING);
        }
        for _ in method.tags.iter().filter(|t| t.kind == TagKind::Returns) {
            anchors.next(RETURNS_HEADING);
        }
    }
    out
}

/// Hands out unique heading anchors the way GitHub does.
#[derive(Default)]
struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    fn next(&mut self, heading: &str) -> String {
        let base = github_slug(heading);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let anchor = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        anchor
    }
}

/// GitHub heading slug: lowercase, keep alphanumerics, `_`, `-` and spaces,
/// then turn spaces into hyphens.
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
