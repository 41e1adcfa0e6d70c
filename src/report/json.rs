//! JSON report: structured output for tooling integration.

use crate::error::{Result, ScanError};
use crate::model::Report;
use crate::report::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)
            .map_err(|e| ScanError::ReportUnwritable(e.into()))?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use serde_json::Value;

    #[test]
    fn renders_all_sections() {
        let report = Report {
            classes: vec![ClassFact {
                name: "Foo".into(),
                author: " Jane".into(),
            }],
            methods: vec![MethodFact {
                name: "bar".into(),
                tags: vec![TagEntry::new(TagKind::Returns, " the result")],
            }],
            summary: Summary {
                total_lines: 9,
                non_blank_lines: 8,
                doc_blocks: 2,
            },
            anomalies: vec![Anomaly::UnterminatedDocBlock { opened_at: 3 }],
        };
        let out = JsonRenderer.render(&report).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["classes"][0]["name"], "Foo");
        assert_eq!(v["classes"][0]["author"], " Jane");
        assert_eq!(v["methods"][0]["tags"][0]["kind"], "returns");
        assert_eq!(v["methods"][0]["tags"][0]["text"], " the result");
        assert_eq!(v["summary"]["non_blank_lines"], 8);
        assert_eq!(v["anomalies"][0]["kind"], "unterminated_doc_block");
        assert_eq!(v["anomalies"][0]["opened_at"], 3);
    }

    #[test]
    fn empty_report() {
        let out = JsonRenderer.render(&Report::default()).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["methods"], Value::Array(vec![]));
        assert_eq!(v["summary"]["total_lines"], 0);
    }
}
