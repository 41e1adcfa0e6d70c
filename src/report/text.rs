//! Plain-text console report, written as facts arrive.

use crate::error::{Result, ScanError};
use crate::model::{ClassFact, Counters, MethodFact};
use crate::report::ReportSink;
use std::io::Write;

pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn emit_class_fact(&mut self, fact: ClassFact) -> Result<()> {
        write!(
            self.out,
            "Class: {} \nAuthor:{} \n\n",
            fact.name, fact.author
        )
        .map_err(ScanError::ReportUnwritable)
    }

    fn emit_method_fact(&mut self, fact: MethodFact) -> Result<()> {
        let mut block = format!("Method: {}\n", fact.name);
        for tag in &fact.tags {
            block.push_str(tag.kind.label());
            block.push(':');
            block.push_str(&tag.text);
            block.push('\n');
        }
        block.push('\n');
        self.out
            .write_all(block.as_bytes())
            .map_err(ScanError::ReportUnwritable)
    }

    fn emit_summary(&mut self, counters: Counters) -> Result<()> {
        write!(
            self.out,
            "Total number of lines: {} \nNumber of non-blank lines: {} \nNumber of Javadoc comments: {} \n",
            counters.total_lines,
            counters.non_blank_lines(),
            counters.doc_blocks
        )
        .and_then(|()| self.out.flush())
        .map_err(ScanError::ReportUnwritable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TagEntry, TagKind};

    #[test]
    fn class_block() {
        let mut r = TextReport::new(Vec::new());
        r.emit_class_fact(ClassFact {
            name: "Foo".into(),
            author: " Jane".into(),
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(r.into_inner()).unwrap(),
            "Class: Foo \nAuthor: Jane \n\n"
        );
    }

    #[test]
    fn method_block() {
        let mut r = TextReport::new(Vec::new());
        r.emit_method_fact(MethodFact {
            name: "bar".into(),
            tags: vec![
                TagEntry::new(TagKind::Parameter, " x the value"),
                TagEntry::new(TagKind::Returns, " the result"),
            ],
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(r.into_inner()).unwrap(),
            "Method: bar\nParameter: x the value\nReturns: the result\n\n"
        );
    }

    #[test]
    fn summary_block() {
        let mut r = TextReport::new(Vec::new());
        r.emit_summary(Counters {
            total_lines: 5,
            blank_lines: 2,
            doc_blocks: 1,
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(r.into_inner()).unwrap(),
            "Total number of lines: 5 \nNumber of non-blank lines: 3 \nNumber of Javadoc comments: 1 \n"
        );
    }
}
