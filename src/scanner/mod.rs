//! Javadoc scanner, a line-by-line state machine.
//!
//! Each input line runs through the same ordered steps:
//!
//! 1. `/**` opens (or re-confirms) a doc block and bumps the block count
//! 2. inside a block the line is echoed and `@return` / `@param` tags collected
//! 3. if the *previous* line held `*/`, the block closes; unless the current
//!    line is a `public class` line it names the documented method
//! 4. a named method is emitted together with the collected tags
//! 5. `public class` records the class name
//! 6. `@author` records the author
//! 7. once both class parts are seen the class fact is emitted
//! 8. blank lines are counted
//! 9. the line becomes the lookback line
//!
//! Several steps can fire on the same line, so the order matters.

pub mod tokens;

use crate::error::Result;
use crate::model::*;
use crate::report::ReportSink;
use crate::sink::DocSink;
use crate::source::LineSource;
use std::io::BufRead;
use tokens::{is_blank_line, parse_from, scan_name};
use tracing::{debug, warn};

const DOC_OPEN: &str = "/**";
const DOC_CLOSE: &str = "*/";
const CLASS_DECL: &str = "public class";
const TAG_AUTHOR: &str = "@author";
const TAG_PARAM: &str = "@param";
const TAG_RETURN: &str = "@return";
const METHOD_TERMINATOR: &str = "(";
const CLASS_TERMINATOR: &str = "{";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InDocBlock,
}

/// What a finished scan hands back to the caller.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub counters: Counters,
    pub anomalies: Vec<Anomaly>,
}

pub struct Scanner {
    state: State,
    counters: Counters,
    tags: TagList,
    prev_line: String,
    /// Name of a method whose declaration was just seen, waiting to be emitted.
    pending_method: Option<String>,
    class_name: String,
    author: String,
    /// Class parts (name, author) seen since the last class fact.
    class_parts: u8,
    block_opened_at: usize,
    anomalies: Vec<Anomaly>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            counters: Counters::default(),
            tags: TagList::default(),
            prev_line: String::new(),
            pending_method: None,
            class_name: String::new(),
            author: String::new(),
            class_parts: 0,
            block_opened_at: 0,
            anomalies: Vec::new(),
        }
    }

    /// Process one input line (without its terminator).
    ///
    /// Matching runs on a lossy UTF-8 view; the doc sink gets the raw bytes.
    pub fn feed(
        &mut self,
        raw: &[u8],
        doc: &mut dyn DocSink,
        report: &mut dyn ReportSink,
    ) -> Result<()> {
        let text = String::from_utf8_lossy(raw);
        let line: &str = &text;
        let line_no = self.counters.total_lines + 1;

        // 1. opening marker
        if line.contains(DOC_OPEN) {
            if self.state == State::Idle {
                self.tags.clear();
                self.block_opened_at = line_no;
            }
            self.state = State::InDocBlock;
            self.counters.doc_blocks += 1;
            debug!(line = line_no, "doc block opened");
        }

        // 2. echo and collect tags
        if self.state == State::InDocBlock {
            doc.write_line(raw)?;
            if line.contains(TAG_RETURN) {
                self.add_tag(TagKind::Returns, parse_from(line, TAG_RETURN), line_no, report);
            } else if line.contains(TAG_PARAM) {
                self.add_tag(TagKind::Parameter, parse_from(line, TAG_PARAM), line_no, report);
            }
        }

        // 3. closing marker was on the previous line
        if self.prev_line.contains(DOC_CLOSE) {
            doc.write_line(b"")?;
            if line.contains(CLASS_DECL) {
                // class docs carry no method; their tags must not leak forward
                if !self.tags.is_empty() {
                    debug!(dropped = self.tags.len(), "tags on class doc block discarded");
                    self.tags.clear();
                }
            } else {
                let scan = scan_name(line, METHOD_TERMINATOR);
                if !scan.terminated {
                    self.record(
                        Anomaly::MalformedDeclaration {
                            line: line_no,
                            terminator: METHOD_TERMINATOR.to_string(),
                        },
                        report,
                    );
                }
                self.pending_method = Some(scan.name);
            }
            self.state = State::Idle;
        }

        // 4. emit method
        if let Some(name) = self.pending_method.take() {
            let fact = MethodFact {
                name,
                tags: self.tags.take(),
            };
            debug!(method = %fact.name, tags = fact.tags.len(), "method documented");
            report.emit_method_fact(fact)?;
        }

        // 5. class name
        if line.contains(CLASS_DECL) {
            let scan = scan_name(line, CLASS_TERMINATOR);
            if !scan.terminated {
                self.record(
                    Anomaly::MalformedDeclaration {
                        line: line_no,
                        terminator: CLASS_TERMINATOR.to_string(),
                    },
                    report,
                );
            }
            self.class_name = scan.name;
            self.class_parts = self.class_parts.saturating_add(1);
        }

        // 6. author
        if line.contains(TAG_AUTHOR) {
            self.author = parse_from(line, TAG_AUTHOR);
            self.class_parts = self.class_parts.saturating_add(1);
        }

        // 7. class fact complete
        if self.class_parts == 2 {
            let fact = ClassFact {
                name: self.class_name.clone(),
                author: self.author.clone(),
            };
            debug!(class = %fact.name, "class documented");
            report.emit_class_fact(fact)?;
            self.class_parts = 0;
        }

        // 8. blank lines
        if is_blank_line(line) {
            self.counters.blank_lines += 1;
        }

        // 9. lookback
        self.prev_line.clear();
        self.prev_line.push_str(line);
        self.counters.total_lines += 1;

        Ok(())
    }

    /// End of input: flush the doc sink and hand the counters to the report.
    pub fn finish(
        mut self,
        doc: &mut dyn DocSink,
        report: &mut dyn ReportSink,
    ) -> Result<ScanOutcome> {
        if self.state == State::InDocBlock && !self.prev_line.contains(DOC_CLOSE) {
            let opened_at = self.block_opened_at;
            self.record(Anomaly::UnterminatedDocBlock { opened_at }, report);
        }
        doc.flush()?;
        report.emit_summary(self.counters)?;
        Ok(ScanOutcome {
            counters: self.counters,
            anomalies: self.anomalies,
        })
    }

    fn add_tag(&mut self, kind: TagKind, text: String, line: usize, report: &mut dyn ReportSink) {
        if let Err(dropped) = self.tags.push(TagEntry::new(kind, text)) {
            self.record(Anomaly::TagOverflow { line, dropped }, report);
        }
    }

    fn record(&mut self, anomaly: Anomaly, report: &mut dyn ReportSink) {
        warn!("{}", anomaly);
        report.note_anomaly(&anomaly);
        self.anomalies.push(anomaly);
    }
}

/// Run a full scan over `source`.
pub fn scan<R: BufRead>(
    source: &mut LineSource<R>,
    doc: &mut dyn DocSink,
    report: &mut dyn ReportSink,
) -> Result<ScanOutcome> {
    let mut scanner = Scanner::new();
    while let Some(line) = source.next_line()? {
        scanner.feed(line, doc, report)?;
    }
    scanner.finish(doc, report)
}
