//! Report sinks with trait-based format dispatch.
//!
//! `text` streams each fact as soon as it is emitted. The other formats
//! collect a [`Report`] and render it once the summary arrives.

pub mod json;
pub mod markdown;
pub mod text;

use crate::error::{Result, ScanError};
use crate::model::{Anomaly, ClassFact, Counters, MethodFact, Report};
use anyhow::anyhow;
use std::io::Write;

/// Receives structured facts from the scanner, in input order.
pub trait ReportSink {
    fn emit_class_fact(&mut self, fact: ClassFact) -> Result<()>;
    fn emit_method_fact(&mut self, fact: MethodFact) -> Result<()>;
    fn emit_summary(&mut self, counters: Counters) -> Result<()>;

    /// Recoverable anomalies. Ignored unless the format has room for them.
    fn note_anomaly(&mut self, _anomaly: &Anomaly) {}
}

/// Renders a complete report into one string.
pub trait Renderer {
    fn render(&self, report: &Report) -> Result<String>;
}

/// Report sink that buffers every fact and renders at summary time.
pub struct CollectingReport<R: Renderer> {
    renderer: R,
    report: Report,
    out: Box<dyn Write>,
}

impl<R: Renderer> CollectingReport<R> {
    pub fn new(renderer: R, out: Box<dyn Write>) -> Self {
        Self {
            renderer,
            report: Report::default(),
            out,
        }
    }
}

impl<R: Renderer> ReportSink for CollectingReport<R> {
    fn emit_class_fact(&mut self, fact: ClassFact) -> Result<()> {
        self.report.classes.push(fact);
        Ok(())
    }

    fn emit_method_fact(&mut self, fact: MethodFact) -> Result<()> {
        self.report.methods.push(fact);
        Ok(())
    }

    fn emit_summary(&mut self, counters: Counters) -> Result<()> {
        self.report.summary = counters.into();
        let rendered = self.renderer.render(&self.report)?;
        self.out
            .write_all(rendered.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(ScanError::ReportUnwritable)
    }

    fn note_anomaly(&mut self, anomaly: &Anomaly) {
        self.report.anomalies.push(anomaly.clone());
    }
}

/// Create a report sink for the given format name.
pub fn create_reporter(format: &str, out: Box<dyn Write>) -> anyhow::Result<Box<dyn ReportSink>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextReport::new(out))),
        "json" => Ok(Box::new(CollectingReport::new(json::JsonRenderer, out))),
        "markdown" | "md" => Ok(Box::new(CollectingReport::new(
            markdown::MarkdownRenderer,
            out,
        ))),
        _ => Err(anyhow!(
            "unknown format: {}. Use text, json, or markdown",
            format
        )),
    }
}
