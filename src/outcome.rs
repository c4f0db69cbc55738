use std::time::Duration;

use crate::color::{Color, Colorizer};

/// Glyphs marking the outcome of a test on its transcript line.
pub mod glyph {
    pub const PASSED: &str = "✔";
    pub const FAILED: &str = "✘";
    pub const INCOMPLETE: &str = "∅";
    pub const RISKY: &str = "☢";
    pub const SKIPPED: &str = "→";
}

/// Record of one test's display state.
///
/// A fresh outcome is optimistic: green check mark, successful, no detail.
/// A failure-class event downgrades it through [`fail`](TestOutcome::fail),
/// the reporter stamps the runtime at test end, and the record renders
/// itself relative to the outcome rendered before it.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    colorizer: Colorizer,
    class_under_test: String,
    test_label: String,
    symbol: String,
    successful: bool,
    detail: String,
    detail_verbose_only: bool,
    runtime: Option<Duration>,
}

impl TestOutcome {
    pub fn new(
        colorizer: Colorizer,
        class_under_test: impl Into<String>,
        test_label: impl Into<String>,
    ) -> Self {
        TestOutcome {
            colorizer,
            class_under_test: class_under_test.into(),
            test_label: test_label.into(),
            symbol: colorizer.colorize(glyph::PASSED, Color::Green).into_owned(),
            successful: true,
            detail: String::new(),
            detail_verbose_only: false,
            runtime: None,
        }
    }

    /// Downgrade this outcome to non-successful.
    ///
    /// `symbol` replaces the check mark, `detail` is printed as an indented
    /// block beneath the line, and `verbose_only` restricts that block to
    /// verbose transcripts. Repeated calls keep the last write.
    pub fn fail(
        &mut self,
        symbol: impl Into<String>,
        detail: impl Into<String>,
        verbose_only: bool,
    ) {
        self.successful = false;
        self.symbol = symbol.into();
        self.detail = detail.into();
        self.detail_verbose_only = verbose_only;
    }

    pub fn set_runtime(&mut self, runtime: Duration) {
        self.runtime = Some(runtime);
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn class_under_test(&self) -> &str {
        &self.class_under_test
    }

    /// Render this outcome as one transcript chunk.
    ///
    /// `previous` is the outcome rendered directly before this one. It
    /// decides two things: a blank line separates the chunks whenever the
    /// previous outcome printed a detail block, and the class header is
    /// repeated only when the class under test changed.
    pub fn render(&self, previous: Option<&TestOutcome>, verbose: bool) -> String {
        let separator = match previous {
            Some(previous) if previous.detail_printable(verbose) => "\n",
            _ => "",
        };
        format!(
            "{separator}{header} {symbol} {label} {runtime}\n{detail}",
            header = self.class_header(previous.map(TestOutcome::class_under_test)),
            symbol = self.symbol,
            label = self.test_label,
            runtime = self.formatted_runtime(),
            detail = self.formatted_detail(verbose),
        )
    }

    /// Class header line, or an empty string while the class stays the same.
    /// A blank line precedes the header unless this is the very first chunk.
    fn class_header(&self, previous_class: Option<&str>) -> String {
        if previous_class == Some(self.class_under_test.as_str()) {
            return String::new();
        }
        match previous_class {
            Some(_) => format!("\n{}\n", self.class_under_test),
            None => format!("{}\n", self.class_under_test),
        }
    }

    /// Runtime stamp in milliseconds, colored red above five seconds and
    /// yellow above one second. Both thresholds are strict.
    fn formatted_runtime(&self) -> String {
        let seconds = self.runtime.unwrap_or_default().as_secs_f64();
        let stamp = format!("[{:.2} ms]", seconds * 1000.0);
        if seconds > 5.0 {
            self.colorizer.colorize(&stamp, Color::Red).into_owned()
        } else if seconds > 1.0 {
            self.colorizer.colorize(&stamp, Color::Yellow).into_owned()
        } else {
            stamp
        }
    }

    fn formatted_detail(&self, verbose: bool) -> String {
        if !self.detail_printable(verbose) {
            return String::new();
        }
        let indented = self
            .detail
            .split('\n')
            .map(|line| format!("   │ {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("   │\n{indented}\n\n")
    }

    fn detail_printable(&self, verbose: bool) -> bool {
        !self.detail.is_empty() && (!self.detail_verbose_only || verbose)
    }
}
