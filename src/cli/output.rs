//! Terminal output: the shared command output stream and colored helpers
//!
//! Colors respect NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use colored::Colorize;

use crate::domain::Chart;

/// Cloneable handle to the single output stream all commands write to.
///
/// Clones share the underlying writer; `same_stream` tells whether two
/// handles refer to the same one.
#[derive(Clone)]
pub struct Output {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Output {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Output bound to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn same_stream(&self, other: &Output) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Box<dyn Write + Send>>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::other("output stream lock poisoned"))
    }

    /// Write text verbatim and flush.
    pub fn text(&self, text: &str) -> io::Result<()> {
        let mut writer = self.lock()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }

    /// Write a success status (green checkmark).
    pub fn success(&self, msg: &(impl Display + ?Sized)) -> io::Result<()> {
        self.text(&format!("{} {}\n", "✓".green(), msg))
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("stream", &Arc::as_ptr(&self.inner))
            .finish()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

const CHART_HEADERS: [&str; 4] = ["NAME", "CHART VERSION", "APP VERSION", "PLANS"];

/// Render the chart listing as a column-aligned table with a header row.
pub fn format_chart_table(charts: &[Chart]) -> String {
    let rows: Vec<[String; 4]> = charts
        .iter()
        .map(|c| {
            [
                c.name.clone(),
                c.chart_version.clone(),
                c.app_version.clone(),
                c.plans.join(","),
            ]
        })
        .collect();

    let mut widths = CHART_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: [&str; 4]| {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
        format!("{}\n", line.trim_end())
    };

    let mut table = render(CHART_HEADERS);
    for row in &rows {
        table.push_str(&render([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::capture_output;

    fn chart(name: &str, version: &str, app: &str, plans: &[&str]) -> Chart {
        Chart {
            name: name.into(),
            chart_version: version.into(),
            app_version: app.into(),
            plans: plans.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn given_no_charts_when_formatting_then_only_header() {
        assert_eq!(
            format_chart_table(&[]),
            "NAME  CHART VERSION  APP VERSION  PLANS\n"
        );
    }

    #[test]
    fn given_charts_when_formatting_then_columns_align() {
        let table = format_chart_table(&[
            chart("mysql", "0.10.2", "5.7.14", &["small", "medium"]),
            chart("spacebears", "1.0.0", "", &[]),
        ]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "NAME        CHART VERSION  APP VERSION  PLANS");
        assert_eq!(lines[1], "mysql       0.10.2         5.7.14       small,medium");
        assert_eq!(lines[2], "spacebears  1.0.0");
    }

    #[test]
    fn given_clones_when_comparing_then_same_stream() {
        let (out, _captured) = capture_output();
        let other = Output::new(Vec::new());

        assert!(out.same_stream(&out.clone()));
        assert!(!out.same_stream(&other));
    }

    #[test]
    fn given_clones_when_writing_then_all_text_lands_in_one_buffer() {
        let (out, captured) = capture_output();
        let clone = out.clone();

        out.text("first\n").unwrap();
        clone.text("second\n").unwrap();

        assert_eq!(captured.contents(), "first\nsecond\n");
    }
}
