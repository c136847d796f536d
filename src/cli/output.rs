//! Console output for the sitesource CLI
//!
//! Results go to stdout so they can be piped; status chatter honours `--quiet`
//! and errors always go to stderr.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a category header with consistent styling
    pub fn category(&self, category: &str) {
        if !self.quiet {
            println!("\n{}", style(category).bold().cyan());
        }
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if !self.quiet {
            let styled_value = if highlight {
                style(value).green().bold()
            } else {
                style(value).white()
            };
            println!("  {} {}", style(key).dim(), styled_value);
        }
    }

    /// Print a classification result for a path; shown even in quiet mode
    pub fn path_status(&self, status: PathStatus, path: &str, detail: Option<&str>) {
        let label = format!("{:<8}", status.label());
        let label = match status {
            PathStatus::Source => style(label).green().bold(),
            PathStatus::Skipped => style(label).yellow(),
            PathStatus::Ignored => style(label).dim(),
            PathStatus::Error => style(label).red().bold(),
        };

        match detail {
            Some(detail) => println!("{} {} {}", label, path, style(format!("({})", detail)).dim()),
            None => println!("{} {}", label, path),
        }
    }

    /// Print a bare line of command output; shown even in quiet mode
    pub fn plain(&self, line: &str) {
        println!("{}", line);
    }

    /// Print a count/summary with enhanced styling
    pub fn count(&self, icon: &str, message: &str, count: usize) {
        if !self.quiet {
            println!(
                "{} {} {}",
                style(icon).cyan().bold(),
                style(message).bold(),
                style(format!("({})", count)).dim()
            );
        }
    }

    /// Print blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }
}

/// How `check` classified a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    Source,
    Skipped,
    Ignored,
    Error,
}

impl PathStatus {
    pub fn label(self) -> &'static str {
        match self {
            PathStatus::Source => "source",
            PathStatus::Skipped => "skipped",
            PathStatus::Ignored => "ignored",
            PathStatus::Error => "error",
        }
    }
}
