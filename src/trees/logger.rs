//! Verbosity gated progress output for tree induction.
use super::tree::DecisionTree;
use std::fmt::{self, Display, Formatter};

/// How much the induction reports on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    Silent,
    #[default]
    Warning,
    Info,
    Debug,
}

impl Verbosity {
    /// Maps `-v` repetitions and `-q` onto a level.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Verbosity::Silent;
        }
        match verbose {
            0 => Verbosity::Warning,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Silent => "silent",
            Verbosity::Warning => "warning",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// Why the builder stopped at a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafReason {
    /// All rows share one decision.
    Pure,
    /// No unused attribute is left on the path.
    Exhausted,
    /// No row carries the branch value; the parent's majority is used.
    EmptyBranch,
}

impl Display for LeafReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reason = match self {
            LeafReason::Pure => "pure",
            LeafReason::Exhausted => "attributes exhausted",
            LeafReason::EmptyBranch => "empty branch",
        };
        f.write_str(reason)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InductionLogger {
    verbosity: Verbosity,
}

impl InductionLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    fn emit(&self, level: Verbosity, message: fmt::Arguments<'_>) {
        if self.enabled(level) {
            eprintln!("[{}] {}", level, message);
        }
    }

    pub fn start_induction(&self, rows: usize, attributes: usize) {
        self.emit(
            Verbosity::Info,
            format_args!("Inducing tree from {} rows over {} attributes", rows, attributes),
        );
    }

    pub fn split(&self, depth: usize, attribute: usize, gain_ratio: f64, rows: usize) {
        self.emit(
            Verbosity::Debug,
            format_args!(
                "{:indent$}split on a{} (gain ratio {:.4}, {} rows)",
                "",
                attribute + 1,
                gain_ratio,
                rows,
                indent = depth * 2
            ),
        );
    }

    pub fn leaf(&self, depth: usize, label: &str, rows: usize, reason: LeafReason) {
        self.emit(
            Verbosity::Debug,
            format_args!(
                "{:indent$}leaf {} ({}, {} rows)",
                "",
                label,
                reason,
                rows,
                indent = depth * 2
            ),
        );
    }

    pub fn finish_induction(&self, tree: &DecisionTree) {
        self.emit(
            Verbosity::Info,
            format_args!(
                "Finished: {} nodes, {} leaves, depth {}",
                tree.len(),
                tree.leaf_count(),
                tree.depth()
            ),
        );
    }

    pub fn warn(&self, message: impl Display) {
        self.emit(Verbosity::Warning, format_args!("{}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_order() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Warning);
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Warning);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Info);
        assert_eq!(Verbosity::from_flags(4, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(2, true), Verbosity::Silent);
    }

    #[test]
    fn test_enabled() {
        let logger = InductionLogger::new(Verbosity::Info);
        assert!(logger.enabled(Verbosity::Warning));
        assert!(logger.enabled(Verbosity::Info));
        assert!(!logger.enabled(Verbosity::Debug));
        assert!(!logger.enabled(Verbosity::Silent));

        let silent = InductionLogger::new(Verbosity::Silent);
        assert!(!silent.enabled(Verbosity::Warning));
    }
}
