use super::logger::Verbosity;

#[derive(Clone, Debug, Default)]
pub struct InductionParams {
    pub parallel: bool,
    pub verbosity: Verbosity,
}

impl InductionParams {
    pub fn new() -> Self {
        Self {
            parallel: false,
            verbosity: Verbosity::default(),
        }
    }

    /// Evaluates candidate gain ratios on the rayon pool. The chosen attribute is
    /// the same either way.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = InductionParams::new();
        assert!(!params.parallel());
        assert_eq!(params.verbosity(), Verbosity::Warning);
    }

    #[test]
    fn test_setters() {
        let mut params = InductionParams::new();
        params.set_parallel(true);
        params.set_verbosity(Verbosity::Debug);
        assert!(params.parallel());
        assert_eq!(params.verbosity(), Verbosity::Debug);
    }
}
