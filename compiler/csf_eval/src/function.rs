//! Function declarations as seen by the environment.

/// Name of the implicit function that owns level 0.
pub const MAIN_FUNCTION: &str = "%main";

/// A declared function: its name, the static level its body runs at, and its
/// parameter names in declaration order.
///
/// The body itself belongs to the evaluator; the environment only needs to
/// know where the function's activation goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDefinition {
    name: String,
    level: usize,
    parameters: Vec<String>,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, level: usize) -> Self {
        FunctionDefinition {
            name: name.into(),
            level,
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Static nesting level of the function body.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}
