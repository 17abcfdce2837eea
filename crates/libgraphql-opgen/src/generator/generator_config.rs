use crate::generator::ConfigurationError;

/// Knobs controlling how far and how wide selection sets are expanded.
///
/// The default configuration has no depth limit, omits deprecated fields and
/// refuses to revisit a type that is already being expanded further up the
/// selection path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GeneratorConfig {
    depth_limit: Option<usize>,
    include_cross_references: bool,
    include_deprecated_fields: bool,
}
impl GeneratorConfig {
    /// Maximum number of composite (object-typed) levels selected below the
    /// operation, counting the root field's own type as the first level.
    pub fn depth_limit(&self) -> Option<usize> {
        self.depth_limit
    }

    /// Whether a type may be expanded again inside its own selection.
    pub fn include_cross_references(&self) -> bool {
        self.include_cross_references
    }

    /// Whether fields annotated with `@deprecated` are selected.
    pub fn include_deprecated_fields(&self) -> bool {
        self.include_deprecated_fields
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Check that this configuration can produce finite documents.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match (self.depth_limit, self.include_cross_references) {
            (Some(0), _) => Err(ConfigurationError::ZeroDepthLimit),
            (None, true) => Err(ConfigurationError::UnboundedCrossReferences),
            _ => Ok(()),
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: Option<usize>) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_include_cross_references(mut self, include: bool) -> Self {
        self.include_cross_references = include;
        self
    }

    pub fn with_include_deprecated_fields(mut self, include: bool) -> Self {
        self.include_deprecated_fields = include;
        self
    }
}
