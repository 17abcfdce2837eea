/// Binds a field argument to the operation variable that supplies it, as in
/// `region(language: $language2)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArgumentBinding {
    pub argument_name: String,
    pub variable_name: String,
}

/// One entry in a generated selection set.
///
/// `Object` and `InlineFragment` nodes never have an empty `children` list;
/// the expander omits a composite selection rather than emit one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectionNode {
    InlineFragment {
        type_condition: String,
        children: Vec<SelectionNode>,
    },

    Object {
        name: String,
        arguments: Vec<ArgumentBinding>,
        children: Vec<SelectionNode>,
    },

    Scalar {
        name: String,
        arguments: Vec<ArgumentBinding>,
    },
}
impl SelectionNode {
    pub fn arguments(&self) -> &[ArgumentBinding] {
        match self {
            Self::InlineFragment { .. } => &[],
            Self::Object { arguments, .. }
            | Self::Scalar { arguments, .. } => arguments.as_slice(),
        }
    }

    pub fn children(&self) -> &[SelectionNode] {
        match self {
            Self::InlineFragment { children, .. }
            | Self::Object { children, .. } => children.as_slice(),
            Self::Scalar { .. } => &[],
        }
    }

    /// The selected field's name, or the type condition of an inline
    /// fragment.
    pub fn name(&self) -> &str {
        match self {
            Self::InlineFragment { type_condition, .. } => type_condition.as_str(),
            Self::Object { name, .. }
            | Self::Scalar { name, .. } => name.as_str(),
        }
    }
}
