use crate::generator::ArgumentBinding;
use crate::generator::GeneratorConfig;
use crate::generator::GeneratorError;
use crate::generator::OperationKind;
use crate::generator::SelectionNode;
use crate::generator::TraversalContext;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeId;

type Result<T> = std::result::Result<T, GeneratorError>;

/// Identifies the run an error belongs to and the `Type.field` hops walked
/// so far.
struct ExpansionScope<'a> {
    operation_kind: OperationKind,
    path: Vec<String>,
    root_field: &'a str,
}
impl ExpansionScope<'_> {
    fn invalid_field_type(&self, type_name: &str) -> GeneratorError {
        GeneratorError::InvalidFieldType {
            operation_kind: self.operation_kind,
            root_field: self.root_field.to_string(),
            path: self.path.to_owned(),
            type_name: type_name.to_string(),
        }
    }

    fn unresolvable_type(&self, type_name: &str) -> GeneratorError {
        GeneratorError::UnresolvableTypeReference {
            operation_kind: self.operation_kind,
            root_field: self.root_field.to_string(),
            path: self.path.to_owned(),
            type_name: type_name.to_string(),
        }
    }
}

/// Builds the selection tree for a root field by walking the schema's type
/// graph.
///
/// Fields are visited in declaration order. Unions and interfaces expand
/// into one inline fragment per possible object type. Field arguments are
/// hoisted into variables after the field's own children have been
/// expanded, so variables used deeper in a selection are declared first.
#[derive(Clone, Debug)]
pub struct SelectionExpander<'schema> {
    include_deprecated_fields: bool,
    schema: &'schema Schema,
}
impl<'schema> SelectionExpander<'schema> {
    pub fn new(schema: &'schema Schema, config: &GeneratorConfig) -> Self {
        Self {
            include_deprecated_fields: config.include_deprecated_fields(),
            schema,
        }
    }

    /// Expand every selectable field of the object or interface identified
    /// by `type_id`. Denied and empty composite fields are left out.
    ///
    /// `operation_kind` and `root_field` only label any error that is
    /// returned.
    pub fn expand(
        &self,
        operation_kind: OperationKind,
        root_field: &str,
        type_id: TypeId,
        context: &mut TraversalContext,
    ) -> Result<Vec<SelectionNode>> {
        let mut scope = ExpansionScope {
            operation_kind,
            path: vec![],
            root_field,
        };
        self.expand_fields(type_id, context, &mut scope)
    }

    /// Build the tree for one root field of the `operation_kind` root type.
    ///
    /// The root field is always the tree's root node. A root field returning
    /// a leaf type becomes a bare field carrying only its argument bindings.
    pub fn expand_root_field(
        &self,
        operation_kind: OperationKind,
        root_type_name: &str,
        root_field: &Field,
        context: &mut TraversalContext,
    ) -> Result<SelectionNode> {
        let mut scope = ExpansionScope {
            operation_kind,
            path: vec![format!("{root_type_name}.{}", root_field.name())],
            root_field: root_field.name(),
        };

        let type_name = root_field.type_annotation()
            .innermost_named_type_annotation()
            .graphql_type_name();
        let (type_id, type_) = self.schema.lookup_type(type_name)
            .ok_or_else(|| scope.unresolvable_type(type_name))?;

        match type_ {
            GraphQLType::Bool
            | GraphQLType::Enum(_)
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String =>
                Ok(SelectionNode::Scalar {
                    name: root_field.name().to_string(),
                    arguments: Self::bind_arguments(root_field, context),
                }),

            GraphQLType::InputObject(_) =>
                Err(scope.invalid_field_type(type_name)),

            GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => {
                context.enter_root(type_id);
                let children = self.expand_composite(type_id, type_, context, &mut scope);
                context.leave();
                let children = children?;

                if children.is_empty() {
                    return Err(GeneratorError::EmptyRootSelection {
                        operation_kind,
                        root_field: root_field.name().to_string(),
                        type_name: type_name.to_string(),
                    });
                }

                Ok(SelectionNode::Object {
                    name: root_field.name().to_string(),
                    arguments: Self::bind_arguments(root_field, context),
                    children,
                })
            },
        }
    }

    fn bind_arguments(
        field: &Field,
        context: &mut TraversalContext,
    ) -> Vec<ArgumentBinding> {
        field.parameters()
            .values()
            .map(|param| ArgumentBinding {
                argument_name: param.name().to_string(),
                variable_name: context.variables_mut().allocate(
                    param.name(),
                    param.type_annotation(),
                ),
            })
            .collect()
    }

    /// Children of an already-entered composite type: its own fields for an
    /// object, or one inline fragment per possible type for a union or
    /// interface.
    fn expand_composite(
        &self,
        type_id: TypeId,
        type_: &GraphQLType,
        context: &mut TraversalContext,
        scope: &mut ExpansionScope<'_>,
    ) -> Result<Vec<SelectionNode>> {
        match type_ {
            GraphQLType::Object(_) => self.expand_fields(type_id, context, scope),
            _ => self.expand_fragments(type_id, context, scope),
        }
    }

    fn expand_field(
        &self,
        owner_type_name: &str,
        field: &Field,
        context: &mut TraversalContext,
        scope: &mut ExpansionScope<'_>,
    ) -> Result<Option<SelectionNode>> {
        scope.path.push(format!("{owner_type_name}.{}", field.name()));

        let type_name = field.type_annotation()
            .innermost_named_type_annotation()
            .graphql_type_name();
        let (type_id, type_) = self.schema.lookup_type(type_name)
            .ok_or_else(|| scope.unresolvable_type(type_name))?;

        let node = match type_ {
            GraphQLType::Bool
            | GraphQLType::Enum(_)
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String =>
                Some(SelectionNode::Scalar {
                    name: field.name().to_string(),
                    arguments: Self::bind_arguments(field, context),
                }),

            GraphQLType::InputObject(_) =>
                return Err(scope.invalid_field_type(type_name)),

            GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => {
                if context.try_enter_field(type_id, type_.kind()) {
                    let children = self.expand_composite(type_id, type_, context, scope);
                    context.leave();
                    let children = children?;
                    if children.is_empty() {
                        None
                    } else {
                        Some(SelectionNode::Object {
                            name: field.name().to_string(),
                            arguments: Self::bind_arguments(field, context),
                            children,
                        })
                    }
                } else {
                    None
                }
            },
        };

        scope.path.pop();
        Ok(node)
    }

    fn expand_fields(
        &self,
        type_id: TypeId,
        context: &mut TraversalContext,
        scope: &mut ExpansionScope<'_>,
    ) -> Result<Vec<SelectionNode>> {
        let type_ = self.schema.type_by_id(type_id);
        let Some(fields) = type_.fields() else {
            return Ok(vec![]);
        };

        let mut nodes = vec![];
        for field in fields.values() {
            if !self.include_deprecated_fields
                && field.deprecation_state().is_deprecated() {
                continue;
            }
            if let Some(node) = self.expand_field(type_.name(), field, context, scope)? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    fn expand_fragments(
        &self,
        type_id: TypeId,
        context: &mut TraversalContext,
        scope: &mut ExpansionScope<'_>,
    ) -> Result<Vec<SelectionNode>> {
        let mut fragments = vec![];
        for member_id in self.schema.possible_types(type_id) {
            if !context.try_enter_fragment(*member_id) {
                continue;
            }
            let children = self.expand_fields(*member_id, context, scope);
            context.leave();
            let children = children?;
            if !children.is_empty() {
                fragments.push(SelectionNode::InlineFragment {
                    type_condition: self.schema.type_by_id(*member_id).name().to_string(),
                    children,
                });
            }
        }
        Ok(fragments)
    }
}
