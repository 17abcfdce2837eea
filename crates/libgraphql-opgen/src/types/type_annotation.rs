use crate::ast;
use crate::loc;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field) or
/// [`Parameter`](crate::types::Parameter).
///
/// Non-null wrapping is represented by the `nullable` flag carried on each
/// level of the annotation rather than by a separate wrapper variant.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`TypeAnnotation`] was defined within the schema.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }

    pub(crate) fn from_ast_type(
        src_loc: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
    ) -> Self {
        Self::from_ast_type_impl(src_loc, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(Self::from_ast_type_impl(
                        location,
                        inner,
                        true,
                    )),
                    nullable,
                    ref_location: location.to_owned(),
                }),

            ast::schema::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    ref_location: location.to_owned(),
                    type_name: name.to_string(),
                }),

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(list_annot) =>
                list_annot.inner_type_annotation().innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable(),
            Self::Named(annot) => annot.nullable(),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
