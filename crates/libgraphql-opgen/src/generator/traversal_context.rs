use crate::generator::GeneratorConfig;
use crate::generator::VariableRegistry;
use crate::types::GraphQLTypeKind;
use crate::types::TypeId;

/// How a type was entered while walking a selection path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundaryKind {
    /// The type returned by the operation's root field.
    Root,

    /// An object-typed field.
    Object,

    /// A union- or interface-typed field.
    Polymorphic,

    /// A concrete member type selected through an inline fragment.
    Fragment,
}

#[derive(Clone, Debug)]
struct Frame {
    boundary: BoundaryKind,
    charged: bool,
    type_id: TypeId,
}

/// Mutable state for generating the document of one root field.
///
/// Tracks the path of types currently being expanded (to stop cycles) and
/// the depth consumed along that path (to honor the depth limit), and owns
/// the [`VariableRegistry`] the document's arguments are hoisted into.
///
/// Depth accounting:
///
/// * The root field's type always costs one level.
/// * An object-typed field costs one level and is refused when that would
///   exceed the limit.
/// * The first union- or interface-typed field along a path is free, so its
///   member types' fields sit at the same depth as the field itself. Any
///   further polymorphic field on the same path costs a level like an
///   object field.
/// * Inline fragments never cost a level.
///
/// Since at most one free boundary can exist per path, a finite limit always
/// bounds the expansion.
#[derive(Debug)]
pub struct TraversalContext {
    depth: usize,
    depth_limit: Option<usize>,
    frames: Vec<Frame>,
    include_cross_references: bool,
    variables: VariableRegistry,
}
impl TraversalContext {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            depth: 0,
            depth_limit: config.depth_limit(),
            frames: vec![],
            include_cross_references: config.include_cross_references(),
            variables: VariableRegistry::new(),
        }
    }

    /// Number of levels consumed along the current path.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter the type returned by the root field. This is never refused.
    pub fn enter_root(&mut self, type_id: TypeId) {
        self.push(type_id, BoundaryKind::Root, true);
    }

    /// Ask to descend into a composite-typed field. When this returns `true`
    /// the caller must balance it with [`TraversalContext::leave()`].
    pub fn try_enter_field(&mut self, type_id: TypeId, kind: GraphQLTypeKind) -> bool {
        let (boundary, charged) =
            if kind.is_polymorphic() {
                (BoundaryKind::Polymorphic, self.has_free_polymorphic_frame())
            } else {
                (BoundaryKind::Object, true)
            };

        if self.is_cycle(type_id) {
            tracing::trace!(
                "Not re-entering type #{} already on the selection path",
                type_id.index(),
            );
            return false;
        }

        if charged && self.exceeds_limit(self.depth + 1) {
            tracing::trace!(
                "Not entering type #{} beyond depth limit {:?}",
                type_id.index(),
                self.depth_limit,
            );
            return false;
        }

        self.push(type_id, boundary, charged);
        true
    }

    /// Ask to descend into an inline fragment on a concrete member type.
    /// Fragments are only refused by cycle detection.
    pub fn try_enter_fragment(&mut self, type_id: TypeId) -> bool {
        if self.is_cycle(type_id) {
            tracing::trace!(
                "Not re-entering member type #{} already on the selection path",
                type_id.index(),
            );
            return false;
        }
        self.push(type_id, BoundaryKind::Fragment, false);
        true
    }

    pub fn into_variables(self) -> VariableRegistry {
        self.variables
    }

    /// Pop the most recently entered type.
    pub fn leave(&mut self) {
        if let Some(frame) = self.frames.pop() {
            if frame.charged {
                self.depth -= 1;
            }
        }
    }

    /// Whether `type_id` is being expanded somewhere up the current path.
    pub fn path_contains(&self, type_id: TypeId) -> bool {
        self.frames.iter().any(|frame| frame.type_id == type_id)
    }

    /// The boundary kinds of the current path, outermost first.
    pub fn path_boundaries(&self) -> Vec<BoundaryKind> {
        self.frames.iter().map(|frame| frame.boundary).collect()
    }

    pub fn variables_mut(&mut self) -> &mut VariableRegistry {
        &mut self.variables
    }

    fn exceeds_limit(&self, depth: usize) -> bool {
        self.depth_limit.is_some_and(|limit| depth > limit)
    }

    fn has_free_polymorphic_frame(&self) -> bool {
        self.frames.iter().any(|frame| {
            frame.boundary == BoundaryKind::Polymorphic && !frame.charged
        })
    }

    fn is_cycle(&self, type_id: TypeId) -> bool {
        !self.include_cross_references && self.path_contains(type_id)
    }

    fn push(&mut self, type_id: TypeId, boundary: BoundaryKind, charged: bool) {
        if charged {
            self.depth += 1;
        }
        self.frames.push(Frame {
            boundary,
            charged,
            type_id,
        });
    }
}
