/// A stable handle to a type stored in a [`Schema`](crate::schema::Schema).
///
/// Schema types are stored in a single insertion-ordered arena, so a
/// [`TypeId`] is just that type's position in the arena. This lets
/// self-referential and mutually-recursive types point at each other without
/// any ownership cycles.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypeId(pub(crate) usize);
impl TypeId {
    pub fn index(&self) -> usize {
        self.0
    }
}
