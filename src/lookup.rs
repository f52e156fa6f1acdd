//! Declarative mapping between URL path placeholders and relational fields.
//!
//! A nested route such as `/roots/{parent_pk}/children` carries the parent's
//! key in the `parent_pk` placeholder. A [`ParentLookup`] declares which
//! field (or fields) of the child's table that placeholder is compared
//! against when the collection is narrowed to the addressed parent.

/// The field side of a parent lookup.
///
/// A field path is either a bare column name on the resource's own table
/// (`"parent_id"`) or a `joined_table.column` pair (`"child_roots.root_id"`)
/// referring to a table the resource's default query joins in. Field paths
/// are not validated here; a path that does not resolve surfaces as a
/// database error when the query runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    /// Match a single field against the placeholder value.
    Field(String),
    /// Match any of several fields against the same placeholder value.
    ///
    /// Useful when one path segment legitimately corresponds to more than
    /// one relational path to the same logical parent, for example a
    /// preferred foreign key and a many-to-many link. An empty list adds no
    /// constraint at all.
    AnyOf(Vec<String>),
}

/// One entry of a resource's parent lookup mapping: a path placeholder name
/// and the field(s) it filters on.
///
/// Mappings are ordered lists of these entries, one per ancestor level, and
/// are fixed per resource type (see
/// [`NestedResource`](crate::traits::NestedResource)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLookup {
    param: String,
    target: LookupTarget,
}

impl ParentLookup {
    /// Maps a placeholder onto a single field path.
    ///
    /// ```
    /// use nestcrate::lookup::ParentLookup;
    ///
    /// let lookup = ParentLookup::field("parent_pk", "parent_id");
    /// assert_eq!(lookup.param(), "parent_pk");
    /// ```
    pub fn field(param: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            target: LookupTarget::Field(field.into()),
        }
    }

    /// Maps a placeholder onto several field paths, any of which may match.
    ///
    /// ```
    /// use nestcrate::lookup::ParentLookup;
    ///
    /// let lookup = ParentLookup::any_of(
    ///     "parent_pk",
    ///     ["preferred_root_id", "child_roots.root_id"],
    /// );
    /// assert_eq!(lookup.param(), "parent_pk");
    /// ```
    pub fn any_of<I, S>(param: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            param: param.into(),
            target: LookupTarget::AnyOf(fields.into_iter().map(Into::into).collect()),
        }
    }

    /// The path placeholder name this entry resolves, e.g. `parent_pk`.
    #[must_use]
    pub fn param(&self) -> &str {
        &self.param
    }

    /// The field(s) the placeholder value is compared against.
    #[must_use]
    pub fn target(&self) -> &LookupTarget {
        &self.target
    }
}
