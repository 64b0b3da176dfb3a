use crate::Location;
use crate::ast::NamedType;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;
use inherent::inherent;

/// The declared type of a variable definition (`[ID!]`, `Int`, ...).
///
/// A [`NonNullType`] never directly wraps another [`NonNullType`]; the
/// codec rejects documents that encode one.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListType),
    Named(NamedType),
    NonNull(NonNullType),
}

impl TypeAnnotation {
    /// The name of the innermost named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            TypeAnnotation::List(list) => list.inner.innermost_type_name(),
            TypeAnnotation::Named(named) => named.type_name(),
            TypeAnnotation::NonNull(non_null) => non_null.inner.innermost_type_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub inner: Box<TypeAnnotation>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub inner: Box<TypeAnnotation>,
    pub loc: Option<Location>,
}

impl_ast_node!(ListType, printer::print_list_type);
impl_ast_node!(NonNullType, printer::print_non_null_type);

#[inherent]
impl crate::ast::AstNode for TypeAnnotation {
    pub fn loc(&self) -> Option<Location> {
        match self {
            TypeAnnotation::List(list) => list.loc,
            TypeAnnotation::Named(named) => named.loc,
            TypeAnnotation::NonNull(non_null) => non_null.loc,
        }
    }

    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            TypeAnnotation::List(list) => list.append_source(sink, source),
            TypeAnnotation::Named(named) => named.append_source(sink, source),
            TypeAnnotation::NonNull(non_null) => non_null.append_source(sink, source),
        }
    }
}
