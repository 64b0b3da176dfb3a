use crate::Location;
use crate::ast::ObjectField;
use crate::ast::Variable;
use crate::printer;
use inherent::inherent;

/// An input value used as an argument or a variable's default value.
///
/// Int and Float values keep the lexeme exactly as written in the query
/// source, so no precision is lost between compile time and execution.
///
/// See
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean {
        loc: Option<Location>,
        value: bool,
    },
    Enum {
        loc: Option<Location>,
        value: String,
    },
    Float {
        loc: Option<Location>,
        value: String,
    },
    Int {
        loc: Option<Location>,
        value: String,
    },
    List {
        loc: Option<Location>,
        values: Vec<Value>,
    },
    Null {
        loc: Option<Location>,
    },
    Object {
        fields: Vec<ObjectField>,
        loc: Option<Location>,
    },
    String {
        block: bool,
        loc: Option<Location>,
        value: String,
    },
    Variable(Variable),
}

impl Value {
    /// Iterate over every variable referenced by this value, including those
    /// nested inside list and object values.
    pub fn variables(&self) -> Vec<&Variable> {
        let mut found = vec![];
        self.collect_variables(&mut found);
        found
    }

    fn collect_variables<'a>(&'a self, found: &mut Vec<&'a Variable>) {
        match self {
            Value::Variable(var) => found.push(var),
            Value::List { values, .. } => {
                for value in values {
                    value.collect_variables(found);
                }
            },
            Value::Object { fields, .. } => {
                for field in fields {
                    field.value.collect_variables(found);
                }
            },
            _ => (),
        }
    }
}

#[inherent]
impl crate::ast::AstNode for Value {
    pub fn loc(&self) -> Option<Location> {
        match self {
            Value::Boolean { loc, .. }
            | Value::Enum { loc, .. }
            | Value::Float { loc, .. }
            | Value::Int { loc, .. }
            | Value::List { loc, .. }
            | Value::Null { loc }
            | Value::Object { loc, .. }
            | Value::String { loc, .. } => *loc,
            Value::Variable(var) => var.loc,
        }
    }

    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let (Some(src), Some(loc)) = (source, self.loc())
            && crate::ast::ast_node::append_loc_source_slice(&loc, sink, src) {
            return;
        }
        sink.push_str(&printer::print_value(self));
    }
}
