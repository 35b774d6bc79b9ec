//! Canonical GraphQL printer.
//!
//! The printer is total: every node prints to some string and nothing here
//! can fail. Output is deterministic, so printing a parsed document and
//! parsing the result again yields an equal tree (modulo locations).
//!
//! Formatting rules:
//!
//! - Empty argument, directive and variable-definition lists are omitted
//!   together with their delimiters.
//! - An anonymous query with no variables or directives prints as a bare
//!   selection set.
//! - Selection sets are indented blocks, two spaces per level.
//! - Field arguments wrap one per line once the field head would pass
//!   [`MAX_LINE_LENGTH`] columns.
//! - Block strings are re-indented to the current nesting depth.

use crate::ast::*;

/// Column limit for a field's name and inline argument list.
pub const MAX_LINE_LENGTH: usize = 80;

const INDENT: &str = "  ";

/// Prints any node in canonical form.
///
/// ```
/// use graphql_web::{parse_document, print, ParseOptions};
/// use graphql_web::ast::Node;
///
/// let doc = parse_document("query { a, b(x: 1) }", ParseOptions::default()).unwrap();
/// assert_eq!(print(&Node::from(doc)), "{\n  a\n  b(x: 1)\n}");
/// ```
pub fn print(node: &Node) -> String {
    Printer::default().node(node)
}

/// Quotes `value` as a single-line GraphQL string literal (JSON string
/// syntax).
pub fn print_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Wraps `value` in block-string quotes on their own lines, escaping any
/// `"""` it contains.
pub fn print_block_string_literal(value: &str) -> String {
    format!("\"\"\"\n{}\n\"\"\"", value.replace("\"\"\"", "\\\"\"\""))
}

/// Printing state: the line break plus indentation for the current depth.
#[derive(Debug)]
pub(crate) struct Printer {
    line_feed: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            line_feed: "\n".to_string(),
        }
    }
}

impl Printer {
    pub(crate) fn node(&mut self, node: &Node) -> String {
        match node {
            Node::Name(name) => self.name(name),
            Node::Document(doc) => self.document(doc),
            Node::OperationDefinition(op) => self.operation_definition(op),
            Node::VariableDefinition(def) => self.variable_definition(def),
            Node::Variable(var) => self.variable(var),
            Node::SelectionSet(set) => self.selection_set(set),
            Node::Field(field) => self.field(field),
            Node::Argument(arg) => self.argument(arg),
            Node::FragmentSpread(spread) => self.fragment_spread(spread),
            Node::InlineFragment(frag) => self.inline_fragment(frag),
            Node::FragmentDefinition(frag) => self.fragment_definition(frag),
            Node::IntValue(v) => v.value.clone(),
            Node::FloatValue(v) => v.value.clone(),
            Node::StringValue(v) => self.string_value(v),
            Node::BooleanValue(v) => v.value.to_string(),
            Node::NullValue(_) => "null".to_string(),
            Node::EnumValue(v) => v.value.clone(),
            Node::ListValue(list) => self.list_value(list),
            Node::ObjectValue(obj) => self.object_value(obj),
            Node::ObjectField(field) => self.object_field(field),
            Node::Directive(dir) => self.directive(dir),
            Node::NamedType(named) => named.name.value.clone(),
            Node::ListType(list) => self.list_type(list),
            Node::NonNullType(non_null) => self.non_null_type(non_null),
        }
    }

    pub(crate) fn name(&mut self, name: &Name) -> String {
        name.value.clone()
    }

    pub(crate) fn document(&mut self, doc: &Document) -> String {
        let printed: Vec<String> = doc
            .definitions
            .iter()
            .map(|def| match def {
                Definition::Operation(op) => self.operation_definition(op),
                Definition::Fragment(frag) => self.fragment_definition(frag),
            })
            .collect();
        printed.join("\n\n")
    }

    pub(crate) fn operation_definition(&mut self, op: &OperationDefinition) -> String {
        let mut out = op.operation.as_str().to_string();
        if let Some(name) = &op.name {
            out.push(' ');
            out.push_str(&name.value);
        }
        if !op.variable_definitions.is_empty() {
            if op.name.is_none() {
                out.push(' ');
            }
            let defs = self.join(&op.variable_definitions, ", ", |p, def| p.variable_definition(def));
            out.push('(');
            out.push_str(&defs);
            out.push(')');
        }
        self.push_directives(&mut out, &op.directives);

        let selection_set = self.selection_set(&op.selection_set);
        let body = if out == "query" && op.description.is_none() {
            selection_set
        } else if selection_set.is_empty() {
            out
        } else {
            out + " " + &selection_set
        };
        self.with_description(op.description.as_deref(), body, "\n")
    }

    pub(crate) fn fragment_definition(&mut self, frag: &FragmentDefinition) -> String {
        let mut out = format!(
            "fragment {} on {}",
            frag.name.value, frag.type_condition.name.value,
        );
        self.push_directives(&mut out, &frag.directives);
        self.push_selection_set(&mut out, &frag.selection_set);
        self.with_description(frag.description.as_deref(), out, "\n")
    }

    pub(crate) fn variable_definition(&mut self, def: &VariableDefinition) -> String {
        let mut out = format!("{}: {}", self.variable(&def.variable), self.ty(&def.ty));
        if let Some(default_value) = &def.default_value {
            out.push_str(" = ");
            out.push_str(&self.value(default_value));
        }
        self.push_directives(&mut out, &def.directives);
        self.with_description(def.description.as_deref(), out, " ")
    }

    pub(crate) fn variable(&mut self, var: &Variable) -> String {
        format!("${}", var.name.value)
    }

    /// An empty selection set prints as `""`; callers omit it entirely.
    pub(crate) fn selection_set(&mut self, set: &SelectionSet) -> String {
        if set.selections.is_empty() {
            return String::new();
        }
        self.line_feed.push_str(INDENT);
        let mut out = String::from("{");
        for selection in &set.selections {
            out.push_str(&self.line_feed);
            out.push_str(&self.selection(selection));
        }
        self.line_feed.truncate(self.line_feed.len() - INDENT.len());
        out.push_str(&self.line_feed);
        out.push('}');
        out
    }

    fn selection(&mut self, selection: &Selection) -> String {
        match selection {
            Selection::Field(field) => self.field(field),
            Selection::FragmentSpread(spread) => self.fragment_spread(spread),
            Selection::InlineFragment(frag) => self.inline_fragment(frag),
        }
    }

    pub(crate) fn field(&mut self, field: &Field) -> String {
        let mut out = match &field.alias {
            Some(alias) => format!("{}: {}", alias.value, field.name.value),
            None => field.name.value.clone(),
        };
        if !field.arguments.is_empty() {
            let args = self.join(&field.arguments, ", ", |p, arg| p.argument(arg));
            if out.chars().count() + args.chars().count() + 2 > MAX_LINE_LENGTH {
                self.line_feed.push_str(INDENT);
                let separator = self.line_feed.clone();
                let wrapped = self.join(&field.arguments, &separator, |p, arg| p.argument(arg));
                out.push('(');
                out.push_str(&separator);
                out.push_str(&wrapped);
                self.line_feed.truncate(self.line_feed.len() - INDENT.len());
                out.push_str(&self.line_feed);
                out.push(')');
            } else {
                out.push('(');
                out.push_str(&args);
                out.push(')');
            }
        }
        self.push_directives(&mut out, &field.directives);
        if let Some(selection_set) = &field.selection_set {
            self.push_selection_set(&mut out, selection_set);
        }
        out
    }

    pub(crate) fn fragment_spread(&mut self, spread: &FragmentSpread) -> String {
        let mut out = format!("...{}", spread.name.value);
        self.push_directives(&mut out, &spread.directives);
        out
    }

    pub(crate) fn inline_fragment(&mut self, frag: &InlineFragment) -> String {
        let mut out = String::from("...");
        if let Some(type_condition) = &frag.type_condition {
            out.push_str(" on ");
            out.push_str(&type_condition.name.value);
        }
        self.push_directives(&mut out, &frag.directives);
        self.push_selection_set(&mut out, &frag.selection_set);
        out
    }

    pub(crate) fn argument(&mut self, arg: &Argument) -> String {
        format!("{}: {}", arg.name.value, self.value(&arg.value))
    }

    pub(crate) fn directive(&mut self, dir: &Directive) -> String {
        let mut out = format!("@{}", dir.name.value);
        if !dir.arguments.is_empty() {
            let args = self.join(&dir.arguments, ", ", |p, arg| p.argument(arg));
            out.push('(');
            out.push_str(&args);
            out.push(')');
        }
        out
    }

    pub(crate) fn value(&mut self, value: &Value) -> String {
        match value {
            Value::Variable(var) => self.variable(var),
            Value::Int(v) => v.value.clone(),
            Value::Float(v) => v.value.clone(),
            Value::String(v) => self.string_value(v),
            Value::Boolean(v) => v.value.to_string(),
            Value::Null(_) => "null".to_string(),
            Value::Enum(v) => v.value.clone(),
            Value::List(list) => self.list_value(list),
            Value::Object(obj) => self.object_value(obj),
        }
    }

    pub(crate) fn string_value(&mut self, string: &StringValue) -> String {
        if string.block {
            print_block_string_literal(&string.value).replace('\n', &self.line_feed)
        } else {
            print_string_literal(&string.value)
        }
    }

    pub(crate) fn list_value(&mut self, list: &ListValue) -> String {
        format!("[{}]", self.join(&list.values, ", ", Self::value))
    }

    pub(crate) fn object_value(&mut self, obj: &ObjectValue) -> String {
        format!("{{{}}}", self.join(&obj.fields, ", ", |p, field| p.object_field(field)))
    }

    pub(crate) fn object_field(&mut self, field: &ObjectField) -> String {
        format!("{}: {}", field.name.value, self.value(&field.value))
    }

    pub(crate) fn ty(&mut self, ty: &Type) -> String {
        match ty {
            Type::Named(named) => named.name.value.clone(),
            Type::List(list) => self.list_type(list),
            Type::NonNull(non_null) => self.non_null_type(non_null),
        }
    }

    pub(crate) fn list_type(&mut self, list: &ListType) -> String {
        format!("[{}]", self.ty(&list.ty))
    }

    pub(crate) fn non_null_type(&mut self, non_null: &NonNullType) -> String {
        let inner = match &non_null.ty {
            NullableType::Named(named) => named.name.value.clone(),
            NullableType::List(list) => self.list_type(list),
        };
        inner + "!"
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn join<T>(
        &mut self,
        items: &[T],
        separator: &str,
        mut print_item: impl FnMut(&mut Self, &T) -> String,
    ) -> String {
        let mut out = String::new();
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            out.push_str(&print_item(self, item));
        }
        out
    }

    fn push_directives(&mut self, out: &mut String, directives: &[std::sync::Arc<Directive>]) {
        if !directives.is_empty() {
            out.push(' ');
            out.push_str(&self.join(directives, " ", |p, dir| p.directive(dir)));
        }
    }

    fn push_selection_set(&mut self, out: &mut String, set: &SelectionSet) {
        let printed = self.selection_set(set);
        if !printed.is_empty() {
            out.push(' ');
            out.push_str(&printed);
        }
    }

    /// Prefixes `body` with the printed description and `separator`.
    fn with_description(
        &mut self,
        description: Option<&StringValue>,
        body: String,
        separator: &str,
    ) -> String {
        match description {
            Some(description) => self.string_value(description) + separator + &body,
            None => body,
        }
    }
}
