//! Recursive descent parser for GraphQL executable documents.
//!
//! This module provides [`GraphQLParser`], a generic parser that works with
//! any token source implementing [`GraphQLTokenSource`]. It parses whole
//! documents as well as standalone values and type references.
//!
//! # Architecture
//!
//! Each grammar rule has a corresponding `parse_*` method returning
//! `Result<Node, GraphQLParseError>`. Parsing is fail-fast: the first error
//! is returned immediately and no partial tree is produced. Errors name the
//! [`GrammarProduction`] being parsed when they occurred.
//!
//! Values, selection sets and list types share one nesting counter that is
//! capped at [`GraphQLParser::MAX_RECURSION_DEPTH`], so hostile input such as
//! `[[[[...` fails with an error instead of overflowing the stack.

use crate::ast;
use crate::ast::OperationKind;
use crate::GrammarProduction;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::Location;
use crate::ParseOptions;
use crate::Source;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use std::sync::Arc;

type ParseResult<T> = Result<T, GraphQLParseError>;

/// Keywords that start type-system definitions, which executable documents
/// cannot contain.
const TYPE_SYSTEM_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

/// Whether variables are allowed in the value being parsed, and if not,
/// what to call the context in error messages.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Field and directive arguments inside operations.
    AllowVariables,
    /// `$var: Type = <default>`
    VariableDefaultValue,
    /// Arguments of directives on variable definitions.
    DirectiveArgument,
    /// A standalone constant value (`parse_const_value`).
    ConstValue,
}

impl ConstContext {
    fn allows_variables(&self) -> bool {
        matches!(self, ConstContext::AllowVariables)
    }

    fn description(&self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "values",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::DirectiveArgument => "directives on variable definitions",
            ConstContext::ConstValue => "constant values",
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL executable documents.
///
/// Generic over the token source; [`GraphQLParser::new`] lexes a
/// [`Source`]'s body with [`StrGraphQLTokenSource`].
///
/// Each `parse_*` entry point consumes the parser, so one parser handles
/// exactly one parse.
///
/// # Usage
///
/// ```
/// use graphql_web::{GraphQLParser, ParseOptions, Source};
/// use std::sync::Arc;
///
/// let source = Arc::new(Source::new("query Q { hello }"));
/// let doc = GraphQLParser::new(&source, ParseOptions::default())
///     .parse_document()
///     .unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Shared by every node's [`Location`] and by errors.
    source: Arc<Source>,

    options: ParseOptions,

    /// Current nesting depth of values, selection sets and list types.
    recursion_depth: usize,

    /// End position of the most recently consumed token. Node spans end
    /// here, and errors at end of input are anchored here.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over `source`'s body.
    pub fn new(source: &'src Arc<Source>, options: ParseOptions) -> Self {
        let token_source = StrGraphQLTokenSource::new(&source.body);
        Self::from_token_source(token_source, Arc::clone(source), options)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for values, selection sets and list types.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a parser from an arbitrary token source. `source` is used for
    /// node locations and error messages; token spans must refer to it.
    pub fn from_token_source(
        token_source: TTokenSource,
        source: Arc<Source>,
        options: ParseOptions,
    ) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            source,
            options,
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses a complete executable document: one or more operation and
    /// fragment definitions.
    pub fn parse_document(mut self) -> ParseResult<ast::Document> {
        log::debug!(
            "parsing document `{}` ({} bytes)",
            self.source.name,
            self.source.body.len(),
        );

        if self.token_stream.is_at_end() {
            let span = self.current_span();
            return Err(self
                .error(
                    "document must contain at least one definition",
                    span,
                    GraphQLParseErrorKind::InvalidEmptyConstruct {
                        construct: "document".to_string(),
                    },
                    GrammarProduction::Document,
                )
                .with_help("Add a query, mutation, subscription or fragment definition"));
        }

        let mut definitions = Vec::new();
        while !self.token_stream.is_at_end() {
            definitions.push(self.parse_definition()?);
        }

        let end = self.current_span().end_exclusive;
        let loc = self.location(GraphQLSourceSpan::new(SourcePosition::default(), end));
        log::trace!("parsed {} definition(s)", definitions.len());
        Ok(ast::Document { definitions, loc })
    }

    /// Parses a single value (variables allowed) that must span the whole
    /// input.
    pub fn parse_value(mut self) -> ParseResult<ast::Value> {
        log::debug!("parsing value from `{}`", self.source.name);
        let value = self.parse_value_literal(ConstContext::AllowVariables)?;
        self.expect_eof(GrammarProduction::Value)?;
        Ok(value)
    }

    /// Parses a single constant value (no variables anywhere) that must span
    /// the whole input.
    pub fn parse_const_value(mut self) -> ParseResult<ast::Value> {
        log::debug!("parsing constant value from `{}`", self.source.name);
        let value = self.parse_value_literal(ConstContext::ConstValue)?;
        self.expect_eof(GrammarProduction::Value)?;
        Ok(value)
    }

    /// Parses a type reference (e.g. `[String!]!`) that must span the whole
    /// input.
    pub fn parse_type(mut self) -> ParseResult<ast::Type> {
        log::debug!("parsing type from `{}`", self.source.name);
        let ty = self.parse_type_reference()?;
        self.expect_eof(GrammarProduction::NamedType)?;
        Ok(ty)
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> ParseResult<ast::Definition> {
        let start = self.current_start();
        let description = if self.peek_is_string() {
            Some(self.parse_description()?)
        } else {
            None
        };

        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            if description.is_some() {
                let span = self.current_span();
                return Err(self
                    .error(
                        "descriptions are not allowed on shorthand queries",
                        span,
                        GraphQLParseErrorKind::InvalidSyntax,
                        GrammarProduction::Document,
                    )
                    .with_help(
                        "Write the operation as `query { ... }` to give it a description",
                    ));
            }
            return self.parse_shorthand_query(start);
        }

        if self.peek_is_keyword("fragment") {
            let fragment = self.parse_fragment_definition(start, description)?;
            return Ok(ast::Definition::Fragment(Arc::new(fragment)));
        }

        let operation = match self.token_stream.peek().map(|token| &token.kind) {
            Some(GraphQLTokenKind::Name(name)) => OperationKind::from_keyword(name),
            _ => None,
        };
        if let Some(operation) = operation {
            let op = self.parse_operation_definition(start, description, operation)?;
            return Ok(ast::Definition::Operation(Arc::new(op)));
        }

        let is_type_system_keyword = matches!(
            self.token_stream.peek().map(|token| &token.kind),
            Some(GraphQLTokenKind::Name(name)) if TYPE_SYSTEM_KEYWORDS.contains(&name.as_ref())
        );
        let mut err = self.unexpected_token_error(
            &["`query`", "`mutation`", "`subscription`", "`fragment`", "`{`"],
            GrammarProduction::Document,
        );
        if is_type_system_keyword {
            err.add_note("type system definitions are not supported in executable documents");
        }
        Err(err)
    }

    /// `{ ... }` as a whole definition: an anonymous query.
    fn parse_shorthand_query(&mut self, start: SourcePosition) -> ParseResult<ast::Definition> {
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Definition::Operation(Arc::new(ast::OperationDefinition {
            description: None,
            operation: OperationKind::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
            loc: self.location_from(start),
        })))
    }

    fn parse_operation_definition(
        &mut self,
        start: SourcePosition,
        description: Option<Arc<ast::StringValue>>,
        operation: OperationKind,
    ) -> ParseResult<ast::OperationDefinition> {
        self.consume_token();

        let name = if self.peek_is(&GraphQLTokenKind::ParenOpen)
            || self.peek_is(&GraphQLTokenKind::At)
            || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
        {
            None
        } else {
            Some(self.expect_name(GrammarProduction::OperationDefinition)?)
        };

        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            description,
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.location_from(start),
        })
    }

    fn parse_fragment_definition(
        &mut self,
        start: SourcePosition,
        description: Option<Arc<ast::StringValue>>,
    ) -> ParseResult<ast::FragmentDefinition> {
        self.consume_token();

        if self.peek_is_keyword("on") {
            let span = self.current_span();
            return Err(self
                .error(
                    "fragment name cannot be `on`",
                    span,
                    GraphQLParseErrorKind::InvalidSyntax,
                    GrammarProduction::FragmentDefinition,
                )
                .with_help("Fragments are written as `fragment Name on Type { ... }`"));
        }
        let name = self.expect_name(GrammarProduction::FragmentDefinition)?;
        self.expect_keyword("on", GrammarProduction::FragmentDefinition)?;
        let type_condition = self.parse_named_type(GrammarProduction::FragmentDefinition)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            description,
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.location_from(start),
        })
    }

    /// A string literal in description position.
    fn parse_description(&mut self) -> ParseResult<Arc<ast::StringValue>> {
        let token = self.expect(
            &GraphQLTokenKind::StringValue("".into()),
            GrammarProduction::StringValue,
        )?;
        self.string_value_node(token)
    }

    // =========================================================================
    // Variable definitions
    // =========================================================================

    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<Arc<ast::VariableDefinition>>> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen, GrammarProduction::VariableDefinition)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            return Err(self.empty_construct_error(
                "variable definitions",
                open.span,
                GrammarProduction::VariableDefinition,
            ));
        }

        let mut definitions = Vec::new();
        loop {
            definitions.push(Arc::new(self.parse_variable_definition()?));
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }
        }
        self.expect(&GraphQLTokenKind::ParenClose, GrammarProduction::VariableDefinition)?;
        Ok(definitions)
    }

    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition> {
        let start = self.current_start();
        let description = if self.peek_is_string() {
            Some(self.parse_description()?)
        } else {
            None
        };

        let variable = self.parse_variable()?;
        self.expect(&GraphQLTokenKind::Colon, GrammarProduction::VariableDefinition)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.consume_token();
            Some(self.parse_value_literal(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;

        Ok(ast::VariableDefinition {
            description,
            variable,
            ty,
            default_value,
            directives,
            loc: self.location_from(start),
        })
    }

    /// `$name`
    fn parse_variable(&mut self) -> ParseResult<Arc<ast::Variable>> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar, GrammarProduction::Variable)?;
        let name = self.expect_name(GrammarProduction::Variable)?;
        Ok(Arc::new(ast::Variable {
            name,
            loc: self.location_from(dollar.span.start_inclusive),
        }))
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    /// Zero or more `@name(args)`.
    fn parse_directives(&mut self, context: ConstContext) -> ParseResult<Vec<Arc<ast::Directive>>> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            let at = self.expect(&GraphQLTokenKind::At, GrammarProduction::Directive)?;
            let name = self.expect_name(GrammarProduction::Directive)?;
            let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_arguments(context)?
            } else {
                Vec::new()
            };
            directives.push(Arc::new(ast::Directive {
                name,
                arguments,
                loc: self.location_from(at.span.start_inclusive),
            }));
        }
        Ok(directives)
    }

    /// `(name: value, ...)` with at least one argument.
    fn parse_arguments(&mut self, context: ConstContext) -> ParseResult<Vec<Arc<ast::Argument>>> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen, GrammarProduction::Argument)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            return Err(self.empty_construct_error(
                "argument list",
                open.span,
                GrammarProduction::Argument,
            ));
        }

        let mut arguments = Vec::new();
        loop {
            let start = self.current_start();
            let name = self.expect_name(GrammarProduction::Argument)?;
            self.expect(&GraphQLTokenKind::Colon, GrammarProduction::Argument)?;
            let value = self.parse_value_literal(context)?;
            arguments.push(Arc::new(ast::Argument {
                name,
                value,
                loc: self.location_from(start),
            }));
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }
        }
        self.expect(&GraphQLTokenKind::ParenClose, GrammarProduction::Argument)?;
        Ok(arguments)
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseResult<Arc<ast::SelectionSet>> {
        self.enter_recursion(GrammarProduction::SelectionSet)?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<Arc<ast::SelectionSet>> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen, GrammarProduction::SelectionSet)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            return Err(self.empty_construct_error(
                "selection set",
                open.span,
                GrammarProduction::SelectionSet,
            ));
        }

        let mut selections = Vec::new();
        loop {
            selections.push(self.parse_selection()?);
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                break;
            }
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose, GrammarProduction::SelectionSet)?;

        Ok(Arc::new(ast::SelectionSet {
            selections,
            loc: self.location_from(open.span.start_inclusive),
        }))
    }

    fn parse_selection(&mut self) -> ParseResult<ast::Selection> {
        if self.peek_is(&GraphQLTokenKind::Ellipsis) {
            self.parse_fragment_selection()
        } else {
            Ok(ast::Selection::Field(Arc::new(self.parse_field()?)))
        }
    }

    /// `...Name` (spread) or `... [on Type]` (inline fragment).
    fn parse_fragment_selection(&mut self) -> ParseResult<ast::Selection> {
        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis, GrammarProduction::FragmentSpread)?;
        let start = ellipsis.span.start_inclusive;

        if !self.peek_is_keyword("on") && self.peek_is_name() {
            let name = self.expect_name(GrammarProduction::FragmentSpread)?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(ast::Selection::FragmentSpread(Arc::new(ast::FragmentSpread {
                name,
                directives,
                loc: self.location_from(start),
            })));
        }

        let type_condition = if self.peek_is_keyword("on") {
            self.consume_token();
            Some(self.parse_named_type(GrammarProduction::InlineFragment)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(Arc::new(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.location_from(start),
        })))
    }

    /// `[alias:] name [(args)] [@dirs] [{ ... }]`
    fn parse_field(&mut self) -> ParseResult<ast::Field> {
        let start = self.current_start();
        let mut name = self.expect_name(GrammarProduction::Field)?;
        let mut alias = None;
        if self.peek_is(&GraphQLTokenKind::Colon) {
            self.consume_token();
            alias = Some(name);
            name = self.expect_name(GrammarProduction::Field)?;
        }

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(ConstContext::AllowVariables)?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.location_from(start),
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value_literal(&mut self, context: ConstContext) -> ParseResult<ast::Value> {
        self.enter_recursion(GrammarProduction::Value)?;
        let result = self.parse_value_literal_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_literal_impl(&mut self, context: ConstContext) -> ParseResult<ast::Value> {
        let Some(token) = self.token_stream.peek() else {
            return Err(self.unexpected_token_error(&["value"], GrammarProduction::Value));
        };

        match &token.kind {
            GraphQLTokenKind::Dollar => {
                if !context.allows_variables() {
                    let span = token.span;
                    return Err(self.error(
                        format!("variables are not allowed in {}", context.description()),
                        span,
                        GraphQLParseErrorKind::InvalidSyntax,
                        GrammarProduction::Variable,
                    ));
                }
                Ok(ast::Value::Variable(self.parse_variable()?))
            },
            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(context),
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(context),
            GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Name(_) => {
                let Some(token) = self.consume_token() else {
                    return Err(self.unexpected_token_error(&["value"], GrammarProduction::Value));
                };
                self.scalar_value(token)
            },
            _ => Err(self.unexpected_token_error(&["value"], GrammarProduction::Value)),
        }
    }

    /// Builds the value node for a consumed literal token.
    fn scalar_value(&self, token: GraphQLToken<'src>) -> ParseResult<ast::Value> {
        let loc = self.location(token.span);
        let value = match token.kind {
            GraphQLTokenKind::IntValue(text) => ast::Value::Int(Arc::new(ast::IntValue {
                value: text.into_owned(),
                loc,
            })),
            GraphQLTokenKind::FloatValue(text) => ast::Value::Float(Arc::new(ast::FloatValue {
                value: text.into_owned(),
                loc,
            })),
            GraphQLTokenKind::True => {
                ast::Value::Boolean(Arc::new(ast::BooleanValue { value: true, loc }))
            },
            GraphQLTokenKind::False => {
                ast::Value::Boolean(Arc::new(ast::BooleanValue { value: false, loc }))
            },
            GraphQLTokenKind::Null => ast::Value::Null(Arc::new(ast::NullValue { loc })),
            GraphQLTokenKind::Name(name) => ast::Value::Enum(Arc::new(ast::EnumValue {
                value: name.into_owned(),
                loc,
            })),
            GraphQLTokenKind::StringValue(_) => ast::Value::String(self.string_value_node(token)?),
            _ => {
                return Err(self.error(
                    "expected value",
                    token.span,
                    GraphQLParseErrorKind::InvalidSyntax,
                    GrammarProduction::Value,
                ));
            },
        };
        Ok(value)
    }

    /// Decodes a consumed `StringValue` token into a node.
    fn string_value_node(&self, token: GraphQLToken<'src>) -> ParseResult<Arc<ast::StringValue>> {
        let block = token.kind.is_block_string();
        match token.kind.parse_string_value() {
            Some(Ok(value)) => Ok(Arc::new(ast::StringValue {
                value,
                block,
                loc: self.location(token.span),
            })),
            Some(Err(err)) => Err(self.error(
                format!("invalid string literal: {err}"),
                token.span,
                GraphQLParseErrorKind::InvalidString(err),
                GrammarProduction::StringValue,
            )),
            None => Err(self.error(
                "expected string",
                token.span,
                GraphQLParseErrorKind::InvalidSyntax,
                GrammarProduction::StringValue,
            )),
        }
    }

    /// `[value, ...]`; may be empty.
    fn parse_list_value(&mut self, context: ConstContext) -> ParseResult<ast::Value> {
        let open = self.expect(&GraphQLTokenKind::SquareBracketOpen, GrammarProduction::ListValue)?;
        let mut values = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::SquareBracketClose) {
            if self.token_stream.is_at_end() {
                return Err(self.unexpected_token_error(&["`]`"], GrammarProduction::ListValue));
            }
            values.push(self.parse_value_literal(context)?);
        }
        self.expect(&GraphQLTokenKind::SquareBracketClose, GrammarProduction::ListValue)?;
        Ok(ast::Value::List(Arc::new(ast::ListValue {
            values,
            loc: self.location_from(open.span.start_inclusive),
        })))
    }

    /// `{name: value, ...}`; may be empty.
    fn parse_object_value(&mut self, context: ConstContext) -> ParseResult<ast::Value> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen, GrammarProduction::ObjectValue)?;
        let mut fields = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            if self.token_stream.is_at_end() {
                return Err(self.unexpected_token_error(&["`}`"], GrammarProduction::ObjectValue));
            }
            let start = self.current_start();
            let name = self.expect_name(GrammarProduction::ObjectField)?;
            self.expect(&GraphQLTokenKind::Colon, GrammarProduction::ObjectField)?;
            let value = self.parse_value_literal(context)?;
            fields.push(Arc::new(ast::ObjectField {
                name,
                value,
                loc: self.location_from(start),
            }));
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose, GrammarProduction::ObjectValue)?;
        Ok(ast::Value::Object(Arc::new(ast::ObjectValue {
            fields,
            loc: self.location_from(open.span.start_inclusive),
        })))
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses `Name`, `[Type]` and `Type!` without recursion: leading `[`s
    /// are counted, the named type is read, then wrappers are applied from
    /// the inside out.
    fn parse_type_reference(&mut self) -> ParseResult<ast::Type> {
        let mut open_brackets: Vec<SourcePosition> = Vec::new();
        while self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            if self.recursion_depth + open_brackets.len() >= Self::MAX_RECURSION_DEPTH {
                return Err(self.nesting_too_deep_error(GrammarProduction::ListType));
            }
            let open = self.expect(&GraphQLTokenKind::SquareBracketOpen, GrammarProduction::ListType)?;
            open_brackets.push(open.span.start_inclusive);
        }

        let named = self.parse_named_type(GrammarProduction::NamedType)?;
        let mut start = self.named_type_start(&named);
        let mut nullable = ast::NullableType::Named(named);

        loop {
            let ty = if self.peek_is(&GraphQLTokenKind::Bang) {
                self.consume_token();
                ast::Type::NonNull(Arc::new(ast::NonNullType {
                    ty: nullable,
                    loc: self.location_from(start),
                }))
            } else {
                ast::Type::from(nullable)
            };

            let Some(bracket_start) = open_brackets.pop() else {
                return Ok(ty);
            };
            self.expect(&GraphQLTokenKind::SquareBracketClose, GrammarProduction::ListType)?;
            start = bracket_start;
            nullable = ast::NullableType::List(Arc::new(ast::ListType {
                ty,
                loc: self.location_from(start),
            }));
        }
    }

    fn parse_named_type(&mut self, production: GrammarProduction) -> ParseResult<Arc<ast::NamedType>> {
        let name = self.expect_name(production)?;
        let loc = name.loc.clone();
        Ok(Arc::new(ast::NamedType { name, loc }))
    }

    /// Start position of an already-parsed named type, falling back to the
    /// last consumed position when locations are disabled.
    fn named_type_start(&self, named: &ast::NamedType) -> SourcePosition {
        named
            .loc
            .as_ref()
            .map(|loc| loc.span.start_inclusive)
            .or(self.last_end_position)
            .unwrap_or_default()
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Consumes the next token if it is of `expected_kind` (payloads are not
    /// compared).
    fn expect(
        &mut self,
        expected_kind: &GraphQLTokenKind,
        production: GrammarProduction,
    ) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(expected_kind) {
            if let Some(token) = self.consume_token() {
                return Ok(token);
            }
        }
        let expected = format!("`{}`", Self::token_kind_display(expected_kind));
        Err(self.unexpected_token_error(&[expected.as_str()], production))
    }

    /// Consumes a name token and builds a [`ast::Name`].
    ///
    /// `true`, `false` and `null` are valid names outside value position;
    /// the lexer gives them their own token kinds, so they are accepted here
    /// too.
    fn expect_name(&mut self, production: GrammarProduction) -> ParseResult<Arc<ast::Name>> {
        if !self.peek_is_name() {
            return Err(self.unexpected_token_error(&["name"], production));
        }
        let Some(token) = self.consume_token() else {
            return Err(self.unexpected_token_error(&["name"], production));
        };
        let value = match token.kind {
            GraphQLTokenKind::Name(name) => name.into_owned(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            _ => return Err(self.unexpected_token_error(&["name"], production)),
        };
        Ok(Arc::new(ast::Name {
            value,
            loc: self.location(token.span),
        }))
    }

    /// Consumes a specific keyword (a `Name` token with specific text).
    fn expect_keyword(
        &mut self,
        keyword: &str,
        production: GrammarProduction,
    ) -> ParseResult<GraphQLSourceSpan> {
        if self.peek_is_keyword(keyword) {
            if let Some(token) = self.consume_token() {
                return Ok(token.span);
            }
        }
        let expected = format!("`{keyword}`");
        Err(self.unexpected_token_error(&[expected.as_str()], production))
    }

    /// Fails unless all input has been consumed.
    fn expect_eof(&mut self, production: GrammarProduction) -> ParseResult<()> {
        if self.token_stream.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected_token_error(&["end of input"], production))
        }
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        matches!(
            self.token_stream.peek().map(|token| &token.kind),
            Some(GraphQLTokenKind::Name(name)) if name.as_ref() == keyword
        )
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        match self.token_stream.peek() {
            Some(token) => Self::token_kinds_match(&token.kind, kind),
            None => false,
        }
    }

    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.token_stream.peek().map(|token| &token.kind),
            Some(
                GraphQLTokenKind::Name(_)
                    | GraphQLTokenKind::True
                    | GraphQLTokenKind::False
                    | GraphQLTokenKind::Null
            )
        )
    }

    fn peek_is_string(&mut self) -> bool {
        matches!(
            self.token_stream.peek().map(|token| &token.kind),
            Some(GraphQLTokenKind::StringValue(_))
        )
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    /// Consumes the next token and records its end position.
    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive);
        }
        token
    }

    /// Span of the next token, or a zero-width span after the last consumed
    /// token once input is exhausted.
    fn current_span(&mut self) -> GraphQLSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span,
            None => self.eof_span(),
        }
    }

    fn current_start(&mut self) -> SourcePosition {
        self.current_span().start_inclusive
    }

    fn eof_span(&self) -> GraphQLSourceSpan {
        GraphQLSourceSpan::empty_at(self.last_end_position.unwrap_or_default())
    }

    /// Location spanning `span`, unless locations are disabled.
    fn location(&self, span: GraphQLSourceSpan) -> Option<Location> {
        if self.options.no_location {
            None
        } else {
            Some(Location::new(span, Arc::clone(&self.source)))
        }
    }

    /// Location from `start` to the end of the last consumed token.
    fn location_from(&self, start: SourcePosition) -> Option<Location> {
        let end = self.last_end_position.unwrap_or(start);
        self.location(GraphQLSourceSpan::new(start, end))
    }

    /// Returns a human-readable display string for a token kind.
    fn token_kind_display(kind: &GraphQLTokenKind) -> String {
        match kind {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s) => s.to_string(),
            GraphQLTokenKind::StringValue(_) => "string".to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => {
                format!("tokenization error: {message}")
            },
            punctuator => punctuator.as_punctuator_str().unwrap_or_default().to_string(),
        }
    }

    /// Compares token kinds, ignoring payloads.
    ///
    /// The match on `actual` is exhaustive so that a new token kind cannot
    /// be added without deciding how it compares.
    fn token_kinds_match(actual: &GraphQLTokenKind, expected: &GraphQLTokenKind) -> bool {
        match actual {
            GraphQLTokenKind::Name(_) => matches!(expected, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => matches!(expected, GraphQLTokenKind::IntValue(_)),
            GraphQLTokenKind::FloatValue(_) => matches!(expected, GraphQLTokenKind::FloatValue(_)),
            GraphQLTokenKind::StringValue(_) => {
                matches!(expected, GraphQLTokenKind::StringValue(_))
            },
            GraphQLTokenKind::Error { .. } => matches!(expected, GraphQLTokenKind::Error { .. }),
            GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof => actual == expected,
        }
    }

    fn enter_recursion(&mut self, production: GrammarProduction) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            return Err(self.nesting_too_deep_error(production));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Error construction
    // =========================================================================

    fn error(
        &self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        production: GrammarProduction,
    ) -> GraphQLParseError {
        GraphQLParseError::new(message, span, kind, production, Arc::clone(&self.source))
    }

    /// Builds the error for "the next token is not what `production`
    /// needs". `expected` entries are display strings (e.g. "`:`",
    /// "name"). A lexer error token produces the lexer's own message.
    fn unexpected_token_error(
        &mut self,
        expected: &[&str],
        production: GrammarProduction,
    ) -> GraphQLParseError {
        let expected_display = match expected {
            [single] => single.to_string(),
            many => format!("one of {}", many.join(", ")),
        };
        let expected_list: Vec<String> = expected
            .iter()
            .map(|item| item.trim_matches('`').to_string())
            .collect();

        let source = Arc::clone(&self.source);
        let Some(token) = self.token_stream.peek() else {
            let span = self.eof_span();
            return self.error(
                format!("expected {expected_display}, found end of input"),
                span,
                GraphQLParseErrorKind::UnexpectedEof { expected: expected_list },
                production,
            );
        };
        let span = token.span;

        match &token.kind {
            GraphQLTokenKind::Error { message, error_notes } => GraphQLParseError::from_lexer_error(
                message.clone(),
                span,
                error_notes.clone(),
                production,
                source,
            ),
            GraphQLTokenKind::Eof => self.error(
                format!("expected {expected_display}, found end of input"),
                span,
                GraphQLParseErrorKind::UnexpectedEof { expected: expected_list },
                production,
            ),
            kind => {
                let found = Self::token_kind_display(kind);
                self.error(
                    format!("expected {expected_display}, found `{found}`"),
                    span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: expected_list,
                        found,
                    },
                    production,
                )
            },
        }
    }

    /// `{}`, `()` and similar: `open` is the opening delimiter's span.
    fn empty_construct_error(
        &mut self,
        construct: &str,
        open: GraphQLSourceSpan,
        production: GrammarProduction,
    ) -> GraphQLParseError {
        let close = self.current_span();
        self.error(
            format!("{construct} cannot be empty"),
            GraphQLSourceSpan::new(open.start_inclusive, close.end_exclusive),
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
            production,
        )
        .with_help(format!("Remove the empty delimiters or add at least one item to the {construct}"))
    }

    fn nesting_too_deep_error(&mut self, production: GrammarProduction) -> GraphQLParseError {
        let span = self.current_span();
        self.error(
            "maximum nesting depth exceeded",
            span,
            GraphQLParseErrorKind::NestingTooDeep,
            production,
        )
        .with_help(format!(
            "Values, selection sets and list types may nest at most {} levels deep",
            Self::MAX_RECURSION_DEPTH,
        ))
    }
}
