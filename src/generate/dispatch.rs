//! Core generation rules
//!
//! Every syntactic category has one rule that turns a node into an ordered list of [`Step`]s. Child
//! nodes are not rendered in place: they are left as [`Step::Node`] and expanded when the run
//! reaches them, so a run only ever holds the pending siblings of the current path.

use std::borrow::Cow;

use luagen_syntax::ast::*;
use luagen_syntax::lang::keywords;
use luagen_syntax::lang::operators::UnaryOperator;

use super::errors::GenerateError;

/// One unit of pending work in a run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Step<'a> {
    /// Text emitted as-is
    Text(Cow<'a, str>),
    /// Line break followed by the current indentation
    Line,
    Indent,
    Dedent,
    /// A node that has not been expanded yet
    Node(Node<'a>),
}

/// Expand a single node one level deep.
pub(crate) fn expand(node: Node<'_>) -> Result<Vec<Step<'_>>, GenerateError> {
    let mut out = Expander::default();
    match node {
        Node::Chunk(chunk) => out.block(chunk),
        Node::Statement(statement) => out.statement(statement)?,
        Node::Expression(expression) => out.expression(expression)?,
        Node::PrefixExpression(prefix) => out.prefix_expression(prefix),
        Node::Variable(variable) => out.variable(variable)?,
        Node::FunctionCall(call) => out.function_call(call)?,
        Node::Arguments(arguments) => out.arguments(arguments),
        Node::Field(field) => out.field(field)?,
        Node::TableConstructor(table) => out.table(table),
        Node::FuncBody(body) => {
            out.node(&body.parameters);
            out.node(&body.body);
        }
        Node::FuncName(name) => out.func_name(name)?,
        Node::ParameterList(parameters) => out.parameter_list(parameters)?,
        Node::ElseIfClause(clause) => out.else_if(clause),
        Node::NameList(names) => out.name_list(names)?,
        Node::ExpressionList(list) => out.separated(&list.expressions),
        Node::VariableList(list) => out.separated(&list.variables),
        Node::Name(name) => out.name(name)?,
        other => {
            return Err(GenerateError::unsupported(
                other.kind(),
                "no generation rule for this node kind",
            ));
        }
    }
    Ok(out.steps)
}

/// Steps for a chunk given as the root of a run.
///
/// Same as a nested block, but the block sits one level below the outermost indentation, so its
/// statements land at depth zero: every statement still starts with a line break.
pub(crate) fn root_block(chunk: &Chunk) -> Vec<Step<'_>> {
    let mut out = Expander::default();
    out.block(chunk);
    let mut steps = out.steps;
    steps.retain(|step| !matches!(step, Step::Indent | Step::Dedent));
    steps
}

/// Escape a decoded string value for a double-quoted literal.
///
/// Only `\`, `"`, carriage return and line feed are escaped, each by a preceding backslash.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '\r' | '\n') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Whether the rendering of `expression` begins with `-`.
fn starts_with_minus(expression: &Expression) -> bool {
    match expression {
        Expression::Unary(unary) => unary.operator == UnaryOperator::Negate,
        Expression::Binary(binary) => starts_with_minus(&binary.left),
        Expression::Number(number) => number.raw.starts_with('-'),
        _ => false,
    }
}

#[derive(Default)]
struct Expander<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Expander<'a> {
    fn write(&mut self, text: &'a str) {
        self.steps.push(Step::Text(Cow::Borrowed(text)));
    }

    fn line(&mut self) {
        self.steps.push(Step::Line);
    }

    fn node(&mut self, node: impl Into<Node<'a>>) {
        self.steps.push(Step::Node(node.into()));
    }

    fn separated<T>(&mut self, items: &'a [T])
    where
        &'a T: Into<Node<'a>>,
    {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.node(item);
        }
    }

    fn name(&mut self, name: &'a Name) -> Result<(), GenerateError> {
        if !keywords::is_name(&name.name) {
            return Err(GenerateError::unsupported(
                "Name",
                format!("`{}` is not a valid name", name.name),
            ));
        }
        self.write(&name.name);
        Ok(())
    }

    fn string(&mut self, literal: &'a StringLiteral) {
        self.write("\"");
        self.steps.push(Step::Text(escape_string(&literal.value)));
        self.write("\"");
    }

    /// A nested block: one indented line per statement. Frame keywords belong to the caller.
    fn block(&mut self, chunk: &'a Chunk) {
        self.steps.push(Step::Indent);
        for statement in &chunk.body {
            self.line();
            self.node(statement);
        }
        self.steps.push(Step::Dedent);
    }

    /// `<body>` then `end` on its own line.
    fn body_end(&mut self, body: &'a Chunk) {
        self.node(body);
        self.line();
        self.write("end");
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self, statement: &'a Statement) -> Result<(), GenerateError> {
        match statement {
            Statement::Function(function) => {
                self.write("function ");
                self.node(&function.name);
                self.node(&function.body);
                self.line();
                self.write("end");
            }
            Statement::LocalFunction(function) => {
                self.write("local function ");
                self.name(&function.name)?;
                self.node(&function.body);
                self.line();
                self.write("end");
            }
            Statement::If(if_stmt) => {
                self.write("if ");
                self.node(&if_stmt.condition);
                self.write(" then");
                self.node(&if_stmt.body);
                for clause in &if_stmt.else_ifs {
                    self.line();
                    self.node(clause);
                }
                if let Some(else_body) = &if_stmt.else_body {
                    self.line();
                    self.write("else");
                    self.node(else_body);
                }
                self.line();
                self.write("end");
            }
            Statement::NumericFor(for_stmt) => {
                self.write("for ");
                self.name(&for_stmt.var_name)?;
                self.write(" = ");
                self.node(&for_stmt.start);
                self.write(", ");
                self.node(&for_stmt.end);
                if let Some(step) = &for_stmt.step {
                    self.write(", ");
                    self.node(step);
                }
                self.write(" do");
                self.body_end(&for_stmt.body);
            }
            Statement::GenericFor(for_stmt) => {
                if for_stmt.names.names.is_empty() {
                    return Err(GenerateError::unsupported(statement.kind(), "loop declares no names"));
                }
                if for_stmt.expressions.is_empty() {
                    return Err(GenerateError::unsupported(statement.kind(), "loop has no iterator expressions"));
                }
                self.write("for ");
                self.node(&for_stmt.names);
                self.write(" in ");
                self.node(&for_stmt.expressions);
                self.write(" do");
                self.body_end(&for_stmt.body);
            }
            Statement::Call(call) => self.node(call),
            Statement::Return(expressions) => {
                self.write("return");
                if !expressions.is_empty() {
                    self.write(" ");
                    self.node(expressions);
                }
            }
            Statement::Local(local) => {
                if local.names.names.is_empty() {
                    return Err(GenerateError::unsupported(statement.kind(), "declaration has no names"));
                }
                self.write("local ");
                self.node(&local.names);
                // Only the expressions actually present are rendered; `local a, b = 1` stays as is.
                if let Some(expressions) = local.expressions.as_ref().filter(|list| !list.is_empty()) {
                    self.write(" = ");
                    self.node(expressions);
                }
            }
            Statement::Assignment(assignment) => {
                if assignment.variables.variables.is_empty() {
                    return Err(GenerateError::unsupported(statement.kind(), "assignment has no targets"));
                }
                if assignment.expressions.is_empty() {
                    return Err(GenerateError::unsupported(statement.kind(), "assignment has no values"));
                }
                self.node(&assignment.variables);
                self.write(" = ");
                self.node(&assignment.expressions);
            }
            Statement::Do(body) => {
                self.write("do");
                self.body_end(body);
            }
            Statement::Repeat(repeat) => {
                self.write("repeat");
                self.node(&repeat.body);
                self.line();
                self.write("until ");
                self.node(&repeat.condition);
            }
            Statement::While(while_stmt) => {
                self.write("while ");
                self.node(&while_stmt.condition);
                self.write(" do");
                self.body_end(&while_stmt.body);
            }
            Statement::Break => self.write("break"),
        }
        Ok(())
    }

    fn else_if(&mut self, clause: &'a ElseIfClause) {
        self.write("elseif ");
        self.node(&clause.condition);
        self.write(" then");
        self.node(&clause.body);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self, expression: &'a Expression) -> Result<(), GenerateError> {
        match expression {
            Expression::Nil => self.write("nil"),
            Expression::True => self.write("true"),
            Expression::False => self.write("false"),
            Expression::Number(number) => {
                if number.raw.is_empty() {
                    return Err(GenerateError::unsupported(expression.kind(), "number has no raw text"));
                }
                self.write(&number.raw);
            }
            Expression::String(literal) => self.string(literal),
            Expression::Vararg => self.write("..."),
            Expression::Unary(unary) => {
                self.write(unary.operator.as_str());
                if unary.operator.is_word()
                    || (unary.operator == UnaryOperator::Negate && starts_with_minus(&unary.operand))
                {
                    self.write(" ");
                }
                self.node(&*unary.operand);
            }
            Expression::Binary(binary) => {
                self.node(&*binary.left);
                self.write(" ");
                self.write(binary.operator.as_str());
                self.write(" ");
                self.node(&*binary.right);
            }
            Expression::Function(body) => {
                self.write("function");
                self.node(body);
                self.line();
                self.write("end");
            }
            Expression::Parenthesized(inner) => {
                self.write("(");
                self.node(&**inner);
                self.write(")");
            }
            Expression::Table(table) => self.table(table),
            Expression::Prefix(prefix) => self.node(&**prefix),
        }
        Ok(())
    }

    fn table(&mut self, table: &'a TableConstructor) {
        if table.fields.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.steps.push(Step::Indent);
        for field in &table.fields {
            self.line();
            self.node(field);
            self.write(",");
        }
        self.steps.push(Step::Dedent);
        self.line();
        self.write("}");
    }

    fn field(&mut self, field: &'a Field) -> Result<(), GenerateError> {
        match field {
            Field::Positional(value) => self.node(value),
            Field::Named { name, value } => {
                self.name(name)?;
                self.write(" = ");
                self.node(value);
            }
            Field::Keyed { key, value } => {
                self.write("[");
                self.node(key);
                self.write("] = ");
                self.node(value);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Prefix expressions, variables and calls
    // ========================================================================

    fn prefix_expression(&mut self, prefix: &'a PrefixExpression) {
        match prefix {
            PrefixExpression::Variable(variable) => self.node(variable),
            PrefixExpression::Call(call) => self.node(call),
            PrefixExpression::Parenthesized(inner) => {
                self.write("(");
                self.node(&**inner);
                self.write(")");
            }
        }
    }

    fn variable(&mut self, variable: &'a Variable) -> Result<(), GenerateError> {
        match variable {
            Variable::Name(name) => self.name(name)?,
            Variable::Index { base, index } => {
                self.node(&**base);
                self.write("[");
                self.node(&**index);
                self.write("]");
            }
            Variable::Member { base, member } => {
                self.node(&**base);
                self.write(".");
                self.name(member)?;
            }
        }
        Ok(())
    }

    fn function_call(&mut self, call: &'a FunctionCall) -> Result<(), GenerateError> {
        match call {
            FunctionCall::Normal { function, arguments } => {
                self.node(&**function);
                self.node(arguments);
            }
            FunctionCall::Method {
                object,
                name,
                arguments,
            } => {
                self.node(&**object);
                self.write(":");
                self.name(name)?;
                self.node(arguments);
            }
        }
        Ok(())
    }

    fn arguments(&mut self, arguments: &'a Arguments) {
        match arguments {
            Arguments::ExpressionList(list) => {
                self.write("(");
                self.node(list);
                self.write(")");
            }
            Arguments::Table(table) => self.table(table),
            Arguments::String(literal) => self.string(literal),
        }
    }

    // ========================================================================
    // Functions and lists
    // ========================================================================

    fn func_name(&mut self, func_name: &'a FuncName) -> Result<(), GenerateError> {
        self.name(&func_name.name)?;
        for indexer in &func_name.indexers {
            self.write(".");
            self.name(indexer)?;
        }
        if let Some(method) = &func_name.method {
            self.write(":");
            self.name(method)?;
        }
        Ok(())
    }

    fn parameter_list(&mut self, parameters: &'a ParameterList) -> Result<(), GenerateError> {
        self.write("(");
        self.name_list(&parameters.names)?;
        if parameters.vararg {
            if parameters.names.names.is_empty() {
                self.write("...");
            } else {
                self.write(", ...");
            }
        }
        self.write(")");
        Ok(())
    }

    fn name_list(&mut self, names: &'a NameList) -> Result<(), GenerateError> {
        for (i, name) in names.names.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.name(name)?;
        }
        Ok(())
    }
}
