//! Abstract Syntax Tree definitions
//!
//! One closed enum per syntactic category, plus the auxiliary list and body structures that
//! statements and expressions are built from. The grammar being modelled:
//!
//! ```text
//! chunk     ::= {stat}
//! stat      ::= varlist '=' explist | functioncall | do chunk end | while exp do chunk end |
//!               repeat chunk until exp | if exp then chunk {elseif exp then chunk} [else chunk] end |
//!               for Name '=' exp ',' exp [',' exp] do chunk end | for namelist in explist do chunk end |
//!               function funcname funcbody | local function Name funcbody |
//!               local namelist ['=' explist] | return [explist] | break
//! funcname  ::= Name {'.' Name} [':' Name]
//! funcbody  ::= '(' [parlist] ')' chunk end
//! args      ::= '(' [explist] ')' | tableconstructor | String
//! field     ::= '[' exp ']' '=' exp | Name '=' exp | exp
//! ```

use crate::lang::operators::{BinaryOperator, UnaryOperator};

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub name: String,
}

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ============================================================================
// Blocks and statements
// ============================================================================

/// A block body: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chunk {
    pub body: Vec<Statement>,
}

impl Chunk {
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Function(FunctionStatement),
    LocalFunction(LocalFunctionStatement),
    If(IfStatement),
    NumericFor(NumericForStatement),
    GenericFor(GenericForStatement),
    Call(FunctionCall),
    Return(ExpressionList),
    Local(LocalStatement),
    Assignment(AssignmentStatement),
    Do(Chunk),
    Repeat(RepeatStatement),
    While(WhileStatement),
    Break,
}

impl Statement {
    /// Stable tag name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Function(_) => "FunctionStatement",
            Statement::LocalFunction(_) => "LocalFunctionStatement",
            Statement::If(_) => "IfStatement",
            Statement::NumericFor(_) => "NumericForStatement",
            Statement::GenericFor(_) => "GenericForStatement",
            Statement::Call(_) => "CallStatement",
            Statement::Return(_) => "ReturnStatement",
            Statement::Local(_) => "LocalStatement",
            Statement::Assignment(_) => "AssignmentStatement",
            Statement::Do(_) => "DoStatement",
            Statement::Repeat(_) => "RepeatStatement",
            Statement::While(_) => "WhileStatement",
            Statement::Break => "BreakStatement",
        }
    }
}

/// `function a.b:c(...) ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStatement {
    pub name: FuncName,
    pub body: FuncBody,
}

/// `local function f(...) ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFunctionStatement {
    pub name: Name,
    pub body: FuncBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub body: Chunk,
    pub else_ifs: Vec<ElseIfClause>,
    pub else_body: Option<Chunk>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfClause {
    pub condition: Expression,
    pub body: Chunk,
}

/// `for name = start, end[, step] do ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct NumericForStatement {
    pub var_name: Name,
    pub start: Expression,
    pub end: Expression,
    pub step: Option<Expression>,
    pub body: Chunk,
}

/// `for a, b in explist do ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct GenericForStatement {
    pub names: NameList,
    pub expressions: ExpressionList,
    pub body: Chunk,
}

/// `local a, b [= explist]`
///
/// `expressions` is `None` for a bare declaration. The two lists need not be the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStatement {
    pub names: NameList,
    pub expressions: Option<ExpressionList>,
}

/// `a, b.c, d[e] = explist`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub variables: VariableList,
    pub expressions: ExpressionList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStatement {
    pub body: Chunk,
    pub condition: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Chunk,
}

// ============================================================================
// Functions
// ============================================================================

/// Parameter list plus body, shared by declarations and function literals.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncBody {
    pub parameters: ParameterList,
    pub body: Chunk,
}

impl FuncBody {
    pub fn new(parameters: ParameterList, body: Chunk) -> Self {
        Self { parameters, body }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterList {
    pub names: NameList,
    pub vararg: bool,
}

impl ParameterList {
    pub fn new(names: NameList, vararg: bool) -> Self {
        Self { names, vararg }
    }
}

/// `base.indexer.indexer:method`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncName {
    pub name: Name,
    pub indexers: Vec<Name>,
    pub method: Option<Name>,
}

impl FuncName {
    pub fn new(name: Name, indexers: Vec<Name>, method: Option<Name>) -> Self {
        Self { name, indexers, method }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Nil,
    True,
    False,
    Number(NumberLiteral),
    String(StringLiteral),
    Vararg,
    Unary(UnaryExpression),
    Binary(BinaryExpression),
    Function(FuncBody),
    Parenthesized(Box<Expression>),
    Table(TableConstructor),
    Prefix(Box<PrefixExpression>),
}

impl Expression {
    pub fn number(raw: impl Into<String>, value: f64) -> Self {
        Expression::Number(NumberLiteral {
            raw: raw.into(),
            value,
        })
    }

    /// A string literal whose raw form is the double-quoted value.
    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(StringLiteral::new(value))
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn parenthesized(inner: Expression) -> Self {
        Expression::Parenthesized(Box::new(inner))
    }

    /// A bare variable reference.
    pub fn name(name: impl Into<String>) -> Self {
        Expression::Prefix(Box::new(PrefixExpression::name(name)))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Nil => "NilExpression",
            Expression::True => "TrueExpression",
            Expression::False => "FalseExpression",
            Expression::Number(_) => "NumberExpression",
            Expression::String(_) => "StringExpression",
            Expression::Vararg => "VarargExpression",
            Expression::Unary(_) => "UnaryOperationExpression",
            Expression::Binary(_) => "BinaryOperationExpression",
            Expression::Function(_) => "FunctionExpression",
            Expression::Parenthesized(_) => "ParenthesizedExpression",
            Expression::Table(_) => "TableConstructorExpression",
            Expression::Prefix(_) => "PrefixExpression",
        }
    }
}

impl From<PrefixExpression> for Expression {
    fn from(prefix: PrefixExpression) -> Self {
        Expression::Prefix(Box::new(prefix))
    }
}

/// A numeric literal; `raw` is the text as written (`0x1F`, `1e10`, `3.`).
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub raw: String,
    pub value: f64,
}

/// A string literal; `value` is the decoded content, `raw` the source spelling including quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub raw: String,
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            raw: format!("{value:?}"),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableConstructor {
    pub fields: Vec<Field>,
}

impl TableConstructor {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// `value`
    Positional(Expression),
    /// `name = value`
    Named { name: Name, value: Expression },
    /// `[key] = value`
    Keyed { key: Expression, value: Expression },
}

impl Field {
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Positional(_) => "FieldArrayKey",
            Field::Named { .. } => "FieldNameKey",
            Field::Keyed { .. } => "FieldExpressionKey",
        }
    }
}

// ============================================================================
// Prefix expressions, variables and calls
// ============================================================================

/// Anything that can be called, indexed or have a member taken.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefixExpression {
    Variable(Variable),
    Call(FunctionCall),
    Parenthesized(Box<Expression>),
}

impl PrefixExpression {
    pub fn name(name: impl Into<String>) -> Self {
        PrefixExpression::Variable(Variable::Name(Name::new(name)))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PrefixExpression::Variable(variable) => variable.kind(),
            PrefixExpression::Call(call) => call.kind(),
            PrefixExpression::Parenthesized(_) => "ParenthesizedPrefixExpression",
        }
    }
}

/// Assignable places.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Name(Name),
    /// `base[index]`
    Index {
        base: Box<PrefixExpression>,
        index: Box<Expression>,
    },
    /// `base.member`
    Member { base: Box<PrefixExpression>, member: Name },
}

impl Variable {
    pub fn name(name: impl Into<String>) -> Self {
        Variable::Name(Name::new(name))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Variable::Name(_) => "NameVariable",
            Variable::Index { .. } => "IndexedVariable",
            Variable::Member { .. } => "MemberVariable",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionCall {
    /// `f(args)`
    Normal {
        function: Box<PrefixExpression>,
        arguments: Arguments,
    },
    /// `obj:name(args)`
    Method {
        object: Box<PrefixExpression>,
        name: Name,
        arguments: Arguments,
    },
}

impl FunctionCall {
    pub fn normal(function: PrefixExpression, arguments: Arguments) -> Self {
        FunctionCall::Normal {
            function: Box::new(function),
            arguments,
        }
    }

    pub fn method(object: PrefixExpression, name: Name, arguments: Arguments) -> Self {
        FunctionCall::Method {
            object: Box::new(object),
            name,
            arguments,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FunctionCall::Normal { .. } => "NormalFunctionCall",
            FunctionCall::Method { .. } => "MethodFunctionCall",
        }
    }
}

/// Call argument forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Arguments {
    /// `(a, b)`
    ExpressionList(ExpressionList),
    /// `{...}` juxtaposed
    Table(TableConstructor),
    /// `"..."` juxtaposed
    String(StringLiteral),
}

impl Arguments {
    pub fn kind(&self) -> &'static str {
        match self {
            Arguments::ExpressionList(_) => "ExpressionListArguments",
            Arguments::Table(_) => "TableConstructorArguments",
            Arguments::String(_) => "StringArguments",
        }
    }
}

// ============================================================================
// Lists
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameList {
    pub names: Vec<Name>,
}

impl NameList {
    pub fn new(names: Vec<Name>) -> Self {
        Self { names }
    }
}

impl From<Vec<Name>> for NameList {
    fn from(names: Vec<Name>) -> Self {
        Self::new(names)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpressionList {
    pub expressions: Vec<Expression>,
}

impl ExpressionList {
    pub fn new(expressions: Vec<Expression>) -> Self {
        Self { expressions }
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl From<Vec<Expression>> for ExpressionList {
    fn from(expressions: Vec<Expression>) -> Self {
        Self::new(expressions)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableList {
    pub variables: Vec<Variable>,
}

impl VariableList {
    pub fn new(variables: Vec<Variable>) -> Self {
        Self { variables }
    }
}

impl From<Vec<Variable>> for VariableList {
    fn from(variables: Vec<Variable>) -> Self {
        Self::new(variables)
    }
}

// ============================================================================
// Borrowed root view
// ============================================================================

/// A borrowed reference to any node, used as the root of a generation run.
///
/// ## Notes
/// - New node categories may be added here (long-form strings, for instance); consumers must
///   handle unknown cases.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Node<'a> {
    Chunk(&'a Chunk),
    Statement(&'a Statement),
    Expression(&'a Expression),
    PrefixExpression(&'a PrefixExpression),
    Variable(&'a Variable),
    FunctionCall(&'a FunctionCall),
    Arguments(&'a Arguments),
    Field(&'a Field),
    TableConstructor(&'a TableConstructor),
    FuncBody(&'a FuncBody),
    FuncName(&'a FuncName),
    ParameterList(&'a ParameterList),
    ElseIfClause(&'a ElseIfClause),
    NameList(&'a NameList),
    ExpressionList(&'a ExpressionList),
    VariableList(&'a VariableList),
    Name(&'a Name),
}

impl Node<'_> {
    /// Stable tag name of the referenced node.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Chunk(_) => "Chunk",
            Node::Statement(statement) => statement.kind(),
            Node::Expression(expression) => expression.kind(),
            Node::PrefixExpression(prefix) => prefix.kind(),
            Node::Variable(variable) => variable.kind(),
            Node::FunctionCall(call) => call.kind(),
            Node::Arguments(arguments) => arguments.kind(),
            Node::Field(field) => field.kind(),
            Node::TableConstructor(_) => "TableConstructor",
            Node::FuncBody(_) => "FuncBody",
            Node::FuncName(_) => "FunctionName",
            Node::ParameterList(_) => "ParameterList",
            Node::ElseIfClause(_) => "ElseIfClause",
            Node::NameList(_) => "NameList",
            Node::ExpressionList(_) => "ExpressionList",
            Node::VariableList(_) => "VariableList",
            Node::Name(_) => "Name",
        }
    }
}

macro_rules! node_from {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Node::$ty(node)
                }
            }
        )*
    };
}

node_from!(
    Chunk,
    Statement,
    Expression,
    PrefixExpression,
    Variable,
    FunctionCall,
    Arguments,
    Field,
    TableConstructor,
    FuncBody,
    FuncName,
    ParameterList,
    ElseIfClause,
    NameList,
    ExpressionList,
    VariableList,
    Name,
);
