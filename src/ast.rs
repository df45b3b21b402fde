use std::fmt;

/// A 1-based location in the source text.
///
/// Both the lexer and the parser report positions this way; `column` counts
/// characters from the start of the line, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An arithmetic operator: `+`, `-`, `*` or `/`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl ArithmeticOperator {
    /// Binding strength of the operator; higher binds tighter.
    ///
    /// ## Example
    /// ```
    /// use brisk::ast::ArithmeticOperator;
    ///
    /// assert!(ArithmeticOperator::Mul.precedence() > ArithmeticOperator::Sub.precedence());
    /// assert_eq!(ArithmeticOperator::Div.precedence(), ArithmeticOperator::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A comparison operator: `<` or `>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
        }
    }
}

/// A node of the syntax tree.
///
/// The parser produces exactly one [`Node::Module`] per program; every other
/// variant appears somewhere below it. Nodes are never modified after parsing
/// except for the `standalone` flag, which the parser sets on expressions that
/// are used directly as statements. A standalone expression prints its value
/// when evaluated and renders as a `printf` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The whole program.
    Module {
        /// Top-level statements in source order.
        statements: Vec<Self>,
    },
    /// An integer literal.
    Literal {
        /// The constant value.
        value:      i64,
        /// Whether the literal is an expression statement.
        standalone: bool,
        /// Where the literal starts.
        position:   Position,
    },
    /// A reference to a variable by name.
    Reference {
        /// Name of the variable.
        name:       String,
        /// Whether the reference is an expression statement.
        standalone: bool,
        /// Where the name starts.
        position:   Position,
    },
    /// `left op right` for one of `+ - * /`.
    Arithmetic {
        /// Left operand.
        left:       Box<Self>,
        /// The operator.
        op:         ArithmeticOperator,
        /// Right operand.
        right:      Box<Self>,
        /// Whether the operation is an expression statement.
        standalone: bool,
        /// Position of the operator.
        position:   Position,
    },
    /// `left op right` for `<` or `>`.
    Comparison {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       ComparisonOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `let name = value;`
    Assignment {
        /// The variable being bound.
        name:     String,
        /// The bound expression.
        value:    Box<Self>,
        /// Position of the `let` keyword.
        position: Position,
    },
    /// `condition ? if_true : if_false`
    Ternary {
        /// Selects the branch.
        condition: Box<Self>,
        /// Evaluated when the condition holds.
        if_true:   Box<Self>,
        /// Evaluated when it does not.
        if_false:  Box<Self>,
        /// Position of the `?`.
        position:  Position,
    },
    /// `if ... elif ... else ...`
    Conditional(Conditional),
    /// `repeat times { block }`
    Repeat {
        /// The iteration count, evaluated once when the loop starts.
        times:    Box<Self>,
        /// The loop body.
        block:    Vec<Self>,
        /// Position of the `repeat` keyword.
        position: Position,
    },
}

/// One link of an `if`/`elif`/`else` chain.
///
/// Every `elif` of a source chain becomes a `Conditional` with empty `elifs`
/// and `else_block`, stored in order in the `elifs` of the leading `if`.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// The branch condition.
    pub condition:  Box<Node>,
    /// Statements executed when the condition holds.
    pub block:      Vec<Node>,
    /// `elif` branches, tried in order when the condition does not hold.
    pub elifs:      Vec<Self>,
    /// Statements executed when no condition holds.
    pub else_block: Vec<Node>,
    /// Position of the `if` or `elif` keyword.
    pub position:   Position,
}

impl Node {
    /// Marks an expression as used directly as a statement.
    ///
    /// Only literals, references and arithmetic can be expression statements;
    /// the flag is ignored on every other variant.
    ///
    /// ## Example
    /// ```
    /// use brisk::ast::{Node, Position};
    ///
    /// let mut node = Node::Literal { value:      3,
    ///                                standalone: false,
    ///                                position:   Position::default(), };
    /// node.mark_standalone();
    /// assert!(node.is_standalone());
    /// ```
    pub const fn mark_standalone(&mut self) {
        match self {
            Self::Literal { standalone, .. }
            | Self::Reference { standalone, .. }
            | Self::Arithmetic { standalone, .. } => *standalone = true,
            _ => {},
        }
    }

    /// Whether the node is an expression used directly as a statement.
    #[must_use]
    pub const fn is_standalone(&self) -> bool {
        match self {
            Self::Literal { standalone, .. }
            | Self::Reference { standalone, .. }
            | Self::Arithmetic { standalone, .. } => *standalone,
            _ => false,
        }
    }

    /// Gets the source position of the node.
    ///
    /// A module has no token of its own and reports the start of the source.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Module { .. } => Position::new(1, 1),
            Self::Literal { position, .. }
            | Self::Reference { position, .. }
            | Self::Arithmetic { position, .. }
            | Self::Comparison { position, .. }
            | Self::Assignment { position, .. }
            | Self::Ternary { position, .. }
            | Self::Repeat { position, .. } => *position,
            Self::Conditional(conditional) => conditional.position,
        }
    }
}
