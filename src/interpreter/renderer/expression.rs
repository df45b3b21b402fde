use tracing::trace;

use crate::{
    ast::{ArithmeticOperator, Node},
    interpreter::{evaluator::core::EvalResult, renderer::core::Renderer},
};

/// Which side of its parent an operand sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Renderer<'_> {
    /// Renders an expression as bare C expression text.
    ///
    /// Every referenced name must already be bound, including names in a
    /// ternary branch that evaluation would skip, since the emitted program
    /// has to declare them.
    pub(crate) fn render_expression(&mut self, node: &Node) -> EvalResult<String> {
        match node {
            Node::Literal { value, .. } => Ok(value.to_string()),
            Node::Reference { name, position, .. } => {
                self.env.resolve(name, *position)?;
                Ok(name.clone())
            },
            Node::Arithmetic { left, op, right, .. } => {
                let left = self.render_operand(left, *op, Side::Left)?;
                let right = self.render_operand(right, *op, Side::Right)?;
                Ok(format!("{left} {op} {right}"))
            },
            Node::Comparison { left, op, right, .. } => {
                let left = self.render_expression(left)?;
                let right = self.render_expression(right)?;
                Ok(format!("{left} {op} {right}"))
            },
            Node::Ternary { condition,
                            if_true,
                            if_false,
                            .. } => {
                let condition = self.render_expression(condition)?;
                let if_true = self.render_expression(if_true)?;
                let if_false = self.render_expression(if_false)?;
                Ok(format!("{condition} ? {if_true} : {if_false}"))
            },
            statement => self.render(statement, 0),
        }
    }

    /// Renders one operand of an arithmetic operation.
    ///
    /// An operand is parenthesized when its operator binds more loosely than
    /// `parent`, or binds equally and sits on the right, matching the
    /// left-associative grouping the parser built.
    fn render_operand(&mut self,
                      operand: &Node,
                      parent: ArithmeticOperator,
                      side: Side)
                      -> EvalResult<String> {
        let text = self.render_expression(operand)?;

        let needs_parens = match operand {
            Node::Arithmetic { op, .. } => {
                op.precedence() < parent.precedence()
                || (side == Side::Right && op.precedence() == parent.precedence())
            },
            _ => false,
        };

        if needs_parens { Ok(format!("({text})")) } else { Ok(text) }
    }

    /// Renders a standalone expression as a statement that prints its value.
    pub(crate) fn render_print(&mut self, node: &Node, indent: usize) -> EvalResult<String> {
        let pad = " ".repeat(indent);

        match node {
            Node::Literal { value, .. } => Ok(format!("{pad}printf(\"{value}\\n\");")),
            expr => {
                let text = self.render_expression(expr)?;
                Ok(format!("{pad}printf(\"%i\\n\", {text});"))
            },
        }
    }

    /// Renders `let name = value;`.
    ///
    /// The first assignment to a name declares it as `int`; later ones assign
    /// only. The value is evaluated and stored so the environment knows the
    /// name from here on.
    pub(crate) fn render_assignment(&mut self,
                                    name: &str,
                                    value: &Node,
                                    indent: usize)
                                    -> EvalResult<String> {
        let declared = self.env.contains(name);
        let evaluated = self.evaluate(value)?;
        let text = self.render_expression(value)?;

        if !declared {
            trace!(name, "declaring variable");
        }
        self.env.define(name, evaluated);

        let pad = " ".repeat(indent);
        let prefix = if declared { "" } else { "int " };
        Ok(format!("{pad}{prefix}{name} = {text};"))
    }
}
