use crate::{
    ast::{Conditional, Node, Position},
    interpreter::{evaluator::core::EvalResult, renderer::core::Renderer},
};

impl Renderer<'_> {
    /// Renders an `if` chain.
    ///
    /// Every `elif` becomes `else if (...) { ... }` on its own line, followed
    /// by the `else` block when there is one:
    ///
    /// ```text
    /// if (a) {
    ///     ...
    /// }
    /// else if (b) {
    ///     ...
    /// }
    /// else {
    ///     ...
    /// }
    /// ```
    pub(crate) fn render_conditional(&mut self,
                                     conditional: &Conditional,
                                     indent: usize)
                                     -> EvalResult<String> {
        let pad = " ".repeat(indent);
        Ok(format!("{pad}{}", self.render_branch(conditional, indent)?))
    }

    /// Renders `if (...) { ... }` and the rest of the chain, without leading
    /// indentation.
    fn render_branch(&mut self, conditional: &Conditional, indent: usize) -> EvalResult<String> {
        let pad = " ".repeat(indent);
        let inner = indent + self.options.indent_step;

        let condition = self.render_expression(&conditional.condition)?;
        let mut code = format!("if ({condition}) {{");
        code.push_str(&self.render_block(&conditional.block, inner)?);
        code.push_str(&format!("\n{pad}}}"));

        for elif in &conditional.elifs {
            code.push_str(&format!("\n{pad}else "));
            code.push_str(&self.render_branch(elif, indent)?);
        }

        if !conditional.else_block.is_empty() {
            code.push_str(&format!("\n{pad}else {{"));
            code.push_str(&self.render_block(&conditional.else_block, inner)?);
            code.push_str(&format!("\n{pad}}}"));
        }

        Ok(code)
    }

    /// Renders a `repeat` loop as a counted `for` loop.
    ///
    /// The bound is evaluated now, against the values the environment holds
    /// at this point of the program, and emitted as a constant.
    pub(crate) fn render_repeat(&mut self,
                                times: &Node,
                                block: &[Node],
                                position: Position,
                                indent: usize)
                                -> EvalResult<String> {
        let iterations = self.evaluate(times)?.to_iterations(position)?;
        let counter = self.counters.next_free(self.env);

        let pad = " ".repeat(indent);
        let mut code =
            format!("{pad}for (int {counter} = 0; {counter} < {iterations}; {counter}++) {{");
        code.push_str(&self.render_block(block, indent + self.options.indent_step)?);
        code.push_str(&format!("\n{pad}}}"));

        Ok(code)
    }
}
