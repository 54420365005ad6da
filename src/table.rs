//! Truth-table compiler and evaluator.
//!
//! Compilation walks an [`Expr`] bottom-up and builds one column per
//! *distinct* sub-expression: one variable column per distinct name, and
//! one derived column per structurally distinct unary/binary node.
//! Deduplication is keyed by structural equality of the source
//! sub-expressions and implemented as a linear scan over the columns
//! produced so far; the deduplicated column count is bounded by the
//! formula size, so the scan is cheap at the scale formulas are written
//! by hand. (A hash-consing store is the upgrade path if that ever
//! changes — it alters complexity, not observable behavior.)
//!
//! After the column set is fixed, every boolean assignment to the
//! variables is enumerated (2^k rows, `true` before `false`, the
//! first-ordered variable slowest-varying) and every derived column is
//! evaluated row by row in the order it was first produced, which is a
//! post-order of the formula and therefore guarantees operands are
//! populated before the columns that read them.

use std::fmt;

use log::debug;

use crate::ast::Expr;
use crate::ops::{BinaryOp, UnaryOp};

/// Handle to a column in a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(usize);

impl ColumnId {
    /// Returns the index of the column in the table's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// What a column computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A leaf populated directly by assignment enumeration.
    Variable,
    /// Derived from one operand column.
    Unary { op: UnaryOp, operand: ColumnId },
    /// Derived from two operand columns.
    Binary {
        op: BinaryOp,
        lhs: ColumnId,
        rhs: ColumnId,
    },
}

/// One column of the finished table: a header string and one boolean per
/// row.
///
/// The source expression is kept only so that compilation can test
/// structural equivalence against columns produced earlier; evaluation
/// reads operand columns through their [`ColumnId`]s instead.
pub struct Column<'a> {
    expr: &'a Expr,
    display: String,
    kind: ColumnKind,
    values: Vec<bool>,
}

impl Column<'_> {
    /// The header string for this column.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The column values, one per row, in enumeration order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, ColumnKind::Variable)
    }
}

impl fmt::Debug for Column<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("display", &self.display)
            .field("kind", &self.kind)
            .field("rows", &self.values.len())
            .finish()
    }
}

/// A complete truth table for one formula.
///
/// Borrows the AST it was compiled from; the AST must outlive the table.
pub struct Table<'a> {
    /// All columns, variables and derived alike.
    columns: Vec<Column<'a>>,
    /// Variable columns in final header order.
    variables: Vec<ColumnId>,
    /// Derived columns in the order they were first produced (post-order
    /// of the formula, duplicates suppressed).
    expressions: Vec<ColumnId>,
    /// The column for the whole formula.
    root: ColumnId,
}

impl<'a> Table<'a> {
    /// Compiles a formula into its complete truth table.
    ///
    /// `order` lists preferred variable names for the header: names that
    /// occur in the formula come first, in the given order, followed by
    /// the remaining variables in order of first appearance. Names that
    /// do not occur are ignored.
    ///
    /// This cannot fail for a well-formed AST. Memory is O(2^k · c)
    /// booleans for k distinct variables and c deduplicated columns;
    /// no limit on k is imposed here.
    pub fn compile(expr: &'a Expr, order: &[&str]) -> Self {
        debug!("compile({})", expr);

        let mut table = Self {
            columns: Vec::new(),
            variables: Vec::new(),
            expressions: Vec::new(),
            root: ColumnId(0),
        };

        let mut discovered = Vec::new();
        table.root = table.record(expr, &mut discovered);
        table.order_variables(discovered, order);
        table.enumerate();
        table.evaluate();

        table
    }

    /// Number of distinct variables, k.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows, 2^k.
    pub fn row_count(&self) -> usize {
        1 << self.variable_count()
    }

    /// Header names of the variable section, in final order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|id| self.columns[id.index()].display())
    }

    /// Variable columns, in final header order.
    pub fn variables(&self) -> impl Iterator<Item = &Column<'a>> {
        self.variables.iter().map(|id| &self.columns[id.index()])
    }

    /// Derived columns, in first-production order. The last one is the
    /// whole formula unless the formula is a bare variable.
    pub fn expressions(&self) -> impl Iterator<Item = &Column<'a>> {
        self.expressions.iter().map(|id| &self.columns[id.index()])
    }

    pub fn column(&self, id: ColumnId) -> &Column<'a> {
        &self.columns[id.index()]
    }

    /// The column holding the whole formula's values.
    pub fn root(&self) -> &Column<'a> {
        self.column(self.root)
    }

    /// Records columns for `expr` and all its sub-expressions, reusing a
    /// structurally equivalent column wherever one exists.
    fn record(&mut self, expr: &'a Expr, discovered: &mut Vec<ColumnId>) -> ColumnId {
        match expr {
            Expr::Var(name) => {
                if let Some(&id) = discovered
                    .iter()
                    .find(|&&id| self.columns[id.index()].expr == expr)
                {
                    debug!("record: reusing {} for variable {}", id, name);
                    return id;
                }
                let id = self.push(Column {
                    expr,
                    display: name.clone(),
                    kind: ColumnKind::Variable,
                    values: Vec::new(),
                });
                discovered.push(id);
                id
            }
            Expr::Unary { op, operand } => {
                let operand = self.record(operand, discovered);
                self.record_derived(expr, ColumnKind::Unary { op: *op, operand })
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.record(lhs, discovered);
                let rhs = self.record(rhs, discovered);
                self.record_derived(expr, ColumnKind::Binary { op: *op, lhs, rhs })
            }
        }
    }

    fn record_derived(&mut self, expr: &'a Expr, kind: ColumnKind) -> ColumnId {
        if let Some(&id) = self
            .expressions
            .iter()
            .find(|&&id| self.columns[id.index()].expr == expr)
        {
            debug!("record: reusing {} for {}", id, expr);
            return id;
        }
        let id = self.push(Column {
            expr,
            display: expr.to_string(),
            kind,
            values: Vec::new(),
        });
        self.expressions.push(id);
        id
    }

    fn push(&mut self, column: Column<'a>) -> ColumnId {
        let id = ColumnId(self.columns.len());
        debug!("record: new column {} = {}", id, column.display);
        self.columns.push(column);
        id
    }

    /// Finalizes the header order: preferred names that occur in the
    /// formula first, then the rest in first-discovery order.
    fn order_variables(&mut self, discovered: Vec<ColumnId>, order: &[&str]) {
        let mut ordered = Vec::with_capacity(discovered.len());
        for &name in order {
            let found = discovered
                .iter()
                .find(|&&id| self.columns[id.index()].display == name);
            if let Some(&id) = found {
                if !ordered.contains(&id) {
                    ordered.push(id);
                }
            }
        }
        for id in discovered {
            if !ordered.contains(&id) {
                ordered.push(id);
            }
        }
        self.variables = ordered;
    }

    /// Fills the variable columns with all 2^k assignments, depth-first
    /// with `true` chosen before `false` at every position. Row 0 is the
    /// all-true assignment; the first-ordered variable varies slowest.
    fn enumerate(&mut self) {
        let mut row = Vec::with_capacity(self.variables.len());
        self.enumerate_assignments(&mut row);
    }

    fn enumerate_assignments(&mut self, row: &mut Vec<bool>) {
        if row.len() < self.variables.len() {
            for value in [true, false] {
                row.push(value);
                self.enumerate_assignments(row);
                row.pop();
            }
        } else {
            for (i, &value) in row.iter().enumerate() {
                let id = self.variables[i];
                self.columns[id.index()].values.push(value);
            }
        }
    }

    /// Evaluates every derived column, in first-production order, from
    /// its operand columns. Production order is a post-order of the
    /// formula, so operands are always populated first.
    fn evaluate(&mut self) {
        for i in 0..self.expressions.len() {
            let id = self.expressions[i];
            let kind = self.columns[id.index()].kind;
            let values: Vec<bool> = match kind {
                ColumnKind::Variable => {
                    unreachable!("variable column {} in the derived list", id)
                }
                ColumnKind::Unary { op, operand } => self.columns[operand.index()]
                    .values
                    .iter()
                    .map(|&value| op.eval(value))
                    .collect(),
                ColumnKind::Binary { op, lhs, rhs } => {
                    let lhs = &self.columns[lhs.index()].values;
                    let rhs = &self.columns[rhs.index()].values;
                    lhs.iter().zip(rhs.iter()).map(|(&a, &b)| op.eval(a, b)).collect()
                }
            };
            self.columns[id.index()].values = values;
        }
    }
}

impl fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("variables", &self.variables.len())
            .field("expressions", &self.expressions.len())
            .field("rows", &self.row_count())
            .finish()
    }
}

/// Renders the table as aligned text: variable columns, then derived
/// columns, one `T`/`F` cell per row.
impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<ColumnId> = self
            .variables
            .iter()
            .chain(self.expressions.iter())
            .copied()
            .collect();
        let widths: Vec<usize> = ids
            .iter()
            .map(|&id| self.column(id).display().chars().count())
            .collect();

        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", self.column(id).display())?;
        }
        writeln!(f)?;

        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                write!(f, "-+-")?;
            }
            write!(f, "{}", "-".repeat(width))?;
        }
        writeln!(f)?;

        for row in 0..self.row_count() {
            for (i, &id) in ids.iter().enumerate() {
                if i > 0 {
                    write!(f, " | ")?;
                }
                let cell = if self.column(id).values()[row] { "T" } else { "F" };
                write!(f, "{:^width$}", cell, width = widths[i])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
