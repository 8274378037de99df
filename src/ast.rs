use std::fmt::{self, Write as _};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node owns its children exclusively, so a parsed expression is a plain
/// tree without sharing or cycles. Each variant records the byte offset of the
/// token it was built from, which the evaluator uses for error reporting.
///
/// Grouping parentheses do not produce a node of their own: `(2 + 3) * 4` is a
/// multiplication whose left operand is an addition.
///
/// Dropping, comparing and printing an `Expr` never recurse, so arbitrarily
/// long operator chains can be handled safely.
pub enum Expr {
    /// A numeric literal such as `42` or `3.14`.
    Literal {
        /// The literal value.
        value:    f64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A prefix operator applied to a single operand, such as `-x`.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand the operator is applied to.
        operand:  Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// An infix operator applied to two operands, such as `a * b`.
    BinaryOp {
        /// Left-hand operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right-hand operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Returns the byte offset of the token this node was built from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Returns the number of nodes on the longest path from this node to a
    /// leaf, counting both ends. A single literal has depth 1.
    ///
    /// # Example
    /// ```
    /// let ast = arithmetic_engine::parse("1 + 2 * 3").unwrap();
    /// assert_eq!(ast.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match node {
                Self::Literal { .. } => {},
                Self::UnaryOp { operand, .. } => pending.push((&**operand, depth + 1)),
                Self::BinaryOp { left, right, .. } => {
                    pending.push((&**left, depth + 1));
                    pending.push((&**right, depth + 1));
                },
            }
        }

        deepest
    }

    /// Moves the children of this node onto `out`, leaving cheap literals in
    /// their place.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Literal { .. } => {},
            Self::UnaryOp { operand, .. } => out.push(std::mem::replace(&mut **operand, Self::HOLE)),
            Self::BinaryOp { left, right, .. } => {
                out.push(std::mem::replace(&mut **left, Self::HOLE));
                out.push(std::mem::replace(&mut **right, Self::HOLE));
            },
        }
    }

    const HOLE: Self = Self::Literal { value:    0.0,
                                       position: 0, };
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Two trees are equal if they have the same shape, operators, values and
/// positions.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Literal { value: a, position: p },
                 Self::Literal { value: b, position: q }) => {
                    if a != b || p != q {
                        return false;
                    }
                },
                (Self::UnaryOp { op: a,
                                 operand: x,
                                 position: p, },
                 Self::UnaryOp { op: b,
                                 operand: y,
                                 position: q, }) => {
                    if a != b || p != q {
                        return false;
                    }
                    pending.push((&**x, &**y));
                },
                (Self::BinaryOp { left: xl,
                                  op: a,
                                  right: xr,
                                  position: p, },
                 Self::BinaryOp { left: yl,
                                  op: b,
                                  right: yr,
                                  position: q, }) => {
                    if a != b || p != q {
                        return false;
                    }
                    pending.push((&**xr, &**yr));
                    pending.push((&**xl, &**yl));
                },
                _ => return false,
            }
        }

        true
    }
}

/// Prints the tree in the same shape as a derived `Debug`, on a single line.
///
/// # Example
/// ```
/// let ast = arithmetic_engine::parse("-1").unwrap();
/// assert_eq!(format!("{ast:?}"),
///            "UnaryOp { op: Neg, operand: Literal { value: 1.0, position: 1 }, position: 0 }");
/// ```
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'e> {
            Node(&'e Expr),
            Text(&'static str),
            Position(usize),
        }

        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Position(position) => write!(f, "{position}")?,
                Piece::Node(Self::Literal { value, position }) => {
                    write!(f, "Literal {{ value: {value:?}, position: {position} }}")?;
                },
                Piece::Node(Self::UnaryOp { op, operand, position }) => {
                    write!(f, "UnaryOp {{ op: {op:?}, operand: ")?;
                    pending.push(Piece::Text(" }"));
                    pending.push(Piece::Position(*position));
                    pending.push(Piece::Text(", position: "));
                    pending.push(Piece::Node(operand));
                },
                Piece::Node(Self::BinaryOp { left, op, right, position }) => {
                    f.write_str("BinaryOp { left: ")?;
                    pending.push(Piece::Text(" }"));
                    pending.push(Piece::Position(*position));
                    pending.push(Piece::Text(", position: "));
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Text(match op {
                                                 BinaryOperator::Add => ", op: Add, right: ",
                                                 BinaryOperator::Sub => ", op: Sub, right: ",
                                                 BinaryOperator::Mul => ", op: Mul, right: ",
                                                 BinaryOperator::Div => ", op: Div, right: ",
                                             }));
                    pending.push(Piece::Node(left));
                },
            }
        }

        Ok(())
    }
}

/// Prints the tree in a fully parenthesized form, e.g. `(2 + (3 * 4))`.
///
/// Every operator application is wrapped in parentheses, which makes the
/// grouping chosen by the parser visible.
///
/// # Example
/// ```
/// let ast = arithmetic_engine::parse("-2 + 3 * 4").unwrap();
/// assert_eq!(ast.to_string(), "((-2) + (3 * 4))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'e> {
            Node(&'e Expr),
            Text(&'static str),
            Operator(BinaryOperator),
        }

        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::UnaryOp { op, operand, .. }) => {
                    f.write_char('(')?;
                    write!(f, "{op}")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(operand));
                },
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    f.write_char('(')?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Operator(*op));
                    pending.push(Piece::Node(left));
                },
            }
        }

        Ok(())
    }
}

/// Represents a binary operator.
///
/// Addition and subtraction bind looser than multiplication and division; all
/// four are left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Neg,
    /// Identity (e.g. `+x`).
    Pos,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl UnaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
