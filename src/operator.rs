/// Represents an arithmetic operator accepted by the calculator.
///
/// Every operator except `Factorial` is binary and consumes a left and a right
/// operand. `Factorial` is unary and only ever looks at the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Subtract,
    /// Multiplication `*`.
    Multiply,
    /// Division `/`.
    Divide,
    /// Exponentiation `^`.
    Power,
    /// Factorial `!`.
    Factorial,
}

impl Operator {
    /// All operators, in the order the banner lists them.
    pub const ALL: [Self; 6] = [Self::Add,
                                Self::Subtract,
                                Self::Multiply,
                                Self::Divide,
                                Self::Power,
                                Self::Factorial];

    /// Returns the one-character token for the operator.
    ///
    /// # Example
    /// ```
    /// use memcalc::operator::Operator;
    ///
    /// assert_eq!(Operator::Power.symbol(), '^');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
            Self::Factorial => '!',
        }
    }

    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use memcalc::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('!'), Some(Operator::Factorial));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            '!' => Some(Self::Factorial),
            _ => None,
        }
    }

    /// Returns `true` if the operator takes only a left operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Factorial)
    }

    /// Number of operands the operator consumes.
    ///
    /// # Example
    /// ```
    /// use memcalc::operator::Operator;
    ///
    /// assert_eq!(Operator::Divide.arity(), 2);
    /// assert_eq!(Operator::Factorial.arity(), 1);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        if self.is_unary() { 1 } else { 2 }
    }

    /// Human readable name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Factorial => "factorial",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
