/// Binary operators of the fully parenthesized expression language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }
}

/// Represents expressions built from repdigit literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(u64),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    /// True when every literal is written using `digit` only.
    pub fn uses_only_digit(&self, digit: u8) -> bool {
        let Some(wanted) = char::from_digit(u32::from(digit), 10) else {
            return false;
        };
        match self {
            Expression::Number(n) => n.to_string().chars().all(|c| c == wanted),
            Expression::Binary(_, l, r) => l.uses_only_digit(digit) && r.uses_only_digit(digit),
        }
    }

    /// Total number of digit characters across all literals.
    pub fn digit_count(&self) -> usize {
        match self {
            Expression::Number(n) => n.to_string().len(),
            Expression::Binary(_, l, r) => l.digit_count() + r.digit_count(),
        }
    }
}
