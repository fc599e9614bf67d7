use logos::Logos;

use crate::operator::Operator;

/// Represents one input token.
///
/// Every whitespace-separated word of input becomes exactly one token. The
/// session decides whether the token is acceptable in its current state.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-3.5`, `.5` or `2.1e-10`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Operator tokens: `+`, `-`, `*`, `/`, `^` or `!`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("^", |_| Operator::Power)]
    #[token("!", |_| Operator::Factorial)]
    Operator(Operator),
    /// `mi`
    #[token("mi")]
    MemoryInsert,
    /// `mc`
    #[token("mc")]
    MemoryClear,
    /// `restart`
    #[token("restart")]
    Restart,
    /// `reuse`
    #[token("reuse")]
    Reuse,
    /// `mr`
    #[token("mr")]
    MemoryRecall,
    /// `quit`
    #[token("quit")]
    Quit,
    /// Any other word, such as `hello` or `10x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::MemoryInsert => write!(f, "mi"),
            Self::MemoryClear => write!(f, "mc"),
            Self::Restart => write!(f, "restart"),
            Self::Reuse => write!(f, "reuse"),
            Self::MemoryRecall => write!(f, "mr"),
            Self::Quit => write!(f, "quit"),
            Self::Word(w) => write!(f, "{w}"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Classifies a single word.
///
/// A word that lexes into exactly one token becomes that token; anything else
/// (`10x`, `++`, `?`) becomes a `Token::Word` holding the original text.
///
/// # Example
/// ```
/// use memcalc::{interpreter::lexer::{Token, classify}, operator::Operator};
///
/// assert_eq!(classify("-2.5"), Token::Number(-2.5));
/// assert_eq!(classify("^"), Token::Operator(Operator::Power));
/// assert_eq!(classify("mr"), Token::MemoryRecall);
/// assert_eq!(classify("10x"), Token::Word("10x".to_string()));
/// ```
#[must_use]
pub fn classify(word: &str) -> Token {
    let mut lexer = Token::lexer(word);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => token,
        _ => Token::Word(word.to_string()),
    }
}

/// Splits a line of input into tokens.
///
/// Tokens are separated by whitespace, so a single line may carry several of
/// them (`10 + 5`). Tokenizing never fails: unrecognized words are returned
/// as `Token::Word` and the session reports them.
///
/// # Example
/// ```
/// use memcalc::{interpreter::lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize("  7 !\tquit ");
/// assert_eq!(tokens,
///            vec![Token::Number(7.0), Token::Operator(Operator::Factorial), Token::Quit]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    line.split_whitespace().map(classify).collect()
}
