//! Quoted-literal tokenizer for the query surface.
//!
//! Splits query text into bare whitespace-delimited words and double-quoted
//! string literals. An `=` outside a literal is always a word of its own. Inside a literal, `\"` is a quote and `\\` a backslash,
//! so a literal may carry an embedded quote without shifting the positions of
//! the literals that follow it.

/// One lexical unit of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Bare keyword or connective (`select`, `=`, `or`, ...).
    Word(String),
    /// Contents of a double-quoted literal, escapes resolved.
    Literal(String),
}

impl Segment {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Segment::Word(w) => Some(w),
            Segment::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Segment::Literal(l) => Some(l),
            Segment::Word(_) => None,
        }
    }
}

/// Query text that cannot be split into segments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// A literal opened at this byte offset is never closed.
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedLiteral(usize),
}

/// Tokenize query text into words and literals, in source order.
pub fn tokenize(text: &str) -> Result<Vec<Segment>, TokenizeError> {
    let mut segments = Vec::new();
    let mut word = String::new();
    let mut chars = text.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '"' {
            flush_word(&mut word, &mut segments);
            let mut literal = String::new();
            let mut closed = false;
            while let Some((_, lc)) = chars.next() {
                match lc {
                    '"' => {
                        closed = true;
                        break;
                    }
                    '\\' => match chars.next() {
                        Some((_, esc @ ('"' | '\\'))) => literal.push(esc),
                        Some((_, other)) => {
                            literal.push('\\');
                            literal.push(other);
                        }
                        None => literal.push('\\'),
                    },
                    other => literal.push(other),
                }
            }
            if !closed {
                return Err(TokenizeError::UnterminatedLiteral(i));
            }
            segments.push(Segment::Literal(literal));
        } else if c.is_whitespace() {
            flush_word(&mut word, &mut segments);
        } else if c == '=' {
            flush_word(&mut word, &mut segments);
            segments.push(Segment::Word("=".to_string()));
        } else {
            word.push(c);
        }
    }
    flush_word(&mut word, &mut segments);

    Ok(segments)
}

fn flush_word(word: &mut String, segments: &mut Vec<Segment>) {
    if !word.is_empty() {
        segments.push(Segment::Word(std::mem::take(word)));
    }
}
