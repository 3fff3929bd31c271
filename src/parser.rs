//! Textual tree notation
//!
//! ```text
//! tree  := node | "_"
//! node  := TAG "(" NUMBER [ "," child [ "," child ] ] ")"
//! child := node | "_"
//! ```
//!
//! Tags are `first`/`second` in any case; `_` marks an absent child.

use tracing::{debug, instrument};

use crate::domain::{DomainError, DomainResult, NodeId, Tag, Tree, TreeBuilder};

/// Parse the notation into a [`Tree`]. `_` alone yields the empty tree.
#[instrument(level = "debug")]
pub fn parse_tree(input: &str) -> DomainResult<Tree> {
    let mut parser = Parser::new(input);
    let root = parser.child()?;
    parser.skip_ws();
    if let Some(c) = parser.peek() {
        return Err(DomainError::Unexpected {
            offset: parser.pos,
            expected: "end of input",
            found: format!("'{}'", c),
        });
    }
    let tree = match root {
        Some(root) => parser.builder.build(root),
        None => Tree::empty(),
    };
    debug!("parsed {} node(s)", tree.len());
    Ok(tree)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    builder: TreeBuilder,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            builder: TreeBuilder::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, want: char, expected: &'static str) -> DomainResult<()> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == want => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(DomainError::Unexpected {
                offset: self.pos,
                expected,
                found: format!("'{}'", c),
            }),
            None => Err(DomainError::UnexpectedEnd { expected }),
        }
    }

    /// Consume a run of characters matching `pred`, returning its start offset and text.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> (usize, &'a str) {
        let input = self.input;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        (start, &input[start..self.pos])
    }

    fn child(&mut self) -> DomainResult<Option<NodeId>> {
        self.skip_ws();
        match self.peek() {
            Some('_') => {
                self.pos += 1;
                Ok(None)
            }
            Some(_) => self.node().map(Some),
            None => Err(DomainError::UnexpectedEnd {
                expected: "a node or '_'",
            }),
        }
    }

    fn node(&mut self) -> DomainResult<NodeId> {
        self.skip_ws();
        let (offset, name) = self.take_while(|c| c.is_ascii_alphanumeric());
        if name.is_empty() {
            return Err(DomainError::Unexpected {
                offset,
                expected: "a tag",
                found: self
                    .peek()
                    .map(|c| format!("'{}'", c))
                    .unwrap_or_else(|| "end of input".into()),
            });
        }
        let tag: Tag = name.parse()?;

        self.expect('(', "'('")?;
        let value = self.number()?;

        let mut left = None;
        let mut right = None;
        self.skip_ws();
        if self.peek() == Some(',') {
            self.pos += 1;
            left = self.child()?;
            self.skip_ws();
            if self.peek() == Some(',') {
                self.pos += 1;
                right = self.child()?;
            }
        }
        self.expect(')', "')'")?;

        Ok(self.builder.node(tag, value, left, right))
    }

    fn number(&mut self) -> DomainResult<f64> {
        self.skip_ws();
        let (offset, text) =
            self.take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
        if text.is_empty() {
            return match self.peek() {
                Some(c) => Err(DomainError::Unexpected {
                    offset,
                    expected: "a number",
                    found: format!("'{}'", c),
                }),
                None => Err(DomainError::UnexpectedEnd {
                    expected: "a number",
                }),
            };
        }
        text.parse::<f64>().map_err(|_| DomainError::InvalidNumber {
            offset,
            text: text.to_string(),
        })
    }
}
