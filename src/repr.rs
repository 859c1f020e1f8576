//! Textual representation of members and containers
//!
//! A bracket-and-comma literal syntax, used for test fixtures and for
//! `Display`:
//!
//! ```text
//! 2.5                         real scalar
//! {1,2}                       complex scalar 1 + 2i
//! [{1,2},{3,4}]               vector of two complex members
//! [[1,0],[0,1]]               2 × 2 real matrix
//! [[[1,2],[3,4]],[[5,6],[7,8]]]   rank-3 tensor, dim 2
//! ```
//!
//! Leaves are either a bare number, which sets the real part only, or a brace
//! group with exactly one value per component. [`parse`] returns the shape
//! (outermost axis first) and the leaf tokens in row-major order; turning the
//! tokens into members is left to [`parse_element`].

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Result of [`parse`]: a shape and the leaf tokens in row-major order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed<'a> {
    /// Extent of each nesting level, outermost first; empty for a bare leaf
    pub shape: Vec<usize>,
    /// One token list per leaf: a single token for a bare number, otherwise
    /// the brace group's entries
    pub elements: Vec<Vec<&'a str>>,
}

enum Node<'a> {
    List(Vec<Node<'a>>),
    Leaf(Vec<&'a str>),
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        Error::parse(self.src, format!("{} at offset {}", reason.into(), self.pos))
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", byte as char)))
        }
    }

    fn number(&mut self) -> Result<&'a str> {
        self.skip_ws();
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| !matches!(b, b'[' | b']' | b'{' | b'}' | b','))
        {
            self.pos += 1;
        }
        let token = self.src[start..self.pos].trim();
        if token.is_empty() {
            return Err(self.error("expected a number"));
        }
        Ok(token)
    }

    fn node(&mut self) -> Result<Node<'a>> {
        self.skip_ws();
        match self.peek() {
            Some(b'[') => {
                self.pos += 1;
                let mut children = Vec::new();
                self.skip_ws();
                if self.peek() == Some(b']') {
                    self.pos += 1;
                    return Ok(Node::List(children));
                }
                loop {
                    children.push(self.node()?);
                    self.skip_ws();
                    match self.peek() {
                        Some(b',') => self.pos += 1,
                        Some(b']') => {
                            self.pos += 1;
                            return Ok(Node::List(children));
                        }
                        _ => return Err(self.error("expected ',' or ']'")),
                    }
                }
            }
            Some(b'{') => {
                self.pos += 1;
                let mut parts = vec![self.number()?];
                loop {
                    self.skip_ws();
                    match self.peek() {
                        Some(b',') => {
                            self.pos += 1;
                            parts.push(self.number()?);
                        }
                        _ => break,
                    }
                }
                self.expect(b'}')?;
                Ok(Node::Leaf(parts))
            }
            Some(_) => Ok(Node::Leaf(vec![self.number()?])),
            None => Err(self.error("unexpected end of input")),
        }
    }
}

fn shape_of(node: &Node<'_>, src: &str) -> Result<Vec<usize>> {
    match node {
        Node::Leaf(_) => Ok(Vec::new()),
        Node::List(children) => {
            let mut shape = vec![children.len()];
            if let Some((first, rest)) = children.split_first() {
                let inner = shape_of(first, src)?;
                for child in rest {
                    if shape_of(child, src)? != inner {
                        return Err(Error::parse(src, "ragged nesting"));
                    }
                }
                shape.extend(inner);
            }
            Ok(shape)
        }
    }
}

fn collect_leaves<'a>(node: Node<'a>, out: &mut Vec<Vec<&'a str>>) {
    match node {
        Node::Leaf(parts) => out.push(parts),
        Node::List(children) => {
            for child in children {
                collect_leaves(child, out);
            }
        }
    }
}

/// Parse a literal into its shape and leaf tokens
///
/// # Errors
///
/// [`Error::Parse`] for unbalanced brackets, empty numbers, trailing input or
/// ragged nesting (siblings of different shapes).
pub fn parse(input: &str) -> Result<Parsed<'_>> {
    let mut parser = Parser::new(input);
    let root = parser.node()?;
    parser.skip_ws();
    if parser.pos != input.len() {
        return Err(parser.error("trailing characters"));
    }

    let shape = shape_of(&root, input)?;
    let mut elements = Vec::new();
    collect_leaves(root, &mut elements);
    Ok(Parsed { shape, elements })
}

/// Build a member from one leaf's tokens
///
/// One token sets the real part and zeroes the rest; otherwise the token count
/// must equal the member's component count.
pub fn parse_element<T: Element>(tokens: &[&str]) -> Result<T> {
    let mut out = T::zeroed();
    if tokens.len() != 1 && tokens.len() != T::COMPONENTS {
        return Err(Error::parse(
            tokens.join(","),
            format!("expected 1 or {} components", T::COMPONENTS),
        ));
    }
    for (slot, token) in out.components_mut().iter_mut().zip(tokens) {
        *slot = T::Component::from_str(token).map_err(|_| Error::parse(*token, "not a number"))?;
    }
    Ok(out)
}

/// Parse one member: `{c0,c1,...}` or a bare number
pub fn parse_scalar<T: Element>(input: &str) -> Result<T> {
    let parsed = parse(input)?;
    match (parsed.shape.as_slice(), parsed.elements.as_slice()) {
        ([], [tokens]) => parse_element(tokens),
        _ => Err(Error::parse(input, "expected a single member")),
    }
}

/// Parse a literal into members, returning the shape alongside
pub fn parse_members<T: Element>(input: &str) -> Result<(Vec<usize>, Vec<T>)> {
    let parsed = parse(input)?;
    let members = parsed
        .elements
        .iter()
        .map(|tokens| parse_element(tokens))
        .collect::<Result<Vec<T>>>()?;
    Ok((parsed.shape, members))
}

/// Write one member: a bare number for reals, `{c0,c1,...}` otherwise
pub fn write_element<T: Element>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let components = value.components();
    if let [only] = components {
        return write!(f, "{only}");
    }
    f.write_str("{")?;
    for (n, c) in components.iter().enumerate() {
        if n > 0 {
            f.write_str(",")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("}")
}

/// Write row-major `elements` nested according to `shape`
pub(crate) fn write_nested<T: Element>(
    f: &mut fmt::Formatter<'_>,
    shape: &[usize],
    elements: &[T],
) -> fmt::Result {
    match shape.split_first() {
        None => match elements.first() {
            Some(e) => write_element(f, e),
            None => Ok(()),
        },
        Some((&n, inner)) => {
            let block: usize = inner.iter().product();
            f.write_str("[")?;
            for i in 0..n {
                if i > 0 {
                    f.write_str(",")?;
                }
                let start = (i * block).min(elements.len());
                let end = (start + block).min(elements.len());
                write_nested(f, inner, &elements[start..end])?;
            }
            f.write_str("]")
        }
    }
}
