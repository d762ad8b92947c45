//! Recursive-descent parser over the token stream.

use crate::errors::ParseError;
use crate::lexer::{Lexer, Token};
use crate::proto::{Enum, Field, Label, Message, Scalar, Ty};
use crate::ProtoFile;

const MAX_FIELD_NUMBER: i64 = 536_870_911;

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { lexer: Lexer::new(src), peeked: None }
    }

    fn next(&mut self) -> Result<Option<Token>, ParseError> {
        match self.peeked.take() {
            Some(t) => Ok(Some(t)),
            None => self.lexer.next(),
        }
    }

    fn peek(&mut self) -> Result<Option<&Token>, ParseError> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn unexpected(&self, token: &Token, expected: &'static str) -> ParseError {
        ParseError::Unexpected {
            line: self.lexer.line(),
            found: token.describe(),
            expected,
        }
    }

    fn expect_punct(&mut self, c: char) -> Result<(), ParseError> {
        match self.next()? {
            Some(Token::Punct(p)) if p == c => Ok(()),
            Some(other) => Err(self.unexpected(&other, punct_name(c))),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    fn expect_ident(&mut self, expected: &'static str) -> Result<String, ParseError> {
        match self.next()? {
            Some(Token::Ident(s)) => Ok(s),
            Some(other) => Err(self.unexpected(&other, expected)),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    /// Discard tokens up to and including the next `;`, balancing braces
    /// (used for `option`, `reserved`, `extensions`).
    fn skip_statement(&mut self) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            match self.next()? {
                None => return Err(ParseError::UnexpectedEof),
                Some(Token::Punct('{')) => depth += 1,
                Some(Token::Punct('}')) if depth > 0 => depth -= 1,
                Some(Token::Punct(';')) if depth == 0 => return Ok(()),
                Some(_) => {}
            }
        }
    }

    /// Discard a bracketed `[...]` field-option list.
    fn skip_field_options(&mut self) -> Result<(), ParseError> {
        loop {
            match self.next()? {
                None => return Err(ParseError::UnexpectedEof),
                Some(Token::Punct(']')) => return Ok(()),
                Some(_) => {}
            }
        }
    }

    pub(crate) fn parse_file(&mut self) -> Result<ProtoFile, ParseError> {
        let mut file = ProtoFile::default();
        loop {
            let Some(token) = self.next()? else { return Ok(file) };
            match token {
                Token::Ident(word) => match word.as_str() {
                    "syntax" | "package" | "option" => self.skip_statement()?,
                    "import" => {
                        // `import "Foo.proto";` — an optional `public`
                        // qualifier may precede the path.
                        let mut name = None;
                        loop {
                            match self.next()? {
                                None => return Err(ParseError::UnexpectedEof),
                                Some(Token::Str(path)) => name = Some(path),
                                Some(Token::Punct(';')) => break,
                                Some(Token::Ident(_)) => {}
                                Some(other) => {
                                    return Err(self.unexpected(&other, "an import path"))
                                }
                            }
                        }
                        if let Some(path) = name {
                            let stem = path.strip_suffix(".proto").unwrap_or(&path);
                            file.imports.push(stem.to_owned());
                        }
                    }
                    "message" => {
                        let name = self.expect_ident("a message name")?;
                        file.messages.push(self.parse_message(name)?);
                    }
                    "enum" => {
                        let name = self.expect_ident("an enum name")?;
                        file.enums.push(self.parse_enum(name)?);
                    }
                    other => {
                        return Err(self.unexpected(
                            &Token::Ident(other.to_owned()),
                            "a top-level definition",
                        ))
                    }
                },
                Token::Punct(';') => {}
                other => return Err(self.unexpected(&other, "a top-level definition")),
            }
        }
    }

    fn parse_message(&mut self, name: String) -> Result<Message, ParseError> {
        self.expect_punct('{')?;
        let mut message = Message {
            name,
            fields: Vec::new(),
            nested_messages: Vec::new(),
            nested_enums: Vec::new(),
        };

        loop {
            let Some(token) = self.next()? else { return Err(ParseError::UnexpectedEof) };
            let word = match token {
                Token::Punct('}') => return Ok(message),
                Token::Punct(';') => continue,
                Token::Ident(word) => word,
                other => return Err(self.unexpected(&other, "a message entry")),
            };

            match word.as_str() {
                "message" => {
                    let nested = self.expect_ident("a message name")?;
                    let parsed = self.parse_message(nested)?;
                    message.nested_messages.push(parsed);
                }
                "enum" => {
                    let nested = self.expect_ident("an enum name")?;
                    let parsed = self.parse_enum(nested)?;
                    message.nested_enums.push(parsed);
                }
                "oneof" => {
                    // Presence-only grouping; members encode like plain fields.
                    self.expect_ident("a oneof name")?;
                    self.expect_punct('{')?;
                    loop {
                        match self.peek()? {
                            Some(Token::Punct('}')) => {
                                self.next()?;
                                break;
                            }
                            Some(Token::Ident(w)) if w.as_str() == "option" => {
                                self.next()?;
                                self.skip_statement()?;
                            }
                            Some(_) => {
                                let ty_word = self.expect_ident("a field type")?;
                                let field = self.parse_field(ty_word, Label::Single)?;
                                self.push_field(&mut message, field)?;
                            }
                            None => return Err(ParseError::UnexpectedEof),
                        }
                    }
                }
                "option" | "reserved" | "extensions" => self.skip_statement()?,
                "map" => {
                    let field = self.parse_map_field()?;
                    self.push_field(&mut message, field)?;
                }
                "repeated" => {
                    let ty_word = self.expect_ident("a field type")?;
                    let field = self.parse_field(ty_word, Label::Repeated)?;
                    self.push_field(&mut message, field)?;
                }
                "optional" | "required" => {
                    let ty_word = self.expect_ident("a field type")?;
                    let field = self.parse_field(ty_word, Label::Single)?;
                    self.push_field(&mut message, field)?;
                }
                ty_word => {
                    let field = self.parse_field(ty_word.to_owned(), Label::Single)?;
                    self.push_field(&mut message, field)?;
                }
            }
        }
    }

    fn push_field(&self, message: &mut Message, field: Field) -> Result<(), ParseError> {
        if message.field_by_number(field.number).is_some() {
            return Err(ParseError::DuplicateFieldNumber {
                line: self.lexer.line(),
                number: field.number,
            });
        }
        message.fields.push(field);
        Ok(())
    }

    fn parse_field(&mut self, ty_word: String, label: Label) -> Result<Field, ParseError> {
        let ty = Ty::parse(&ty_word);
        let name = self.expect_ident("a field name")?;
        self.expect_punct('=')?;
        let number = self.parse_field_number()?;
        self.finish_field()?;
        Ok(Field::new(name, number, ty, label))
    }

    fn parse_map_field(&mut self) -> Result<Field, ParseError> {
        self.expect_punct('<')?;
        let key_word = self.expect_ident("a map key type")?;
        let key = Scalar::from_keyword(&key_word)
            .filter(|s| !matches!(s, Scalar::Double | Scalar::Float | Scalar::Bytes))
            .ok_or_else(|| ParseError::Unexpected {
                line: self.lexer.line(),
                found: key_word,
                expected: "an integral, bool or string map key",
            })?;
        self.expect_punct(',')?;
        let value_word = self.expect_ident("a map value type")?;
        let ty = Ty::parse(&value_word);
        self.expect_punct('>')?;
        let name = self.expect_ident("a field name")?;
        self.expect_punct('=')?;
        let number = self.parse_field_number()?;
        self.finish_field()?;
        Ok(Field::new(name, number, ty, Label::Map(key)))
    }

    fn parse_field_number(&mut self) -> Result<u32, ParseError> {
        match self.next()? {
            Some(Token::Int(n)) if n > 0 && n <= MAX_FIELD_NUMBER => Ok(n as u32),
            Some(_) | None => Err(ParseError::InvalidFieldNumber { line: self.lexer.line() }),
        }
    }

    /// Consume optional `[...]` options and the terminating `;`.
    fn finish_field(&mut self) -> Result<(), ParseError> {
        if let Some(Token::Punct('[')) = self.peek()? {
            self.next()?;
            self.skip_field_options()?;
        }
        self.expect_punct(';')
    }

    fn parse_enum(&mut self, name: String) -> Result<Enum, ParseError> {
        self.expect_punct('{')?;
        let mut result = Enum { name, values: Vec::new() };
        loop {
            let Some(token) = self.next()? else { return Err(ParseError::UnexpectedEof) };
            match token {
                Token::Punct('}') => return Ok(result),
                Token::Punct(';') => {}
                Token::Ident(word) if word == "option" || word == "reserved" => {
                    self.skip_statement()?;
                }
                Token::Ident(value_name) => {
                    self.expect_punct('=')?;
                    let value = match self.next()? {
                        Some(Token::Int(n)) if (i32::MIN as i64..=i32::MAX as i64).contains(&n) => {
                            n as i32
                        }
                        Some(other) => return Err(self.unexpected(&other, "an enum value")),
                        None => return Err(ParseError::UnexpectedEof),
                    };
                    result.values.push((value_name, value));
                    // Per-value options, if any, run to the `;`.
                    self.skip_statement()?;
                }
                other => return Err(self.unexpected(&other, "an enum entry")),
            }
        }
    }
}

fn punct_name(c: char) -> &'static str {
    match c {
        '{' => "`{`",
        '}' => "`}`",
        ';' => "`;`",
        '=' => "`=`",
        '<' => "`<`",
        '>' => "`>`",
        ',' => "`,`",
        _ => "punctuation",
    }
}
