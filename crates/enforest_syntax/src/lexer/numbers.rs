//! Number scanning.
//!
//! Every numeric literal becomes a [`TokenKind::Number`] holding an `f64`.

use super::Lexer;
use super::tokens::TokenKind;

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first character (`first`, a digit or `.`) is already consumed.
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        if first == '0' && matches!(self.peek(), Some('x') | Some('X')) {
            self.advance();
            self.scan_hex_number(start);
            return;
        }

        let mut value = String::from(first);

        // Integer part (or fraction, when the literal started with `.`)
        self.push_digits(&mut value);

        // Decimal part
        if first != '.' && self.peek() == Some('.') {
            value.push('.');
            self.advance();
            self.push_digits(&mut value);
        }

        // Exponent part
        if matches!(self.peek(), Some('e') | Some('E')) {
            value.push('e');
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                value.push(sign);
                self.advance();
            }
            let before = value.len();
            self.push_digits(&mut value);
            if value.len() == before {
                self.error(format!("missing exponent digits in `{}`", value), start);
                return;
            }
        }

        match value.parse::<f64>() {
            Ok(n) => self.add_token(TokenKind::Number(n), start),
            Err(_) => self.error(format!("invalid number literal `{}`", value), start),
        }
    }

    fn scan_hex_number(&mut self, start: usize) {
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_hexdigit() {
                digits.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match u64::from_str_radix(&digits, 16) {
            Ok(n) => self.add_token(TokenKind::Number(n as f64), start),
            Err(_) => self.error(format!("invalid hex literal `0x{}`", digits), start),
        }
    }

    fn push_digits(&mut self, value: &mut String) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                value.push(c);
                self.advance();
            } else {
                break;
            }
        }
    }
}
