// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Literal representations following Python's `repr` rules.

use std::fmt::Write;

use crate::nodes::{ConstantValue, Number};

/// Source text that evaluates to positive infinity.
pub(crate) const INFINITY: &str = "1e309";

fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')
}

fn push_escaped_char(out: &mut String, c: char) {
    let code = c as u32;
    let _ = if code <= 0xff {
        write!(out, "\\x{:02x}", code)
    } else if code <= 0xffff {
        write!(out, "\\u{:04x}", code)
    } else {
        write!(out, "\\U{:08x}", code)
    };
}

/// Escapes `s` for use between `quote` characters.
pub(crate) fn escape_str_body(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if needs_escape(c) => push_escaped_char(&mut out, c),
            c => out.push(c),
        }
    }
    out
}

/// `repr()` of a text string: single quotes unless the text contains a
/// single quote and no double quote.
pub fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    format!("{quote}{}{quote}", escape_str_body(s, quote))
}

/// `repr()` of a byte string.
pub fn bytes_repr(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out.push(quote as char);
    out
}

/// Triple-quoted docstring literal. Newlines and tabs stay literal;
/// quotes are escaped only where they would end the literal.
pub fn docstring_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 6);
    out.push_str("\"\"\"");
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '"' if matches!(chars.peek(), None | Some('"')) => out.push_str("\\\""),
            '\n' | '\t' => out.push(c),
            c if needs_escape(c) => push_escaped_char(&mut out, c),
            c => out.push(c),
        }
    }
    out.push_str("\"\"\"");
    out
}

/// `repr()` of a float: shortest round-trip digits, positional notation for
/// decimal exponents in `-4..16`, scientific notation otherwise.
///
/// Infinities render as overflowing literals; NaN as their difference.
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return format!("({INFINITY} - {INFINITY})");
    }
    if value.is_infinite() {
        return if value < 0.0 {
            format!("-{INFINITY}")
        } else {
            INFINITY.to_string()
        };
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let body = if exp >= 0 {
        let int_len = (exp + 1) as usize;
        if digits.len() <= int_len {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    } else {
        format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
    };
    format!("{sign}{body}")
}

/// Float repr without a redundant `.0`, as used for complex components.
fn complex_part(value: f64) -> String {
    let repr = float_repr(value);
    match repr.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => repr,
    }
}

/// `repr()` of a complex number.
///
/// A NaN imaginary part has no literal form; it is written as the difference
/// of two infinite imaginary literals, which leaves the real part intact.
pub fn complex_repr(real: f64, imag: f64) -> String {
    let real_is_zero = real == 0.0 && real.is_sign_positive();
    if imag.is_nan() {
        let nan_imag = format!("({INFINITY}j - {INFINITY}j)");
        return if real_is_zero {
            nan_imag
        } else {
            format!("({} + {})", complex_part(real), nan_imag)
        };
    }
    if real_is_zero {
        return format!("{}j", complex_part(imag));
    }
    let imag_text = complex_part(imag);
    match imag_text.strip_prefix('-') {
        Some(abs) => format!("({}-{}j)", complex_part(real), abs),
        None => format!("({}+{}j)", complex_part(real), imag_text),
    }
}

/// Wraps a literal beginning with a minus sign in parentheses.
fn guard_sign(text: String) -> String {
    if text.starts_with('-') {
        format!("({})", text)
    } else {
        text
    }
}

/// Source text of a legacy numeric literal.
pub fn number_repr(n: &Number) -> String {
    match n {
        Number::Int(i) => guard_sign(i.to_string()),
        Number::Float(f) => guard_sign(float_repr(*f)),
        Number::Complex { real, imag } => guard_sign(complex_repr(*real, *imag)),
    }
}

/// Source text of a `Constant` payload.
pub fn constant_repr(value: &ConstantValue) -> String {
    match value {
        ConstantValue::None => "None".to_string(),
        ConstantValue::Bool(true) => "True".to_string(),
        ConstantValue::Bool(false) => "False".to_string(),
        ConstantValue::Int(i) => guard_sign(i.to_string()),
        ConstantValue::Float(f) => guard_sign(float_repr(*f)),
        ConstantValue::Complex { real, imag } => guard_sign(complex_repr(*real, *imag)),
        ConstantValue::Str(s) => str_repr(s),
        ConstantValue::Bytes(b) => bytes_repr(b),
        ConstantValue::Ellipsis => "...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_str_repr_quote_choice() {
        assert_eq!(str_repr("frog"), "'frog'");
        assert_eq!(str_repr("Let's go"), "\"Let's go\"");
        assert_eq!(str_repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(str_repr("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_str_repr_escapes() {
        assert_eq!(str_repr("a\nb\tc\\"), "'a\\nb\\tc\\\\'");
        assert_eq!(str_repr("\u{0}"), "'\\x00'");
        assert_eq!(str_repr("\u{85}"), "'\\x85'");
        assert_eq!(str_repr("\u{2028}"), "'\\u2028'");
        assert_eq!(str_repr("café"), "'café'");
    }

    #[test]
    fn test_bytes_repr() {
        assert_eq!(bytes_repr(b"abc"), "b'abc'");
        assert_eq!(bytes_repr(b"it's"), "b\"it's\"");
        assert_eq!(bytes_repr(&[0, 255, b'\n']), "b'\\x00\\xff\\n'");
    }

    #[test]
    fn test_docstring_literal() {
        assert_eq!(docstring_literal("Does things."), "\"\"\"Does things.\"\"\"");
        assert_eq!(docstring_literal("one\n  two"), "\"\"\"one\n  two\"\"\"");
        assert_eq!(
            docstring_literal("say \"\"\"hi\"\"\""),
            "\"\"\"say \\\"\\\"\"hi\\\"\\\"\\\"\"\"\""
        );
        assert_eq!(docstring_literal("a\\b"), "\"\"\"a\\\\b\"\"\"");
    }

    #[test]
    fn test_float_repr_positional() {
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(-0.0), "-0.0");
        assert_eq!(float_repr(1.0), "1.0");
        assert_eq!(float_repr(1.5), "1.5");
        assert_eq!(float_repr(0.1), "0.1");
        assert_eq!(float_repr(123.456), "123.456");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_float_repr_scientific() {
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(0.00001), "1e-05");
        assert_eq!(float_repr(1.5e-7), "1.5e-07");
        assert_eq!(float_repr(2.5e100), "2.5e+100");
    }

    #[test]
    fn test_float_repr_special() {
        assert_eq!(float_repr(f64::INFINITY), "1e309");
        assert_eq!(float_repr(f64::NEG_INFINITY), "-1e309");
        assert_eq!(float_repr(f64::NAN), "(1e309 - 1e309)");
    }

    #[test]
    fn test_complex_repr() {
        assert_eq!(complex_repr(0.0, 2.0), "2j");
        assert_eq!(complex_repr(0.0, 1.5), "1.5j");
        assert_eq!(complex_repr(1.0, 2.0), "(1+2j)");
        assert_eq!(complex_repr(1.0, -2.0), "(1-2j)");
        assert_eq!(complex_repr(1.0, f64::INFINITY), "(1+1e309j)");
    }

    #[test]
    fn test_complex_repr_nan_imaginary() {
        assert_eq!(complex_repr(1.0, f64::NAN), "(1 + (1e309j - 1e309j))");
        assert_eq!(complex_repr(0.0, f64::NAN), "(1e309j - 1e309j)");
        assert_eq!(complex_repr(-2.5, f64::NAN), "(-2.5 + (1e309j - 1e309j))");
        assert_eq!(
            number_repr(&Number::Complex {
                real: -1.0,
                imag: f64::NAN
            }),
            "(-1 + (1e309j - 1e309j))"
        );
    }

    #[test]
    fn test_negative_numbers_are_parenthesized() {
        assert_eq!(number_repr(&Number::int(-5)), "(-5)");
        assert_eq!(number_repr(&Number::int(5)), "5");
        assert_eq!(number_repr(&Number::Float(-0.5)), "(-0.5)");
        assert_eq!(constant_repr(&ConstantValue::Float(f64::NEG_INFINITY)), "(-1e309)");
    }

    #[test]
    fn test_int_repr_has_no_size_limit() {
        let big: BigInt = "-340282366920938463463374607431768211457".parse().unwrap();
        assert_eq!(
            constant_repr(&ConstantValue::Int(big)),
            "(-340282366920938463463374607431768211457)"
        );
        assert_eq!(
            number_repr(&Number::int(u64::MAX)),
            "18446744073709551615"
        );
    }

    #[test]
    fn test_constant_repr() {
        assert_eq!(constant_repr(&ConstantValue::None), "None");
        assert_eq!(constant_repr(&ConstantValue::Bool(true)), "True");
        assert_eq!(constant_repr(&ConstantValue::Ellipsis), "...");
        assert_eq!(constant_repr(&ConstantValue::Str("x".into())), "'x'");
        assert_eq!(constant_repr(&ConstantValue::Bytes(b"x".to_vec())), "b'x'");
    }
}
