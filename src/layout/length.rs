//! logos-based lexer for length text found in style values.
//!
//! Accepts a single `auto`, bare number, `px` length or percentage. Anything
//! else (other units, several tokens, keywords) is not a layout length.

use logos::Logos;

use crate::style::value::StyleValue;

/// Token produced by the length lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum LengthToken {
    /// `50%`, `-12.5%`
    #[regex(r"-?[0-9]+(\.[0-9]+)?%")]
    Percent,

    /// `16px`
    #[regex(r"-?[0-9]+(\.[0-9]+)?px")]
    Pixels,

    /// `16`, `0.5`
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("auto")]
    Auto,

    /// Any other word (units like `rem`, keywords like `inherit`).
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// A length a layout engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute length in points/pixels.
    Points(f32),
    /// Fraction of the parent, `0.5` for `50%`.
    Percent(f32),
    Auto,
}

/// Parse length text such as `"16px"`, `"50%"`, `"12"` or `"auto"`.
pub fn parse_length(input: &str) -> Option<Length> {
    let mut lexer = LengthToken::lexer(input);
    let token = lexer.next()?.ok()?;
    let text = lexer.slice();
    let length = match token {
        LengthToken::Percent => Length::Percent(text.trim_end_matches('%').parse::<f32>().ok()? / 100.0),
        LengthToken::Pixels => Length::Points(text.trim_end_matches("px").parse().ok()?),
        LengthToken::Number => Length::Points(text.parse().ok()?),
        LengthToken::Auto => Length::Auto,
        LengthToken::Ident => return None,
    };
    if lexer.next().is_some() {
        return None;
    }
    Some(length)
}

/// Interpret a style value as a layout length.
pub fn style_length(value: &StyleValue) -> Option<Length> {
    match value {
        StyleValue::Number(n) if n.is_finite() => Some(Length::Points(*n)),
        StyleValue::Text(text) => parse_length(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_lengths() {
        assert_eq!(parse_length("16"), Some(Length::Points(16.0)));
        assert_eq!(parse_length("16px"), Some(Length::Points(16.0)));
        assert_eq!(parse_length("-4px"), Some(Length::Points(-4.0)));
        assert_eq!(parse_length("50%"), Some(Length::Percent(0.5)));
        assert_eq!(parse_length("auto"), Some(Length::Auto));
        assert_eq!(parse_length("  auto  "), Some(Length::Auto));
    }

    #[test]
    fn rejects_other_units_and_sequences() {
        assert_eq!(parse_length("1.5rem"), None);
        assert_eq!(parse_length("inherit"), None);
        assert_eq!(parse_length("1px 2px"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("#fff"), None);
    }

    #[test]
    fn style_values() {
        assert_eq!(style_length(&StyleValue::Number(8.0)), Some(Length::Points(8.0)));
        assert_eq!(style_length(&StyleValue::from("25%")), Some(Length::Percent(0.25)));
        assert_eq!(style_length(&StyleValue::Number(f32::NAN)), None);
        assert_eq!(style_length(&StyleValue::Undefined), None);
    }
}
