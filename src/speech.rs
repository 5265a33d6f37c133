use log::debug;
use pest::Parser;

use crate::eval::{CalcParser, Rule};
use crate::words::words_to_number;

// filler phrases removed before any matching, in this order
const FILLER_PHRASES: [&str; 4] = ["what's", "what is", "calculate", "okay"];

/// Best-effort translation of a recognized spoken phrase into a
/// two-operand arithmetic string.
///
/// `"twenty five plus three"` becomes `"25+3"`; a phrase that already
/// looks like `"3+2"` passes through with its multiply and divide
/// glyphs normalized to the display forms `x` and `÷`. Returns `None`
/// when no expression can be recognized; never panics.
pub fn parse_to_math_expression(spoken_text: &str) -> Option<String> {
    debug!("speech input: '{}'", spoken_text);

    let clean = clean_input(spoken_text);
    debug!("speech cleaned: '{}'", clean);

    let expr = extract_math_expression(&clean);
    debug!("speech result: {:?}", expr);

    expr
}

fn clean_input(input: &str) -> String {
    let mut text = input.to_lowercase();
    for filler in FILLER_PHRASES.iter() {
        text = text.replace(filler, "");
    }
    text.trim().to_string()
}

fn extract_math_expression(text: &str) -> Option<String> {
    // digits already present on both sides of an operator glyph:
    // keep the phrase as typed, only normalize the glyph forms
    if CalcParser::parse(Rule::spoken, text).is_ok() {
        return Some(text.replace('X', "x").replace('*', "x").replace('/', "÷"));
    }

    // one operator keyword, fixed priority
    if text.contains("plus") {
        compose_expression(text, &["plus"], '+')
    } else if text.contains("minus") {
        compose_expression(text, &["minus"], '-')
    } else if text.contains("times") || text.contains("multiply") {
        compose_expression(text, &["times", "multiply"], '*')
    } else if text.contains("divide") {
        compose_expression(text, &["divide"], '/')
    } else {
        None
    }
}

/// Splits the phrase on the operator keywords and converts both sides
/// to digit strings. Anything but exactly two convertible parts is a
/// failed normalization.
fn compose_expression(text: &str, keywords: &[&str], op: char) -> Option<String> {
    let parts = split_on_keywords(text, keywords);
    if parts.len() != 2 {
        return None;
    }
    let num1 = words_to_number(parts[0])?;
    let num2 = words_to_number(parts[1])?;
    Some(format!("{}{}{}", num1, op, num2))
}

// splits on every keyword occurrence, earliest match first; keyword
// list order breaks ties at the same position
fn split_on_keywords<'a>(text: &'a str, keywords: &[&str]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut rest = text;
    loop {
        let hit = keywords
            .iter()
            .filter_map(|k| rest.find(k).map(|pos| (pos, k.len())))
            .min_by_key(|(pos, _)| *pos);
        match hit {
            Some((pos, len)) => {
                parts.push(&rest[..pos]);
                rest = &rest[pos + len..];
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_phrases() {
        assert_eq!(
            parse_to_math_expression("twenty five plus three"),
            Some("25+3".to_string())
        );
        assert_eq!(
            parse_to_math_expression("what is ten minus four"),
            Some("10-4".to_string())
        );
        assert_eq!(
            parse_to_math_expression("five times five"),
            Some("5*5".to_string())
        );
        assert_eq!(
            parse_to_math_expression("six multiply seven"),
            Some("6*7".to_string())
        );
        assert_eq!(
            parse_to_math_expression("ten divide two"),
            Some("10/2".to_string())
        );
    }

    #[test]
    fn test_filler_stripping() {
        assert_eq!(
            parse_to_math_expression("What's twelve plus one"),
            Some("12+1".to_string())
        );
        assert_eq!(
            parse_to_math_expression("okay calculate nine minus two"),
            Some("9-2".to_string())
        );
    }

    #[test]
    fn test_direct_pattern_passthrough() {
        assert_eq!(parse_to_math_expression("3+2"), Some("3+2".to_string()));
        assert_eq!(parse_to_math_expression("3 + 2"), Some("3 + 2".to_string()));
        assert_eq!(parse_to_math_expression("4X2"), Some("4x2".to_string()));
        assert_eq!(parse_to_math_expression("4*2"), Some("4x2".to_string()));
        assert_eq!(parse_to_math_expression("8/2"), Some("8÷2".to_string()));
        assert_eq!(parse_to_math_expression("8÷2"), Some("8÷2".to_string()));
    }

    #[test]
    fn test_mixed_words_and_digits() {
        assert_eq!(
            parse_to_math_expression("25 plus three"),
            Some("25+3".to_string())
        );
        assert_eq!(
            parse_to_math_expression("forty nine divide 7"),
            Some("49/7".to_string())
        );
    }

    #[test]
    fn test_nothing_recognized() {
        assert_eq!(parse_to_math_expression("hello world"), None);
        assert_eq!(parse_to_math_expression(""), None);
        assert_eq!(parse_to_math_expression("what is"), None);
        // operand fails to convert, no partial result
        assert_eq!(parse_to_math_expression("banana plus three"), None);
        // keyword appears twice, the split is not two parts
        assert_eq!(parse_to_math_expression("one plus two plus three"), None);
    }

    #[test]
    fn test_keyword_priority() {
        // "plus" wins over "minus" regardless of position
        assert_eq!(
            parse_to_math_expression("nine minus two plus one"),
            None // left part "nine minus two" is not a number
        );
        assert_eq!(
            parse_to_math_expression("five times three"),
            Some("5*3".to_string())
        );
    }

    #[test]
    fn test_split_on_keywords() {
        assert_eq!(split_on_keywords("a plus b", &["plus"]), vec!["a ", " b"]);
        assert_eq!(
            split_on_keywords("a times b multiply c", &["times", "multiply"]),
            vec!["a ", " b ", " c"]
        );
        assert_eq!(split_on_keywords("no keyword", &["plus"]), vec!["no keyword"]);
    }
}
