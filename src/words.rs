use lazy_static::lazy_static;

lazy_static! {
    /// English number words with their digit-string equivalents. Exact
    /// matches only; compound forms are handled separately.
    static ref NUMBER_WORDS: Vec<(&'static str, &'static str)> = vec![
        ("zero", "0"),
        ("one", "1"),
        ("two", "2"),
        ("three", "3"),
        ("four", "4"),
        ("five", "5"),
        ("six", "6"),
        ("seven", "7"),
        ("eight", "8"),
        ("nine", "9"),
        ("ten", "10"),
        ("eleven", "11"),
        ("twelve", "12"),
        ("thirteen", "13"),
        ("fourteen", "14"),
        ("fifteen", "15"),
        ("sixteen", "16"),
        ("seventeen", "17"),
        ("eighteen", "18"),
        ("nineteen", "19"),
        ("twenty", "20"),
        ("thirty", "30"),
        ("forty", "40"),
        ("fifty", "50"),
        ("sixty", "60"),
        ("seventy", "70"),
        ("eighty", "80"),
        ("ninety", "90"),
        ("hundred", "100"),
    ];
}

const UNIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

// compound recognition covers twenty-one through fifty-nine
const COMPOUND_TENS: [(&str, u32); 4] = [("twenty", 20), ("thirty", 30), ("forty", 40), ("fifty", 50)];

/// Converts a spoken operand to its digit string: `"five"` to `"5"`,
/// `"twenty five"` to `"25"`. Literal digit strings pass through
/// unchanged. Returns `None` when the phrase is not recognized.
pub fn words_to_number(words: &str) -> Option<String> {
    let clean = words.trim().to_lowercase();

    for (word, digits) in NUMBER_WORDS.iter() {
        if clean == *word {
            return Some((*digits).to_string());
        }
    }

    compound_to_number(&clean)
}

/// Handles "twenty five", "thirty two", and the like by substring
/// containment. The first tens word found in the phrase commits the
/// lookup to that decade.
fn compound_to_number(words: &str) -> Option<String> {
    for (tens_word, tens_value) in COMPOUND_TENS.iter() {
        if !words.contains(tens_word) {
            continue;
        }
        for (i, unit) in UNIT_WORDS.iter().enumerate() {
            let phrase = format!("{} {}", tens_word, unit);
            if words.contains(&phrase) {
                return Some((tens_value + i as u32 + 1).to_string());
            }
        }
        if words == *tens_word {
            return Some(tens_value.to_string());
        }
        return None;
    }

    if !words.is_empty() && words.chars().all(|c| c.is_ascii_digit()) {
        return Some(words.to_string());
    }

    None
}
