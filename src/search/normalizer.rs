use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Unit abbreviations expanded to full words.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("tbsp", "tablespoon"),
    ("tsp", "teaspoon"),
    ("oz", "ounce"),
    ("lb", "pound"),
];

/// Preparation terms stripped from multi-word names.
const COOKING_TERMS: &[&str] = &[
    "minced", "diced", "chopped", "fresh", "ground", "boneless", "skinless",
];

/// Marketing/provenance descriptors stripped from multi-word names.
const DESCRIPTOR_PHRASES: &[&str] = &["extra virgin", "cold pressed", "organic", "from italy"];

/// Canonicalizes a raw ingredient phrase into a comparable key.
///
/// The rewrite steps are order-dependent and run as a literal pipeline;
/// reordering them changes output and breaks idempotence. The lookup
/// tables are plain data on the struct so they can be swapped out in
/// tests or extended without touching the pipeline.
#[derive(Debug, Clone)]
pub struct IngredientNormalizer {
    abbreviations: HashMap<String, String>,
    cooking_terms: Vec<String>,
    descriptor_phrases: Vec<String>,
}

impl Default for IngredientNormalizer {
    fn default() -> Self {
        Self::new(
            ABBREVIATIONS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            COOKING_TERMS.iter().map(|t| (*t).to_string()).collect(),
            DESCRIPTOR_PHRASES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        )
    }
}

impl IngredientNormalizer {
    pub fn new(
        abbreviations: HashMap<String, String>,
        cooking_terms: Vec<String>,
        descriptor_phrases: Vec<String>,
    ) -> Self {
        Self {
            abbreviations,
            cooking_terms,
            descriptor_phrases,
        }
    }

    /// Reduce `raw` to its canonical comparable form. Pure and
    /// deterministic; empty or whitespace-only input yields `""`.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = raw.trim().to_lowercase();
        if text.is_empty() {
            return String::new();
        }

        // Unwrap parenthetical content into separate words rather than
        // discarding it: "tomato (fresh)" keeps the word "fresh".
        text = text.replace(['(', ')'], " ");

        // Commas and ampersands act as word separators.
        text = text.replace([',', '&'], " ");
        text = collapse_whitespace(&text);

        // Depluralize word by word before table lookups, so "tbsps"
        // resolves through "tbsp".
        text = map_words(&text, depluralize);

        // Expand unit abbreviations as whole words.
        text = map_words(&text, |word| {
            self.abbreviations
                .get(word)
                .cloned()
                .unwrap_or_else(|| word.to_string())
        });

        // Strip preparation terms and descriptors. Each removal is
        // checked against the string as it exists at that step, and a
        // term is only stripped while more than one word remains.
        for term in &self.cooking_terms {
            text = strip_phrase_guarded(&text, term);
        }
        for phrase in &self.descriptor_phrases {
            text = strip_phrase_guarded(&text, phrase);
        }

        // Drop quantity leftovers: bare numbers, percentages, fractions.
        text = text
            .split_whitespace()
            .filter(|token| !is_numeric_token(token))
            .collect::<Vec<_>>()
            .join(" ");

        // Fold accented Latin characters to their base form.
        text = text
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>();

        collapse_whitespace(&text)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn map_words(text: &str, f: impl Fn(&str) -> String) -> String {
    text.split_whitespace()
        .map(f)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Suffix-rule depluralization. Rules apply in order, first match wins.
fn depluralize(word: &str) -> String {
    let len = word.chars().count();
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ves") {
        return format!("{stem}f");
    }
    if len > 3 {
        if let Some(stem) = word.strip_suffix("es") {
            return stem.to_string();
        }
    }
    // "-ss" words (boneless, glass) are not plurals; stripping them
    // would also break idempotence.
    if len > 2 && !word.ends_with("ss") {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Remove `phrase` as a whole-word sequence, but only while the string
/// holds more than one word. Single-word names are never emptied by
/// term stripping.
fn strip_phrase_guarded(text: &str, phrase: &str) -> String {
    if text.split_whitespace().count() <= 1 {
        return text.to_string();
    }
    let padded = format!(" {text} ");
    let needle = format!(" {phrase} ");
    if !padded.contains(&needle) {
        return text.to_string();
    }
    collapse_whitespace(&padded.replace(&needle, " "))
}

/// Tokens that are purely quantities: digits with optional `%`, `.`, `/`.
fn is_numeric_token(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '%' | '.' | '/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> IngredientNormalizer {
        IngredientNormalizer::default()
    }

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalizer().normalize("  Olive Oil  "), "olive oil");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalizer().normalize(""), "");
        assert_eq!(normalizer().normalize("   "), "");
    }

    #[test]
    fn test_parentheses_unwrap_to_words() {
        // Parenthetical content is kept, then "fresh" is stripped as a
        // cooking term because two words remain at that step.
        assert_eq!(normalizer().normalize("Tomato (fresh)"), "tomato");
        assert_eq!(
            normalizer().normalize("Peppers (red and green)"),
            "pepper red and green"
        );
    }

    #[test]
    fn test_comma_and_ampersand_separate_words() {
        // "minced" is stripped: at the removal step the string is
        // "garlic minced", two words.
        assert_eq!(normalizer().normalize("Garlic, minced"), "garlic");
        assert_eq!(normalizer().normalize("salt & pepper"), "salt pepper");
    }

    #[test]
    fn test_depluralization_rules() {
        assert_eq!(normalizer().normalize("tomatoes"), "tomato");
        assert_eq!(normalizer().normalize("berries"), "berry");
        assert_eq!(normalizer().normalize("leaves"), "leaf");
        assert_eq!(normalizer().normalize("onions"), "onion");
        // Two-letter words are below the -s rule floor.
        assert_eq!(normalizer().normalize("as"), "as");
    }

    #[test]
    fn test_abbreviation_expansion() {
        assert_eq!(normalizer().normalize("olive oil tbsp"), "olive oil tablespoon");
        assert_eq!(normalizer().normalize("tsp salt"), "teaspoon salt");
        // Depluralization feeds the abbreviation table.
        assert_eq!(normalizer().normalize("ozs butter"), "ounce butter");
    }

    #[test]
    fn test_cooking_terms_stripped_with_one_word_floor() {
        assert_eq!(normalizer().normalize("chopped onions"), "onion");
        assert_eq!(
            normalizer().normalize("boneless skinless chicken breast"),
            "chicken breast"
        );
        // A lone cooking term is never stripped down to nothing.
        assert_eq!(normalizer().normalize("minced"), "minced");
    }

    #[test]
    fn test_descriptor_phrases_stripped() {
        assert_eq!(
            normalizer().normalize("extra virgin olive oil"),
            "olive oil"
        );
        assert_eq!(normalizer().normalize("organic carrots"), "carrot");
        assert_eq!(
            normalizer().normalize("cold pressed sunflower oil from italy"),
            "sunflower oil"
        );
    }

    #[test]
    fn test_numeric_tokens_stripped() {
        assert_eq!(normalizer().normalize("2 eggs"), "egg");
        assert_eq!(normalizer().normalize("milk 2%"), "milk");
        assert_eq!(normalizer().normalize("1/2 onion"), "onion");
    }

    #[test]
    fn test_diacritics_folded() {
        assert_eq!(normalizer().normalize("jalapeño"), "jalapeno");
        assert_eq!(normalizer().normalize("crème fraîche"), "creme fraiche");
    }

    #[test]
    fn test_idempotence() {
        let n = normalizer();
        for input in [
            "Tomato (fresh)",
            "Garlic, minced",
            "extra virgin olive oil",
            "2 tbsp soy sauce",
            "jalapeños",
            "boneless skinless chicken breasts",
            "",
        ] {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_custom_tables() {
        let n = IngredientNormalizer::new(
            [("c".to_string(), "cup".to_string())].into_iter().collect(),
            vec!["shredded".to_string()],
            Vec::new(),
        );
        assert_eq!(n.normalize("shredded cheese c"), "cheese cup");
    }
}
