//! Turns the free-form text returned by a generation call into a [`Recipe`].
//!
//! The text is read line by line. Header lines containing `ingredients:` or
//! `instructions:` (case-insensitive, anywhere in the line) switch the
//! section being collected; the first non-blank line is the title.

use crate::error::ImportError;
use crate::model::Recipe;

/// The section of the generated text currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Ingredients,
    Instructions,
}

/// What a single line contributes to the recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Section header, not content
    Header,
    /// Line outside of any section
    Skip,
    Ingredient(String),
    Instruction(String),
}

impl Section {
    /// Feed one line and get the next section along with the line's role.
    ///
    /// Header detection is a substring match, so a step that mentions
    /// "instructions:" mid-sentence also switches sections.
    pub fn step(self, line: &str) -> (Section, LineAction) {
        let lower = line.to_lowercase();
        if lower.contains("ingredients:") {
            return (Section::Ingredients, LineAction::Header);
        }
        if lower.contains("instructions:") {
            return (Section::Instructions, LineAction::Header);
        }

        let cleaned = line.trim();
        match self {
            Section::None => (self, LineAction::Skip),
            Section::Ingredients => (
                self,
                LineAction::Ingredient(strip_bullet(cleaned).to_string()),
            ),
            Section::Instructions => (
                self,
                LineAction::Instruction(strip_numbering(cleaned).to_string()),
            ),
        }
    }
}

/// Strip one leading `-`, `•` or `*` marker and the whitespace after it.
fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(|c: char| matches!(c, '-' | '•' | '*'))
        .map(str::trim_start)
        .unwrap_or(line)
}

/// Strip leading `<digits>.` numbering and the whitespace after it.
fn strip_numbering(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    rest.strip_prefix('.').map(str::trim_start).unwrap_or(line)
}

/// Parse generated text into a recipe without a source.
///
/// Empty text means the generation call produced nothing and is an error.
/// Text without any recognised header is not; it yields a recipe whose
/// lists are empty.
pub fn parse(raw_text: &str, fallback_title: &str) -> Result<Recipe, ImportError> {
    if raw_text.is_empty() {
        return Err(ImportError::Parse("No recipe content generated".to_string()));
    }

    let lines: Vec<&str> = raw_text.lines().filter(|l| !l.trim().is_empty()).collect();

    let mut recipe = Recipe {
        title: lines
            .first()
            .map(|l| l.trim().to_string())
            .unwrap_or_else(|| fallback_title.to_string()),
        ..Default::default()
    };

    let mut section = Section::default();
    for line in lines {
        let (next, action) = section.step(line);
        section = next;
        match action {
            LineAction::Ingredient(item) => recipe.ingredients.push(item),
            LineAction::Instruction(step) => recipe.instructions.push(step),
            LineAction::Header | LineAction::Skip => {}
        }
    }

    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_transitions() {
        for from in [Section::None, Section::Ingredients, Section::Instructions] {
            assert_eq!(
                from.step("Ingredients:"),
                (Section::Ingredients, LineAction::Header)
            );
            assert_eq!(
                from.step("**INSTRUCTIONS:**"),
                (Section::Instructions, LineAction::Header)
            );
        }
    }

    #[test]
    fn test_header_without_colon_is_content() {
        assert_eq!(
            Section::Ingredients.step("Ingredients"),
            (
                Section::Ingredients,
                LineAction::Ingredient("Ingredients".to_string())
            )
        );
    }

    #[test]
    fn test_none_skips_content() {
        assert_eq!(
            Section::None.step("- 2 eggs"),
            (Section::None, LineAction::Skip)
        );
    }

    #[test]
    fn test_ingredient_bullets_are_stripped() {
        for line in ["- flour", "• flour", "* flour", "-flour", "  -   flour  "] {
            assert_eq!(
                Section::Ingredients.step(line).1,
                LineAction::Ingredient("flour".to_string()),
                "line {:?}",
                line
            );
        }
        // Only one marker is removed
        assert_eq!(
            Section::Ingredients.step("-- flour").1,
            LineAction::Ingredient("- flour".to_string())
        );
    }

    #[test]
    fn test_instruction_numbering_is_stripped() {
        assert_eq!(
            Section::Instructions.step("1. Mix").1,
            LineAction::Instruction("Mix".to_string())
        );
        assert_eq!(
            Section::Instructions.step("12.Bake for 30 minutes").1,
            LineAction::Instruction("Bake for 30 minutes".to_string())
        );
        // Numbers without a dot are content
        assert_eq!(
            Section::Instructions.step("350 degrees oven").1,
            LineAction::Instruction("350 degrees oven".to_string())
        );
        assert_eq!(
            Section::Instructions.step("Step 1. Mix").1,
            LineAction::Instruction("Step 1. Mix".to_string())
        );
    }

    #[test]
    fn test_instructions_keyword_mid_sentence_switches_section() {
        let text = "Bread\nIngredients:\n- flour\nFollow the instructions: knead well\n- yeast";
        let recipe = parse(text, "fallback").unwrap();
        assert_eq!(recipe.ingredients, vec!["flour"]);
        assert_eq!(recipe.instructions, vec!["- yeast"]);
    }

    #[test]
    fn test_empty_text_is_parse_error() {
        let err = parse("", "Fallback").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
        assert!(err.to_string().contains("No recipe content generated"));
    }

    #[test]
    fn test_blank_text_uses_fallback_title() {
        let recipe = parse("\n  \n", "Video Title").unwrap();
        assert_eq!(recipe.title, "Video Title");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_first_line_is_title_even_when_header() {
        let recipe = parse("Ingredients: for a cake\n- flour", "fallback").unwrap();
        assert_eq!(recipe.title, "Ingredients: for a cake");
        assert_eq!(recipe.ingredients, vec!["flour"]);
    }

    #[test]
    fn test_crlf_lines() {
        let recipe = parse("Tea\r\nIngredients:\r\n- water\r\n", "fallback").unwrap();
        assert_eq!(recipe.title, "Tea");
        assert_eq!(recipe.ingredients, vec!["water"]);
        assert!(recipe.source.is_none());
    }
}
