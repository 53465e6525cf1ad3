use serde::{Deserialize, Serialize};

/// Text describing a video, as returned by a platform fetcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub captions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// URL of the video the recipe was extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Recipe {
    /// Render the recipe as plain text suitable for pasting elsewhere.
    ///
    /// Ingredients are bulleted with `- `, instructions are numbered from 1,
    /// and the source URL closes the text.
    pub fn to_plain_text(&self) -> String {
        let ingredients = self
            .ingredients
            .iter()
            .map(|i| format!("- {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let instructions = self
            .instructions
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {}", index + 1, step))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\nIngredients:\n{}\n\nInstructions:\n{}\n\nSource: {}",
            self.title,
            ingredients,
            instructions,
            self.source.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake() -> Recipe {
        Recipe {
            title: "Cake".to_string(),
            ingredients: vec!["flour".to_string(), "sugar".to_string()],
            instructions: vec!["Mix".to_string(), "Bake".to_string()],
            source: Some("https://youtu.be/abc".to_string()),
        }
    }

    #[test]
    fn test_to_plain_text() {
        assert_eq!(
            cake().to_plain_text(),
            "Cake\n\nIngredients:\n- flour\n- sugar\n\nInstructions:\n1. Mix\n2. Bake\n\nSource: https://youtu.be/abc"
        );
    }

    #[test]
    fn test_to_plain_text_without_source() {
        let recipe = Recipe {
            source: None,
            ..cake()
        };
        assert!(recipe.to_plain_text().ends_with("2. Bake\n\nSource:"));
    }

    #[test]
    fn test_serialization_field_names() {
        let json = serde_json::to_value(cake()).unwrap();
        assert_eq!(json["title"], "Cake");
        assert_eq!(json["ingredients"][1], "sugar");
        assert_eq!(json["instructions"][0], "Mix");
        assert_eq!(json["source"], "https://youtu.be/abc");

        let without_source = serde_json::to_value(Recipe::default()).unwrap();
        assert!(without_source.get("source").is_none());
    }
}
