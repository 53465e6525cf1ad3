use crate::model::VideoMetadata;

/// The system instruction sent with every generation call.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// Build the user prompt asking the model to pull a recipe out of the
/// video's text. Captions are included only when present.
pub fn build_prompt(metadata: &VideoMetadata) -> String {
    let captions = match metadata.captions.as_deref() {
        Some(captions) if !captions.trim().is_empty() => format!("Captions: {}\n", captions),
        _ => String::new(),
    };

    format!(
        "Extract a recipe from the following video information:\n\
         Title: {}\n\
         Description: {}\n\
         {}\n\
         Please format the recipe as follows:\n\
         1. Title of the dish\n\
         2. List of ingredients with measurements\n\
         3. Step-by-step instructions\n\
         \n\
         If this doesn't appear to be a recipe video, please indicate that no recipe was found.",
        metadata.title, metadata.description, captions
    )
}
