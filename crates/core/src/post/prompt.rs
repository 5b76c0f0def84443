/// Builds the user prompt sent to the text generator for a new post.
///
/// An absent description renders as an empty context line.
pub fn generation_prompt(title: &str, description: Option<&str>) -> String {
    format!(
        "Write a detailed blog post about \"{title}\".\n\
         Description/Context: {description}\n\
         \n\
         The blog post should be well-structured with sections, engaging, and informative.\n\
         Use markdown formatting for headings and sections.\n\
         Include a brief introduction and conclusion.",
        description = description.unwrap_or_default(),
    )
}
