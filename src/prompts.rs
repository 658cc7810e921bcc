pub const COURSE_SYSTEM: &str = include_str!("../data/prompts/course_system.txt");
pub const COURSE_CLOSING: &str = include_str!("../data/prompts/course_closing.txt");

use crate::models::GenerationRequest;

/// Render the user prompt for a generation request.
///
/// Sections appear in a fixed order and are joined by blank lines; sections
/// whose source field is empty are omitted entirely. Same request, same
/// output.
pub fn course_user_prompt(request: &GenerationRequest) -> String {
    let mut sections = vec![format!("Course Title: {}", request.title)];

    if !request.prompt.trim().is_empty() {
        sections.push(format!(
            "Course Description/Requirements: {}",
            request.prompt
        ));
    }

    if !request.files.is_empty() {
        let names: Vec<&str> = request.files.iter().map(|f| f.name.as_str()).collect();
        sections.push(format!("Uploaded Files: {}", names.join(", ")));
    }

    sections.push(COURSE_CLOSING.trim_end().to_string());
    sections.join("\n\n")
}
