//! Prompt construction for the AI project summary.

/// Returned instead of calling the text generator when there are no projects.
pub const NO_PROJECTS_MESSAGE: &str = "There are no projects to analyze";

/// Instruction placed before the numbered project list.
pub const SUMMARY_INSTRUCTION: &str = "Analyze the following projects and write a general summary \
of their descriptions, highlighting the main themes and common goals:";

/// Render `(name, description)` pairs as `1. name: description` lines.
pub fn numbered_listing<'a, I>(projects: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    projects
        .into_iter()
        .enumerate()
        .map(|(i, (name, description))| format!("{}. {name}: {description}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full prompt sent to the text generator.
///
/// Returns `None` when there is nothing to summarize.
pub fn build_summary_prompt<'a, I>(projects: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let listing = numbered_listing(projects);
    if listing.is_empty() {
        return None;
    }
    Some(format!("{SUMMARY_INSTRUCTION}\n{listing}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_numbered_from_one() {
        let listing = numbered_listing([("Alpha", "first"), ("Beta", "second")]);
        assert_eq!(listing, "1. Alpha: first\n2. Beta: second");
    }

    #[test]
    fn empty_input_builds_no_prompt() {
        let empty: Vec<(&str, &str)> = Vec::new();
        assert!(build_summary_prompt(empty).is_none());
    }

    #[test]
    fn prompt_starts_with_instruction() {
        let prompt = build_summary_prompt([("Alpha", "first")]).unwrap();
        assert!(prompt.starts_with(SUMMARY_INSTRUCTION));
        assert!(prompt.contains("\n1. Alpha: first\n"));
    }
}
