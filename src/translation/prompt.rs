// Prompt construction - fixed instructional template around a code fragment

/// System instruction sent with every request. Fixed: prompt tuning is out
/// of scope, and a stable template keeps identical fragments cacheable.
const SYSTEM_INSTRUCTION: &str = "You translate source code into plain natural-language pseudocode. \
Describe what the code does step by step, in numbered steps, using everyday words. \
Do not output code, code fences, or commentary about the code's quality. \
Output only the pseudocode.";

/// Render the user-facing half of the request for a fragment.
/// Pure function: the full outbound payload is this text plus
/// `system_instruction()`, so request construction is testable offline.
pub fn render_user_prompt(fragment: &str) -> String {
    format!("Translate this code into pseudocode:\n\n{}", fragment)
}

pub fn system_instruction() -> &'static str {
    SYSTEM_INSTRUCTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_fragment_verbatim() {
        let prompt = render_user_prompt("let total = a + b;");
        assert!(prompt.contains("let total = a + b;"));
    }

    #[test]
    fn test_prompt_contains_instruction() {
        let prompt = render_user_prompt("x = 1");
        assert!(prompt.starts_with("Translate this code into pseudocode:"));
    }

    #[test]
    fn test_same_fragment_same_prompt() {
        assert_eq!(render_user_prompt("x = 1"), render_user_prompt("x = 1"));
    }

    #[test]
    fn test_system_instruction_asks_for_pseudocode() {
        assert!(system_instruction().contains("pseudocode"));
    }
}
