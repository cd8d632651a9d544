//! Prompt construction for commit message generation

/// Instruction placed in front of the caller's diff
pub const COMMIT_INSTRUCTION: &str =
    "Generate a concise Git commit message for the following code changes:";

/// Build the completion prompt: instruction, newline, then the diff as given.
/// The diff is not escaped or sanitized.
pub fn build_commit_prompt(diff: &str) -> String {
    format!("{}\n{}", COMMIT_INSTRUCTION, diff)
}
