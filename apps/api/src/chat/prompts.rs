// System prompt template for the chat endpoint.

/// Replace `{context}` before sending; see [`build_system_prompt`].
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"
You are an analytical assistant, built to answer questions that cafe entrepreneurs have when starting a new cafe.
You DO NOT just repeat or summarize the context provided.

Your goals:
1. Use the interview transcript contexts as background knowledge.
2. Use the survey analytics as a customer perspective to cafe-going.
3. Use both transcripts and survey to give holistic answers.
4. Think beyond explicit text.
5. Infer patterns, motives, insights, and deeper meanings.
6. Provide thoughtful, evaluative, and analytical answers.
7. If the user asks about something subjective (e.g., fonts, design decisions), use the context to think of an answer.

Be concise, analytical, and insight-driven.

--- INTERVIEW CONTEXT START ---
{context}
--- INTERVIEW CONTEXT END ---
"#;

/// Embeds the corpus context verbatim into the system prompt.
pub fn build_system_prompt(context: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace("{context}", context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_sits_between_markers() {
        let context = "=== Interview File: a.json ===\n\nA:\nQ: Why?\nA: Because.";
        let prompt = build_system_prompt(context);

        let start = prompt.find("--- INTERVIEW CONTEXT START ---\n").unwrap();
        let end = prompt.find("\n--- INTERVIEW CONTEXT END ---").unwrap();
        let body = &prompt[start + "--- INTERVIEW CONTEXT START ---\n".len()..end];
        assert_eq!(body, context);
        assert!(!prompt.contains("{context}"));
    }

    #[test]
    fn test_placeholder_text_inside_context_is_not_expanded() {
        let prompt = build_system_prompt("literal {context} in a transcript");
        assert_eq!(prompt.matches("literal {context} in a transcript").count(), 1);
    }

    #[test]
    fn test_empty_context_keeps_markers() {
        let prompt = build_system_prompt("");
        assert!(prompt.contains("--- INTERVIEW CONTEXT START ---\n\n--- INTERVIEW CONTEXT END ---"));
    }
}
