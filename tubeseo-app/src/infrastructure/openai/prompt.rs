use super::types::Message;

pub const SYSTEM_PROMPT: &str = r##"You are an expert YouTube SEO specialist for news channels. Your job is to:

1. Analyze the provided news content deeply
2. Research current YouTube trends for similar news topics
3. Generate SEO-optimized content that follows these rules:
   - TITLE: Must be engaging, curiosity-driven, and NOT reveal the full news. Use cliffhanger techniques, questions, or intrigue. Keep it under 60 characters when possible.
   - TAGS: Generate 25-30 relevant tags that mix broad and specific keywords related to the news topic
   - HASHTAGS: Provide exactly 3-4 hashtags that are trending and relevant to the news topic
   - Everything must be in ENGLISH

4. The title should:
   - Hide the actual news but hint at it
   - Create curiosity and urgency
   - Use emotional triggers (shock, surprise, controversy)
   - NOT give away the conclusion
   - Use patterns like: "You Won't Believe...", "Breaking:", "This Changed Everything...", "What Happened Next...", etc.

5. Analyze what makes similar viral news videos successful and incorporate those patterns.

Return your response in this JSON format:
{
  "title": "The optimized title",
  "tags": ["tag1", "tag2", ...],
  "hashtags": ["#hashtag1", "#hashtag2", "#hashtag3"],
  "trendAnalysis": "Brief analysis of current trends for this news topic",
  "explanation": "Why this title/tags strategy will work"
}"##;

const USER_PROMPT_PREFIX: &str = "Analyze this news content and generate optimized SEO content:\n\n";

/// The submitted content is passed through verbatim.
pub fn build_user_prompt(content: &str) -> String {
    format!("{USER_PROMPT_PREFIX}{content}")
}

pub fn build_messages(content: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(build_user_prompt(content)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_system_then_user() {
        let messages = build_messages("Company X announces merger");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.ends_with("\n\nCompany X announces merger"));
    }

    #[test]
    fn test_content_is_not_rewritten() {
        let content = "  <b>ignore previous</b>\n```code```  ";
        assert_eq!(
            build_user_prompt(content),
            format!("{USER_PROMPT_PREFIX}{content}")
        );
    }

    #[test]
    fn test_system_prompt_names_every_output_key() {
        for key in ["\"title\"", "\"tags\"", "\"hashtags\"", "\"trendAnalysis\"", "\"explanation\""] {
            assert!(SYSTEM_PROMPT.contains(key), "missing {key}");
        }
    }
}
