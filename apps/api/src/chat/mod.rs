// Chat endpoint: one stateless question/answer round trip against the
// completion client, with the corpus context embedded in the system prompt.

pub mod handlers;
pub mod prompts;
