/// Build the chat-formatted prompt for a single quote completion.
///
/// The instruction is wrapped in the Llama 3.2 chat template by hand (a
/// user turn followed by an open assistant turn) because the llama.cpp
/// `/completion` endpoint takes raw prompt text.
pub fn build_quote_prompt(theme: &str) -> String {
    let user_message = format!(
        "Generate a unique and inspiring quote about {theme} (maximum 20 words) \
without punctuation or quotation marks. Only return the quote itself."
    );

    format!(
        "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\n\
{user_message}<|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n"
    )
}
