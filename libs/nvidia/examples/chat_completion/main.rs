use nvidia::models::{
    self,
    chat_completion::{
        ChatCompletion, ChatCompletionRequest, Message, LLAMA_3_1_70B_INSTRUCT,
    },
};
use util::{env_or, env_var, load_env};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env()?;

    let token = env_var("NVIDIA_API_KEY")?;
    let base_url = env_or("NVIDIA_BASE_URL", models::DEFAULT_BASE_URL);

    let models = models::Models::new(&base_url, &token)?;

    let result = models
        .chat_completion(ChatCompletionRequest {
            model: LLAMA_3_1_70B_INSTRUCT.into(),
            messages: vec![Message::user("Hello, world!")],
            temperature: 0.2,
            top_p: 0.7,
            max_tokens: 256,
            stream: false,
        })
        .await?;

    println!("{:?}", result);

    Ok(())
}
