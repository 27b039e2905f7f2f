use std::{future::Future, pin::Pin, sync::Arc};

use adcopy_core::{
    error::{AdcopyError, Result},
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
    model_map::map_model,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&params.model).to_owned();
            let messages: Vec<ChatCompletionMessage> =
                params.into_messages().into_iter().map(Into::into).collect();

            if messages.is_empty() {
                return Err(AdcopyError::InvalidRequest(
                    "chat completion needs at least one message".into(),
                ));
            }

            let request = ChatCompletionRequest::new(model, messages);
            let response = client.chat_completion(request).await?;

            let usage = response.usage.map(|usage| GenericUsageReport {
                prompt_tokens: usage.prompt_tokens as i64,
                completion_tokens: usage.completion_tokens as i64,
                total_tokens: usage.total_tokens as i64,
            });

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            match first_choice.finish_reason {
                None
                | Some(FinishReason::Stop)
                | Some(FinishReason::Length)
                | Some(FinishReason::Unknown) => {}
                Some(other) => {
                    return Err(OpenAiError::Format(format!(
                        "unhandled finish reason on API: {other:?}"
                    ))
                    .into());
                }
            }

            if first_choice.message.content.is_none() {
                let reason = first_choice
                    .message
                    .refusal
                    .unwrap_or_else(|| "response message has no text content".into());
                return Err(OpenAiError::Format(reason).into());
            }

            Ok(GenericChatCompletionResponse {
                content: first_choice.message.into(),
                usage,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    use adcopy_core::{
        generic::{GenericMessage, GenericRole},
        model::{Model, OpenAiModel},
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::OpenAiAdapterBuilder;

    /// Serves exactly one HTTP response on a loopback port and returns the
    /// base URL to point the adapter at.
    fn serve_once(status: &'static str, body: Value) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request(&mut stream);

            let body = body.to_string();
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}/v1")
    }

    fn read_request(stream: &mut impl Read) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|len| len.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + body_len {
                return;
            }
        }
    }

    fn completion(choices: Value) -> Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o",
            "choices": choices,
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        })
    }

    async fn complete_against(base_url: String) -> Result<GenericChatCompletionResponse> {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-test")
            .with_base_url(base_url)
            .build()
            .unwrap();
        let params = ChatCompleteParameters::new(
            vec![
                GenericMessage::new("You are a helpful assistant.".into(), GenericRole::System),
                GenericMessage::new("Write captions".into(), GenericRole::User),
            ],
            Model::OpenAi(OpenAiModel::Gpt4o),
        );
        adapter.chat_complete(params).await
    }

    #[tokio::test]
    async fn returns_the_first_choice_and_usage() {
        let base = serve_once(
            "200 OK",
            completion(json!([
                {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
            ])),
        );

        let response = complete_against(base).await.unwrap();
        assert_eq!(response.content.text(), "first");
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(15));
    }

    #[tokio::test]
    async fn accepts_unknown_finish_reason() {
        let base = serve_once(
            "200 OK",
            completion(json!([
                {"index": 0, "message": {"role": "assistant", "content": "text"}, "finish_reason": "end_turn"}
            ])),
        );

        let response = complete_against(base).await.unwrap();
        assert_eq!(response.content.text(), "text");
    }

    #[tokio::test]
    async fn empty_choices_is_a_format_error() {
        let base = serve_once("200 OK", completion(json!([])));

        let err = complete_against(base).await.unwrap_err();
        assert!(err.to_string().contains("OpenAI format error: response has no choices"));
    }

    #[tokio::test]
    async fn refusal_becomes_the_error_text() {
        let base = serve_once(
            "200 OK",
            completion(json!([{
                "index": 0,
                "message": {"role": "assistant", "content": null, "refusal": "I can't help with that."},
                "finish_reason": "stop"
            }])),
        );

        let err = complete_against(base).await.unwrap_err();
        assert!(err.to_string().contains("I can't help with that."));
    }

    #[tokio::test]
    async fn content_filter_is_rejected() {
        let base = serve_once(
            "200 OK",
            completion(json!([
                {"index": 0, "message": {"role": "assistant", "content": "partial"}, "finish_reason": "content_filter"}
            ])),
        );

        let err = complete_against(base).await.unwrap_err();
        assert!(err.to_string().contains("ContentFilter"));
    }

    #[tokio::test]
    async fn error_envelope_reaches_the_caller() {
        let base = serve_once(
            "401 Unauthorized",
            json!({
                "error": {
                    "message": "Incorrect API key",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            }),
        );

        let err = complete_against(base).await.unwrap_err();
        assert!(
            err.to_string()
                .contains("non-success status 401 Unauthorized: Incorrect API key (invalid_api_key)")
        );
    }

    #[tokio::test]
    async fn empty_message_list_is_rejected_before_sending() {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-test")
            .with_base_url("http://127.0.0.1:1/v1")
            .build()
            .unwrap();
        let params = ChatCompleteParameters::<GenericMessage>::new(
            Vec::new(),
            Model::OpenAi(OpenAiModel::Gpt4o),
        );

        let err = adapter.chat_complete(params).await.unwrap_err();
        assert!(matches!(err, AdcopyError::InvalidRequest(_)));
    }
}
