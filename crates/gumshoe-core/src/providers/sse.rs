//! SSE parsing for streamed chat completions.
//!
//! Turns the raw `data: {json}` byte stream into [`StreamEvent`]s, relayed
//! in arrival order with no buffering of the full response. Chunk boundaries
//! may split an event anywhere; `eventsource-stream` handles reassembly.

use std::collections::VecDeque;
use std::pin::Pin;

use eventsource_stream::{EventStream, Eventsource};
use futures_util::Stream;
use serde_json::Value;

use crate::providers::{ProviderError, ProviderResult, StreamEvent};

/// Appends a terminating blank line when the transport closes.
///
/// Some providers end the connection right after the last event without the
/// blank line SSE requires, which would leave the final event stuck in the
/// reassembly buffer.
struct SseTerminatedStream<S> {
    inner: S,
    emitted_terminator: bool,
}

impl<S> SseTerminatedStream<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            emitted_terminator: false,
        }
    }
}

impl<S, E> Stream for SseTerminatedStream<S>
where
    S: Stream<Item = std::result::Result<bytes::Bytes, E>> + Unpin,
{
    type Item = std::result::Result<bytes::Bytes, E>;

    fn poll_next(
        mut self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        use std::task::Poll;

        if self.emitted_terminator {
            return Poll::Ready(None);
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => Poll::Ready(Some(item)),
            Poll::Ready(None) => {
                self.emitted_terminator = true;
                Poll::Ready(Some(Ok(bytes::Bytes::from_static(b"\n\n"))))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// SSE parser for Groq (OpenAI-compatible) chat completion streams.
pub(crate) struct ChatCompletionSseParser<S> {
    inner: EventStream<SseTerminatedStream<S>>,
    pending: VecDeque<StreamEvent>,
    final_finish_reason: Option<String>,
    emitted_done: bool,
}

impl<S> ChatCompletionSseParser<S> {
    pub(crate) fn new<E>(stream: S) -> Self
    where
        S: Stream<Item = std::result::Result<bytes::Bytes, E>> + Unpin,
    {
        Self {
            inner: SseTerminatedStream::new(stream).eventsource(),
            pending: VecDeque::new(),
            final_finish_reason: None,
            emitted_done: false,
        }
    }

    /// Emit the completion event once. Called on `[DONE]`, finish_reason,
    /// or stream end (force=true).
    fn emit_completion_if_pending(&mut self, force: bool) {
        if self.emitted_done {
            return;
        }
        if self.final_finish_reason.is_none() && !force {
            return;
        }

        self.emitted_done = true;
        self.pending.push_back(StreamEvent::Completed {
            finish_reason: self.final_finish_reason.take(),
        });
    }

    fn handle_event_data(&mut self, data: &str) -> ProviderResult<()> {
        let trimmed = data.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if trimmed == "[DONE]" {
            self.emit_completion_if_pending(true);
            return Ok(());
        }

        let value = serde_json::from_str::<Value>(trimmed)
            .map_err(|err| ProviderError::parse(format!("Failed to parse SSE JSON: {err}")))?;
        self.handle_chunk(&value);
        Ok(())
    }

    fn handle_chunk(&mut self, value: &Value) {
        // Errors are terminal, no completion should follow
        if let Some(error) = value.get("error") {
            let error_type = error
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap_or("error")
                .to_string();
            let message = error
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            self.pending.push_back(StreamEvent::Error {
                error_type,
                message,
            });
            self.emitted_done = true;
            return;
        }

        let first_choice = value
            .get("choices")
            .and_then(|v| v.as_array())
            .and_then(|arr| arr.first());

        if let Some(choice) = first_choice {
            if let Some(finish_reason) = choice.get("finish_reason").and_then(|v| v.as_str()) {
                self.final_finish_reason = Some(finish_reason.to_string());
            }

            // Relay each delta as-is, empty content included
            if let Some(text) = choice
                .get("delta")
                .and_then(|delta| delta.get("content"))
                .and_then(|v| v.as_str())
            {
                self.pending.push_back(StreamEvent::TextDelta {
                    text: text.to_string(),
                });
            }
        }

        if self.final_finish_reason.is_some() && !self.emitted_done {
            self.emit_completion_if_pending(false);
        }
    }
}

impl<S, E> Stream for ChatCompletionSseParser<S>
where
    S: Stream<Item = std::result::Result<bytes::Bytes, E>> + Unpin,
    E: std::error::Error + Send + Sync + 'static,
{
    type Item = ProviderResult<StreamEvent>;

    fn poll_next(
        mut self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        use std::task::Poll;

        loop {
            if let Some(event) = self.pending.pop_front() {
                return Poll::Ready(Some(Ok(event)));
            }

            let inner = Pin::new(&mut self.inner);
            match inner.poll_next(cx) {
                Poll::Ready(Some(Ok(event))) => {
                    if let Err(err) = self.handle_event_data(&event.data) {
                        return Poll::Ready(Some(Err(err)));
                    }
                }
                Poll::Ready(Some(Err(e))) => {
                    return Poll::Ready(Some(Err(ProviderError::parse(format!(
                        "SSE stream error: {e}"
                    )))));
                }
                Poll::Ready(None) => {
                    // Stream ended - force completion if the provider never
                    // sent [DONE] or a finish_reason
                    self.emit_completion_if_pending(true);
                    if let Some(event) = self.pending.pop_front() {
                        return Poll::Ready(Some(Ok(event)));
                    }
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
