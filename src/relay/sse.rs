/// One decoded server-sent event from the completion stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// Payload of a `data:` line (chunk JSON, not yet parsed).
    Data(String),
    /// The `data: [DONE]` terminator some servers send before closing.
    Done,
}

/// Incremental `data:` line decoder over raw body bytes. Events may be
/// split across network chunks, so incomplete lines stay buffered until
/// the next push.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn push(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|&byte| byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']);

            // Blank separators and `:` comment lines carry no payload.
            let Some(payload) = line.strip_prefix("data:") else {
                continue;
            };
            let payload = payload.strip_prefix(' ').unwrap_or(payload);

            if payload == "[DONE]" {
                events.push(SseEvent::Done);
            } else {
                events.push(SseEvent::Data(payload.to_string()));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(payload: &str) -> SseEvent {
        SseEvent::Data(payload.to_string())
    }

    #[test]
    fn decodes_single_event() {
        let mut decoder = SseDecoder::default();
        assert_eq!(decoder.push(b"data: {\"a\":1}\n\n"), vec![data("{\"a\":1}")]);
    }

    #[test]
    fn decodes_multiple_events_in_one_chunk() {
        let mut decoder = SseDecoder::default();
        let events = decoder.push(b"data: one\n\ndata: two\n\n");
        assert_eq!(events, vec![data("one"), data("two")]);
    }

    #[test]
    fn buffers_events_split_across_chunks() {
        let mut decoder = SseDecoder::default();
        assert_eq!(decoder.push(b"data: par"), vec![]);
        assert_eq!(decoder.push(b"tial\n"), vec![data("partial")]);
    }

    #[test]
    fn handles_crlf_lines() {
        let mut decoder = SseDecoder::default();
        assert_eq!(decoder.push(b"data: x\r\n\r\n"), vec![data("x")]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let mut decoder = SseDecoder::default();
        assert_eq!(decoder.push(b": keep-alive\n\ndata: y\n"), vec![data("y")]);
    }

    #[test]
    fn recognizes_done_marker() {
        let mut decoder = SseDecoder::default();
        assert_eq!(
            decoder.push(b"data: z\n\ndata: [DONE]\n\n"),
            vec![data("z"), SseEvent::Done]
        );
    }

    #[test]
    fn accepts_data_without_space() {
        let mut decoder = SseDecoder::default();
        assert_eq!(decoder.push(b"data:tight\n"), vec![data("tight")]);
    }
}
