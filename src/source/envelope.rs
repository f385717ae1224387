/// One raw message as handed over by the event trigger.
///
/// The payload is opaque bytes; nothing upstream guarantees UTF-8 or JSON.
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    body: Vec<u8>,
}

impl EventEnvelope {
    pub fn new(body: Vec<u8>) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl From<&str> for EventEnvelope {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl From<String> for EventEnvelope {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}
