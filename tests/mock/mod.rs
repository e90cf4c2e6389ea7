#![allow(dead_code)]

use safepublish::network::{ClientState, MqttClient};
use std::cell::{Cell, RefCell};

/// Client double that records every call the guard makes.
#[derive(Debug)]
pub struct MockClient {
    pub buffer: usize,
    pub online: bool,
    pub accept: bool,
    pub published: Vec<(String, Vec<u8>)>,
    pub publish_calls: usize,
    pub connected_calls: Cell<usize>,
    pub resizes: Vec<usize>,
}

impl MockClient {
    pub fn new(buffer: usize) -> Self {
        Self {
            buffer,
            online: true,
            accept: true,
            published: Vec::new(),
            publish_calls: 0,
            connected_calls: Cell::new(0),
            resizes: Vec::new(),
        }
    }

    pub fn offline(buffer: usize) -> Self {
        Self {
            online: false,
            ..Self::new(buffer)
        }
    }

    pub fn refusing(buffer: usize) -> Self {
        Self {
            accept: false,
            ..Self::new(buffer)
        }
    }

    fn record(&mut self, topic: &str, payload: &[u8]) -> bool {
        self.publish_calls += 1;
        if self.accept {
            self.published.push((topic.to_string(), payload.to_vec()));
        }
        self.accept
    }
}

impl ClientState for MockClient {
    fn connected(&self) -> bool {
        self.connected_calls.set(self.connected_calls.get() + 1);
        self.online
    }

    fn buffer_size(&self) -> usize {
        self.buffer
    }

    fn set_buffer_size(&mut self, size: usize) {
        self.resizes.push(size);
        self.buffer = size;
    }
}

impl MqttClient for MockClient {
    fn publish(&mut self, topic: &str, payload: &[u8]) -> bool {
        self.record(topic, payload)
    }
}

#[cfg(feature = "async")]
impl safepublish::network::AsyncMqttClient for MockClient {
    async fn publish(&mut self, topic: &str, payload: &[u8]) -> bool {
        self.record(topic, payload)
    }
}

thread_local! {
    /// Lines captured from the guard's output function, per test thread.
    static OUTPUT: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

pub fn capture_output(text: &str) {
    OUTPUT.with(|lines| lines.borrow_mut().push(text.to_string()));
}

/// Drain everything captured on this thread so far.
pub fn take_output() -> Vec<String> {
    OUTPUT.with(|lines| lines.borrow_mut().drain(..).collect())
}

pub fn take_output_text() -> String {
    take_output().concat()
}
