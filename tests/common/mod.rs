//! Shared utilities for integration tests: a recording host and mock endpoints.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;

use paystack_checkout::config::ProviderConfig;
use paystack_checkout::error::{CheckoutError, CheckoutResult};
use paystack_checkout::http::InitiationApi;
use paystack_checkout::observability::{Analytics, EventProperties};
use paystack_checkout::payments::amount::MinorUnits;
use paystack_checkout::payments::types::{
    PaymentInitiation, PaymentRequest, PopupConfig, PopupOutcome,
};
use paystack_checkout::ui::{Host, Navigator, NoticeKind, Notifier, PaymentPopup};

/// Everything the host saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Toast { kind: NoticeKind, title: String, message: String },
    Blocking(String),
    Dismiss,
    Alert(String),
    PopupOpened(PopupConfig),
    Reload,
    Navigate(String),
    Track { event: String, properties: EventProperties },
}

/// A host whose every capability appends to one shared log.
#[derive(Clone, Default)]
pub struct RecordingHost {
    pub events: Arc<Mutex<Vec<HostEvent>>>,
    popup_outcomes: Arc<Mutex<VecDeque<CheckoutResult<PopupOutcome>>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next popup. Unscripted popups are closed.
    pub fn script_popup(&self, outcome: PopupOutcome) {
        self.popup_outcomes.lock().unwrap().push_back(Ok(outcome));
    }

    /// Make the next popup fail to open.
    pub fn script_popup_error(&self, message: &str) {
        self.popup_outcomes
            .lock()
            .unwrap()
            .push_back(Err(CheckoutError::Popup(message.to_string())));
    }

    pub fn host(&self) -> Host {
        Host {
            notifier: Arc::new(self.clone()),
            popup: Arc::new(self.clone()),
            navigator: Arc::new(self.clone()),
            analytics: Arc::new(self.clone()),
        }
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn tracked(&self) -> Vec<(String, EventProperties)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Track { event, properties } => Some((event, properties)),
                _ => None,
            })
            .collect()
    }

    /// Events without analytics, for checking what the user saw.
    pub fn visible(&self) -> Vec<HostEvent> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, HostEvent::Track { .. }))
            .collect()
    }

    pub fn popups(&self) -> Vec<PopupConfig> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::PopupOpened(config) => Some(config),
                _ => None,
            })
            .collect()
    }

    pub fn reloads(&self) -> usize {
        self.events().iter().filter(|e| matches!(e, HostEvent::Reload)).count()
    }

    fn push(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Notifier for RecordingHost {
    fn show_toast(&self, kind: NoticeKind, title: &str, message: &str) {
        self.push(HostEvent::Toast {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn show_blocking(&self, message: &str) {
        self.push(HostEvent::Blocking(message.to_string()));
    }

    fn dismiss(&self) {
        self.push(HostEvent::Dismiss);
    }

    fn alert(&self, message: &str) {
        self.push(HostEvent::Alert(message.to_string()));
    }
}

#[async_trait]
impl PaymentPopup for RecordingHost {
    async fn open(&self, config: PopupConfig) -> CheckoutResult<PopupOutcome> {
        self.push(HostEvent::PopupOpened(config));
        let next = self.popup_outcomes.lock().unwrap().pop_front();
        next.unwrap_or(Ok(PopupOutcome::Cancelled))
    }
}

impl Navigator for RecordingHost {
    fn reload(&self) {
        self.push(HostEvent::Reload);
    }

    fn navigate(&self, url: &str) {
        self.push(HostEvent::Navigate(url.to_string()));
    }
}

impl Analytics for RecordingHost {
    fn track(&self, event: &str, properties: EventProperties) {
        self.push(HostEvent::Track {
            event: event.to_string(),
            properties,
        });
    }
}

pub fn provider() -> ProviderConfig {
    ProviderConfig {
        public_key: "pk_test_123".to_string(),
        currency: "NGN".to_string(),
    }
}

pub fn initiation(email: &str, amount: i64, reference: &str) -> PaymentInitiation {
    PaymentInitiation {
        email: email.to_string(),
        amount: MinorUnits::from(amount),
        reference: reference.to_string(),
    }
}

type Responder = Box<dyn Fn(&PaymentRequest) -> CheckoutResult<PaymentInitiation> + Send + Sync>;

/// In-process initiation endpoint that records requests.
pub struct FakeApi {
    pub requests: Mutex<Vec<(String, PaymentRequest)>>,
    respond: Responder,
    gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn responding<F>(respond: F) -> Self
    where
        F: Fn(&PaymentRequest) -> CheckoutResult<PaymentInitiation> + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
            gate: None,
        }
    }

    /// Answer every request with the same initiation.
    pub fn accepting(initiation: PaymentInitiation) -> Self {
        Self::responding(move |_| Ok(initiation.clone()))
    }

    /// Fail every request with a server error.
    pub fn failing() -> Self {
        Self::responding(|_| {
            Err(CheckoutError::Status {
                status: 500,
                body: "internal error".to_string(),
            })
        })
    }

    /// Hold each response until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InitiationApi for FakeApi {
    async fn initiate(
        &self,
        url: &str,
        request: &PaymentRequest,
    ) -> CheckoutResult<PaymentInitiation> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), request.clone()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        (self.respond)(request)
    }
}

/// One request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Start a mock backend on an ephemeral port answering every request with `status` and `body`.
pub async fn start_recording_backend(
    status: u16,
    body: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<RecordedRequest>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let log = recorded.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let log = log.clone();
                    tokio::spawn(async move {
                        if let Some(request) = read_request(&mut socket).await {
                            log.lock().unwrap().push(request);
                        }
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\n\
                             Content-Type: application/json\r\n\
                             Content-Length: {}\r\n\
                             Connection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, recorded)
}

/// An address nothing listens on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = (header_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}
