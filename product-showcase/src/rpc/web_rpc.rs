use crate::carousel::controller::{Carousel, CarouselCommand, RenderPageRequest};
use crate::engine::core::app_state::{AppState, ShowcaseSet};
use crate::modal::state::ModalState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Follow-up work after an RPC call has changed carousel or modal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcAction {
    RenderPage,
    ModalClosed,
}

/// Resource managing bidirectional RPC communication with the host page.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> usize {
        self.outgoing_notifications.len()
    }
}

/// Plugin establishing the postMessage bridge to the host page.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages)
                    .chain()
                    .in_set(ShowcaseSet::Input),
            )
            .add_systems(Last, send_outgoing_messages);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue shared with the JS event callback.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Only string payloads can carry JSON-RPC.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) = window
                .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
                return;
            }
        }
        None => {
            error!("Window object not available, host page RPC disabled");
            return;
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    app_state: Res<State<AppState>>,
    mut carousel: ResMut<Carousel>,
    mut modal: ResMut<ModalState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut render_requests: EventWriter<RenderPageRequest>,
) {
    let running = *app_state.get() == AppState::Running;

    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
                continue;
            }
        };

        debug!("Processing RPC method: {}", request.method);

        let mut actions = Vec::new();
        if let Some(response) =
            handle_rpc_request(&request, running, &mut carousel, &mut modal, &mut actions)
        {
            rpc_interface.queue_response(response);
        }

        for action in actions {
            match action {
                RpcAction::RenderPage => {
                    render_requests.write(RenderPageRequest);
                }
                RpcAction::ModalClosed => {
                    rpc_interface.send_notification("modal_closed", serde_json::json!({}));
                }
            }
        }
    }
}

/// Handle individual RPC request. Navigation and modal changes are applied
/// immediately, so several requests in one frame each see the result of the
/// previous one. Follow-up work is collected in `actions`.
/// Returns a response only for requests carrying an ID.
fn handle_rpc_request(
    request: &RpcRequest,
    running: bool,
    carousel: &mut Carousel,
    modal: &mut ModalState,
    actions: &mut Vec<RpcAction>,
) -> Option<RpcResponse> {
    let result = if request.jsonrpc != "2.0" {
        Err(RpcError::invalid_request(&format!(
            "Unsupported jsonrpc version: {}",
            request.jsonrpc
        )))
    } else {
        match request.method.as_str() {
            "next_page" | "previous_page" if !running => {
                Err(RpcError::not_ready("Models are still loading"))
            }
            "next_page" => Ok(navigate(carousel, CarouselCommand::Next, actions)),
            "previous_page" => Ok(navigate(carousel, CarouselCommand::Previous, actions)),
            "close_modal" => {
                let closed = modal.hide();
                if closed {
                    info!("Detail modal closed by host page");
                    actions.push(RpcAction::ModalClosed);
                }
                Ok(serde_json::json!({ "closed": closed }))
            }
            "get_carousel_state" => handle_get_carousel_state(carousel, modal),
            _ => {
                warn!("Unknown RPC method: {}", request.method);
                Err(RpcError::method_not_found(&request.method))
            }
        }
    };

    // Notifications (no ID) never get a response.
    let id = request.id.clone()?;

    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

fn navigate(
    carousel: &mut Carousel,
    command: CarouselCommand,
    actions: &mut Vec<RpcAction>,
) -> serde_json::Value {
    let moved = match command {
        CarouselCommand::Next => carousel.next(),
        CarouselCommand::Previous => carousel.previous(),
    };

    if moved {
        info!(
            "RPC {:?} → page offset {}",
            command,
            carousel.state().page_offset()
        );
        actions.push(RpcAction::RenderPage);
    }

    serde_json::json!({ "moved": moved })
}

fn handle_get_carousel_state(
    carousel: &Carousel,
    modal: &ModalState,
) -> Result<serde_json::Value, RpcError> {
    let snapshot = serde_json::to_value(carousel.snapshot())
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    Ok(serde_json::json!({
        "carousel": snapshot,
        "modal": {
            "visible": modal.is_visible(),
            "name": modal.displayed_name(),
        }
    }))
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    /// Server-defined error for navigation before the models have loaded.
    pub fn not_ready(message: &str) -> Self {
        Self {
            code: -32000,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
