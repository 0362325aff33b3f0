use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::web_error_handling::JsResult;


// Text-frame connection to the game server. Frames sent before the socket opens are queued
// and flushed on open. A closed connection is not re-established.
#[derive(Clone)]
pub struct ServerSocket {
    socket: web_sys::WebSocket,
    outbox: Rc<RefCell<Vec<String>>>,
}

impl ServerSocket {
    pub fn connect(url: &str) -> JsResult<Self> {
        log::info!("Connecting to {url}");
        let socket = web_sys::WebSocket::new(url)?;
        let server_socket = ServerSocket { socket, outbox: Rc::new(RefCell::new(Vec::new())) };

        let on_open = {
            let server_socket = server_socket.clone();
            Closure::<dyn FnMut()>::new(move || {
                log::info!("Connected to server");
                server_socket.flush_outbox();
            })
        };
        server_socket.socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        let on_close = Closure::<dyn FnMut(web_sys::CloseEvent)>::new(|event: web_sys::CloseEvent| {
            log::warn!("Connection closed: code {}, reason {:?}", event.code(), event.reason());
        });
        server_socket.socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        Ok(server_socket)
    }

    pub fn on_message(&self, mut handler: impl FnMut(String) + 'static) {
        let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
            move |event: web_sys::MessageEvent| match event.data().as_string() {
                Some(frame) => handler(frame),
                None => log::warn!("Ignoring non-text frame"),
            },
        );
        self.socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();
    }

    pub fn send(&self, frame: String) -> JsResult<()> {
        match self.socket.ready_state() {
            web_sys::WebSocket::CONNECTING => {
                self.outbox.borrow_mut().push(frame);
                Ok(())
            }
            web_sys::WebSocket::OPEN => self.socket.send_with_str(&frame),
            _ => {
                log::warn!("Connection is closed, dropping {frame}");
                Ok(())
            }
        }
    }

    fn flush_outbox(&self) {
        let frames = std::mem::take(&mut *self.outbox.borrow_mut());
        for frame in frames {
            if let Err(err) = self.socket.send_with_str(&frame) {
                log::error!("Cannot send {frame}: {err:?}");
            }
        }
    }
}
