#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod web_app;
pub mod web_board;
pub mod web_config;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;
pub mod web_socket;

use std::cell::RefCell;
use std::rc::Rc;

use rookmeo_chess::client::UNLOAD_WARNING;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::web_app::WebApp;
use crate::web_board::clicked_cell;
use crate::web_config::WebConfig;
use crate::web_document::{web_document, web_window};
use crate::web_element_ext::add_event_listener_and_forget;
use crate::web_error_handling::{JsResult, set_panic_hook};
use crate::web_socket::ServerSocket;


pub const CREATE_GAME_BUTTON_ID: &str = "create-game";
pub const JOIN_GAME_BUTTON_ID: &str = "join-game";
pub const JOIN_GAME_CODE_INPUT_ID: &str = "join-game-code";
pub const GAME_INFO_ID: &str = "game-info";
pub const STATUS_LINE_ID: &str = "status-line";

// Sends what the client queued, then brings the page in line with the new state.
fn flush(app: &mut WebApp, socket: &ServerSocket) -> JsResult<()> {
    while let Some(frame) = app.next_outgoing_frame()? {
        socket.send(frame)?;
    }
    app.sync_page()?;
    let window = web_window()?;
    app.show_notices(|message| window.alert_with_message(message));
    Ok(())
}

fn join_game_code() -> JsResult<String> {
    let input = web_document()?
        .get_existing_element_by_id(JOIN_GAME_CODE_INPUT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| rust_error!("\"{}\" is not an input", JOIN_GAME_CODE_INPUT_ID))?;
    Ok(input.value())
}

// Entry point called by the page once the module is loaded.
#[wasm_bindgen]
pub fn start(config_json: &str) -> JsResult<()> {
    set_panic_hook();
    let config = WebConfig::from_json(config_json)?;
    if let Err(err) = console_log::init_with_level(config.log_level()?) {
        // Happens when the page calls `start` twice.
        log::warn!("Logger already initialized: {err}");
    }
    log::debug!("Starting with {config:?}");

    let window = web_window()?;
    let document = web_document()?;
    let board_node = document.get_existing_element_by_id(&config.board_element_id)?;
    let app = Rc::new(RefCell::new(WebApp::new(
        board_node.clone(),
        document.get_existing_element_by_id(GAME_INFO_ID)?,
        document.get_element_by_id(STATUS_LINE_ID),
    )?));
    let socket = ServerSocket::connect(&config.server_url(&window.location())?)?;

    socket.on_message({
        let app = Rc::clone(&app);
        let socket = socket.clone();
        move |frame| {
            let mut app = app.borrow_mut();
            app.process_frame(&frame);
            if let Err(err) = flush(&mut app, &socket) {
                log::error!("Cannot update page: {err:?}");
            }
        }
    });

    let create_game_button = document.get_existing_element_by_id(CREATE_GAME_BUTTON_ID)?;
    add_event_listener_and_forget(&create_game_button, "click", {
        let app = Rc::clone(&app);
        let socket = socket.clone();
        move |_: web_sys::Event| {
            let mut app = app.borrow_mut();
            app.create_game();
            flush(&mut app, &socket)
        }
    })?;
    let join_game_button = document.get_existing_element_by_id(JOIN_GAME_BUTTON_ID)?;
    add_event_listener_and_forget(&join_game_button, "click", {
        let app = Rc::clone(&app);
        let socket = socket.clone();
        move |_: web_sys::Event| {
            let game_code = join_game_code()?;
            let mut app = app.borrow_mut();
            app.join_game(&game_code);
            flush(&mut app, &socket)
        }
    })?;
    add_event_listener_and_forget(&board_node, "click", {
        let app = Rc::clone(&app);
        let socket = socket.clone();
        move |event: web_sys::MouseEvent| {
            let Some(pos) = clicked_cell(&event) else {
                log::debug!("Click ignored: no cell position");
                return Ok(());
            };
            let mut app = app.borrow_mut();
            app.click(pos);
            flush(&mut app, &socket)
        }
    })?;
    add_event_listener_and_forget(&window, "beforeunload", {
        let app = Rc::clone(&app);
        move |event: web_sys::BeforeUnloadEvent| {
            if app.borrow().state().has_active_game() {
                event.prevent_default();
                event.set_return_value(UNLOAD_WARNING);
            }
            Ok(())
        }
    })?;

    let mut app = app.borrow_mut();
    flush(&mut app, &socket)
}
