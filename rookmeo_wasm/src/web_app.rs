// Page-level glue between `ClientState` and the DOM. Knows nothing about the socket: inbound
// frames are fed to `process_frame` and outbound frames are pulled with `next_outgoing_frame`.

use std::sync::mpsc;

use rookmeo_chess::client::{ClickOutcome, ClientState, NotableEvent};
use rookmeo_chess::display::DisplayCoord;
use rookmeo_chess::event::{ClientEvent, ServerEvent};

use crate::rust_error;
use crate::web_board::{apply_orientation, create_board, sync_board};
use crate::web_error_handling::{JsResult, describe_js_error};


pub struct WebApp {
    state: ClientState,
    server_rx: mpsc::Receiver<ClientEvent>,
    board_node: web_sys::Element,
    game_info_node: web_sys::Element,
    status_line_node: Option<web_sys::Element>,
}

impl WebApp {
    pub fn new(
        board_node: web_sys::Element, game_info_node: web_sys::Element,
        status_line_node: Option<web_sys::Element>,
    ) -> JsResult<Self> {
        create_board(&board_node)?;
        let (server_tx, server_rx) = mpsc::channel();
        Ok(WebApp {
            state: ClientState::new(server_tx),
            server_rx,
            board_node,
            game_info_node,
            status_line_node,
        })
    }

    pub fn state(&self) -> &ClientState { &self.state }

    pub fn create_game(&mut self) { self.state.create_game(); }
    pub fn join_game(&mut self, game_code: &str) { self.state.join_game(game_code); }
    pub fn click(&mut self, pos: DisplayCoord) -> ClickOutcome { self.state.click_square(pos) }

    // Malformed frames and rejected events are logged; the page keeps running.
    pub fn process_frame(&mut self, frame: &str) {
        match ServerEvent::from_wire(frame) {
            Ok(event) => {
                if let Err(err) = self.state.process_server_event(event) {
                    log::error!("Error processing server event: {err:?}");
                }
            }
            Err(err) => log::error!("Malformed frame {frame:?}: {err}"),
        }
    }

    pub fn next_outgoing_frame(&mut self) -> JsResult<Option<String>> {
        match self.server_rx.try_recv() {
            Ok(event) => event.to_wire().map(Some).map_err(|err| rust_error!("{}", err)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(rust_error!("Event channel disconnected")),
        }
    }

    pub fn sync_page(&self) -> JsResult<()> {
        sync_board(&self.board_node, self.state.board())?;
        apply_orientation(&self.board_node, self.state.orientation())?;
        let info = self.state.info_string();
        self.game_info_node.set_text_content((!info.is_empty()).then_some(info.as_str()));
        Ok(())
    }

    // Opponent arrival goes to the status line; alerts and errors are modal. A failing notice
    // does not hold back the ones queued after it.
    pub fn show_notices(&mut self, mut alert: impl FnMut(&str) -> JsResult<()>) {
        while let Some(event) = self.state.next_notable_event() {
            match event {
                NotableEvent::Alert(message) | NotableEvent::ServerError(message) => {
                    if let Err(err) = alert(&message) {
                        log::error!("Cannot show {message:?}: {}", describe_js_error(&err));
                    }
                }
                NotableEvent::OpponentJoined(message) => match &self.status_line_node {
                    Some(status_line) => status_line.set_text_content(Some(&message)),
                    None => log::info!("{message}"),
                },
            }
        }
    }
}
