// Test utilities shared by the core integration tests and the web client tests.

use std::sync::mpsc;

use itertools::Itertools;

use crate::client::ClientState;
use crate::event::{ClientEvent, RequestId, ServerEvent};
use crate::force::Force;


pub const STARTING_GAME_STATE: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const SAMPLE_GAME_CODE: &str = "K3XQ9P";

// Client wired to an in-memory channel instead of a socket.
pub struct TestClient {
    pub state: ClientState,
    server_rx: mpsc::Receiver<ClientEvent>,
}

impl TestClient {
    pub fn new() -> Self {
        let (events_tx, server_rx) = mpsc::channel();
        TestClient { state: ClientState::new(events_tx), server_rx }
    }

    // A client that has created or joined a game with the starting position.
    pub fn in_game(force: Force) -> Self {
        let mut client = TestClient::new();
        match force {
            Force::White => {
                client.state.create_game();
                client.process(ServerEvent::GameCreated {
                    game_code: SAMPLE_GAME_CODE.to_owned(),
                    state: STARTING_GAME_STATE.to_owned(),
                });
            }
            Force::Black => {
                client.state.join_game(SAMPLE_GAME_CODE);
                client.process(ServerEvent::GameJoined {
                    role: Force::Black,
                    state: STARTING_GAME_STATE.to_owned(),
                });
            }
        }
        client.outgoing();
        client
    }

    pub fn process(&mut self, event: ServerEvent) {
        self.state.process_server_event(event).unwrap();
    }

    pub fn outgoing(&mut self) -> Vec<ClientEvent> { self.server_rx.try_iter().collect_vec() }

    // Id of the only legal moves query sent since the last drain.
    pub fn take_query(&mut self) -> (RequestId, String) {
        let (request_id, square) = self
            .outgoing()
            .into_iter()
            .filter_map(|event| match event {
                ClientEvent::LegalMoves { request_id, square } => Some((request_id, square)),
                _ => None,
            })
            .exactly_one()
            .unwrap_or_else(|_| panic!("expected exactly one legal moves query"));
        (request_id, square)
    }
}

pub fn legal_moves_reply(request_id: RequestId, moves: &[&str]) -> ServerEvent {
    ServerEvent::LegalMoves {
        request_id,
        moves: Some(moves.iter().map(|m| (*m).to_owned()).collect()),
        error: None,
    }
}
