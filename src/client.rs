use std::collections::VecDeque;
use std::sync::mpsc;

use instant::Instant;
use itertools::Itertools;

use crate::board_view::BoardView;
use crate::coord::{Coord, move_notation};
use crate::display::{BoardOrientation, DisplayCoord};
use crate::error::EventError;
use crate::event::{ClientEvent, RequestId, ServerEvent};
use crate::force::Force;


pub const UNLOAD_WARNING: &str = "You have an active game. Are you sure you want to leave?";

// Things the UI should tell the user about. Board changes are not listed here: the UI
// re-syncs the board after every processed event anyway.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NotableEvent {
    // Informational notice from the server, e.g. a special piece was captured.
    Alert(String),
    // Failure reported by the server, e.g. an invalid game code or an illegal move.
    ServerError(String),
    OpponentJoined(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    Ignored,
    QuerySent(Coord),
    MoveSent(Coord, Coord),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionKind {
    Created,
    Joined,
}

#[derive(Clone, Debug)]
pub struct Session {
    pub kind: SessionKind,
    pub game_code: String,
    pub my_force: Force,
}

#[derive(Clone, Copy, Debug)]
struct PendingQuery {
    request_id: RequestId,
    square: Coord,
    sent_at: Instant,
}

pub struct ClientState {
    events_tx: mpsc::Sender<ClientEvent>,
    session: Option<Session>,
    // Code typed by the user, remembered until the server confirms the join.
    requested_game_code: Option<String>,
    board: BoardView,
    orientation: BoardOrientation,
    selected_square: Option<Coord>,
    pending_query: Option<PendingQuery>,
    next_request_id: RequestId,
    notable_events: VecDeque<NotableEvent>,
}

impl ClientState {
    pub fn new(events_tx: mpsc::Sender<ClientEvent>) -> Self {
        ClientState {
            events_tx,
            session: None,
            requested_game_code: None,
            board: BoardView::create(),
            orientation: BoardOrientation::Normal,
            selected_square: None,
            pending_query: None,
            next_request_id: 1,
            notable_events: VecDeque::new(),
        }
    }

    pub fn session(&self) -> Option<&Session> { self.session.as_ref() }
    pub fn my_force(&self) -> Option<Force> { self.session.as_ref().map(|s| s.my_force) }
    pub fn board(&self) -> &BoardView { &self.board }
    pub fn orientation(&self) -> BoardOrientation { self.orientation }
    pub fn selected_square(&self) -> Option<Coord> { self.selected_square }
    pub fn has_pending_query(&self) -> bool { self.pending_query.is_some() }
    pub fn has_active_game(&self) -> bool { self.session.is_some() }

    pub fn info_string(&self) -> String {
        let Some(session) = &self.session else {
            return String::new();
        };
        match session.kind {
            SessionKind::Created => format!("Game Code: {} (You are White)", session.game_code),
            SessionKind::Joined => format!(
                "Joined Game: {} (You are {})",
                session.game_code,
                session.my_force.name()
            ),
        }
    }

    pub fn create_game(&mut self) {
        log::debug!("Requesting a new game");
        self.orientation = BoardOrientation::Normal;
        self.send(ClientEvent::CreateGame);
    }

    pub fn join_game(&mut self, game_code: &str) {
        let game_code = game_code.trim().to_uppercase();
        log::debug!("Requesting to join game {game_code}");
        self.requested_game_code = Some(game_code.clone());
        self.send(ClientEvent::JoinGame { game_code });
    }

    pub fn make_move(&mut self, move_notation: String) {
        log::debug!("Making move {move_notation}");
        self.send(ClientEvent::MakeMove { r#move: move_notation });
    }

    pub fn click_square(&mut self, pos: DisplayCoord) -> ClickOutcome {
        let coord = pos.to_coord();
        log::debug!("Square clicked: {coord}");
        if let Some(from) = self.selected_square.take() {
            let is_target = self.board.is_highlighted(pos);
            self.board.clear_highlights();
            if is_target {
                // Not waiting for the server: it will either push the new position or
                // report an error.
                self.make_move(move_notation(from, coord));
                return ClickOutcome::MoveSent(from, coord);
            }
            log::debug!("{coord} is not a target for {from}, starting a new selection");
        }
        self.try_select(pos)
    }

    pub fn process_server_event(&mut self, event: ServerEvent) -> Result<(), EventError> {
        use ServerEvent::*;
        match event {
            GameCreated { game_code, state } => {
                log::info!("Game created: {game_code}");
                self.start_session(Session {
                    kind: SessionKind::Created,
                    game_code,
                    my_force: Force::White,
                });
                self.apply_game_state(&state);
            }
            GameJoined { role, state } => {
                let game_code = self.requested_game_code.take().unwrap_or_else(|| {
                    log::warn!("Joined a game without asking to");
                    String::new()
                });
                log::info!("Joined game {game_code} as {}", role.name());
                self.start_session(Session {
                    kind: SessionKind::Joined,
                    game_code,
                    my_force: role,
                });
                self.apply_game_state(&state);
            }
            UpdateGame { state } => {
                log::debug!("Game state updated: {state}");
                self.apply_game_state(&state);
            }
            LegalMoves { request_id, moves, error } => {
                return self.apply_legal_moves(request_id, moves, error);
            }
            Alert { message } => {
                log::info!("Alert: {message}");
                self.notable_events.push_back(NotableEvent::Alert(message));
            }
            Error { message } => {
                log::warn!("Got error from server: {message}");
                self.notable_events.push_back(NotableEvent::ServerError(message));
            }
            PlayerJoined { message } => {
                log::info!("{message}");
                self.notable_events.push_back(NotableEvent::OpponentJoined(message));
            }
        }
        Ok(())
    }

    pub fn next_notable_event(&mut self) -> Option<NotableEvent> { self.notable_events.pop_front() }

    fn try_select(&mut self, pos: DisplayCoord) -> ClickOutcome {
        let Some(my_force) = self.my_force() else {
            log::debug!("No game in progress, ignoring click");
            return ClickOutcome::Ignored;
        };
        match self.board.piece_at(pos) {
            Some(piece) if piece.force == my_force => {}
            _ => {
                log::debug!("Invalid piece selected");
                return ClickOutcome::Ignored;
            }
        }
        let square = pos.to_coord();
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        if let Some(superseded) = self.pending_query.replace(PendingQuery {
            request_id,
            square,
            sent_at: Instant::now(),
        }) {
            log::debug!("Legal moves query for {} superseded", superseded.square);
        }
        log::debug!("Requesting legal moves for {square}");
        self.send(ClientEvent::LegalMoves { request_id, square: square.to_algebraic() });
        ClickOutcome::QuerySent(square)
    }

    fn apply_legal_moves(
        &mut self, request_id: RequestId, moves: Option<Vec<String>>, error: Option<String>,
    ) -> Result<(), EventError> {
        let Some(query) = self.pending_query.take_if(|q| q.request_id == request_id) else {
            log::debug!("Dropping stale legal moves reply #{request_id}");
            return Ok(());
        };
        let square = query.square.to_algebraic();
        log::debug!(
            "Legal moves reply for {square} received in {:?}",
            query.sent_at.elapsed()
        );
        if let Some(error) = error {
            return Err(EventError::LegalMovesRejected { square, error });
        }
        let Some(moves) = moves else {
            return Err(EventError::LegalMovesMissing { square });
        };
        let targets = moves
            .iter()
            .filter_map(|target| {
                let coord = Coord::from_algebraic_prefix(target);
                if coord.is_none() {
                    log::warn!("Ignoring malformed legal move target {target:?} for {square}");
                }
                coord
            })
            .collect_vec();
        log::debug!("Legal moves for {square}: {}", targets.iter().join(", "));
        self.selected_square = Some(query.square);
        self.board.set_highlights(targets);
        Ok(())
    }

    fn start_session(&mut self, session: Session) {
        self.orientation = BoardOrientation::for_force(session.my_force);
        self.session = Some(session);
    }

    // Any new position invalidates the selection and an outstanding legal moves query:
    // the reply would describe a position that is no longer on the board.
    fn apply_game_state(&mut self, state: &str) {
        if let Some(query) = self.pending_query.take() {
            log::debug!("Cancelling legal moves query for {}: position changed", query.square);
        }
        self.selected_square = None;
        self.board.render_from_game_state(state);
    }

    fn send(&self, event: ClientEvent) {
        if self.events_tx.send(event).is_err() {
            log::error!("{}", crate::internal_error_message!("outgoing event channel closed"));
        }
    }
}
