// Each WebSocket text frame carries one event serialized as
//   {"event": "<name>", "data": {...}}
// where `data` is absent for events without payload.

use serde::{Deserialize, Serialize};

use crate::force::Force;


pub type RequestId = u64;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    CreateGame,
    JoinGame {
        game_code: String,
    },
    MakeMove {
        // Origin and destination squares concatenated, e.g. "e2e4".
        r#move: String,
    },
    // The server answers with `ServerEvent::LegalMoves` carrying the same `request_id`.
    LegalMoves {
        request_id: RequestId,
        square: String,
    },
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    GameCreated {
        game_code: String,
        state: String,
    },
    GameJoined {
        role: Force,
        state: String,
    },
    UpdateGame {
        state: String,
    },
    // Either `moves` or `error` is expected. A reply with neither is treated as missing.
    LegalMoves {
        request_id: RequestId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        moves: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Alert {
        message: String,
    },
    Error {
        message: String,
    },
    PlayerJoined {
        message: String,
    },
}

impl ClientEvent {
    pub fn to_wire(&self) -> Result<String, serde_json::Error> { serde_json::to_string(self) }
}

impl ServerEvent {
    pub fn from_wire(frame: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(frame) }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn client_event_wire_format() {
        assert_eq!(
            serde_json::to_value(ClientEvent::CreateGame).unwrap(),
            json!({ "event": "create_game" })
        );
        assert_eq!(
            serde_json::to_value(ClientEvent::MakeMove { r#move: "e2e4".to_owned() }).unwrap(),
            json!({ "event": "make_move", "data": { "move": "e2e4" } })
        );
        assert_eq!(
            serde_json::to_value(ClientEvent::LegalMoves {
                request_id: 3,
                square: "e2".to_owned()
            })
            .unwrap(),
            json!({ "event": "legal_moves", "data": { "request_id": 3, "square": "e2" } })
        );
    }

    #[test]
    fn server_event_wire_format() {
        let event: ServerEvent = serde_json::from_value(json!({
            "event": "game_joined",
            "data": { "role": "black", "state": "8/8/8/8/8/8/8/8 w - - 0 1" },
        }))
        .unwrap();
        assert_eq!(event, ServerEvent::GameJoined {
            role: Force::Black,
            state: "8/8/8/8/8/8/8/8 w - - 0 1".to_owned(),
        });

        let event: ServerEvent = serde_json::from_value(json!({
            "event": "legal_moves",
            "data": { "request_id": 7, "moves": ["e3", "e4"] },
        }))
        .unwrap();
        assert_eq!(event, ServerEvent::LegalMoves {
            request_id: 7,
            moves: Some(vec!["e3".to_owned(), "e4".to_owned()]),
            error: None,
        });

        let event: ServerEvent = serde_json::from_value(json!({
            "event": "legal_moves",
            "data": { "request_id": 8 },
        }))
        .unwrap();
        assert_eq!(event, ServerEvent::LegalMoves { request_id: 8, moves: None, error: None });
    }

    #[test]
    fn parse_text_frame() {
        let event = ServerEvent::from_wire(
            r#"{"event":"alert","data":{"message":"Rookmeo captured!"}}"#,
        )
        .unwrap();
        assert_eq!(event, ServerEvent::Alert { message: "Rookmeo captured!".to_owned() });
        assert!(ServerEvent::from_wire("not json").is_err());
        assert!(ServerEvent::from_wire(r#"{"event":"resign"}"#).is_err());
        assert_eq!(ClientEvent::CreateGame.to_wire().unwrap(), r#"{"event":"create_game"}"#);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_value::<ServerEvent>(json!({
            "event": "game_joined",
            "data": { "role": "observer", "state": "" },
        }));
        assert!(result.is_err());
    }
}
