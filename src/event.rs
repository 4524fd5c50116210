use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use crate::snapshot::GameSnapshot;


#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ServerEvent {
    // Channel (re)established.
    Connect,
    Disconnect,
    // Application-level error reported by the server. Not fatal to the session.
    Error { message: String },
    GameStateUpdate(GameSnapshot),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ClientEvent {
    RequestInitialState,
    StartGame,
    NextPhase,
    ResetGame,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EventError {
    UnknownEvent(String),
    MissingPayload(&'static str),
    CannotParse { event: &'static str, reason: String },
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::UnknownEvent(name) => write!(f, "unknown event \"{name}\""),
            EventError::MissingPayload(event) => write!(f, "event \"{event}\" has no payload"),
            EventError::CannotParse { event, reason } => {
                write!(f, "cannot parse \"{event}\" payload: {reason}")
            }
        }
    }
}

impl std::error::Error for EventError {}

#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: String,
}

impl ServerEvent {
    pub const CONNECT: &'static str = "connect";
    pub const DISCONNECT: &'static str = "disconnect";
    pub const ERROR: &'static str = "error";
    pub const GAME_STATE_UPDATE: &'static str = "game_state_update";

    pub fn name(&self) -> &'static str { self.into() }

    // Builds an event from what the realtime channel delivers: an event name and an optional
    // JSON payload.
    pub fn parse(name: &str, payload: Option<&str>) -> Result<Self, EventError> {
        match name {
            Self::CONNECT => Ok(ServerEvent::Connect),
            Self::DISCONNECT => Ok(ServerEvent::Disconnect),
            Self::ERROR => {
                let ErrorPayload { message } = parse_payload(Self::ERROR, payload)?;
                Ok(ServerEvent::Error { message })
            }
            Self::GAME_STATE_UPDATE => {
                Ok(ServerEvent::GameStateUpdate(parse_payload(Self::GAME_STATE_UPDATE, payload)?))
            }
            _ => Err(EventError::UnknownEvent(name.to_owned())),
        }
    }
}

impl ClientEvent {
    pub fn name(self) -> &'static str { self.into() }
}

fn parse_payload<T: for<'de> Deserialize<'de>>(
    event: &'static str, payload: Option<&str>,
) -> Result<T, EventError> {
    let payload = payload.ok_or(EventError::MissingPayload(event))?;
    serde_json::from_str(payload)
        .map_err(|err| EventError::CannotParse { event, reason: err.to_string() })
}


#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn client_event_wire_names() {
        let names: Vec<_> = ClientEvent::iter().map(ClientEvent::name).collect();
        assert_eq!(names, ["request_initial_state", "start_game", "next_phase", "reset_game"]);
    }

    #[test]
    fn server_event_names_round_trip() {
        assert_eq!(ServerEvent::Connect.name(), ServerEvent::CONNECT);
        assert_eq!(ServerEvent::Error { message: String::new() }.name(), ServerEvent::ERROR);
        assert_eq!(
            ServerEvent::GameStateUpdate(GameSnapshot::default()).name(),
            ServerEvent::GAME_STATE_UPDATE
        );
    }

    #[test]
    fn parse_from_channel() {
        assert_eq!(ServerEvent::parse("connect", None), Ok(ServerEvent::Connect));
        assert_eq!(
            ServerEvent::parse("error", Some(r#"{"message": "boom"}"#)),
            Ok(ServerEvent::Error { message: "boom".to_owned() })
        );
        assert_eq!(
            ServerEvent::parse("error", None),
            Err(EventError::MissingPayload("error"))
        );
        assert_eq!(
            ServerEvent::parse("chat", None),
            Err(EventError::UnknownEvent("chat".to_owned()))
        );
        assert!(matches!(
            ServerEvent::parse("game_state_update", Some("[1, 2")),
            Err(EventError::CannotParse { event: "game_state_update", .. })
        ));
    }

    #[test]
    fn tagged_json_form() {
        let event: ServerEvent =
            serde_json::from_str(r#"{"event": "game_state_update", "data": {"current_turn": 3}}"#)
                .unwrap();
        let ServerEvent::GameStateUpdate(snapshot) = event else {
            panic!("unexpected event: {event:?}");
        };
        assert_eq!(snapshot.current_turn, Some(3));
        let event: ServerEvent = serde_json::from_str(r#"{"event": "disconnect"}"#).unwrap();
        assert_eq!(event, ServerEvent::Disconnect);
    }
}
