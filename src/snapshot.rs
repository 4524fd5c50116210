// Game state as pushed by the server. The client mirrors it and never modifies it.
//
// The server is free to omit fields (e.g. right after a reset it sends nothing but a status
// message), so the schema is optional almost everywhere and presence is checked explicitly
// before painting: see `GameSnapshot::checked`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::warn;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};


pub const SETUP_PHASE: &str = "SETUP";
pub const DRAW_MARKER: &str = "DRAW";
pub const YANG_DUN_MARKER: &str = "YANG";

// Python server serializes a missing position as `None` in some code paths.
const NO_POSITION_MARKER: &str = "None";

// The server numbers players with strings ("1", "2", ...). Integer ids are accepted too and kept in
// decimal form, so both spellings of the same id compare equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self { PlayerId(id.to_string()) }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self { PlayerId(id.to_owned()) }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Number(i64),
        }
        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(id) => PlayerId(id),
            WireId::Number(id) => PlayerId(id.to_string()),
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub health: i64,
    pub gold: i64,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hand: Vec<Card>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_eliminated: bool,
}

impl Player {
    // Position as a zone id, if the player has one. Does not check that the zone exists.
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref().filter(|p| !p.is_empty() && *p != NO_POSITION_MARKER)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Zone {
    pub palace: String,
    pub department: String,
}

// Gate symbol per palace id. The server stores the current ju number in the same object; it gets
// its own field here, so it never shows up among the gates.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct QimenGates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ju_number: Option<serde_json::Value>,
    #[serde(flatten)]
    pub gates: BTreeMap<String, String>,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default, deserialize_with = "null_as_default")]
    pub zones: HashMap<String, Zone>,
    #[serde(default)]
    pub qimen_gates: Option<QimenGates>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Winner {
    Draw,
    Won { name: String },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DunMode {
    Yang,
    Yin,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub players: Option<Vec<Player>>,
    #[serde(default)]
    pub game_board: Option<Board>,
    #[serde(default)]
    pub active_player_id: Option<PlayerId>,
    #[serde(default)]
    pub current_turn: Option<u32>,
    #[serde(default)]
    pub current_phase: Option<String>,
    #[serde(default)]
    pub dun_type: Option<String>,
    #[serde(default)]
    pub solar_term: Option<String>,
    #[serde(default)]
    pub game_fund: Option<i64>,
    #[serde(default)]
    pub current_celestial_stem: Option<Card>,
    #[serde(default)]
    pub current_terrestrial_branch: Option<Card>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub log_messages: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_winner",
        serialize_with = "serialize_winner"
    )]
    pub winner: Option<Winner>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SnapshotError {
    MissingField(&'static str),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::MissingField(field) => write!(f, "snapshot has no `{field}`"),
        }
    }
}

impl std::error::Error for SnapshotError {}

// A snapshot that passed presence checks: everything the painter cannot do without is there.
#[derive(Clone, Copy, Debug)]
pub struct CheckedSnapshot<'a> {
    pub snapshot: &'a GameSnapshot,
    pub players: &'a [Player],
    pub board: &'a Board,
}

impl GameSnapshot {
    pub fn checked(&self) -> Result<CheckedSnapshot<'_>, SnapshotError> {
        let players = self.players.as_deref().ok_or(SnapshotError::MissingField("players"))?;
        let board = self.game_board.as_ref().ok_or(SnapshotError::MissingField("game_board"))?;
        Ok(CheckedSnapshot { snapshot: self, players, board })
    }

    pub fn is_active(&self, player: &Player) -> bool {
        self.active_player_id.as_ref() == Some(&player.player_id)
    }

    pub fn dun_mode(&self) -> DunMode {
        if self.dun_type.as_deref() == Some(YANG_DUN_MARKER) {
            DunMode::Yang
        } else {
            DunMode::Yin
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Wire form of the winner: either the `"DRAW"` marker or the winning player object (of which only
// the name is needed). Anything else (`false`, `0`, ...) means there is no winner.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireWinner {
    Marker(String),
    Player { name: String },
    Other(IgnoredAny),
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireWinnerRef<'a> {
    Marker(&'a str),
    Player { name: &'a str },
}

fn deserialize_winner<'de, D>(deserializer: D) -> Result<Option<Winner>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireWinner>::deserialize(deserializer)? {
        None => None,
        Some(WireWinner::Marker(marker)) if marker.is_empty() => None,
        Some(WireWinner::Marker(marker)) if marker == DRAW_MARKER => Some(Winner::Draw),
        Some(WireWinner::Marker(name)) | Some(WireWinner::Player { name }) => {
            Some(Winner::Won { name })
        }
        Some(WireWinner::Other(_)) => {
            warn!("Unrecognized winner value, treating as no winner");
            None
        }
    })
}

fn serialize_winner<S>(winner: &Option<Winner>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let wire = winner.as_ref().map(|winner| match winner {
        Winner::Draw => WireWinnerRef::Marker(DRAW_MARKER),
        Winner::Won { name } => WireWinnerRef::Player { name },
    });
    wire.serialize(serializer)
}
