use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of workers whose earnings are tracked.
/// Each worker owns one column of the ledger sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Worker {
    Hengi,
    Marleni,
    Israel,
    Thaicar,
}

impl Worker {
    /// Sheet column order.
    pub const ALL: [Worker; 4] = [
        Worker::Hengi,
        Worker::Marleni,
        Worker::Israel,
        Worker::Thaicar,
    ];

    /// Column key as it appears in the sheet header.
    pub fn key(&self) -> &'static str {
        match self {
            Worker::Hengi => "HENGI",
            Worker::Marleni => "MARLENI",
            Worker::Israel => "ISRAEL",
            Worker::Thaicar => "THAICAR",
        }
    }

    /// Case-insensitive lookup from a column key or login name.
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "HENGI" => Some(Worker::Hengi),
            "MARLENI" => Some(Worker::Marleni),
            "ISRAEL" => Some(Worker::Israel),
            "THAICAR" => Some(Worker::Thaicar),
            _ => None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Worker::Hengi => 0,
            Worker::Marleni => 1,
            Worker::Israel => 2,
            Worker::Thaicar => 3,
        }
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Worker {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Worker::from_key(s).ok_or_else(|| AppError::UnknownWorker(s.to_string()))
    }
}
