//! Shipment status as stored with each tracking record.
//!
//! Only `created` is ever written by this crate. The other values are set by
//! an external administrative path and are displayed, never enforced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    #[default]
    Created,
    InTransit,
    Delivered,
    Returned,
}

impl TrackingStatus {
    pub const ALL: [TrackingStatus; 4] = [
        TrackingStatus::Created,
        TrackingStatus::InTransit,
        TrackingStatus::Delivered,
        TrackingStatus::Returned,
    ];

    /// Name used in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackingStatus::Created => "created",
            TrackingStatus::InTransit => "in_transit",
            TrackingStatus::Delivered => "delivered",
            TrackingStatus::Returned => "returned",
        }
    }

    /// pt-BR label shown to operators.
    pub fn label(self) -> &'static str {
        match self {
            TrackingStatus::Created => "Criado",
            TrackingStatus::InTransit => "Em Trânsito",
            TrackingStatus::Delivered => "Entregue",
            TrackingStatus::Returned => "Devolvido",
        }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::Unknown(s.to_string()))
    }
}
