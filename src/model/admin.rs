use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDto {
    pub users: u64,
    pub trips: u64,
    pub reservations_pending: u64,
    pub reservations_accepted: u64,
    pub reservations_refused: u64,
    pub reservations_cancelled: u64,
    pub unread_notifications: u64,
}
