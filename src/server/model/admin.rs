use crate::model::{admin::StatsDto, api::CascadeReportDto};

/// Row counts across the whole system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub users: u64,
    pub trips: u64,
    pub reservations_pending: u64,
    pub reservations_accepted: u64,
    pub reservations_refused: u64,
    pub reservations_cancelled: u64,
    pub unread_notifications: u64,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            users: self.users,
            trips: self.trips,
            reservations_pending: self.reservations_pending,
            reservations_accepted: self.reservations_accepted,
            reservations_refused: self.reservations_refused,
            reservations_cancelled: self.reservations_cancelled,
            unread_notifications: self.unread_notifications,
        }
    }
}

/// Outcome of a trip or user deletion cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub trips_deleted: u64,
    pub reservations_deleted: u64,
    /// Notifications actually recorded; failed emissions are not counted.
    pub notifications_sent: u64,
}

impl CascadeReport {
    pub fn into_dto(self) -> CascadeReportDto {
        CascadeReportDto {
            trips_deleted: self.trips_deleted,
            reservations_deleted: self.reservations_deleted,
            notifications_sent: self.notifications_sent,
        }
    }
}
