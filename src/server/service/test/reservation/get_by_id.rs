use super::*;

/// Tests who may view a reservation.
///
/// Expected: Ok for the passenger, the driver and an admin; Err(Forbidden) otherwise
#[tokio::test]
async fn visible_to_parties_and_admins_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let (passenger, reservation) =
        factory::helpers::create_passenger_with_reservation(db, trip.id, ReservationStatus::Pending)
            .await?;
    let admin = factory::user::create_admin(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = ReservationService::new(db);
    for allowed in [passenger, driver, admin] {
        let found = service.get_by_id(reservation.id, &caller(allowed)).await?;
        assert_eq!(found.trip.id, trip.id);
    }

    let result = service.get_by_id(reservation.id, &caller(stranger)).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
