use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::Json;
use axum::response::IntoResponse;
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;

use courtbook_api::handlers::booking::expand_booking_row;
use courtbook_api::middleware::error_handling::AppError;
use courtbook_core::errors::CourtError;
use courtbook_core::models::booking::{BookingResponse, CreateBookingRequest};
use courtbook_db::mock::repositories::MockBookingRepo;
use courtbook_db::models::DbBooking;
use courtbook_db::repositories::booking::ReserveOutcome;

use crate::test_utils::{TestContext, bare_detail_row, detail_row};

// Mirrors the create_booking handler against a mock reservation gate.
async fn test_reserve_wrapper(
    repo: &MockBookingRepo,
    request: CreateBookingRequest,
) -> Result<Json<BookingResponse>, AppError> {
    let outcome = repo
        .reserve_slot(request.user_id, request.slot_id)
        .await
        .map_err(CourtError::Database)?;

    let booking = match outcome {
        ReserveOutcome::SlotMissing => {
            return Err(AppError(CourtError::NotFound("Slot not found".to_string())));
        }
        ReserveOutcome::AlreadyBooked => {
            return Err(AppError(CourtError::Conflict(
                "Slot already booked".to_string(),
            )));
        }
        ReserveOutcome::Reserved(booking) => booking,
    };

    let row = repo
        .get_booking_detail(booking.id)
        .await
        .map_err(CourtError::Database)?
        .ok_or_else(|| CourtError::Database(eyre::eyre!("detail row missing")))?;

    Ok(Json(expand_booking_row(row, false)))
}

fn reserved(booking_id: i32, user_id: i32, slot_id: i32) -> ReserveOutcome {
    ReserveOutcome::Reserved(DbBooking {
        id: booking_id,
        user_id,
        slot_id,
        created_at: Utc::now(),
    })
}

#[tokio::test]
async fn test_reserve_success_returns_expanded_booking() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_reserve_slot()
        .with(predicate::eq(7), predicate::eq(42))
        .times(1)
        .returning(|user_id, slot_id| Ok(reserved(10, user_id, slot_id)));
    ctx.booking_repo
        .expect_get_booking_detail()
        .with(predicate::eq(10))
        .times(1)
        .returning(|id| Ok(Some(detail_row(id))));

    let request = CreateBookingRequest {
        user_id: 7,
        slot_id: 42,
    };
    let Json(response) = test_reserve_wrapper(&ctx.booking_repo, request)
        .await
        .expect("reservation should succeed");

    assert_eq!(response.id, 10);
    assert_eq!(response.user_id, 7);
    assert_eq!(response.slot_id, 42);
    assert!(response.slot.is_booked);

    let court = response.slot.court.expect("court expansion present");
    assert_eq!(court.name, "Badminton Court 1");
    let location = court.location.expect("location expansion present");
    assert_eq!(location.name, "Play Arena Bangalore");
}

#[tokio::test]
async fn test_reserve_missing_slot_returns_not_found() {
    let mut repo = MockBookingRepo::new();

    repo.expect_reserve_slot()
        .with(predicate::eq(7), predicate::eq(999_999))
        .times(1)
        .returning(|_, _| Ok(ReserveOutcome::SlotMissing));
    // No booking row may be touched for an absent slot
    repo.expect_get_booking_detail().times(0);

    let request = CreateBookingRequest {
        user_id: 7,
        slot_id: 999_999,
    };
    let error = test_reserve_wrapper(&repo, request)
        .await
        .expect_err("reservation must fail");

    match &error.0 {
        CourtError::NotFound(message) => assert_eq!(message, "Slot not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(
        error.into_response().status(),
        axum::http::StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_reserve_already_booked_returns_conflict() {
    let mut repo = MockBookingRepo::new();

    repo.expect_reserve_slot()
        .times(1)
        .returning(|_, _| Ok(ReserveOutcome::AlreadyBooked));
    repo.expect_get_booking_detail().times(0);

    let request = CreateBookingRequest {
        user_id: 8,
        slot_id: 42,
    };
    let error = test_reserve_wrapper(&repo, request)
        .await
        .expect_err("reservation must fail");

    match &error.0 {
        CourtError::Conflict(message) => assert_eq!(message, "Slot already booked"),
        other => panic!("expected Conflict, got {:?}", other),
    }
    assert_eq!(
        error.into_response().status(),
        axum::http::StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_retry_after_success_is_rejected() {
    let mut repo = MockBookingRepo::new();

    // The gate hands out exactly one success per slot; a retried request
    // observes the post-transition state.
    repo.expect_reserve_slot()
        .times(1)
        .returning(|user_id, slot_id| Ok(reserved(10, user_id, slot_id)));
    repo.expect_reserve_slot()
        .times(1)
        .returning(|_, _| Ok(ReserveOutcome::AlreadyBooked));
    repo.expect_get_booking_detail()
        .times(1)
        .returning(|id| Ok(Some(detail_row(id))));

    let request = CreateBookingRequest {
        user_id: 7,
        slot_id: 42,
    };

    let first = test_reserve_wrapper(&repo, request.clone()).await;
    assert!(first.is_ok());

    let second = test_reserve_wrapper(&repo, request)
        .await
        .expect_err("retry must conflict");
    assert!(matches!(second.0, CourtError::Conflict(_)));
}

#[tokio::test]
async fn test_concurrent_reserves_have_exactly_one_winner() {
    const ATTEMPTS: usize = 8;

    let mut repo = MockBookingRepo::new();

    // The slot's flag, flipped by a single compare-and-set exactly the way
    // the conditional UPDATE serializes writers in the store.
    let flag = Arc::new(AtomicBool::new(false));
    let gate_flag = flag.clone();
    repo.expect_reserve_slot()
        .times(ATTEMPTS)
        .returning(move |user_id, slot_id| {
            if gate_flag
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                Ok(reserved(10, user_id, slot_id))
            } else {
                Ok(ReserveOutcome::AlreadyBooked)
            }
        });
    repo.expect_get_booking_detail()
        .times(1)
        .returning(|id| Ok(Some(detail_row(id))));

    let repo = Arc::new(repo);
    let mut tasks = Vec::with_capacity(ATTEMPTS);
    for attempt in 0..ATTEMPTS {
        let repo = repo.clone();
        tasks.push(tokio::spawn(async move {
            let request = CreateBookingRequest {
                user_id: attempt as i32 + 1,
                slot_id: 42,
            };
            test_reserve_wrapper(&repo, request).await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for task in tasks {
        match task.await.expect("task must not panic") {
            Ok(_) => successes += 1,
            Err(AppError(CourtError::Conflict(_))) => conflicts += 1,
            Err(other) => panic!("unexpected failure: {:?}", other.0),
        }
    }

    assert_eq!(successes, 1, "exactly one attempt may win the slot");
    assert_eq!(conflicts, ATTEMPTS - 1);
    assert!(flag.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_expansion_degrades_without_court_or_location() {
    let mut repo = MockBookingRepo::new();

    repo.expect_reserve_slot()
        .times(1)
        .returning(|user_id, slot_id| Ok(reserved(11, user_id, slot_id)));
    repo.expect_get_booking_detail()
        .times(1)
        .returning(|id| Ok(Some(bare_detail_row(id))));

    let request = CreateBookingRequest {
        user_id: 7,
        slot_id: 42,
    };
    let Json(response) = test_reserve_wrapper(&repo, request)
        .await
        .expect("reservation should succeed without expansions");

    assert!(response.slot.court.is_none());

    // The payload still serializes, with the court key present and null
    let value = serde_json::to_value(&response).expect("payload serializes");
    assert_eq!(value["slot"]["court"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_user_listing_reflects_reservation_outcome() {
    let mut repo = MockBookingRepo::new();

    // User 7 won slot 42, user 8 lost it
    repo.expect_list_bookings_by_user()
        .with(predicate::eq(7))
        .times(1)
        .returning(|_| Ok(vec![detail_row(10)]));
    repo.expect_list_bookings_by_user()
        .with(predicate::eq(8))
        .times(1)
        .returning(|_| Ok(vec![]));

    let winner: Vec<BookingResponse> = repo
        .list_bookings_by_user(7)
        .await
        .expect("listing succeeds")
        .into_iter()
        .map(|row| expand_booking_row(row, false))
        .collect();
    let loser: Vec<BookingResponse> = repo
        .list_bookings_by_user(8)
        .await
        .expect("listing succeeds")
        .into_iter()
        .map(|row| expand_booking_row(row, false))
        .collect();

    assert_eq!(winner.len(), 1);
    assert_eq!(winner[0].slot_id, 42);
    assert!(winner[0].user.is_none());
    assert!(loser.is_empty());
}

#[tokio::test]
async fn test_admin_listing_carries_user_summary() {
    let mut repo = MockBookingRepo::new();

    repo.expect_list_bookings()
        .times(1)
        .returning(|| Ok(vec![detail_row(10)]));

    let listing: Vec<BookingResponse> = repo
        .list_bookings()
        .await
        .expect("listing succeeds")
        .into_iter()
        .map(|row| expand_booking_row(row, true))
        .collect();

    let user = listing[0].user.as_ref().expect("admin listing has user");
    assert_eq!(user.email, "test@courtbook.dev");
}
