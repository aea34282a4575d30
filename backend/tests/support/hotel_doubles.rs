//! In-memory repository doubles for the hotel access suites.
//!
//! The doubles hold their rows behind `Arc<Mutex<_>>` so a test can seed or
//! reconfigure them after the application has taken its own clones.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hotels_backend::Trace;
use hotels_backend::domain::ports::{
    HotelRepository, HotelRepositoryError, SessionRepository, SessionRepositoryError,
    TicketRepository, TicketRepositoryError,
};
use hotels_backend::domain::{
    HotelAccessService, Hotel, HotelId, HotelWithRooms, Room, Ticket, TicketStatus, TicketType,
    UserId,
};
use hotels_backend::inbound::http::hotels;
use hotels_backend::inbound::http::state::HttpState;

pub(crate) const TOKEN: &str = "session-token-ana";
pub(crate) const SEEDED_HOTEL: i32 = 1;

pub(crate) fn user_id() -> UserId {
    UserId::new(7).expect("valid user id")
}

pub(crate) fn ticket(status: TicketStatus, includes_hotel: bool, is_remote: bool) -> Ticket {
    Ticket {
        id: 70,
        status,
        ticket_type: TicketType {
            includes_hotel,
            is_remote,
        },
    }
}

/// Ticket lookup keyed by owner.
#[derive(Clone, Default)]
pub(crate) struct InMemoryTicketRepository {
    tickets: Arc<Mutex<HashMap<UserId, Ticket>>>,
    failure: Arc<Mutex<Option<TicketRepositoryError>>>,
}

impl InMemoryTicketRepository {
    pub(crate) fn insert(&self, owner: UserId, ticket: Ticket) {
        self.tickets
            .lock()
            .expect("tickets lock")
            .insert(owner, ticket);
    }

    pub(crate) fn fail_with(&self, error: TicketRepositoryError) {
        *self.failure.lock().expect("ticket failure lock") = Some(error);
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        if let Some(error) = self.failure.lock().expect("ticket failure lock").clone() {
            return Err(error);
        }
        Ok(self
            .tickets
            .lock()
            .expect("tickets lock")
            .get(&user_id)
            .copied())
    }
}

/// Hotel catalogue that counts every read it serves.
#[derive(Clone, Default)]
pub(crate) struct InMemoryHotelRepository {
    hotels: Arc<Mutex<Vec<HotelWithRooms>>>,
    reads: Arc<AtomicUsize>,
}

impl InMemoryHotelRepository {
    pub(crate) fn insert(&self, entry: HotelWithRooms) {
        self.hotels.lock().expect("hotels lock").push(entry);
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .hotels
            .lock()
            .expect("hotels lock")
            .iter()
            .map(|entry| entry.hotel.clone())
            .collect())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .hotels
            .lock()
            .expect("hotels lock")
            .iter()
            .find(|entry| entry.hotel.id == hotel_id)
            .cloned())
    }
}

/// Bearer token table.
#[derive(Clone, Default)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<String, UserId>>>,
}

impl InMemorySessionRepository {
    pub(crate) fn insert(&self, token: &str, owner: UserId) {
        self.sessions
            .lock()
            .expect("sessions lock")
            .insert(token.to_owned(), owner);
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_user_by_token(
        &self,
        token: &str,
    ) -> Result<Option<UserId>, SessionRepositoryError> {
        Ok(self
            .sessions
            .lock()
            .expect("sessions lock")
            .get(token)
            .copied())
    }
}

/// Hotel with `room_count` rooms, timestamps fixed at 2024-03-01T09:30:00Z.
pub(crate) fn hotel_with_rooms(id: i32, name: &str, room_count: i32) -> HotelWithRooms {
    let at = Utc
        .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    let hotel_id = HotelId::new(id).expect("valid hotel id");
    let rooms = (1..=room_count)
        .map(|n| Room {
            id: id * 100 + n,
            name: format!("Room {n}"),
            capacity: n,
            hotel_id,
            created_at: at,
            updated_at: at,
        })
        .collect();
    HotelWithRooms {
        hotel: Hotel {
            id: hotel_id,
            name: name.to_owned(),
            image: format!("https://img.example/{id}.png"),
            created_at: at,
            updated_at: at,
        },
        rooms,
    }
}

/// Repositories shared between a test and the app under test.
#[derive(Clone, Default)]
pub(crate) struct Backing {
    pub(crate) tickets: InMemoryTicketRepository,
    pub(crate) hotels: InMemoryHotelRepository,
    pub(crate) sessions: InMemorySessionRepository,
}

impl Backing {
    /// Seeds the default session and one hotel with three rooms.
    pub(crate) fn seeded() -> Self {
        let backing = Self::default();
        backing.sessions.insert(TOKEN, user_id());
        backing
            .hotels
            .insert(hotel_with_rooms(SEEDED_HOTEL, "Driven Resort", 3));
        backing
    }

    pub(crate) fn http_state(&self) -> HttpState {
        let service = HotelAccessService::new(
            Arc::new(self.tickets.clone()),
            Arc::new(self.hotels.clone()),
        );
        HttpState::new(Arc::new(service), Arc::new(self.sessions.clone()))
    }
}

/// Hotel routes behind the trace middleware, ready for `init_service`.
pub(crate) fn app(
    backing: &Backing,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::new(backing.http_state()))
        .wrap(Trace)
        .configure(hotels::configure)
}
