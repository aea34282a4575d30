//! Behavioural tests for the ticket gate in front of the hotel endpoints.
//!
//! Each scenario drives the real Actix routes over in-memory repositories,
//! so the outcome depends only on the seeded ticket and catalogue.

#[expect(
    dead_code,
    reason = "Shared doubles expose failure injection used only by the endpoint suite."
)]
#[path = "support/hotel_doubles.rs"]
mod hotel_doubles;

use actix_web::http::header::AUTHORIZATION;
use actix_web::test as actix_test;
use hotel_doubles::{Backing, SEEDED_HOTEL, TOKEN, app, ticket, user_id};
use hotels_backend::domain::{NOT_FOUND_MESSAGE, PAYMENT_REQUIRED_MESSAGE, TicketStatus};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::Value;

/// Status and JSON body of one HTTP exchange.
#[derive(Clone)]
struct Exchange {
    status: u16,
    body: Value,
}

#[derive(Default, ScenarioState)]
struct HotelAccessWorld {
    backing: Slot<Backing>,
    responses: Slot<Vec<Exchange>>,
}

impl HotelAccessWorld {
    fn backing(&self) -> Backing {
        self.backing.get().expect("catalogue should be seeded")
    }

    fn hold_ticket(&self, status: TicketStatus, includes_hotel: bool, is_remote: bool) {
        self.backing()
            .tickets
            .insert(user_id(), ticket(status, includes_hotel, is_remote));
    }

    fn get(&self, uri: &str, authenticated: bool) {
        let backing = self.backing();
        let exchange = actix_rt::System::new().block_on(async move {
            let service = actix_test::init_service(app(&backing)).await;
            let mut req = actix_test::TestRequest::get().uri(uri);
            if authenticated {
                req = req.insert_header((AUTHORIZATION, format!("Bearer {TOKEN}")));
            }
            let res = actix_test::call_service(&service, req.to_request()).await;
            let status = res.status().as_u16();
            let bytes = actix_test::read_body(res).await;
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            Exchange { status, body }
        });

        let mut responses = self.responses.get().unwrap_or_default();
        responses.push(exchange);
        self.responses.set(responses);
    }

    fn last(&self) -> Exchange {
        self.responses
            .get()
            .and_then(|responses| responses.last().cloned())
            .expect("a request should have been sent")
    }
}

#[fixture]
fn world() -> HotelAccessWorld {
    HotelAccessWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a hotel catalogue with one hotel of three rooms")]
fn a_hotel_catalogue_with_one_hotel(world: &HotelAccessWorld) {
    world.backing.set(Backing::seeded());
}

#[given("the user holds a reserved ticket with hotel access")]
fn the_user_holds_a_reserved_ticket(world: &HotelAccessWorld) {
    world.hold_ticket(TicketStatus::Reserved, true, false);
}

#[given("the user holds no ticket")]
fn the_user_holds_no_ticket(world: &HotelAccessWorld) {
    let _ = world;
}

#[given("the user holds a paid remote ticket")]
fn the_user_holds_a_paid_remote_ticket(world: &HotelAccessWorld) {
    world.hold_ticket(TicketStatus::Paid, true, true);
}

#[given("the user holds a paid in-person ticket without hotel access")]
fn the_user_holds_a_ticket_without_lodging(world: &HotelAccessWorld) {
    world.hold_ticket(TicketStatus::Paid, false, false);
}

#[given("the user holds a paid in-person ticket with hotel access")]
fn the_user_holds_an_eligible_ticket(world: &HotelAccessWorld) {
    world.hold_ticket(TicketStatus::Paid, true, false);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the client lists hotels without a token")]
fn the_client_lists_hotels_without_a_token(world: &HotelAccessWorld) {
    world.get("/hotels", false);
}

#[when("the client lists hotels")]
fn the_client_lists_hotels(world: &HotelAccessWorld) {
    world.get("/hotels", true);
}

#[when("the client requests the seeded hotel")]
fn the_client_requests_the_seeded_hotel(world: &HotelAccessWorld) {
    world.get(&format!("/hotels/{SEEDED_HOTEL}"), true);
}

#[when("the client requests an unknown hotel")]
fn the_client_requests_an_unknown_hotel(world: &HotelAccessWorld) {
    world.get("/hotels/999", true);
}

#[when("the client requests the seeded hotel twice")]
fn the_client_requests_the_seeded_hotel_twice(world: &HotelAccessWorld) {
    let uri = format!("/hotels/{SEEDED_HOTEL}");
    world.get(&uri, true);
    world.get(&uri, true);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the response status is {status}")]
fn the_response_status_is(world: &HotelAccessWorld, status: u16) {
    assert_eq!(world.last().status, status);
}

#[then("the error message asks the user to pay")]
fn the_error_message_asks_the_user_to_pay(world: &HotelAccessWorld) {
    let body = world.last().body;
    assert_eq!(body["code"], "payment_required");
    assert_eq!(body["message"], PAYMENT_REQUIRED_MESSAGE);
}

#[then("the error message reports no result")]
fn the_error_message_reports_no_result(world: &HotelAccessWorld) {
    let body = world.last().body;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], NOT_FOUND_MESSAGE);
}

#[then("the response lists {count} hotels without rooms")]
fn the_response_lists_hotels_without_rooms(world: &HotelAccessWorld, count: usize) {
    let body = world.last().body;
    let hotels = body.as_array().expect("hotel list should be an array");
    assert_eq!(hotels.len(), count);
    assert!(hotels.iter().all(|hotel| hotel.get("Rooms").is_none()));
}

#[then("the hotel detail has {count} rooms")]
fn the_hotel_detail_has_rooms(world: &HotelAccessWorld, count: usize) {
    let body = world.last().body;
    assert_eq!(body["id"], SEEDED_HOTEL);
    let rooms = body["Rooms"].as_array().expect("Rooms should be an array");
    assert_eq!(rooms.len(), count);
}

#[then("both detail responses are identical")]
fn both_detail_responses_are_identical(world: &HotelAccessWorld) {
    let responses = world.responses.get().expect("responses recorded");
    let [first, second] = responses.as_slice() else {
        panic!("expected exactly two responses, got {}", responses.len());
    };
    assert_eq!(first.status, 200);
    assert_eq!(first.status, second.status);
    assert_eq!(first.body, second.body);
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Missing bearer token is rejected"
)]
fn missing_bearer_token_is_rejected(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Unpaid ticket requires payment"
)]
fn unpaid_ticket_requires_payment(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "User without a ticket sees no result"
)]
fn user_without_a_ticket_sees_no_result(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Remote ticket cannot reach hotels"
)]
fn remote_ticket_cannot_reach_hotels(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Ticket without lodging cannot reach hotels"
)]
fn ticket_without_lodging_cannot_reach_hotels(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Eligible user lists hotels"
)]
fn eligible_user_lists_hotels(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Eligible user sees hotel rooms"
)]
fn eligible_user_sees_hotel_rooms(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Unknown hotel is reported as missing"
)]
fn unknown_hotel_is_reported_as_missing(world: HotelAccessWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hotel_access.feature",
    name = "Hotel detail is stable across requests"
)]
fn hotel_detail_is_stable_across_requests(world: HotelAccessWorld) {
    let _ = world;
}
