//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Only columns the
//! hotel access flow reads are documented; the rest mirror the account and
//! enrollment subsystems that own those tables.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Int4,
        email -> Text,
        password -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Bearer sessions issued at sign-in.
    sessions (id) {
        id -> Int4,
        user_id -> Int4,
        /// Opaque bearer token; unique across sessions.
        token -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Event enrollments, at most one per user.
    enrollments (id) {
        id -> Int4,
        name -> Text,
        cpf -> Text,
        birthday -> Timestamptz,
        phone -> Text,
        user_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ticket categories.
    ticket_types (id) {
        id -> Int4,
        name -> Text,
        price -> Int4,
        is_remote -> Bool,
        includes_hotel -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tickets held by enrollments.
    tickets (id) {
        id -> Int4,
        ticket_type_id -> Int4,
        enrollment_id -> Int4,
        /// One of `RESERVED`, `PAID`, `CANCELLED`.
        status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    hotels (id) {
        id -> Int4,
        name -> Text,
        image -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    rooms (id) {
        id -> Int4,
        name -> Text,
        capacity -> Int4,
        hotel_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(sessions -> users (user_id));
diesel::joinable!(enrollments -> users (user_id));
diesel::joinable!(tickets -> enrollments (enrollment_id));
diesel::joinable!(tickets -> ticket_types (ticket_type_id));
diesel::joinable!(rooms -> hotels (hotel_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    sessions,
    enrollments,
    ticket_types,
    tickets,
    hotels,
    rooms,
);
