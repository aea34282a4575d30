//! `define_port_error!`: the two-variant error every driven port returns.
//!
//! Adapters report either an unreachable store (`Connection`) or a failed
//! statement (`Query`); services translate the former into
//! `service_unavailable` and the latter into `internal_error`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident for $subject:literal;
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// The backing store could not be reached.
            #[error("{} connection failed: {message}", $subject)]
            Connection { message: String },
            /// The store answered but the statement failed.
            #[error("{} query failed: {message}", $subject)]
            Query { message: String },
        }

        impl $name {
            pub fn connection(message: impl Into<String>) -> Self {
                Self::Connection {
                    message: message.into(),
                }
            }

            pub fn query(message: impl Into<String>) -> Self {
                Self::Query {
                    message: message.into(),
                }
            }
        }
    };
}

pub(crate) use define_port_error;
