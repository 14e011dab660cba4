use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ServerError;

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[message($variant_message:literal)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($variant_message)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(UserError {
    #[code(StatusCode::BAD_REQUEST)]
    #[message("username is required")]
    MissingUsername,
});

response_error!(ExerciseError {
    #[code(StatusCode::BAD_REQUEST)]
    #[message("missing required field `{field}`")]
    MissingField { field: String },
    #[code(StatusCode::BAD_REQUEST)]
    #[message("duration `{value}` is not a whole number of minutes")]
    InvalidNumber { value: String },
    #[code(StatusCode::NOT_FOUND)]
    #[message("no user with id `{id}`")]
    UnknownUser { id: String },
});

response_error!(LogError {
    #[code(StatusCode::NOT_FOUND)]
    #[message("no user with id `{id}`")]
    UnknownUser { id: String },
});
