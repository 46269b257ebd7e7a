//! `define_port_error!` generates the error enums returned by driven ports.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type, so adapters
//! can write `FollowGraphError::query(err.to_string())` or pass a `&str`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum GraphProbeError {
            Unreachable => "store unreachable",
            Query { message: String } => "query failed: {message}",
            Overflow { visited: usize, limit: usize } => "visited {visited} of {limit}",
        }
    }

    #[test]
    fn unit_variant_constructor_takes_no_arguments() {
        assert_eq!(GraphProbeError::unreachable(), GraphProbeError::Unreachable);
        assert_eq!(GraphProbeError::unreachable().to_string(), "store unreachable");
    }

    #[test]
    fn string_fields_accept_borrowed_text() {
        let err = GraphProbeError::query("relation \"user_follows\" does not exist");
        assert_eq!(
            err.to_string(),
            "query failed: relation \"user_follows\" does not exist"
        );
    }

    #[test]
    fn numeric_fields_keep_their_types() {
        let err = GraphProbeError::overflow(10_usize, 8_usize);
        assert_eq!(
            err,
            GraphProbeError::Overflow {
                visited: 10,
                limit: 8
            }
        );
        assert_eq!(err.to_string(), "visited 10 of 8");
    }
}
