//! Helper macro for generating port error enums with `Into` constructors.

/// Declare a `thiserror` enum whose struct variants each get a snake_case
/// constructor accepting `impl Into<T>` for every field, plus a `kind()`
/// accessor naming the variant.
macro_rules! define_port_error {
    (@ctor $name:ident $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $name:ident $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $name
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
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $name $variant () () $( $field : $ty, )*);
            )*

            /// Snake_case name of the variant, used as a structured log field.
            pub fn kind(&self) -> &'static str {
                ::paste::paste! {
                    match self {
                        $( Self::$variant { .. } => stringify!([<$variant:snake>]), )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SamplePortError {
            Refused { message: String } => "refused: {message}",
            Throttled { retry_after: u32 } => "throttled for {retry_after}s",
            Rejected { message: String, status: u16 } => "rejected ({status}): {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::refused("connection reset");
        assert_eq!(err.to_string(), "refused: connection reset");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = SamplePortError::throttled(30_u32);
        assert_eq!(err.to_string(), "throttled for 30s");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::rejected("bad filter", 422_u16);
        assert_eq!(err.to_string(), "rejected (422): bad filter");
    }

    #[test]
    fn kind_names_each_variant_in_snake_case() {
        assert_eq!(SamplePortError::refused("x").kind(), "refused");
        assert_eq!(SamplePortError::rejected("x", 400_u16).kind(), "rejected");
    }
}
