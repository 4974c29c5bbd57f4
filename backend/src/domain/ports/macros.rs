//! Macro for declaring port error enums.
//!
//! Every variant carries named fields and a `thiserror` message. One
//! snake_case constructor is generated per variant, taking `impl Into<T>`
//! for each field so adapters can pass `&str` or owned values alike.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        ::paste::paste! {
            impl $name {
                $(
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum SamplePortError {
            Refused { message: String } => "connection refused: {message}",
            TimedOut { after_ms: u64 } => "request timed out after {after_ms}ms",
            Rejected { table: String, attempts: u32 } => "{table} rejected after {attempts} attempts",
        }
    }

    #[rstest]
    fn string_fields_accept_borrowed_text() {
        let err = SamplePortError::refused("pool exhausted");

        assert_eq!(
            err,
            SamplePortError::Refused {
                message: "pool exhausted".to_owned()
            }
        );
        assert_eq!(err.to_string(), "connection refused: pool exhausted");
    }

    #[rstest]
    fn multi_word_variants_use_snake_case_constructors() {
        let err = SamplePortError::timed_out(250_u64);

        assert_eq!(err.to_string(), "request timed out after 250ms");
    }

    #[rstest]
    fn mixed_fields_keep_declaration_order() {
        let err = SamplePortError::rejected("users", 3_u32);

        assert_eq!(err.to_string(), "users rejected after 3 attempts");
    }
}
