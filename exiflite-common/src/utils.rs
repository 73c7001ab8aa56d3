/// Adds conversions `from` and `into` integer to enums
///
/// Takes an enum that must have a `#[repr()]` as first meta field and assigns a
/// value to all enum variants. Values without a variant end up in `Unknown`.
///
/// ```
/// # use exiflite_common::utils::convertible_enum;
/// convertible_enum!(
///     #[repr(u8)]
///     #[derive(Debug, PartialEq)]
///     pub enum Code {
///         Start = 0xD8,
///         End = 0xD9,
///     }
/// );
/// let int: u8 = Code::End.into();
/// assert_eq!(int, 0xD9);
/// assert_eq!(Code::from(0xD8), Code::Start);
/// assert_eq!(Code::from(0x01), Code::Unknown(0x01));
/// ```
#[macro_export]
macro_rules! convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
            Unknown($type)
        }

        impl std::convert::From<$type> for $enum_name {
            fn from(v: $type) -> Self {
                match v {
                    $($variant_value => Self::$variant_name,)*
                    other => Self::Unknown(other),
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> Self {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                    $enum_name::Unknown(other) => other,
                }
            }
        }
    }
}

/// Adds conversions `try_from` and `into` integer to enums
///
/// Like [`convertible_enum`] but without an `Unknown` variant. Converting an
/// unassigned value fails with a generated `Unknown<Name>ValueError`.
///
/// ```
/// # use exiflite_common::utils::maybe_convertible_enum;
/// maybe_convertible_enum!(
///     #[repr(u16)]
///     #[derive(Debug, PartialEq)]
///     pub enum Order {
///         Little = 0x4949,
///         Big = 0x4D4D,
///     }
/// );
/// let int: u16 = Order::Big.into();
/// assert_eq!(int, 0x4D4D);
/// assert_eq!(Order::try_from(0x4949), Ok(Order::Little));
/// assert_eq!(Order::try_from(0x1234), Err(UnknownOrderValueError(0x1234)));
/// ```
#[macro_export]
macro_rules! maybe_convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
        }

        $crate::paste::paste! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct [<Unknown $enum_name ValueError>](pub $type);

            impl std::fmt::Display for [<Unknown $enum_name ValueError>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!("Enum '", stringify!($enum_name), "' has no variant with value '{}'"), self.0)
                }
            }

            impl std::error::Error for [<Unknown $enum_name ValueError>] {}

            impl std::convert::TryFrom<$type> for $enum_name {
                type Error = [<Unknown $enum_name ValueError>];
                fn try_from(v: $type) -> Result<Self, Self::Error> {
                    match v {
                        $($variant_value => Ok(Self::$variant_name),)*
                        other => Err([<Unknown $enum_name ValueError>](other)),
                    }
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> Self {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                }
            }
        }
    }
}

pub use {convertible_enum, maybe_convertible_enum};
