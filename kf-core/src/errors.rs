pub use anyhow::{anyhow, bail, ensure};
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// This macro creates an enum which derives from thiserror::Error, and also
// creates constructor functions in snake case for each of the enum variants.
// Variants can carry one or two String fields; the constructors take &str.
#[macro_export]
macro_rules! err_impl {
    (@hidden $errtype:ident, $item:ident, String) => {
        paste! {
            pub(crate) fn [<$item:snake>](in_: &str) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.into())}
            }
        }
    };

    (@hidden $errtype:ident, $item:ident, String, String) => {
        paste! {
            pub(crate) fn [<$item:snake>](in1: &str, in2: &str) -> anyhow::Error {
                anyhow!{$errtype::$item(in1.into(), in2.into())}
            }
        }
    };

    ($errtype:ident,
        $(#[$errinfo:meta] $item:ident($($dtype:ident),+),)+
    ) => {
        #[derive(Debug, Error)]
        pub(crate) enum $errtype {
            $(#[$errinfo] $item($($dtype),+)),+
        }

        impl $errtype {
            $(err_impl! {@hidden $errtype, $item, $($dtype),+})+
        }
    };
}

pub use err_impl;
