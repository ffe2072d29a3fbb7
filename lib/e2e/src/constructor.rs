use alloy::primitives::{Address, U256};

/// Solidity constructor passed to `cargo stylus deploy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    /// Constructor signature, e.g. `constructor(string,address)`.
    pub signature: String,
    /// Stringified constructor arguments, in declaration order.
    pub args: Vec<String>,
}

/// A value that can be passed as a constructor argument on the command line.
pub trait ConstructorArg {
    /// Solidity type name of the argument.
    const ABI: &'static str;

    /// Command line representation of the argument.
    fn to_arg(&self) -> String;
}

macro_rules! impl_constructor_arg {
    ($($ty:ty => $abi:literal),* $(,)?) => {$(
        impl ConstructorArg for $ty {
            const ABI: &'static str = $abi;

            fn to_arg(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_constructor_arg!(
    U256 => "uint256",
    u64 => "uint64",
    bool => "bool",
    String => "string",
    Address => "address",
);

impl ConstructorArg for &str {
    const ABI: &'static str = "string";

    fn to_arg(&self) -> String {
        (*self).to_owned()
    }
}

#[doc(hidden)]
pub fn abi_of<T: ConstructorArg>(_: &T) -> &'static str {
    T::ABI
}

/// Builds a [`Constructor`] from its arguments, deriving the signature from
/// their types.
///
/// ```rust,ignore
/// let ctr = constructor!("NFT721", "NFT");
/// assert_eq!(ctr.signature, "constructor(string,string)");
/// ```
#[macro_export]
macro_rules! constructor {
    () => {{
        $crate::Constructor {
            signature: "constructor()".to_string(),
            args: vec![],
        }
    }};

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let params = vec![
            $crate::constructor::abi_of(&$first)
            $(, $crate::constructor::abi_of(&$rest))*
        ];
        let args = vec![
            $crate::ConstructorArg::to_arg(&$first)
            $(, $crate::ConstructorArg::to_arg(&$rest))*
        ];

        $crate::Constructor {
            signature: format!("constructor({})", params.join(",")),
            args,
        }
    }};
}
