//! Procedural macros for the `e2e` crate.
use proc_macro::TokenStream;


/// Defines an end-to-end contract test that receives freshly funded
/// accounts through its arguments.
///
/// Every argument must be a type with an `async fn new() -> eyre::Result<Self>`
/// constructor, typically `e2e::Account`.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn mints(alice: Account) -> eyre::Result<()> {
///     let contract_addr = deploy(&alice).await?;
///     let contract = Nft721::new(contract_addr, &alice.wallet);
///
///     let _ = watch!(contract.mint("ipfs://a".to_owned()))?;
///
///     let balance = contract.balanceOf(alice.address()).call().await?;
///     assert_eq!(balance, uint!(1_U256));
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(attr, input)
}
