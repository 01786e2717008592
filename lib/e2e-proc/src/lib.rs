//! Procedural macros for end-to-end tests.

use proc_macro::TokenStream;


/// Defines an end-to-end test that gets funded test accounts injected
/// through its arguments.
///
/// Every argument is created with `<Type>::new().await?` before the body
/// runs, and the function becomes a `#[tokio::test]`.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn deploys_token(alice: Account) -> Result<()> {
///     let wallet =
///         RpcWallet::new(alice.url().clone(), Some(alice.signer.clone()));
///     let session = connect(Some(&wallet)).await?;
///     assert_eq!(session.account, Some(alice.address()));
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(attr, input)
}
