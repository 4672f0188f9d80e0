//! Procedural macros shared by the quadzoom crates.
//!
//! [`macro@context`] attaches a formatted context line to every error that
//! leaves a function returning `anyhow::Result`. The arguments follow
//! `format!` and may refer to the function's parameters.
//!
//! ```ignore
//! #[context("fetching tile {quadkey}")]
//! async fn fetch_tile(&self, quadkey: &QuadKey) -> Result<Blob> { ... }
//! ```
//!
//! The message is only formatted when the function fails.

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::{Block, ItemFn, ReturnType, Type, parse_macro_input, parse2};

#[proc_macro_attribute]
pub fn context(attr: TokenStream, item: TokenStream) -> TokenStream {
	let args = parse_macro_input!(attr as ContextArgs);
	let mut function = parse_macro_input!(item as ItemFn);
	match with_context(&mut function, &args) {
		Ok(()) => function.into_token_stream().into(),
		Err(err) => err.to_compile_error().into(),
	}
}

/// Replaces the body of `function` by one that evaluates the original body
/// and adds the context line to its error.
fn with_context(function: &mut ItemFn, args: &ContextArgs) -> syn::Result<()> {
	let ReturnType::Type(_, output) = &function.sig.output else {
		return Err(syn::Error::new_spanned(
			&function.sig,
			"#[context] needs a function that returns anyhow::Result",
		));
	};

	let outcome = Ident::new("outcome", Span::mixed_site());
	let evaluate = evaluate_body(function.sig.asyncness.is_some(), output, &function.block);
	let message = args.format_message();
	let block: Block = parse2(quote! {{
		let #outcome: #output = #evaluate;
		::anyhow::Context::with_context(#outcome, || #message)
	}})?;

	*function.block = block;
	Ok(())
}

/// An expression yielding what `body` returns. `return` and `?` inside the
/// body leave this expression instead of the function.
fn evaluate_body(is_async: bool, output: &Type, body: &Block) -> TokenStream2 {
	if is_async {
		quote! { async #body.await }
	} else {
		quote! { (|| -> #output #body)() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use syn::parse_quote;

	fn expand(args: &str, mut function: ItemFn) -> syn::Result<String> {
		let args: ContextArgs = syn::parse_str(args)?;
		with_context(&mut function, &args)?;
		Ok(function.into_token_stream().to_string())
	}

	#[test]
	fn sync_body_runs_in_a_closure() {
		let code = expand(
			r#""parsing '{text}'""#,
			parse_quote! {
				fn parse(text: &str) -> Result<u8> { Ok(text.parse()?) }
			},
		)
		.unwrap();
		assert!(code.contains("(|| -> Result < u8 > {"), "{code}");
		assert!(code.contains(":: anyhow :: Context :: with_context"), "{code}");
		assert!(!code.contains(". await"), "{code}");
	}

	#[test]
	fn async_body_is_awaited() {
		let code = expand(
			r#""reading {}", name"#,
			parse_quote! {
				async fn read(name: &str) -> Result<Vec<u8>> { Ok(Vec::new()) }
			},
		)
		.unwrap();
		assert!(code.starts_with("async fn read"), "{code}");
		assert!(code.contains("async {"), "{code}");
		assert!(code.contains(". await"), "{code}");
	}

	#[test]
	fn function_without_result_is_rejected() {
		let err = expand(r#""nothing""#, parse_quote! { fn nothing() {} }).unwrap_err();
		assert_eq!(err.to_string(), "#[context] needs a function that returns anyhow::Result");
	}
}
