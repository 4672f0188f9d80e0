use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
	Expr, LitStr, Token,
	parse::{Parse, ParseStream, Result},
	punctuated::Punctuated,
};

/// Arguments of `#[context(...)]`: a message literal and the values it
/// formats, exactly as they would be passed to `format!`.
pub struct ContextArgs {
	pub message: LitStr,
	pub values: Punctuated<Expr, Token![,]>,
}

impl ContextArgs {
	/// A `format!` invocation building the context line.
	pub fn format_message(&self) -> TokenStream2 {
		let message = &self.message;
		let values = self.values.iter();
		quote! { ::std::format!(#message #(, #values)*) }
	}
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> Result<Self> {
		let message = input.parse()?;
		let values = if input.is_empty() {
			Punctuated::new()
		} else {
			input.parse::<Token![,]>()?;
			Punctuated::parse_terminated(input)?
		};
		Ok(ContextArgs { message, values })
	}
}
