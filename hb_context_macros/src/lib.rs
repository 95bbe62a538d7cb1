//! Attribute macros for hb_context. Use them through the `hb_context` crate.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, quote_spanned};
use syn::fold::{self, Fold};
use syn::spanned::Spanned;
use syn::{parse_macro_input, parse_quote, Expr, ExprClosure, ItemFn, LitStr, ReturnType, Type};

/// Holds what every rewritten error exit needs: the message and the function name.
struct Context {
    msg: LitStr,
    function: String,
}

impl Context {
    fn new(msg: LitStr, function: String) -> Self {
        Context { msg, function }
    }

    /// `result.map_err(...)` wrapping the error in a frame located at `span`.
    fn wrap(&self, result: TokenStream2, span: Span) -> TokenStream2 {
        let m = &self.msg;
        let function = &self.function;
        quote_spanned! {span=>
            (#result).map_err(|er| ::hb_context::ChainedError::wrap_at(
                ::std::format!(#m),
                0,
                ::hb_context::Location::at_source(::std::file!(), ::std::line!(), #function),
                {
                    use ::hb_context::cause::dispatch::{ChainedCause as _, ForeignCause as _};
                    ::hb_context::cause::dispatch::CauseOf(er).into_cause()
                },
            ))
        }
    }
}

/// `return Ok(..)` has no error to wrap and its error type could not be inferred.
fn is_ok_call(e: &Expr) -> bool {
    match e {
        Expr::Call(call) => match call.func.as_ref() {
            Expr::Path(p) => p.path.segments.last().map_or(false, |s| s.ident == "Ok"),
            _ => false,
        },
        Expr::Paren(p) => is_ok_call(&p.expr),
        _ => false,
    }
}

impl Fold for Context {
    fn fold_expr(&mut self, e: Expr) -> Expr {
        match e {
            Expr::Return(mut rexpr) => {
                if let Some(ex) = rexpr.expr.take() {
                    let ex = self.fold_expr(*ex);
                    if is_ok_call(&ex) {
                        rexpr.expr = Some(Box::new(ex));
                    } else {
                        let span = ex.span();
                        let wrapped = self.wrap(quote!(#ex), span);
                        rexpr.expr = Some(parse_quote!(#wrapped));
                    }
                }
                Expr::Return(rexpr)
            }
            Expr::Try(mut texpr) => {
                let ex = self.fold_expr(*texpr.expr);
                let span = texpr.question_token.span();
                let wrapped = self.wrap(quote!(#ex), span);
                texpr.expr = parse_quote!(#wrapped);
                Expr::Try(texpr)
            }
            Expr::Async(a) => Expr::Async(a),
            _ => fold::fold_expr(self, e),
        }
    }

    // `?` and `return` inside these belong to a different function.
    fn fold_expr_closure(&mut self, c: ExprClosure) -> ExprClosure {
        c
    }

    fn fold_item_fn(&mut self, f: ItemFn) -> ItemFn {
        f
    }
}

/// Adds a frame of context to every error that leaves the function.
///
/// The function must return `Result<T, ChainedError>`. Every `?`, every
/// `return` and the tail expression get their error wrapped in a frame
/// carrying the message, the function's name and the file and line of the
/// exit. Errors that are not a `ChainedError` only need `Display`; their
/// text is merged into the message. The message may name the function's
/// arguments in `{}`.
///
/// ```ignore
/// #[context("could not read '{path}'")]
/// fn read(path: &str) -> Result<String, ChainedError> {
///     std::fs::read_to_string(path)?
/// }
/// ```
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ItemFn);
    let rettype: Box<Type> = if let ReturnType::Type(_, r) = &input.sig.output {
        r.clone()
    } else {
        return TokenStream::from(quote! {#input});
    };
    let msg = parse_macro_input!(args as LitStr);
    let mut context = Context::new(msg, input.sig.ident.to_string());

    let mut output = input.clone();
    output.block = Box::new(context.fold_block(*input.block));
    let block = &output.block;
    let tail = context.wrap(quote!(ret), input.sig.ident.span());
    output.block = parse_quote! {
        {
            #[allow(unreachable_code)]
            let ret: #rettype = #block;
            #tail
        }
    };
    TokenStream::from(quote! {#output})
}
