//! # Command Table Macro
//!
//! Generates a module that registers a fixed list of commands on a
//! `terminal_core::SerialTerminal`.
//!
//! ## Macro Input Format
//! - `mod <ident>;` names the generated module.
//! - Optional `terminal = <path>;` points at the `terminal_core` crate when it is
//!   re-exported under another name (default: `::terminal_core`).
//! - A string literal of comma separated `name: path::to::handler` pairs.
//!
//! ```ignore
//! define_commands! {
//!     mod commands;
//!     "LED : crate::handlers::led,
//!      echo: crate::handlers::echo,"
//! }
//! ```
//!
//! ## Generated items
//! - `NAMES`: command names in declaration order.
//! - `NUM_COMMANDS`: number of commands.
//! - `register(&mut SerialTerminal<..>)`: adds every command, in declaration order.
//!
//! Handlers are plain functions `fn(&mut Arguments<'_>)`. Names must be non-empty
//! printable ASCII without spaces; anything else is rejected at compile time.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Ident, LitStr, Result, Token, parse::Parse, parse_macro_input};

/// Parsed macro input: `mod <ident>;`, an optional crate path, then the table body.
struct CommandMacroInput {
    mod_ident: Ident,                // Module identifier for the generated table
    terminal_path: Option<syn::Path>, // Path to the terminal_core crate
    body: LitStr,                    // Macro input body as string
}

impl Parse for CommandMacroInput {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        // Expect: `mod <ident>;`
        input.parse::<Token![mod]>()?;
        let mod_ident: Ident = input.parse()?;
        input.parse::<Token![;]>()?;

        // Optionally parse terminal = <path>;
        let terminal_path = if input.peek(syn::Ident) && input.peek2(Token![=]) {
            let key: Ident = input.parse()?;
            if key == "terminal" {
                input.parse::<Token![=]>()?;
                let path: syn::Path = input.parse()?;
                input.parse::<Token![;]>()?;
                Some(path)
            } else {
                return Err(syn::Error::new(key.span(), "Unexpected identifier, expected 'terminal'"));
            }
        } else {
            None
        };

        let body: LitStr = input.parse()?;
        Ok(CommandMacroInput { mod_ident, terminal_path, body })
    }
}

/// One `name: path` pair of the table body.
struct CommandDecl {
    name: String,
    handler: syn::Path,
}

/// Checks a command name: non-empty printable ASCII, no spaces.
fn validate_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("command name is empty".into());
    }
    if let Some(bad) = name.chars().find(|c| !c.is_ascii_graphic()) {
        return Err(format!("command name `{}` contains invalid character {:?}", name, bad));
    }
    Ok(())
}

/// Splits the table body into declarations, keeping declaration order.
fn parse_table(body: &str) -> std::result::Result<Vec<CommandDecl>, String> {
    let mut decls = Vec::new();
    for group in body.split(',') {
        let grp = group.trim();
        if grp.is_empty() {
            continue;
        }
        let (name, path) = grp
            .split_once(':')
            .map(|(n, p)| (n.trim(), p.trim()))
            .ok_or_else(|| format!("expected `name: path`, found `{}`", grp))?;
        validate_name(name)?;
        if path.is_empty() {
            return Err(format!("command `{}` has no handler", name));
        }
        let handler = syn::parse_str::<syn::Path>(path)
            .map_err(|e| format!("invalid handler path `{}` for `{}`: {}", path, name, e))?;
        decls.push(CommandDecl { name: name.to_string(), handler });
    }
    if decls.is_empty() {
        return Err("command table is empty".into());
    }
    Ok(decls)
}

/// Generate the command table module.
pub fn define_commands_impl(input: TokenStream) -> TokenStream {
    let CommandMacroInput { mod_ident, terminal_path, body } = parse_macro_input!(input as CommandMacroInput);

    let decls = match parse_table(&body.value()) {
        Ok(decls) => decls,
        Err(msg) => return syn::Error::new(body.span(), msg).to_compile_error().into(),
    };

    let terminal = match terminal_path {
        Some(path) => quote! { #path },
        None => quote! { ::terminal_core },
    };

    let names: Vec<LitStr> = decls
        .iter()
        .map(|d| LitStr::new(&d.name, Span::call_site()))
        .collect();
    let handlers: Vec<&syn::Path> = decls.iter().map(|d| &d.handler).collect();
    let num_commands = decls.len();

    let out = quote! {
        #[allow(non_snake_case, unused_imports)]
        pub mod #mod_ident {

            //! Generated by `define_commands!`.

            /// Command names in declaration order.
            pub static NAMES: [&'static str; #num_commands] = [ #( #names ),* ];

            /// Number of commands in the table.
            pub const NUM_COMMANDS: usize = #num_commands;

            /// Adds every command of the table to `terminal`, in declaration order.
            pub fn register<'h, T, const RX: usize, const CN: usize>(
                terminal: &mut #terminal::SerialTerminal<'h, T, RX, CN>,
            )
            where
                T: #terminal::Transport,
            {
                #( terminal.add_command(#names, #handlers); )*
            }
        }
    };

    out.into()
}

// ==================== TESTS =======================
