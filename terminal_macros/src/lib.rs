extern crate proc_macro;

mod commandsgen;

use proc_macro::TokenStream;
use commandsgen::define_commands_impl;

/// Declares a command table module.
///
/// ```ignore
/// define_commands! {
///     mod commands;
///     "LED : crate::handlers::led,
///      echo: crate::handlers::echo"
/// }
///
/// commands::register(&mut terminal);
/// ```
#[proc_macro]
pub fn define_commands(input: TokenStream) -> TokenStream {
    define_commands_impl(input)
}
