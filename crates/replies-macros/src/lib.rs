use proc_macro::TokenStream;

mod codegen;
mod input;
mod parse;
mod validate;

/// The reply_kinds! macro for declaring the closed set of reply kinds.
///
/// Takes a fieldless enum and generates it together with a bijective name
/// table. Each variant's name is its SCREAMING_SNAKE_CASE spelling, and its
/// identity is its zero-based declaration index.
///
/// # Generated Code
///
/// - The enum itself, deriving `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`,
///   `Hash`, `PartialOrd` and `Ord`
/// - `ALL` and `NAMES` constants in declaration order
/// - `index()`, `name()` and `from_name()` methods
/// - A `Display` impl printing the name
///
/// Duplicate names, reserved names, and variants carrying data are compile
/// errors.
///
/// # Example
///
/// ```ignore
/// reply_kinds! {
///     pub enum ReplyKind {
///         Success,
///         ErrCooldown,
///     }
/// }
///
/// assert_eq!(ReplyKind::ErrCooldown.name(), "ERR_COOLDOWN");
/// assert_eq!(ReplyKind::from_name("SUCCESS"), Some(ReplyKind::Success));
/// ```
#[proc_macro]
pub fn reply_kinds(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as input::MacroInput);

    if let Err(e) = validate::validate(&input) {
        return e.to_compile_error().into();
    }

    codegen::codegen(&input).into()
}
