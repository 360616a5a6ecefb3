mod fields;
mod kind;
mod reply;
mod value;

pub use fields::Fields;
pub use kind::ReplyKind;
pub use reply::Reply;
pub use value::Value;
