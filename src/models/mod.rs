pub mod member;
pub mod message;

pub use member::{Member, MemberPublic};
pub use message::{MessageAuthor, MessageDto, MessageRecord};
