pub use user_record::*;

mod user_record;
