pub mod convert;
pub mod list;

pub use convert::{ConvertCommandArgs, execute_convert, write_suite};
pub use list::execute_list;
