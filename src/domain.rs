//! Domain layer: the check list going in and the results coming out

pub mod check_list;
pub mod check_result;

pub use check_list::CheckList;
pub use check_result::ResultMap;
