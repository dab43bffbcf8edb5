pub mod notice_bar;
pub mod pagination_controls;
pub mod table;

pub use notice_bar::NoticeBar;
pub use pagination_controls::PaginationControls;
