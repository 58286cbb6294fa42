pub mod dispatch;
pub mod menu;
pub mod shared;
pub mod vocabulary;
